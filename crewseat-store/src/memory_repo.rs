use async_trait::async_trait;
use chrono::{DateTime, Utc};
use crewseat_catalog::Seat;
use crewseat_core::models::{NewVoucher, SeatTriple, Slot, VoucherAssignment};
use crewseat_core::repository::{RepositoryError, RepositoryResult, VoucherRepository};
use std::collections::HashMap;
use tokio::sync::RwLock;

type VoucherKey = (String, String);

fn key(flight_number: &str, flight_date: &str) -> VoucherKey {
    (flight_number.to_string(), flight_date.to_string())
}

/// Process-local voucher store; the write lock makes check-and-insert atomic
#[derive(Default)]
pub struct InMemoryVoucherRepository {
    vouchers: RwLock<HashMap<VoucherKey, VoucherAssignment>>,
}

impl InMemoryVoucherRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl VoucherRepository for InMemoryVoucherRepository {
    async fn exists(&self, flight_number: &str, flight_date: &str) -> RepositoryResult<bool> {
        Ok(self.vouchers.read().await.contains_key(&key(flight_number, flight_date)))
    }

    async fn find(
        &self,
        flight_number: &str,
        flight_date: &str,
    ) -> RepositoryResult<Option<VoucherAssignment>> {
        Ok(self.vouchers.read().await.get(&key(flight_number, flight_date)).cloned())
    }

    async fn insert(
        &self,
        voucher: &NewVoucher,
        seats: &SeatTriple,
        created_at: DateTime<Utc>,
    ) -> RepositoryResult<VoucherAssignment> {
        let mut vouchers = self.vouchers.write().await;
        let key = key(&voucher.flight_number, &voucher.flight_date);

        if vouchers.contains_key(&key) {
            return Err(RepositoryError::Duplicate {
                flight_number: voucher.flight_number.clone(),
                flight_date: voucher.flight_date.clone(),
            });
        }

        let assignment = VoucherAssignment {
            id: vouchers.len() as i64 + 1,
            crew_name: voucher.crew_name.clone(),
            crew_id: voucher.crew_id.clone(),
            flight_number: voucher.flight_number.clone(),
            flight_date: voucher.flight_date.clone(),
            aircraft_type: voucher.aircraft_type.clone(),
            seats: *seats,
            created_at,
        };
        vouchers.insert(key, assignment.clone());

        Ok(assignment)
    }

    async fn update_seat(
        &self,
        flight_number: &str,
        flight_date: &str,
        slot: Slot,
        seat: Seat,
    ) -> RepositoryResult<()> {
        let mut vouchers = self.vouchers.write().await;
        let voucher = vouchers
            .get_mut(&key(flight_number, flight_date))
            .ok_or_else(|| RepositoryError::NotFound {
                flight_number: flight_number.to_string(),
                flight_date: flight_date.to_string(),
            })?;

        voucher.seats.replace(slot, seat);
        Ok(())
    }
}
