use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use chrono::Utc;
use crewseat_catalog::Seat;
use tracing::{info, warn};

use crate::allocator;
use crate::models::{NewVoucher, SeatTriple, Slot, VoucherAssignment};
use crate::repository::{RepositoryError, VoucherRepository};
use crate::validation::{validate_aircraft, validate_date};
use crate::{CoreError, CoreResult};

/// Outcome of replacing one seat on an existing voucher
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeatRegeneration {
    pub new_seat: Seat,
    pub seats: SeatTriple,
}

type VoucherKey = (String, String);

/// One async mutex per flight number and date, dropped once nobody holds it
#[derive(Default)]
struct VoucherLocks {
    locks: Mutex<HashMap<VoucherKey, Arc<tokio::sync::Mutex<()>>>>,
}

impl VoucherLocks {
    fn lock_for(&self, key: &VoucherKey) -> Arc<tokio::sync::Mutex<()>> {
        let mut locks = self.locks.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        locks.entry(key.clone()).or_default().clone()
    }

    fn release(&self, key: &VoucherKey) {
        let mut locks = self.locks.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        // Only the map's own handle left
        if locks.get(key).is_some_and(|lock| Arc::strong_count(lock) == 1) {
            locks.remove(key);
        }
    }
}

/// Issues vouchers and regenerates their seats on top of a `VoucherRepository`.
///
/// The existence check and the insert are not atomic; the repository's
/// uniqueness on flight number and date settles concurrent issues.
/// Seat regeneration reads, draws and writes under a per-voucher lock, so
/// concurrent regenerations in this process always see each other's writes.
#[derive(Clone)]
pub struct VoucherService {
    repo: Arc<dyn VoucherRepository>,
    locks: Arc<VoucherLocks>,
}

impl VoucherService {
    pub fn new(repo: Arc<dyn VoucherRepository>) -> Self {
        Self {
            repo,
            locks: Arc::new(VoucherLocks::default()),
        }
    }

    pub async fn check(&self, flight_number: &str, flight_date: &str) -> CoreResult<bool> {
        require(&[("flightNumber", flight_number), ("date", flight_date)])?;
        Ok(self.repo.exists(flight_number, flight_date).await?)
    }

    pub async fn generate(&self, voucher: &NewVoucher) -> CoreResult<VoucherAssignment> {
        require(&[
            ("name", voucher.crew_name.as_str()),
            ("id", voucher.crew_id.as_str()),
            ("flightNumber", voucher.flight_number.as_str()),
            ("date", voucher.flight_date.as_str()),
            ("aircraft", voucher.aircraft_type.as_str()),
        ])?;
        validate_aircraft(&voucher.aircraft_type)?;
        validate_date(&voucher.flight_date)?;

        if self.repo.exists(&voucher.flight_number, &voucher.flight_date).await? {
            warn!(
                "Voucher already issued for {} on {}",
                voucher.flight_number, voucher.flight_date
            );
            return Err(already_exists(&voucher.flight_number, &voucher.flight_date));
        }

        let seats = allocator::generate_triple(&voucher.aircraft_type)?;

        let assignment = self
            .repo
            .insert(voucher, &seats, Utc::now())
            .await
            .map_err(|e| match e {
                RepositoryError::Duplicate { flight_number, flight_date } => {
                    CoreError::VoucherExists { flight_number, flight_date }
                }
                other => CoreError::Repository(other),
            })?;

        info!(
            flight = %assignment.flight_number,
            date = %assignment.flight_date,
            crew_id = %assignment.crew_id,
            "Issued voucher with seats {:?}",
            assignment.seats.to_labels()
        );

        Ok(assignment)
    }

    pub async fn get(&self, flight_number: &str, flight_date: &str) -> CoreResult<Option<VoucherAssignment>> {
        require(&[("flightNumber", flight_number), ("date", flight_date)])?;
        Ok(self.repo.find(flight_number, flight_date).await?)
    }

    pub async fn regenerate_seat(
        &self,
        flight_number: &str,
        flight_date: &str,
        position: i64,
    ) -> CoreResult<SeatRegeneration> {
        require(&[("flightNumber", flight_number), ("date", flight_date)])?;
        let slot = Slot::new(position)?;

        let key = (flight_number.to_string(), flight_date.to_string());
        let lock = self.locks.lock_for(&key);
        let outcome = {
            let _guard = lock.lock().await;
            self.regenerate_locked(flight_number, flight_date, slot).await
        };
        drop(lock);
        self.locks.release(&key);

        outcome
    }

    async fn regenerate_locked(
        &self,
        flight_number: &str,
        flight_date: &str,
        slot: Slot,
    ) -> CoreResult<SeatRegeneration> {
        let voucher = self
            .repo
            .find(flight_number, flight_date)
            .await?
            .ok_or_else(|| not_found(flight_number, flight_date))?;

        let new_seat = allocator::regenerate_one(&voucher.aircraft_type, &voucher.seats, slot)?;

        self.repo
            .update_seat(flight_number, flight_date, slot, new_seat)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound { flight_number, flight_date } => {
                    CoreError::VoucherNotFound { flight_number, flight_date }
                }
                other => CoreError::Repository(other),
            })?;

        let mut seats = voucher.seats;
        seats.replace(slot, new_seat);

        info!(
            flight = %flight_number,
            date = %flight_date,
            slot = slot.position(),
            "Regenerated seat {} -> {}",
            voucher.seats.get(slot),
            new_seat
        );

        Ok(SeatRegeneration { new_seat, seats })
    }
}

fn require(fields: &[(&str, &str)]) -> CoreResult<()> {
    let missing: Vec<&str> = fields
        .iter()
        .filter(|(_, value)| value.is_empty())
        .map(|(name, _)| *name)
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(CoreError::MissingFields(missing.join(", ")))
    }
}

fn already_exists(flight_number: &str, flight_date: &str) -> CoreError {
    CoreError::VoucherExists {
        flight_number: flight_number.to_string(),
        flight_date: flight_date.to_string(),
    }
}

fn not_found(flight_number: &str, flight_date: &str) -> CoreError {
    CoreError::VoucherNotFound {
        flight_number: flight_number.to_string(),
        flight_date: flight_date.to_string(),
    }
}
