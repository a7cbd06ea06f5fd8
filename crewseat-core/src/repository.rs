use async_trait::async_trait;
use chrono::{DateTime, Utc};
use crewseat_catalog::Seat;

use crate::models::{NewVoucher, SeatTriple, Slot, VoucherAssignment};

#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("Voucher already exists for flight {flight_number} on {flight_date}")]
    Duplicate { flight_number: String, flight_date: String },
    #[error("Voucher not found for flight {flight_number} on {flight_date}")]
    NotFound { flight_number: String, flight_date: String },
    #[error("Storage backend failure: {0}")]
    Backend(String),
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Repository trait for voucher persistence, keyed by flight number and date
#[async_trait]
pub trait VoucherRepository: Send + Sync {
    async fn exists(&self, flight_number: &str, flight_date: &str) -> RepositoryResult<bool>;

    async fn find(
        &self,
        flight_number: &str,
        flight_date: &str,
    ) -> RepositoryResult<Option<VoucherAssignment>>;

    /// Fails with `Duplicate` if a voucher for the same flight and date is already stored
    async fn insert(
        &self,
        voucher: &NewVoucher,
        seats: &SeatTriple,
        created_at: DateTime<Utc>,
    ) -> RepositoryResult<VoucherAssignment>;

    async fn update_seat(
        &self,
        flight_number: &str,
        flight_date: &str,
        slot: Slot,
        seat: Seat,
    ) -> RepositoryResult<()>;
}
