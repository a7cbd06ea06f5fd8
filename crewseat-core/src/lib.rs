pub mod allocator;
pub mod models;
pub mod repository;
pub mod service;
pub mod validation;

use crewseat_catalog::CatalogError;
use repository::RepositoryError;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("invalid aircraft type: {0}")]
    UnknownAircraft(String),
    #[error("invalid date format: {0} (expected YYYY-MM-DD)")]
    InvalidDate(String),
    #[error("not enough seats to draw from: requested {requested}, available {available}")]
    InsufficientCandidates { requested: usize, available: usize },
    #[error("no available seats to regenerate")]
    NoAvailableSeats,
    #[error("invalid seat position: {0} (must be 1, 2, or 3)")]
    InvalidSlot(i64),
    #[error("missing required fields: {0}")]
    MissingFields(String),
    #[error("voucher already exists for flight {flight_number} on {flight_date}")]
    VoucherExists { flight_number: String, flight_date: String },
    #[error("no voucher found for flight {flight_number} on {flight_date}")]
    VoucherNotFound { flight_number: String, flight_date: String },
    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),
}

impl From<CatalogError> for CoreError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::UnknownAircraft(id) => CoreError::UnknownAircraft(id),
        }
    }
}

pub type CoreResult<T> = Result<T, CoreError>;
