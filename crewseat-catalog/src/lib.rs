pub mod aircraft;
pub mod seat;

pub use aircraft::{is_valid_aircraft_id, profile_for, AircraftProfile, CatalogError, CATALOG};
pub use seat::{Seat, SeatParseError};
