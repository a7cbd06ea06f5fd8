use chrono::NaiveDate;
pub use crewseat_catalog::is_valid_aircraft_id;

use crate::{CoreError, CoreResult};

/// True iff `s` is a real calendar date written exactly as `YYYY-MM-DD`.
pub fn is_valid_date(s: &str) -> bool {
    // chrono tolerates unpadded fields and signed years, so pin the shape first
    let bytes = s.as_bytes();
    let shape_ok = bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        });

    shape_ok && NaiveDate::parse_from_str(s, "%Y-%m-%d").is_ok()
}

pub fn validate_aircraft(aircraft_id: &str) -> CoreResult<()> {
    if is_valid_aircraft_id(aircraft_id) {
        Ok(())
    } else {
        Err(CoreError::UnknownAircraft(aircraft_id.to_string()))
    }
}

pub fn validate_date(date: &str) -> CoreResult<()> {
    if is_valid_date(date) {
        Ok(())
    } else {
        Err(CoreError::InvalidDate(date.to_string()))
    }
}
