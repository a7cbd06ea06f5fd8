use crate::seat::Seat;
use serde::Serialize;

/// Seat geometry for one aircraft type
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AircraftProfile {
    pub id: &'static str,
    pub rows: u32,
    pub columns: &'static [char],
}

/// Every aircraft type crew vouchers can be issued for
pub const CATALOG: &[AircraftProfile] = &[
    AircraftProfile {
        id: "ATR",
        rows: 18,
        columns: &['A', 'C', 'D', 'F'],
    },
    AircraftProfile {
        id: "Airbus 320",
        rows: 32,
        columns: &['A', 'B', 'C', 'D', 'E', 'F'],
    },
    AircraftProfile {
        id: "Boeing 737 Max",
        rows: 32,
        columns: &['A', 'B', 'C', 'D', 'E', 'F'],
    },
];

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("Unknown aircraft type: {0}")]
    UnknownAircraft(String),
}

/// Look up an aircraft by its exact identifier
pub fn profile_for(aircraft_id: &str) -> Result<&'static AircraftProfile, CatalogError> {
    CATALOG
        .iter()
        .find(|profile| profile.id == aircraft_id)
        .ok_or_else(|| CatalogError::UnknownAircraft(aircraft_id.to_string()))
}

pub fn is_valid_aircraft_id(aircraft_id: &str) -> bool {
    CATALOG.iter().any(|profile| profile.id == aircraft_id)
}

impl AircraftProfile {
    /// All seats in row-major order: every column of row 1, then row 2, ...
    pub fn seat_universe(&self) -> Vec<Seat> {
        let mut seats = Vec::with_capacity(self.capacity());
        for row in 1..=self.rows {
            for &column in self.columns {
                seats.push(Seat::new(row, column));
            }
        }
        seats
    }

    pub fn capacity(&self) -> usize {
        self.rows as usize * self.columns.len()
    }

    pub fn contains(&self, seat: &Seat) -> bool {
        (1..=self.rows).contains(&seat.row) && self.columns.contains(&seat.column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_profiles() {
        let atr = profile_for("ATR").unwrap();
        assert_eq!(atr.rows, 18);
        assert_eq!(atr.columns, &['A', 'C', 'D', 'F']);

        for id in ["Airbus 320", "Boeing 737 Max"] {
            let profile = profile_for(id).unwrap();
            assert_eq!(profile.rows, 32);
            assert_eq!(profile.columns, &['A', 'B', 'C', 'D', 'E', 'F']);
        }

        assert_eq!(
            profile_for("Unknown"),
            Err(CatalogError::UnknownAircraft("Unknown".to_string()))
        );
    }

    #[test]
    fn test_aircraft_id_is_exact_match() {
        assert!(is_valid_aircraft_id("ATR"));
        assert!(is_valid_aircraft_id("Boeing 737 Max"));
        assert!(!is_valid_aircraft_id("atr"));
        assert!(!is_valid_aircraft_id("ATR "));
        assert!(!is_valid_aircraft_id("airbus 320"));
        assert!(!is_valid_aircraft_id(""));
    }

    #[test]
    fn test_seat_universe_shape() {
        for profile in CATALOG {
            let universe = profile.seat_universe();
            assert_eq!(universe.len(), profile.rows as usize * profile.columns.len());
            assert_eq!(universe.len(), profile.capacity());

            for seat in &universe {
                let label = seat.to_string();
                let (digits, letter) = label.split_at(label.len() - 1);
                assert!(digits.bytes().all(|b| b.is_ascii_digit()), "{label}");
                assert!(letter.chars().all(|c| c.is_ascii_uppercase()), "{label}");
                assert!(profile.contains(seat));
            }

            let mut deduped = universe.clone();
            deduped.sort();
            deduped.dedup();
            assert_eq!(deduped.len(), universe.len());
        }
    }

    #[test]
    fn test_seat_universe_is_row_major() {
        let universe = profile_for("ATR").unwrap().seat_universe();
        let head: Vec<String> = universe.iter().take(5).map(|s| s.to_string()).collect();
        assert_eq!(head, vec!["1A", "1C", "1D", "1F", "2A"]);
        assert_eq!(universe.last().unwrap().to_string(), "18F");
    }

    #[test]
    fn test_contains_rejects_foreign_seats() {
        let atr = profile_for("ATR").unwrap();
        assert!(!atr.contains(&Seat::new(19, 'A')));
        assert!(!atr.contains(&Seat::new(0, 'A')));
        assert!(!atr.contains(&Seat::new(3, 'B')));
    }
}
