use chrono::{DateTime, Utc};
use crewseat_catalog::Seat;
use serde::{Deserialize, Serialize};

use crate::{CoreError, CoreResult};

/// One of the three ordinal seat positions on a voucher
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Slot(u8);

impl Slot {
    pub const ALL: [Slot; 3] = [Slot(1), Slot(2), Slot(3)];

    pub fn new(position: i64) -> CoreResult<Self> {
        match position {
            1..=3 => Ok(Slot(position as u8)),
            _ => Err(CoreError::InvalidSlot(position)),
        }
    }

    /// 1-based position as shown to crew
    pub fn position(self) -> u8 {
        self.0
    }

    pub fn index(self) -> usize {
        usize::from(self.0) - 1
    }
}

/// The three seats on a voucher, ordered by slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatTriple(pub [Seat; 3]);

impl SeatTriple {
    pub fn get(&self, slot: Slot) -> Seat {
        self.0[slot.index()]
    }

    pub fn replace(&mut self, slot: Slot, seat: Seat) {
        self.0[slot.index()] = seat;
    }

    /// Seats held by the slots other than `slot`
    pub fn others(&self, slot: Slot) -> Vec<Seat> {
        Slot::ALL
            .iter()
            .filter(|other| **other != slot)
            .map(|other| self.get(*other))
            .collect()
    }

    pub fn is_distinct(&self) -> bool {
        let [a, b, c] = self.0;
        a != b && a != c && b != c
    }

    pub fn to_labels(&self) -> Vec<String> {
        self.0.iter().map(Seat::to_string).collect()
    }
}

/// Input for issuing a voucher
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewVoucher {
    pub crew_name: String,
    pub crew_id: String,
    pub flight_number: String,
    pub flight_date: String,
    pub aircraft_type: String,
}

/// A persisted voucher: one per flight number and date
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoucherAssignment {
    pub id: i64,
    pub crew_name: String,
    pub crew_id: String,
    pub flight_number: String,
    pub flight_date: String,
    pub aircraft_type: String,
    pub seats: SeatTriple,
    pub created_at: DateTime<Utc>,
}
