use crewseat_catalog::{profile_for, AircraftProfile, Seat};
use rand::seq::SliceRandom;
use rand::Rng;

use crate::models::{SeatTriple, Slot};
use crate::{CoreError, CoreResult};

/// Draw `count` distinct seats from `candidates` using the thread-local RNG.
///
/// Candidates are assumed unique, so the result is pairwise distinct.
pub fn draw_unique(candidates: &[Seat], count: usize) -> CoreResult<Vec<Seat>> {
    draw_unique_with(&mut rand::thread_rng(), candidates, count)
}

/// Uniform Fisher-Yates permutation of the candidates, then the first `count`.
pub fn draw_unique_with<R: Rng + ?Sized>(
    rng: &mut R,
    candidates: &[Seat],
    count: usize,
) -> CoreResult<Vec<Seat>> {
    if candidates.len() < count {
        return Err(CoreError::InsufficientCandidates {
            requested: count,
            available: candidates.len(),
        });
    }

    let mut shuffled = candidates.to_vec();
    shuffled.shuffle(rng);
    shuffled.truncate(count);

    Ok(shuffled)
}

pub fn generate_triple(aircraft_id: &str) -> CoreResult<SeatTriple> {
    generate_triple_with(&mut rand::thread_rng(), aircraft_id)
}

pub fn generate_triple_with<R: Rng + ?Sized>(rng: &mut R, aircraft_id: &str) -> CoreResult<SeatTriple> {
    let profile = profile_for(aircraft_id)?;
    let universe = profile.seat_universe();

    let seats: [Seat; 3] = draw_unique_with(rng, &universe, 3)?
        .try_into()
        .map_err(|drawn: Vec<Seat>| CoreError::InsufficientCandidates {
            requested: 3,
            available: drawn.len(),
        })?;

    Ok(SeatTriple(seats))
}

/// The aircraft's seats minus those held by the other slots of the voucher.
///
/// The slot being replaced is not part of `occupied`, so its current seat stays eligible.
pub fn available_for_regeneration(profile: &AircraftProfile, occupied: &[Seat]) -> CoreResult<Vec<Seat>> {
    let available: Vec<Seat> = profile
        .seat_universe()
        .into_iter()
        .filter(|seat| !occupied.contains(seat))
        .collect();

    if available.is_empty() {
        return Err(CoreError::NoAvailableSeats);
    }

    Ok(available)
}

pub fn regenerate_one(aircraft_id: &str, current: &SeatTriple, slot: Slot) -> CoreResult<Seat> {
    regenerate_one_with(&mut rand::thread_rng(), aircraft_id, current, slot)
}

pub fn regenerate_one_with<R: Rng + ?Sized>(
    rng: &mut R,
    aircraft_id: &str,
    current: &SeatTriple,
    slot: Slot,
) -> CoreResult<Seat> {
    let profile = profile_for(aircraft_id)?;
    let occupied = current.others(slot);
    let available = available_for_regeneration(profile, &occupied)?;

    draw_unique_with(rng, &available, 1)?
        .pop()
        .ok_or(CoreError::NoAvailableSeats)
}
