//! Placement resolution: four raw scores in, a strict total order out.
//!
//! Policy (seat-priority tie-break): sort by raw score descending; exact
//! score ties break by seat index ascending, so East outranks South on a
//! tie, and four identical scores degenerate to pure seat order. Placements
//! index into point tables, so the order must be total — no shared
//! placements, ever.

use uuid::Uuid;

use crate::error::{CoreError, Result};
use crate::models::{GameRecord, SEAT_COUNT};

/// One resolved placement. `placement` is 1 (best) through 4 (worst).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlacementEntry {
    pub seat: usize,
    pub player_id: Uuid,
    pub score: i32,
    pub placement: u8,
}

/// Resolve the four seats of `game` into placement order, best to worst.
///
/// A player seated twice is an invariant violation: the caller boundary
/// validates drafts, so a duplicate here means a corrupt record and aborts
/// the enclosing replay.
pub fn resolve_placements(game: &GameRecord) -> Result<[PlacementEntry; SEAT_COUNT]> {
    for (idx, seat) in game.seats.iter().enumerate() {
        if game.seats[idx + 1..].iter().any(|s| s.player_id == seat.player_id) {
            return Err(CoreError::DuplicateSeat { game_id: game.id, player_id: seat.player_id });
        }
    }

    let mut order: [usize; SEAT_COUNT] = [0, 1, 2, 3];
    order.sort_by(|&a, &b| {
        game.seats[b]
            .score
            .cmp(&game.seats[a].score)
            .then_with(|| a.cmp(&b))
    });

    Ok(std::array::from_fn(|i| {
        let seat = order[i];
        PlacementEntry {
            seat,
            player_id: game.seats[seat].player_id,
            score: game.seats[seat].score,
            placement: (i + 1) as u8,
        }
    }))
}
