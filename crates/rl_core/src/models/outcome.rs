//! Per-game outcome breakdowns.
//!
//! These are computed during replay and handed to logging and history
//! views; they are never persisted. Rank titles are borrowed from the
//! static ladder, so the types are serialize-only.

use serde::Serialize;
use uuid::Uuid;

use super::game::GameLength;

/// One seat's result inside a game: placement, the delta it earned, and the
/// rank movement it caused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SeatOutcome {
    pub player_id: Uuid,
    pub seat: usize,
    /// Finish position, 1 (best) through 4 (worst).
    pub placement: u8,
    pub score: i32,
    pub point_delta: i32,
    pub rank_before: &'static str,
    pub rank_after: &'static str,
}

/// The resolved outcome of one game, entries in placement order 1st..4th.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameOutcome {
    pub game_id: Uuid,
    pub length: GameLength,
    /// Always `SEAT_COUNT` entries, ordered 1st..4th.
    pub entries: Vec<SeatOutcome>,
}

impl GameOutcome {
    pub fn entry_for(&self, player_id: Uuid) -> Option<&SeatOutcome> {
        self.entries.iter().find(|e| e.player_id == player_id)
    }
}
