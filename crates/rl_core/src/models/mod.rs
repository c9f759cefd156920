//! Data model for the league: game records, player aggregates, and the
//! transient per-game outcome breakdowns produced by replay.

pub mod game;
pub mod outcome;
pub mod player;

pub use game::{GameDraft, GameLength, GameRecord, GameSeat, Wind, SEAT_COUNT};
pub use outcome::{GameOutcome, SeatOutcome};
pub use player::PlayerAggregate;
