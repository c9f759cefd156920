//! Game records and the shapes used to create and edit them.
//!
//! A game is one four-player table result. Seats are stored as a fixed
//! array indexed 0..3 in wind order (East, South, West, North); the core
//! only ever works with the numeric seat index. `Wind` exists for the
//! presentation boundary and is never consulted by the engine.

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Number of seats at a table. The engine assumes exactly four.
pub const SEAT_COUNT: usize = 4;

/// Match length variant. Each rank tier carries an independent point table
/// per length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum GameLength {
    Hanchan,
    Tonpuusen,
}

impl fmt::Display for GameLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameLength::Hanchan => write!(f, "hanchan"),
            GameLength::Tonpuusen => write!(f, "tonpuusen"),
        }
    }
}

/// Seat winds, for display only.
///
/// The mapping to seat indices is fixed: East = 0 through North = 3.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Wind {
    East,
    South,
    West,
    North,
}

impl Wind {
    pub const ALL: [Wind; SEAT_COUNT] = [Wind::East, Wind::South, Wind::West, Wind::North];

    /// Decode from a numeric seat index (0 = East .. 3 = North).
    pub fn from_seat(seat: usize) -> Option<Self> {
        Self::ALL.get(seat).copied()
    }

    pub fn seat(self) -> usize {
        self as usize
    }

    pub fn kanji(self) -> &'static str {
        match self {
            Wind::East => "東",
            Wind::South => "南",
            Wind::West => "西",
            Wind::North => "北",
        }
    }
}

impl fmt::Display for Wind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Wind::East => "East",
            Wind::South => "South",
            Wind::West => "West",
            Wind::North => "North",
        };
        write!(f, "{}", name)
    }
}

/// One seat of a recorded game: who sat there and their raw table score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct GameSeat {
    pub player_id: Uuid,
    pub score: i32,
}

/// A recorded game.
///
/// `seq` is assigned once at creation and never reused; together with
/// `played_at` it gives replay a total, deterministic ordering. `active`
/// is the soft-delete flag: inactive games are kept for restore but are
/// invisible to replay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct GameRecord {
    pub id: Uuid,
    pub seq: u64,
    pub played_at: DateTime<Utc>,
    pub length: GameLength,
    pub seats: [GameSeat; SEAT_COUNT],
    pub active: bool,
}

impl GameRecord {
    /// Total ordering key for replay: chronological, with the creation
    /// sequence breaking timestamp ties.
    pub fn replay_key(&self) -> (DateTime<Utc>, u64) {
        (self.played_at, self.seq)
    }

    pub fn seat_of(&self, player_id: Uuid) -> Option<usize> {
        self.seats.iter().position(|s| s.player_id == player_id)
    }
}

/// The caller-supplied shape for creating or editing a game. Ids and the
/// sequence number are owned by the league, not the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct GameDraft {
    pub played_at: DateTime<Utc>,
    pub length: GameLength,
    pub seats: [GameSeat; SEAT_COUNT],
}
