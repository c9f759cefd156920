//! Error types for the ranking core.
//!
//! Errors fall into three categories with different handling contracts:
//! - Invariant violations (corrupt data reaching the engine) abort the
//!   enclosing replay; the triggering mutation must roll back in full.
//! - Input errors are caller mistakes at the service boundary and leave
//!   state untouched.
//! - `ReplayInFlight` is a transient conflict; callers retry with backoff.

use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum CoreError {
    // Invariant violations: these indicate corrupt records or a bug in the
    // caller, never a user-facing condition.
    #[error("unknown rank: {0}")]
    UnknownRank(String),

    #[error("rank order {0} is out of range")]
    RankOrderOutOfRange(usize),

    #[error("game {game_id} seats player {player_id} more than once")]
    DuplicateSeat { game_id: Uuid, player_id: Uuid },

    #[error("game {game_id} references unknown player {player_id}")]
    UnknownSeatPlayer { game_id: Uuid, player_id: Uuid },

    // Input errors at the service boundary.
    #[error("game not found: {0}")]
    GameNotFound(Uuid),

    #[error("player not found: {0}")]
    PlayerNotFound(Uuid),

    #[error("game {0} is already deleted")]
    GameAlreadyDeleted(Uuid),

    #[error("game {0} is not deleted")]
    GameNotDeleted(Uuid),

    // Transient conflicts.
    #[error("another replay is in flight")]
    ReplayInFlight,
}

impl CoreError {
    /// Whether the caller should retry the operation.
    pub fn is_transient(&self) -> bool {
        matches!(self, CoreError::ReplayInFlight)
    }
}

pub type Result<T> = std::result::Result<T, CoreError>;
