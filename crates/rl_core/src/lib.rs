//! # rl_core - Deterministic Riichi League Ranking Engine
//!
//! This library computes player point totals and rank tiers from a history
//! of four-player game results, and keeps that derived state a pure,
//! deterministic function of the active game log under arbitrary
//! retroactive edits.
//!
//! ## Features
//! - 100% deterministic replay (same log = same standings, bit for bit)
//! - 21-tier rank ladder with asymmetric promotion/demotion protection
//! - Seat-priority tie-break producing a strict total placement order
//! - Soft-delete and restore with full-history recomputation
//!
//! The core is a library invoked by request handlers: it owns no wire
//! format and no storage. Persistence is the caller's transactional store;
//! [`League`] shows the intended discipline over an in-memory dataset.

pub mod error;
pub mod league;
pub mod models;
pub mod ranking;
pub mod replay;
pub mod stats;

pub use error::{CoreError, Result};

// Re-export the data model
pub use models::{
    GameDraft, GameLength, GameOutcome, GameRecord, GameSeat, PlayerAggregate, SeatOutcome,
    Wind, SEAT_COUNT,
};

// Re-export the pure computation surface
pub use ranking::{ladder, next_tier, point_delta, resolve_placements, PlacementEntry, RankLadder, RankTier};
pub use replay::{replay_all, replay_all_with_outcomes};

// Re-export the lifecycle service and derived views
pub use league::{League, LeagueState};
pub use stats::{game_history, player_stats, HistoryEntry, PlacementCounts, PlayerStats};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
