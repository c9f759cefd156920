//! The league lifecycle service.
//!
//! `League` owns the full dataset (roster + game log) behind an `RwLock`
//! and funnels every mutation through one discipline: validate the input,
//! apply it to a working copy, replay the whole log, and only then swap
//! the copy in. A failure at any point drops the copy, so readers never
//! observe partial-replay state and a failed mutation rolls back in full.
//!
//! Writers are serialized by the lock. A mutation attempted while another
//! is in flight fails fast with `ReplayInFlight`; that is a transient
//! condition the caller retries. Reads take the shared lock and see the
//! result of exactly one completed replay.

use std::sync::{RwLock, RwLockReadGuard};

use tracing::info;
use uuid::Uuid;

use crate::error::{CoreError, Result};
use crate::models::{GameDraft, GameRecord, PlayerAggregate};
use crate::replay::replay_all;
use crate::stats::{self, HistoryEntry, PlayerStats};

/// The league dataset: the roster with its derived aggregates, and the
/// full game log including soft-deleted games.
#[derive(Debug, Clone, Default)]
pub struct LeagueState {
    pub players: Vec<PlayerAggregate>,
    pub games: Vec<GameRecord>,
    next_seq: u64,
}

impl LeagueState {
    pub fn new(players: Vec<PlayerAggregate>, games: Vec<GameRecord>) -> Self {
        let next_seq = games.iter().map(|g| g.seq).max().map_or(1, |s| s + 1);
        Self { players, games, next_seq }
    }

    fn alloc_seq(&mut self) -> u64 {
        let seq = self.next_seq;
        self.next_seq += 1;
        seq
    }

    fn game_mut(&mut self, id: Uuid) -> Result<&mut GameRecord> {
        self.games
            .iter_mut()
            .find(|g| g.id == id)
            .ok_or(CoreError::GameNotFound(id))
    }

    fn has_player(&self, id: Uuid) -> bool {
        self.players.iter().any(|p| p.id == id)
    }

    /// Boundary validation for a caller-supplied draft: four known,
    /// distinct players. The engine itself assumes well-formed games.
    fn validate_draft(&self, game_id: Uuid, draft: &GameDraft) -> Result<()> {
        for (idx, seat) in draft.seats.iter().enumerate() {
            if !self.has_player(seat.player_id) {
                return Err(CoreError::PlayerNotFound(seat.player_id));
            }
            if draft.seats[idx + 1..].iter().any(|s| s.player_id == seat.player_id) {
                return Err(CoreError::DuplicateSeat { game_id, player_id: seat.player_id });
            }
        }
        Ok(())
    }
}

pub struct League {
    state: RwLock<LeagueState>,
}

impl Default for League {
    fn default() -> Self {
        Self::new()
    }
}

impl League {
    pub fn new() -> Self {
        Self { state: RwLock::new(LeagueState::default()) }
    }

    /// Open a league over an existing dataset. Replays once up front so
    /// the aggregates agree with the log before anything reads them.
    pub fn open(players: Vec<PlayerAggregate>, games: Vec<GameRecord>) -> Result<Self> {
        let mut state = LeagueState::new(players, games);
        state.players = replay_all(&state.games, &state.players)?;
        Ok(Self { state: RwLock::new(state) })
    }

    /// One logical transaction: mutate a working copy, replay, commit.
    ///
    /// `try_write` keeps the single-writer contract honest: a second
    /// writer gets `ReplayInFlight` instead of queueing up behind state
    /// it has not seen.
    fn mutate<T>(&self, op: &'static str, f: impl FnOnce(&mut LeagueState) -> Result<T>) -> Result<T> {
        let mut guard = self.state.try_write().map_err(|_| CoreError::ReplayInFlight)?;
        let mut working = guard.clone();
        let value = f(&mut working)?;
        working.players = replay_all(&working.games, &working.players)?;
        *guard = working;
        info!(op, "league mutation committed");
        Ok(value)
    }

    /// Mutations commit a fully-built state, so even a poisoned lock
    /// holds consistent data; surface it as a transient conflict.
    fn read(&self) -> Result<RwLockReadGuard<'_, LeagueState>> {
        self.state.read().map_err(|_| CoreError::ReplayInFlight)
    }

    pub fn register_player(&self, nickname: &str) -> Result<PlayerAggregate> {
        self.mutate("register_player", |state| {
            let player = PlayerAggregate::new(nickname);
            state.players.push(player.clone());
            Ok(player)
        })
    }

    pub fn record_game(&self, draft: GameDraft) -> Result<GameRecord> {
        self.mutate("record_game", |state| {
            let id = Uuid::new_v4();
            state.validate_draft(id, &draft)?;
            let record = GameRecord {
                id,
                seq: state.alloc_seq(),
                played_at: draft.played_at,
                length: draft.length,
                seats: draft.seats,
                active: true,
            };
            state.games.push(record.clone());
            Ok(record)
        })
    }

    /// Replace a game's fields in place. The id and sequence number are
    /// stable across edits, as is the soft-delete flag.
    pub fn update_game(&self, id: Uuid, draft: GameDraft) -> Result<GameRecord> {
        self.mutate("update_game", |state| {
            state.validate_draft(id, &draft)?;
            let game = state.game_mut(id)?;
            game.played_at = draft.played_at;
            game.length = draft.length;
            game.seats = draft.seats;
            Ok(game.clone())
        })
    }

    /// Soft-delete: the record stays for restore, replay stops seeing it.
    pub fn delete_game(&self, id: Uuid) -> Result<()> {
        self.mutate("delete_game", |state| {
            let game = state.game_mut(id)?;
            if !game.active {
                return Err(CoreError::GameAlreadyDeleted(id));
            }
            game.active = false;
            Ok(())
        })
    }

    pub fn restore_game(&self, id: Uuid) -> Result<()> {
        self.mutate("restore_game", |state| {
            let game = state.game_mut(id)?;
            if game.active {
                return Err(CoreError::GameNotDeleted(id));
            }
            game.active = true;
            Ok(())
        })
    }

    /// All players, best first: by points, then by nickname for a stable
    /// display order.
    pub fn standings(&self) -> Result<Vec<PlayerAggregate>> {
        let state = self.read()?;
        let mut players = state.players.clone();
        players.sort_by(|a, b| {
            b.total_points
                .cmp(&a.total_points)
                .then_with(|| a.nickname.cmp(&b.nickname))
        });
        Ok(players)
    }

    pub fn player(&self, id: Uuid) -> Result<PlayerAggregate> {
        let state = self.read()?;
        state
            .players
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or(CoreError::PlayerNotFound(id))
    }

    /// The full game log, newest first, soft-deleted games included.
    pub fn game_log(&self) -> Result<Vec<GameRecord>> {
        let state = self.read()?;
        let mut games = state.games.clone();
        games.sort_by_key(|g| std::cmp::Reverse(g.replay_key()));
        Ok(games)
    }

    pub fn player_stats(&self, id: Uuid) -> Result<PlayerStats> {
        let state = self.read()?;
        if !state.has_player(id) {
            return Err(CoreError::PlayerNotFound(id));
        }
        stats::player_stats(&state.games, id)
    }

    pub fn game_history(&self, id: Uuid) -> Result<Vec<HistoryEntry>> {
        let state = self.read()?;
        if !state.has_player(id) {
            return Err(CoreError::PlayerNotFound(id));
        }
        stats::game_history(&state.games, &state.players, id)
    }
}
