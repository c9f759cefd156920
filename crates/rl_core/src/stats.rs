//! Derived player statistics.
//!
//! Everything here is a pure projection of the active game log, computed
//! on demand. Placements reuse the same resolver as replay, so the numbers
//! always agree with the standings, including after retroactive edits.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::error::Result;
use crate::models::{GameLength, GameRecord, PlayerAggregate};
use crate::ranking::resolve_placements;
use crate::replay::replay_all_with_outcomes;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PlacementCounts {
    pub first: u32,
    pub second: u32,
    pub third: u32,
    pub fourth: u32,
}

impl PlacementCounts {
    fn record(&mut self, placement: u8) {
        match placement {
            1 => self.first += 1,
            2 => self.second += 1,
            3 => self.third += 1,
            _ => self.fourth += 1,
        }
    }

    pub fn games(&self) -> u32 {
        self.first + self.second + self.third + self.fourth
    }

    /// Share of top-two finishes, in percent.
    pub fn rentai_rate(&self) -> f64 {
        match self.games() {
            0 => 0.0,
            n => f64::from(self.first + self.second) / f64::from(n) * 100.0,
        }
    }

    pub fn average_placement(&self) -> f64 {
        match self.games() {
            0 => 0.0,
            n => {
                let weighted =
                    self.first + 2 * self.second + 3 * self.third + 4 * self.fourth;
                f64::from(weighted) / f64::from(n)
            }
        }
    }
}

/// Placement statistics for one player: overall plus per-length splits.
#[derive(Debug, Clone, Serialize)]
pub struct PlayerStats {
    pub player_id: Uuid,
    pub overall: PlacementCounts,
    pub hanchan: PlacementCounts,
    pub tonpuusen: PlacementCounts,
}

/// Compute placement statistics over the active games of `games`. A player
/// with no games gets all-zero counts.
pub fn player_stats(games: &[GameRecord], player_id: Uuid) -> Result<PlayerStats> {
    let mut stats = PlayerStats {
        player_id,
        overall: PlacementCounts::default(),
        hanchan: PlacementCounts::default(),
        tonpuusen: PlacementCounts::default(),
    };

    for game in games.iter().filter(|g| g.active) {
        let placements = resolve_placements(game)?;
        let Some(entry) = placements.iter().find(|p| p.player_id == player_id) else {
            continue;
        };
        stats.overall.record(entry.placement);
        match game.length {
            GameLength::Hanchan => stats.hanchan.record(entry.placement),
            GameLength::Tonpuusen => stats.tonpuusen.record(entry.placement),
        }
    }

    Ok(stats)
}

/// One row of a player's game history: what the game did to them at the
/// point in time it was applied. Seats stay numeric here; winds belong to
/// the presentation boundary.
#[derive(Debug, Clone, Serialize)]
pub struct HistoryEntry {
    pub game_id: Uuid,
    pub played_at: DateTime<Utc>,
    pub length: GameLength,
    pub seat: usize,
    pub placement: u8,
    pub score: i32,
    pub point_delta: i32,
    pub rank_after: &'static str,
}

/// A player's active games in replay order, with the delta and resulting
/// rank each one contributed. Deltas come out of a fresh replay, so edits
/// anywhere in the log are reflected in every later row.
pub fn game_history(
    games: &[GameRecord],
    players: &[PlayerAggregate],
    player_id: Uuid,
) -> Result<Vec<HistoryEntry>> {
    let (_, outcomes) = replay_all_with_outcomes(games, players)?;

    let mut entries = Vec::new();
    for outcome in &outcomes {
        let Some(entry) = outcome.entry_for(player_id) else {
            continue;
        };
        let Some(game) = games.iter().find(|g| g.id == outcome.game_id) else {
            continue;
        };
        entries.push(HistoryEntry {
            game_id: outcome.game_id,
            played_at: game.played_at,
            length: outcome.length,
            seat: entry.seat,
            placement: entry.placement,
            score: entry.score,
            point_delta: entry.point_delta,
            rank_after: entry.rank_after,
        });
    }

    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{GameSeat, SEAT_COUNT};
    use crate::ranking::ladder;
    use chrono::TimeZone;

    fn roster(n: usize) -> Vec<PlayerAggregate> {
        (0..n)
            .map(|i| PlayerAggregate {
                id: Uuid::from_u128(i as u128 + 1),
                nickname: format!("Player {}", i + 1),
                total_points: 0,
                rank: ladder().base().kanji.to_string(),
            })
            .collect()
    }

    fn game(seq: u64, length: GameLength, seats: [(u128, i32); SEAT_COUNT]) -> GameRecord {
        GameRecord {
            id: Uuid::from_u128(1000 + seq as u128),
            seq,
            played_at: Utc.timestamp_opt(1_700_000_000 + seq as i64 * 3600, 0).unwrap(),
            length,
            seats: seats.map(|(id, score)| GameSeat { player_id: Uuid::from_u128(id), score }),
            active: true,
        }
    }

    #[test]
    fn test_counts_split_by_length() {
        let games = [
            game(1, GameLength::Hanchan, [(1, 40_000), (2, 30_000), (3, 20_000), (4, 10_000)]),
            game(2, GameLength::Tonpuusen, [(2, 40_000), (1, 30_000), (3, 20_000), (4, 10_000)]),
            game(3, GameLength::Hanchan, [(3, 40_000), (4, 30_000), (1, 20_000), (2, 10_000)]),
        ];

        let stats = player_stats(&games, Uuid::from_u128(1)).unwrap();
        assert_eq!(stats.overall.games(), 3);
        assert_eq!(stats.overall.first, 1);
        assert_eq!(stats.overall.second, 1);
        assert_eq!(stats.overall.third, 1);
        assert_eq!(stats.hanchan.games(), 2);
        assert_eq!(stats.tonpuusen.games(), 1);
        assert_eq!(stats.tonpuusen.second, 1);
    }

    #[test]
    fn test_rates_and_averages() {
        let games = [
            game(1, GameLength::Hanchan, [(1, 40_000), (2, 30_000), (3, 20_000), (4, 10_000)]),
            game(2, GameLength::Hanchan, [(2, 40_000), (1, 30_000), (3, 20_000), (4, 10_000)]),
            game(3, GameLength::Hanchan, [(2, 40_000), (3, 30_000), (4, 20_000), (1, 10_000)]),
            game(4, GameLength::Hanchan, [(3, 40_000), (4, 30_000), (2, 20_000), (1, 10_000)]),
        ];

        let stats = player_stats(&games, Uuid::from_u128(1)).unwrap();
        // 1st, 2nd, 4th, 4th: rentai 50%, average (1+2+4+4)/4 = 2.75.
        assert!((stats.overall.rentai_rate() - 50.0).abs() < f64::EPSILON);
        assert!((stats.overall.average_placement() - 2.75).abs() < f64::EPSILON);
    }

    #[test]
    fn test_empty_history_is_all_zeroes() {
        let stats = player_stats(&[], Uuid::from_u128(1)).unwrap();
        assert_eq!(stats.overall.games(), 0);
        assert_eq!(stats.overall.rentai_rate(), 0.0);
        assert_eq!(stats.overall.average_placement(), 0.0);
    }

    #[test]
    fn test_deleted_games_do_not_count() {
        let mut g = game(1, GameLength::Hanchan, [(1, 40_000), (2, 30_000), (3, 20_000), (4, 10_000)]);
        g.active = false;
        let stats = player_stats(&[g], Uuid::from_u128(1)).unwrap();
        assert_eq!(stats.overall.games(), 0);
    }

    #[test]
    fn test_history_reflects_point_in_time_deltas() {
        let players = roster(4);
        let games = [
            game(1, GameLength::Hanchan, [(1, 40_000), (2, 30_000), (3, 20_000), (4, 10_000)]),
            game(2, GameLength::Tonpuusen, [(1, 40_000), (2, 30_000), (3, 20_000), (4, 10_000)]),
        ];

        let history = game_history(&games, &players, Uuid::from_u128(1)).unwrap();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].point_delta, 60);
        assert_eq!(history[0].rank_after, "9級");
        // Second game is a tonpuusen win scored with the 9級 table.
        assert_eq!(history[1].point_delta, 40);
        assert_eq!(history[1].seat, 0);
    }
}
