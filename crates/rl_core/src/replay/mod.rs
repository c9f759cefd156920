//! Full-history replay.
//!
//! Player aggregates are a pure function of the active game log: every
//! mutation (create, edit, soft-delete, restore) rebuilds all of them from
//! a clean slate instead of patching incrementally. Incremental patching
//! would need a placement- and tier-dependent delta log that breaks as soon
//! as an edit reorders relative standings; a fresh fold over the log cannot.
//! Cost is O(games × 4), which is what the simplicity buys.

use std::collections::HashMap;

use tracing::debug;
use uuid::Uuid;

use crate::error::{CoreError, Result};
use crate::models::{GameOutcome, GameRecord, PlayerAggregate, SeatOutcome};
use crate::ranking::{ladder, next_tier, point_delta, resolve_placements, RankTier};

#[cfg(test)]
pub mod proptest_gen;

#[derive(Clone, Copy)]
struct Standing {
    points: i32,
    tier: &'static RankTier,
}

/// Recompute every player's aggregate from the active games in `games`.
///
/// Pure: the result depends only on the two inputs. Players absent from
/// every active game come back reset to zero points at the base tier.
/// Output order matches the input roster order, so replaying an unchanged
/// log twice yields bit-identical results.
pub fn replay_all(games: &[GameRecord], players: &[PlayerAggregate]) -> Result<Vec<PlayerAggregate>> {
    replay_all_with_outcomes(games, players).map(|(players, _)| players)
}

/// Like [`replay_all`], but also returns the per-game outcome breakdowns
/// in replay order. Outcomes are transient: logging and history views
/// consume them, nothing persists them.
pub fn replay_all_with_outcomes(
    games: &[GameRecord],
    players: &[PlayerAggregate],
) -> Result<(Vec<PlayerAggregate>, Vec<GameOutcome>)> {
    let base = ladder().base();
    let mut standings: HashMap<Uuid, Standing> = players
        .iter()
        .map(|p| (p.id, Standing { points: 0, tier: base }))
        .collect();

    let mut active: Vec<&GameRecord> = games.iter().filter(|g| g.active).collect();
    active.sort_by_key(|g| g.replay_key());

    let mut outcomes = Vec::with_capacity(active.len());
    for game in active {
        let placements = resolve_placements(game)?;

        let mut entries = Vec::with_capacity(placements.len());
        for resolved in &placements {
            let standing = standings.get_mut(&resolved.player_id).ok_or(
                CoreError::UnknownSeatPlayer {
                    game_id: game.id,
                    player_id: resolved.player_id,
                },
            )?;

            // The delta is read with the tier held going INTO this game;
            // the tier advances only after the delta lands.
            let before = standing.tier;
            let delta = point_delta(resolved.placement, game.length, before);
            standing.points += delta;
            standing.tier = next_tier(standing.points, Some(before));

            entries.push(SeatOutcome {
                player_id: resolved.player_id,
                seat: resolved.seat,
                placement: resolved.placement,
                score: resolved.score,
                point_delta: delta,
                rank_before: before.kanji,
                rank_after: standing.tier.kanji,
            });
        }

        debug!(game_id = %game.id, length = %game.length, "applied game to standings");
        outcomes.push(GameOutcome { game_id: game.id, length: game.length, entries });
    }

    let players = players
        .iter()
        .map(|p| {
            let standing = standings[&p.id];
            PlayerAggregate {
                id: p.id,
                nickname: p.nickname.clone(),
                total_points: standing.points,
                rank: standing.tier.kanji.to_string(),
            }
        })
        .collect();

    Ok((players, outcomes))
}
