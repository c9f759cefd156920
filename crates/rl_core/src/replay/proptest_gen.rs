//! Property-based test generators for replay inputs.
//!
//! Logs come out well-formed by construction: distinct players per game,
//! unique ids and sequence numbers, strictly increasing timestamps.
//! Malformed-input behavior is covered by direct unit tests instead.

use chrono::{TimeZone, Utc};
use proptest::prelude::*;
use uuid::Uuid;

use crate::models::{GameLength, GameRecord, GameSeat, SEAT_COUNT};

pub fn game_length_strategy() -> impl Strategy<Value = GameLength> {
    prop_oneof![Just(GameLength::Hanchan), Just(GameLength::Tonpuusen)]
}

/// Raw table scores, with a weighted spike at one fixed value so exact
/// score ties (and the seat-priority tie-break) actually get exercised.
pub fn score_strategy() -> impl Strategy<Value = i32> {
    prop_oneof![
        4 => -20_000..60_000i32,
        1 => Just(25_000),
    ]
}

/// Four seats drawn from a roster of `roster_size` players with ids
/// `1..=roster_size`, distinct by construction.
pub fn seats_strategy(roster_size: usize) -> impl Strategy<Value = [GameSeat; SEAT_COUNT]> {
    let ids: Vec<u128> = (1..=roster_size as u128).collect();
    (
        proptest::sample::subsequence(ids, SEAT_COUNT).prop_shuffle(),
        proptest::array::uniform4(score_strategy()),
    )
        .prop_map(|(ids, scores)| {
            std::array::from_fn(|i| GameSeat {
                player_id: Uuid::from_u128(ids[i]),
                score: scores[i],
            })
        })
}

/// An active game log of up to `max_games` games over the given roster.
/// Timestamps are strictly increasing (a day apart plus jitter), so the
/// chronological order is unambiguous and shuffling the storage order must
/// not change replay results.
pub fn game_log_strategy(
    roster_size: usize,
    max_games: usize,
) -> impl Strategy<Value = Vec<GameRecord>> {
    prop::collection::vec(
        (seats_strategy(roster_size), game_length_strategy(), 0i64..1_000),
        0..max_games,
    )
    .prop_map(|entries| {
        entries
            .into_iter()
            .enumerate()
            .map(|(i, (seats, length, jitter))| GameRecord {
                id: Uuid::from_u128(10_000 + i as u128),
                seq: i as u64 + 1,
                played_at: Utc
                    .timestamp_opt(1_700_000_000 + i as i64 * 86_400 + jitter, 0)
                    .unwrap(),
                length,
                seats,
                active: true,
            })
            .collect()
    })
}
