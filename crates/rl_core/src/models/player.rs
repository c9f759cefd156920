//! Player aggregates.
//!
//! `total_points` and `rank` are derived values: they are never mutated in
//! place, only overwritten wholesale by a replay pass. Treat them as a
//! cached projection of the active game log.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::Result;
use crate::ranking::{ladder, RankTier};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct PlayerAggregate {
    pub id: Uuid,
    pub nickname: String,
    pub total_points: i32,
    /// Kanji title of the current tier.
    pub rank: String,
}

impl PlayerAggregate {
    /// A freshly registered player: zero points, base tier.
    pub fn new(nickname: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            nickname: nickname.into(),
            total_points: 0,
            rank: ladder().base().kanji.to_string(),
        }
    }

    /// Resolve the stored rank title back to its tier. Fails on an
    /// unrecognized title, which means the stored row is corrupt.
    pub fn tier(&self) -> Result<&'static RankTier> {
        ladder().by_kanji(&self.rank)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_player_starts_at_base_tier() {
        let p = PlayerAggregate::new("Akagi");
        assert_eq!(p.total_points, 0);
        assert_eq!(p.rank, ladder().base().kanji);
        assert_eq!(p.tier().unwrap().order, 0);
    }

    #[test]
    fn test_corrupt_rank_title_is_rejected() {
        let mut p = PlayerAggregate::new("Akagi");
        p.rank = "initial dan".to_string();
        assert!(p.tier().is_err());
    }
}
