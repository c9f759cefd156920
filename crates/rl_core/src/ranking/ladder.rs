//! The rank ladder: a static, ordered table of 21 tiers.
//!
//! Composition: one beginner tier, nine kyu tiers, ten dan tiers, one
//! terminal tier. Floors are cumulative and derived at construction from
//! each tier's promotion requirement, so the table cannot drift out of
//! order. Demotability is likewise assigned by position: everything below
//! 1st dan, 1st dan itself, and the terminal tier are protected; the dan
//! tiers in between are demotable down to their own floor.

use once_cell::sync::Lazy;
use schemars::JsonSchema;
use serde::Serialize;

use crate::error::{CoreError, Result};
use crate::models::GameLength;

/// One rank tier. Instances live only inside the static [`RankLadder`];
/// everything else holds `&'static RankTier` references.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, JsonSchema)]
pub struct RankTier {
    /// Position in the ladder, 0-based, ascending.
    pub order: usize,
    pub kanji: &'static str,
    pub title: &'static str,
    /// Cumulative point total at which this tier begins.
    pub point_floor: i32,
    /// Points above the floor needed to promote; `None` for the terminal tier.
    pub points_to_next: Option<i32>,
    pub demotable: bool,
    /// Set iff `demotable`; always the tier's own floor.
    pub demotion_floor: Option<i32>,
    pub hanchan: [i32; 4],
    pub tonpuusen: [i32; 4],
}

impl RankTier {
    pub fn point_table(&self, length: GameLength) -> &[i32; 4] {
        match length {
            GameLength::Hanchan => &self.hanchan,
            GameLength::Tonpuusen => &self.tonpuusen,
        }
    }

    /// Cumulative total required to leave this tier upward.
    pub fn promotion_target(&self) -> Option<i32> {
        self.points_to_next.map(|p| self.point_floor + p)
    }

    pub fn is_terminal(&self) -> bool {
        self.points_to_next.is_none()
    }
}

struct TierSeed {
    kanji: &'static str,
    title: &'static str,
    points_to_next: Option<i32>,
    hanchan: [i32; 4],
    tonpuusen: [i32; 4],
}

/// Ladder position of 1st dan; the demotability boundary.
const FIRST_DAN: usize = 10;

const TIER_SEEDS: [TierSeed; 21] = [
    TierSeed { kanji: "新人", title: "Novice", points_to_next: Some(50), hanchan: [60, 30, 0, 0], tonpuusen: [40, 20, 0, 0] },
    TierSeed { kanji: "9級", title: "9th Kyu", points_to_next: Some(50), hanchan: [60, 30, 0, 0], tonpuusen: [40, 20, 0, 0] },
    TierSeed { kanji: "8級", title: "8th Kyu", points_to_next: Some(100), hanchan: [60, 30, 0, 0], tonpuusen: [40, 20, 0, 0] },
    TierSeed { kanji: "7級", title: "7th Kyu", points_to_next: Some(100), hanchan: [60, 30, 0, 0], tonpuusen: [40, 20, 0, 0] },
    TierSeed { kanji: "6級", title: "6th Kyu", points_to_next: Some(100), hanchan: [60, 30, 0, 0], tonpuusen: [40, 20, 0, 0] },
    TierSeed { kanji: "5級", title: "5th Kyu", points_to_next: Some(100), hanchan: [60, 30, 0, 0], tonpuusen: [40, 20, 0, 0] },
    TierSeed { kanji: "4級", title: "4th Kyu", points_to_next: Some(100), hanchan: [60, 30, 0, 0], tonpuusen: [40, 20, 0, 0] },
    TierSeed { kanji: "3級", title: "3rd Kyu", points_to_next: Some(100), hanchan: [60, 30, 0, 0], tonpuusen: [40, 20, 0, 0] },
    TierSeed { kanji: "2級", title: "2nd Kyu", points_to_next: Some(150), hanchan: [60, 30, 0, 0], tonpuusen: [40, 20, 0, 0] },
    TierSeed { kanji: "1級", title: "1st Kyu", points_to_next: Some(150), hanchan: [60, 30, 0, -30], tonpuusen: [40, 20, 0, -20] },
    TierSeed { kanji: "初段", title: "1st Dan", points_to_next: Some(200), hanchan: [60, 30, 0, -30], tonpuusen: [40, 20, 0, -20] },
    TierSeed { kanji: "二段", title: "2nd Dan", points_to_next: Some(400), hanchan: [60, 30, 0, -30], tonpuusen: [40, 20, 0, -20] },
    TierSeed { kanji: "三段", title: "3rd Dan", points_to_next: Some(400), hanchan: [60, 30, 0, -30], tonpuusen: [40, 20, 0, -20] },
    TierSeed { kanji: "四段", title: "4th Dan", points_to_next: Some(600), hanchan: [60, 30, -15, -45], tonpuusen: [40, 20, -10, -30] },
    TierSeed { kanji: "五段", title: "5th Dan", points_to_next: Some(600), hanchan: [60, 30, -15, -45], tonpuusen: [40, 20, -10, -30] },
    TierSeed { kanji: "六段", title: "6th Dan", points_to_next: Some(800), hanchan: [60, 30, -15, -45], tonpuusen: [40, 20, -10, -30] },
    TierSeed { kanji: "七段", title: "7th Dan", points_to_next: Some(1000), hanchan: [60, 30, -30, -60], tonpuusen: [40, 20, -20, -40] },
    TierSeed { kanji: "八段", title: "8th Dan", points_to_next: Some(1000), hanchan: [60, 30, -30, -60], tonpuusen: [40, 20, -20, -40] },
    TierSeed { kanji: "九段", title: "9th Dan", points_to_next: Some(1500), hanchan: [60, 30, -30, -75], tonpuusen: [40, 20, -20, -50] },
    TierSeed { kanji: "十段", title: "10th Dan", points_to_next: Some(1500), hanchan: [60, 30, -45, -75], tonpuusen: [40, 20, -30, -50] },
    TierSeed { kanji: "神室王", title: "Divine King", points_to_next: None, hanchan: [60, 30, -30, -60], tonpuusen: [40, 20, -20, -40] },
];

static LADDER: Lazy<RankLadder> = Lazy::new(RankLadder::build);

/// The process-wide rank ladder.
pub fn ladder() -> &'static RankLadder {
    &LADDER
}

#[derive(Debug)]
pub struct RankLadder {
    tiers: Vec<RankTier>,
}

impl RankLadder {
    /// Build and validate the ladder from the seed table. A malformed seed
    /// table is a programming error, so violations panic here rather than
    /// surfacing at use sites.
    fn build() -> Self {
        let mut tiers = Vec::with_capacity(TIER_SEEDS.len());
        let mut floor = 0i32;
        for (order, seed) in TIER_SEEDS.iter().enumerate() {
            let demotable = order > FIRST_DAN && seed.points_to_next.is_some();
            tiers.push(RankTier {
                order,
                kanji: seed.kanji,
                title: seed.title,
                point_floor: floor,
                points_to_next: seed.points_to_next,
                demotable,
                demotion_floor: demotable.then_some(floor),
                hanchan: seed.hanchan,
                tonpuusen: seed.tonpuusen,
            });
            if let Some(step) = seed.points_to_next {
                assert!(step > 0, "promotion step must be positive: {}", seed.kanji);
                floor += step;
            }
        }

        let terminal_count = tiers.iter().filter(|t| t.is_terminal()).count();
        assert_eq!(terminal_count, 1, "ladder must have exactly one terminal tier");
        assert!(tiers.last().is_some_and(RankTier::is_terminal), "terminal tier must be last");
        assert!(
            tiers.windows(2).all(|w| w[0].point_floor < w[1].point_floor),
            "tier floors must be strictly ascending"
        );

        Self { tiers }
    }

    pub fn tiers(&self) -> &[RankTier] {
        &self.tiers
    }

    /// The entry tier for brand-new players.
    pub fn base(&self) -> &RankTier {
        &self.tiers[0]
    }

    pub fn terminal(&self) -> &RankTier {
        &self.tiers[self.tiers.len() - 1]
    }

    /// Highest tier whose floor does not exceed `points`. Negative totals
    /// clamp to the base tier. Stateless; used for brand-new players and
    /// for demotion targets.
    pub fn tier_for_points(&self, points: i32) -> &RankTier {
        self.tiers
            .iter()
            .rev()
            .find(|t| t.point_floor <= points)
            .unwrap_or_else(|| self.base())
    }

    pub fn by_order(&self, order: usize) -> Result<&RankTier> {
        self.tiers.get(order).ok_or(CoreError::RankOrderOutOfRange(order))
    }

    pub fn by_kanji(&self, kanji: &str) -> Result<&RankTier> {
        self.tiers
            .iter()
            .find(|t| t.kanji == kanji)
            .ok_or_else(|| CoreError::UnknownRank(kanji.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ladder_shape() {
        let l = ladder();
        assert_eq!(l.tiers().len(), 21);
        assert_eq!(l.base().kanji, "新人");
        assert_eq!(l.terminal().kanji, "神室王");
        assert!(l.terminal().is_terminal());
        assert_eq!(l.tiers().iter().filter(|t| t.is_terminal()).count(), 1);
    }

    #[test]
    fn test_floors_are_cumulative() {
        let l = ladder();
        assert_eq!(l.base().point_floor, 0);
        assert_eq!(l.by_kanji("1級").unwrap().point_floor, 850);
        assert_eq!(l.by_kanji("初段").unwrap().point_floor, 1000);
        assert_eq!(l.by_kanji("三段").unwrap().point_floor, 1600);
        assert_eq!(l.terminal().point_floor, 9000);
    }

    #[test]
    fn test_demotability_by_construction() {
        let l = ladder();
        for tier in l.tiers() {
            let expected = tier.order > FIRST_DAN && !tier.is_terminal();
            assert_eq!(tier.demotable, expected, "tier {}", tier.kanji);
            if tier.demotable {
                assert_eq!(tier.demotion_floor, Some(tier.point_floor), "tier {}", tier.kanji);
            } else {
                assert_eq!(tier.demotion_floor, None, "tier {}", tier.kanji);
            }
        }
    }

    #[test]
    fn test_tier_for_points_picks_highest_floor() {
        let l = ladder();
        assert_eq!(l.tier_for_points(0).kanji, "新人");
        assert_eq!(l.tier_for_points(49).kanji, "新人");
        assert_eq!(l.tier_for_points(50).kanji, "9級");
        assert_eq!(l.tier_for_points(999).kanji, "1級");
        assert_eq!(l.tier_for_points(1000).kanji, "初段");
        assert_eq!(l.tier_for_points(20_000).kanji, "神室王");
    }

    #[test]
    fn test_negative_points_clamp_to_base() {
        assert_eq!(ladder().tier_for_points(-120).kanji, "新人");
    }

    #[test]
    fn test_promotion_targets() {
        let l = ladder();
        assert_eq!(l.base().promotion_target(), Some(50));
        assert_eq!(l.by_kanji("初段").unwrap().promotion_target(), Some(1200));
        assert_eq!(l.terminal().promotion_target(), None);
    }

    #[test]
    fn test_unknown_lookups_fail() {
        assert!(ladder().by_kanji("名人").is_err());
        assert!(ladder().by_order(21).is_err());
    }

    #[test]
    fn test_point_tables_by_length() {
        let base = ladder().base();
        assert_eq!(base.point_table(GameLength::Hanchan), &[60, 30, 0, 0]);
        assert_eq!(base.point_table(GameLength::Tonpuusen), &[40, 20, 0, 0]);
    }
}
