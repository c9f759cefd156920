//! The promotion/demotion state machine.
//!
//! Rules, in precedence order:
//! 1. No current tier (brand-new player): resolve by point floor.
//! 2. Promotion: reaching the current tier's promotion target moves up
//!    exactly one tier. Deltas are bounded and replay advances one game at
//!    a time, so a single update can never clear two thresholds in a way
//!    that would justify skipping.
//! 3. Demotion: only demotable tiers demote, and only when the total falls
//!    below their demotion floor; the target is the highest tier whose
//!    floor the total still meets.
//! 4. Otherwise the tier is unchanged.
//!
//! The function is pure and total: every (points, tier) pair maps to
//! exactly one tier.

use crate::ranking::ladder::{ladder, RankTier};

/// Advance a player's tier after their total changed to `total_points`.
pub fn next_tier(total_points: i32, current: Option<&RankTier>) -> &'static RankTier {
    let l = ladder();
    let Some(current) = current else {
        return l.tier_for_points(total_points);
    };

    if let Some(target) = current.promotion_target() {
        if total_points >= target {
            // Non-terminal tiers always have a successor; the ladder
            // validates that the terminal tier is last.
            return &l.tiers()[current.order + 1];
        }
    }

    if let (true, Some(floor)) = (current.demotable, current.demotion_floor) {
        if total_points < floor {
            return l.tier_for_points(total_points);
        }
    }

    &l.tiers()[current.order]
}
