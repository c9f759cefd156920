//! Rank ladder, placement resolution, point scoring, and the tier state
//! machine. All pure computation; replay composes these per game.

pub mod ladder;
pub mod placement;
pub mod scoring;
pub mod transition;

pub use ladder::{ladder, RankLadder, RankTier};
pub use placement::{resolve_placements, PlacementEntry};
pub use scoring::point_delta;
pub use transition::next_tier;
