//! Point delta lookup. Pure table indexing, no I/O.

use crate::models::GameLength;
use crate::ranking::RankTier;

/// Point delta for finishing at `placement` (1..=4) in a game of `length`,
/// while holding `tier`.
///
/// A placement outside 1..=4 is a contract violation: placements only come
/// from the placement resolver, which always produces a total 1..4 order,
/// so this fails fast instead of handling the case.
pub fn point_delta(placement: u8, length: GameLength, tier: &RankTier) -> i32 {
    assert!(
        (1..=4).contains(&placement),
        "placement out of range: {placement}"
    );
    tier.point_table(length)[usize::from(placement) - 1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ranking::ladder;

    #[test]
    fn test_lookup_indexes_by_placement() {
        let base = ladder().base();
        assert_eq!(point_delta(1, GameLength::Hanchan, base), 60);
        assert_eq!(point_delta(2, GameLength::Hanchan, base), 30);
        assert_eq!(point_delta(3, GameLength::Hanchan, base), 0);
        assert_eq!(point_delta(4, GameLength::Hanchan, base), 0);
    }

    #[test]
    fn test_lengths_use_independent_tables() {
        let tier = ladder().by_kanji("四段").unwrap();
        assert_eq!(point_delta(4, GameLength::Hanchan, tier), -45);
        assert_eq!(point_delta(4, GameLength::Tonpuusen, tier), -30);
    }

    #[test]
    #[should_panic(expected = "placement out of range")]
    fn test_placement_zero_panics() {
        point_delta(0, GameLength::Hanchan, ladder().base());
    }

    #[test]
    #[should_panic(expected = "placement out of range")]
    fn test_placement_five_panics() {
        point_delta(5, GameLength::Tonpuusen, ladder().base());
    }
}
