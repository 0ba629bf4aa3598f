//! Points for cleared matches and the level derived from a score.

use alloc::collections::BTreeSet;

use crate::*;

/// Points for clearing `cells` in one step: the sum of each token's points times the
/// number of cleared tokens. Empty cells contribute nothing to either factor.
pub fn match_points(grid: &Grid, cells: &BTreeSet<Coord2>) -> Score {
    let (sum, count) = cells
        .iter()
        .filter_map(|&coords| grid[coords])
        .fold((0 as Score, 0 as Score), |(sum, count), token| {
            (sum.saturating_add(token.points()), count + 1)
        });
    sum.saturating_mul(count)
}

/// Level for `score`, starting at 1 and rising every `points_per_level` points.
pub const fn level_for_score(score: Score, points_per_level: Score) -> u32 {
    if points_per_level == 0 {
        return 1;
    }
    score / points_per_level + 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn run_of_three_apples_scores_ninety() {
        let grid = Grid::from_symbols(&["aaa"]).unwrap();
        let cells = BTreeSet::from([(0, 0), (0, 1), (0, 2)]);
        assert_eq!(match_points(&grid, &cells), 90);
    }

    #[test]
    fn run_of_four_beats_two_runs_of_three_per_tile() {
        let grid = Grid::from_symbols(&["oooo"]).unwrap();
        let four = BTreeSet::from([(0, 0), (0, 1), (0, 2), (0, 3)]);
        let three = BTreeSet::from([(0, 0), (0, 1), (0, 2)]);

        assert_eq!(match_points(&grid, &four), 60 * 4);
        assert_eq!(match_points(&grid, &three), 45 * 3);
        assert!(match_points(&grid, &four) / 4 > match_points(&grid, &three) / 3);
    }

    #[test]
    fn mixed_kinds_sum_before_multiplying() {
        let grid = Grid::from_symbols(&["aaa", "n.n"]).unwrap();
        let cells = BTreeSet::from([(0, 0), (0, 1), (0, 2), (1, 0), (1, 1)]);
        // four tokens, the empty cell is skipped
        assert_eq!(match_points(&grid, &cells), (30 + 45) * 4);
    }

    #[test]
    fn level_rises_every_thousand() {
        assert_eq!(level_for_score(0, 1000), 1);
        assert_eq!(level_for_score(999, 1000), 1);
        assert_eq!(level_for_score(1000, 1000), 2);
        assert_eq!(level_for_score(25_430, 1000), 26);
        assert_eq!(level_for_score(500, 0), 1);
    }
}
