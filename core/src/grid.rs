use alloc::collections::BTreeSet;
use alloc::vec::Vec;
use core::fmt;
use core::ops::{Index, IndexMut};

use ndarray::Array2;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::*;

/// Shortest run of identical tokens that counts as a match.
pub const MIN_MATCH: usize = 3;

/// Contents of a single board position, `None` only while a cascade is settling.
pub type Cell = Option<Token>;

/// A token that fell from `from` to `to` during gravity.
pub type Fall = (Coord2, Coord2);

type Run = SmallVec<[Coord2; 8]>;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    cells: Array2<Cell>,
}

impl Grid {
    /// A board of the given `(rows, cols)` size with every cell empty.
    pub fn empty(size: Coord2) -> Self {
        Self {
            cells: Array2::default(size.to_nd_index()),
        }
    }

    /// Builds a board from text rows, one [`Token::symbol`] per cell and `.` for empty cells.
    pub fn from_symbols(rows: &[&str]) -> Result<Self> {
        let width = rows.first().map_or(0, |row| row.chars().count());
        if rows.len() > usize::from(Coord::MAX) || width > usize::from(Coord::MAX) {
            return Err(GameError::InvalidBoardShape);
        }

        let mut cells = Vec::with_capacity(rows.len() * width);
        for row in rows {
            if row.chars().count() != width {
                return Err(GameError::InvalidBoardShape);
            }
            for symbol in row.chars() {
                let cell = match symbol {
                    '.' => None,
                    _ => Some(Token::from_symbol(symbol).ok_or(GameError::InvalidSymbol(symbol))?),
                };
                cells.push(cell);
            }
        }

        let cells = Array2::from_shape_vec((rows.len(), width), cells)
            .map_err(|_| GameError::InvalidBoardShape)?;
        Ok(Self { cells })
    }

    pub fn size(&self) -> Coord2 {
        let (rows, cols) = self.cells.dim();
        (
            Coord::try_from(rows).unwrap_or(Coord::MAX),
            Coord::try_from(cols).unwrap_or(Coord::MAX),
        )
    }

    pub fn total_cells(&self) -> CellCount {
        let (rows, cols) = self.size();
        mult(rows, cols)
    }

    pub fn contains(&self, coords: Coord2) -> bool {
        let size = self.size();
        coords.0 < size.0 && coords.1 < size.1
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        if self.contains(coords) {
            Ok(coords)
        } else {
            Err(GameError::OutOfBounds)
        }
    }

    pub fn iter_positions(&self) -> impl Iterator<Item = Coord2> + use<> {
        iter_positions(self.size())
    }

    /// Cells in row-major order.
    pub fn iter_cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells.iter().copied()
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    pub fn swap(&mut self, a: Coord2, b: Coord2) {
        self.cells.swap(a.to_nd_index(), b.to_nd_index());
    }

    /// Every cell belonging to a horizontal or vertical match that passes through `coords`.
    ///
    /// Only the two runs crossing `coords` are inspected, so a cross or T shape is
    /// reported as the union of both arms. Empty and out-of-range cells never match.
    pub fn matches_through(&self, coords: Coord2) -> BTreeSet<Coord2> {
        let mut matched = BTreeSet::new();
        if !self.contains(coords) {
            return matched;
        }

        for axis in Axis::ALL {
            let run = self.run_through(coords, axis);
            if run.len() >= MIN_MATCH {
                matched.extend(run);
            }
        }
        matched
    }

    /// Union of [`Self::matches_through`] over the whole board, scanned in row-major order.
    pub fn find_matches(&self) -> BTreeSet<Coord2> {
        let mut matched = BTreeSet::new();
        for coords in self.iter_positions() {
            if matched.contains(&coords) {
                continue;
            }
            matched.extend(self.matches_through(coords));
        }
        matched
    }

    pub fn has_matches(&self) -> bool {
        self.iter_positions()
            .any(|coords| !self.matches_through(coords).is_empty())
    }

    /// Compacts every column toward the bottom row, keeping the relative order of tokens.
    pub fn apply_gravity(&mut self) -> Vec<Fall> {
        let (rows, cols) = self.size();
        let mut falls = Vec::new();

        for col in 0..cols {
            let mut target = rows;
            for row in (0..rows).rev() {
                let Some(token) = self[(row, col)] else {
                    continue;
                };
                target -= 1;
                if target != row {
                    self[(target, col)] = Some(token);
                    self[(row, col)] = None;
                    falls.push(((row, col), (target, col)));
                }
            }
        }

        falls
    }

    /// Empty positions, column by column, each column from the top down.
    pub fn empty_cells(&self) -> Vec<Coord2> {
        let (rows, cols) = self.size();
        (0..cols)
            .flat_map(|col| (0..rows).map(move |row| (row, col)))
            .filter(|&coords| self[coords].is_none())
            .collect()
    }

    fn run_through(&self, coords: Coord2, axis: Axis) -> Run {
        let mut run = Run::new();
        let Some(token) = self[coords] else {
            return run;
        };

        run.push(coords);
        let size = self.size();
        let (d_row, d_col) = axis.step();
        for delta in [(-d_row, -d_col), (d_row, d_col)] {
            let mut cursor = coords;
            while let Some(next) = apply_delta(cursor, delta, size) {
                if self[next] != Some(token) {
                    break;
                }
                run.push(next);
                cursor = next;
            }
        }
        run
    }
}

impl Index<Coord2> for Grid {
    type Output = Cell;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.cells[coords.to_nd_index()]
    }
}

impl IndexMut<Coord2> for Grid {
    fn index_mut(&mut self, coords: Coord2) -> &mut Self::Output {
        &mut self.cells[coords.to_nd_index()]
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.rows() {
            for cell in row {
                let symbol = cell.map_or('.', Token::symbol);
                write!(f, "{symbol}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;
    use alloc::vec;

    fn grid(rows: &[&str]) -> Grid {
        Grid::from_symbols(rows).unwrap()
    }

    #[test]
    fn from_symbols_rejects_ragged_rows_and_unknown_symbols() {
        assert_eq!(Grid::from_symbols(&["ab", "a"]), Err(GameError::InvalidBoardShape));
        assert_eq!(Grid::from_symbols(&["ax"]), Err(GameError::InvalidSymbol('x')));
    }

    #[test]
    fn display_round_trips_fixture() {
        let rows = ["aob.", "gspk"];
        assert_eq!(grid(&rows).to_string(), "aob.\ngspk\n");
    }

    #[test]
    fn horizontal_run_of_three() {
        let board = grid(&["oaaab", "bkgsp"]);
        let expected = BTreeSet::from([(0, 1), (0, 2), (0, 3)]);

        assert_eq!(board.matches_through((0, 2)), expected);
        assert_eq!(board.matches_through((0, 1)), expected);
        assert!(board.matches_through((0, 0)).is_empty());
        assert!(board.matches_through((1, 2)).is_empty());
    }

    #[test]
    fn run_of_two_is_not_a_match() {
        let board = grid(&["aab", "bba", "aab"]);
        assert!(board.find_matches().is_empty());
        assert!(!board.has_matches());
    }

    #[test]
    fn long_vertical_run_is_reported_whole() {
        let board = grid(&["ab", "ao", "ag", "as", "bo"]);
        let expected = BTreeSet::from([(0, 0), (1, 0), (2, 0), (3, 0)]);
        assert_eq!(board.matches_through((3, 0)), expected);
    }

    #[test]
    fn cross_shape_unions_both_axes() {
        let board = grid(&[
            "oaob", //
            "aaag", //
            "gaks",
        ]);
        let matched = board.matches_through((1, 1));
        assert_eq!(
            matched,
            BTreeSet::from([(1, 0), (1, 1), (1, 2), (0, 1), (2, 1)])
        );
    }

    #[test]
    fn empty_and_out_of_range_cells_never_match() {
        let board = grid(&["...", "aaa"]);
        assert!(board.matches_through((0, 1)).is_empty());
        assert!(board.matches_through((5, 5)).is_empty());
        assert_eq!(board.find_matches().len(), 3);
    }

    #[test]
    fn find_matches_unions_separate_runs() {
        let board = grid(&[
            "bbbo", //
            "ogka", //
            "sgpa", //
            "kgoa",
        ]);
        let matched = board.find_matches();
        assert_eq!(matched.len(), 9);
        assert!(matched.contains(&(0, 0)));
        assert!(matched.contains(&(3, 1)));
        assert!(matched.contains(&(1, 3)));
    }

    #[test]
    fn gravity_compacts_column_preserving_order() {
        let mut board = grid(&["a", ".", "b", ".", "g"]);

        let falls = board.apply_gravity();

        assert_eq!(board, grid(&[".", ".", "a", "b", "g"]));
        assert_eq!(falls, vec![((2, 0), (3, 0)), ((0, 0), (2, 0))]);
    }

    #[test]
    fn gravity_leaves_settled_columns_alone() {
        let mut board = grid(&["..", "ab", "ob"]);
        assert!(board.apply_gravity().is_empty());
        assert_eq!(board.empty_cells(), vec![(0, 0), (0, 1)]);
    }

    #[test]
    fn empty_cells_are_listed_column_by_column_top_down() {
        let board = grid(&["..a", ".ba", "obg"]);
        assert_eq!(board.empty_cells(), vec![(0, 0), (1, 0), (0, 1)]);
        assert!(!board.is_full());
    }

    #[test]
    fn swap_exchanges_two_cells() {
        let mut board = grid(&["ab"]);
        board.swap((0, 0), (0, 1));
        assert_eq!(board, grid(&["ba"]));
    }

    #[test]
    fn validate_coords_reports_out_of_bounds() {
        let board = Grid::empty((8, 8));
        assert_eq!(board.validate_coords((7, 7)), Ok((7, 7)));
        assert_eq!(board.validate_coords((8, 0)), Err(GameError::OutOfBounds));
        assert_eq!(board.total_cells(), 64);
    }
}
