/// Single coordinate axis used for board height, width, and positions.
pub type Coord = u8;

/// Count type used for total-cell and match-size counts.
pub type CellCount = u16;

/// Two-dimensional coordinates `(row, col)`, row 0 is the top of the board.
pub type Coord2 = (Coord, Coord);

/// Score points.
pub type Score = u32;

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

pub const fn mult(a: Coord, b: Coord) -> CellCount {
    let a = a as CellCount;
    let b = b as CellCount;
    a.saturating_mul(b)
}

/// Whether `a` and `b` are exactly one orthogonal step apart.
pub const fn is_adjacent(a: Coord2, b: Coord2) -> bool {
    let dr = a.0.abs_diff(b.0);
    let dc = a.1.abs_diff(b.1);
    (dr == 1 && dc == 0) || (dr == 0 && dc == 1)
}

/// Axis along which runs are scanned.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl Axis {
    pub const ALL: [Axis; 2] = [Axis::Horizontal, Axis::Vertical];

    /// Unit step `(d_row, d_col)` in the increasing direction of the axis.
    pub const fn step(self) -> (isize, isize) {
        match self {
            Self::Horizontal => (0, 1),
            Self::Vertical => (1, 0),
        }
    }
}

/// Applies `delta` to `coords`, returning a value only when it remains in bounds.
pub(crate) fn apply_delta(coords: Coord2, delta: (isize, isize), bounds: Coord2) -> Option<Coord2> {
    let (row, col) = coords;
    let (d_row, d_col) = delta;
    let (rows, cols) = bounds;

    let next_row = row.checked_add_signed(d_row.try_into().ok()?)?;
    if next_row >= rows {
        return None;
    }

    let next_col = col.checked_add_signed(d_col.try_into().ok()?)?;
    if next_col >= cols {
        return None;
    }

    Some((next_row, next_col))
}

/// Iterates over every position of a `rows × cols` board in row-major order.
pub fn iter_positions((rows, cols): Coord2) -> impl Iterator<Item = Coord2> {
    (0..rows).flat_map(move |row| (0..cols).map(move |col| (row, col)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    #[test]
    fn adjacency_is_orthogonal_single_step() {
        assert!(is_adjacent((3, 3), (2, 3)));
        assert!(is_adjacent((3, 3), (3, 4)));
        assert!(!is_adjacent((3, 3), (3, 3)));
        assert!(!is_adjacent((3, 3), (4, 4)));
        assert!(!is_adjacent((0, 0), (2, 2)));
        assert!(!is_adjacent((0, 0), (0, 2)));
    }

    #[test]
    fn apply_delta_stays_in_bounds() {
        assert_eq!(apply_delta((0, 0), (-1, 0), (8, 8)), None);
        assert_eq!(apply_delta((7, 7), (0, 1), (8, 8)), None);
        assert_eq!(apply_delta((2, 3), (1, 0), (8, 8)), Some((3, 3)));
    }

    #[test]
    fn positions_are_row_major() {
        let positions: Vec<_> = iter_positions((2, 3)).collect();
        assert_eq!(positions, [(0, 0), (0, 1), (0, 2), (1, 0), (1, 1), (1, 2)]);
    }
}
