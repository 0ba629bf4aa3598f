use alloc::vec::Vec;

use crate::*;

/// Every adjacent pair whose swap would form a match, each pair listed once with the
/// right or lower neighbour second, in row-major order of the first cell.
pub fn productive_swaps(grid: &Grid) -> Vec<(Coord2, Coord2)> {
    let mut scratch = grid.clone();
    candidate_swaps(grid.size())
        .filter(|&(a, b)| swap_forms_match(&mut scratch, a, b))
        .collect()
}

/// First entry of [`productive_swaps`], without scanning the rest of the board.
pub fn find_productive_swap(grid: &Grid) -> Option<(Coord2, Coord2)> {
    let mut scratch = grid.clone();
    candidate_swaps(grid.size()).find(|&(a, b)| swap_forms_match(&mut scratch, a, b))
}

fn candidate_swaps(size: Coord2) -> impl Iterator<Item = (Coord2, Coord2)> {
    iter_positions(size).flat_map(move |coords| {
        Axis::ALL
            .into_iter()
            .filter_map(move |axis| apply_delta(coords, axis.step(), size))
            .map(move |neighbor| (coords, neighbor))
    })
}

/// Swaps, checks both endpoints and swaps back, leaving `grid` unchanged.
fn swap_forms_match(grid: &mut Grid, a: Coord2, b: Coord2) -> bool {
    if grid[a] == grid[b] {
        return false;
    }
    grid.swap(a, b);
    let matched = !grid.matches_through(a).is_empty() || !grid.matches_through(b).is_empty();
    grid.swap(a, b);
    matched
}
