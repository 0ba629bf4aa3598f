use alloc::vec::Vec;

use serde::{Deserialize, Serialize};

use crate::*;

/// Read-only snapshot of a game for renderers and other observers.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Observation {
    pub size: Coord2,
    /// Board contents in row-major order.
    pub cells: Vec<Cell>,
    pub score: Score,
    pub level: u32,
    pub moves: u32,
    pub has_moves: bool,
}

impl Observation {
    pub fn from_engine<S: TokenSource>(engine: &GridEngine<S>) -> Self {
        Self {
            size: engine.size(),
            cells: engine.grid().iter_cells().collect(),
            score: engine.score(),
            level: engine.level(),
            moves: engine.moves(),
            has_moves: engine.hint().is_some(),
        }
    }

    pub fn token_at(&self, (row, col): Coord2) -> Option<Token> {
        let (rows, cols) = self.size;
        if row >= rows || col >= cols {
            return None;
        }
        self.cells[usize::from(row) * usize::from(cols) + usize::from(col)]
    }

    /// Rebuilds the board, failing if `cells` does not fit `size`.
    pub fn to_grid(&self) -> Result<Grid> {
        let mut grid = Grid::empty(self.size);
        if self.cells.len() != usize::from(grid.total_cells()) {
            return Err(GameError::InvalidBoardShape);
        }
        for (coords, &cell) in grid.iter_positions().zip(&self.cells) {
            grid[coords] = cell;
        }
        Ok(grid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_engine_copies_board_and_score() {
        let grid = Grid::from_symbols(&["aoag", "kasp", "spkb", "obgs"]).unwrap();
        let source = SequenceTokenSource::new(Vec::from([Token::Grape, Token::Kiwi, Token::Banana]));
        let mut engine = GridEngine::with_grid(GameConfig::default(), grid, source);
        engine.attempt_swap((0, 1), (1, 1)).unwrap();

        let obs = Observation::from_engine(&engine);

        assert_eq!(obs.size, (4, 4));
        assert_eq!(obs.score, 90);
        assert_eq!(obs.level, 1);
        assert_eq!(obs.moves, 1);
        assert_eq!(obs.cells.len(), 16);
        assert_eq!(obs.token_at((0, 0)), Some(Token::Grape));
        assert_eq!(obs.token_at((1, 1)), Some(Token::Orange));
        assert_eq!(obs.token_at((3, 3)), Some(Token::Strawberry));
        assert_eq!(obs.token_at((9, 9)), None);
        assert_eq!(obs.to_grid().as_ref(), Ok(engine.grid()));
    }

    #[test]
    fn serializes_for_the_wire() {
        let engine = GridEngine::new(GameConfig::new((3, 3), 8), RandomTokenSource::new(11)).unwrap();
        let obs = Observation::from_engine(&engine);

        let json = serde_json::to_string(&obs).unwrap();
        let back: Observation = serde_json::from_str(&json).unwrap();

        assert!(json.contains(r#""cells":["#));
        assert_eq!(back, obs);
    }
}
