use crate::*;
pub use random::*;
pub use sequence::*;

mod random;
mod sequence;

/// Source of fresh tokens for board generation and cascade spawns.
pub trait TokenSource {
    /// Draws one token. `palette` is never empty.
    fn draw(&mut self, palette: &[Token]) -> Token;
}

impl<S: TokenSource + ?Sized> TokenSource for &mut S {
    fn draw(&mut self, palette: &[Token]) -> Token {
        (**self).draw(palette)
    }
}

/// Generates a full board with no run of [`MIN_MATCH`] or more identical tokens.
///
/// Every cell is drawn independently, then each pass redraws every cell that takes
/// part in a match until a pass finds none. Gives up with
/// [`GameError::GenerationFailed`] after `config.max_generation_passes` passes.
pub fn generate_board<S: TokenSource>(config: &GameConfig, source: &mut S) -> Result<Grid> {
    let palette = config.palette();
    let mut grid = Grid::empty(config.size);
    for coords in grid.iter_positions() {
        grid[coords] = Some(source.draw(palette));
    }

    let mut passes = 0;
    loop {
        let matched = grid.find_matches();
        if matched.is_empty() {
            log::debug!(
                "Generated {}x{} board with {} kinds after {} passes",
                config.size.0,
                config.size.1,
                palette.len(),
                passes
            );
            return Ok(grid);
        }

        if passes >= config.max_generation_passes {
            log::error!(
                "Board generation gave up after {} passes, {} cells still matching",
                passes,
                matched.len()
            );
            return Err(GameError::GenerationFailed { passes });
        }

        passes += 1;
        log::trace!("Generation pass {}: redrawing {} cells", passes, matched.len());
        for coords in matched {
            grid[coords] = Some(source.draw(palette));
        }
    }
}
