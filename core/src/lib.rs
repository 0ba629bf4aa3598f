//! Match-3 grid engine: board generation, swap validation, match detection,
//! cascade resolution and scoring for an 8×8 board of fruit tokens.
//!
//! The engine is synchronous and knows nothing about rendering. A presentation
//! layer drives it through [`GameSession`] or [`GridEngine`] and animates the
//! returned [`Event`]s.

#![no_std]

extern crate alloc;

use serde::{Deserialize, Serialize};

pub use analysis::*;
pub use engine::*;
pub use error::*;
pub use event::*;
pub use generator::*;
pub use grid::*;
pub use scoring::*;
pub use session::*;
pub use token::*;
pub use types::*;

mod analysis;
mod engine;
mod error;
mod event;
mod generator;
mod grid;
mod scoring;
mod session;
mod token;
mod types;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Board `(rows, cols)`.
    pub size: Coord2,
    /// How many palette kinds are drawn, `1..=Token::COUNT`.
    pub kinds: u8,
    pub points_per_level: Score,
    /// Redraw passes allowed before generation is declared failed.
    pub max_generation_passes: u32,
    /// Clear rounds allowed in one cascade.
    pub max_cascade_steps: u32,
}

impl GameConfig {
    pub const DEFAULT_SIZE: Coord2 = (8, 8);
    pub const DEFAULT_POINTS_PER_LEVEL: Score = 1000;
    pub const DEFAULT_MAX_GENERATION_PASSES: u32 = 1000;
    pub const DEFAULT_MAX_CASCADE_STEPS: u32 = 256;

    pub const fn new_unchecked(size: Coord2, kinds: u8) -> Self {
        Self {
            size,
            kinds,
            points_per_level: Self::DEFAULT_POINTS_PER_LEVEL,
            max_generation_passes: Self::DEFAULT_MAX_GENERATION_PASSES,
            max_cascade_steps: Self::DEFAULT_MAX_CASCADE_STEPS,
        }
    }

    pub fn new((rows, cols): Coord2, kinds: u8) -> Self {
        let rows = rows.clamp(1, Coord::MAX);
        let cols = cols.clamp(1, Coord::MAX);
        let max_kinds = Token::COUNT as u8;
        if kinds == 0 || kinds > max_kinds {
            log::warn!("Requested {} token kinds, clamped to 1..={}", kinds, max_kinds);
        }
        let kinds = kinds.clamp(1, max_kinds);
        Self::new_unchecked((rows, cols), kinds)
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.size.0, self.size.1)
    }

    pub fn palette(&self) -> &'static [Token] {
        Token::palette(self.kinds)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new_unchecked(Self::DEFAULT_SIZE, Token::COUNT as u8)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_eight_by_eight_full_palette() {
        let config = GameConfig::default();
        assert_eq!(config.size, (8, 8));
        assert_eq!(config.total_cells(), 64);
        assert_eq!(config.palette(), &Token::ALL);
    }

    #[test]
    fn new_clamps_size_and_kinds() {
        let config = GameConfig::new((0, 5), 12);
        assert_eq!(config.size, (1, 5));
        assert_eq!(config.kinds, 8);
        assert_eq!(GameConfig::new((4, 4), 0).kinds, 1);
    }
}
