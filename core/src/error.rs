use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Position is outside the grid")]
    OutOfBounds,
    #[error("Cells are not adjacent")]
    NotAdjacent,
    #[error("Board generation did not settle after {passes} passes")]
    GenerationFailed { passes: u32 },
    #[error("Cascade did not settle after {steps} steps")]
    CascadeLimitExceeded { steps: u32 },
    #[error("Game is not running, no moves are accepted")]
    NotPlaying,
    #[error("Board rows do not have the same length")]
    InvalidBoardShape,
    #[error("Unknown token symbol {0:?}")]
    InvalidSymbol(char),
}

pub type Result<T> = core::result::Result<T, GameError>;
