use serde::{Deserialize, Serialize};

use crate::*;

/// Valid transitions:
/// - Ready -> Playing
/// - Playing <-> Paused
/// - any -> Ready (reset)
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionState {
    /// Fresh board, waiting for the player to start
    Ready,
    Playing,
    Paused,
}

impl SessionState {
    pub const fn is_playing(self) -> bool {
        matches!(self, Self::Playing)
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::Ready
    }
}

/// Outcome of clicking a cell
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SelectOutcome {
    /// The cell is now the selection.
    Selected(Coord2),
    /// The selection was dropped without a swap attempt.
    Deselected,
    /// Second click on a neighbour of the selection.
    Swapped(SwapOutcome),
}

impl SelectOutcome {
    /// Whether this outcome could have changed the board
    pub const fn has_update(&self) -> bool {
        match self {
            Self::Selected(_) | Self::Deselected => false,
            Self::Swapped(outcome) => outcome.has_update(),
        }
    }
}

/// One player's game: an engine plus lifecycle state and the current selection.
#[derive(Clone, Debug)]
pub struct GameSession<S = RandomTokenSource> {
    engine: GridEngine<S>,
    state: SessionState,
    selection: Option<Coord2>,
}

impl GameSession<RandomTokenSource> {
    /// Session with a default 8×8 board drawn from `seed`.
    pub fn with_seed(seed: u64) -> Result<Self> {
        Self::new(GameConfig::default(), RandomTokenSource::new(seed))
    }
}

impl<S: TokenSource> GameSession<S> {
    pub fn new(config: GameConfig, source: S) -> Result<Self> {
        Ok(Self::from_engine(GridEngine::new(config, source)?))
    }

    pub fn from_engine(engine: GridEngine<S>) -> Self {
        Self {
            engine,
            state: Default::default(),
            selection: None,
        }
    }

    pub fn engine(&self) -> &GridEngine<S> {
        &self.engine
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn selection(&self) -> Option<Coord2> {
        self.selection
    }

    pub fn score(&self) -> Score {
        self.engine.score()
    }

    pub fn level(&self) -> u32 {
        self.engine.level()
    }

    pub fn observe(&self) -> Observation {
        Observation::from_engine(&self.engine)
    }

    pub fn start(&mut self) {
        if !self.state.is_playing() {
            log::debug!("Session started from {:?}", self.state);
            self.state = SessionState::Playing;
        }
    }

    /// Flips between playing and paused, no effect before the game is started.
    pub fn toggle_pause(&mut self) -> SessionState {
        self.state = match self.state {
            SessionState::Ready => SessionState::Ready,
            SessionState::Playing => SessionState::Paused,
            SessionState::Paused => SessionState::Playing,
        };
        self.state
    }

    /// New board, zero score, no selection, back to [`SessionState::Ready`].
    pub fn reset(&mut self) -> Result<()> {
        self.engine.reset()?;
        self.selection = None;
        self.state = SessionState::Ready;
        Ok(())
    }

    /// Handles a click on `coords`: the first click selects, the second one either
    /// attempts a swap with an adjacent selection or drops the selection.
    pub fn select(&mut self, coords: Coord2) -> Result<SelectOutcome> {
        self.check_playing()?;
        let coords = self.engine.grid().validate_coords(coords)?;

        let Some(selected) = self.selection.take() else {
            self.selection = Some(coords);
            return Ok(SelectOutcome::Selected(coords));
        };

        if is_adjacent(selected, coords) {
            Ok(SelectOutcome::Swapped(self.engine.attempt_swap(selected, coords)?))
        } else {
            Ok(SelectOutcome::Deselected)
        }
    }

    /// Swaps two cells directly, as for a drag gesture. Any selection is dropped.
    pub fn swap(&mut self, a: Coord2, b: Coord2) -> Result<SwapOutcome> {
        self.check_playing()?;
        self.selection = None;
        self.engine.attempt_swap(a, b)
    }

    fn check_playing(&self) -> Result<()> {
        if self.state.is_playing() {
            Ok(())
        } else {
            Err(GameError::NotPlaying)
        }
    }
}
