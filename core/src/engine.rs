use alloc::collections::BTreeSet;
use alloc::vec::Vec;
use core::num::Saturating;

use crate::*;

/// Owns a board, the token source that refills it, and the running score.
///
/// Every mutating call takes `&mut self` and runs to completion, so a cascade can
/// never be interleaved with another swap.
#[derive(Clone, Debug)]
pub struct GridEngine<S = RandomTokenSource> {
    config: GameConfig,
    grid: Grid,
    source: S,
    score: Saturating<Score>,
    moves: Saturating<u32>,
}

impl<S: TokenSource> GridEngine<S> {
    /// Starts a game on a freshly generated, match-free board.
    pub fn new(config: GameConfig, mut source: S) -> Result<Self> {
        let grid = generate_board(&config, &mut source)?;
        Ok(Self::from_parts(config, grid, source))
    }

    /// Starts a game on a prepared board. The board size overrides `config.size`.
    ///
    /// The board is taken as is, even if it already contains matches.
    pub fn with_grid(config: GameConfig, grid: Grid, source: S) -> Self {
        let config = GameConfig {
            size: grid.size(),
            ..config
        };
        Self::from_parts(config, grid, source)
    }

    fn from_parts(config: GameConfig, grid: Grid, source: S) -> Self {
        Self {
            config,
            grid,
            source,
            score: Saturating(0),
            moves: Saturating(0),
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn size(&self) -> Coord2 {
        self.grid.size()
    }

    pub fn score(&self) -> Score {
        self.score.0
    }

    pub fn level(&self) -> u32 {
        level_for_score(self.score.0, self.config.points_per_level)
    }

    /// Number of accepted swaps since the last reset.
    pub fn moves(&self) -> u32 {
        self.moves.0
    }

    pub fn token_at(&self, coords: Coord2) -> Result<Option<Token>> {
        let coords = self.grid.validate_coords(coords)?;
        Ok(self.grid[coords])
    }

    /// First swap that would produce a match, if the board has one.
    pub fn hint(&self) -> Option<(Coord2, Coord2)> {
        find_productive_swap(&self.grid)
    }

    /// Replaces the board with a freshly generated one and zeroes the score.
    ///
    /// On failure the current board and score are kept.
    pub fn reset(&mut self) -> Result<&Grid> {
        let grid = generate_board(&self.config, &mut self.source)?;
        self.grid = grid;
        self.score = Saturating(0);
        self.moves = Saturating(0);
        log::debug!("Engine reset");
        Ok(&self.grid)
    }

    /// Swaps two adjacent cells and resolves the resulting cascade.
    ///
    /// A swap that forms no match through either cell is undone and reported with
    /// `accepted: false`; the board is then exactly as before the call. The same
    /// holds when the cascade fails: board, score and move count are untouched.
    pub fn attempt_swap(&mut self, a: Coord2, b: Coord2) -> Result<SwapOutcome> {
        let a = self.grid.validate_coords(a)?;
        let b = self.grid.validate_coords(b)?;
        if !is_adjacent(a, b) {
            return Err(GameError::NotAdjacent);
        }

        self.grid.swap(a, b);
        let mut matched = self.grid.matches_through(a);
        matched.extend(self.grid.matches_through(b));

        if matched.is_empty() {
            self.grid.swap(a, b);
            log::debug!("Swap {:?} <-> {:?} rejected, no match", a, b);
            return Ok(SwapOutcome::rejected());
        }

        log::debug!("Swap {:?} <-> {:?} matched {} cells", a, b, matched.len());
        let report = match self.resolve_cascade(matched) {
            Ok(report) => report,
            Err(err) => {
                self.grid.swap(a, b);
                return Err(err);
            }
        };
        self.moves += 1;
        Ok(SwapOutcome::from_report(&report))
    }

    /// Clears `initial`, then keeps applying gravity, spawning and rescanning the
    /// whole board, clearing every match found per pass, until no match remains.
    ///
    /// Fails with [`GameError::CascadeLimitExceeded`] once
    /// `config.max_cascade_steps` clear rounds did not settle the board. Board and
    /// score are then rolled back to their state on entry.
    pub fn resolve_cascade(&mut self, initial: BTreeSet<Coord2>) -> Result<CascadeReport> {
        let checkpoint = (self.grid.clone(), self.score);
        let mut report = CascadeReport::default();
        let mut matched = initial;
        matched.retain(|&coords| self.grid.contains(coords) && self.grid[coords].is_some());

        while !matched.is_empty() {
            let steps = report.steps.len();
            if steps >= self.config.max_cascade_steps as usize {
                log::error!("Cascade still matching after {} steps, rolling back", steps);
                (self.grid, self.score) = checkpoint;
                return Err(GameError::CascadeLimitExceeded {
                    steps: self.config.max_cascade_steps,
                });
            }

            let step = self.clear_and_refill(&matched);
            log::trace!(
                "Cascade step {}: cleared {}, scored {}, {} falls\n{}",
                steps + 1,
                step.cleared.len(),
                step.points,
                step.falls.len(),
                self.grid
            );
            report.steps.push(step);
            matched = self.grid.find_matches();
        }

        log::debug!(
            "Cascade settled after {} steps for {} points, score {}",
            report.chain_len(),
            report.total_points(),
            self.score.0
        );
        Ok(report)
    }

    fn clear_and_refill(&mut self, matched: &BTreeSet<Coord2>) -> CascadeStep {
        let points = match_points(&self.grid, matched);
        self.score += points;

        for &coords in matched {
            self.grid[coords] = None;
        }
        let falls = self.grid.apply_gravity();

        let palette = self.config.palette();
        let spawned: Vec<_> = self
            .grid
            .empty_cells()
            .into_iter()
            .map(|coords| {
                let token = self.source.draw(palette);
                self.grid[coords] = Some(token);
                (coords, token)
            })
            .collect();

        CascadeStep {
            cleared: matched.iter().copied().collect(),
            points,
            falls,
            spawned,
        }
    }
}
