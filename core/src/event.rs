use alloc::vec::Vec;

use serde::{Deserialize, Serialize};

use crate::*;

/// Notification for the presentation layer, in the order changes were applied.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Event {
    /// Matched cells were emptied, in row-major order.
    Cleared { cells: Vec<Coord2> },
    Scored { points: Score },
    /// A token fell down its column.
    Dropped { from: Coord2, to: Coord2 },
    /// A fresh token filled an empty cell.
    Spawned { cell: Coord2, token: Token },
    /// The board has settled and holds no matches.
    Idle,
}

/// One clear → gravity → spawn round of a cascade.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CascadeStep {
    pub cleared: Vec<Coord2>,
    pub points: Score,
    pub falls: Vec<Fall>,
    pub spawned: Vec<(Coord2, Token)>,
}

impl CascadeStep {
    pub fn events(&self) -> impl Iterator<Item = Event> + '_ {
        let cleared = Event::Cleared {
            cells: self.cleared.clone(),
        };
        let scored = Event::Scored {
            points: self.points,
        };
        let dropped = self
            .falls
            .iter()
            .map(|&(from, to)| Event::Dropped { from, to });
        let spawned = self
            .spawned
            .iter()
            .map(|&(cell, token)| Event::Spawned { cell, token });

        [cleared, scored].into_iter().chain(dropped).chain(spawned)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CascadeReport {
    pub steps: Vec<CascadeStep>,
}

impl CascadeReport {
    pub fn total_points(&self) -> Score {
        self.steps
            .iter()
            .fold(0, |total: Score, step| total.saturating_add(step.points))
    }

    /// Number of clear rounds, 1 for a plain match without follow-ups.
    pub fn chain_len(&self) -> usize {
        self.steps.len()
    }

    /// Flattened event stream, always terminated by [`Event::Idle`].
    pub fn events(&self) -> Vec<Event> {
        self.steps
            .iter()
            .flat_map(|step| step.events())
            .chain([Event::Idle])
            .collect()
    }
}

/// Result of a swap attempt. A rejected swap left the board untouched and carries no events.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwapOutcome {
    pub accepted: bool,
    pub events: Vec<Event>,
}

impl SwapOutcome {
    pub const fn rejected() -> Self {
        Self {
            accepted: false,
            events: Vec::new(),
        }
    }

    pub fn from_report(report: &CascadeReport) -> Self {
        Self {
            accepted: true,
            events: report.events(),
        }
    }

    /// Whether this outcome could have caused an update to the board
    pub const fn has_update(&self) -> bool {
        self.accepted
    }

    pub fn points(&self) -> Score {
        self.events
            .iter()
            .filter_map(|event| match event {
                Event::Scored { points } => Some(*points),
                _ => None,
            })
            .fold(0, Score::saturating_add)
    }
}
