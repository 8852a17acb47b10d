//! Direction inference from successive scroll-progress samples.
//!
//! A tiny explicit state object updated by a pure transition function. The
//! tracker never looks at time or pointer state, only at the order of samples.

use crate::model::Direction;

/// Last observed progress sample and the trend derived from it.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DirectionTracker {
    last_progress: Option<f64>,
    direction: Direction,
}

impl DirectionTracker {
    /// Fresh tracker: no prior sample, direction unknown.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current direction.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Most recent sample, if any.
    pub fn last_progress(&self) -> Option<f64> {
        self.last_progress
    }

    /// Feed one sample.
    ///
    /// - greater than the previous sample: `Forward`
    /// - smaller than the previous sample: `Backward`
    /// - equal (or the first sample): direction unchanged
    pub fn observe(self, progress: f64) -> Self {
        let direction = match self.last_progress {
            Some(previous) if progress > previous => Direction::Forward,
            Some(previous) if progress < previous => Direction::Backward,
            _ => self.direction,
        };
        Self {
            last_progress: Some(progress),
            direction,
        }
    }

    /// Hand the current direction to a snap decision and reset it to `Unknown`.
    ///
    /// The last sample is kept so the next gesture compares against where the
    /// strip actually is.
    pub fn consume(self) -> (Direction, Self) {
        (
            self.direction,
            Self {
                last_progress: self.last_progress,
                direction: Direction::Unknown,
            },
        )
    }
}
