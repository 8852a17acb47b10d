//! Scroll engine seam.
//!
//! The selection controller never reads pointers or animates anything itself.
//! It talks to a [`ScrollEngine`]: something that knows where the strip is,
//! can be told to move, and reports what happened since it was last asked.

pub mod animator;
pub mod strip;
pub mod synthetic;

pub use animator::{Easing, SnapAnimator};
pub use strip::{StripConfig, StripEngine};
pub use synthetic::{ScrollCommand, SyntheticEngine};

use crate::model::ScrollIndex;

/// Something the engine observed, queued until the controller pumps it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EngineEvent {
    /// The strip moved. Carries the progress at the moment of the move.
    Scroll {
        /// Progress in `[0, 1]` when the move happened.
        progress: f64,
    },
    /// Layout or content changed; the selection should be re-derived.
    ReInit,
    /// The pointer driving a drag was released, or a glide came to rest.
    PointerUp,
}

/// Continuous-position backend driving the picker.
pub trait ScrollEngine {
    /// Current position across the full index range, in `[0, 1]`.
    fn scroll_progress(&self) -> f64;

    /// Move so that `index` sits under the center indicator.
    ///
    /// `animate == false` jumps immediately.
    fn scroll_to(&mut self, index: ScrollIndex, animate: bool);

    /// Drain queued events in arrival order.
    fn take_events(&mut self) -> Vec<EngineEvent>;
}

impl<E: ScrollEngine + ?Sized> ScrollEngine for Box<E> {
    fn scroll_progress(&self) -> f64 {
        (**self).scroll_progress()
    }

    fn scroll_to(&mut self, index: ScrollIndex, animate: bool) {
        (**self).scroll_to(index, animate)
    }

    fn take_events(&mut self) -> Vec<EngineEvent> {
        (**self).take_events()
    }
}
