//! Scripted scroll engine for tests and headless drivers.
//!
//! The script pushes progress samples and gesture signals; the engine records
//! every command it receives so callers can assert on them.

use super::{EngineEvent, ScrollEngine};
use crate::model::{ScrollIndex, ValueDomain};

/// A `scroll_to` call received by [`SyntheticEngine`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollCommand {
    /// Requested slot.
    pub index: ScrollIndex,
    /// Whether the move was to be animated.
    pub animate: bool,
}

/// Engine whose position is set by a script.
#[derive(Debug, Clone, Default)]
pub struct SyntheticEngine {
    progress: f64,
    commands: Vec<ScrollCommand>,
    events: Vec<EngineEvent>,
    follow_commands: bool,
}

impl SyntheticEngine {
    /// Engine at progress 0 that records commands without moving.
    pub fn new() -> Self {
        Self::default()
    }

    /// Engine that also jumps to every commanded slot, animated or not.
    pub fn following() -> Self {
        Self {
            follow_commands: true,
            ..Self::default()
        }
    }

    /// Move to `progress` and queue a scroll sample.
    pub fn scroll(&mut self, progress: f64) {
        self.progress = progress;
        self.events.push(EngineEvent::Scroll { progress });
    }

    /// Move to `progress` silently, without queueing an event.
    pub fn set_progress(&mut self, progress: f64) {
        self.progress = progress;
    }

    /// Queue a pointer release.
    pub fn release(&mut self) {
        self.events.push(EngineEvent::PointerUp);
    }

    /// Queue a layout re-initialisation.
    pub fn re_init(&mut self) {
        self.events.push(EngineEvent::ReInit);
    }

    /// Every command received so far, oldest first.
    pub fn commands(&self) -> &[ScrollCommand] {
        &self.commands
    }

    /// Most recent command, if any.
    pub fn last_command(&self) -> Option<ScrollCommand> {
        self.commands.last().copied()
    }

    /// Forget recorded commands.
    pub fn clear_commands(&mut self) {
        self.commands.clear();
    }
}

impl ScrollEngine for SyntheticEngine {
    fn scroll_progress(&self) -> f64 {
        self.progress
    }

    fn scroll_to(&mut self, index: ScrollIndex, animate: bool) {
        self.commands.push(ScrollCommand { index, animate });
        if self.follow_commands {
            self.progress = ValueDomain::progress_of(index);
        }
    }

    fn take_events(&mut self) -> Vec<EngineEvent> {
        std::mem::take(&mut self.events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_commands_in_order() {
        let mut engine = SyntheticEngine::new();
        engine.scroll_to(ScrollIndex::new(9), false);
        engine.scroll_to(ScrollIndex::new(19), true);

        assert_eq!(
            engine.commands(),
            &[
                ScrollCommand { index: ScrollIndex::new(9), animate: false },
                ScrollCommand { index: ScrollIndex::new(19), animate: true },
            ]
        );
        assert_eq!(engine.scroll_progress(), 0.0, "plain engine does not move");
    }

    #[test]
    fn following_engine_moves_to_commanded_slot() {
        let mut engine = SyntheticEngine::following();
        engine.scroll_to(ScrollIndex::new(59), true);
        assert_eq!(engine.scroll_progress(), 1.0);
    }

    #[test]
    fn scripted_events_drain_in_order() {
        let mut engine = SyntheticEngine::new();
        engine.scroll(0.1);
        engine.release();
        engine.re_init();

        assert_eq!(
            engine.take_events(),
            vec![
                EngineEvent::Scroll { progress: 0.1 },
                EngineEvent::PointerUp,
                EngineEvent::ReInit,
            ]
        );
        assert!(engine.take_events().is_empty());
    }
}
