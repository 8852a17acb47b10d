//! Terminal scroll engine for the tick strip.
//!
//! Position is continuous and measured in slots (one slot per value). A
//! pointer drag moves the strip column by column; releasing keeps the strip
//! gliding with the release velocity and exponential deceleration, the way a
//! free-drag carousel does. A glide that comes to rest reports another
//! `PointerUp`. `scroll_to` either jumps or tweens with [`SnapAnimator`].
//!
//! Every method that observes time takes `now` explicitly. `scroll_to` has no
//! time argument, so the engine remembers the latest instant it was given and
//! starts tweens from there.

use super::animator::{Easing, SnapAnimator};
use super::{EngineEvent, ScrollEngine};
use crate::model::{ScrollIndex, ValueDomain};
use std::time::{Duration, Instant};
use tracing::debug;

/// Below this speed (slots per second) inertia stops.
const MIN_VELOCITY: f64 = 0.05;

/// A drag held still for longer than this releases with zero velocity.
const RELEASE_STILL_WINDOW: Duration = Duration::from_millis(100);

/// Weight of the newest drag segment in the smoothed release velocity.
const VELOCITY_SMOOTHING: f64 = 0.5;

/// Tunables for [`StripEngine`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StripConfig {
    /// Number of slots on the strip.
    pub count: usize,
    /// Terminal columns between neighbouring ticks.
    pub columns_per_tick: u16,
    /// Duration of animated `scroll_to` moves.
    pub animation: Duration,
    /// Exponential decay rate of inertia, per second.
    pub deceleration: f64,
}

impl Default for StripConfig {
    fn default() -> Self {
        Self {
            count: ValueDomain::COUNT,
            columns_per_tick: 3,
            animation: Duration::from_millis(250),
            deceleration: 6.0,
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct Drag {
    last_column: u16,
    last_at: Instant,
    velocity: f64,
}

/// Free-drag strip with inertia and animated snapping.
#[derive(Debug, Clone)]
pub struct StripEngine {
    config: StripConfig,
    position: f64,
    velocity: f64,
    drag: Option<Drag>,
    animator: SnapAnimator,
    clock: Instant,
    viewport_width: u16,
    events: Vec<EngineEvent>,
}

impl StripEngine {
    /// New engine resting on slot 0.
    pub fn new(config: StripConfig, now: Instant) -> Self {
        Self {
            config: StripConfig {
                columns_per_tick: config.columns_per_tick.max(1),
                ..config
            },
            position: 0.0,
            velocity: 0.0,
            drag: None,
            animator: SnapAnimator::new(),
            clock: now,
            viewport_width: 0,
            events: Vec::new(),
        }
    }

    /// Engine configuration.
    pub fn config(&self) -> &StripConfig {
        &self.config
    }

    /// Continuous position in slots.
    pub fn position(&self) -> f64 {
        self.position
    }

    /// Current inertial velocity in slots per second.
    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    /// Whether a pointer is currently held down on the strip.
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Whether the strip will keep moving without further input.
    pub fn is_moving(&self) -> bool {
        self.animator.is_active() || self.velocity != 0.0
    }

    /// Width last reported through [`StripEngine::set_viewport_width`].
    pub fn viewport_width(&self) -> u16 {
        self.viewport_width
    }

    fn max_position(&self) -> f64 {
        self.config.count.saturating_sub(1) as f64
    }

    fn observe_time(&mut self, now: Instant) {
        if now > self.clock {
            self.clock = now;
        }
    }

    fn set_position(&mut self, position: f64) {
        let clamped = position.clamp(0.0, self.max_position());
        if clamped != self.position {
            self.position = clamped;
            let progress = self.scroll_progress();
            self.events.push(EngineEvent::Scroll { progress });
        }
    }

    /// Start a drag at `column`. Cancels any glide or tween in flight.
    pub fn pointer_down(&mut self, column: u16, now: Instant) {
        self.observe_time(now);
        self.animator.cancel();
        self.velocity = 0.0;
        self.drag = Some(Drag {
            last_column: column,
            last_at: now,
            velocity: 0.0,
        });
    }

    /// Move the held pointer to `column`. Dragging left advances the strip.
    pub fn pointer_move(&mut self, column: u16, now: Instant) {
        let Some(mut drag) = self.drag else {
            return;
        };
        self.observe_time(now);

        let delta_columns = f64::from(column) - f64::from(drag.last_column);
        let delta_slots = -delta_columns / f64::from(self.config.columns_per_tick);
        self.set_position(self.position + delta_slots);

        let dt = now.saturating_duration_since(drag.last_at).as_secs_f64();
        if dt > 0.0 {
            let instant_velocity = delta_slots / dt;
            drag.velocity =
                VELOCITY_SMOOTHING * instant_velocity + (1.0 - VELOCITY_SMOOTHING) * drag.velocity;
        }
        drag.last_column = column;
        drag.last_at = now;
        self.drag = Some(drag);
    }

    /// Release the pointer. The strip keeps gliding with the drag velocity.
    pub fn pointer_up(&mut self, now: Instant) {
        let Some(drag) = self.drag.take() else {
            return;
        };
        self.observe_time(now);

        let held_still = now.saturating_duration_since(drag.last_at) > RELEASE_STILL_WINDOW;
        self.velocity = if held_still { 0.0 } else { drag.velocity };
        debug!(velocity = self.velocity, position = self.position, "pointer released");
        self.events.push(EngineEvent::PointerUp);
    }

    /// Throw the strip with `velocity` slots per second, as a release would.
    pub fn fling(&mut self, velocity: f64, now: Instant) {
        self.observe_time(now);
        self.drag = None;
        self.animator.cancel();
        self.velocity = velocity;
        self.events.push(EngineEvent::PointerUp);
    }

    /// Report a new viewport width. A change re-initialises the layout.
    pub fn set_viewport_width(&mut self, width: u16) {
        if width != self.viewport_width {
            self.viewport_width = width;
            self.events.push(EngineEvent::ReInit);
        }
    }

    /// Step the tween or the glide forward to `now`.
    pub fn advance(&mut self, now: Instant) {
        let dt = now.saturating_duration_since(self.clock).as_secs_f64();
        self.observe_time(now);

        if let Some(next) = self.animator.tick(now) {
            self.set_position(next);
            return;
        }
        if self.drag.is_some() || self.velocity == 0.0 || dt == 0.0 {
            return;
        }

        self.set_position(self.position + self.velocity * dt);
        self.velocity *= (-self.config.deceleration * dt).exp();

        let at_edge = self.position <= 0.0 || self.position >= self.max_position();
        if at_edge || self.velocity.abs() < MIN_VELOCITY {
            self.velocity = 0.0;
            // Coming to rest ends the gesture again so the selection re-settles
            // wherever the glide stopped.
            self.events.push(EngineEvent::PointerUp);
        }
    }
}

impl ScrollEngine for StripEngine {
    fn scroll_progress(&self) -> f64 {
        let max = self.max_position();
        if max == 0.0 {
            0.0
        } else {
            self.position / max
        }
    }

    fn scroll_to(&mut self, index: ScrollIndex, animate: bool) {
        let target = (index.get() as f64).min(self.max_position());
        self.velocity = 0.0;
        debug!(index = index.get(), animate, "scroll_to");
        if animate {
            self.animator.start(
                self.position,
                target,
                self.clock,
                self.config.animation,
                Easing::EaseOut,
            );
        } else {
            self.animator.cancel();
            self.set_position(target);
        }
    }

    fn take_events(&mut self) -> Vec<EngineEvent> {
        std::mem::take(&mut self.events)
    }
}

#[cfg(test)]
#[path = "strip_tests.rs"]
mod tests;
