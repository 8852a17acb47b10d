//! Selection controller: the picker's state machine.
//!
//! Owns the selected value. Scroll samples from the engine update it
//! continuously; a pointer release schedules a settle which, once the delay
//! has passed, snaps the strip to a decade chosen by [`snap_resolver`].
//!
//! # Deferred settle
//!
//! The settle is a deadline, not a captured snapshot. Samples that arrive
//! while the deadline is pending still update the selection and direction,
//! and the settle reads whatever they are when it finally runs.
//!
//! # Commanded moves
//!
//! Animated moves the controller itself asks for (settles and steps) are not
//! gestures. Their samples still update the selection, but the phase stays
//! `Idle`, and landing on the target resets the direction. A sample that moves
//! away from the target means the user took over, which starts a drag.
//!
//! # Readiness
//!
//! Until an engine is attached every operation is a no-op.
//!
//! [`snap_resolver`]: crate::state::snap_resolver

use super::direction_tracker::DirectionTracker;
use super::snap_resolver::resolve_value;
use super::step_navigator::{self, STEP};
use crate::engine::{EngineEvent, ScrollEngine};
use crate::model::{Direction, DomainValue, ScrollIndex, ValueDomain};
use std::fmt;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Callback invoked synchronously whenever the selected value changes.
pub type ValueChangeListener = Box<dyn FnMut(DomainValue)>;

/// Default value selected at mount.
pub const DEFAULT_INITIAL_VALUE: u8 = 10;

/// Default delay between a release and the snap decision.
pub const DEFAULT_SETTLE_DELAY: Duration = Duration::from_millis(150);

/// Host-facing configuration for the picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PickerConfig {
    /// Value selected at mount.
    pub initial_value: DomainValue,
    /// Delay between gesture end and the snap decision.
    pub settle_delay: Duration,
}

impl PickerConfig {
    /// Config with `initial_value` clamped into the domain.
    pub fn new(initial_value: i64) -> Self {
        Self {
            initial_value: ValueDomain::clamp(initial_value),
            settle_delay: DEFAULT_SETTLE_DELAY,
        }
    }

    /// Override the settle delay.
    pub fn with_settle_delay(mut self, settle_delay: Duration) -> Self {
        self.settle_delay = settle_delay;
        self
    }
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self::new(i64::from(DEFAULT_INITIAL_VALUE))
    }
}

/// Samples closer than this to a commanded target count as landed.
const LANDING_TOLERANCE: f64 = 1e-9;

/// Whether a gesture is in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GesturePhase {
    /// No gesture in flight. Samples from a commanded move keep this phase.
    #[default]
    Idle,
    /// Scroll samples from a gesture are arriving.
    Dragging,
}

/// Animated move issued by the controller, tracked until it lands.
#[derive(Debug, Clone, Copy, PartialEq)]
struct CommandedMove {
    target: ScrollIndex,
    /// Progress distance to the target at the latest sample.
    remaining: f64,
}

impl CommandedMove {
    fn start(target: ScrollIndex, progress: f64) -> Option<Self> {
        let remaining = (ValueDomain::progress_of(target) - progress).abs();
        (remaining > LANDING_TOLERANCE).then_some(Self { target, remaining })
    }

    fn distance(&self, progress: f64) -> f64 {
        (ValueDomain::progress_of(self.target) - progress).abs()
    }
}

/// State machine translating engine events into a discrete selection.
pub struct SelectionController<E> {
    config: PickerConfig,
    engine: Option<E>,
    selected: DomainValue,
    last_notified: Option<DomainValue>,
    tracker: DirectionTracker,
    phase: GesturePhase,
    settle_deadline: Option<Instant>,
    commanded: Option<CommandedMove>,
    listener: Option<ValueChangeListener>,
}

impl<E: fmt::Debug> fmt::Debug for SelectionController<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectionController")
            .field("config", &self.config)
            .field("engine", &self.engine)
            .field("selected", &self.selected)
            .field("last_notified", &self.last_notified)
            .field("tracker", &self.tracker)
            .field("phase", &self.phase)
            .field("settle_deadline", &self.settle_deadline)
            .field("commanded", &self.commanded)
            .field("has_listener", &self.listener.is_some())
            .finish()
    }
}

impl<E: ScrollEngine> SelectionController<E> {
    /// Controller with no engine attached yet.
    pub fn new(config: PickerConfig) -> Self {
        Self {
            config,
            engine: None,
            selected: config.initial_value,
            last_notified: None,
            tracker: DirectionTracker::new(),
            phase: GesturePhase::Idle,
            settle_deadline: None,
            commanded: None,
            listener: None,
        }
    }

    /// Builder-style [`SelectionController::set_listener`].
    pub fn with_listener(mut self, listener: impl FnMut(DomainValue) + 'static) -> Self {
        self.set_listener(listener);
        self
    }

    /// Install the value-change callback, replacing any previous one.
    pub fn set_listener(&mut self, listener: impl FnMut(DomainValue) + 'static) {
        self.listener = Some(Box::new(listener));
    }

    /// Attach the engine and run initialization.
    ///
    /// Jumps the engine (no animation) to the configured initial value, then
    /// derives the selection from the engine's progress and notifies once.
    pub fn attach(&mut self, mut engine: E) {
        let index = ValueDomain::to_index(self.config.initial_value);
        info!(initial = %self.config.initial_value, index = index.get(), "attaching scroll engine");
        engine.scroll_to(index, false);

        self.engine = Some(engine);
        self.tracker = DirectionTracker::new();
        self.phase = GesturePhase::Idle;
        self.settle_deadline = None;
        self.commanded = None;
        self.resolve_from_engine();
    }

    /// Release the engine. Cancels a pending settle.
    pub fn detach(&mut self) -> Option<E> {
        if self.settle_deadline.take().is_some() {
            debug!("pending settle cancelled by detach");
        }
        self.phase = GesturePhase::Idle;
        self.commanded = None;
        self.engine.take()
    }

    /// Configuration the controller was built with.
    pub fn config(&self) -> &PickerConfig {
        &self.config
    }

    /// Currently selected value.
    pub fn selected(&self) -> DomainValue {
        self.selected
    }

    /// Current travel direction.
    pub fn direction(&self) -> Direction {
        self.tracker.direction()
    }

    /// Current gesture phase.
    pub fn phase(&self) -> GesturePhase {
        self.phase
    }

    /// Whether an engine is attached.
    pub fn is_attached(&self) -> bool {
        self.engine.is_some()
    }

    /// Whether a settle is scheduled.
    pub fn has_pending_settle(&self) -> bool {
        self.settle_deadline.is_some()
    }

    /// Target of the animated move the controller is waiting on, if any.
    pub fn commanded_target(&self) -> Option<ScrollIndex> {
        self.commanded.map(|commanded| commanded.target)
    }

    /// When the pending settle will run, if one is scheduled.
    pub fn settle_deadline(&self) -> Option<Instant> {
        self.settle_deadline
    }

    /// Attached engine.
    pub fn engine(&self) -> Option<&E> {
        self.engine.as_ref()
    }

    /// Attached engine, mutably (for feeding pointer input).
    pub fn engine_mut(&mut self) -> Option<&mut E> {
        self.engine.as_mut()
    }

    /// Whether the backward step is enabled.
    pub fn can_step_backward(&self) -> bool {
        step_navigator::can_step_backward(self.selected)
    }

    /// Whether the forward step is enabled.
    pub fn can_step_forward(&self) -> bool {
        step_navigator::can_step_forward(self.selected)
    }

    /// A scroll sample arrived.
    pub fn on_scroll_progress(&mut self, progress: f64) {
        if self.engine.is_none() {
            return;
        }
        let Some(mut commanded) = self.commanded else {
            self.phase = GesturePhase::Dragging;
            self.apply_progress(progress);
            return;
        };

        let distance = commanded.distance(progress);
        self.apply_progress(progress);
        if distance <= LANDING_TOLERANCE {
            debug!(index = commanded.target.get(), "commanded move landed");
            self.commanded = None;
            let (_, tracker) = self.tracker.consume();
            self.tracker = tracker;
        } else if distance > commanded.remaining {
            debug!(index = commanded.target.get(), "commanded move interrupted");
            self.commanded = None;
            self.phase = GesturePhase::Dragging;
        } else {
            commanded.remaining = distance;
            self.commanded = Some(commanded);
        }
    }

    /// Layout or content changed: re-derive the selection from the engine.
    pub fn on_re_init(&mut self) {
        self.resolve_from_engine();
    }

    /// The gesture ended. Schedules the settle `settle_delay` after `now`.
    ///
    /// A second release before the deadline re-arms it.
    pub fn on_gesture_end(&mut self, now: Instant) {
        if self.engine.is_none() {
            return;
        }
        self.commanded = None;
        let deadline = now + self.config.settle_delay;
        debug!(delay_ms = self.config.settle_delay.as_millis() as u64, "settle scheduled");
        self.settle_deadline = Some(deadline);
    }

    /// Run the pending settle if its deadline has passed. Returns whether it ran.
    pub fn run_due(&mut self, now: Instant) -> bool {
        match self.settle_deadline {
            Some(deadline) if now >= deadline => {
                self.settle_deadline = None;
                self.settle();
                true
            }
            _ => false,
        }
    }

    /// Dispatch one engine event.
    pub fn handle_event(&mut self, event: EngineEvent, now: Instant) {
        match event {
            EngineEvent::Scroll { progress } => self.on_scroll_progress(progress),
            EngineEvent::ReInit => self.on_re_init(),
            EngineEvent::PointerUp => self.on_gesture_end(now),
        }
    }

    /// Drain the engine's queued events in order, then run a due settle.
    pub fn pump(&mut self, now: Instant) {
        let events = match self.engine.as_mut() {
            Some(engine) => engine.take_events(),
            None => return,
        };
        for event in events {
            self.handle_event(event, now);
        }
        self.run_due(now);
    }

    /// Jump back by one block of ten (animated).
    pub fn step_backward(&mut self) {
        self.step_by(-STEP);
    }

    /// Jump forward by one block of ten (animated).
    pub fn step_forward(&mut self) {
        self.step_by(STEP);
    }

    /// Jump by `delta` slots from the engine's current slot (animated).
    pub fn step_by(&mut self, delta: isize) {
        let Some(engine) = self.engine.as_mut() else {
            return;
        };
        let progress = engine.scroll_progress();
        let current = ValueDomain::index_from_progress(progress);
        let target = step_navigator::step_target(current, delta, ValueDomain::count());
        debug!(from = current.get(), to = target.get(), delta, "step");
        engine.scroll_to(target, true);
        self.commanded = CommandedMove::start(target, progress);
    }

    fn resolve_from_engine(&mut self) {
        let Some(engine) = self.engine.as_ref() else {
            return;
        };
        let progress = engine.scroll_progress();
        self.apply_progress(progress);
    }

    fn apply_progress(&mut self, progress: f64) {
        self.tracker = self.tracker.observe(progress);

        let index = ValueDomain::index_from_progress(progress);
        let value = ValueDomain::to_value(index);
        self.selected = value;

        if self.last_notified != Some(value) {
            self.last_notified = Some(value);
            debug!(%value, progress, direction = self.tracker.direction().as_str(), "selection changed");
            if let Some(listener) = self.listener.as_mut() {
                listener(value);
            }
        }
    }

    fn settle(&mut self) {
        let Some(engine) = self.engine.as_mut() else {
            return;
        };
        let (direction, tracker) = self.tracker.consume();
        self.tracker = tracker;
        self.phase = GesturePhase::Idle;

        let target = resolve_value(self.selected, direction);
        let target_index = ValueDomain::to_index(target);
        let progress = engine.scroll_progress();
        let current_index = ValueDomain::index_from_progress(progress);

        info!(
            selected = %self.selected,
            direction = direction.as_str(),
            %target,
            "settle"
        );
        self.commanded = None;
        if target_index != current_index {
            engine.scroll_to(target_index, true);
            self.commanded = CommandedMove::start(target_index, progress);
        }
    }
}

#[cfg(test)]
#[path = "selection_tests.rs"]
mod tests;
