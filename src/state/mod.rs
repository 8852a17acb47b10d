//! Picker state machine (pure).
//!
//! All state transitions are testable without a terminal. The only
//! outside world the controller sees is the [`ScrollEngine`] trait.
//!
//! [`ScrollEngine`]: crate::engine::ScrollEngine

pub mod direction_tracker;
pub mod selection;
pub mod snap_resolver;
pub mod step_navigator;

// Re-export for convenience
pub use direction_tracker::DirectionTracker;
pub use selection::{GesturePhase, PickerConfig, SelectionController, ValueChangeListener};
pub use snap_resolver::{resolve, resolve_value};
pub use step_navigator::{can_step_backward, can_step_forward, step_target};
