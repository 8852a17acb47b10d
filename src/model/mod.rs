//! Domain model types (pure).
//!
//! All types in this module are pure data with smart constructors.

pub mod direction;
pub mod domain;
pub mod error;
pub mod key_action;

// Re-export for convenience
pub use direction::Direction;
pub use domain::{DomainValue, InvalidDomainValue, ScrollIndex, ValueDomain};
pub use error::AppError;
pub use key_action::KeyAction;
