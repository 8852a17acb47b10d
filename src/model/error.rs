//! Error types for the tickpick application.
//!
//! The picker core is total and never fails. Errors only arise in the impure
//! shell: reading configuration, installing the log subscriber, and driving
//! the terminal.
//!
//! # Error Hierarchy
//!
//! - [`AppError`] - Top-level application error
//!   - [`ConfigError`] - Config file read or parse failures
//!   - [`LoggingError`] - Log directory or subscriber setup failures
//!   - [`TuiError`] - Terminal IO failures
//!
//! All of them are fatal and propagate to `main`.

use crate::config::ConfigError;
use crate::logging::LoggingError;
use crate::view::TuiError;
use thiserror::Error;

/// Top-level application error encompassing all failure modes.
///
/// # Examples
///
/// ```no_run
/// use tickpick::model::error::AppError;
/// use tickpick::config::ConfigError;
///
/// fn run_app() -> Result<(), AppError> {
///     // ConfigError converts to AppError via From
///     load()?;
///     Ok(())
/// }
/// # fn load() -> Result<(), ConfigError> { Ok(()) }
/// ```
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Logging could not be initialised.
    #[error("Logging error: {0}")]
    Logging(#[from] LoggingError),

    /// Terminal setup, rendering or teardown failed.
    #[error("Terminal error: {0}")]
    Tui(#[from] TuiError),
}
