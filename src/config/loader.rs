//! Configuration file loading with precedence handling.

use crate::engine::StripConfig;
use crate::model::{DomainValue, ValueDomain};
use crate::state::selection::{PickerConfig, DEFAULT_INITIAL_VALUE, DEFAULT_SETTLE_DELAY};
use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;
use tracing::warn;

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV: &str = "TICKPICK_CONFIG";

/// Environment variable overriding the initial value.
pub const INITIAL_VALUE_ENV: &str = "TICKPICK_INITIAL_VALUE";

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Failed to read config file (permission issues, not a file, ...).
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML syntax or unknown keys.
    #[error("Invalid TOML in {path}: {reason}")]
    ParseError {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },
}

/// TOML configuration file structure.
///
/// All fields are optional - if not specified, hardcoded defaults are used.
/// Corresponds to `~/.config/tickpick/config.toml`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Value selected at startup. Clamped into 1..=60.
    #[serde(default)]
    pub initial_value: Option<i64>,

    /// Delay between releasing the strip and snapping, in milliseconds.
    #[serde(default)]
    pub settle_delay_ms: Option<u64>,

    /// Duration of animated moves, in milliseconds.
    #[serde(default)]
    pub animation_ms: Option<u64>,

    /// Exponential decay rate of free-drag inertia, per second.
    #[serde(default)]
    pub deceleration: Option<f64>,

    /// Terminal columns between neighbouring ticks.
    #[serde(default)]
    pub columns_per_tick: Option<u16>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,
}

/// Resolved configuration after applying precedence rules.
///
/// Created by merging defaults, config file, env vars, and CLI args.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    /// Value selected at startup.
    pub initial_value: DomainValue,
    /// Delay before the snap decision.
    pub settle_delay: Duration,
    /// Duration of animated moves.
    pub animation: Duration,
    /// Inertia decay rate, per second.
    pub deceleration: f64,
    /// Columns between ticks.
    pub columns_per_tick: u16,
    /// Path to log file for tracing output.
    pub log_file_path: PathBuf,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        let strip = StripConfig::default();
        Self {
            initial_value: ValueDomain::clamp(i64::from(DEFAULT_INITIAL_VALUE)),
            settle_delay: DEFAULT_SETTLE_DELAY,
            animation: strip.animation,
            deceleration: strip.deceleration,
            columns_per_tick: strip.columns_per_tick,
            log_file_path: default_log_path(),
        }
    }
}

impl ResolvedConfig {
    /// Picker settings for the selection controller.
    pub fn picker_config(&self) -> PickerConfig {
        PickerConfig::new(i64::from(self.initial_value.get())).with_settle_delay(self.settle_delay)
    }

    /// Engine settings for the terminal strip.
    pub fn strip_config(&self) -> StripConfig {
        StripConfig {
            count: ValueDomain::COUNT,
            columns_per_tick: self.columns_per_tick,
            animation: self.animation,
            deceleration: self.deceleration,
        }
    }
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/tickpick/tickpick.log` on Unix-like systems,
/// or appropriate platform path on other systems.
///
/// If state directory cannot be determined, falls back to current directory.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("tickpick").join("tickpick.log")
    } else {
        PathBuf::from("tickpick.log")
    }
}

/// Resolve default config file path.
///
/// Returns `~/.config/tickpick/config.toml` on Unix, appropriate path on other platforms.
/// Returns `None` if home directory cannot be determined.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("tickpick").join("config.toml"))
}

/// Load configuration file from a specific path.
///
/// Returns `Ok(None)` if file doesn't exist (not an error - use defaults).
///
/// # Errors
///
/// Returns error if file exists but has read or parse errors.
pub fn load_config_file(path: impl Into<PathBuf>) -> Result<Option<ConfigFile>, ConfigError> {
    let path = path.into();

    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    let config: ConfigFile = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    Ok(Some(config))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (CLI `--config`)
/// 2. `TICKPICK_CONFIG` environment variable
/// 3. Default path `~/.config/tickpick/config.toml`
///
/// Missing config files are NOT errors - defaults are used.
///
/// # Errors
///
/// Returns error only if a config file exists but cannot be read or parsed.
pub fn load_config_with_precedence(
    config_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    if let Some(path) = config_path {
        return load_config_file(path);
    }

    if let Ok(env_path) = std::env::var(CONFIG_ENV) {
        return load_config_file(PathBuf::from(env_path));
    }

    if let Some(default_path) = default_config_path() {
        return load_config_file(default_path);
    }

    Ok(None)
}

/// Log file named by the config file, or the default one.
///
/// Needed before the rest of the chain resolves, so that warnings raised while
/// merging reach the installed subscriber.
pub fn log_path_for(config_file: Option<&ConfigFile>) -> PathBuf {
    config_file
        .and_then(|config| config.log_file_path.clone())
        .unwrap_or_else(default_log_path)
}

/// Run the rest of the chain: config file, then env vars, then CLI args.
pub fn resolve_config(
    config_file: Option<ConfigFile>,
    initial_override: Option<i64>,
    settle_ms_override: Option<u64>,
) -> ResolvedConfig {
    let merged = merge_config(config_file);
    let with_env = apply_env_overrides(merged);
    apply_cli_overrides(with_env, initial_override, settle_ms_override)
}

/// Clamp a raw initial value into the domain, warning when it had to move.
fn clamp_initial(raw: i64, source: &str) -> DomainValue {
    let clamped = ValueDomain::clamp(raw);
    if i64::from(clamped.get()) != raw {
        warn!(raw, clamped = clamped.get(), source, "initial value out of range, clamped");
    }
    clamped
}

/// Merge config file into defaults to create resolved config.
///
/// For each field in `ConfigFile`, if `Some(value)`, use it; otherwise use default.
/// A non-positive or non-finite `deceleration` is ignored.
pub fn merge_config(config_file: Option<ConfigFile>) -> ResolvedConfig {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return defaults;
    };

    let deceleration = match config.deceleration {
        Some(rate) if rate.is_finite() && rate > 0.0 => rate,
        Some(rate) => {
            warn!(rate, "ignoring invalid deceleration");
            defaults.deceleration
        }
        None => defaults.deceleration,
    };

    ResolvedConfig {
        initial_value: config
            .initial_value
            .map(|raw| clamp_initial(raw, "config file"))
            .unwrap_or(defaults.initial_value),
        settle_delay: config
            .settle_delay_ms
            .map(Duration::from_millis)
            .unwrap_or(defaults.settle_delay),
        animation: config
            .animation_ms
            .map(Duration::from_millis)
            .unwrap_or(defaults.animation),
        deceleration,
        columns_per_tick: config
            .columns_per_tick
            .map(|columns| columns.max(1))
            .unwrap_or(defaults.columns_per_tick),
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
    }
}

/// Apply environment variable overrides to resolved config.
///
/// Checks for:
/// - `TICKPICK_INITIAL_VALUE`: Override initial value (ignored with a warning if not an integer)
pub fn apply_env_overrides(mut config: ResolvedConfig) -> ResolvedConfig {
    if let Ok(raw) = std::env::var(INITIAL_VALUE_ENV) {
        match raw.trim().parse::<i64>() {
            Ok(value) => config.initial_value = clamp_initial(value, INITIAL_VALUE_ENV),
            Err(e) => warn!(value = %raw, error = %e, var = INITIAL_VALUE_ENV, "ignoring invalid override"),
        }
    }

    config
}

/// Apply CLI argument overrides to resolved config.
///
/// CLI args have the highest precedence and override all other sources.
/// Only applies overrides for flags that were explicitly set by the user.
///
/// Precedence chain: Defaults → Config File → Env Vars → CLI Args (highest)
pub fn apply_cli_overrides(
    mut config: ResolvedConfig,
    initial_override: Option<i64>,
    settle_ms_override: Option<u64>,
) -> ResolvedConfig {
    if let Some(initial) = initial_override {
        config.initial_value = clamp_initial(initial, "--initial");
    }

    if let Some(settle_ms) = settle_ms_override {
        config.settle_delay = Duration::from_millis(settle_ms);
    }

    config
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
