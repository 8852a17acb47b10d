//! Configuration module.
//!
//! Settings are resolved with the precedence chain
//! Defaults → Config File → Env Vars → CLI Args.

pub mod keybindings;
pub mod loader;

pub use keybindings::KeyBindings;
pub use loader::{
    apply_cli_overrides, apply_env_overrides, default_config_path, default_log_path,
    load_config_file, load_config_with_precedence, log_path_for, merge_config, resolve_config, ConfigError, ConfigFile,
    ResolvedConfig,
};
