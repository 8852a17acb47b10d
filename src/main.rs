//! tickpick - Entry Point

use clap::Parser;
use std::path::{Path, PathBuf};
use tickpick::config::ResolvedConfig;
use tickpick::logging::LoggingError;
use tickpick::model::AppError;
use tickpick::view::{ColorConfig, Outcome, TuiApp};
use tracing::info;

/// tickpick - pick a value from 1 to 60 on a tick strip that snaps to decades
#[derive(Parser, Debug)]
#[command(name = "tickpick")]
#[command(version)]
#[command(about = "Terminal picker for a value from 1 to 60 that snaps to multiples of ten")]
pub struct Args {
    /// Value selected at startup (clamped to 1..=60)
    #[arg(short, long, allow_negative_numbers = true)]
    pub initial: Option<i64>,

    /// Delay in milliseconds between release and the snap decision
    #[arg(long)]
    pub settle_ms: Option<u64>,

    /// Disable colors
    #[arg(long)]
    pub no_color: bool,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    if let Outcome::Confirmed(value) = run(&args)? {
        println!("{value}");
    }

    Ok(())
}

/// Resolve configuration, install logging and run the picker.
fn run(args: &Args) -> Result<Outcome, AppError> {
    let config = startup(args, tickpick::logging::init)?;

    let colors = ColorConfig::from_env_and_args(args.no_color);
    let outcome = TuiApp::new(&config, colors)?.run()?;

    info!(?outcome, "picker closed");
    Ok(outcome)
}

/// Load the config file, install logging, then resolve the rest of the chain.
///
/// Logging goes in before merging so clamp and override warnings are recorded.
fn startup(
    args: &Args,
    install_logging: impl FnOnce(&Path) -> Result<(), LoggingError>,
) -> Result<ResolvedConfig, AppError> {
    // Precedence: Defaults → Config File → Env Vars → CLI Args
    let config_file = tickpick::config::load_config_with_precedence(args.config.clone())?;
    install_logging(&tickpick::config::log_path_for(config_file.as_ref()))?;

    let config = tickpick::config::resolve_config(config_file, args.initial, args.settle_ms);
    info!(config = ?config, "Configuration loaded and resolved");
    Ok(config)
}
