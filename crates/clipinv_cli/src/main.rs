//! clipinv - project media inventory
//!
//! Command line front end for the project settings dialog logic:
//! - Configuration loading
//! - Logging initialization
//! - Command dispatch

mod cli;
mod commands;

use std::path::PathBuf;
use std::process;

use clap::Parser;
use clipinv_core::config::ConfigManager;
use clipinv_core::logging::{init_tracing, LogLevel};

use crate::cli::{Cli, Commands};

/// Default config path: .config/clipinv.toml (relative to current working directory)
fn default_config_path() -> PathBuf {
    PathBuf::from(".config").join("clipinv.toml")
}

fn main() {
    let cli = Cli::parse();

    let config_path = cli.global.config.clone().unwrap_or_else(default_config_path);
    let mut config_manager = ConfigManager::new(&config_path);
    let config_error = config_manager.load_or_create().err();

    let level = if cli.global.debug {
        LogLevel::Debug
    } else {
        config_manager.settings().logging.level
    };
    init_tracing(level);

    if let Some(e) = config_error {
        tracing::warn!("Failed to load config: {}. Using defaults.", e);
    }
    tracing::debug!("clipinv {} (config {})", clipinv_core::version(), config_path.display());

    if let Err(e) = run(cli, &mut config_manager) {
        tracing::error!("{:#}", e);
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}

fn run(cli: Cli, config: &mut ConfigManager) -> anyhow::Result<()> {
    if let Commands::Profile {
        name: Some(name),
        set_default: true,
        ..
    } = &cli.command
    {
        return commands::set_default_profile(config, name);
    }

    let settings = config.settings();
    match cli.command {
        Commands::Scan { manifest } => commands::scan(settings, &manifest),
        Commands::Unused {
            manifest,
            apply,
            yes,
        } => commands::unused(settings, &manifest, apply, yes),
        Commands::Export {
            manifest,
            destination,
        } => commands::export(settings, &manifest, &destination),
        Commands::Cache { folder, clear, yes } => commands::cache(settings, &folder, clear, yes),
        Commands::Profile { list: true, .. } => commands::list_profiles(settings),
        Commands::Profile { name, .. } => commands::profile(settings, name.as_deref()),
    }
}
