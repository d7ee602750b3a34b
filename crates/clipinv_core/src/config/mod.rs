//! Configuration management for clipinv.
//!
//! This module provides:
//! - TOML-based configuration with logical sections
//! - Atomic file writes (write to temp, then rename)
//! - Section-level updates (only changed section is modified)
//! - Defaults for every missing key on load
//!
//! # Example
//!
//! ```no_run
//! use clipinv_core::config::{ConfigManager, ConfigSection};
//!
//! let mut config = ConfigManager::new(".config/clipinv.toml");
//! config.load_or_create().unwrap();
//!
//! println!("Profile: {}", config.settings().project.current_profile);
//!
//! config.settings_mut().proxy.enabled = true;
//! config.update_section(ConfigSection::Proxy).unwrap();
//! ```

mod manager;
mod settings;

pub use manager::{ConfigError, ConfigManager, ConfigResult};
pub use settings::{
    ConfigSection, LoggingSettings, PathSettings, ProjectSettings, ProxySettings, Settings,
};
