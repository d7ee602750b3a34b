//! Settings struct with TOML-based sections.
//!
//! Settings are organized into logical sections that map to TOML tables.
//! Each section can be updated independently for atomic section-level updates.

use serde::{Deserialize, Serialize};

use crate::logging::LogLevel;

/// Root settings structure containing all configuration sections.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    /// Defaults applied to new or unbound projects.
    #[serde(default)]
    pub project: ProjectSettings,

    /// Proxy clip generation.
    #[serde(default)]
    pub proxy: ProxySettings,

    /// Path-related settings.
    #[serde(default)]
    pub paths: PathSettings,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingSettings,
}

/// Project defaults used when no project is bound.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectSettings {
    /// Profile id of the current project (e.g. `dv_pal`).
    #[serde(default = "default_profile")]
    pub current_profile: String,

    /// Generate thumbnails for video clips.
    #[serde(default = "default_true")]
    pub video_thumbnails: bool,

    /// Generate waveforms for audio clips.
    #[serde(default = "default_true")]
    pub audio_thumbnails: bool,

    /// Number of video tracks in a new project.
    #[serde(default = "default_track_count")]
    pub video_tracks: u32,

    /// Number of audio tracks in a new project.
    #[serde(default = "default_track_count")]
    pub audio_tracks: u32,
}

fn default_profile() -> String {
    "dv_pal".to_string()
}

fn default_true() -> bool {
    true
}

fn default_track_count() -> u32 {
    2
}

impl Default for ProjectSettings {
    fn default() -> Self {
        Self {
            current_profile: default_profile(),
            video_thumbnails: true,
            audio_thumbnails: true,
            video_tracks: default_track_count(),
            audio_tracks: default_track_count(),
        }
    }
}

/// Proxy clip settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProxySettings {
    /// Use proxy clips for editing.
    #[serde(default)]
    pub enabled: bool,

    /// Generate proxies automatically for new clips.
    #[serde(default)]
    pub generate: bool,

    /// Minimum frame width (pixels) before a proxy is generated.
    #[serde(default = "default_proxy_min_size")]
    pub min_size: u32,

    /// Encoder parameters for proxy generation.
    #[serde(default = "default_proxy_params")]
    pub params: String,
}

fn default_proxy_min_size() -> u32 {
    1000
}

fn default_proxy_params() -> String {
    "-f mpegts -acodec libmp3lame -ac 2 -ab 128k -ar 48000 -vcodec mpeg2video -g 5 -deinterlace -s 480x270 -vb 400k"
        .to_string()
}

impl Default for ProxySettings {
    fn default() -> Self {
        Self {
            enabled: false,
            generate: false,
            min_size: default_proxy_min_size(),
            params: default_proxy_params(),
        }
    }
}

/// Path configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathSettings {
    /// Folder holding MLT profile description files.
    #[serde(default = "default_profiles_folder")]
    pub profiles_folder: String,

    /// Luma files always listed in the inventory.
    #[serde(default)]
    pub lumas: Vec<String>,
}

fn default_profiles_folder() -> String {
    "/usr/share/mlt/profiles".to_string()
}

impl Default for PathSettings {
    fn default() -> Self {
        Self {
            profiles_folder: default_profiles_folder(),
            lumas: Vec::new(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// Default log level when `RUST_LOG` is not set.
    #[serde(default)]
    pub level: LogLevel,
}

/// Config sections for targeted updates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigSection {
    Project,
    Proxy,
    Paths,
    Logging,
}

impl ConfigSection {
    /// All sections in file order.
    pub const ALL: [ConfigSection; 4] = [
        ConfigSection::Project,
        ConfigSection::Proxy,
        ConfigSection::Paths,
        ConfigSection::Logging,
    ];

    /// Get the TOML table name for this section.
    pub fn table_name(&self) -> &'static str {
        match self {
            ConfigSection::Project => "project",
            ConfigSection::Proxy => "proxy",
            ConfigSection::Paths => "paths",
            ConfigSection::Logging => "logging",
        }
    }

    /// Comment written above the section in generated files.
    pub fn comment(&self) -> &'static str {
        match self {
            ConfigSection::Project => "# Defaults for projects opened without a project list",
            ConfigSection::Proxy => "# Proxy clip generation",
            ConfigSection::Paths => "# Profile and luma locations",
            ConfigSection::Logging => "# Logging configuration",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_settings_serializes() {
        let settings = Settings::default();
        let toml = toml::to_string_pretty(&settings).unwrap();
        assert!(toml.contains("[project]"));
        assert!(toml.contains("[proxy]"));
        assert!(toml.contains("current_profile"));
    }

    #[test]
    fn settings_round_trip() {
        let mut settings = Settings::default();
        settings.proxy.enabled = true;
        settings.paths.lumas.push("/usr/share/lumas/luma01.pgm".to_string());

        let toml = toml::to_string_pretty(&settings).unwrap();
        let parsed: Settings = toml::from_str(&toml).unwrap();
        assert!(parsed.proxy.enabled);
        assert_eq!(parsed.paths.lumas, settings.paths.lumas);
        assert_eq!(parsed.project.current_profile, "dv_pal");
    }

    #[test]
    fn missing_fields_use_defaults() {
        let parsed: Settings = toml::from_str("[proxy]\nenabled = true\n").unwrap();
        assert!(parsed.proxy.enabled);
        assert_eq!(parsed.proxy.min_size, 1000);
        assert_eq!(parsed.logging.level, LogLevel::Info);
    }
}
