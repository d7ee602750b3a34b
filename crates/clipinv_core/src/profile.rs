//! MLT video profile descriptions.
//!
//! Profiles are plain `key=value` files named after the profile id:
//!
//! ```text
//! description=DV/DVD PAL
//! frame_rate_num=25
//! frame_rate_den=1
//! width=720
//! height=576
//! progressive=0
//! sample_aspect_num=16
//! sample_aspect_den=15
//! display_aspect_num=4
//! display_aspect_den=3
//! colorspace=601
//! ```
//!
//! Profile definitions are owned by MLT; this module only reads them for
//! display in the settings dialog.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors that can occur while reading profiles.
#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("Failed to read profile '{path}': {source}")]
    ReadError { path: PathBuf, source: io::Error },

    #[error("Failed to list profiles in '{path}': {source}")]
    ListError { path: PathBuf, source: io::Error },

    #[error("Invalid profile id '{0}'")]
    InvalidId(String),
}

/// Result type for profile operations.
pub type ProfileResult<T> = Result<T, ProfileError>;

/// A parsed profile description.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Profile {
    /// Profile id (file name).
    pub id: String,
    values: BTreeMap<String, String>,
}

impl Profile {
    /// Parse profile text.
    pub fn parse(id: impl Into<String>, content: &str) -> Self {
        let values = content
            .lines()
            .filter_map(|line| line.split_once('='))
            .map(|(key, value)| (key.trim().to_string(), value.trim().to_string()))
            .collect();

        Self {
            id: id.into(),
            values,
        }
    }

    /// Load `<folder>/<id>`.
    ///
    /// The id must be a plain file name inside `folder`.
    pub fn load(folder: impl AsRef<Path>, id: &str) -> ProfileResult<Self> {
        if !is_valid_id(id) {
            return Err(ProfileError::InvalidId(id.to_string()));
        }
        let path = folder.as_ref().join(id);
        let content =
            fs::read_to_string(&path).map_err(|source| ProfileError::ReadError { path, source })?;
        Ok(Self::parse(id, &content))
    }

    /// Raw value of a key, empty when absent.
    pub fn value(&self, key: &str) -> &str {
        self.values.get(key).map(String::as_str).unwrap_or("")
    }

    /// Numeric value of a key, zero when absent or invalid.
    pub fn int(&self, key: &str) -> i64 {
        self.value(key).parse().unwrap_or(0)
    }

    /// Display name, falling back to the id.
    pub fn description(&self) -> &str {
        match self.value("description") {
            "" => self.id.as_str(),
            description => description,
        }
    }

    /// Values formatted for the settings dialog.
    pub fn summary(&self) -> ProfileSummary {
        let scan = if self.int("progressive") == 0 {
            let den = self.int("frame_rate_den");
            let fields = if den == 0 {
                0.0
            } else {
                2.0 * self.int("frame_rate_num") as f64 / den as f64
            };
            format!("Interlaced ({:.2} fields per second)", fields)
        } else {
            "Progressive".to_string()
        };

        ProfileSummary {
            size: format!("{}x{}", self.value("width"), self.value("height")),
            fps: self.ratio("frame_rate_num", "frame_rate_den"),
            sample_aspect: self.ratio("sample_aspect_num", "sample_aspect_den"),
            display_aspect: self.ratio("display_aspect_num", "display_aspect_den"),
            scan,
            colorspace: colorspace_description(self.int("colorspace")).to_string(),
        }
    }

    fn ratio(&self, num: &str, den: &str) -> String {
        format!("{}/{}", self.value(num), self.value(den))
    }
}

fn is_valid_id(id: &str) -> bool {
    !id.is_empty() && !id.contains(['/', '\\']) && !id.contains("..")
}

/// Display strings for a profile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileSummary {
    pub size: String,
    pub fps: String,
    pub sample_aspect: String,
    pub display_aspect: String,
    pub scan: String,
    pub colorspace: String,
}

/// Name of an MLT colorspace code.
pub fn colorspace_description(colorspace: i64) -> &'static str {
    match colorspace {
        601 => "ITU-R 601",
        709 => "ITU-R 709",
        240 => "SMPTE240M",
        _ => "Unknown",
    }
}

/// All profiles in a folder as `(description, id)`, sorted by description.
pub fn list_profiles(folder: impl AsRef<Path>) -> ProfileResult<Vec<(String, String)>> {
    let folder = folder.as_ref();
    let entries = fs::read_dir(folder).map_err(|source| ProfileError::ListError {
        path: folder.to_path_buf(),
        source,
    })?;

    let mut profiles = Vec::new();
    for entry in entries.filter_map(Result::ok) {
        if !entry.path().is_file() {
            continue;
        }
        let id = entry.file_name().to_string_lossy().into_owned();
        match Profile::load(folder, &id) {
            Ok(profile) => profiles.push((profile.description().to_string(), id)),
            Err(e) => tracing::debug!("Skipping profile: {}", e),
        }
    }

    profiles.sort();
    Ok(profiles)
}
