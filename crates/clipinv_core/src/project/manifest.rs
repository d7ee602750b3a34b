//! JSON clip manifest.
//!
//! A standalone description of a project's bin, used by the command line
//! tool and tests in place of a live editor project:
//!
//! ```json
//! {
//!   "version": 1,
//!   "project_folder": "/home/user/project",
//!   "profile": "dv_pal",
//!   "saved": true,
//!   "lumas": ["/usr/share/lumas/luma01.pgm"],
//!   "clips": [
//!     { "id": "1", "type": "video", "path": "/media/a.mov", "references": 2, "file_size": 1048576 }
//!   ]
//! }
//! ```

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{ProjectClips, ProjectDefaults};
use crate::config::ProxySettings;
use crate::inventory::UnusedFiles;
use crate::models::Clip;

/// Manifest format version.
const MANIFEST_VERSION: u32 = 1;

/// Errors that can occur while loading or saving a manifest.
#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("Failed to read manifest '{path}': {source}")]
    ReadError { path: PathBuf, source: io::Error },

    #[error("Failed to write manifest '{path}': {source}")]
    WriteError { path: PathBuf, source: io::Error },

    #[error("Invalid manifest: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("Unsupported manifest version {0}")]
    UnsupportedVersion(u32),
}

/// Result type for manifest operations.
pub type ManifestResult<T> = Result<T, ManifestError>;

fn default_version() -> u32 {
    MANIFEST_VERSION
}

fn default_profile() -> String {
    "dv_pal".to_string()
}

fn default_track_count() -> u32 {
    2
}

/// Project bin stored as JSON.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClipManifest {
    #[serde(default = "default_version")]
    pub version: u32,
    #[serde(default)]
    pub project_folder: String,
    #[serde(default = "default_profile")]
    pub profile: String,
    #[serde(default)]
    pub saved: bool,
    #[serde(default = "default_track_count")]
    pub video_tracks: u32,
    #[serde(default = "default_track_count")]
    pub audio_tracks: u32,
    #[serde(default)]
    pub proxy: ProxySettings,
    #[serde(default)]
    pub lumas: Vec<String>,
    #[serde(default)]
    pub clips: Vec<Clip>,
    /// Where the manifest was loaded from. Empty for in-memory manifests.
    #[serde(skip)]
    path: PathBuf,
}

impl ClipManifest {
    /// Create a manifest without persistence (for testing).
    pub fn in_memory(project_folder: impl Into<String>, clips: Vec<Clip>) -> Self {
        Self {
            version: MANIFEST_VERSION,
            project_folder: project_folder.into(),
            profile: default_profile(),
            saved: false,
            video_tracks: default_track_count(),
            audio_tracks: default_track_count(),
            proxy: ProxySettings::default(),
            lumas: Vec::new(),
            clips,
            path: PathBuf::new(),
        }
    }

    /// Load a manifest from disk.
    pub fn load(path: impl AsRef<Path>) -> ManifestResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ManifestError::ReadError {
            path: path.to_path_buf(),
            source,
        })?;

        let mut manifest: ClipManifest = serde_json::from_str(&content)?;
        if manifest.version != MANIFEST_VERSION {
            return Err(ManifestError::UnsupportedVersion(manifest.version));
        }
        manifest.path = path.to_path_buf();

        tracing::debug!("Loaded {} clips from {}", manifest.clips.len(), path.display());
        Ok(manifest)
    }

    /// File the manifest was loaded from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Persist the manifest atomically (temp file, then rename).
    pub fn save(&self) -> ManifestResult<()> {
        if self.path.as_os_str().is_empty() {
            return Ok(());
        }

        let json = serde_json::to_string_pretty(self)?;
        let temp_file = self.path.with_extension("json.tmp");
        fs::write(&temp_file, json)
            .and_then(|_| fs::rename(&temp_file, &self.path))
            .map_err(|source| ManifestError::WriteError {
                path: self.path.clone(),
                source,
            })?;

        tracing::debug!("Saved {} clips to {}", self.clips.len(), self.path.display());
        Ok(())
    }
}

impl ProjectClips for ClipManifest {
    fn document_clips(&self) -> &[Clip] {
        &self.clips
    }

    fn defaults(&self) -> ProjectDefaults {
        ProjectDefaults {
            profile: self.profile.clone(),
            project_folder: self.project_folder.clone(),
            video_tracks: self.video_tracks,
            audio_tracks: self.audio_tracks,
            proxy: self.proxy.clone(),
            saved: self.saved,
        }
    }

    fn cleanup(&mut self) {
        let before = self.clips.len();
        self.clips.retain(Clip::is_used);
        tracing::info!("Removed {} unused clips from project", before - self.clips.len());
    }

    fn trash_unused_clips(&mut self, unused: &UnusedFiles) {
        for path in &unused.deletable {
            match fs::remove_file(path) {
                Ok(()) => tracing::info!("Deleted unused file {}", path),
                Err(e) => tracing::warn!("Failed to delete {}: {}", path, e),
            }
        }
        self.clips.retain(|clip| !unused.reclaimable.contains(&clip.id));
    }
}
