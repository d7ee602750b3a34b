//! Project collaborator seam.
//!
//! The editor's project owns the clip list and its reference counts. The
//! inventory reads it through [`ProjectClips`] and asks it to drop unused
//! records or trash unused files.

mod manifest;

pub use manifest::{ClipManifest, ManifestError, ManifestResult};

use serde::{Deserialize, Serialize};

use crate::config::ProxySettings;
use crate::inventory::UnusedFiles;
use crate::models::Clip;

/// Per-project values shown in the settings dialog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectDefaults {
    /// Profile id the project currently uses.
    pub profile: String,
    /// Project folder holding the thumbnail cache.
    pub project_folder: String,
    pub video_tracks: u32,
    pub audio_tracks: u32,
    pub proxy: ProxySettings,
    /// Whether the project has been saved to disk before.
    pub saved: bool,
}

/// Access to the project's clip list.
pub trait ProjectClips {
    /// All clips of the project, in bin order.
    fn document_clips(&self) -> &[Clip];

    /// Project-level settings.
    fn defaults(&self) -> ProjectDefaults;

    /// Remove every clip record with zero references.
    fn cleanup(&mut self);

    /// Delete the unused files from disk and drop the unused clip records.
    fn trash_unused_clips(&mut self, unused: &UnusedFiles);
}
