//! Plain-text export of an inventory report.
//!
//! The text is staged in a temporary file and handed to an [`Uploader`],
//! which delivers it to a local path or a remote URL. Export is best
//! effort: failures are logged and reported as `false`.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use tempfile::NamedTempFile;
use thiserror::Error;

use super::report::FileReport;

/// Project details printed above the file listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnapshotHeader {
    pub project_folder: String,
    /// Human-readable profile name.
    pub profile_name: String,
}

/// Delivers a staged file to its destination.
pub trait Uploader {
    fn upload(&self, staged: &Path, destination: &str) -> io::Result<()>;
}

/// Copies to local paths and `file://` URLs. Other schemes are rejected.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalUploader;

impl Uploader for LocalUploader {
    fn upload(&self, staged: &Path, destination: &str) -> io::Result<()> {
        let target = destination.strip_prefix("file://").unwrap_or(destination);
        if target.contains("://") {
            return Err(io::Error::new(
                io::ErrorKind::Unsupported,
                format!("no uploader for remote destination {}", destination),
            ));
        }
        fs::copy(staged, target)?;
        Ok(())
    }
}

#[derive(Debug, Error)]
enum ExportError {
    #[error("cannot create staging file: {0}")]
    Stage(io::Error),

    #[error("cannot write staging file: {0}")]
    Write(io::Error),

    #[error("cannot deliver to {destination}: {source}")]
    Upload {
        destination: String,
        source: io::Error,
    },
}

/// Render the report as the exported text document.
pub fn render_snapshot(header: &SnapshotHeader, report: &FileReport) -> String {
    let counts = report.counts();
    let mut data = String::new();

    data.push_str(&format!("Project folder: {}\n", header.project_folder));
    data.push_str(&format!("Project profile: {}\n", header.profile_name));
    data.push_str(&format!(
        "Total clips: {} ({} used in timeline).\n\n",
        counts.total_files, counts.used_clips
    ));

    for (category, entries) in report.categories() {
        data.push_str(&format!("\n{}:\n\n", category.header()));
        for entry in entries {
            data.push_str(entry);
            data.push('\n');
        }
    }

    data
}

/// Stage `text` and deliver it to `destination`.
///
/// Returns whether the export reached its destination.
pub fn export_snapshot(text: &str, destination: &str, uploader: &dyn Uploader) -> bool {
    match stage_and_upload(text, destination, uploader) {
        Ok(()) => {
            tracing::info!("Exported project inventory to {}", destination);
            true
        }
        Err(e) => {
            tracing::warn!("Inventory export aborted: {}", e);
            false
        }
    }
}

fn stage_and_upload(
    text: &str,
    destination: &str,
    uploader: &dyn Uploader,
) -> Result<(), ExportError> {
    let mut staged = NamedTempFile::new().map_err(ExportError::Stage)?;
    staged
        .write_all(text.as_bytes())
        .and_then(|_| staged.flush())
        .map_err(ExportError::Write)?;

    uploader
        .upload(staged.path(), destination)
        .map_err(|source| ExportError::Upload {
            destination: destination.to_string(),
            source,
        })
}
