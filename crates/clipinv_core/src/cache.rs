//! Project thumbnail cache.
//!
//! Thumbnails live in `<project folder>/thumbs/`. The settings dialog shows
//! the cache size and can wipe it.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use walkdir::WalkDir;

/// Name of the cache folder inside the project folder.
pub const THUMBS_DIR: &str = "thumbs";

/// Errors that can occur while clearing the cache.
#[derive(Debug, Error)]
pub enum CacheError {
    #[error("Failed to remove cache folder '{path}': {source}")]
    RemoveError { path: PathBuf, source: io::Error },

    #[error("Failed to recreate cache folder '{path}': {source}")]
    CreateError { path: PathBuf, source: io::Error },

    #[error("Project folder '{0}' is not an absolute path")]
    InvalidFolder(PathBuf),
}

/// Result type for cache operations.
pub type CacheResult<T> = Result<T, CacheError>;

/// File count and total size of a folder tree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub files: u64,
    pub bytes: u64,
}

/// Cache folder for a project folder.
pub fn thumbs_dir(project_folder: impl AsRef<Path>) -> PathBuf {
    project_folder.as_ref().join(THUMBS_DIR)
}

/// Count files and bytes below `dir`, recursively.
///
/// Missing folders and unreadable entries count as zero.
pub fn directory_size(dir: impl AsRef<Path>) -> CacheStats {
    let mut stats = CacheStats::default();

    for entry in WalkDir::new(dir.as_ref()).follow_links(false) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                tracing::debug!("Skipping cache entry: {}", e);
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }
        stats.files += 1;
        stats.bytes += entry.metadata().map(|m| m.len()).unwrap_or(0);
    }

    stats
}

/// Size of a project's thumbnail cache. An empty folder has no cache.
pub fn cache_stats(project_folder: impl AsRef<Path>) -> CacheStats {
    let project_folder = project_folder.as_ref();
    if project_folder.as_os_str().is_empty() {
        return CacheStats::default();
    }
    directory_size(thumbs_dir(project_folder))
}

/// Delete every cached thumbnail and leave an empty cache folder behind.
///
/// The project folder must be absolute, so an unset folder never resolves
/// against the working directory.
pub fn clear_cache(project_folder: impl AsRef<Path>) -> CacheResult<()> {
    let project_folder = project_folder.as_ref();
    if !project_folder.is_absolute() {
        return Err(CacheError::InvalidFolder(project_folder.to_path_buf()));
    }
    let dir = thumbs_dir(project_folder);

    match fs::remove_dir_all(&dir) {
        Ok(()) => {}
        Err(e) if e.kind() == io::ErrorKind::NotFound => {}
        Err(source) => return Err(CacheError::RemoveError { path: dir, source }),
    }

    fs::create_dir_all(&dir).map_err(|source| CacheError::CreateError {
        path: dir.clone(),
        source,
    })?;

    tracing::info!("Cleared thumbnail cache {}", dir.display());
    Ok(())
}

/// Human-readable size with binary units.
pub fn format_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["KiB", "MiB", "GiB", "TiB"];

    if bytes < 1024 {
        return format!("{} B", bytes);
    }

    let mut value = bytes as f64 / 1024.0;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    format!("{:.1} {}", value, UNITS[unit])
}
