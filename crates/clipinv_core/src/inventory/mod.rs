//! Project media inventory.
//!
//! This module provides:
//! - `scan_project_files`: categorized listing of every file a project uses
//! - `compute_unused_files`: files and clips safe to remove
//! - Slideshow, playlist and title expansion used by the scan
//! - Plain-text export of a scan report
//!
//! All scans are best effort: unreadable folders and malformed documents
//! degrade to empty results instead of errors.
//!
//! # Example
//!
//! ```no_run
//! use clipinv_core::inventory::{compute_unused_files, scan_project_files};
//! use clipinv_core::models::{Clip, ClipType};
//!
//! let clips = vec![Clip::new("1", ClipType::Video, "/media/a.mov").with_references(1)];
//! let report = scan_project_files(&clips, &[]);
//! for (category, entries) in report.categories() {
//!     println!("{}: {}", category, entries.len());
//! }
//!
//! let unused = compute_unused_files(&clips);
//! assert!(unused.deletable.is_empty());
//! ```

mod export;
mod playlist;
mod reconcile;
mod report;
mod scan;
mod slideshow;
mod title;

pub use export::{export_snapshot, render_snapshot, LocalUploader, SnapshotHeader, Uploader};
pub use playlist::extract_playlist_urls;
pub use reconcile::{compute_unused_files, UnusedAction, UnusedFiles};
pub use report::{DiscoveredFile, FileCounts, FileReport};
pub use scan::scan_project_files;
pub use slideshow::{expand_slideshow, is_slideshow_resource};
pub use title::{extract_font_list, extract_image_list};
