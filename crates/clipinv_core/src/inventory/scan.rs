//! Project-wide file scan.

use crate::models::{Clip, ClipType, FileCategory, XML_DATA_PROPERTY};

use super::playlist::extract_playlist_urls;
use super::report::FileReport;
use super::slideshow::expand_slideshow;
use super::title::{extract_font_list, extract_image_list};

/// List every file the project uses, for all clips regardless of
/// reference count.
///
/// - Lumas are listed as images.
/// - Slideshows expand to one summary entry per image set.
/// - Text clips add their own file plus the images and fonts of their title.
/// - Playlists add their own file plus everything they reference.
///
/// Used/unused totals are attributed per clip, not per expanded file.
pub fn scan_project_files(clips: &[Clip], lumas: &[String]) -> FileReport {
    let mut report = FileReport::new();

    for luma in lumas {
        report.push(FileCategory::Image, luma.as_str());
    }

    for clip in clips {
        if clip.clip_type == ClipType::Slideshow {
            for entry in expand_slideshow(&clip.path) {
                report.push(FileCategory::Slideshow, entry);
            }
        } else if clip.has_file() {
            report.push(clip.clip_type.category(), clip.path.as_str());
        }

        match clip.clip_type {
            ClipType::Text => {
                let xml = clip.property(XML_DATA_PROPERTY);
                for image in extract_image_list(xml) {
                    report.push(FileCategory::Image, image);
                }
                for font in extract_font_list(xml) {
                    report.add_font(font);
                }
            }
            ClipType::Playlist if clip.has_file() => {
                for url in extract_playlist_urls(&clip.path) {
                    report.push(FileCategory::Other, url);
                }
            }
            _ => {}
        }

        report.record_clip(clip.is_used(), clip.file_size);
    }

    tracing::debug!(
        "Scanned {} clips: {} files, {} fonts",
        clips.len(),
        report.counts().total_files,
        report.fonts().len()
    );

    report
}
