//! Slideshow image-set expansion.
//!
//! A slideshow clip points at a representative path in one of two forms:
//! - `dir/.all.jpg`: every `*.jpg` file in `dir`
//! - `dir/seq%04d.jpg`: numbered files `seq0001.jpg`, `seq0002.jpg`, ...
//!
//! Each slideshow expands to a single summary entry with the number of
//! matching images found on disk.

use std::fs;
use std::path::Path;

use regex::Regex;

/// Marker that selects extension-glob mode.
const ALL_MARKER: &str = ".all.";

/// Expand a slideshow path into its summary entry.
///
/// Always returns exactly one entry. An unreadable directory counts as
/// zero images.
pub fn expand_slideshow(path: &str) -> Vec<String> {
    let (dir, file_name) = split_dir(path);

    let entry = if path.contains(ALL_MARKER) {
        let ext = path.rsplit('.').next().unwrap_or_default();
        let count = count_by_extension(dir, ext);
        format!("{}*.{} ({})", dir, ext, images_found(count))
    } else {
        let ext = file_name.rsplit('.').next().unwrap_or_default();
        let prefix = file_name.rfind('%').map(|i| &file_name[..i]).unwrap_or("");
        let count = count_numbered(dir, prefix, ext);
        format!("{} ({})", path, images_found(count))
    };

    vec![entry]
}

/// Whether a resolved resource path names an extension-glob slideshow.
///
/// True when the path with its final extension removed ends in `/.all`.
pub fn is_slideshow_resource(path: &str) -> bool {
    match path.rfind('.') {
        Some(i) => {
            let stem = &path[..i];
            stem.ends_with("/.all") || stem == ".all"
        }
        None => false,
    }
}

/// Split into directory (with trailing slash, possibly empty) and file name.
fn split_dir(path: &str) -> (&str, &str) {
    match path.rfind('/') {
        Some(i) => (&path[..=i], &path[i + 1..]),
        None => ("", path),
    }
}

/// Names of regular, non-hidden files in `dir`.
fn list_files(dir: &str) -> Vec<String> {
    let read_path = if dir.is_empty() { Path::new(".") } else { Path::new(dir) };

    let entries = match fs::read_dir(read_path) {
        Ok(entries) => entries,
        Err(e) => {
            tracing::debug!("Cannot list slideshow folder {}: {}", read_path.display(), e);
            return Vec::new();
        }
    };

    entries
        .filter_map(Result::ok)
        .filter(|entry| entry.path().is_file())
        .map(|entry| entry.file_name().to_string_lossy().into_owned())
        .filter(|name| !name.starts_with('.'))
        .collect()
}

fn count_by_extension(dir: &str, ext: &str) -> usize {
    list_files(dir)
        .iter()
        .filter(|name| {
            Path::new(name)
                .extension()
                .map(|e| e.to_string_lossy().eq_ignore_ascii_case(ext))
                .unwrap_or(false)
        })
        .count()
}

fn count_numbered(dir: &str, prefix: &str, ext: &str) -> usize {
    let pattern = format!("^{}[0-9]+\\.{}$", regex::escape(prefix), regex::escape(ext));
    let rx = match Regex::new(&pattern) {
        Ok(rx) => rx,
        Err(e) => {
            tracing::warn!("Invalid slideshow pattern {}: {}", pattern, e);
            return 0;
        }
    };

    list_files(dir).iter().filter(|name| rx.is_match(name)).count()
}

fn images_found(count: usize) -> String {
    if count == 1 {
        "1 image found".to_string()
    } else {
        format!("{} images found", count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn touch(dir: &Path, names: &[&str]) {
        for name in names {
            fs::write(dir.join(name), b"x").unwrap();
        }
    }

    #[test]
    fn numbered_pattern_counts_matches() {
        let dir = tempdir().unwrap();
        touch(dir.path(), &["seq0001.jpg", "seq0002.jpg", "note.txt"]);

        let pattern = format!("{}/seq%04d.jpg", dir.path().display());
        let entries = expand_slideshow(&pattern);

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0], format!("{} (2 images found)", pattern));
    }

    #[test]
    fn numbered_pattern_requires_full_match() {
        let dir = tempdir().unwrap();
        touch(dir.path(), &["seq0001.jpg", "xseq0002.jpg", "seq0003.jpg.bak", "seq.jpg"]);

        let pattern = format!("{}/seq%04d.jpg", dir.path().display());
        assert!(expand_slideshow(&pattern)[0].ends_with("(1 image found)"));
    }

    #[test]
    fn extension_glob_gives_single_entry() {
        let dir = tempdir().unwrap();
        touch(dir.path(), &["a.png", "b.png", "c.PNG", "d.jpg", ".hidden.png"]);

        let path = format!("{}/.all.png", dir.path().display());
        let entries = expand_slideshow(&path);

        assert_eq!(entries.len(), 1);
        assert_eq!(
            entries[0],
            format!("{}/*.png (3 images found)", dir.path().display())
        );
    }

    #[test]
    fn unreadable_folder_counts_zero() {
        let entries = expand_slideshow("/nonexistent/clipinv/img%03d.png");
        assert_eq!(entries, vec!["/nonexistent/clipinv/img%03d.png (0 images found)"]);

        let entries = expand_slideshow("/nonexistent/clipinv/.all.png");
        assert_eq!(entries, vec!["/nonexistent/clipinv/*.png (0 images found)"]);
    }

    #[test]
    fn detects_slideshow_resources() {
        assert!(is_slideshow_resource("/media/photos/.all.jpg"));
        assert!(!is_slideshow_resource("/media/photos/all.jpg"));
        assert!(!is_slideshow_resource("/media/clip.mov"));
        assert!(!is_slideshow_resource("noextension"));
    }
}
