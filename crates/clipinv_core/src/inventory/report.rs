//! Categorized file report produced by a project scan.

use serde::Serialize;

use crate::models::FileCategory;

/// A file (or slideshow summary) found while scanning the project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiscoveredFile {
    pub path: String,
    pub category: FileCategory,
}

/// Aggregate counts for a scan.
///
/// `total_files` counts report entries; the used/unused figures count
/// clips and their own file sizes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct FileCounts {
    pub total_files: usize,
    pub used_clips: usize,
    pub used_size: u64,
    pub unused_clips: usize,
    pub unused_size: u64,
}

/// Result of one inventory scan: category -> ordered entries, plus fonts
/// and counts. Rebuilt from scratch on every scan.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FileReport {
    entries: [Vec<String>; 6],
    fonts: Vec<String>,
    counts: FileCounts,
}

impl FileReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry to a category.
    pub fn push(&mut self, category: FileCategory, path: impl Into<String>) {
        self.entries[category.index()].push(path.into());
        self.counts.total_files += 1;
    }

    /// Add a font, ignoring ones already listed.
    pub fn add_font(&mut self, font: impl Into<String>) {
        let font = font.into();
        if !self.fonts.contains(&font) {
            self.fonts.push(font);
        }
    }

    /// Record a clip in the used/unused totals.
    pub fn record_clip(&mut self, used: bool, size: u64) {
        if used {
            self.counts.used_clips += 1;
            self.counts.used_size += size;
        } else {
            self.counts.unused_clips += 1;
            self.counts.unused_size += size;
        }
    }

    /// Entries of one category (possibly empty).
    pub fn entries(&self, category: FileCategory) -> &[String] {
        &self.entries[category.index()]
    }

    /// Non-empty categories in display order.
    pub fn categories(&self) -> impl Iterator<Item = (FileCategory, &[String])> + '_ {
        FileCategory::ALL
            .into_iter()
            .map(move |category| (category, self.entries(category)))
            .filter(|(_, entries)| !entries.is_empty())
    }

    /// All entries flattened in display order.
    pub fn files(&self) -> Vec<DiscoveredFile> {
        self.categories()
            .flat_map(|(category, entries)| {
                entries.iter().map(move |path| DiscoveredFile {
                    path: path.clone(),
                    category,
                })
            })
            .collect()
    }

    /// Deduplicated fonts, first occurrence first.
    pub fn fonts(&self) -> &[String] {
        &self.fonts
    }

    pub fn counts(&self) -> &FileCounts {
        &self.counts
    }

    /// Whether the delete-unused action has anything to act on.
    pub fn has_unused(&self) -> bool {
        self.counts.unused_clips > 0
    }
}
