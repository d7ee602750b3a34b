//! Core enums used throughout the inventory.

use serde::{Deserialize, Serialize};

/// Type tag of a project clip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClipType {
    Video,
    Audio,
    Image,
    Text,
    Slideshow,
    Playlist,
    #[default]
    Unknown,
    /// Anything else with a backing file (e.g. audio+video).
    Other,
}

impl ClipType {
    /// Category a clip's own file is listed under.
    ///
    /// Slideshows are listed through their expanded image sets instead.
    pub fn category(&self) -> FileCategory {
        match self {
            ClipType::Text => FileCategory::Text,
            ClipType::Audio => FileCategory::Audio,
            ClipType::Image => FileCategory::Image,
            ClipType::Slideshow => FileCategory::Slideshow,
            ClipType::Unknown => FileCategory::Other,
            ClipType::Video | ClipType::Playlist | ClipType::Other => FileCategory::Video,
        }
    }
}

impl std::fmt::Display for ClipType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClipType::Video => write!(f, "video"),
            ClipType::Audio => write!(f, "audio"),
            ClipType::Image => write!(f, "image"),
            ClipType::Text => write!(f, "text"),
            ClipType::Slideshow => write!(f, "slideshow"),
            ClipType::Playlist => write!(f, "playlist"),
            ClipType::Unknown => write!(f, "unknown"),
            ClipType::Other => write!(f, "other"),
        }
    }
}

/// Display category of a discovered file.
///
/// Variant order is the report's display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileCategory {
    Video,
    Audio,
    Image,
    Slideshow,
    Text,
    Other,
}

impl FileCategory {
    /// All categories in display order.
    pub const ALL: [FileCategory; 6] = [
        FileCategory::Video,
        FileCategory::Audio,
        FileCategory::Image,
        FileCategory::Slideshow,
        FileCategory::Text,
        FileCategory::Other,
    ];

    /// Header shown above the category's entries.
    pub fn header(&self) -> &'static str {
        match self {
            FileCategory::Video => "Video clips",
            FileCategory::Audio => "Audio clips",
            FileCategory::Image => "Image clips",
            FileCategory::Slideshow => "Slideshow clips",
            FileCategory::Text => "Text clips",
            FileCategory::Other => "Other clips",
        }
    }

    /// Position in [`FileCategory::ALL`].
    pub fn index(&self) -> usize {
        *self as usize
    }
}

impl std::fmt::Display for FileCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.header())
    }
}
