//! Project clip records as seen by the inventory.

use serde::{Deserialize, Serialize};

use super::enums::ClipType;

/// Property key holding a title clip's XML payload.
pub const XML_DATA_PROPERTY: &str = "xmldata";

/// Identifier of a clip within its project.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClipId(pub String);

impl ClipId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ClipId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A clip in the project bin.
///
/// Reference counts are owned by the timeline; the inventory only reads them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Clip {
    pub id: ClipId,
    #[serde(rename = "type", default)]
    pub clip_type: ClipType,
    /// Absolute path of the backing file. Empty for generated clips (colors).
    #[serde(default)]
    pub path: String,
    /// Number of timeline placements.
    #[serde(default)]
    pub references: u32,
    /// Size of the backing file in bytes.
    #[serde(default)]
    pub file_size: u64,
    /// Embedded title XML (text clips only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub xml_data: Option<String>,
}

impl Clip {
    /// Create a clip with no references and no size.
    pub fn new(id: impl Into<String>, clip_type: ClipType, path: impl Into<String>) -> Self {
        Self {
            id: ClipId::new(id),
            clip_type,
            path: path.into(),
            references: 0,
            file_size: 0,
            xml_data: None,
        }
    }

    /// Set the reference count.
    pub fn with_references(mut self, references: u32) -> Self {
        self.references = references;
        self
    }

    /// Set the file size.
    pub fn with_size(mut self, file_size: u64) -> Self {
        self.file_size = file_size;
        self
    }

    /// Attach a title XML payload.
    pub fn with_xml(mut self, xml: impl Into<String>) -> Self {
        self.xml_data = Some(xml.into());
        self
    }

    /// Whether the clip is placed on the timeline at least once.
    pub fn is_used(&self) -> bool {
        self.references > 0
    }

    /// Whether the clip points at a file.
    pub fn has_file(&self) -> bool {
        !self.path.is_empty()
    }

    /// Look up a clip property by key. Empty string when absent.
    pub fn property(&self, key: &str) -> &str {
        match key {
            XML_DATA_PROPERTY => self.xml_data.as_deref().unwrap_or(""),
            _ => "",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_sets_fields() {
        let clip = Clip::new("3", ClipType::Text, "/titles/intro.kdenlivetitle")
            .with_references(2)
            .with_size(512)
            .with_xml("<kdenlivetitle/>");

        assert!(clip.is_used());
        assert!(clip.has_file());
        assert_eq!(clip.property(XML_DATA_PROPERTY), "<kdenlivetitle/>");
        assert_eq!(clip.property("resource"), "");
    }

    #[test]
    fn deserializes_with_defaults() {
        let clip: Clip = serde_json::from_str(r#"{"id": "7", "type": "video"}"#).unwrap();
        assert_eq!(clip.id.as_str(), "7");
        assert_eq!(clip.clip_type, ClipType::Video);
        assert!(!clip.has_file());
        assert_eq!(clip.references, 0);
    }
}
