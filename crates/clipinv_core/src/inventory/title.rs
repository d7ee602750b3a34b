//! Title clip XML helpers.
//!
//! Title payloads store each item's content as a `<content>` element whose
//! `url` attribute names an image and whose `font` attribute names a font
//! family.

use roxmltree::Document;

/// Image files referenced by a title payload, in document order.
pub fn extract_image_list(xml: &str) -> Vec<String> {
    content_attributes(xml, "url")
}

/// Font families referenced by a title payload, in document order.
pub fn extract_font_list(xml: &str) -> Vec<String> {
    content_attributes(xml, "font")
}

fn content_attributes(xml: &str, attribute: &str) -> Vec<String> {
    if xml.trim().is_empty() {
        return Vec::new();
    }

    let doc = match Document::parse(xml) {
        Ok(doc) => doc,
        Err(e) => {
            tracing::debug!("Ignoring malformed title XML: {}", e);
            return Vec::new();
        }
    };

    doc.descendants()
        .filter(|n| n.has_tag_name("content"))
        .filter_map(|n| n.attribute(attribute))
        .filter(|value| !value.is_empty())
        .map(str::to_string)
        .collect()
}
