//! Playlist URL extraction.
//!
//! Reads an MLT project-description document and lists every file its
//! producers and transitions reference:
//!
//! ```xml
//! <mlt root="/media/">
//!   <producer id="p1">
//!     <property name="mlt_service">avformat</property>
//!     <property name="resource">clip1.mov</property>
//!   </producer>
//!   <transition id="t1">
//!     <property name="luma">fade.png</property>
//!   </transition>
//! </mlt>
//! ```

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use roxmltree::{Document, Node, ParsingOptions};

use super::slideshow::{expand_slideshow, is_slideshow_resource};

/// Producer service that generates a solid color and has no file.
const COLOUR_SERVICE: &str = "colour";

/// Extract every file referenced by the playlist at `path`.
///
/// Nested `.mlt`/`.kdenlive` playlists are expanded in place, once per
/// reference. A playlist that is one of its own ancestors is listed but not
/// entered again, so reference cycles terminate. Unreadable or malformed
/// documents contribute nothing.
pub fn extract_playlist_urls(path: impl AsRef<Path>) -> Vec<String> {
    let mut visited = HashSet::new();
    let mut urls = Vec::new();
    collect_urls(path.as_ref(), &mut visited, &mut urls);
    urls
}

fn collect_urls(path: &Path, visited: &mut HashSet<PathBuf>, urls: &mut Vec<String>) {
    let key = fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());
    if !visited.insert(key.clone()) {
        tracing::debug!("Playlist {} is already being expanded, skipping", path.display());
        return;
    }

    expand_document(path, visited, urls);

    // `visited` holds the current nesting chain only
    visited.remove(&key);
}

fn expand_document(path: &Path, visited: &mut HashSet<PathBuf>, urls: &mut Vec<String>) {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            tracing::warn!("Cannot read playlist {}: {}", path.display(), e);
            return;
        }
    };

    let options = ParsingOptions {
        allow_dtd: true,
        ..ParsingOptions::default()
    };
    let doc = match Document::parse_with_options(&content, options) {
        Ok(doc) => doc,
        Err(e) => {
            tracing::warn!("Cannot parse playlist {}: {}", path.display(), e);
            return;
        }
    };

    let mut root = doc
        .root_element()
        .attribute("root")
        .unwrap_or_default()
        .to_string();
    if !root.is_empty() && !root.ends_with('/') {
        root.push('/');
    }

    for producer in doc.descendants().filter(|n| n.has_tag_name("producer")) {
        if property(producer, "mlt_service") == Some(COLOUR_SERVICE) {
            continue;
        }
        let resource = match property(producer, "resource") {
            Some(resource) if !resource.is_empty() => resource,
            _ => continue,
        };

        let url = resolve(&root, resource);
        if is_slideshow_resource(&url) {
            urls.extend(expand_slideshow(&url));
        } else {
            urls.push(url.clone());
        }

        if url.ends_with(".mlt") || url.ends_with(".kdenlive") {
            collect_urls(Path::new(&url), visited, urls);
        }
    }

    for transition in doc.descendants().filter(|n| n.has_tag_name("transition")) {
        if let Some(luma) = property(transition, "luma").filter(|l| !l.is_empty()) {
            urls.push(resolve(&root, luma));
        }
    }
}

/// Value of a `<property name="...">` child element.
fn property<'a>(element: Node<'a, '_>, name: &str) -> Option<&'a str> {
    element
        .children()
        .find(|n| n.has_tag_name("property") && n.attribute("name") == Some(name))
        .map(|n| n.text().unwrap_or_default())
}

/// Prefix relative paths with the document root.
fn resolve(root: &str, url: &str) -> String {
    if url.starts_with('/') {
        url.to_string()
    } else {
        format!("{}{}", root, url)
    }
}
