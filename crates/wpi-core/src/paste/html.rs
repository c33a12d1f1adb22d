//! HTML reference scanner.
//!
//! Finds `<img>` elements in the pasted HTML fragment and records their
//! `src` values in document order. The scan is purely textual: ordered,
//! non-overlapping matches of the source-attribute pattern, no HTML tree.

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Scheme prefix marking a transient local resource. Only paths with this
/// prefix are substitution candidates; remote URLs are left untouched.
pub const FILE_URL_PREFIX: &str = "file:///";

/// An `<img>` element up to and including its `src` value. The capture group
/// is a suffix of the whole match, which lets the rewriter splice the path
/// out of an anchored span.
const IMG_SRC_PATTERN: &str = r#"<img[^>]+src="([^"]+)"#;

lazy_static! {
    static ref IMG_SRC_RE: Regex = Regex::new(IMG_SRC_PATTERN).unwrap();
}

/// One image reference found in the HTML fragment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageReference {
    /// The literal matched text span, kept as a replace anchor so the
    /// rewriter substitutes only the intended occurrence even when the same
    /// path string appears elsewhere in the fragment.
    pub matched_text: String,

    /// The raw `src` attribute value, quotes excluded.
    pub source_path: String,
}

impl ImageReference {
    /// Whether the reference points at a transient local file.
    pub fn is_local_file(&self) -> bool {
        self.source_path.starts_with(FILE_URL_PREFIX)
    }
}

/// Scans an HTML fragment for image references, in document order.
///
/// Elements without a `src` attribute produce no entry.
pub fn extract_image_references(html: &str) -> Vec<ImageReference> {
    IMG_SRC_RE
        .captures_iter(html)
        .map(|caps| ImageReference {
            matched_text: caps[0].to_string(),
            source_path: caps[1].to_string(),
        })
        .collect()
}
