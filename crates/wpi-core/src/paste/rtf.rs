//! RTF image extractor.
//!
//! Scans the rich-text clipboard payload for embedded picture and shape
//! objects. RTF is a grammar-light hybrid of control words and hex-encoded
//! binary runs, so the scan is pattern matching, not structured parsing.
//!
//! Shape objects are vector drawings with no raster payload, but they MUST
//! be kept in the output sequence: a document may interleave images and
//! shapes, and dropping shapes would desynchronize positional alignment with
//! the HTML-side image sequence.

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

use super::error::PasteImageError;

/// Picture wrapper: `{\*\shppict ... {\*\blipuid <hex id>}`, lazily spanning
/// the picture control words, terminated by the unique-identifier marker.
const PICTURE_HEADER_PATTERN: &str = r"\{\\\*\\shppict[\s\S]+?\{\\\*\\blipuid\s+[0-9a-f]+\}\s?";

/// Shape wrapper: `{\shp ... {\*\svb`, terminated by the vector-brush marker.
const SHAPE_HEADER_PATTERN: &str = r"\{\\shp[\s\S]+?\{\\\*\\svb\s?";

/// The embedded binary run: lowercase hex digits, possibly wrapped with
/// whitespace/newlines by the producing editor.
const HEX_RUN_PATTERN: &str = r"[0-9a-f\s]+";

/// Both object kinds close with a double closing-brace pair.
const OBJECT_TERMINATOR_PATTERN: &str = r"\}\}";

/// Type-sniff control words, searched within the matched object span.
const PNG_BLIP: &str = r"\pngblip";
const JPEG_BLIP: &str = r"\jpegblip";

lazy_static! {
    static ref PICTURE_HEADER_RE: Regex = Regex::new(PICTURE_HEADER_PATTERN).unwrap();
    static ref SHAPE_HEADER_RE: Regex = Regex::new(SHAPE_HEADER_PATTERN).unwrap();
    static ref EMBEDDED_OBJECT_RE: Regex = Regex::new(
        &[
            "(?:(",
            PICTURE_HEADER_PATTERN,
            ")|(",
            SHAPE_HEADER_PATTERN,
            "))(",
            HEX_RUN_PATTERN,
            ")",
            OBJECT_TERMINATOR_PATTERN,
        ]
        .concat()
    )
    .unwrap();
}

/// Raster type of an embedded picture, sniffed from its header control words.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MediaType {
    Png,
    Jpeg,
    Unknown,
}

impl MediaType {
    /// MIME type used in the produced data URI. `Unknown` images are never
    /// substitution candidates, so they have no MIME representation.
    pub fn mime(&self) -> Option<&'static str> {
        match self {
            MediaType::Png => Some("image/png"),
            MediaType::Jpeg => Some("image/jpeg"),
            MediaType::Unknown => None,
        }
    }
}

/// One picture-or-shape construct found in the RTF payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EmbeddedObject {
    /// An embedded raster image. `hex_data` holds the whitespace-stripped
    /// hex run, present only when the media type is known.
    Image {
        media_type: MediaType,
        hex_data: Option<String>,
    },

    /// A vector drawing placeholder. Carries no bytes; exists solely to keep
    /// index correspondence with the HTML-side sequence valid.
    Shape,
}

impl EmbeddedObject {
    /// Returns the MIME type and hex run when this entry can be substituted.
    pub fn substitution_payload(&self) -> Option<(&'static str, &str)> {
        match self {
            EmbeddedObject::Image {
                media_type,
                hex_data: Some(hex_data),
            } => media_type.mime().map(|mime| (mime, hex_data.as_str())),
            _ => None,
        }
    }
}

/// Scans an RTF payload for embedded picture and shape objects, in document
/// order.
///
/// Returns an empty sequence when no constructs are present. Fails with
/// [`PasteImageError::MalformedEmbeddedObject`] when a wrapper matches
/// neither the picture nor the shape header; no partial sequence is returned.
pub fn extract_embedded_objects(rtf: &str) -> Result<Vec<EmbeddedObject>, PasteImageError> {
    let mut objects = Vec::new();

    for caps in EMBEDDED_OBJECT_RE.captures_iter(rtf) {
        let whole = &caps[0];

        if PICTURE_HEADER_RE.is_match(whole) {
            let media_type = sniff_media_type(whole);
            let hex_data = match media_type {
                MediaType::Unknown => None,
                _ => caps.get(3).map(|run| strip_whitespace(run.as_str())),
            };
            objects.push(EmbeddedObject::Image {
                media_type,
                hex_data,
            });
        } else if SHAPE_HEADER_RE.is_match(whole) {
            objects.push(EmbeddedObject::Shape);
        } else {
            return Err(PasteImageError::MalformedEmbeddedObject);
        }
    }

    Ok(objects)
}

fn sniff_media_type(object_span: &str) -> MediaType {
    if object_span.contains(PNG_BLIP) {
        MediaType::Png
    } else if object_span.contains(JPEG_BLIP) {
        MediaType::Jpeg
    } else {
        MediaType::Unknown
    }
}

/// The hex run may be wrapped with line breaks in the source payload.
fn strip_whitespace(hex_run: &str) -> String {
    hex_run.chars().filter(|c| !c.is_whitespace()).collect()
}
