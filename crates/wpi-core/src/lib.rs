//! # wpi-core
//!
//! Core reconciliation logic for images pasted from word-processing
//! documents.
//!
//! When content copied from a Word-style editor is pasted, the clipboard
//! carries two parallel representations: an HTML fragment whose `<img>`
//! elements point at transient `file:///` paths, and an RTF payload that
//! embeds the actual image bytes as hex-encoded runs. This crate parses the
//! RTF payload, correlates it positionally with the HTML image references,
//! and rewrites each local reference into a self-contained `data:` URI.
//!
//! This crate contains pure business logic without any infrastructure
//! dependencies; the enclosing paste pipeline supplies the two raw strings
//! and consumes the corrected fragment.

// Public module exports
pub mod paste;

// Re-export commonly used types at the crate root
pub use paste::{
    extract_embedded_objects, extract_image_references, hex_to_base64, rewrite_pasted_html,
    EmbeddedObject, ImageReference, MediaType, PasteImageError,
};
