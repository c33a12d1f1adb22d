//! Recovery of embedded raster images for paste-from-Word events.
//!
//! The pipeline runs four stages over two in-memory strings:
//!
//! 1. [`extract_image_references`] scans the HTML fragment for `<img>`
//!    elements, in document order.
//! 2. [`extract_embedded_objects`] scans the RTF payload for picture and
//!    shape objects, in document order. Shapes are kept as placeholders so
//!    both sequences stay index-aligned.
//! 3. [`correlate::rewrite_image_references`] pairs the two sequences by
//!    position and splices `data:` URIs over local file paths.
//! 4. [`hex_to_base64`] transcodes a picture's hex run into the URI payload.
//!
//! [`rewrite_pasted_html`] is the single entry point wiring them together.

mod correlate;
mod error;
mod html;
mod pipeline;
mod rtf;
mod transcode;

pub use correlate::rewrite_image_references;
pub use error::PasteImageError;
pub use html::{extract_image_references, ImageReference, FILE_URL_PREFIX};
pub use pipeline::{rewrite_pasted_html, MAX_RTF_PAYLOAD_BYTES};
pub use rtf::{extract_embedded_objects, EmbeddedObject, MediaType};
pub use transcode::hex_to_base64;
