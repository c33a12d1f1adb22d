//! Correlator/rewriter.
//!
//! Pairs the HTML-side image references with the RTF-side embedded objects
//! by position and splices data URIs over local file paths. The two
//! sequences are assumed to describe the same document-order run of visual
//! objects; there are no shared identifiers to match on.

use tracing::warn;

use super::error::PasteImageError;
use super::html::ImageReference;
use super::rtf::EmbeddedObject;
use super::transcode;

/// Rewrites local image references in `html` using the positionally
/// corresponding embedded objects.
///
/// Fails with [`PasteImageError::CorrelationMismatch`] when the sequences
/// differ in length; no partial substitution is ever performed. Per index,
/// remote references and objects without usable bytes are skipped, as is any
/// entry whose hex run turns out to be malformed. Zero substitutions is
/// success: the original fragment comes back unchanged.
pub fn rewrite_image_references(
    html: &str,
    references: &[ImageReference],
    objects: &[EmbeddedObject],
) -> Result<String, PasteImageError> {
    if references.len() != objects.len() {
        return Err(PasteImageError::CorrelationMismatch {
            html_refs: references.len(),
            embedded: objects.len(),
        });
    }

    let mut rewritten = html.to_string();
    for (reference, object) in references.iter().zip(objects) {
        if !reference.is_local_file() {
            continue;
        }
        let Some((mime, hex_data)) = object.substitution_payload() else {
            continue;
        };
        let encoded = match transcode::hex_to_base64(hex_data) {
            Ok(encoded) => encoded,
            Err(err) => {
                warn!(source_path = %reference.source_path, %err, "skipping image with unusable hex run");
                continue;
            }
        };
        let data_uri = format!("data:{mime};base64,{encoded}");
        replace_source_path(&mut rewritten, reference, &data_uri);
    }

    Ok(rewritten)
}

/// Replaces the path portion of the first occurrence of the reference's
/// matched span. Anchoring on the whole span rather than the bare path keeps
/// identical-looking text elsewhere in the fragment intact; the path is a
/// suffix of the span by construction of the scanner pattern.
fn replace_source_path(html: &mut String, reference: &ImageReference, data_uri: &str) {
    if let Some(anchor) = html.find(&reference.matched_text) {
        let span_end = anchor + reference.matched_text.len();
        let path_start = span_end - reference.source_path.len();
        html.replace_range(path_start..span_end, data_uri);
    }
}
