//! Paste-event entry point.
//!
//! Runs the scan/extract/correlate stages sequentially over the two raw
//! clipboard strings. Purely synchronous: one paste event, one call, no
//! state survives across calls.

use tracing::debug;

use super::correlate;
use super::error::PasteImageError;
use super::html;
use super::rtf;

/// Upper bound on the accepted RTF payload. The format imposes no limit of
/// its own; this guard keeps worst-case rescans of a hostile or corrupted
/// payload bounded.
pub const MAX_RTF_PAYLOAD_BYTES: usize = 16 * 1024 * 1024;

/// Rewrites local image references in a pasted HTML fragment using the image
/// bytes embedded in the accompanying RTF clipboard payload.
///
/// Returns the corrected fragment, or the original fragment unchanged when
/// there is nothing to do: no RTF payload, no image references, or no
/// embedded objects. Fails with a [`PasteImageError`] when the RTF payload is
/// structurally unrecognized, oversized, or cannot be aligned with the HTML
/// reference sequence; callers should then fall back to the unmodified
/// fragment.
pub fn rewrite_pasted_html(html: &str, rtf: Option<&str>) -> Result<String, PasteImageError> {
    let Some(rtf) = rtf else {
        return Ok(html.to_string());
    };
    if rtf.len() > MAX_RTF_PAYLOAD_BYTES {
        return Err(PasteImageError::PayloadTooLarge {
            len: rtf.len(),
            limit: MAX_RTF_PAYLOAD_BYTES,
        });
    }

    let references = html::extract_image_references(html);
    if references.is_empty() {
        debug!("pasted html carries no image references, nothing to rewrite");
        return Ok(html.to_string());
    }

    let objects = rtf::extract_embedded_objects(rtf)?;
    if objects.is_empty() {
        debug!("rtf payload carries no embedded objects, nothing to rewrite");
        return Ok(html.to_string());
    }

    debug!(
        references = references.len(),
        objects = objects.len(),
        "correlating pasted image references with embedded objects"
    );
    correlate::rewrite_image_references(html, &references, &objects)
}

#[cfg(test)]
mod tests {
    use super::*;

    const PNG_SIGNATURE_OBJECT: &str =
        r"{\*\shppict{\pict\pngblip\picw8\pich8{\*\blipuid 0123456789abcdef}89504e470d0a1a0a}}";

    const SHAPE_OBJECT: &str = r"{\shp{\*\shpinst\shpleft0}{\*\svb 0011aa}}";

    fn rtf_document(objects: &str) -> String {
        format!(r"{{\rtf1\ansi\deff0 {objects}}}")
    }

    #[test]
    fn test_end_to_end_png_substitution() {
        let html = r#"<img src="file:///tmp/img1.png">"#;
        let rtf = rtf_document(PNG_SIGNATURE_OBJECT);

        let rewritten = rewrite_pasted_html(html, Some(&rtf)).unwrap();
        assert_eq!(
            rewritten,
            r#"<img src="data:image/png;base64,iVBORw0KGgo=">"#
        );
    }

    #[test]
    fn test_absent_rtf_returns_html_unchanged() {
        let html = r#"<img src="file:///tmp/img1.png">"#;
        assert_eq!(rewrite_pasted_html(html, None).unwrap(), html);
    }

    #[test]
    fn test_html_without_images_returns_unchanged() {
        let html = "<p>no images here</p>";
        let rtf = rtf_document(PNG_SIGNATURE_OBJECT);

        assert_eq!(rewrite_pasted_html(html, Some(&rtf)).unwrap(), html);
    }

    #[test]
    fn test_rtf_without_objects_returns_unchanged() {
        let html = r#"<img src="file:///tmp/img1.png">"#;
        let rtf = rtf_document(r"\f0 plain paragraph");

        assert_eq!(rewrite_pasted_html(html, Some(&rtf)).unwrap(), html);
    }

    #[test]
    fn test_interleaved_shape_keeps_alignment() {
        let html = r#"<img src="file:///tmp/a.png"><img src="file:///tmp/b.png"><img src="file:///tmp/c.png">"#;
        let rtf = rtf_document(&format!(
            "{PNG_SIGNATURE_OBJECT}{SHAPE_OBJECT}{PNG_SIGNATURE_OBJECT}"
        ));

        let rewritten = rewrite_pasted_html(html, Some(&rtf)).unwrap();
        assert_eq!(
            rewritten,
            concat!(
                r#"<img src="data:image/png;base64,iVBORw0KGgo=">"#,
                r#"<img src="file:///tmp/b.png">"#,
                r#"<img src="data:image/png;base64,iVBORw0KGgo=">"#
            )
        );
    }

    #[test]
    fn test_count_mismatch_surfaces_correlation_error() {
        let html = r#"<img src="file:///tmp/a.png"><img src="file:///tmp/b.png">"#;
        let rtf = rtf_document(&format!(
            "{SHAPE_OBJECT}{PNG_SIGNATURE_OBJECT}{PNG_SIGNATURE_OBJECT}"
        ));

        assert_eq!(
            rewrite_pasted_html(html, Some(&rtf)).unwrap_err(),
            PasteImageError::CorrelationMismatch {
                html_refs: 2,
                embedded: 3,
            }
        );
    }

    #[test]
    fn test_oversized_rtf_rejected() {
        let html = r#"<img src="file:///tmp/a.png">"#;
        let rtf = "x".repeat(MAX_RTF_PAYLOAD_BYTES + 1);

        assert_eq!(
            rewrite_pasted_html(html, Some(&rtf)).unwrap_err(),
            PasteImageError::PayloadTooLarge {
                len: MAX_RTF_PAYLOAD_BYTES + 1,
                limit: MAX_RTF_PAYLOAD_BYTES,
            }
        );
    }
}
