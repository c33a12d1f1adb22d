use thiserror::Error;

/// Errors surfaced by the paste image-recovery pipeline.
///
/// All variants are synchronous and final; there is no transient-failure
/// class since the pipeline performs no I/O.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PasteImageError {
    /// The RTF payload contains a picture/shape wrapper that cannot be
    /// decomposed into header + hex run + terminator. Fatal for the paste
    /// event; the caller should keep the unmodified HTML fragment.
    #[error("unrecognized embedded object in rich-text payload")]
    MalformedEmbeddedObject,

    /// The HTML-side and RTF-side sequences have different lengths, so no
    /// positional alignment is possible. No substitution is performed.
    #[error("image count mismatch: {html_refs} html references vs {embedded} embedded objects")]
    CorrelationMismatch { html_refs: usize, embedded: usize },

    /// A hex run is empty, has odd length, or contains a non-hex character.
    /// The correlator treats this as "no usable bytes" for that one entry.
    #[error("invalid hex image data: {0}")]
    InvalidHexInput(#[from] hex::FromHexError),

    /// The RTF payload exceeds the input-size guard.
    #[error("rich-text payload too large: {len} bytes (limit {limit})")]
    PayloadTooLarge { len: usize, limit: usize },
}
