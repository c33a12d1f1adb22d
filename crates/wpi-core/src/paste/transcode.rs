//! Hex-to-binary-to-base64 transcoder.
//!
//! Pure leaf utility: decodes a hexadecimal digit string into bytes, then
//! encodes the bytes as standard base64 text for use in a data URI.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use super::error::PasteImageError;

/// Transcodes a hex digit string into its base64 text representation.
///
/// Fails with [`PasteImageError::InvalidHexInput`] on odd length, non-hex
/// characters, or empty input; no partial output is produced. Both digit
/// cases are accepted.
pub fn hex_to_base64(hex_digits: &str) -> Result<String, PasteImageError> {
    if hex_digits.is_empty() {
        // A picture object with a zero-length hex run has no bytes to embed.
        return Err(PasteImageError::InvalidHexInput(
            hex::FromHexError::InvalidStringLength,
        ));
    }
    let bytes = hex::decode(hex_digits)?;
    Ok(STANDARD.encode(bytes))
}
