use crate::DomainError;
use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use base64::Engine;

/// Text answered when a payload cannot be decoded.
pub const INVALID_BASE64: &str = "Invalid base64";

/// Standard alphabet, canonical padding required, lenient about the unused
/// low bits of the final symbol.
const DECODER: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_decode_allow_trailing_bits(true)
        .with_decode_padding_mode(DecodePaddingMode::RequireCanonical),
);

pub fn encode_base64(text: &str) -> String {
    base64::engine::general_purpose::STANDARD.encode(text.as_bytes())
}

/// Decodes a base64 payload that may have lost its padding or picked up
/// whitespace in transit.
pub fn try_decode_base64(encoded: &str) -> Result<String, DomainError> {
    let mut cleaned: String = encoded
        .chars()
        .filter(|c| *c != ' ' && *c != '\n')
        .collect();
    while cleaned.len() % 4 != 0 {
        cleaned.push('=');
    }

    let bytes = DECODER
        .decode(cleaned.as_bytes())
        .map_err(|e| DomainError::InvalidBase64(e.to_string()))?;
    String::from_utf8(bytes).map_err(|_| DomainError::InvalidUtf8)
}

pub fn decode_base64(encoded: &str) -> String {
    try_decode_base64(encoded).unwrap_or_else(|_| INVALID_BASE64.to_string())
}
