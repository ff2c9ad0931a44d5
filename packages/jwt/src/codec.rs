//! Segment codec: canonical JSON plus unpadded Base64URL (RFC 4648 §5).
//!
//! Canonical form is whatever `serde_json` emits for a derived `Serialize`
//! impl: compact, no whitespace, fields in declaration order. Token types in
//! [`crate::types`] rely on that, so reordering their fields changes the wire
//! format.

use crate::error::CodecError;
use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};
use serde::{Serialize, de::DeserializeOwned};

/// Base64URL encode without `=` padding.
#[inline]
#[must_use]
pub fn base64_url_encode(input: &[u8]) -> String {
    URL_SAFE_NO_PAD.encode(input)
}

/// Base64URL decode of an unpadded segment.
///
/// Padding is implied by the segment length, so explicit `=` characters,
/// characters outside the URL-safe alphabet, impossible lengths (`len % 4 ==
/// 1`) and non-zero trailing bits are all rejected.
///
/// # Errors
/// Returns [`CodecError::Base64`] on any of the conditions above.
#[inline]
pub fn base64_url_decode(input: &str) -> Result<Vec<u8>, CodecError> {
    Ok(URL_SAFE_NO_PAD.decode(input)?)
}

/// Serialize `value` canonically and encode it as a segment.
///
/// # Errors
/// Returns [`CodecError::Json`] if `value` cannot be serialized.
pub fn encode_segment<T: Serialize + ?Sized>(value: &T) -> Result<String, CodecError> {
    let json = serde_json::to_vec(value)?;
    Ok(base64_url_encode(&json))
}

/// Decode a segment produced by [`encode_segment`].
///
/// # Errors
/// Returns [`CodecError::Base64`] for bad encoding and [`CodecError::Json`]
/// for malformed structural content.
pub fn decode_segment<T: DeserializeOwned>(segment: &str) -> Result<T, CodecError> {
    let bytes = base64_url_decode(segment)?;
    Ok(serde_json::from_slice(&bytes)?)
}
