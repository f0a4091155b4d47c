//! Framed-string grammar: `["."] base64url(payload)`.
//!
//! The payload is encoded with the URL-safe alphabet (`-` and `_` in place of
//! `+` and `/`) and without `=` padding. Decoding is strict: padding,
//! characters outside the alphabet and non-canonical trailing bits are all
//! rejected.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;

/// Leading character marking a compressed payload.
pub const COMPRESSION_MARKER: char = '.';

/// Frames `payload`, prefixing the marker when `compressed` is set.
pub(crate) fn frame(payload: &[u8], compressed: bool) -> String {
    let mut out = String::with_capacity(usize::from(compressed) + (payload.len() * 4).div_ceil(3));
    if compressed {
        out.push(COMPRESSION_MARKER);
    }
    URL_SAFE_NO_PAD.encode_string(payload, &mut out);
    out
}

/// Splits a framed string into its compression flag and base64url body.
pub(crate) fn split_marker(framed: &str) -> (bool, &str) {
    match framed.strip_prefix(COMPRESSION_MARKER) {
        Some(body) => (true, body),
        None => (false, framed),
    }
}

/// Returns `true` when `framed` carries a compressed payload.
pub fn is_compressed(framed: &str) -> bool {
    framed.starts_with(COMPRESSION_MARKER)
}

pub(crate) fn decode_body(body: &str) -> Result<Vec<u8>, base64::DecodeError> {
    URL_SAFE_NO_PAD.decode(body)
}
