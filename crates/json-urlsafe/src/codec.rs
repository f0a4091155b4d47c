//! Unsigned value ⇄ framed-string transform.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::deflate;
use crate::error::{Error, Result};
use crate::finite::Finite;
use crate::frame;
use crate::options::CodecOptions;

/// Stateless JSON → zlib → base64url codec.
///
/// Encoding compresses the JSON bytes and keeps the compressed form only when
/// it is strictly shorter; ties stay uncompressed. A compressed payload is
/// marked with a leading [`COMPRESSION_MARKER`](crate::COMPRESSION_MARKER).
///
/// # Example
///
/// ```
/// use json_urlsafe::Codec;
/// use serde_json::json;
///
/// let codec = Codec::default();
/// let framed = codec.encode(&json!({"a": 1})).unwrap();
/// assert!(!framed.starts_with('.'));
/// assert_eq!(codec.decode(&framed).unwrap(), json!({"a": 1}));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Codec {
    options: CodecOptions,
}

impl Codec {
    pub fn new(options: CodecOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &CodecOptions {
        &self.options
    }

    /// Encodes `value` into a framed string.
    ///
    /// NaN and infinite floats have no JSON form and fail with
    /// [`Error::Serialization`], as do maps with non-string keys.
    pub fn encode<T: Serialize + ?Sized>(&self, value: &T) -> Result<String> {
        let json = serde_json::to_vec(&Finite(value)).map_err(|e| {
            tracing::debug!(error = %e, "value is not JSON-representable");
            Error::Serialization(e)
        })?;
        let deflated = deflate::compress(&json, self.options.compression()).map_err(|e| {
            tracing::debug!(error = %e, json_len = json.len(), "zlib stream failed");
            Error::Compression(e)
        })?;

        let compressed = deflated.len() < json.len();
        tracing::trace!(
            json_len = json.len(),
            deflated_len = deflated.len(),
            compressed,
            "encoded payload"
        );
        let payload = if compressed { &deflated } else { &json };
        Ok(frame::frame(payload, compressed))
    }

    /// Decodes a framed string into a JSON value.
    ///
    /// Bytes following the end of a compressed payload's zlib stream are
    /// ignored, matching the zlib reader of earlier token producers.
    pub fn decode(&self, framed: &str) -> Result<Value> {
        self.decode_as(framed)
    }

    /// Decodes a framed string into any deserializable type.
    pub fn decode_as<T: DeserializeOwned>(&self, framed: &str) -> Result<T> {
        let payload = self.decode_payload(framed)?;
        serde_json::from_slice(&payload).map_err(|e| {
            tracing::debug!(error = %e, payload_len = payload.len(), "payload is not valid JSON");
            Error::Deserialization(e)
        })
    }

    /// Strips the framing and inflates, returning the raw JSON bytes.
    fn decode_payload(&self, framed: &str) -> Result<Vec<u8>> {
        if framed.is_empty() {
            tracing::debug!("rejecting empty framed string");
            return Err(Error::EmptyInput);
        }

        let (compressed, body) = frame::split_marker(framed);
        let bytes = frame::decode_body(body).map_err(|e| {
            tracing::debug!(error = %e, body_len = body.len(), "invalid base64url body");
            Error::Encoding(e)
        })?;
        if !compressed {
            return Ok(bytes);
        }

        let limit = self.options.max_decompressed_size;
        deflate::inflate(&bytes, limit).map_err(|e| {
            tracing::debug!(error = %e, deflated_len = bytes.len(), limit, "inflate failed");
            Error::Decompression(e)
        })
    }
}

/// Encodes `value` with the default [`Codec`].
pub fn encode<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    Codec::default().encode(value)
}

/// Decodes `framed` with the default [`Codec`].
pub fn decode(framed: &str) -> Result<Value> {
    Codec::default().decode(framed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::InflateError;
    use serde_json::json;
    use std::collections::BTreeMap;

    #[test]
    fn small_object_stays_uncompressed() {
        let framed = encode(&json!({"a": 1})).unwrap();
        assert_eq!(framed, "eyJhIjoxfQ");
        assert_eq!(decode(&framed).unwrap(), json!({"a": 1}));
    }

    #[test]
    fn repetitive_string_is_compressed() {
        let long = "x".repeat(10_000);
        let framed = encode(&long).unwrap();
        assert!(framed.starts_with('.'));
        assert!(framed.len() < 200);
        assert_eq!(decode(&framed).unwrap(), Value::String(long));
    }

    #[test]
    fn empty_input() {
        assert!(matches!(decode(""), Err(Error::EmptyInput)));
    }

    #[test]
    fn bare_marker_fails_to_inflate() {
        assert!(matches!(
            decode("."),
            Err(Error::Decompression(InflateError::Truncated))
        ));
    }

    #[test]
    fn unmarked_whitespace_body_is_not_json() {
        // A lone space is not a JSON document.
        assert!(matches!(decode("IA"), Err(Error::Deserialization(_))));
    }

    #[test]
    fn non_string_keys_fail_to_serialize() {
        let mut map = BTreeMap::new();
        map.insert(vec![1u8], "v");
        assert!(matches!(encode(&map), Err(Error::Serialization(_))));
    }

    #[test]
    fn non_finite_floats_fail_to_serialize() {
        assert!(matches!(encode(&f64::NAN), Err(Error::Serialization(_))));
        assert!(matches!(encode(&f32::NEG_INFINITY), Err(Error::Serialization(_))));
        assert!(matches!(
            encode(&vec![1.0, f64::INFINITY]),
            Err(Error::Serialization(_))
        ));
        let mut nested = BTreeMap::new();
        nested.insert("reading", Some(vec![0.5, f64::NAN]));
        let err = encode(&nested).unwrap_err();
        assert_eq!(err.stage(), "serialize");
    }

    #[test]
    fn trailing_bytes_after_zlib_stream_are_ignored() {
        let mut payload = deflate::compress(b"[1,2,3]", flate2::Compression::default()).unwrap();
        payload.extend_from_slice(b"tail");
        let framed = frame::frame(&payload, true);
        assert_eq!(decode(&framed).unwrap(), json!([1, 2, 3]));
    }

    #[test]
    fn typed_decode() {
        #[derive(Debug, PartialEq, serde::Serialize, serde::Deserialize)]
        struct Session {
            user: String,
            admin: bool,
        }
        let session = Session { user: "ada".into(), admin: false };
        let framed = encode(&session).unwrap();
        let back: Session = Codec::default().decode_as(&framed).unwrap();
        assert_eq!(back, session);
        assert!(matches!(
            Codec::default().decode_as::<Vec<u32>>(&framed),
            Err(Error::Deserialization(_))
        ));
    }

    #[test]
    fn ceiling_comes_from_options() {
        let framed = encode(&"y".repeat(4096)).unwrap();
        let strict = Codec::new(CodecOptions::default().with_max_decompressed_size(1024));
        assert!(matches!(
            strict.decode(&framed),
            Err(Error::Decompression(InflateError::TooLarge { limit: 1024 }))
        ));
    }
}
