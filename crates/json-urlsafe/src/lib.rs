//! Compact, tamper-evident URL-safe tokens for JSON values.
//!
//! A value is serialized to JSON, zlib-compressed when that makes it strictly
//! smaller, and encoded as unpadded base64url. Compressed payloads carry a
//! leading `.` marker. The resulting framed string is then signed by a
//! caller-supplied [`Signer`].
//!
//! # Example
//!
//! ```
//! use json_urlsafe::{decode, encode};
//! use serde_json::json;
//!
//! let framed = encode(&json!({"user": "ada", "roles": ["admin"]})).unwrap();
//! assert_eq!(decode(&framed).unwrap(), json!({"user": "ada", "roles": ["admin"]}));
//!
//! let framed = encode(&"x".repeat(10_000)).unwrap();
//! assert!(framed.starts_with('.'));
//! ```

pub mod cli;
mod codec;
mod deflate;
mod error;
mod finite;
mod frame;
mod options;
mod serializer;
mod signer;

pub use codec::{decode, encode, Codec};
pub use error::{Error, InflateError, Result, SignerError};
pub use frame::{is_compressed, COMPRESSION_MARKER};
pub use options::{CodecOptions, DEFAULT_COMPRESSION_LEVEL, DEFAULT_MAX_DECOMPRESSED_SIZE};
pub use serializer::UrlSafeSerializer;
pub use signer::Signer;

/// Returns the crate version at compile time.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
