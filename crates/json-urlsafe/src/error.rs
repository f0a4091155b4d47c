//! Error taxonomy for the encode/decode pipeline.

use thiserror::Error;

/// Boxed error reported by a [`Signer`](crate::Signer) that rejected a token.
pub type SignerError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Result alias used throughout the crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Every way encoding, decoding, marshalling or unmarshalling can fail.
///
/// Each variant names the pipeline stage that failed and keeps the underlying
/// cause reachable through [`std::error::Error::source`].
#[derive(Debug, Error)]
pub enum Error {
    /// The value could not be written as JSON.
    #[error("error JSON marshalling payload: {0}")]
    Serialization(#[source] serde_json::Error),

    /// The zlib encoder reported a stream failure.
    #[error("error compressing payload: {0}")]
    Compression(#[source] std::io::Error),

    /// The framed string was empty.
    #[error("empty payload")]
    EmptyInput,

    /// The framed string is not valid unpadded base64url.
    #[error("invalid base64url payload: {0}")]
    Encoding(#[source] base64::DecodeError),

    /// The compressed payload could not be inflated.
    #[error("error decompressing payload: {0}")]
    Decompression(#[source] InflateError),

    /// The decoded bytes are not valid JSON for the requested type.
    #[error("error JSON unmarshalling payload: {0}")]
    Deserialization(#[source] serde_json::Error),

    /// The signer rejected the token.
    #[error("signature verification failed: {0}")]
    Signature(#[source] SignerError),
}

impl Error {
    /// Name of the pipeline stage that produced this error.
    pub fn stage(&self) -> &'static str {
        match self {
            Error::Serialization(_) => "serialize",
            Error::Compression(_) => "compress",
            Error::EmptyInput => "frame",
            Error::Encoding(_) => "base64",
            Error::Decompression(_) => "inflate",
            Error::Deserialization(_) => "deserialize",
            Error::Signature(_) => "unsign",
        }
    }
}

/// Reasons a compressed payload fails to inflate.
#[derive(Debug, Error)]
pub enum InflateError {
    /// The bytes are not a valid zlib stream.
    #[error("corrupt zlib stream: {0}")]
    Corrupt(#[from] flate2::DecompressError),

    /// The input ended before the zlib stream was complete.
    #[error("truncated zlib stream")]
    Truncated,

    /// The inflated output would exceed the configured ceiling.
    #[error("decompressed payload exceeds {limit} bytes")]
    TooLarge { limit: usize },
}
