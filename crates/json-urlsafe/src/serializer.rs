//! Signed tokens: [`Codec`] composed with a [`Signer`].

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::codec::Codec;
use crate::error::{Error, Result};
use crate::signer::Signer;

/// Produces and consumes signed URL-safe tokens.
///
/// A token is the signer's output over the codec's framed string. Unmarshalling
/// verifies the signature first and never decodes a payload whose signature
/// failed.
#[derive(Debug, Clone)]
pub struct UrlSafeSerializer<S> {
    signer: S,
    codec: Codec,
}

impl<S: Signer> UrlSafeSerializer<S> {
    pub fn new(signer: S) -> Self {
        Self::with_codec(signer, Codec::default())
    }

    pub fn with_codec(signer: S, codec: Codec) -> Self {
        Self { signer, codec }
    }

    pub fn signer(&self) -> &S {
        &self.signer
    }

    pub fn codec(&self) -> &Codec {
        &self.codec
    }

    /// Encodes and signs `value`. Codec errors are returned unchanged.
    #[tracing::instrument(skip_all)]
    pub fn marshal<T: Serialize + ?Sized>(&self, value: &T) -> Result<String> {
        let framed = self.codec.encode(value)?;
        Ok(self.signer.sign(&framed))
    }

    /// Verifies and decodes `token` into a JSON value.
    pub fn unmarshal(&self, token: &str) -> Result<Value> {
        self.unmarshal_as(token)
    }

    /// Verifies and decodes `token` into any deserializable type.
    #[tracing::instrument(skip_all, fields(token_len = token.len()))]
    pub fn unmarshal_as<T: DeserializeOwned>(&self, token: &str) -> Result<T> {
        let framed = self.signer.unsign(token).map_err(|e| {
            tracing::debug!(error = %e, "token failed signature verification");
            Error::Signature(Box::new(e))
        })?;
        self.codec.decode_as(&framed)
    }
}
