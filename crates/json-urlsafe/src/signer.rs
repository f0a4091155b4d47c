//! Message-authentication capability consumed by
//! [`UrlSafeSerializer`](crate::UrlSafeSerializer).

use std::sync::Arc;

/// Signs and verifies framed strings.
///
/// Implementations own the secret, salt and token format. `sign` must be
/// deterministic and total. `unsign` must reject any token whose signature does
/// not match, is truncated, or lacks the expected separator, and it must
/// compare signatures in constant time.
///
/// Codec and serializer hold no mutable state, so an implementation that is
/// `Send + Sync` makes the serializer shareable across threads.
pub trait Signer {
    /// Verification failure reported by [`Signer::unsign`].
    type Error: std::error::Error + Send + Sync + 'static;

    fn sign(&self, payload: &str) -> String;

    /// Verifies `signed` and returns the payload it carries.
    fn unsign(&self, signed: &str) -> Result<String, Self::Error>;
}

impl<S: Signer + ?Sized> Signer for &S {
    type Error = S::Error;

    fn sign(&self, payload: &str) -> String {
        (**self).sign(payload)
    }

    fn unsign(&self, signed: &str) -> Result<String, Self::Error> {
        (**self).unsign(signed)
    }
}

impl<S: Signer + ?Sized> Signer for Box<S> {
    type Error = S::Error;

    fn sign(&self, payload: &str) -> String {
        (**self).sign(payload)
    }

    fn unsign(&self, signed: &str) -> Result<String, Self::Error> {
        (**self).unsign(signed)
    }
}

impl<S: Signer + ?Sized> Signer for Arc<S> {
    type Error = S::Error;

    fn sign(&self, payload: &str) -> String {
        (**self).sign(payload)
    }

    fn unsign(&self, signed: &str) -> Result<String, Self::Error> {
        (**self).unsign(signed)
    }
}
