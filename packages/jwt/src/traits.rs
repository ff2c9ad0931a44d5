//! Signing capabilities.
//!
//! The pipeline never hashes, pads or otherwise touches the signing input;
//! that is entirely the adapter's job. Any algorithm able to sign and check a
//! byte string can back a [`TokenBuilder`](crate::TokenBuilder) or
//! [`TokenVerifier`](crate::TokenVerifier).

use crate::error::{SignError, VerifyError};
use std::sync::Arc;

/// Produces a signature over a byte string.
///
/// Implementations must be thread-safe (Send + Sync); key material is
/// expected to be read-only after construction.
pub trait Signer: Send + Sync {
    /// Sign `message` and return the raw signature bytes.
    ///
    /// # Errors
    /// Returns [`SignError`] if the primitive cannot produce a signature.
    fn sign(&self, message: &[u8]) -> Result<Vec<u8>, SignError>;
}

/// Checks a signature over a byte string.
pub trait Verifier: Send + Sync {
    /// Check that `signature` is valid for `message`.
    ///
    /// # Errors
    /// Returns [`VerifyError::Mismatch`] when the check fails and
    /// [`VerifyError::Unreadable`] when the signature itself cannot be read.
    fn verify(&self, message: &[u8], signature: &[u8]) -> Result<(), VerifyError>;
}

impl<T: Signer + ?Sized> Signer for &T {
    fn sign(&self, message: &[u8]) -> Result<Vec<u8>, SignError> {
        (**self).sign(message)
    }
}

impl<T: Signer + ?Sized> Signer for Arc<T> {
    fn sign(&self, message: &[u8]) -> Result<Vec<u8>, SignError> {
        (**self).sign(message)
    }
}

impl<T: Signer + ?Sized> Signer for Box<T> {
    fn sign(&self, message: &[u8]) -> Result<Vec<u8>, SignError> {
        (**self).sign(message)
    }
}

impl<T: Verifier + ?Sized> Verifier for &T {
    fn verify(&self, message: &[u8], signature: &[u8]) -> Result<(), VerifyError> {
        (**self).verify(message, signature)
    }
}

impl<T: Verifier + ?Sized> Verifier for Arc<T> {
    fn verify(&self, message: &[u8], signature: &[u8]) -> Result<(), VerifyError> {
        (**self).verify(message, signature)
    }
}

impl<T: Verifier + ?Sized> Verifier for Box<T> {
    fn verify(&self, message: &[u8], signature: &[u8]) -> Result<(), VerifyError> {
        (**self).verify(message, signature)
    }
}
