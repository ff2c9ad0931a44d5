//! Error types for the token pipeline.
//!
//! Every stage returns its own error type so callers can tell a token that is
//! not well formed apart from one that is well formed but forged. All of them
//! convert into [`TokenError`] for callers that only want a single type.

use std::path::PathBuf;
use thiserror::Error;

/// Result type used by the umbrella API.
pub type TokenResult<T> = Result<T, TokenError>;

/// Failure while encoding or decoding a single segment.
#[derive(Debug, Error)]
pub enum CodecError {
    /// Segment is not valid unpadded Base64URL.
    #[error("invalid base64url segment: {0}")]
    Base64(#[from] base64::DecodeError),
    /// Segment decoded, but its JSON content is malformed.
    #[error("invalid segment json: {0}")]
    Json(#[from] serde_json::Error),
}

/// Failure reported by a [`Signer`](crate::Signer) implementation.
#[derive(Debug, Error)]
pub enum SignError {
    /// The adapter holds no private key.
    #[error("no private key available for signing")]
    MissingKey,
    /// The underlying primitive rejected the operation.
    #[error("signing primitive failed: {0}")]
    Primitive(String),
}

/// Failure reported by a [`Verifier`](crate::Verifier) implementation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum VerifyError {
    /// The signature was readable but does not match the message.
    #[error("signature does not match message")]
    Mismatch,
    /// The signature bytes could not be interpreted by the primitive.
    #[error("unreadable signature: {0}")]
    Unreadable(String),
}

/// Failure while building a token.
#[derive(Debug, Error)]
pub enum BuildError {
    /// Header or payload could not be serialized.
    #[error("failed to encode {segment} segment: {source}")]
    Encode {
        /// Which segment failed.
        segment: &'static str,
        /// Codec failure.
        #[source]
        source: CodecError,
    },
    /// The signing capability failed. Never retried.
    #[error(transparent)]
    Sign(#[from] SignError),
}

/// Reason a compact token was rejected.
#[derive(Debug, Error)]
pub enum VerifyFailure {
    /// Not exactly three non-empty `.`-separated segments.
    #[error("malformed token: {0}")]
    MalformedToken(&'static str),
    /// Header segment does not decode into a header.
    #[error("malformed header: {0}")]
    MalformedHeader(String),
    /// Header declares an algorithm other than the supported one.
    #[error("algorithm mismatch: expected {expected}, found {found:?}")]
    AlgorithmMismatch {
        /// The only accepted identifier.
        expected: &'static str,
        /// The identifier the token claims.
        found: String,
    },
    /// Payload segment does not decode into a payload.
    #[error("malformed payload: {0}")]
    MalformedPayload(#[source] CodecError),
    /// Signature segment could not be decoded or read.
    #[error("malformed signature: {0}")]
    MalformedSignature(String),
    /// Well-formed token whose signature does not check out.
    #[error("signature invalid")]
    SignatureInvalid,
}

impl VerifyFailure {
    /// True when the input is not a well-formed token at all.
    #[must_use]
    pub fn is_malformed(&self) -> bool {
        matches!(
            self,
            VerifyFailure::MalformedToken(_)
                | VerifyFailure::MalformedHeader(_)
                | VerifyFailure::MalformedPayload(_)
                | VerifyFailure::MalformedSignature(_)
        )
    }

    /// True for rejections that indicate tampering or forgery rather than
    /// garbage input.
    #[must_use]
    pub fn is_security_rejection(&self) -> bool {
        matches!(
            self,
            VerifyFailure::AlgorithmMismatch { .. } | VerifyFailure::SignatureInvalid
        )
    }
}

/// Failure while loading key material.
#[derive(Debug, Error)]
pub enum KeyError {
    /// Key file could not be read.
    #[error("failed to read key file {}: {source}", path.display())]
    File {
        /// Offending path.
        path: PathBuf,
        /// I/O failure.
        #[source]
        source: std::io::Error,
    },
    /// Key reader failed.
    #[error("failed to read key: {0}")]
    Read(#[from] std::io::Error),
    /// Private key is not a PKCS#1 or PKCS#8 RSA PEM.
    #[error("invalid RSA private key: {0}")]
    InvalidPrivateKey(String),
    /// Public key is not a PKCS#1 or SPKI RSA PEM.
    #[error("invalid RSA public key: {0}")]
    InvalidPublicKey(String),
}

/// Any error this crate produces.
#[derive(Debug, Error)]
pub enum TokenError {
    /// Token construction failed.
    #[error(transparent)]
    Build(#[from] BuildError),
    /// Token was rejected.
    #[error(transparent)]
    Verify(#[from] VerifyFailure),
    /// Key material could not be loaded.
    #[error(transparent)]
    Key(#[from] KeyError),
    /// Background task was dropped before producing a result.
    #[error("background task failed")]
    TaskFailed,
}
