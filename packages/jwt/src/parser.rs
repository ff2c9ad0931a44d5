//! Token parsing and verification.
//!
//! A single linear pass: split, decode header, check algorithm, decode
//! payload, decode signature, check signature. The signature is checked
//! against the raw segments taken from the input, never a re-encoding of the
//! decoded structures.

use crate::codec::{base64_url_decode, decode_segment};
use crate::error::{VerifyError, VerifyFailure};
use crate::traits::Verifier;
use crate::types::{ALGORITHM, Header, Payload, TOKEN_TYPE};
use tracing::{debug, warn};

/// Verifies compact tokens with a fixed [`Verifier`].
#[derive(Debug, Clone)]
pub struct TokenVerifier<V> {
    verifier: V,
}

impl<V: Verifier> TokenVerifier<V> {
    /// Create a token verifier around `verifier`.
    pub fn new(verifier: V) -> Self {
        Self { verifier }
    }

    /// Verify `token` and return its payload.
    ///
    /// # Errors
    /// See [`verify`].
    pub fn verify(&self, token: &str) -> Result<Payload, VerifyFailure> {
        verify(token, &self.verifier)
    }

    /// Borrow the verifier.
    pub fn verifier(&self) -> &V {
        &self.verifier
    }
}

/// The three raw segments of a compact token.
struct Segments<'a> {
    header: &'a str,
    payload: &'a str,
    signature: &'a str,
    signing_input: &'a str,
}

fn split(token: &str) -> Result<Segments<'_>, VerifyFailure> {
    let mut parts = token.split('.');
    let (Some(header), Some(payload), Some(signature), None) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return Err(VerifyFailure::MalformedToken(
            "expected exactly three segments",
        ));
    };

    if header.is_empty() || payload.is_empty() || signature.is_empty() {
        return Err(VerifyFailure::MalformedToken("empty segment"));
    }

    Ok(Segments {
        header,
        payload,
        signature,
        signing_input: &token[..header.len() + 1 + payload.len()],
    })
}

/// Verify `token` with `verifier` and return the decoded payload.
///
/// # Errors
/// - [`VerifyFailure::MalformedToken`] unless there are exactly three
///   non-empty segments
/// - [`VerifyFailure::MalformedHeader`] if the header does not decode or its
///   type is not `JWT`
/// - [`VerifyFailure::AlgorithmMismatch`] if the header names any algorithm
///   other than `RS256`; the signature is never looked at in that case
/// - [`VerifyFailure::MalformedPayload`] if the payload does not decode
/// - [`VerifyFailure::MalformedSignature`] if the signature segment does not
///   decode or the verifier cannot read it
/// - [`VerifyFailure::SignatureInvalid`] if the signature does not match
pub fn verify<V: Verifier + ?Sized>(token: &str, verifier: &V) -> Result<Payload, VerifyFailure> {
    let segments = split(token).inspect_err(|e| debug!(error = %e, "rejected token"))?;

    let header: Header = decode_segment(segments.header).map_err(|e| {
        debug!(error = %e, "rejected token header");
        VerifyFailure::MalformedHeader(e.to_string())
    })?;
    if header.alg != ALGORITHM {
        warn!(alg = %header.alg, "rejected token declaring unsupported algorithm");
        return Err(VerifyFailure::AlgorithmMismatch {
            expected: ALGORITHM,
            found: header.alg,
        });
    }
    if header.typ != TOKEN_TYPE {
        debug!(typ = %header.typ, "rejected token header");
        return Err(VerifyFailure::MalformedHeader(format!(
            "unexpected token type {:?}",
            header.typ
        )));
    }

    let payload: Payload = decode_segment(segments.payload).map_err(|e| {
        debug!(error = %e, "rejected token payload");
        VerifyFailure::MalformedPayload(e)
    })?;

    let signature = base64_url_decode(segments.signature).map_err(|e| {
        debug!(error = %e, "rejected token signature");
        VerifyFailure::MalformedSignature(e.to_string())
    })?;

    match verifier.verify(segments.signing_input.as_bytes(), &signature) {
        Ok(()) => {
            debug!(kid = %payload.kid, sub = %payload.sub, "verified token");
            Ok(payload)
        }
        Err(VerifyError::Mismatch) => {
            warn!(kid = %payload.kid, "rejected token with invalid signature");
            Err(VerifyFailure::SignatureInvalid)
        }
        Err(VerifyError::Unreadable(reason)) => {
            debug!(%reason, "rejected token signature");
            Err(VerifyFailure::MalformedSignature(reason))
        }
    }
}
