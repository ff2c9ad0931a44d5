//! Token construction.

use crate::codec::{base64_url_encode, encode_segment};
use crate::error::BuildError;
use crate::traits::Signer;
use crate::types::{Header, Payload, Token};
use tracing::debug;

/// Builds compact tokens with a fixed [`Signer`].
///
/// Holds no state besides the signer, so one builder can serve any number of
/// concurrent `build` calls when the signer allows it.
#[derive(Debug, Clone)]
pub struct TokenBuilder<S> {
    signer: S,
}

impl<S: Signer> TokenBuilder<S> {
    /// Create a builder around `signer`.
    pub fn new(signer: S) -> Self {
        Self { signer }
    }

    /// Build a signed token for `payload`.
    ///
    /// # Errors
    /// See [`build`].
    pub fn build(&self, payload: &Payload) -> Result<Token, BuildError> {
        build(payload, &self.signer)
    }

    /// Borrow the signer.
    pub fn signer(&self) -> &S {
        &self.signer
    }

    /// Give the signer back.
    pub fn into_signer(self) -> S {
        self.signer
    }
}

/// Build a signed token for `payload`.
///
/// The header is always [`Header::rs256`]; it is never caller-supplied.
///
/// # Errors
/// Returns [`BuildError::Sign`] unchanged from the signer, or
/// [`BuildError::Encode`] if serialization fails. No partial token is ever
/// returned.
pub fn build<S: Signer + ?Sized>(payload: &Payload, signer: &S) -> Result<Token, BuildError> {
    let header = encode_segment(&Header::rs256()).map_err(|source| BuildError::Encode {
        segment: "header",
        source,
    })?;
    let body = encode_segment(payload).map_err(|source| BuildError::Encode {
        segment: "payload",
        source,
    })?;

    let signing_input = format!("{header}.{body}");
    let signature = signer.sign(signing_input.as_bytes())?;

    debug!(kid = %payload.kid, sub = %payload.sub, "built token");
    Ok(Token::from_segments(
        &header,
        &body,
        &base64_url_encode(&signature),
    ))
}
