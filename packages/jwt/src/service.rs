//! Async facade over the synchronous pipeline.

use crate::error::TokenResult;
use crate::futures::{TokenBuildFuture, TokenVerifyFuture};
use crate::traits::{Signer, Verifier};
use crate::types::{Payload, Token};
use crate::{builder, parser};
use std::sync::Arc;
use tokio::sync::oneshot;

/// Shares one signer and one verifier across async callers.
///
/// RSA operations are CPU bound, so each call runs on Tokio's blocking pool.
/// Both methods must be called from within a Tokio runtime.
pub struct TokenService<S, V> {
    signer: Arc<S>,
    verifier: Arc<V>,
}

impl<S, V> TokenService<S, V>
where
    S: Signer + 'static,
    V: Verifier + 'static,
{
    /// Create a service from the two capabilities.
    pub fn new(signer: S, verifier: V) -> Self {
        Self {
            signer: Arc::new(signer),
            verifier: Arc::new(verifier),
        }
    }

    /// Create a service from already shared capabilities.
    pub fn from_shared(signer: Arc<S>, verifier: Arc<V>) -> Self {
        Self { signer, verifier }
    }

    /// Build a token for `payload`.
    ///
    /// # Panics
    /// Panics if called outside a Tokio runtime.
    pub fn build(&self, payload: Payload) -> TokenBuildFuture {
        let (tx, rx) = oneshot::channel();
        let signer = Arc::clone(&self.signer);

        tokio::task::spawn_blocking(move || {
            let result: TokenResult<Token> =
                builder::build(&payload, &*signer).map_err(Into::into);
            let _ = tx.send(result);
        });

        TokenBuildFuture::new(rx)
    }

    /// Verify `token` and extract its payload.
    ///
    /// # Panics
    /// Panics if called outside a Tokio runtime.
    pub fn verify<T: Into<String>>(&self, token: T) -> TokenVerifyFuture {
        let (tx, rx) = oneshot::channel();
        let verifier = Arc::clone(&self.verifier);
        let token: String = token.into();

        tokio::task::spawn_blocking(move || {
            let result: TokenResult<Payload> =
                parser::verify(&token, &*verifier).map_err(Into::into);
            let _ = tx.send(result);
        });

        TokenVerifyFuture::new(rx)
    }
}

impl<S, V> Clone for TokenService<S, V> {
    fn clone(&self) -> Self {
        Self {
            signer: Arc::clone(&self.signer),
            verifier: Arc::clone(&self.verifier),
        }
    }
}
