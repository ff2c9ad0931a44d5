//! Concrete Future types for the async facade.
//!
//! Each future waits on a oneshot channel fed by a blocking task, so callers
//! never see the task machinery.

use crate::error::{TokenError, TokenResult};
use crate::types::{Payload, Token};
use std::{
    future::Future,
    pin::Pin,
    task::{Context, Poll},
};
use tokio::sync::oneshot;

/// Future for token build operations.
#[must_use = "futures do nothing unless polled"]
pub struct TokenBuildFuture {
    rx: oneshot::Receiver<TokenResult<Token>>,
}

impl TokenBuildFuture {
    pub(crate) fn new(rx: oneshot::Receiver<TokenResult<Token>>) -> Self {
        Self { rx }
    }
}

impl Future for TokenBuildFuture {
    type Output = TokenResult<Token>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        match Pin::new(&mut self.rx).poll(cx) {
            Poll::Ready(Ok(result)) => Poll::Ready(result),
            Poll::Ready(Err(_)) => Poll::Ready(Err(TokenError::TaskFailed)),
            Poll::Pending => Poll::Pending,
        }
    }
}

/// Future for token verification operations.
#[must_use = "futures do nothing unless polled"]
pub struct TokenVerifyFuture {
    rx: oneshot::Receiver<TokenResult<Payload>>,
}

impl TokenVerifyFuture {
    pub(crate) fn new(rx: oneshot::Receiver<TokenResult<Payload>>) -> Self {
        Self { rx }
    }
}

impl Future for TokenVerifyFuture {
    type Output = TokenResult<Payload>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        match Pin::new(&mut self.rx).poll(cx) {
            Poll::Ready(Ok(result)) => Poll::Ready(result),
            Poll::Ready(Err(_)) => Poll::Ready(Err(TokenError::TaskFailed)),
            Poll::Pending => Poll::Pending,
        }
    }
}
