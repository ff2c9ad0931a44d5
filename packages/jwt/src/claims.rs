//! Fluent construction of [`Payload`] values.

use crate::types::{Payload, User};
use chrono::{DateTime, Duration, Utc};

/// Builder for [`Payload`].
///
/// Unset strings stay empty and unset times stay 0. No field is validated;
/// `build` always succeeds.
#[derive(Debug, Clone, Default)]
pub struct PayloadBuilder {
    payload: Payload,
    expires_in: Option<Duration>,
}

impl PayloadBuilder {
    /// Create an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the key identifier (kid).
    #[must_use]
    pub fn key_id(mut self, kid: impl Into<String>) -> Self {
        self.payload.kid = kid.into();
        self
    }

    /// Set the issuer (iss).
    #[must_use]
    pub fn issuer(mut self, iss: impl Into<String>) -> Self {
        self.payload.iss = iss.into();
        self
    }

    /// Set the subject (sub).
    #[must_use]
    pub fn subject(mut self, sub: impl Into<String>) -> Self {
        self.payload.sub = sub.into();
        self
    }

    /// Set the audience (aud).
    #[must_use]
    pub fn audience(mut self, aud: impl Into<String>) -> Self {
        self.payload.aud = aud.into();
        self
    }

    /// Embed a user record.
    #[must_use]
    pub fn user(mut self, user: User) -> Self {
        self.payload.user = Some(user);
        self
    }

    /// Set issued-at (iat) in unix seconds.
    #[must_use]
    pub fn issued_at(mut self, iat: i64) -> Self {
        self.payload.iat = iat;
        self
    }

    /// Set issued-at (iat) to the current time.
    #[must_use]
    pub fn issued_now(self) -> Self {
        self.issued_at(Utc::now().timestamp())
    }

    /// Set expiry (exp) in unix seconds.
    #[must_use]
    pub fn expires_at(mut self, exp: i64) -> Self {
        self.payload.exp = exp;
        self.expires_in = None;
        self
    }

    /// Set expiry (exp) to an absolute time.
    #[must_use]
    pub fn expires_at_time(self, exp: DateTime<Utc>) -> Self {
        self.expires_at(exp.timestamp())
    }

    /// Set expiry (exp) relative to issued-at, resolved in [`Self::build`].
    #[must_use]
    pub fn expires_in(mut self, duration: Duration) -> Self {
        self.expires_in = Some(duration);
        self
    }

    /// Finish the payload.
    #[must_use]
    pub fn build(self) -> Payload {
        let mut payload = self.payload;
        if let Some(duration) = self.expires_in {
            payload.exp = payload.iat.saturating_add(duration.num_seconds());
        }
        payload
    }
}
