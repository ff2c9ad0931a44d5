//! Token data model.
//!
//! Field declaration order is the canonical wire order; see [`crate::codec`].

use serde::{Deserialize, Serialize};
use std::fmt;

/// The single supported signature algorithm identifier.
pub const ALGORITHM: &str = "RS256";

/// Value of the header `type` field.
pub const TOKEN_TYPE: &str = "JWT";

/// First token segment.
///
/// Serialized as `{"alg":"RS256","type":"JWT"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Header {
    /// Algorithm used for signing.
    pub alg: String,
    /// Token type (always "JWT").
    #[serde(rename = "type")]
    pub typ: String,
}

impl Header {
    /// The only header the builder ever produces.
    #[must_use]
    pub fn rs256() -> Self {
        Self {
            alg: ALGORITHM.to_string(),
            typ: TOKEN_TYPE.to_string(),
        }
    }
}

impl Default for Header {
    fn default() -> Self {
        Self::rs256()
    }
}

/// Claims carried by the second segment.
///
/// Nothing here is validated: expiry in particular is carried as data and
/// must be enforced by the consumer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payload {
    /// Key identifier.
    pub kid: String,
    /// Issued-at (unix seconds).
    pub iat: i64,
    /// Expiry (unix seconds).
    pub exp: i64,
    /// Issuer.
    pub iss: String,
    /// Subject.
    pub sub: String,
    /// Audience.
    pub aud: String,
    /// Embedded user record, serialized as `null` when absent.
    pub user: Option<User>,
}

impl Payload {
    /// Start building a payload.
    #[must_use]
    pub fn builder() -> crate::claims::PayloadBuilder {
        crate::claims::PayloadBuilder::new()
    }
}

/// User record embedded in the payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// First name.
    pub given_name: String,
    /// Last name.
    pub family_name: String,
    /// Email address.
    pub email: String,
    /// Whether the email address has been verified.
    pub email_verified: bool,
}

/// A built compact token: `<header>.<payload>.<signature>`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Token {
    compact: String,
    header_len: usize,
    payload_len: usize,
}

impl Token {
    pub(crate) fn from_segments(header: &str, payload: &str, signature: &str) -> Self {
        let mut compact = String::with_capacity(header.len() + payload.len() + signature.len() + 2);
        compact.push_str(header);
        compact.push('.');
        compact.push_str(payload);
        compact.push('.');
        compact.push_str(signature);
        Self {
            compact,
            header_len: header.len(),
            payload_len: payload.len(),
        }
    }

    /// Full compact representation.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.compact
    }

    /// Encoded header segment.
    #[must_use]
    pub fn header_segment(&self) -> &str {
        &self.compact[..self.header_len]
    }

    /// Encoded payload segment.
    #[must_use]
    pub fn payload_segment(&self) -> &str {
        let start = self.header_len + 1;
        &self.compact[start..start + self.payload_len]
    }

    /// Encoded signature segment.
    #[must_use]
    pub fn signature_segment(&self) -> &str {
        &self.compact[self.signing_input_len() + 1..]
    }

    /// The bytes that were signed: `<header>.<payload>`.
    #[must_use]
    pub fn signing_input(&self) -> &str {
        &self.compact[..self.signing_input_len()]
    }

    /// Consume the token, returning the compact string.
    #[must_use]
    pub fn into_string(self) -> String {
        self.compact
    }

    fn signing_input_len(&self) -> usize {
        self.header_len + 1 + self.payload_len
    }
}

impl AsRef<str> for Token {
    fn as_ref(&self) -> &str {
        &self.compact
    }
}

impl From<Token> for String {
    fn from(token: Token) -> Self {
        token.compact
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.compact)
    }
}
