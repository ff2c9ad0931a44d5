//! Compact RS256-signed tokens.
//!
//! A token is three unpadded Base64URL segments joined by `.`:
//! `<header>.<payload>.<signature>`. The signature covers the exact bytes
//! `<header>.<payload>`, produced by a [`Signer`] and checked by a
//! [`Verifier`]. The pipeline is generic over both capabilities;
//! [`Rs256Signer`], [`Rs256Verifier`] and [`RsaMethod`] back them with
//! RSASSA-PKCS1-v1_5 over SHA-256.
//!
//! ```no_run
//! use sigjwt::{Payload, RsaMethod, TokenBuilder, TokenVerifier};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! # let (private_pem, public_pem) = ("", "");
//! let method = RsaMethod::from_pem(private_pem, public_pem)?;
//! let payload = Payload::builder().subject("subject").issued_now().build();
//!
//! let token = TokenBuilder::new(&method).build(&payload)?;
//! let verified = TokenVerifier::new(&method).verify(token.as_str())?;
//! assert_eq!(verified, payload);
//! # Ok(())
//! # }
//! ```

pub mod builder;
pub mod claims;
pub mod codec;
pub mod config;
mod error;
pub mod futures;
pub mod parser;
pub mod rs256;
pub mod service;
mod traits;
mod types;

pub use builder::{TokenBuilder, build};
pub use claims::PayloadBuilder;
pub use config::KeyConfig;
pub use error::*;
pub use parser::{TokenVerifier, verify};
pub use rs256::{Rs256Signer, Rs256Verifier, RsaMethod};
pub use service::TokenService;
pub use traits::{Signer, Verifier};
pub use types::*;
