//! RS256 (RSASSA-PKCS1-v1_5 with SHA-256) capability adapters.
//!
//! Thin pass-throughs to the `rsa` crate. Keys are accepted as PEM in either
//! the PKCS#1 form (`BEGIN RSA PRIVATE KEY` / `BEGIN RSA PUBLIC KEY`) or the
//! PKCS#8 / SPKI form (`BEGIN PRIVATE KEY` / `BEGIN PUBLIC KEY`).

use crate::config::KeyConfig;
use crate::error::{KeyError, SignError, VerifyError};
use crate::traits::{Signer, Verifier};
use rsa::pkcs1::{DecodeRsaPrivateKey, DecodeRsaPublicKey};
use rsa::pkcs1v15::{Signature, SigningKey, VerifyingKey};
use rsa::pkcs8::{DecodePrivateKey, DecodePublicKey};
use rsa::sha2::Sha256;
use rsa::signature::{SignatureEncoding, Signer as _, Verifier as _};
use rsa::traits::PublicKeyParts;
use rsa::{RsaPrivateKey, RsaPublicKey};
use std::fmt;
use std::io::Read;
use zeroize::Zeroizing;

fn private_key_from_pem(pem: &str) -> Result<RsaPrivateKey, KeyError> {
    let pem = pem.trim();
    RsaPrivateKey::from_pkcs1_pem(pem).or_else(|pkcs1_err| {
        RsaPrivateKey::from_pkcs8_pem(pem).map_err(|pkcs8_err| {
            KeyError::InvalidPrivateKey(format!("pkcs1: {pkcs1_err}; pkcs8: {pkcs8_err}"))
        })
    })
}

fn public_key_from_pem(pem: &str) -> Result<RsaPublicKey, KeyError> {
    let pem = pem.trim();
    RsaPublicKey::from_pkcs1_pem(pem).or_else(|pkcs1_err| {
        RsaPublicKey::from_public_key_pem(pem).map_err(|spki_err| {
            KeyError::InvalidPublicKey(format!("pkcs1: {pkcs1_err}; spki: {spki_err}"))
        })
    })
}

/// Signs with an RSA private key.
#[derive(Clone)]
pub struct Rs256Signer {
    key: SigningKey<Sha256>,
    public: RsaPublicKey,
}

impl Rs256Signer {
    /// Wrap an already parsed private key.
    #[must_use]
    pub fn new(private_key: RsaPrivateKey) -> Self {
        let public = private_key.to_public_key();
        Self {
            key: SigningKey::<Sha256>::new(private_key),
            public,
        }
    }

    /// Parse a PEM encoded private key.
    ///
    /// # Errors
    /// Returns [`KeyError::InvalidPrivateKey`] if the PEM is not an RSA private key.
    pub fn from_pem(pem: &str) -> Result<Self, KeyError> {
        private_key_from_pem(pem).map(Self::new)
    }

    /// Read and parse a PEM encoded private key.
    ///
    /// # Errors
    /// Returns [`KeyError::Read`] on I/O failure, otherwise as [`Self::from_pem`].
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self, KeyError> {
        let mut pem = Zeroizing::new(String::new());
        reader.read_to_string(&mut pem)?;
        Self::from_pem(&pem)
    }

    /// The verifier matching this private key.
    #[must_use]
    pub fn verifier(&self) -> Rs256Verifier {
        Rs256Verifier::new(self.public.clone())
    }
}

impl Signer for Rs256Signer {
    fn sign(&self, message: &[u8]) -> Result<Vec<u8>, SignError> {
        let signature = self
            .key
            .try_sign(message)
            .map_err(|e| SignError::Primitive(e.to_string()))?;
        Ok(signature.to_vec())
    }
}

impl fmt::Debug for Rs256Signer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rs256Signer")
            .field("modulus_bits", &(self.public.size() * 8))
            .finish_non_exhaustive()
    }
}

/// Verifies with an RSA public key.
#[derive(Debug, Clone)]
pub struct Rs256Verifier {
    key: VerifyingKey<Sha256>,
    signature_len: usize,
}

impl Rs256Verifier {
    /// Wrap an already parsed public key.
    #[must_use]
    pub fn new(public_key: RsaPublicKey) -> Self {
        let signature_len = public_key.size();
        Self {
            key: VerifyingKey::<Sha256>::new(public_key),
            signature_len,
        }
    }

    /// Parse a PEM encoded public key.
    ///
    /// # Errors
    /// Returns [`KeyError::InvalidPublicKey`] if the PEM is not an RSA public key.
    pub fn from_pem(pem: &str) -> Result<Self, KeyError> {
        public_key_from_pem(pem).map(Self::new)
    }

    /// Read and parse a PEM encoded public key.
    ///
    /// # Errors
    /// Returns [`KeyError::Read`] on I/O failure, otherwise as [`Self::from_pem`].
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self, KeyError> {
        let mut pem = String::new();
        reader.read_to_string(&mut pem)?;
        Self::from_pem(&pem)
    }
}

impl Verifier for Rs256Verifier {
    fn verify(&self, message: &[u8], signature: &[u8]) -> Result<(), VerifyError> {
        if signature.len() != self.signature_len {
            return Err(VerifyError::Unreadable(format!(
                "expected {} signature bytes, got {}",
                self.signature_len,
                signature.len()
            )));
        }
        let signature =
            Signature::try_from(signature).map_err(|e| VerifyError::Unreadable(e.to_string()))?;
        self.key
            .verify(message, &signature)
            .map_err(|_| VerifyError::Mismatch)
    }
}

/// Private/public key pair usable as both capabilities.
///
/// Without a private key the method is verify-only and signing fails with
/// [`SignError::MissingKey`].
#[derive(Debug, Clone)]
pub struct RsaMethod {
    signer: Option<Rs256Signer>,
    verifier: Rs256Verifier,
}

impl RsaMethod {
    /// Pair a signer with a verifier.
    #[must_use]
    pub fn new(signer: Rs256Signer, verifier: Rs256Verifier) -> Self {
        Self {
            signer: Some(signer),
            verifier,
        }
    }

    /// Verify-only method.
    #[must_use]
    pub fn verify_only(verifier: Rs256Verifier) -> Self {
        Self {
            signer: None,
            verifier,
        }
    }

    /// Method whose verifier is derived from the signer's own key.
    #[must_use]
    pub fn from_signer(signer: Rs256Signer) -> Self {
        let verifier = signer.verifier();
        Self::new(signer, verifier)
    }

    /// Parse a PEM private key and a PEM public key.
    ///
    /// # Errors
    /// Returns [`KeyError`] if either key fails to parse.
    pub fn from_pem(private_pem: &str, public_pem: &str) -> Result<Self, KeyError> {
        Ok(Self::new(
            Rs256Signer::from_pem(private_pem)?,
            Rs256Verifier::from_pem(public_pem)?,
        ))
    }

    /// Read a PEM private key and a PEM public key.
    ///
    /// # Errors
    /// Returns [`KeyError`] if either read or parse fails.
    pub fn from_pem_readers<P: Read, Q: Read>(private: P, public: Q) -> Result<Self, KeyError> {
        Ok(Self::new(
            Rs256Signer::from_reader(private)?,
            Rs256Verifier::from_reader(public)?,
        ))
    }

    /// Load keys from the files named in `config`.
    ///
    /// # Errors
    /// Returns [`KeyError::File`] if a file cannot be read, otherwise as
    /// [`Self::from_pem`].
    pub fn from_config(config: &KeyConfig) -> Result<Self, KeyError> {
        let verifier = Rs256Verifier::from_pem(&config.read_public_key()?)?;
        let signer = match config.read_private_key()? {
            Some(pem) => Some(Rs256Signer::from_pem(&pem)?),
            None => None,
        };
        Ok(Self { signer, verifier })
    }

    /// The signing half, if present.
    #[must_use]
    pub fn signer(&self) -> Option<&Rs256Signer> {
        self.signer.as_ref()
    }

    /// The verifying half.
    #[must_use]
    pub fn verifier(&self) -> &Rs256Verifier {
        &self.verifier
    }

    /// Whether this method can sign.
    #[must_use]
    pub fn can_sign(&self) -> bool {
        self.signer.is_some()
    }
}

impl Signer for RsaMethod {
    fn sign(&self, message: &[u8]) -> Result<Vec<u8>, SignError> {
        self.signer
            .as_ref()
            .ok_or(SignError::MissingKey)?
            .sign(message)
    }
}

impl Verifier for RsaMethod {
    fn verify(&self, message: &[u8], signature: &[u8]) -> Result<(), VerifyError> {
        self.verifier.verify(message, signature)
    }
}
