//! Key location configuration.
//!
//! Meant to be embedded in an application's own configuration file; this
//! crate reads no environment variables.

use crate::error::KeyError;
use crate::rs256::RsaMethod;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;
use zeroize::Zeroizing;

/// Where to find the PEM encoded RSA keys.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyConfig {
    /// Private key file. Absent for verify-only deployments.
    #[serde(default)]
    pub private_key_path: Option<PathBuf>,
    /// Public key file.
    pub public_key_path: PathBuf,
}

impl KeyConfig {
    /// Verify-only configuration.
    pub fn new(public_key_path: impl Into<PathBuf>) -> Self {
        Self {
            private_key_path: None,
            public_key_path: public_key_path.into(),
        }
    }

    /// Add a private key file.
    #[must_use]
    pub fn with_private_key(mut self, path: impl Into<PathBuf>) -> Self {
        self.private_key_path = Some(path.into());
        self
    }

    /// Load the configured keys.
    ///
    /// # Errors
    /// See [`RsaMethod::from_config`].
    pub fn load(&self) -> Result<RsaMethod, KeyError> {
        RsaMethod::from_config(self)
    }

    pub(crate) fn read_public_key(&self) -> Result<String, KeyError> {
        read_key_file(&self.public_key_path)
    }

    pub(crate) fn read_private_key(&self) -> Result<Option<Zeroizing<String>>, KeyError> {
        self.private_key_path
            .as_deref()
            .map(|path| read_key_file(path).map(Zeroizing::new))
            .transpose()
    }
}

fn read_key_file(path: &Path) -> Result<String, KeyError> {
    debug!(path = %path.display(), "reading key file");
    std::fs::read_to_string(path).map_err(|source| KeyError::File {
        path: path.to_path_buf(),
        source,
    })
}
