use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::{AccountId, KeystoreError, KeystoreResult};

/// On-disk location of an encrypted key file and its password file.
#[derive(Debug, Clone)]
pub struct Keystore {
    pub file_path: PathBuf,
    pub password_path: PathBuf,
}

/// JSON envelope of an exported key file.
///
/// `encoded` stays encrypted here; decryption is the job of the
/// [`ChainApi`](crate::ChainApi) implementation that consumes the
/// [`Signer`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeystoreContent {
    pub address: String,
    pub encoded: String,
    pub encoding: KeystoreEncoding,
}

/// Encoding metadata of a key file. `content` carries the key container
/// format followed by the signing scheme, e.g. `["pkcs8", "sr25519"]`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeystoreEncoding {
    pub content: Vec<String>,
    #[serde(rename = "type")]
    pub kind: Vec<String>,
    pub version: String,
}

impl Keystore {
    pub fn new(file_path: impl Into<PathBuf>, password_path: impl Into<PathBuf>) -> Self {
        Self {
            file_path: file_path.into(),
            password_path: password_path.into(),
        }
    }

    /// Parse the key file envelope.
    pub fn read_content(&self) -> KeystoreResult<KeystoreContent> {
        let raw = fs::read_to_string(&self.file_path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Read the password file verbatim.
    pub fn read_password(&self) -> KeystoreResult<String> {
        Ok(fs::read_to_string(&self.password_path)?)
    }

    /// Pair the envelope with its password into a signing handle.
    pub fn unlock(&self) -> KeystoreResult<Signer> {
        let content = self.read_content()?;
        if content.encoding.content.len() < 2 {
            return Err(KeystoreError::MissingScheme(
                self.file_path.display().to_string(),
            ));
        }
        let password = self.read_password()?;
        Ok(Signer { content, password })
    }
}

/// An unlocked keystore: the still-encrypted key material plus the
/// password needed to decrypt it at signing time.
#[derive(Debug, Clone)]
pub struct Signer {
    content: KeystoreContent,
    password: String,
}

impl Signer {
    /// Build a signer from an already-parsed envelope. Fixture and test
    /// code use this; production callers go through [`Keystore::unlock`].
    pub fn from_parts(content: KeystoreContent, password: impl Into<String>) -> Self {
        Self {
            content,
            password: password.into(),
        }
    }

    pub fn address(&self) -> AccountId {
        AccountId::new(self.content.address.clone())
    }

    /// Signing scheme declared by the envelope, e.g. `sr25519`.
    pub fn scheme(&self) -> &str {
        &self.content.encoding.content[1]
    }

    pub fn encoded(&self) -> &str {
        &self.content.encoded
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}
