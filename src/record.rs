//! # Storage Record
//!
//! The `{ iv, data }` pair the host persists for every sealed blob: the vault
//! itself, the decoy vault, and biometric-wrapped master passwords. Serialized as
//! JSON with integer arrays.

use serde::{Deserialize, Serialize};

use crate::aliases::Nonce12;
use crate::error::BridgeError;

/// Nonce plus ciphertext-with-tag, exactly as stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EncryptedRecord {
    /// Nonce used for this ciphertext only.
    pub iv: Nonce12,
    /// AES-256-GCM ciphertext with the tag appended.
    pub data: Vec<u8>,
}

impl EncryptedRecord {
    pub fn new(iv: Nonce12, data: Vec<u8>) -> Self {
        Self { iv, data }
    }

    pub fn to_json(&self) -> Result<String, BridgeError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Parse a stored record. A missing field or an `iv` that is not 12 bytes is
    /// an [`BridgeError::Encoding`].
    pub fn from_json(json: &str) -> Result<Self, BridgeError> {
        Ok(serde_json::from_str(json)?)
    }
}
