//! # Biometric Wrapping
//!
//! A platform authenticator (WebAuthn, Touch ID, …) hands the host a credential
//! identifier. The bridge stretches those bytes into a wrapping key and uses it
//! to seal the master password, so a successful biometric ceremony can unlock
//! the vault without typing it.
//!
//! The credential identifier is not secret; the host stores it unencrypted and
//! re-supplies it on every unwrap. The wrapped password uses the same
//! [`EncryptedRecord`](crate::EncryptedRecord) shape as the vault.

use tracing::debug;

use crate::aliases::{Nonce12, PlaintextString, WrappingKey32};
use crate::consts::BIO_KEY_SALT;
use crate::crypto::aead;
use crate::crypto::kdf::{derive_key_with_params, KdfParams};
use crate::error::BridgeError;

/// Wrapping key from `credential_id` under the fixed application salt.
///
/// Kept for compatibility with wrapped passwords already on disk. New
/// enrolments should prefer [`derive_bio_key_with_salt`] with a per-installation
/// random salt.
pub fn derive_bio_key(credential_id: &[u8]) -> Result<WrappingKey32, BridgeError> {
    derive_bio_key_with_salt(credential_id, BIO_KEY_SALT)
}

/// Wrapping key from `credential_id` under a caller-supplied salt (≥ 16 bytes).
pub fn derive_bio_key_with_salt(
    credential_id: &[u8],
    salt: &[u8],
) -> Result<WrappingKey32, BridgeError> {
    derive_bio_key_with_params(credential_id, salt, &KdfParams::default())
}

/// Wrapping key with explicit Argon2id cost.
pub fn derive_bio_key_with_params(
    credential_id: &[u8],
    salt: &[u8],
    params: &KdfParams,
) -> Result<WrappingKey32, BridgeError> {
    if credential_id.is_empty() {
        return Err(BridgeError::Derivation("credential identifier is empty".into()));
    }
    let key = derive_key_with_params(credential_id, salt, params)?;
    debug!(credential_len = credential_id.len(), "derived biometric wrapping key");
    Ok(key)
}

/// Seal `secret` (normally the master password) under `wrapping_key`.
pub fn wrap_secret(
    secret: &str,
    wrapping_key: &WrappingKey32,
    nonce: &Nonce12,
) -> Result<Vec<u8>, BridgeError> {
    aead::encrypt(wrapping_key, nonce, secret.as_bytes())
}

/// Recover a secret sealed by [`wrap_secret`].
///
/// A different credential, a different nonce or a modified ciphertext all give
/// [`BridgeError::Authentication`].
pub fn unwrap_secret(
    ciphertext: &[u8],
    wrapping_key: &WrappingKey32,
    nonce: &Nonce12,
) -> Result<PlaintextString, BridgeError> {
    aead::decrypt_to_string(wrapping_key, nonce, ciphertext)
}
