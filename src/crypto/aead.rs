//! src/crypto/aead.rs
//! AES-256-GCM seal/open with a caller-supplied nonce
//!
//! There is no internal nonce counter: every call takes the nonce explicitly, and
//! [`CryptoBridge::seal`](crate::CryptoBridge::seal) draws a fresh one from the OS
//! for each record. Ciphertexts carry the 16-byte tag at the end.

use aes_gcm::aead::{Aead, KeyInit};
use aes_gcm::{Aes256Gcm, Nonce};

use zeroize::Zeroize;

use crate::aliases::{Nonce12, PlaintextString};
use crate::crypto::secure_buffer::SecureBuffer;
use crate::error::BridgeError;

/// Encrypt `plaintext` under `key` and `nonce`, returning ciphertext || tag.
///
/// Reusing a nonce with the same key breaks confidentiality and authenticity;
/// the caller owns uniqueness.
#[inline]
pub fn encrypt(
    key: &SecureBuffer<32>,
    nonce: &Nonce12,
    plaintext: &[u8],
) -> Result<Vec<u8>, BridgeError> {
    let cipher = Aes256Gcm::new(key.expose_secret().into());
    cipher
        .encrypt(Nonce::from_slice(nonce), plaintext)
        .map_err(|_| BridgeError::Crypto("AES-256-GCM encryption failed".into()))
}

/// Verify and decrypt `ciphertext` (ciphertext || tag).
///
/// Any tag mismatch (wrong key, wrong nonce, a flipped bit, a truncated buffer)
/// returns [`BridgeError::Authentication`] and no plaintext at all.
#[inline]
pub fn decrypt(
    key: &SecureBuffer<32>,
    nonce: &Nonce12,
    ciphertext: &[u8],
) -> Result<Vec<u8>, BridgeError> {
    let cipher = Aes256Gcm::new(key.expose_secret().into());
    cipher
        .decrypt(Nonce::from_slice(nonce), ciphertext)
        .map_err(|_| BridgeError::Authentication)
}

/// [`decrypt`] and hand the plaintext back as a secret string.
///
/// Bytes that verify but are not UTF-8 are wiped before the
/// [`BridgeError::Encoding`] is returned.
pub fn decrypt_to_string(
    key: &SecureBuffer<32>,
    nonce: &Nonce12,
    ciphertext: &[u8],
) -> Result<PlaintextString, BridgeError> {
    let plaintext = decrypt(key, nonce, ciphertext)?;
    match String::from_utf8(plaintext) {
        Ok(mut text) => {
            // Exact-capacity copy, so boxing it cannot leave a stray reallocation.
            let secret = PlaintextString::from(String::from(text.as_str()));
            text.zeroize();
            Ok(secret)
        }
        Err(err) => {
            let mut bytes = err.into_bytes();
            bytes.zeroize();
            Err(BridgeError::Encoding("plaintext is not valid UTF-8".into()))
        }
    }
}
