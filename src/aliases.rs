//! # Secret Type Aliases
//!
//! Canonical names for every secret and public buffer the bridge handles.
//!
//! ## Fixed-size secrets
//! - [`MasterKey32`] - Argon2id-derived session key held by [`CryptoBridge`](crate::CryptoBridge)
//! - [`WrappingKey32`] - biometric wrapping key from [`derive_bio_key`](crate::derive_bio_key)
//!
//! ## Dynamic secrets
//! - [`PasswordString`] - master password or other secret supplied by the host
//! - [`PlaintextString`] - decrypted plaintext handed back to the host
//!
//! ## Public values
//! - [`Nonce12`] - AES-256-GCM nonce (not secret, must be unique per key)
//! - [`Salt32`] - per-vault KDF salt (not secret)
//!
//! All secret types require explicit `.expose_secret()` to reach the underlying data
//! (for the string secrets, through the re-exported [`ExposeSecret`](crate::ExposeSecret)).

use hmac::Hmac;
use secrecy::SecretString;
use sha1::Sha1;

use crate::consts::{DEFAULT_SALT_LEN, KEY_LEN, NONCE_LEN};
use crate::crypto::secure_buffer::SecureBuffer;

// ─────────────────────────────────────────────────────────────────────────────
// MAC primitive for TOTP
// ─────────────────────────────────────────────────────────────────────────────
pub type HmacSha1 = Hmac<Sha1>;

// ─────────────────────────────────────────────────────────────────────────────
// Fixed-size secrets, zeroized on drop
// ─────────────────────────────────────────────────────────────────────────────
pub type MasterKey32 = SecureBuffer<KEY_LEN>;
pub type WrappingKey32 = SecureBuffer<KEY_LEN>;

// ─────────────────────────────────────────────────────────────────────────────
// Dynamic secrets
// ─────────────────────────────────────────────────────────────────────────────
pub type PasswordString = SecretString;
pub type PlaintextString = SecretString;

// ─────────────────────────────────────────────────────────────────────────────
// Public values
// ─────────────────────────────────────────────────────────────────────────────
pub type Nonce12 = [u8; NONCE_LEN];
pub type Salt32 = [u8; DEFAULT_SALT_LEN];
