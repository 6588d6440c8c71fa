// src/lib.rs

//! # vault-bridge
//!
//! The only component of a local, zero-knowledge password vault that touches raw
//! secret material: Argon2id key derivation, AES-256-GCM sealing, zeroizing key
//! buffers, TOTP codes, password generation and password-history rotation.
//!
//! Pure, synchronous, no I/O. The host application owns storage, UI and any
//! policy built on top (for instance trying a decoy vault after an
//! [`BridgeError::Authentication`]).
//!
//! ```no_run
//! use vault_bridge::aliases::PasswordString;
//! use vault_bridge::{random_salt, CryptoBridge, EncryptedRecord, ExposeSecret};
//!
//! let salt = random_salt()?;
//! let password = PasswordString::from("correct horse battery staple!".to_string());
//!
//! let bridge = CryptoBridge::new(&password, &salt)?;
//! let stored = bridge.seal(r#"{"entries":[]}"#)?.to_json()?;
//! drop(bridge); // key wiped
//!
//! let bridge = CryptoBridge::new(&password, &salt)?;
//! let vault = bridge.open(&EncryptedRecord::from_json(&stored)?)?;
//! assert_eq!(vault.expose_secret(), r#"{"entries":[]}"#);
//! # Ok::<(), vault_bridge::BridgeError>(())
//! ```

pub mod aliases;
pub mod biometric;
pub mod bridge;
pub mod builders;
pub mod consts;
pub mod crypto;
pub mod error;
pub mod generator;
pub mod history;
pub mod record;
pub mod totp;

// High-level API: this is what most hosts import
pub use bridge::CryptoBridge;
pub use error::BridgeError;
pub use record::EncryptedRecord;
pub use secrecy::ExposeSecret;

pub use biometric::{derive_bio_key, derive_bio_key_with_salt, unwrap_secret, wrap_secret};
pub use builders::argon2_builder::Argon2Builder;
pub use crypto::kdf::{derive_key, derive_secure_argon2id_key, KdfParams};
pub use crypto::rng::{random_nonce, random_salt};
pub use crypto::secure_buffer::SecureBuffer;
pub use generator::{generate_mac_password, generate_passphrase, generate_password, PasswordOptions};
pub use totp::{get_totp_code, totp_code_at};
