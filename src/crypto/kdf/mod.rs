//! # Key Derivation
//!
//! Memory-hard stretching of a low-entropy secret (master password or device
//! credential identifier) into a 256-bit key.
//!
//! ## Modules
//!
//! - [`argon2id`] - Argon2id (v0x13) derivation into a caller-provided [`SecureBuffer`](crate::SecureBuffer)
//!
//! ## Usage
//!
//! Most callers never touch this module: [`CryptoBridge::new`](crate::CryptoBridge::new)
//! derives the session key once at construction. It is public for hosts that need
//! a bare key (biometric wrapping, custom unlock flows).

pub mod argon2id;

pub use argon2id::{derive_key, derive_key_with_params, derive_secure_argon2id_key, KdfParams};
