// src/crypto/mod.rs

//! Low-level crypto primitives: secure buffers, key derivation, AEAD and randomness.
//!
//! Everything here is pure and synchronous; no I/O. See the crate root for re-exports.

pub mod aead;
pub mod kdf;
pub mod rng;
pub mod secure_buffer;
