//! src/crypto/kdf/argon2id.rs
//! Argon2id key derivation: out-param, zero-exposure

use std::time::Instant;

use argon2::{Algorithm, Argon2, Params, Version};
use tracing::debug;

use crate::aliases::MasterKey32;
use crate::consts::{
    DEFAULT_ARGON2_ITERATIONS, DEFAULT_ARGON2_MEMORY_KIB, DEFAULT_ARGON2_PARALLELISM, KEY_LEN,
    MIN_SALT_LEN,
};
use crate::error::BridgeError;

/// Argon2id cost parameters.
///
/// [`Default`] reproduces the `argon2` crate defaults (19 456 KiB, 2 passes, 1 lane),
/// which is what every existing vault was sealed with. Raising the cost changes
/// the derived key, so a vault must be re-encrypted when its parameters move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KdfParams {
    /// Memory cost in KiB.
    pub memory_kib: u32,
    /// Number of passes over memory.
    pub iterations: u32,
    /// Number of lanes.
    pub parallelism: u32,
}

impl KdfParams {
    pub const fn new(memory_kib: u32, iterations: u32, parallelism: u32) -> Self {
        Self {
            memory_kib,
            iterations,
            parallelism,
        }
    }

    /// Build the Argon2id engine, rejecting parameters the algorithm cannot run with.
    pub(crate) fn argon2(&self) -> Result<Argon2<'static>, BridgeError> {
        let params = Params::new(
            self.memory_kib,
            self.iterations,
            self.parallelism,
            Some(KEY_LEN),
        )
        .map_err(|e| BridgeError::Derivation(format!("invalid Argon2 parameters: {e}")))?;

        Ok(Argon2::new(Algorithm::Argon2id, Version::V0x13, params))
    }
}

impl Default for KdfParams {
    fn default() -> Self {
        Self::new(
            DEFAULT_ARGON2_MEMORY_KIB,
            DEFAULT_ARGON2_ITERATIONS,
            DEFAULT_ARGON2_PARALLELISM,
        )
    }
}

/// Derive an Argon2id key directly into `out_key`
///
/// - Deterministic: identical `(secret, salt, params)` always yields the same key
/// - Salt must be at least [`MIN_SALT_LEN`] bytes
/// - No weaker fallback: any Argon2 failure is returned as [`BridgeError::Derivation`]
///
/// On error `out_key` may hold partial output; it is still a [`MasterKey32`] and is
/// wiped when the caller drops it.
#[inline]
pub fn derive_secure_argon2id_key(
    secret: &[u8],
    salt: &[u8],
    params: &KdfParams,
    out_key: &mut MasterKey32,
) -> Result<(), BridgeError> {
    if salt.len() < MIN_SALT_LEN {
        return Err(BridgeError::Derivation(format!(
            "salt must be at least {MIN_SALT_LEN} bytes, got {}",
            salt.len()
        )));
    }

    let argon2 = params.argon2()?;
    let started = Instant::now();

    argon2
        .hash_password_into(secret, salt, out_key.expose_secret_mut())
        .map_err(|e| BridgeError::Derivation(format!("Argon2id failed: {e}")))?;

    debug!(
        memory_kib = params.memory_kib,
        iterations = params.iterations,
        parallelism = params.parallelism,
        elapsed_ms = started.elapsed().as_millis() as u64,
        "derived Argon2id key"
    );
    Ok(())
}

/// Convenience: derive a fresh key with the default cost parameters
pub fn derive_key(secret: &[u8], salt: &[u8]) -> Result<MasterKey32, BridgeError> {
    derive_key_with_params(secret, salt, &KdfParams::default())
}

/// Convenience: derive a fresh key with explicit cost parameters
pub fn derive_key_with_params(
    secret: &[u8],
    salt: &[u8],
    params: &KdfParams,
) -> Result<MasterKey32, BridgeError> {
    let mut key = MasterKey32::zeroed();
    derive_secure_argon2id_key(secret, salt, params, &mut key)?;
    Ok(key)
}
