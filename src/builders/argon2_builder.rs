//! src/builders/argon2_builder.rs
//! Argon2id builder: random salt and default cost out of the box

use crate::aliases::{MasterKey32, Salt32};
use crate::crypto::kdf::{derive_secure_argon2id_key, KdfParams};
use crate::crypto::rng::random_salt;
use crate::error::BridgeError;

/// Argon2id key derivation builder
///
/// Strong defaults: 32-byte random salt + [`KdfParams::default`].
///
/// Typical use is creating a brand-new vault slot: build, derive, then persist
/// [`salt`](Self::salt) next to the ciphertext. Re-opening an existing slot passes the
/// stored salt through [`with_salt`](Self::with_salt).
///
/// # Thread Safety
///
/// This type is `Send + Sync`. All operations are pure.
#[derive(Debug, Clone)]
pub struct Argon2Builder {
    params: KdfParams,
    salt: Vec<u8>,
}

impl Argon2Builder {
    /// Create builder with a fresh random salt and default cost
    pub fn new() -> Result<Self, BridgeError> {
        let salt: Salt32 = random_salt()?;
        Ok(Self {
            params: KdfParams::default(),
            salt: salt.to_vec(),
        })
    }

    /// Set memory cost in KiB
    #[must_use]
    pub fn with_memory_kib(mut self, memory_kib: u32) -> Self {
        self.params.memory_kib = memory_kib;
        self
    }

    /// Set pass count
    #[must_use]
    pub fn with_iterations(mut self, iterations: u32) -> Self {
        self.params.iterations = iterations;
        self
    }

    /// Set lane count
    #[must_use]
    pub fn with_parallelism(mut self, parallelism: u32) -> Self {
        self.params.parallelism = parallelism;
        self
    }

    /// Replace every cost parameter at once
    #[must_use]
    pub fn with_params(mut self, params: KdfParams) -> Self {
        self.params = params;
        self
    }

    /// Use a stored salt (length is checked at derive time)
    #[must_use]
    pub fn with_salt(mut self, salt: impl Into<Vec<u8>>) -> Self {
        self.salt = salt.into();
        self
    }

    /// Current salt (for persisting alongside the vault)
    #[must_use]
    pub fn salt(&self) -> &[u8] {
        &self.salt
    }

    /// Current cost parameters
    #[must_use]
    pub const fn params(&self) -> &KdfParams {
        &self.params
    }

    /// Derive key directly into caller-provided secure buffer (**preferred**)
    pub fn derive_secure(&self, secret: &[u8], out_key: &mut MasterKey32) -> Result<(), BridgeError> {
        derive_secure_argon2id_key(secret, &self.salt, &self.params, out_key)
    }

    /// Convenience: derive and return a fresh secure key
    pub fn derive_secure_new(&self, secret: &[u8]) -> Result<MasterKey32, BridgeError> {
        let mut key = MasterKey32::zeroed();
        self.derive_secure(secret, &mut key)?;
        Ok(key)
    }
}
