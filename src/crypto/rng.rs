// src/crypto/rng.rs
//! OS-backed randomness for public-but-unique values (nonces, salts)
//!
//! Every draw goes straight to `OsRng`; failures surface as
//! [`BridgeError::Entropy`] instead of silently yielding a zero buffer.

use rand::{rngs::OsRng, TryRngCore};

use crate::aliases::{Nonce12, Salt32};
use crate::error::BridgeError;

/// Extension trait – gives `.random()` to fixed-size byte arrays
pub trait SecureRandomExt: Sized {
    /// Fill a fresh instance from the operating system CSPRNG
    fn random() -> Result<Self, BridgeError>;
}

impl<const N: usize> SecureRandomExt for [u8; N] {
    #[inline(always)]
    fn random() -> Result<Self, BridgeError> {
        let mut bytes = [0u8; N];
        fill_random(&mut bytes)?;
        Ok(bytes)
    }
}

/// Fill `dest` from the operating system CSPRNG.
#[inline(always)]
pub fn fill_random(dest: &mut [u8]) -> Result<(), BridgeError> {
    OsRng
        .try_fill_bytes(dest)
        .map_err(|e| BridgeError::Entropy(format!("OS random source failed: {e}")))
}

/// Fresh AES-256-GCM nonce. Call once per encryption, never cache.
#[inline(always)]
pub fn random_nonce() -> Result<Nonce12, BridgeError> {
    Nonce12::random()
}

/// Fresh 32-byte KDF salt for a new vault slot.
#[inline(always)]
pub fn random_salt() -> Result<Salt32, BridgeError> {
    Salt32::random()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn nonces_do_not_repeat() {
        let nonces: HashSet<Nonce12> = (0..256).map(|_| random_nonce().unwrap()).collect();
        assert_eq!(nonces.len(), 256);
    }

    #[test]
    fn salts_are_not_zero() {
        let salt = random_salt().unwrap();
        assert!(salt.iter().any(|&b| b != 0));
    }
}
