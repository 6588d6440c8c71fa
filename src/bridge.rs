//! src/bridge.rs
//! One unlock session: the derived key plus every operation that needs it
//!
//! Create a [`CryptoBridge`] when the vault unlocks, route every read and write of
//! vault JSON through [`seal`](CryptoBridge::seal)/[`open`](CryptoBridge::open)
//! (or the nonce-explicit [`encrypt`](CryptoBridge::encrypt)/[`decrypt`](CryptoBridge::decrypt)),
//! and drop it on lock. Dropping wipes the key.
//!
//! # Thread Safety
//!
//! The key is read-only after construction, so `&CryptoBridge` can be shared
//! across threads; every method takes `&self`.

use core::fmt;

use secrecy::ExposeSecret;
use tracing::{debug, trace, warn};
use zeroize::Zeroize;

use crate::aliases::{MasterKey32, Nonce12, PasswordString, PlaintextString, WrappingKey32};
use crate::biometric;
use crate::consts::ALGORITHM_ID;
use crate::crypto::aead;
use crate::crypto::kdf::{derive_secure_argon2id_key, KdfParams};
use crate::crypto::rng::random_nonce;
use crate::error::BridgeError;
use crate::generator::{self, PasswordOptions};
use crate::history;
use crate::record::EncryptedRecord;
use crate::totp;

/// Unlocked vault session holding the Argon2id-derived AES-256-GCM key.
///
/// The key is derived once, in the constructor, and no method returns it.
pub struct CryptoBridge {
    key: MasterKey32,
}

impl CryptoBridge {
    /// Derive the session key from the master password and the vault's salt.
    ///
    /// Runs Argon2id with [`KdfParams::default`]; expect tens to hundreds of
    /// milliseconds. Keep it off any UI thread.
    pub fn new(password: &PasswordString, salt: &[u8]) -> Result<Self, BridgeError> {
        Self::with_params(password, salt, &KdfParams::default())
    }

    /// [`new`](Self::new) with explicit Argon2id cost.
    pub fn with_params(
        password: &PasswordString,
        salt: &[u8],
        params: &KdfParams,
    ) -> Result<Self, BridgeError> {
        // Wiped on drop, including when derivation fails below.
        let mut key = MasterKey32::zeroed();
        derive_secure_argon2id_key(password.expose_secret().as_bytes(), salt, params, &mut key)?;
        debug!("vault session opened");
        Ok(Self { key })
    }

    /// Open a session from a key derived elsewhere (e.g. a biometric wrapping flow).
    pub fn from_key(key: MasterKey32) -> Self {
        debug!("vault session opened from supplied key");
        Self { key }
    }

    /// Fixed algorithm identifier: `argon2id+aes-256-gcm`.
    pub const fn algorithm(&self) -> &'static str {
        ALGORITHM_ID
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Vault encryption
    // ─────────────────────────────────────────────────────────────────────────

    /// Encrypt `plaintext` with a caller-supplied nonce.
    ///
    /// The nonce must never repeat under this session's key. Prefer [`seal`](Self::seal),
    /// which draws a fresh one per call.
    pub fn encrypt(&self, plaintext: &str, nonce: &Nonce12) -> Result<Vec<u8>, BridgeError> {
        aead::encrypt(&self.key, nonce, plaintext.as_bytes())
    }

    /// Verify and decrypt. Wrong password, wrong nonce and tampering are all
    /// [`BridgeError::Authentication`].
    pub fn decrypt(&self, ciphertext: &[u8], nonce: &Nonce12) -> Result<PlaintextString, BridgeError> {
        aead::decrypt_to_string(&self.key, nonce, ciphertext).inspect_err(|err| {
            if matches!(err, BridgeError::Authentication) {
                warn!(len = ciphertext.len(), "ciphertext failed authentication");
            }
        })
    }

    /// Encrypt under a fresh random nonce and return the storage record.
    pub fn seal(&self, plaintext: &str) -> Result<EncryptedRecord, BridgeError> {
        let iv = random_nonce()?;
        let data = self.encrypt(plaintext, &iv)?;
        Ok(EncryptedRecord::new(iv, data))
    }

    /// Inverse of [`seal`](Self::seal).
    pub fn open(&self, record: &EncryptedRecord) -> Result<PlaintextString, BridgeError> {
        self.decrypt(&record.data, &record.iv)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Stateless helpers exposed on the session for the host
    // ─────────────────────────────────────────────────────────────────────────

    pub fn generate_password(&self, options: &PasswordOptions) -> Result<String, BridgeError> {
        generator::generate_password(options)
    }

    /// Strictly parse the host's JSON option bag, then generate.
    pub fn generate_password_json(&self, options_json: &str) -> Result<String, BridgeError> {
        let options = PasswordOptions::from_json(options_json)?;
        generator::generate_password(&options)
    }

    pub fn generate_mac_password(&self) -> String {
        generator::generate_mac_password()
    }

    pub fn generate_passphrase(&self) -> String {
        generator::generate_passphrase()
    }

    pub fn get_totp_code(&self, secret: &str) -> Result<String, BridgeError> {
        totp::get_totp_code(secret)
    }

    /// Push `current_secret` onto a JSON history list (most recent first, at most 5).
    pub fn rotate_history(&self, current_secret: &str, history_json: &str) -> Result<String, BridgeError> {
        history::push_json(current_secret, history_json)
    }

    /// Full rotation from `old_secret` to `new_secret`; a no-op when they match.
    pub fn rotate_history_for(
        &self,
        old_secret: &str,
        new_secret: &str,
        history_json: &str,
    ) -> Result<String, BridgeError> {
        history::rotate_json(old_secret, new_secret, history_json)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Biometric wrapping (independent of the session key)
    // ─────────────────────────────────────────────────────────────────────────

    pub fn derive_bio_key(&self, credential_id: &[u8]) -> Result<WrappingKey32, BridgeError> {
        biometric::derive_bio_key(credential_id)
    }

    pub fn wrap_secret(
        &self,
        secret: &str,
        wrapping_key: &WrappingKey32,
        nonce: &Nonce12,
    ) -> Result<Vec<u8>, BridgeError> {
        biometric::wrap_secret(secret, wrapping_key, nonce)
    }

    pub fn unwrap_secret(
        &self,
        ciphertext: &[u8],
        wrapping_key: &WrappingKey32,
        nonce: &Nonce12,
    ) -> Result<PlaintextString, BridgeError> {
        biometric::unwrap_secret(ciphertext, wrapping_key, nonce)
    }
}

impl CryptoBridge {
    fn wipe(&mut self) {
        self.key.zeroize();
        trace!("vault session key wiped");
    }
}

impl Drop for CryptoBridge {
    fn drop(&mut self) {
        self.wipe();
    }
}

impl fmt::Debug for CryptoBridge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CryptoBridge")
            .field("algorithm", &ALGORITHM_ID)
            .field("key", &"[REDACTED]")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::secure_buffer::wipe_log;

    fn session(byte: u8) -> CryptoBridge {
        CryptoBridge::from_key(MasterKey32::new([byte; 32]))
    }

    #[test]
    fn wipe_zeroes_the_session_key() {
        let mut bridge = session(0xAB);
        let record = bridge.seal("before lock").unwrap();
        assert!(!bridge.key.is_wiped());

        bridge.wipe();
        assert!(bridge.key.is_wiped());
        assert!(matches!(bridge.open(&record), Err(BridgeError::Authentication)));
    }

    #[test]
    fn dropping_the_session_wipes_its_key() {
        let bridge = session(0xAB);
        let before = wipe_log::clean_wipes();
        drop(bridge);
        assert!(wipe_log::clean_wipes() > before);
    }

    #[test]
    fn failed_construction_returns_no_session() {
        let password = PasswordString::from("pw".to_string());
        let result = CryptoBridge::with_params(&password, &[0u8; 8], &KdfParams::new(64, 1, 1));
        assert!(matches!(result, Err(BridgeError::Derivation(_))));
    }

    #[test]
    fn debug_output_hides_key() {
        let printed = format!("{:?}", session(0x11));
        assert!(printed.contains("REDACTED"));
        assert!(printed.contains("argon2id+aes-256-gcm"));
        assert!(!printed.contains("17"));
    }

    #[test]
    fn algorithm_identifier_is_fixed() {
        assert_eq!(session(0).algorithm(), "argon2id+aes-256-gcm");
    }

    #[test]
    fn seal_open_roundtrip() {
        let bridge = session(3);
        let record = bridge.seal(r#"{"entries":[]}"#).unwrap();
        assert_eq!(bridge.open(&record).unwrap().expose_secret(), r#"{"entries":[]}"#);
    }

    #[test]
    fn sessions_with_different_keys_do_not_interoperate() {
        let record = session(1).seal("x").unwrap();
        assert!(matches!(session(2).open(&record), Err(BridgeError::Authentication)));
    }
}
