//! tests/common.rs
//! Common constants and fixtures shared across test files

use vault_bridge::aliases::PasswordString;
use vault_bridge::{CryptoBridge, KdfParams};

/// Fast Argon2id cost for tests - performance testing is in benches/
/// (64 KiB, 1 pass, 1 lane; the derived keys differ from production keys)
#[allow(dead_code)] // Used across multiple test files
pub const TEST_PARAMS: KdfParams = KdfParams::new(64, 1, 1);

/// Master password from the end-to-end unlock scenario
#[allow(dead_code)] // Used across multiple test files
pub const TEST_PASSWORD: &str = "correct horse battery staple!";

#[allow(dead_code)] // Used across multiple test files
pub const TEST_SALT: [u8; 32] = [0x42; 32];

#[allow(dead_code)] // Used across multiple test files
pub const EMPTY_VAULT_JSON: &str = r#"{"entries":[]}"#;

/// Session derived from `password` and `salt` with [`TEST_PARAMS`]
#[allow(dead_code)] // Used across multiple test files
pub fn test_bridge(password: &str, salt: &[u8]) -> CryptoBridge {
    let password = PasswordString::from(password.to_string());
    CryptoBridge::with_params(&password, salt, &TEST_PARAMS).unwrap()
}
