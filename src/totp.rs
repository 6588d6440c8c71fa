//! # TOTP
//!
//! RFC 6238 codes with the parameters every mainstream authenticator uses:
//! HMAC-SHA1, 6 digits, 30-second step. Nothing is cached; each call recomputes
//! from the supplied (or current) Unix time.

use std::time::{SystemTime, UNIX_EPOCH};

use data_encoding::BASE32_NOPAD;
use hmac::Mac;
use tracing::debug;
use zeroize::Zeroizing;

use crate::aliases::HmacSha1;
use crate::consts::{TOTP_DIGITS, TOTP_STEP_SECS};
use crate::error::BridgeError;

/// Current 6-digit code for a Base32 `secret`.
pub fn get_totp_code(secret: &str) -> Result<String, BridgeError> {
    totp_code_at(secret, unix_now())
}

/// 6-digit code for `secret` at `unix_time` (seconds).
pub fn totp_code_at(secret: &str, unix_time: u64) -> Result<String, BridgeError> {
    let key = decode_secret(secret)?;
    hotp(&key, unix_time / TOTP_STEP_SECS)
}

/// Seconds until the code valid at `unix_time` rolls over (1..=30).
pub const fn seconds_remaining_at(unix_time: u64) -> u64 {
    TOTP_STEP_SECS - unix_time % TOTP_STEP_SECS
}

/// Seconds until the current code rolls over.
pub fn seconds_remaining() -> u64 {
    seconds_remaining_at(unix_now())
}

/// Decode a Base32 (RFC 4648) secret.
///
/// Accepts lower case, embedded whitespace and optional `=` padding. The decoded
/// key must be non-empty.
pub fn decode_secret(secret: &str) -> Result<Zeroizing<Vec<u8>>, BridgeError> {
    let normalized: Zeroizing<String> = Zeroizing::new(
        secret
            .chars()
            .filter(|ch| !ch.is_ascii_whitespace())
            .map(|ch| ch.to_ascii_uppercase())
            .collect(),
    );
    let unpadded = normalized.trim_end_matches('=');

    let key = BASE32_NOPAD.decode(unpadded.as_bytes()).map_err(|e| {
        debug!(position = e.position, "rejected TOTP secret");
        BridgeError::Totp("secret is not valid base32".into())
    })?;
    if key.is_empty() {
        return Err(BridgeError::Totp("secret is empty".into()));
    }
    Ok(Zeroizing::new(key))
}

/// RFC 4226 HOTP with dynamic truncation.
fn hotp(key: &[u8], counter: u64) -> Result<String, BridgeError> {
    let mut mac = <HmacSha1 as Mac>::new_from_slice(key)
        .map_err(|e| BridgeError::Totp(format!("HMAC-SHA1 key rejected: {e}")))?;
    mac.update(&counter.to_be_bytes());
    let digest = mac.finalize().into_bytes();

    let offset = (digest[digest.len() - 1] & 0x0f) as usize;
    let binary = u32::from_be_bytes([
        digest[offset] & 0x7f,
        digest[offset + 1],
        digest[offset + 2],
        digest[offset + 3],
    ]);

    Ok(format!(
        "{:0width$}",
        binary % 10u32.pow(TOTP_DIGITS),
        width = TOTP_DIGITS as usize
    ))
}

fn unix_now() -> u64 {
    // A clock before 1970 yields counter 0 rather than an error.
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}
