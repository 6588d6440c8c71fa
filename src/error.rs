//! # Error Types
//!
//! This module defines the error type used throughout the library.
//! All fallible operations return [`Result<T, BridgeError>`](BridgeError).
//!
//! Wrong password, wrong device credential and tampered data all surface as the
//! single [`BridgeError::Authentication`] variant so callers cannot tell them apart.

use thiserror::Error;

/// The error type for all bridge operations.
#[derive(Error, Debug)]
pub enum BridgeError {
    /// Key derivation could not run.
    ///
    /// Raised for:
    /// - salts shorter than [`MIN_SALT_LEN`](crate::consts::MIN_SALT_LEN)
    /// - empty device credentials
    /// - Argon2 cost parameters the runtime cannot satisfy
    #[error("Derivation error: {0}")]
    Derivation(String),

    /// AEAD tag verification failed.
    ///
    /// Carries no detail on purpose.
    #[error("Authentication failed")]
    Authentication,

    /// TOTP secret is not valid Base32 or decodes to nothing.
    #[error("TOTP error: {0}")]
    Totp(String),

    /// Malformed JSON, invalid option values or non-UTF-8 plaintext.
    #[error("Encoding error: {0}")]
    Encoding(String),

    /// Cipher failure unrelated to authentication (e.g. plaintext over the AES-GCM limit).
    #[error("Crypto error: {0}")]
    Crypto(String),

    /// The operating system random source failed.
    #[error("Entropy error: {0}")]
    Entropy(String),
}

impl From<serde_json::Error> for BridgeError {
    fn from(err: serde_json::Error) -> Self {
        BridgeError::Encoding(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn authentication_message_is_generic() {
        assert_eq!(BridgeError::Authentication.to_string(), "Authentication failed");
    }

    #[test]
    fn json_errors_map_to_encoding() {
        let err: BridgeError = serde_json::from_str::<Vec<String>>("{").unwrap_err().into();
        assert!(matches!(err, BridgeError::Encoding(_)));
        assert!(err.to_string().starts_with("Encoding error: "));
    }
}
