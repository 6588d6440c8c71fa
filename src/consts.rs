//! # Constants
//!
//! Key, nonce and salt sizes, Argon2id defaults, TOTP parameters and limits
//! used throughout the library.

/// Derived master key length (256-bit).
pub const KEY_LEN: usize = 32;

/// AES-256-GCM nonce length.
pub const NONCE_LEN: usize = 12;

/// AES-256-GCM authentication tag length appended to every ciphertext.
pub const TAG_LEN: usize = 16;

/// Minimum accepted salt length for key derivation.
pub const MIN_SALT_LEN: usize = 16;

/// Salt length produced by [`random_salt`](crate::crypto::rng::random_salt).
///
/// Each vault slot (primary and decoy) stores its own salt of this size.
pub const DEFAULT_SALT_LEN: usize = 32;

/// Default Argon2id memory cost in KiB.
///
/// Matches the `argon2` crate defaults so existing vaults keep unlocking.
pub const DEFAULT_ARGON2_MEMORY_KIB: u32 = 19_456;

/// Default Argon2id pass count.
pub const DEFAULT_ARGON2_ITERATIONS: u32 = 2;

/// Default Argon2id lane count.
pub const DEFAULT_ARGON2_PARALLELISM: u32 = 1;

/// Fixed application salt for biometric wrapping keys (legacy layout, 16 bytes).
pub const BIO_KEY_SALT: &[u8; 16] = b"WebVault_BioSalt";

/// Identifier of the only algorithm pair the bridge speaks.
pub const ALGORITHM_ID: &str = "argon2id+aes-256-gcm";

/// Maximum number of previous secrets kept per entry.
pub const HISTORY_LIMIT: usize = 5;

/// TOTP time step in seconds.
pub const TOTP_STEP_SECS: u64 = 30;

/// TOTP code length.
pub const TOTP_DIGITS: u32 = 6;

/// Upper bound for generated password length.
pub const MAX_PASSWORD_LENGTH: usize = 4096;

/// Characters per block in a grouped (Mac-style) password.
pub const MAC_BLOCK_LEN: usize = 6;

/// Blocks in a grouped (Mac-style) password.
pub const MAC_BLOCK_COUNT: usize = 3;

/// Words in a generated passphrase.
pub const PASSPHRASE_WORDS: usize = 4;
