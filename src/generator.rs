//! # Password Generation
//!
//! Three styles, all driven by a cryptographically secure RNG:
//!
//! - [`generate_password`] - random characters from the enabled classes, at least one of each
//! - [`generate_mac_password`] - `xxxxxx-xxxxxx-xxxxxx` with look-alike glyphs removed
//! - [`generate_passphrase`] - four words from a fixed list, joined by `-`
//!
//! Each has a `*_with` twin taking any [`CryptoRng`] so tests can seed it.

use rand::seq::{IndexedRandom, SliceRandom};
use rand::{CryptoRng, Rng};
use serde::{Deserialize, Serialize};

use crate::consts::{MAC_BLOCK_COUNT, MAC_BLOCK_LEN, MAX_PASSWORD_LENGTH, PASSPHRASE_WORDS};
use crate::error::BridgeError;

pub const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
pub const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const DIGITS: &[u8] = b"0123456789";
pub const SYMBOLS: &[u8] = b"!@#$%^&*()_+~`|}{[]:;?><,./-=";

/// Alphanumerics minus `0`, `O`, `I` and `l`.
pub const MAC_CHARSET: &[u8] = b"ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz123456789";

pub const WORDLIST: [&str; 50] = [
    "azure", "bright", "cloud", "dance", "eagle", "forest", "glory", "honey", "island", "jungle",
    "knight", "lemon", "mountain", "night", "ocean", "pearl", "quartz", "river", "silver", "tiger",
    "unique", "valley", "winter", "xenon", "yellow", "zebra", "alpha", "bravo", "cactus", "delta",
    "echo", "frost", "garden", "harvest", "icon", "jade", "karma", "lunar", "magic", "nebula",
    "orbit", "plasma", "quest", "rocket", "solar", "terra", "ultra", "vivid", "wave", "yield",
];

/// Options for [`generate_password`].
///
/// Lowercase letters are always in the pool. Deserialization is strict: every field
/// is required and unknown fields are rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PasswordOptions {
    pub length: usize,
    pub use_uppercase: bool,
    pub use_numbers: bool,
    pub use_symbols: bool,
}

impl PasswordOptions {
    /// Parse options from the host's JSON payload.
    pub fn from_json(json: &str) -> Result<Self, BridgeError> {
        let options: Self = serde_json::from_str(json)?;
        options.validate()?;
        Ok(options)
    }

    pub fn validate(&self) -> Result<(), BridgeError> {
        if self.length == 0 {
            return Err(BridgeError::Encoding("password length must be at least 1".into()));
        }
        if self.length > MAX_PASSWORD_LENGTH {
            return Err(BridgeError::Encoding(format!(
                "password length must not exceed {MAX_PASSWORD_LENGTH}"
            )));
        }
        Ok(())
    }

    /// Enabled classes in priority order: lowercase, uppercase, digits, symbols.
    fn classes(&self) -> Vec<&'static [u8]> {
        let mut classes = vec![LOWERCASE];
        if self.use_uppercase {
            classes.push(UPPERCASE);
        }
        if self.use_numbers {
            classes.push(DIGITS);
        }
        if self.use_symbols {
            classes.push(SYMBOLS);
        }
        classes
    }
}

/// Generate a password with the thread-local CSPRNG.
pub fn generate_password(options: &PasswordOptions) -> Result<String, BridgeError> {
    generate_password_with(&mut rand::rng(), options)
}

/// Generate a password from `rng`.
///
/// 1. Draw `length` characters uniformly from the union of enabled classes.
/// 2. For each enabled class the draw missed, overwrite a random position whose
///    class still has another representative.
/// 3. Shuffle, so the repaired positions carry no signal.
///
/// When `length` is below the number of enabled classes, one character is taken
/// from each class in priority order (lowercase, uppercase, digits, symbols) until
/// the length is used up.
pub fn generate_password_with<R: CryptoRng>(
    rng: &mut R,
    options: &PasswordOptions,
) -> Result<String, BridgeError> {
    options.validate()?;
    let classes = options.classes();

    let mut chars: Vec<u8> = if options.length < classes.len() {
        classes
            .iter()
            .take(options.length)
            .map(|class| pick(rng, class))
            .collect()
    } else {
        let pool: Vec<u8> = classes.concat();
        let mut chars: Vec<u8> = (0..options.length).map(|_| pick(rng, &pool)).collect();
        ensure_every_class(rng, &mut chars, &classes);
        chars
    };

    chars.shuffle(rng);
    // Every class is ASCII.
    String::from_utf8(chars).map_err(|e| BridgeError::Encoding(e.to_string()))
}

fn ensure_every_class<R: CryptoRng>(rng: &mut R, chars: &mut [u8], classes: &[&'static [u8]]) {
    let class_of = |c: u8| classes.iter().position(|class| class.contains(&c));

    let mut counts = vec![0usize; classes.len()];
    for &c in chars.iter() {
        if let Some(idx) = class_of(c) {
            counts[idx] += 1;
        }
    }

    for missing in 0..classes.len() {
        if counts[missing] > 0 {
            continue;
        }
        // length >= classes.len() and a class is missing, so some class has a spare.
        let candidates: Vec<usize> = (0..chars.len())
            .filter(|&i| class_of(chars[i]).is_some_and(|idx| counts[idx] > 1))
            .collect();
        let Some(&position) = candidates.choose(rng) else {
            break;
        };
        if let Some(old) = class_of(chars[position]) {
            counts[old] -= 1;
        }
        chars[position] = pick(rng, classes[missing]);
        counts[missing] += 1;
    }
}

/// `xxxxxx-xxxxxx-xxxxxx` from [`MAC_CHARSET`].
pub fn generate_mac_password() -> String {
    generate_mac_password_with(&mut rand::rng())
}

pub fn generate_mac_password_with<R: CryptoRng>(rng: &mut R) -> String {
    (0..MAC_BLOCK_COUNT)
        .map(|_| {
            (0..MAC_BLOCK_LEN)
                .map(|_| pick(rng, MAC_CHARSET) as char)
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("-")
}

/// Four words from [`WORDLIST`], drawn with replacement, joined by `-`.
pub fn generate_passphrase() -> String {
    generate_passphrase_with(&mut rand::rng())
}

pub fn generate_passphrase_with<R: CryptoRng>(rng: &mut R) -> String {
    (0..PASSPHRASE_WORDS)
        .map(|_| WORDLIST[rng.random_range(0..WORDLIST.len())])
        .collect::<Vec<_>>()
        .join("-")
}

#[inline]
fn pick<R: CryptoRng>(rng: &mut R, charset: &[u8]) -> u8 {
    charset[rng.random_range(0..charset.len())]
}
