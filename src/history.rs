//! # Secret History
//!
//! Bounded, most-recent-first list of the secrets an entry used before.
//! Pure functions over `Vec<String>`, plus a JSON boundary for hosts that keep
//! the list as an opaque string.

use crate::consts::HISTORY_LIMIT;
use crate::error::BridgeError;

/// Record that `superseded` is no longer the active secret.
///
/// Prepends it unless it already heads the list (so applying the same change
/// twice is harmless), then keeps the newest [`HISTORY_LIMIT`] entries.
pub fn push(superseded: &str, mut history: Vec<String>) -> Vec<String> {
    if history.first().map(String::as_str) != Some(superseded) {
        history.insert(0, superseded.to_owned());
    }
    history.truncate(HISTORY_LIMIT);
    history
}

/// Move from `old_secret` to `new_secret`.
///
/// Unchanged secret: `history` comes back untouched. Otherwise any copy of
/// `new_secret` is dropped (the active secret never sits in its own history) and
/// `old_secret` is pushed, so the bound is applied last.
pub fn rotate(old_secret: &str, new_secret: &str, mut history: Vec<String>) -> Vec<String> {
    if old_secret == new_secret {
        return history;
    }
    history.retain(|previous| previous != new_secret);
    push(old_secret, history)
}

/// [`push`] across the JSON boundary.
pub fn push_json(superseded: &str, history_json: &str) -> Result<String, BridgeError> {
    let history = parse(history_json)?;
    Ok(serde_json::to_string(&push(superseded, history))?)
}

/// [`rotate`] across the JSON boundary.
pub fn rotate_json(old_secret: &str, new_secret: &str, history_json: &str) -> Result<String, BridgeError> {
    let history = parse(history_json)?;
    Ok(serde_json::to_string(&rotate(old_secret, new_secret, history))?)
}

fn parse(history_json: &str) -> Result<Vec<String>, BridgeError> {
    serde_json::from_str(history_json)
        .map_err(|e| BridgeError::Encoding(format!("history is not a JSON string array: {e}")))
}
