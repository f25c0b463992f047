//! Keystream expansion: length-matching a short key to a plaintext.
//!
//! Replicates the Java key-alignment step: the key is extended one
//! character at a time by re-reading the *original* key from its start,
//! cycle by cycle, until the target length is reached. The growing result
//! is never consulted, and a key that already covers the target is
//! returned unchanged (excess is tolerated, not trimmed).

use crate::error::VigenereError;

/// Expands a key to at least `target_len` characters.
///
/// The first `target_len` characters of the result form the keystream.
/// Expansion draws solely from the original key, indexing it modulo its
/// own length, so the result is the key repeated in whole or partial
/// cycles from its first character.
///
/// # Parameters
/// - `key`: The key material to repeat.
/// - `target_len`: The plaintext's total character count, non-letter
///   characters included.
///
/// # Errors
/// Returns [`VigenereError::InvalidKey`] if `key` is empty and
/// `target_len > 0` (no character exists to replicate).
///
/// # Examples
///
/// ```
/// use keyed_vigenere::keystream;
///
/// assert_eq!(keystream::expand("SATOR", 13).unwrap(), "SATORSATORSAT");
/// assert_eq!(keystream::expand("SATOR", 3).unwrap(), "SATOR");
/// ```
pub fn expand(key: &str, target_len: usize) -> Result<String, VigenereError> {
    let original: Vec<char> = key.chars().collect();
    if original.len() >= target_len {
        return Ok(key.to_string());
    }
    if original.is_empty() {
        return Err(VigenereError::InvalidKey);
    }

    let mut stream = String::with_capacity(target_len);
    stream.push_str(key);
    for i in 0..(target_len - original.len()) {
        stream.push(original[i % original.len()]);
    }
    Ok(stream)
}
