//! Error types for the keyed-vigenere library.

use std::fmt;

/// Errors produced by the keyed-vigenere library.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VigenereError {
    /// Keyword is empty or contains non-letter characters.
    InvalidKeyword,
    /// Alphabet does not consist of 26 distinct uppercase letters.
    InvalidAlphabet,
    /// Key is empty but a nonzero keystream length was requested.
    InvalidKey,
    /// A character classified as a letter is absent from the lookup alphabet.
    CharacterNotFound,
    /// Keystream expansion did not reach the plaintext length.
    KeyStreamTooShort,
    /// Encryption was requested before any substitution table was built.
    TableNotBuilt,
}

impl fmt::Display for VigenereError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VigenereError::InvalidKeyword => {
                write!(f, "Keyword must be a non-empty string of letters")
            }
            VigenereError::InvalidAlphabet => {
                write!(f, "Alphabet must contain 26 distinct uppercase letters")
            }
            VigenereError::InvalidKey => {
                write!(f, "Key must not be empty when a keystream is required")
            }
            VigenereError::CharacterNotFound => {
                write!(f, "Character not found in the lookup alphabet")
            }
            VigenereError::KeyStreamTooShort => {
                write!(f, "Keystream is shorter than the plaintext")
            }
            VigenereError::TableNotBuilt => {
                write!(f, "No substitution table has been built yet")
            }
        }
    }
}

impl std::error::Error for VigenereError {}
