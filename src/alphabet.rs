//! Alphabet: keyword-permuted 26-letter lookup sequence.
//!
//! The permuted alphabet is the universal lookup sequence of the cipher:
//! both plaintext letters and keystream letters resolve to indices within
//! it, and the substitution table is built from its rotations.
//!
//! Replicates the Java `prependKeywordToBaseAlphabet()`: the keyword is
//! scanned from its last character to its first, each character being pulled
//! out of the working sequence (if present) and reinserted at the front.
//! The reverse scan means the keyword's distinct letters end up front-loaded
//! in first-occurrence order.

use crate::error::VigenereError;

/// Number of symbols in the alphabet.
pub const ALPHABET_LEN: usize = 26;

/// The canonical A–Z sequence the permutation starts from.
const CANONICAL: [u8; ALPHABET_LEN] = *b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// A 26-letter permuted alphabet.
///
/// Invariants: exactly 26 entries, no duplicates, closed over `{A..Z}`.
/// Immutable once built. Both checked constructors uphold the invariants;
/// a malformed sequence is rejected rather than stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Alphabet {
    letters: [u8; ALPHABET_LEN],
}

impl Alphabet {
    /// Builds a permuted alphabet from a keyword.
    ///
    /// Starting from the canonical A–Z sequence, the keyword is processed
    /// from its last character to its first: each character is removed from
    /// the working sequence (a no-op if already removed) and inserted at the
    /// front. The result front-loads the distinct keyword letters in
    /// first-occurrence order, followed by the untouched canonical letters
    /// in their original relative order.
    ///
    /// Keyword letters are normalized to uppercase before permutation.
    /// Repeated keyword letters collapse to a single slot.
    ///
    /// # Parameters
    /// - `keyword`: Non-empty string of (ASCII) letters; duplicates allowed.
    ///
    /// # Errors
    /// Returns [`VigenereError::InvalidKeyword`] if the keyword is empty or
    /// contains any non-letter character.
    ///
    /// # Examples
    ///
    /// ```
    /// use keyed_vigenere::Alphabet;
    ///
    /// let alphabet = Alphabet::from_keyword("GLYPH").unwrap();
    /// assert_eq!(alphabet.to_string(), "GLYPHABCDEFIJKMNOQRSTUVWXZ");
    /// ```
    ///
    /// ```
    /// use keyed_vigenere::Alphabet;
    ///
    /// assert!(Alphabet::from_keyword("NOT A WORD").is_err());
    /// ```
    pub fn from_keyword(keyword: &str) -> Result<Self, VigenereError> {
        if keyword.is_empty() || !keyword.bytes().all(|b| b.is_ascii_alphabetic()) {
            return Err(VigenereError::InvalidKeyword);
        }

        let mut working: Vec<u8> = CANONICAL.to_vec();
        for ch in keyword.bytes().rev() {
            let ch = ch.to_ascii_uppercase();
            if let Some(pos) = working.iter().position(|&c| c == ch) {
                working.remove(pos);
            }
            working.insert(0, ch);
        }

        let mut letters = [0u8; ALPHABET_LEN];
        letters.copy_from_slice(&working);
        Ok(Alphabet { letters })
    }

    /// Builds an alphabet directly from 26 raw symbols.
    ///
    /// # Parameters
    /// - `letters`: The 26 symbols in permutation order.
    ///
    /// # Errors
    /// Returns [`VigenereError::InvalidAlphabet`] if any symbol is not an
    /// uppercase ASCII letter or any letter appears more than once.
    pub fn from_letters(letters: [u8; ALPHABET_LEN]) -> Result<Self, VigenereError> {
        let mut seen = [false; ALPHABET_LEN];
        for &b in letters.iter() {
            if !b.is_ascii_uppercase() {
                return Err(VigenereError::InvalidAlphabet);
            }
            let slot = (b - b'A') as usize;
            if seen[slot] {
                return Err(VigenereError::InvalidAlphabet);
            }
            seen[slot] = true;
        }
        Ok(Alphabet { letters })
    }

    /// Returns the position of a character within the alphabet, or `None`
    /// if the character does not appear.
    ///
    /// Lookup is exact: lowercase letters are not matched against the
    /// uppercase-only alphabet.
    pub fn position(&self, ch: char) -> Option<usize> {
        if !ch.is_ascii() {
            return None;
        }
        let b = ch as u8;
        self.letters.iter().position(|&c| c == b)
    }

    /// Returns the letter at the given position (0..26).
    ///
    /// # Panics
    /// Panics if `index >= 26`.
    pub fn letter_at(&self, index: usize) -> char {
        self.letters[index] as char
    }

    /// Returns the alphabet symbols in order.
    pub fn as_bytes(&self) -> &[u8; ALPHABET_LEN] {
        &self.letters
    }
}

impl std::fmt::Display for Alphabet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for &b in self.letters.iter() {
            write!(f, "{}", b as char)?;
        }
        Ok(())
    }
}
