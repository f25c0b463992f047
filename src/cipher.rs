//! KeyedVigenere: the cipher engine orchestrating alphabet, table, and
//! keystream.
//!
//! The engine owns the substitution table for the current keyword —
//! explicit per-instance state rather than the shared static fields of the
//! original Java implementation. It has exactly two states: Unconfigured
//! (no table built) and Ready (table built for the current keyword).
//! Building a table transitions Unconfigured→Ready or rebuilds in place;
//! explicit-key encryption is only valid in Ready.

use crate::alphabet::Alphabet;
use crate::error::VigenereError;
use crate::keystream;
use crate::table::Table;

/// Keyword used by the default encryption path to (re)build the table.
const DEFAULT_KEYWORD: &str = "GLYPH";

/// Key used by the default encryption path to derive the keystream.
const DEFAULT_KEY: &str = "SATOR";

/// Keyed Vigenère cipher engine.
///
/// Lookup scheme, per plaintext position: the plaintext letter's position
/// in row 0 of the table selects the **row**, the keystream letter's
/// position in row 0 selects the **column**, and the cell at that row and
/// column is the ciphertext letter. Non-letter characters pass through
/// unchanged at their positions, each still consuming one keystream
/// position (alignment is strictly positional, not letter-count-based).
///
/// # Examples
///
/// ```
/// use keyed_vigenere::KeyedVigenere;
///
/// let mut engine = KeyedVigenere::new();
/// engine.build_table("GLYPH").unwrap();
/// let ciphertext = engine.encrypt_with_key("HELLO, WORLD!", "SATOR").unwrap();
/// assert_eq!(ciphertext, "WMUQD, YFDSL!");
/// ```
///
/// The convenience path rebuilds the table from the default keyword on
/// every call:
///
/// ```
/// use keyed_vigenere::KeyedVigenere;
///
/// let mut engine = KeyedVigenere::new();
/// assert_eq!(engine.encrypt("A").unwrap(), "X");
/// ```
#[derive(Debug, Default)]
pub struct KeyedVigenere {
    table: Option<Table>,
}

impl KeyedVigenere {
    /// Creates a new engine in the Unconfigured state (no table built).
    ///
    /// Call [`build_table`](Self::build_table) before
    /// [`encrypt_with_key`](Self::encrypt_with_key), or use
    /// [`encrypt`](Self::encrypt) which builds the default table itself.
    pub fn new() -> Self {
        KeyedVigenere { table: None }
    }

    /// Permutes the alphabet from `keyword` and (re)builds the
    /// substitution table, discarding any previously built table.
    ///
    /// # Parameters
    /// - `keyword`: Non-empty string of letters seeding the permuted
    ///   alphabet.
    ///
    /// # Errors
    /// Returns [`VigenereError::InvalidKeyword`] if the keyword is empty
    /// or contains non-letter characters. The previous table is kept
    /// intact on failure.
    pub fn build_table(&mut self, keyword: &str) -> Result<(), VigenereError> {
        let alphabet = Alphabet::from_keyword(keyword)?;
        self.table = Some(Table::build(&alphabet)?);
        Ok(())
    }

    /// Returns the current substitution table, or `None` while
    /// Unconfigured. Rendering collaborators read rows through this.
    pub fn table(&self) -> Option<&Table> {
        self.table.as_ref()
    }

    /// Encrypts `plaintext` with an explicit key against the current table.
    ///
    /// The key is expanded to the plaintext's character count (non-letter
    /// characters included), then each position is substituted via the
    /// row/column lookup described on [`KeyedVigenere`]. The ciphertext has
    /// the same length as the plaintext, with non-letter characters
    /// preserved verbatim at their positions.
    ///
    /// Lowercase letters are rejected, not normalized: the lookup alphabet
    /// is uppercase-only and a lowercase letter is a letter that cannot be
    /// found in it.
    ///
    /// # Parameters
    /// - `plaintext`: The text to encrypt; letters are expected uppercase.
    /// - `key`: The key material to expand into the keystream.
    ///
    /// # Errors
    /// - [`VigenereError::TableNotBuilt`] if no table has been built yet.
    /// - [`VigenereError::InvalidKey`] if `key` is empty and the plaintext
    ///   is non-empty.
    /// - [`VigenereError::CharacterNotFound`] if a plaintext or keystream
    ///   letter is absent from row 0 (lowercase or non-Latin letters).
    /// - [`VigenereError::KeyStreamTooShort`] if the expanded keystream
    ///   does not cover the plaintext (unreachable when expansion
    ///   succeeds; guarded defensively).
    pub fn encrypt_with_key(&self, plaintext: &str, key: &str) -> Result<String, VigenereError> {
        let table = self.table.as_ref().ok_or(VigenereError::TableNotBuilt)?;

        let length = plaintext.chars().count();
        let stream = keystream::expand(key, length)?;
        let stream: Vec<char> = stream.chars().collect();
        if stream.len() < length {
            return Err(VigenereError::KeyStreamTooShort);
        }

        let row0 = table.row(0);
        let mut ciphertext = String::with_capacity(plaintext.len());
        for (i, ch) in plaintext.chars().enumerate() {
            if !ch.is_alphabetic() {
                // Passthrough position: the keystream character at i is
                // consumed but not applied.
                ciphertext.push(ch);
                continue;
            }
            let row = position_in(row0, ch).ok_or(VigenereError::CharacterNotFound)?;
            let col = position_in(row0, stream[i]).ok_or(VigenereError::CharacterNotFound)?;
            ciphertext.push(table.cell(row, col));
        }
        Ok(ciphertext)
    }

    /// Encrypts `plaintext` with the fixed default keyword and key.
    ///
    /// Rebuilds the table from the default keyword `"GLYPH"` on every
    /// call (the explicit ensure-Ready step of the original design), then
    /// encrypts with the default key `"SATOR"`.
    ///
    /// # Parameters
    /// - `plaintext`: The text to encrypt; letters are expected uppercase.
    ///
    /// # Errors
    /// Same as [`encrypt_with_key`](Self::encrypt_with_key), minus
    /// `TableNotBuilt` and `InvalidKey` which cannot occur with the fixed
    /// defaults.
    pub fn encrypt(&mut self, plaintext: &str) -> Result<String, VigenereError> {
        self.build_table(DEFAULT_KEYWORD)?;
        self.encrypt_with_key(plaintext, DEFAULT_KEY)
    }
}

/// Exact position of `ch` within row 0, `None` for anything the
/// uppercase-only alphabet does not hold.
fn position_in(row0: &[u8; 26], ch: char) -> Option<usize> {
    if !ch.is_ascii() {
        return None;
    }
    let b = ch as u8;
    row0.iter().position(|&c| c == b)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ready_engine() -> KeyedVigenere {
        let mut engine = KeyedVigenere::new();
        engine.build_table("GLYPH").unwrap();
        engine
    }

    #[test]
    fn test_encrypt_single_letter_pinned() {
        // Row 0 = GLYPHABCDEFIJKMNOQRSTUVWXZ. 'A' is at 5, 'S' at 19;
        // the cell at row 5, column 19 is row0[24] = 'X'.
        let engine = ready_engine();
        assert_eq!(engine.encrypt_with_key("A", "S").unwrap(), "X");
    }

    #[test]
    fn test_encrypt_hello_world_pinned() {
        let engine = ready_engine();
        let ciphertext = engine.encrypt_with_key("HELLO, WORLD!", "SATOR").unwrap();
        assert_eq!(ciphertext, "WMUQD, YFDSL!");
    }

    #[test]
    fn test_non_letter_passthrough_positions() {
        let engine = ready_engine();
        let ciphertext = engine.encrypt_with_key("HELLO, WORLD!", "SATOR").unwrap();
        let chars: Vec<char> = ciphertext.chars().collect();
        assert_eq!(chars[5], ',');
        assert_eq!(chars[6], ' ');
        assert_eq!(chars[12], '!');
        assert_eq!(chars.len(), 13);
    }

    #[test]
    fn test_ciphertext_same_length_as_plaintext() {
        let engine = ready_engine();
        for plaintext in ["A", "ABC DEF", "12345", "NO. 7, GATE B"] {
            let ciphertext = engine.encrypt_with_key(plaintext, "SATOR").unwrap();
            assert_eq!(
                ciphertext.chars().count(),
                plaintext.chars().count(),
                "plaintext {:?}",
                plaintext
            );
        }
    }

    #[test]
    fn test_digits_and_punctuation_only() {
        let engine = ready_engine();
        assert_eq!(engine.encrypt_with_key("1234!?", "SATOR").unwrap(), "1234!?");
    }

    #[test]
    fn test_keystream_alignment_is_positional() {
        // The keystream character aligned with a non-letter position is
        // consumed, not shifted onto the next letter: in "A A" the second
        // 'A' pairs with keystream position 2 ('T'), not position 1.
        let engine = ready_engine();
        let ciphertext = engine.encrypt_with_key("A A", "SAT").unwrap();
        // First 'A': row 5, col index('S')=19 -> row0[24] = 'X'.
        // Second 'A': row 5, col index('T')=20 -> row0[25] = 'Z'.
        assert_eq!(ciphertext, "X Z");
    }

    #[test]
    fn test_unconfigured_explicit_key_path_fails() {
        let engine = KeyedVigenere::new();
        assert_eq!(
            engine.encrypt_with_key("A", "S"),
            Err(VigenereError::TableNotBuilt)
        );
    }

    #[test]
    fn test_default_path_works_while_unconfigured() {
        // The no-key path is itself the Unconfigured->Ready transition.
        let mut engine = KeyedVigenere::new();
        assert_eq!(engine.encrypt("A").unwrap(), "X");
        assert!(engine.table().is_some());
    }

    #[test]
    fn test_default_path_rebuilds_over_previous_keyword() {
        // A table built from another keyword is discarded by the default
        // path, which always re-seeds from the default keyword.
        let mut engine = KeyedVigenere::new();
        engine.build_table("KRYPTOS").unwrap();
        assert_eq!(engine.encrypt("A").unwrap(), "X");
    }

    #[test]
    fn test_rebuild_discards_old_table() {
        let mut engine = ready_engine();
        let before = engine.encrypt_with_key("A", "S").unwrap();
        engine.build_table("KRYPTOS").unwrap();
        let after = engine.encrypt_with_key("A", "S").unwrap();
        assert_ne!(before, after);
    }

    #[test]
    fn test_failed_rebuild_keeps_previous_table() {
        let mut engine = ready_engine();
        assert_eq!(
            engine.build_table("BAD KEYWORD"),
            Err(VigenereError::InvalidKeyword)
        );
        assert_eq!(engine.encrypt_with_key("A", "S").unwrap(), "X");
    }

    #[test]
    fn test_lowercase_plaintext_rejected() {
        let engine = ready_engine();
        assert_eq!(
            engine.encrypt_with_key("hello", "SATOR"),
            Err(VigenereError::CharacterNotFound)
        );
    }

    #[test]
    fn test_lowercase_keystream_rejected() {
        let engine = ready_engine();
        assert_eq!(
            engine.encrypt_with_key("HELLO", "sator"),
            Err(VigenereError::CharacterNotFound)
        );
    }

    #[test]
    fn test_non_latin_letter_rejected() {
        let engine = ready_engine();
        assert_eq!(
            engine.encrypt_with_key("CAFÉ", "SATOR"),
            Err(VigenereError::CharacterNotFound)
        );
    }

    #[test]
    fn test_empty_key_with_letters_fails() {
        let engine = ready_engine();
        assert_eq!(
            engine.encrypt_with_key("ABC", ""),
            Err(VigenereError::InvalidKey)
        );
    }

    #[test]
    fn test_empty_plaintext_is_empty_ciphertext() {
        let engine = ready_engine();
        assert_eq!(engine.encrypt_with_key("", "SATOR").unwrap(), "");
    }

    #[test]
    fn test_key_longer_than_plaintext() {
        let engine = ready_engine();
        // Only the first positions of the key are consumed.
        assert_eq!(engine.encrypt_with_key("A", "SATOR").unwrap(), "X");
    }

    #[test]
    fn test_plaintext_selects_row_not_shift_amount() {
        // The asymmetric scheme: swapping plaintext and keystream letters
        // changes nothing here only because rotation addition commutes,
        // but row selection by plaintext position must hold exactly.
        let engine = ready_engine();
        // 'G' is at 0, 'L' at 1: row 0, col 1 -> 'L'.
        assert_eq!(engine.encrypt_with_key("G", "L").unwrap(), "L");
        // 'L' at 1, 'G' at 0: row 1, col 0 -> 'L'.
        assert_eq!(engine.encrypt_with_key("L", "G").unwrap(), "L");
        // 'Z' at 25, 'L' at 1: row 25, col 1 -> row0[0] = 'G'.
        assert_eq!(engine.encrypt_with_key("Z", "L").unwrap(), "G");
    }
}
