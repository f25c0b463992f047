//! Table: the 26×26 substitution matrix built from a permuted alphabet.
//!
//! Replicates the Java `constructVigenereTable()`: row 0 is the permuted
//! alphabet itself; each subsequent row is the previous row rotated left by
//! one position. The rotation is applied cumulatively to a mutable working
//! copy, one emitted row per step, so the row-to-row contiguity of the
//! original construction is preserved.

use crate::alphabet::{Alphabet, ALPHABET_LEN};
use crate::error::VigenereError;

/// The full set of 26 rotated rows derived from a permuted alphabet.
///
/// Row 0 acts as the shared lookup alphabet: a plaintext letter's position
/// in row 0 selects the row, a keystream letter's position selects the
/// column. Built wholesale per keyword; read-only afterward.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    rows: [[u8; ALPHABET_LEN]; ALPHABET_LEN],
}

impl Table {
    /// Builds the substitution table from a permuted alphabet.
    ///
    /// Row 0 is the alphabet as given. For each of the 25 remaining rows,
    /// the working copy's first symbol is moved to the end and the result
    /// is emitted as the next row.
    ///
    /// Building is idempotent: the same alphabet always yields the same
    /// table, and no partial table is ever produced.
    ///
    /// # Parameters
    /// - `alphabet`: The permuted alphabet supplying row 0.
    ///
    /// # Errors
    /// Returns [`VigenereError::InvalidAlphabet`] if the alphabet does not
    /// hold 26 distinct uppercase letters. Unreachable through [`Alphabet`]'s
    /// checked constructors, but guarded here so a malformed alphabet can
    /// never reach the lookup path.
    ///
    /// # Examples
    ///
    /// ```
    /// use keyed_vigenere::{Alphabet, Table};
    ///
    /// let alphabet = Alphabet::from_keyword("GLYPH").unwrap();
    /// let table = Table::build(&alphabet).unwrap();
    /// assert_eq!(table.row(0), alphabet.as_bytes());
    /// ```
    pub fn build(alphabet: &Alphabet) -> Result<Self, VigenereError> {
        Self::validate(alphabet)?;

        let mut rows = [[0u8; ALPHABET_LEN]; ALPHABET_LEN];
        let mut working = *alphabet.as_bytes();
        rows[0] = working;
        for row in rows.iter_mut().skip(1) {
            working.rotate_left(1);
            *row = working;
        }
        Ok(Table { rows })
    }

    /// Rejects alphabets that lost the 26-distinct-letters invariant.
    fn validate(alphabet: &Alphabet) -> Result<(), VigenereError> {
        let mut seen = [false; ALPHABET_LEN];
        for &b in alphabet.as_bytes().iter() {
            if !b.is_ascii_uppercase() {
                return Err(VigenereError::InvalidAlphabet);
            }
            let slot = (b - b'A') as usize;
            if seen[slot] {
                return Err(VigenereError::InvalidAlphabet);
            }
            seen[slot] = true;
        }
        Ok(())
    }

    /// Returns row `index` of the table.
    ///
    /// # Panics
    /// Panics if `index >= 26`.
    pub fn row(&self, index: usize) -> &[u8; ALPHABET_LEN] {
        &self.rows[index]
    }

    /// Returns the table rows in order, row 0 first.
    pub fn rows(&self) -> impl Iterator<Item = &[u8; ALPHABET_LEN]> {
        self.rows.iter()
    }

    /// Returns the symbol at the given row and column.
    ///
    /// # Panics
    /// Panics if `row >= 26` or `col >= 26`.
    pub fn cell(&self, row: usize, col: usize) -> char {
        self.rows[row][col] as char
    }
}

impl std::fmt::Display for Table {
    /// Renders the row-labeled grid the Java implementation printed:
    /// a header of the canonical alphabet, then each row labeled with the
    /// canonical letter of its index.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "       ABCDEFGHIJKLMNOPQRSTUVWXYZ")?;
        writeln!(f)?;
        for (i, row) in self.rows.iter().enumerate() {
            write!(f, "    {}  ", (b'A' + i as u8) as char)?;
            for &b in row.iter() {
                write!(f, "{}", b as char)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
