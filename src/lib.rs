//! Keyed Vigenère substitution cipher engine.
//!
//! A classical polyalphabetic cipher: a keyword seeds a permuted 26-letter
//! alphabet, the permuted alphabet seeds a 26×26 substitution table of
//! left-rotations, and a keystream expanded to the plaintext's length
//! selects table columns while plaintext letters select table rows.
//!
//! This crate provides the core cipher engine, compatible output-for-output
//! with the original Java implementation. It is a classical cipher with no
//! cryptographic security; no decryption is provided.
//!
//! # Architecture
//!
//! ```text
//! Alphabet   (keyword-permuted 26-letter lookup sequence)
//!     ↓ seeds
//! Table      (26 rows — cumulative left-rotations of the alphabet)
//!     ↓ read by                 keystream::expand (key → plaintext length)
//! KeyedVigenere (orchestrator — row/column lookup per plaintext position)
//! ```
//!
//! # Examples
//!
//! Build a table from a keyword and encrypt with an explicit key:
//!
//! ```
//! use keyed_vigenere::KeyedVigenere;
//!
//! let mut engine = KeyedVigenere::new();
//! engine.build_table("GLYPH").unwrap();
//!
//! let ciphertext = engine.encrypt_with_key("HELLO, WORLD!", "SATOR").unwrap();
//! assert_eq!(ciphertext, "WMUQD, YFDSL!");
//! ```
//!
//! Render the substitution table for display:
//!
//! ```
//! use keyed_vigenere::{Alphabet, Table};
//!
//! let alphabet = Alphabet::from_keyword("KRYPTOS").unwrap();
//! let table = Table::build(&alphabet).unwrap();
//! println!("{table}");
//! ```

#![deny(clippy::all)]

pub mod error;
pub mod keystream;

mod alphabet;
mod cipher;
mod table;

pub use alphabet::{Alphabet, ALPHABET_LEN};
pub use cipher::KeyedVigenere;
pub use error::VigenereError;
pub use table::Table;
