// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Recovers the factors of a modulus when both factors are made of
//! text: each one, read as big-endian bytes, spells one or more words
//! from a dictionary separated by single spaces.
//!
//! The search works one base-256 digit at a time from the least
//! significant end. Because the least significant digit of one factor
//! is odd, it is invertible mod 256, and every digit of the other
//! factor is pinned down by the digit chosen for the first. A trie of
//! reversed words rejects branches as soon as the text stops being a
//! valid phrase.
//!
//! `wordfactor_core` is the library behind the `wordfactor` CLI.
//!
//! ## Example
//!
//! ```rust
//! use wordfactor_core::{factor, Dictionary, Factorization, Modulus, PhrasePair};
//!
//! // Usually loaded from a word list file, one word per line.
//! let dict = Dictionary::from_lines(["a", "dog"]);
//! // "a" * "dog" = 97 * 6582119
//! let modulus = Modulus::from_decimal("638465543").unwrap();
//!
//! match factor(&modulus, &dict) {
//!     Factorization::Found(pair) => {
//!         assert_eq!(pair, PhrasePair::new("a", "dog"));
//!         assert!(pair.verifies(&modulus));
//!     }
//!     Factorization::NotFound => unreachable!(),
//! }
//! ```
//!
//! ## Finishing the job
//!
//! Once the factors are known, [`PrivateKey`] rebuilds the private
//! exponent and decrypts.
//!
//! ```rust
//! use num::BigUint;
//! use wordfactor_core::{PhrasePair, PrivateKey, DEFAULT_EXPONENT};
//!
//! let pair = PhrasePair::new("a", "dog");
//! let key = PrivateKey::recover(&pair, &BigUint::from(DEFAULT_EXPONENT)).unwrap();
//! let plaintext = key.decrypt_bytes(&BigUint::from(214334221u32));
//! assert_eq!(plaintext, b"ok");
//! ```
//!
//! When more than one factorization fits the dictionary, the one
//! returned is the first in a fixed enumeration order, which
//! [`Strategy::Parallel`] preserves.

pub mod algorithms;
pub mod commands;
pub mod loader;
pub mod types;

mod error;

pub use crate::algorithms::InverseTable;
pub use crate::commands::{
    factor, Factorization, Factorizer, PrivateKey, SearchOptions, SearchReport, Strategy,
    DEFAULT_EXPONENT,
};
pub use crate::error::FactorError;
pub use crate::loader::{Cursor, Dictionary};
pub use crate::types::{phrase_to_integer, Modulus, PhrasePair};

/// Returns `env!("CARGO_PKG_VERSION")`, a string in `x.y.z` format.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
