// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::types::Modulus;
use num::BigUint;
use serde_derive::{Deserialize, Serialize};
use std::fmt;

/// Interprets the bytes of a phrase as a big-endian integer.
pub fn phrase_to_integer(phrase: &str) -> BigUint {
    BigUint::from_bytes_be(phrase.as_bytes())
}

/// The two recovered factors, as text.
///
/// `p` is always the factor whose last character is odd, because that
/// is the one whose inverse drives the search.
#[derive(Serialize, Deserialize, Clone, PartialEq, Eq, Hash, Debug)]
pub struct PhrasePair {
    pub p: String,
    pub q: String,
}

impl PhrasePair {
    pub fn new(p: impl Into<String>, q: impl Into<String>) -> PhrasePair {
        PhrasePair {
            p: p.into(),
            q: q.into(),
        }
    }

    /// Decodes two little-endian digit buffers. Returns None if any
    /// position was left unassigned or holds a non-ASCII byte.
    pub(crate) fn from_digits(p: &[Option<u8>], q: &[Option<u8>]) -> Option<PhrasePair> {
        Some(PhrasePair {
            p: decode(p)?,
            q: decode(q)?,
        })
    }

    pub fn to_integers(&self) -> (BigUint, BigUint) {
        (phrase_to_integer(&self.p), phrase_to_integer(&self.q))
    }

    pub fn product(&self) -> BigUint {
        let (p, q) = self.to_integers();
        p * q
    }

    /// Checks that multiplying the two phrases gives back `modulus`.
    pub fn verifies(&self, modulus: &Modulus) -> bool {
        &self.product() == modulus.value()
    }

    pub fn p_words(&self) -> impl Iterator<Item = &str> {
        self.p.split(' ')
    }

    pub fn q_words(&self) -> impl Iterator<Item = &str> {
        self.q.split(' ')
    }
}

fn decode(digits: &[Option<u8>]) -> Option<String> {
    let bytes = digits
        .iter()
        .rev()
        .map(|digit| digit.filter(u8::is_ascii))
        .collect::<Option<Vec<u8>>>()?;
    String::from_utf8(bytes).ok()
}

impl fmt::Display for PhrasePair {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(fmt, "{:?} * {:?}", self.p, self.q)
    }
}

#[cfg(test)]
mod test {
    use super::{phrase_to_integer, PhrasePair};
    use crate::types::Modulus;
    use num::BigUint;

    #[test]
    fn test_phrase_to_integer() {
        assert_eq!(phrase_to_integer("a"), BigUint::from(97u32));
        assert_eq!(phrase_to_integer("dog"), BigUint::from(6582119u32));
    }

    #[test]
    fn test_from_digits_reverses() {
        let p = [Some(b'a')];
        let q = [Some(b'g'), Some(b'o'), Some(b'd')];
        assert_eq!(
            PhrasePair::from_digits(&p, &q),
            Some(PhrasePair::new("a", "dog"))
        );
    }

    #[test]
    fn test_from_digits_unassigned() {
        let p = [Some(b'a')];
        let q = [Some(b'g'), None, Some(b'd')];
        assert_eq!(PhrasePair::from_digits(&p, &q), None);
    }

    #[test]
    fn test_verifies() {
        let modulus = Modulus::from_decimal("638465543").unwrap();
        assert!(PhrasePair::new("a", "dog").verifies(&modulus));
        assert!(PhrasePair::new("dog", "a").verifies(&modulus));
        assert!(!PhrasePair::new("a", "cat").verifies(&modulus));
    }

    #[test]
    fn test_words() {
        let pair = PhrasePair::new("i see", "the sea");
        assert_eq!(pair.p_words().collect::<Vec<_>>(), ["i", "see"]);
        assert_eq!(pair.q_words().collect::<Vec<_>>(), ["the", "sea"]);
        assert_eq!(pair.to_string(), "\"i see\" * \"the sea\"");
    }
}
