// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::FactorError;
use num::{BigUint, Num};
use std::fmt;
use std::str::FromStr;

/// The number being factored, together with its base-256 digits.
///
/// Digits are little-endian: `digits()[0]` is the least significant
/// byte, which is also the last character of both phrases.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Modulus {
    value: BigUint,
    digits: Vec<u8>,
}

impl Modulus {
    /// Parses a plain decimal integer. Surrounding whitespace is
    /// ignored, but signs, separators and other radixes are rejected.
    pub fn from_decimal(input: &str) -> Result<Modulus, FactorError> {
        let trimmed = input.trim();
        if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
            return Err(FactorError::InvalidModulus(input.to_owned()));
        }
        BigUint::from_str_radix(trimmed, 10)
            .map(Modulus::from)
            .map_err(|_err| FactorError::InvalidModulus(input.to_owned()))
    }

    pub fn value(&self) -> &BigUint {
        &self.value
    }

    /// Little-endian base-256 digits. Never empty.
    pub fn digits(&self) -> &[u8] {
        &self.digits
    }

    /// Number of base-256 digits.
    pub fn len(&self) -> usize {
        self.digits.len()
    }
}

impl From<BigUint> for Modulus {
    fn from(value: BigUint) -> Modulus {
        let mut digits = value.to_bytes_le();
        if digits.is_empty() {
            digits.push(0);
        }
        Modulus { value, digits }
    }
}

impl FromStr for Modulus {
    type Err = FactorError;

    fn from_str(input: &str) -> Result<Modulus, FactorError> {
        Modulus::from_decimal(input)
    }
}

impl fmt::Display for Modulus {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        self.value.fmt(fmt)
    }
}

#[cfg(test)]
mod test {
    use super::Modulus;
    use crate::FactorError;

    #[test]
    fn test_digits_are_little_endian() {
        let modulus = Modulus::from_decimal("638465543").unwrap();
        assert_eq!(modulus.digits(), &[7, 54, 14, 38]);
        assert_eq!(modulus.len(), 4);
    }

    #[test]
    fn test_zero_has_one_digit() {
        let modulus = Modulus::from_decimal("0").unwrap();
        assert_eq!(modulus.digits(), &[0]);
    }

    #[test]
    fn test_whitespace_is_trimmed() {
        let modulus: Modulus = " 97\n".parse().unwrap();
        assert_eq!(modulus.digits(), &[97]);
        assert_eq!(modulus.to_string(), "97");
    }

    #[test]
    fn test_rejects_non_decimal() {
        for input in ["", "  ", "-5", "+5", "0x61", "12a", "1 000", "1.5"] {
            assert_eq!(
                Modulus::from_decimal(input),
                Err(FactorError::InvalidModulus(input.to_owned())),
                "{input:?}"
            );
        }
    }
}
