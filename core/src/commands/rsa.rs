// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::types::PhrasePair;
use crate::FactorError;
use num::{BigInt, BigUint, Integer, One, Zero};

/// The usual RSA public exponent.
pub const DEFAULT_EXPONENT: u32 = 65537;

/// RSA private key rebuilt from a recovered phrase pair.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct PrivateKey {
    modulus: BigUint,
    exponent: BigUint,
}

impl PrivateKey {
    /// Computes `d = e^-1 mod (p - 1)(q - 1)`.
    pub fn recover(pair: &PhrasePair, public_exponent: &BigUint) -> Result<PrivateKey, FactorError> {
        let (p, q) = pair.to_integers();
        let no_inverse = || FactorError::NoInverse {
            exponent: public_exponent.clone(),
        };
        if p.is_zero() || q.is_zero() {
            return Err(no_inverse());
        }
        let totient = (&p - 1u32) * (&q - 1u32);
        let exponent = mod_inverse(public_exponent, &totient).ok_or_else(no_inverse)?;
        Ok(PrivateKey {
            modulus: p * q,
            exponent,
        })
    }

    pub fn modulus(&self) -> &BigUint {
        &self.modulus
    }

    /// The private exponent `d`.
    pub fn exponent(&self) -> &BigUint {
        &self.exponent
    }

    pub fn decrypt(&self, ciphertext: &BigUint) -> BigUint {
        ciphertext.modpow(&self.exponent, &self.modulus)
    }

    /// Decrypts and returns the plaintext as big-endian bytes.
    pub fn decrypt_bytes(&self, ciphertext: &BigUint) -> Vec<u8> {
        self.decrypt(ciphertext).to_bytes_be()
    }
}

fn mod_inverse(value: &BigUint, modulus: &BigUint) -> Option<BigUint> {
    if modulus.is_zero() {
        return None;
    }
    let value = BigInt::from(value.clone());
    let modulus = BigInt::from(modulus.clone());
    let egcd = value.extended_gcd(&modulus);
    if !egcd.gcd.is_one() {
        return None;
    }
    egcd.x.mod_floor(&modulus).to_biguint()
}

#[cfg(test)]
mod test {
    use super::{mod_inverse, PrivateKey, DEFAULT_EXPONENT};
    use crate::types::PhrasePair;
    use crate::FactorError;
    use num::BigUint;

    #[test]
    fn test_mod_inverse() {
        let inverse = mod_inverse(&BigUint::from(3u32), &BigUint::from(11u32));
        assert_eq!(inverse, Some(BigUint::from(4u32)));
        assert_eq!(mod_inverse(&BigUint::from(4u32), &BigUint::from(8u32)), None);
        assert_eq!(mod_inverse(&BigUint::from(4u32), &BigUint::from(0u32)), None);
    }

    #[test]
    fn test_recover_and_decrypt() {
        let pair = PhrasePair::new("a", "dog");
        let key = PrivateKey::recover(&pair, &BigUint::from(DEFAULT_EXPONENT)).unwrap();
        assert_eq!(key.modulus(), &BigUint::from(638465543u32));
        assert_eq!(key.exponent(), &BigUint::from(619802369u32));
        // "ok" encrypted with e = 65537
        let ciphertext = BigUint::from(214334221u32);
        assert_eq!(key.decrypt_bytes(&ciphertext), b"ok");
    }

    #[test]
    fn test_no_inverse() {
        // (97 - 1) * (6582119 - 1) is divisible by 3
        let pair = PhrasePair::new("a", "dog");
        assert_eq!(
            PrivateKey::recover(&pair, &BigUint::from(3u32)),
            Err(FactorError::NoInverse {
                exponent: BigUint::from(3u32)
            })
        );
    }
}
