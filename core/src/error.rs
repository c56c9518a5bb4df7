// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use displaydoc::Display;
use num::BigUint;
use thiserror::Error;

/// Everything that can go wrong outside of the search itself. Running
/// out of candidates is not an error, see
/// [`Factorization::NotFound`](crate::Factorization::NotFound).
#[derive(Error, Display, Debug, Clone, PartialEq, Eq)]
pub enum FactorError {
    /// `{0}` is not a decimal integer
    InvalidModulus(String),
    /// Public exponent {exponent} has no inverse modulo the totient
    NoInverse {
        /// The exponent that was rejected.
        exponent: BigUint,
    },
    /// Failed to start search thread pool: {0}
    ThreadPool(String),
}
