// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

mod digit_dfs;
mod inverse;

pub(crate) use digit_dfs::{candidates, Cancellation, Candidate, DigitSearch, Step};
pub use inverse::InverseTable;
