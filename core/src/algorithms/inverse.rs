// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

static SHARED: InverseTable = InverseTable::new();

/// Multiplicative inverses modulo 256 of every odd byte.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct InverseTable {
    table: [u8; 256],
}

impl InverseTable {
    pub const fn new() -> InverseTable {
        let mut table = [0u8; 256];
        let mut a = 1;
        while a < 256 {
            let mut x = 1;
            while x < 256 {
                if (a * x) & 0xff == 1 {
                    table[a] = x as u8;
                    break;
                }
                x += 2;
            }
            a += 2;
        }
        InverseTable { table }
    }

    /// The table every search uses unless told otherwise. Computed at
    /// compile time.
    pub fn shared() -> &'static InverseTable {
        &SHARED
    }

    /// Returns `x` such that `a * x == 1 (mod 256)`. Even bytes have no
    /// inverse.
    pub fn get(&self, a: u8) -> Option<u8> {
        if a & 1 == 1 {
            Some(self.table[usize::from(a)])
        } else {
            None
        }
    }
}

impl Default for InverseTable {
    fn default() -> InverseTable {
        InverseTable::new()
    }
}
