// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use color_eyre::Result;
use eyre::WrapErr;
use num::BigUint;
use tracing::{info, warn};
use wordfactor_core::{Dictionary, Factorizer, Modulus, PrivateKey, SearchOptions, SearchReport};

/// Everything needed for one run, already parsed.
#[derive(Clone, Debug)]
pub struct Request {
    pub modulus: Modulus,
    pub ciphertext: Option<BigUint>,
    pub exponent: BigUint,
    pub options: SearchOptions,
}

impl Request {
    pub fn parse(
        modulus: &str,
        ciphertext: Option<&str>,
        exponent: u64,
        options: SearchOptions,
    ) -> Result<Request> {
        let modulus = Modulus::from_decimal(modulus).wrap_err("Invalid modulus")?;
        let ciphertext = ciphertext
            .map(|text| {
                text.trim()
                    .parse::<BigUint>()
                    .wrap_err_with(|| format!("Ciphertext `{}` is not a decimal integer", text))
            })
            .transpose()?;
        Ok(Request {
            modulus,
            ciphertext,
            exponent: BigUint::from(exponent),
            options,
        })
    }
}

#[derive(Clone, Debug)]
pub struct Solution {
    pub report: SearchReport,
    /// Decrypted ciphertext, if one was given and the factors were found.
    pub plaintext: Option<Vec<u8>>,
}

pub fn solve(request: &Request, dict: &Dictionary) -> Result<Solution> {
    let report = Factorizer::new(dict)
        .with_options(request.options)
        .run(&request.modulus)?;

    if let Some(pair) = report.outcome.pair() {
        if !pair.verifies(&request.modulus) || !dict.accepts(&pair.p) || !dict.accepts(&pair.q) {
            warn!(%pair, "reported factors do not check out");
        }
    }

    let plaintext = match (report.outcome.pair(), &request.ciphertext) {
        (Some(pair), Some(ciphertext)) => {
            let key = PrivateKey::recover(pair, &request.exponent)
                .wrap_err("Failed to rebuild the private key")?;
            Some(key.decrypt_bytes(ciphertext))
        }
        _ => None,
    };

    info!(
        found = report.outcome.is_found(),
        candidates = report.candidates,
        nodes_visited = report.nodes_visited,
        elapsed = ?report.elapsed,
        "search complete"
    );
    Ok(Solution { report, plaintext })
}
