// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::solve::Solution;
use serde_derive::Serialize;
use std::io::{self, Write};
use wordfactor_core::Factorization;

#[derive(Serialize)]
struct JsonOutput<'a> {
    status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    p: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    q: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    plaintext: Option<String>,
    candidates: usize,
    nodes_visited: u64,
    elapsed_ms: u64,
}

pub fn write_text(out: &mut impl Write, solution: &Solution) -> io::Result<()> {
    match &solution.report.outcome {
        Factorization::Found(pair) => {
            writeln!(out, "p = {}", pair.p)?;
            writeln!(out, "q = {}", pair.q)?;
            if let Some(plaintext) = &solution.plaintext {
                writeln!(out, "plaintext = {}", String::from_utf8_lossy(plaintext))?;
            }
        }
        Factorization::NotFound => writeln!(out, "no solution")?,
    }
    Ok(())
}

pub fn write_json(out: &mut impl Write, solution: &Solution) -> io::Result<()> {
    let report = &solution.report;
    let pair = report.outcome.pair();
    let output = JsonOutput {
        status: if pair.is_some() { "found" } else { "not_found" },
        p: pair.map(|pair| &pair.p[..]),
        q: pair.map(|pair| &pair.q[..]),
        plaintext: solution
            .plaintext
            .as_ref()
            .map(|bytes| String::from_utf8_lossy(bytes).into_owned()),
        candidates: report.candidates,
        nodes_visited: report.nodes_visited,
        elapsed_ms: u64::try_from(report.elapsed.as_millis()).unwrap_or(u64::MAX),
    };
    serde_json::to_writer(&mut *out, &output)?;
    writeln!(out)
}
