// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::algorithms::{candidates, Cancellation, Candidate, DigitSearch, InverseTable, Step};
use crate::loader::Dictionary;
use crate::types::{Modulus, PhrasePair};
use crate::FactorError;
use rayon::prelude::*;
use serde_derive::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};
use tracing::{debug, trace, warn};

/// Result of a completed search. Running out of candidates is an
/// ordinary outcome, not an error.
#[derive(Serialize, Deserialize, Clone, PartialEq, Eq, Debug)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Factorization {
    Found(PhrasePair),
    NotFound,
}

impl Factorization {
    pub fn is_found(&self) -> bool {
        matches!(self, Factorization::Found(_))
    }

    pub fn pair(&self) -> Option<&PhrasePair> {
        match self {
            Factorization::Found(pair) => Some(pair),
            Factorization::NotFound => None,
        }
    }

    pub fn into_pair(self) -> Option<PhrasePair> {
        match self {
            Factorization::Found(pair) => Some(pair),
            Factorization::NotFound => None,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Debug)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Walk candidates one at a time on the calling thread.
    Sequential,
    /// Spread candidates over a thread pool. Gives the same answer as
    /// `Sequential`.
    Parallel,
}

impl Default for Strategy {
    fn default() -> Strategy {
        Strategy::Sequential
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct SearchOptions {
    pub strategy: Strategy,
    /// Size of the thread pool for [`Strategy::Parallel`]. `None` lets
    /// rayon decide.
    pub threads: Option<usize>,
}

/// What a search found, plus a few numbers about how it got there.
#[derive(Serialize, Deserialize, Clone, PartialEq, Eq, Debug)]
pub struct SearchReport {
    pub outcome: Factorization,
    /// How many (length, leading digit) starting points were viable.
    pub candidates: usize,
    /// Total search tree nodes entered, over all sub-searches.
    pub nodes_visited: u64,
    pub elapsed: Duration,
}

/// Searches for the phrase pair behind a modulus.
///
/// ```rust
/// use wordfactor_core::{Dictionary, Factorizer, Modulus, PhrasePair};
///
/// let dict = Dictionary::from_lines(["a", "dog"]);
/// let modulus = Modulus::from_decimal("638465543").unwrap();
/// let report = Factorizer::new(&dict).run(&modulus).unwrap();
/// assert_eq!(report.outcome.pair(), Some(&PhrasePair::new("a", "dog")));
/// ```
#[derive(Clone, Debug)]
pub struct Factorizer<'a> {
    dictionary: &'a Dictionary,
    inverses: &'a InverseTable,
    options: SearchOptions,
}

impl<'a> Factorizer<'a> {
    pub fn new(dictionary: &'a Dictionary) -> Factorizer<'a> {
        Factorizer {
            dictionary,
            inverses: InverseTable::shared(),
            options: SearchOptions::default(),
        }
    }

    pub fn with_options(mut self, options: SearchOptions) -> Factorizer<'a> {
        self.options = options;
        self
    }

    pub fn with_inverses(mut self, inverses: &'a InverseTable) -> Factorizer<'a> {
        self.inverses = inverses;
        self
    }

    /// Runs the search to completion. Only fails if the thread pool
    /// for a parallel search can't be started.
    pub fn run(&self, modulus: &Modulus) -> Result<SearchReport, FactorError> {
        let start = Instant::now();
        let digits = modulus.digits();
        let candidates = self.prepare(digits);

        let (outcome, nodes_visited) = match self.options.strategy {
            Strategy::Sequential => self.run_sequential(digits, &candidates),
            Strategy::Parallel => self.run_parallel(digits, &candidates)?,
        };

        let elapsed = start.elapsed();
        debug!(found = outcome.is_found(), nodes_visited, ?elapsed, "search finished");
        Ok(SearchReport {
            outcome,
            candidates: candidates.len(),
            nodes_visited,
            elapsed,
        })
    }

    fn prepare(&self, digits: &[u8]) -> Vec<Candidate> {
        if self.dictionary.is_empty() {
            warn!("dictionary is empty, no factorization can be found");
        }
        let candidates = candidates(digits, self.dictionary, self.inverses);
        debug!(
            digits = digits.len(),
            candidates = candidates.len(),
            strategy = ?self.options.strategy,
            "starting search"
        );
        candidates
    }

    fn run_sequential(&self, digits: &[u8], candidates: &[Candidate]) -> (Factorization, u64) {
        let mut nodes = 0;
        for candidate in candidates {
            trace!(?candidate, "searching");
            let mut search = DigitSearch::new(self.dictionary, digits, *candidate);
            let step = search.run();
            nodes += search.nodes_visited();
            if let Step::Found(pair) = step {
                return (Factorization::Found(pair), nodes);
            }
        }
        (Factorization::NotFound, nodes)
    }

    /// Every candidate gets its own sub-search. When one succeeds, all
    /// sub-searches later in canonical order give up, and the earliest
    /// success wins regardless of which thread finished first.
    fn run_parallel(
        &self,
        digits: &[u8],
        candidates: &[Candidate],
    ) -> Result<(Factorization, u64), FactorError> {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.options.threads.unwrap_or(0))
            .build()
            .map_err(|err| FactorError::ThreadPool(err.to_string()))?;
        let cancel = Cancellation::new();
        let nodes = AtomicU64::new(0);

        let best = pool.install(|| {
            candidates
                .par_iter()
                .enumerate()
                .filter_map(|(index, candidate)| {
                    if cancel.supersedes(index) {
                        return None;
                    }
                    trace!(index, ?candidate, "searching");
                    let mut search = DigitSearch::new(self.dictionary, digits, *candidate)
                        .with_cancellation(&cancel, index);
                    let step = search.run();
                    nodes.fetch_add(search.nodes_visited(), Ordering::Relaxed);
                    match step {
                        Step::Found(pair) => {
                            cancel.record(index);
                            Some((index, pair))
                        }
                        Step::Exhausted | Step::Cancelled => None,
                    }
                })
                .min_by_key(|(index, _)| *index)
        });

        let outcome = match best {
            Some((_, pair)) => Factorization::Found(pair),
            None => Factorization::NotFound,
        };
        Ok((outcome, nodes.into_inner()))
    }
}

/// Runs a sequential search with the shared inverse table.
pub fn factor(modulus: &Modulus, dictionary: &Dictionary) -> Factorization {
    let factorizer = Factorizer::new(dictionary);
    let candidates = factorizer.prepare(modulus.digits());
    factorizer.run_sequential(modulus.digits(), &candidates).0
}
