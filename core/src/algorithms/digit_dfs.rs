// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::algorithms::InverseTable;
use crate::loader::{Cursor, Dictionary};
use crate::types::PhrasePair;
use std::sync::atomic::{AtomicUsize, Ordering};

const SPACE: u8 = b' ';

/// Starting point of one sub-search: the lengths of both factors and
/// their least significant digits.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub(crate) struct Candidate {
    pub(crate) p_len: usize,
    pub(crate) q_len: usize,
    pub(crate) p0: u8,
    pub(crate) q0: u8,
    pub(crate) p0_inverse: u8,
}

/// Lists every candidate worth searching, in the order the sequential
/// search visits them: `p_len` ascending, then `q_len` shortest first,
/// then `p0` and `q0` ascending.
pub(crate) fn candidates(
    digits: &[u8],
    dict: &Dictionary,
    inverses: &InverseTable,
) -> Vec<Candidate> {
    let total = digits.len();
    let mut out = vec![];
    for p_len in 1..total {
        for q_len in [total - p_len, total - p_len + 1] {
            if q_len == 0 {
                continue;
            }
            for p0 in b'a'..=b'z' {
                let p0_inverse = match inverses.get(p0) {
                    Some(inverse) => inverse,
                    None => continue,
                };
                if !leading_digit_fits(dict, p0, p_len) {
                    continue;
                }
                for q0 in b'a'..=b'z' {
                    if p0.wrapping_mul(q0) != digits[0] || !leading_digit_fits(dict, q0, q_len) {
                        continue;
                    }
                    out.push(Candidate {
                        p_len,
                        q_len,
                        p0,
                        q0,
                        p0_inverse,
                    });
                }
            }
        }
    }
    out
}

fn leading_digit_fits(dict: &Dictionary, digit: u8, len: usize) -> bool {
    match dict.advance_letter(dict.start(), digit) {
        Some(cursor) => len > 1 || dict.is_end_of_word(cursor),
        None => false,
    }
}

/// Shared between parallel sub-searches. Holds the lowest candidate
/// index that has produced a solution so far.
#[derive(Debug)]
pub(crate) struct Cancellation {
    best: AtomicUsize,
}

impl Cancellation {
    pub(crate) fn new() -> Cancellation {
        Cancellation {
            best: AtomicUsize::new(usize::MAX),
        }
    }

    pub(crate) fn record(&self, index: usize) {
        self.best.fetch_min(index, Ordering::AcqRel);
    }

    /// True once a solution earlier in canonical order exists, meaning
    /// the search at `index` can no longer matter.
    pub(crate) fn supersedes(&self, index: usize) -> bool {
        self.best.load(Ordering::Acquire) < index
    }
}

pub(crate) enum Step {
    Found(PhrasePair),
    Exhausted,
    Cancelled,
}

/// Depth-first assignment of both factors' digits, least significant
/// first.
///
/// At each position at most one digit is chosen freely: either P's
/// digit is tried as a space or letter and Q's is solved for, or P has
/// run out and Q's digit is forced outright. Since `p0` is odd,
/// `p0 * q[i] == target - sum (mod 256)` always has exactly one
/// solution.
pub(crate) struct DigitSearch<'a> {
    dict: &'a Dictionary,
    target: &'a [u8],
    candidate: Candidate,
    p: Vec<Option<u8>>,
    q: Vec<Option<u8>>,
    cancel: Option<(&'a Cancellation, usize)>,
    nodes: u64,
}

impl<'a> DigitSearch<'a> {
    pub(crate) fn new(
        dict: &'a Dictionary,
        target: &'a [u8],
        candidate: Candidate,
    ) -> DigitSearch<'a> {
        DigitSearch {
            dict,
            target,
            candidate,
            p: vec![None; candidate.p_len],
            q: vec![None; candidate.q_len],
            cancel: None,
            nodes: 0,
        }
    }

    pub(crate) fn with_cancellation(
        mut self,
        cancel: &'a Cancellation,
        index: usize,
    ) -> DigitSearch<'a> {
        self.cancel = Some((cancel, index));
        self
    }

    pub(crate) fn nodes_visited(&self) -> u64 {
        self.nodes
    }

    pub(crate) fn run(&mut self) -> Step {
        let Candidate { p0, q0, .. } = self.candidate;
        let start = self.dict.start();
        let (ps, qs) = match (
            self.dict.advance_letter(start, p0),
            self.dict.advance_letter(start, q0),
        ) {
            (Some(ps), Some(qs)) => (ps, qs),
            _ => return Step::Exhausted,
        };
        self.p[0] = Some(p0);
        self.q[0] = Some(q0);
        let step = self.step(1, (u64::from(p0) * u64::from(q0)) >> 8, ps, qs);
        self.p[0] = None;
        self.q[0] = None;
        step
    }

    fn step(&mut self, i: usize, carry: u64, ps: Cursor, qs: Cursor) -> Step {
        self.nodes += 1;
        if let Some((cancel, index)) = self.cancel {
            if cancel.supersedes(index) {
                return Step::Cancelled;
            }
        }
        if i == self.target.len() {
            return self.finish(carry, ps, qs);
        }

        let sum = carry + self.convolution(i);
        let target = self.target[i];
        if i < self.p.len() {
            self.choose_p(i, sum, target, ps, qs)
        } else if i < self.q.len() {
            self.force_q(i, sum, target, ps, qs)
        } else {
            // Both factors are fully assigned; the rest is carry.
            self.descend(i, sum, target, ps, qs)
        }
    }

    fn finish(&self, carry: u64, ps: Cursor, qs: Cursor) -> Step {
        if carry != 0 || !self.dict.is_end_of_word(ps) || !self.dict.is_end_of_word(qs) {
            return Step::Exhausted;
        }
        match PhrasePair::from_digits(&self.p, &self.q) {
            Some(pair) if !pair.p.starts_with(' ') && !pair.q.starts_with(' ') => {
                Step::Found(pair)
            }
            _ => Step::Exhausted,
        }
    }

    /// Sum of `p[j] * q[i - j]` for 0 < j < i. The `p[0]` and `q[0]`
    /// terms involve the digits being chosen at `i` and are added by
    /// the caller.
    fn convolution(&self, i: usize) -> u64 {
        let lo = (i + 1).saturating_sub(self.q.len()).max(1);
        let hi = i.min(self.p.len());
        (lo..hi)
            .filter_map(|j| match (self.p[j], self.q[i - j]) {
                (Some(a), Some(b)) => Some(u64::from(a) * u64::from(b)),
                _ => None,
            })
            .sum()
    }

    fn forced_digit(&self, partial: u64, target: u8) -> u8 {
        let rhs = u64::from(target).wrapping_sub(partial) & 0xff;
        ((u64::from(self.candidate.p0_inverse) * rhs) & 0xff) as u8
    }

    fn choose_p(&mut self, i: usize, sum: u64, target: u8, ps: Cursor, qs: Cursor) -> Step {
        let last = i + 1 == self.p.len();
        if !last {
            if let Some(next_ps) = self.dict.advance_space(ps) {
                match self.try_p_digit(i, SPACE, sum, target, next_ps, qs) {
                    Step::Exhausted => (),
                    done => return done,
                }
            }
        }
        for letter in b'a'..=b'z' {
            let next_ps = match self.dict.advance_letter(ps, letter) {
                Some(next_ps) => next_ps,
                None => continue,
            };
            if last && !self.dict.is_end_of_word(next_ps) {
                continue;
            }
            match self.try_p_digit(i, letter, sum, target, next_ps, qs) {
                Step::Exhausted => (),
                done => return done,
            }
        }
        Step::Exhausted
    }

    fn try_p_digit(
        &mut self,
        i: usize,
        digit: u8,
        sum: u64,
        target: u8,
        ps: Cursor,
        qs: Cursor,
    ) -> Step {
        let partial = sum + u64::from(digit) * u64::from(self.candidate.q0);
        let forced = self.forced_digit(partial, target);
        if i >= self.q.len() {
            // Q is already complete, so nothing may be added on its side.
            if forced != 0 {
                return Step::Exhausted;
            }
            self.p[i] = Some(digit);
            let step = self.descend(i, partial, target, ps, qs);
            self.p[i] = None;
            return step;
        }

        let next_qs = match self.check_q(i, forced, qs) {
            Some(next_qs) => next_qs,
            None => return Step::Exhausted,
        };
        self.p[i] = Some(digit);
        self.q[i] = Some(forced);
        let total = partial + u64::from(self.candidate.p0) * u64::from(forced);
        let step = self.descend(i, total, target, ps, next_qs);
        self.p[i] = None;
        self.q[i] = None;
        step
    }

    fn force_q(&mut self, i: usize, sum: u64, target: u8, ps: Cursor, qs: Cursor) -> Step {
        let forced = self.forced_digit(sum, target);
        let next_qs = match self.check_q(i, forced, qs) {
            Some(next_qs) => next_qs,
            None => return Step::Exhausted,
        };
        self.q[i] = Some(forced);
        let total = sum + u64::from(self.candidate.p0) * u64::from(forced);
        let step = self.descend(i, total, target, ps, next_qs);
        self.q[i] = None;
        step
    }

    /// Validates a forced digit of Q against its automaton. Q may never
    /// start with a space, and its first character must finish a word.
    fn check_q(&self, i: usize, digit: u8, qs: Cursor) -> Option<Cursor> {
        let last = i + 1 == self.q.len();
        if digit == SPACE {
            if last {
                return None;
            }
            return self.dict.advance_space(qs);
        }
        let next = self.dict.advance_letter(qs, digit)?;
        if last && !self.dict.is_end_of_word(next) {
            return None;
        }
        Some(next)
    }

    fn descend(&mut self, i: usize, total: u64, target: u8, ps: Cursor, qs: Cursor) -> Step {
        if total & 0xff != u64::from(target) {
            return Step::Exhausted;
        }
        self.step(i + 1, (total - u64::from(target)) >> 8, ps, qs)
    }
}
