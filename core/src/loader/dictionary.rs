// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::loader::Trie;
use std::io::BufRead;
use std::iter::FromIterator;
use tracing::{debug, warn};

const SPACE: u8 = b' ';

/// Position of a phrase-matching automaton: a node in the reversed
/// word trie, plus whether the previous character was a separator.
///
/// Cursors are plain values. Each branch of the search keeps its own
/// copy and advancing one never affects another.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub struct Cursor {
    node: usize,
    after_space: bool,
}

impl Cursor {
    /// True if the last character consumed was a space.
    pub fn after_space(&self) -> bool {
        self.after_space
    }
}

/// A word list stored as a trie of reversed words.
///
/// Phrases are matched from their last character to their first, which
/// is the order the search discovers digits in. Matching the reversed
/// phrase against reversed words is the same as matching the phrase
/// left to right against the words.
#[derive(Clone, Debug, Default)]
pub struct Dictionary {
    trie: Trie,
    words: usize,
    rejected: usize,
}

impl Dictionary {
    /// A dictionary with no words. Every search against it comes back
    /// empty-handed.
    pub fn empty() -> Dictionary {
        Dictionary::default()
    }

    /// Builds a dictionary from lines of text, silently skipping any
    /// line that isn't a non-empty run of `a`-`z` after trimming.
    pub fn from_lines<I, S>(lines: I) -> Dictionary
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut dict = Dictionary::empty();
        for line in lines {
            dict.insert(line.as_ref());
        }
        dict.log_stats();
        dict
    }

    /// Reads a word list line by line. Lines that aren't UTF-8 are
    /// rejected like any other bad line. An I/O error ends loading early
    /// but keeps whatever was already read.
    pub fn from_reader<R: BufRead>(reader: R) -> Dictionary {
        let mut dict = Dictionary::empty();
        for line in reader.split(b'\n') {
            match line {
                Ok(bytes) => match std::str::from_utf8(&bytes) {
                    Ok(line) => {
                        dict.insert(line);
                    }
                    Err(_) => dict.rejected += 1,
                },
                Err(err) => {
                    warn!(words = dict.words, "stopped reading word list: {}", err);
                    break;
                }
            }
        }
        dict.log_stats();
        dict
    }

    /// Adds one line to the dictionary. Returns true if it was accepted
    /// as a new word.
    pub fn insert(&mut self, line: &str) -> bool {
        let word = line.trim();
        if word.is_empty() || !word.bytes().all(|b| b.is_ascii_lowercase()) {
            self.rejected += 1;
            return false;
        }
        let added = self.trie.insert_reversed(word.as_bytes());
        if added {
            self.words += 1;
        }
        added
    }

    fn log_stats(&self) {
        debug!(
            words = self.words,
            nodes = self.trie.len(),
            rejected = self.rejected,
            "built dictionary"
        );
    }

    /// Number of distinct words.
    pub fn word_count(&self) -> usize {
        self.words
    }

    /// Number of trie nodes, including the root.
    pub fn node_count(&self) -> usize {
        self.trie.len()
    }

    /// Number of lines that were discarded while loading.
    pub fn rejected_count(&self) -> usize {
        self.rejected
    }

    pub fn is_empty(&self) -> bool {
        self.words == 0
    }

    pub fn start(&self) -> Cursor {
        Cursor {
            node: Trie::ROOT,
            after_space: false,
        }
    }

    /// Consumes one letter. Fails if no word continues with it.
    pub fn advance_letter(&self, cursor: Cursor, letter: u8) -> Option<Cursor> {
        self.trie.child(cursor.node, letter).map(|node| Cursor {
            node,
            after_space: false,
        })
    }

    /// Consumes a separator. Only allowed right after a complete word,
    /// which also rules out two separators in a row.
    pub fn advance_space(&self, cursor: Cursor) -> Option<Cursor> {
        if cursor.after_space || !self.trie.is_end(cursor.node) {
            return None;
        }
        Some(Cursor {
            node: Trie::ROOT,
            after_space: true,
        })
    }

    pub fn is_end_of_word(&self, cursor: Cursor) -> bool {
        self.trie.is_end(cursor.node)
    }

    /// Checks whether `phrase` is one or more words joined by single
    /// spaces, with no space at either end.
    pub fn accepts(&self, phrase: &str) -> bool {
        let mut cursor = self.start();
        for &byte in phrase.as_bytes().iter().rev() {
            let next = if byte == SPACE {
                self.advance_space(cursor)
            } else {
                self.advance_letter(cursor, byte)
            };
            cursor = match next {
                Some(next) => next,
                None => return false,
            };
        }
        self.is_end_of_word(cursor)
    }
}

impl<'a> FromIterator<&'a str> for Dictionary {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Dictionary {
        Dictionary::from_lines(iter)
    }
}
