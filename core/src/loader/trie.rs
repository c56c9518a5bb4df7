// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::num::NonZeroU32;

const ALPHABET: usize = 26;

#[derive(Clone, Debug, Default)]
struct Node {
    // The root is never anyone's child, so index 0 doubles as "no edge".
    children: [Option<NonZeroU32>; ALPHABET],
    end: bool,
}

/// Arena-backed trie over lowercase ASCII words. Nodes are addressed
/// by index, with the root at [`Trie::ROOT`].
#[derive(Clone, Debug)]
pub struct Trie {
    nodes: Vec<Node>,
}

impl Trie {
    pub const ROOT: usize = 0;

    pub fn new() -> Trie {
        Trie {
            nodes: vec![Node::default()],
        }
    }

    /// Inserts `word` walking it from its last byte to its first.
    /// Returns true if the word was not already present. Words that
    /// aren't a non-empty run of `a`-`z` are refused.
    pub fn insert_reversed(&mut self, word: &[u8]) -> bool {
        if word.is_empty() || !word.iter().all(u8::is_ascii_lowercase) {
            return false;
        }
        let mut cur = Trie::ROOT;
        for &byte in word.iter().rev() {
            let slot = usize::from(byte - b'a');
            let existing = self.nodes[cur].children[slot];
            cur = match existing {
                Some(next) => next.get() as usize,
                None => match self.push_node() {
                    Some(next) => {
                        self.nodes[cur].children[slot] = Some(next);
                        next.get() as usize
                    }
                    None => return false,
                },
            };
        }
        let added = !self.nodes[cur].end;
        self.nodes[cur].end = true;
        added
    }

    fn push_node(&mut self) -> Option<NonZeroU32> {
        let id = u32::try_from(self.nodes.len()).ok().and_then(NonZeroU32::new)?;
        self.nodes.push(Node::default());
        Some(id)
    }

    /// Follows the edge for `letter` out of `node`, if there is one.
    pub fn child(&self, node: usize, letter: u8) -> Option<usize> {
        if !letter.is_ascii_lowercase() {
            return None;
        }
        self.nodes
            .get(node)?
            .children[usize::from(letter - b'a')]
            .map(|next| next.get() as usize)
    }

    pub fn is_end(&self, node: usize) -> bool {
        self.nodes.get(node).map_or(false, |node| node.end)
    }

    /// Number of nodes, including the root.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }
}

impl Default for Trie {
    fn default() -> Trie {
        Trie::new()
    }
}
