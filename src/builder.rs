//! Breadth-first construction of the LOUDS encoding.
//!
//! Keys are sorted and deduplicated, so every trie node at depth `d + 1`
//! corresponds to a maximal run of keys sharing their first `d + 1` bytes.
//! The builder walks those runs level by level with an explicit queue of
//! key ranges, emitting for each node its terminal flag, its edge label and
//! its child run (`1` per child, then `0`). Nodes are therefore numbered in
//! level order, which is the order LOUDS assigns to the `1` bits.

use std::collections::VecDeque;

use crate::bitvec::BitSequence;
use crate::error::{Error, Result};
use crate::trie::LoudsTrie;

/// The raw structures of a LOUDS trie: bits, terminal flags, edge labels.
pub type TrieParts = (BitSequence, BitSequence, Vec<u8>);

/// A pending BFS step: keys in `[left, right)` share their first `depth`
/// bytes, and their byte at `depth` is branched on next.
#[derive(Debug, Clone, Copy)]
struct Span {
    depth: usize,
    left: usize,
    right: usize,
}

/// Collects keys and builds a [`LoudsTrie`] from them.
///
/// Keys may arrive in any order and may repeat.
#[derive(Debug, Clone, Default)]
pub struct TrieBuilder {
    keys: Vec<Vec<u8>>,
}

impl TrieBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one key.
    pub fn push(&mut self, key: impl AsRef<[u8]>) -> &mut Self {
        self.keys.push(key.as_ref().to_vec());
        self
    }

    /// Return the number of keys added so far, duplicates included.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Return true if no keys have been added.
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Build the trie.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyKeySet`] if no keys were added, [`Error::EmptyKey`] if
    /// any key is empty.
    pub fn build(self) -> Result<LoudsTrie> {
        let (lbs, terminal, labels) = self.build_parts()?;
        Ok(LoudsTrie::from_parts(lbs, terminal, labels))
    }

    /// Build the raw LOUDS bits, terminal flags and edge labels.
    pub fn build_parts(self) -> Result<TrieParts> {
        if self.keys.is_empty() {
            return Err(Error::EmptyKeySet);
        }
        if let Some(pos) = self.keys.iter().position(|k| k.is_empty()) {
            return Err(Error::EmptyKey(pos));
        }

        let mut keys = self.keys;
        keys.sort_unstable();
        keys.dedup();

        let mut lbs = BitSequence::new();
        let mut terminal = BitSequence::new();
        let mut labels = Vec::new();

        // Super-root: a single child, the root.
        lbs.push(true);
        lbs.push(false);
        // Root: one child per distinct first byte.
        lbs.push_n(true, distinct_at(&keys, 0));
        lbs.push(false);

        let mut queue = VecDeque::new();
        queue.push_back(Span {
            depth: 0,
            left: 0,
            right: keys.len(),
        });

        while let Some(Span { depth, left, right }) = queue.pop_front() {
            let mut start = left;
            while start < right {
                let byte = keys[start][depth];
                let end = start + keys[start..right].partition_point(|k| k[depth] == byte);
                let node = &keys[start..end];

                // Sorted and deduplicated: only the first key can end here.
                let ends_here = node[0].len() == depth + 1;
                terminal.push(ends_here);
                lbs.push_n(true, distinct_at(node, depth + 1));
                lbs.push(false);
                labels.push(byte);

                let deeper = start + usize::from(ends_here);
                if deeper < end {
                    queue.push_back(Span {
                        depth: depth + 1,
                        left: deeper,
                        right: end,
                    });
                }
                start = end;
            }
        }

        Ok((lbs, terminal, labels))
    }
}

impl<K: AsRef<[u8]>> Extend<K> for TrieBuilder {
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        self.keys.extend(iter.into_iter().map(|k| k.as_ref().to_vec()));
    }
}

/// Number of distinct bytes at `depth` among sorted `keys` long enough to
/// have one.
fn distinct_at(keys: &[Vec<u8>], depth: usize) -> usize {
    let mut count = 0;
    let mut prev = None;
    for byte in keys.iter().filter_map(|k| k.get(depth)) {
        if prev != Some(byte) {
            count += 1;
            prev = Some(byte);
        }
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parts(keys: &[&str]) -> TrieParts {
        let mut builder = TrieBuilder::new();
        builder.extend(keys);
        builder.build_parts().unwrap()
    }

    #[test]
    fn test_single_byte_key() {
        let (lbs, terminal, labels) = parts(&["a"]);
        assert_eq!(lbs.to_string(), "10100");
        assert_eq!(terminal.to_string(), "1");
        assert_eq!(labels, b"a");
    }

    #[test]
    fn test_level_order_layout() {
        let (lbs, terminal, labels) = parts(&["perl6", "is"]);
        // super-root, root(i, p), i(s), p(e), s(), e(r), r(l), l(6), 6()
        assert_eq!(lbs.to_string(), "10110101001010100");
        assert_eq!(labels, b"ipserl6");
        assert_eq!(terminal.to_string(), "0010001");
    }

    #[test]
    fn test_prefix_key_is_terminal_inner_node() {
        let (lbs, terminal, labels) = parts(&["perl6", "perl"]);
        assert_eq!(lbs.to_string(), "1010101010100");
        assert_eq!(labels, b"perl6");
        assert_eq!(terminal.to_string(), "00011");
    }

    #[test]
    fn test_shared_prefix_with_many_children() {
        let (lbs, terminal, labels) = parts(&["ab", "ac", "a", "b"]);
        // root(a, b), a(b, c), b(), ab(), ac()
        assert_eq!(lbs.to_string(), "10110110000");
        assert_eq!(labels, b"abbc");
        assert_eq!(terminal.to_string(), "1111");
    }

    #[test]
    fn test_order_and_duplicates_do_not_matter() {
        let a = parts(&["tea", "ten", "to", "inn", "in", "i", "a"]);
        let b = parts(&["a", "to", "i", "in", "ten", "inn", "tea", "to", "a"]);
        assert_eq!(a, b);
    }

    #[test]
    fn test_rejects_empty_input() {
        assert!(matches!(
            TrieBuilder::new().build_parts(),
            Err(Error::EmptyKeySet)
        ));

        let mut builder = TrieBuilder::new();
        builder.push("ok").push("").push("fine");
        assert!(matches!(builder.build_parts(), Err(Error::EmptyKey(1))));
    }
}
