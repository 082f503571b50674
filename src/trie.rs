//! The LOUDS trie query engine.
//!
//! # Encoding
//!
//! Every node except the super-root is the `1` bit in its parent's child
//! run; that bit's position is the node's *node id*. The super-root's run is
//! `10` and its single child, the root, has node id 0. Navigation is pure
//! rank/select arithmetic:
//!
//! - `parent(x) = select1(rank0(x))`
//! - `first_child(x) = select0(rank1(x)) + 1`, if that bit is `1`
//!
//! Terminal flags and edge labels are indexed by the *dense index*
//! `rank1(x) - 2`, i.e. level order without the super-root and root.
//!
//! # Example
//!
//! ```
//! # fn main() -> louds_trie::Result<()> {
//! use louds_trie::LoudsTrie;
//!
//! let trie = LoudsTrie::new(["perl", "perl6", "is"])?;
//! let hits = trie.common_prefix_search("perl6 is fun")?;
//! assert_eq!(hits.len(), 2);
//! assert_eq!(trie.id2str(hits[0])?, "perl");
//! assert_eq!(trie.id2str(hits[1])?, "perl6");
//! # Ok(())
//! # }
//! ```

use crate::bitvec::BitSequence;
use crate::builder::TrieBuilder;
use crate::error::{out_of_bounds, Result};
use crate::rank_select::RankSelectIndex;

/// Node id of the root, the super-root's only child.
pub const ROOT: usize = 0;

/// Ones preceding the first labelled node: the super-root's and the root's.
const PREAMBLE_ONES: usize = 2;

/// An immutable trie over byte strings in LOUDS form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoudsTrie {
    lbs: RankSelectIndex,
    terminal: BitSequence,
    labels: Vec<u8>,
}

impl LoudsTrie {
    /// Build a trie from `keys`, in any order, duplicates allowed.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyKeySet`](crate::Error::EmptyKeySet) for no keys,
    /// [`Error::EmptyKey`](crate::Error::EmptyKey) for an empty key.
    pub fn new<I, K>(keys: I) -> Result<Self>
    where
        I: IntoIterator<Item = K>,
        K: AsRef<[u8]>,
    {
        let mut builder = TrieBuilder::new();
        builder.extend(keys);
        builder.build()
    }

    /// Assemble a trie from already-built structures, taking ownership.
    ///
    /// Nothing is validated. Structures that break the LOUDS invariants
    /// surface as `IndexOutOfBounds` errors or wrong answers from queries.
    pub fn from_parts(lbs: BitSequence, terminal: BitSequence, labels: Vec<u8>) -> Self {
        Self {
            lbs: RankSelectIndex::new(lbs),
            terminal,
            labels,
        }
    }

    /// Give the structures back.
    pub fn into_parts(self) -> (BitSequence, BitSequence, Vec<u8>) {
        (self.lbs.into_bits(), self.terminal, self.labels)
    }

    /// The LOUDS bits with their rank/select index.
    pub fn lbs(&self) -> &RankSelectIndex {
        &self.lbs
    }

    /// Terminal flags, by dense index.
    pub fn terminal(&self) -> &BitSequence {
        &self.terminal
    }

    /// Edge labels, by dense index.
    pub fn labels(&self) -> &[u8] {
        &self.labels
    }

    /// Number of labelled nodes (every node but the super-root and root).
    pub fn num_nodes(&self) -> usize {
        self.labels.len()
    }

    /// Number of stored keys.
    pub fn num_keys(&self) -> usize {
        self.terminal.count_ones()
    }

    /// Approximate heap memory usage in bytes.
    pub fn heap_bytes(&self) -> usize {
        self.lbs.heap_bytes() + self.terminal.heap_bytes() + self.labels.capacity()
    }

    /// Return true if the node with dense index `id` ends a stored key.
    pub fn is_terminal(&self, id: usize) -> Result<bool> {
        self.terminal.get(id)
    }

    /// Dense index of node id `pos`, or `None` for the root.
    pub fn dense_index(&self, pos: usize) -> Result<Option<usize>> {
        Ok(self.lbs.rank1(pos)?.checked_sub(PREAMBLE_ONES))
    }

    /// Node id of dense index `id`, or `None` if there is no such node.
    pub fn node_id(&self, id: usize) -> Option<usize> {
        self.lbs.select1(id + PREAMBLE_ONES)
    }

    /// Node id of the parent of `x`, or `None` for the root.
    pub fn parent(&self, x: usize) -> Result<Option<usize>> {
        Ok(self.lbs.select1(self.lbs.rank0(x)?))
    }

    /// Node id of the first child of `x`, or `None` if `x` is a leaf.
    pub fn first_child(&self, x: usize) -> Result<Option<usize>> {
        let y = match self.lbs.select0(self.lbs.rank1(x)?) {
            Some(end) => end + 1,
            None => return Ok(None),
        };
        if y < self.lbs.len() && self.lbs.get(y)? {
            Ok(Some(y))
        } else {
            Ok(None)
        }
    }

    /// Node id of the child of `pos` reached by `symbol`, if any.
    ///
    /// Children sit in one run of `1` bits in ascending label order.
    pub fn traverse(&self, pos: usize, symbol: u8) -> Result<Option<usize>> {
        let mut child = match self.first_child(pos)? {
            Some(child) => child,
            None => return Ok(None),
        };
        let mut id = self.label_index(child)?;
        while child < self.lbs.len() && self.lbs.get(child)? && id < self.labels.len() {
            if self.labels[id] == symbol {
                return Ok(Some(child));
            }
            child += 1;
            id += 1;
        }
        Ok(None)
    }

    /// Dense indices of the stored keys that are prefixes of `query`,
    /// shortest first.
    pub fn common_prefix_search(&self, query: impl AsRef<[u8]>) -> Result<Vec<usize>> {
        let mut hits = Vec::new();
        let mut pos = ROOT;
        for &symbol in query.as_ref() {
            pos = match self.traverse(pos, symbol)? {
                Some(next) => next,
                None => break,
            };
            let id = self.label_index(pos)?;
            if self.terminal.get(id)? {
                hits.push(id);
            }
        }
        Ok(hits)
    }

    /// Spell the path from the root to the node with dense index `id`.
    ///
    /// # Errors
    ///
    /// [`Error::IndexOutOfBounds`](crate::Error::IndexOutOfBounds) if
    /// `id >= self.num_nodes()`.
    pub fn id2word(&self, id: usize) -> Result<Vec<u8>> {
        if id >= self.labels.len() {
            return Err(out_of_bounds(id, self.labels.len()));
        }
        let mut pos = self
            .node_id(id)
            .ok_or_else(|| out_of_bounds(id + PREAMBLE_ONES, self.lbs.count_ones()))?;

        let mut word = Vec::new();
        while pos != ROOT {
            let m = self.label_index(pos)?;
            let label = self
                .labels
                .get(m)
                .ok_or_else(|| out_of_bounds(m, self.labels.len()))?;
            word.push(*label);
            let parent = match self.parent(pos)? {
                Some(parent) => parent,
                None => break,
            };
            // Parents come earlier in level order; anything else is a cycle.
            if parent >= pos {
                return Err(out_of_bounds(pos, self.lbs.len()));
            }
            pos = parent;
        }
        word.reverse();
        Ok(word)
    }

    /// [`id2word`](Self::id2word), decoded as UTF-8.
    pub fn id2str(&self, id: usize) -> Result<String> {
        Ok(String::from_utf8(self.id2word(id)?)?)
    }

    /// Dense index of a node id that is known to be below the root.
    fn label_index(&self, pos: usize) -> Result<usize> {
        self.dense_index(pos)?.ok_or_else(|| out_of_bounds(pos, self.lbs.len()))
    }
}
