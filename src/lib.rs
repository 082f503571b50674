//! # LOUDS Trie
//!
//! *A static string set in about two bits per node, plus one label byte.*
//!
//! ## Intuition First
//!
//! A pointer trie spends a machine word on every edge. Yet the shape of a
//! tree is tiny information: write the nodes out level by level, and for
//! each one emit a `1` per child followed by a `0`. That bit string
//! (the LOUDS sequence) is all a trie needs to walk up and down, provided
//! we can count bits quickly.
//!
//! ## Navigation
//!
//! A node is identified by the position of the `1` bit that points at it.
//! With `rank` (count bits up to a position) and `select` (find the k-th
//! bit) both directions are arithmetic:
//!
//! - parent: `select1(rank0(x))`
//! - first child: `select0(rank1(x)) + 1`
//!
//! Edge labels and terminal flags sit in plain arrays indexed by
//! `rank1(x) - 2`, the node's position in level order.
//!
//! ## Queries
//!
//! - `common_prefix_search(q)`: every stored key that is a prefix of `q`,
//!   shortest first, as dense node indices.
//! - `id2word(i)`: walk parents from node `i` back to the root to spell it.
//!
//! ## Complexity Analysis
//!
//! - **Space**: $2n + O(1)$ LOUDS bits, one terminal bit and one label byte
//!   per node, plus one rank sample per 512 bits.
//! - **rank**: $O(1)$, a sample lookup and at most eight popcounts.
//! - **select**: $O(\log n)$, a binary search over the samples.
//! - **common_prefix_search(q)**: $O(|q| \cdot (\sigma + \log n))$, where
//!   $\sigma$ bounds the children scanned per step.
//! - **id2word**: $O(d \log n)$ for a node at depth $d$.
//!
//! ## What Could Go Wrong
//!
//! 1. **Static**: adding or removing a key means rebuilding from scratch.
//! 2. **Bytes, not characters**: keys are compared and split byte by byte,
//!    so a multi-byte UTF-8 character spans several nodes.
//!
//! ## References
//!
//! - Jacobson, G. (1989). "Space-efficient Static Trees and Graphs."
//! - Delpratt, O., Rahman, N., & Raman, R. (2006). "Engineering the LOUDS
//!   Succinct Tree Representation."

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod bitvec;
pub mod builder;
pub mod error;
pub mod implicit;
pub mod rank_select;
pub mod trie;

pub use bitvec::BitSequence;
pub use builder::{TrieBuilder, TrieParts};
pub use error::{Error, Result};
pub use implicit::LinearRankSelect;
pub use rank_select::RankSelectIndex;
pub use trie::LoudsTrie;
