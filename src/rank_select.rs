//! Rank/select index over a [`BitSequence`].
//!
//! Uses block-sampled rank: the number of ones before every 512-bit block is
//! stored alongside the bits, so `rank` is one sample lookup plus at most
//! eight popcounts. `select` binary-searches the samples for the block that
//! holds the wanted occurrence, then walks that block word by word.
//!
//! # Contracts
//!
//! - `rank1(pos)` counts ones in `[0, pos]` (inclusive) and fails for
//!   `pos >= len`.
//! - `select1(k)` returns the position of the `k`-th one, counting from 1.
//!   `k == 0` and `k` past the last one both give `None`.
//!
//! The zero variants mirror these.

use crate::bitvec::{BitSequence, WORD_LEN};
use crate::error::{out_of_bounds, Result};

/// Number of words covered by one rank sample.
const WORDS_PER_BLOCK: usize = 8;

/// Number of bits covered by one rank sample.
const BITS_PER_BLOCK: usize = WORDS_PER_BLOCK * WORD_LEN;

/// An immutable bit sequence with rank and select support.
#[derive(Clone, PartialEq, Eq)]
pub struct RankSelectIndex {
    bits: BitSequence,
    /// Ones before each block, followed by a sentinel holding the total.
    block_ranks: Vec<usize>,
}

impl std::fmt::Debug for RankSelectIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RankSelectIndex")
            .field("len", &self.len())
            .field("ones", &self.count_ones())
            .field("blocks", &(self.block_ranks.len() - 1))
            .finish()
    }
}

impl RankSelectIndex {
    /// Index `bits`, taking ownership of them.
    pub fn new(bits: BitSequence) -> Self {
        let words = bits.words();
        let num_blocks = words.len().div_ceil(WORDS_PER_BLOCK);
        let mut block_ranks = Vec::with_capacity(num_blocks + 1);

        let mut total = 0usize;
        for block in words.chunks(WORDS_PER_BLOCK) {
            block_ranks.push(total);
            total += block.iter().map(|w| w.count_ones() as usize).sum::<usize>();
        }
        // Sentinel
        block_ranks.push(total);

        Self { bits, block_ranks }
    }

    /// Approximate heap memory usage in bytes, samples included.
    pub fn heap_bytes(&self) -> usize {
        self.bits.heap_bytes() + self.block_ranks.capacity() * std::mem::size_of::<usize>()
    }

    /// Give back the indexed bits, dropping the samples.
    pub fn into_bits(self) -> BitSequence {
        self.bits
    }

    /// Return the total number of bits.
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// Return true if there are no bits.
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Return the bit at `pos`.
    pub fn get(&self, pos: usize) -> Result<bool> {
        self.bits.get(pos)
    }

    /// Return the total number of ones.
    pub fn count_ones(&self) -> usize {
        self.block_ranks[self.block_ranks.len() - 1]
    }

    /// Return the total number of zeros.
    pub fn count_zeros(&self) -> usize {
        self.len() - self.count_ones()
    }

    /// Count occurrences of `bit` in `[0, pos]`.
    pub fn rank(&self, pos: usize, bit: bool) -> Result<usize> {
        if bit {
            self.rank1(pos)
        } else {
            self.rank0(pos)
        }
    }

    /// Count ones in `[0, pos]`.
    pub fn rank1(&self, pos: usize) -> Result<usize> {
        if pos >= self.len() {
            return Err(out_of_bounds(pos, self.len()));
        }
        let words = self.bits.words();
        let word_idx = pos / WORD_LEN;
        let block_idx = pos / BITS_PER_BLOCK;

        let mut rank = self.block_ranks[block_idx];
        for &w in &words[block_idx * WORDS_PER_BLOCK..word_idx] {
            rank += w.count_ones() as usize;
        }
        // Keep bits 0..=offset of the final word.
        let mask = u64::MAX >> (WORD_LEN - 1 - pos % WORD_LEN);
        rank += (words[word_idx] & mask).count_ones() as usize;
        Ok(rank)
    }

    /// Count zeros in `[0, pos]`.
    pub fn rank0(&self, pos: usize) -> Result<usize> {
        Ok(pos + 1 - self.rank1(pos)?)
    }

    /// Position of the `k`-th (1-indexed) occurrence of `bit`.
    pub fn select(&self, k: usize, bit: bool) -> Option<usize> {
        if bit {
            self.select1(k)
        } else {
            self.select0(k)
        }
    }

    /// Position of the `k`-th (1-indexed) one.
    pub fn select1(&self, k: usize) -> Option<usize> {
        if k == 0 || k > self.count_ones() {
            return None;
        }
        // First sample reaching k; the block before it holds the k-th one.
        let block_idx = self.block_ranks.partition_point(|&r| r < k) - 1;
        let remaining = k - self.block_ranks[block_idx];
        self.select_in_block(block_idx, remaining, |w| w)
    }

    /// Position of the `k`-th (1-indexed) zero.
    pub fn select0(&self, k: usize) -> Option<usize> {
        if k == 0 || k > self.count_zeros() {
            return None;
        }
        let mut low = 0;
        let mut high = self.block_ranks.len() - 1;
        while low < high {
            let mid = low + (high - low) / 2;
            if self.zeros_before_block(mid + 1) < k {
                low = mid + 1;
            } else {
                high = mid;
            }
        }
        let remaining = k - self.zeros_before_block(low);
        // Padding bits past len invert to ones here, but k never reaches them.
        self.select_in_block(low, remaining, |w| !w)
    }

    fn zeros_before_block(&self, block_idx: usize) -> usize {
        let start = (block_idx * BITS_PER_BLOCK).min(self.len());
        start - self.block_ranks[block_idx]
    }

    /// Find the `remaining`-th (1-indexed) set bit of `view(word)` in a block.
    fn select_in_block(
        &self,
        block_idx: usize,
        mut remaining: usize,
        view: impl Fn(u64) -> u64,
    ) -> Option<usize> {
        let words = self.bits.words();
        let start = block_idx * WORDS_PER_BLOCK;
        let end = (start + WORDS_PER_BLOCK).min(words.len());
        for (i, &w) in words[start..end].iter().enumerate() {
            let w = view(w);
            let ones = w.count_ones() as usize;
            if remaining <= ones {
                let pos = (start + i) * WORD_LEN + select_in_word(w, remaining - 1);
                return (pos < self.len()).then_some(pos);
            }
            remaining -= ones;
        }
        None
    }
}

/// Position of the `k`-th (0-indexed) set bit of `word`; `k < popcount`.
fn select_in_word(mut word: u64, k: usize) -> usize {
    for _ in 0..k {
        // Clear the lowest set bit.
        word &= word - 1;
    }
    word.trailing_zeros() as usize
}
