//! Linear-scan rank/select with no index at all.
//!
//! Every query walks the bits from position 0. This is the plain reading of
//! the rank/select contracts and serves as the baseline that
//! [`RankSelectIndex`](crate::RankSelectIndex) is checked and benchmarked
//! against.

use crate::bitvec::BitSequence;
use crate::error::{out_of_bounds, Result};

/// Rank/select by scanning: O(n) per query.
#[derive(Clone, Debug, Default)]
pub struct LinearRankSelect {
    bits: BitSequence,
}

impl LinearRankSelect {
    /// Wrap `bits`.
    pub fn new(bits: BitSequence) -> Self {
        Self { bits }
    }

    /// Count occurrences of `bit` in `[0, pos]`.
    pub fn rank(&self, pos: usize, bit: bool) -> Result<usize> {
        if pos >= self.bits.len() {
            return Err(out_of_bounds(pos, self.bits.len()));
        }
        Ok(self.bits.iter().take(pos + 1).filter(|&b| b == bit).count())
    }

    /// Count ones in `[0, pos]`.
    pub fn rank1(&self, pos: usize) -> Result<usize> {
        self.rank(pos, true)
    }

    /// Count zeros in `[0, pos]`.
    pub fn rank0(&self, pos: usize) -> Result<usize> {
        self.rank(pos, false)
    }

    /// Position of the `k`-th (1-indexed) occurrence of `bit`.
    pub fn select(&self, k: usize, bit: bool) -> Option<usize> {
        if k == 0 {
            return None;
        }
        self.bits
            .iter()
            .enumerate()
            .filter(|&(_, b)| b == bit)
            .nth(k - 1)
            .map(|(i, _)| i)
    }

    /// Position of the `k`-th (1-indexed) one.
    pub fn select1(&self, k: usize) -> Option<usize> {
        self.select(k, true)
    }

    /// Position of the `k`-th (1-indexed) zero.
    pub fn select0(&self, k: usize) -> Option<usize> {
        self.select(k, false)
    }
}
