//! Append-only bit sequence.
//!
//! Bits are packed little-endian into 64-bit words: bit `i` lives in word
//! `i / 64` at offset `i % 64`. Bits past `len` in the last word are always
//! zero, which the rank/select index relies on.

use std::fmt;

use crate::error::{out_of_bounds, Result};

/// The number of bits in a storage word.
pub const WORD_LEN: usize = 64;

/// An append-only sequence of bits with positional reads.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct BitSequence {
    words: Vec<u64>,
    len: usize,
}

impl fmt::Debug for BitSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BitSequence")
            .field("len", &self.len)
            .field("ones", &self.count_ones())
            .finish()
    }
}

/// Prints the bits as a string of `0` and `1`, position 0 first.
impl fmt::Display for BitSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for bit in self.iter() {
            f.write_str(if bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}

impl BitSequence {
    /// Create an empty sequence.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a sequence from a stream of bits.
    pub fn from_bits<I>(bits: I) -> Self
    where
        I: IntoIterator<Item = bool>,
    {
        let mut this = Self::new();
        bits.into_iter().for_each(|b| this.push(b));
        this
    }

    /// Append one bit.
    pub fn push(&mut self, bit: bool) {
        let offset = self.len % WORD_LEN;
        if offset == 0 {
            self.words.push(0);
        }
        if bit {
            // A word was pushed above whenever offset was 0.
            if let Some(last) = self.words.last_mut() {
                *last |= 1u64 << offset;
            }
        }
        self.len += 1;
    }

    /// Append `count` copies of `bit`.
    pub fn push_n(&mut self, bit: bool, count: usize) {
        for _ in 0..count {
            self.push(bit);
        }
    }

    /// Return the bit at `pos`.
    ///
    /// # Errors
    ///
    /// [`Error::IndexOutOfBounds`](crate::Error::IndexOutOfBounds) if `pos >= self.len()`.
    pub fn get(&self, pos: usize) -> Result<bool> {
        if pos >= self.len {
            return Err(out_of_bounds(pos, self.len));
        }
        Ok(self.bit(pos))
    }

    /// Return the number of bits.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Return true if no bits have been pushed.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Return the number of set bits in the whole sequence.
    pub fn count_ones(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// Iterate over the bits in position order.
    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        (0..self.len).map(move |i| self.bit(i))
    }

    /// Approximate heap memory usage in bytes.
    pub fn heap_bytes(&self) -> usize {
        self.words.capacity() * 8
    }

    pub(crate) fn words(&self) -> &[u64] {
        &self.words
    }

    #[inline]
    pub(crate) fn bit(&self, pos: usize) -> bool {
        (self.words[pos / WORD_LEN] >> (pos % WORD_LEN)) & 1 == 1
    }
}

impl FromIterator<bool> for BitSequence {
    fn from_iter<I: IntoIterator<Item = bool>>(iter: I) -> Self {
        Self::from_bits(iter)
    }
}
