//! Error types for the trie and its bit sequences.

use thiserror::Error;

/// Error variants for bit sequence and trie operations.
#[derive(Debug, Error)]
pub enum Error {
    /// A position or dense index was outside the structure's bounds.
    #[error("index out of bounds: {index} (len {len})")]
    IndexOutOfBounds {
        /// The offending position.
        index: usize,
        /// Length of the structure that was indexed.
        len: usize,
    },

    /// A trie was requested for zero keys.
    #[error("cannot build a trie from an empty key set")]
    EmptyKeySet,

    /// An empty key was supplied; carries its position in input order.
    #[error("empty key at input position {0}")]
    EmptyKey(usize),

    /// A reconstructed key was not valid UTF-8.
    #[error("invalid utf-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// A specialized Result type for trie operations.
pub type Result<T> = std::result::Result<T, Error>;

pub(crate) fn out_of_bounds(index: usize, len: usize) -> Error {
    Error::IndexOutOfBounds { index, len }
}
