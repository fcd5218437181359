//! Error types for the containers in this crate.
//!
//! Every fallible operation returns one of these through a `Result`; a call
//! that fails leaves the container exactly as it was.

use thiserror::Error;

/// Errors reported by [`SparseArray`](crate::SparseArray).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SparseArrayError {
    /// The offset cannot address a slot: it is negative or does not fit in `usize`.
    #[error("invalid offset {offset}: expected a non-negative integer that fits in usize")]
    InvalidOffset {
        /// The rejected offset, rendered in decimal.
        offset: String,
    },

    /// A chunk size of zero was requested.
    #[error("invalid chunk size 0: chunks must hold at least one slot")]
    InvalidChunkSize,
}

/// Errors reported by [`OrderedList`](crate::OrderedList).
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListError {
    /// A read or removal at one of the ends was attempted on an empty list.
    #[error("list is empty")]
    Empty,
}
