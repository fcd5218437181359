//! # `sparse_chunked` - Chunked Sparse Array
//!
//! An in-memory, integer-indexed container for huge, sparsely populated
//! offset spaces. Storage is allocated in fixed-size chunks only for the
//! ranges that hold values, and a chunk is freed as soon as its range
//! becomes empty again.
//!
//! ## Key Features
//!
//! - **Lazy allocation**: the first write into a range allocates its chunk
//! - **Eager reclamation**: removing the last value of a range frees its chunk
//! - **O(1) length**: the element count is maintained incrementally
//! - **Ordered traversal**: cursors and iterators visit present offsets in
//!   ascending order, skipping empty slots and unallocated ranges
//!
//! ## Architecture
//!
//! 1. **`Chunk`**: fixed-capacity block of optional slots
//! 2. **`ChunkIndex`**: ordered map from chunk key (`offset / chunk_size`) to chunk
//! 3. **`SparseArray`**: the public container, behind the `OffsetAccess` trait
//! 4. **`Cursor`**: `(chunk key, slot index)` traversal state
//!
//! [`OrderedList`] is an independent arena-backed doubly linked list with
//! O(1) operations at both ends.
//!
//! ## Example
//!
//! ```rust
//! use sparse_chunked::SparseArray;
//!
//! let mut ids: SparseArray<&str> = SparseArray::new();
//! ids.set(29_004, "carol").unwrap();
//! ids.set(12, "alice").unwrap();
//!
//! assert_eq!(ids.len(), 2);
//! assert_eq!(ids.capacity(), 20);
//! assert!(ids.exists(12));
//!
//! ids.remove(12).unwrap();
//! assert_eq!(ids.capacity(), 10);
//! assert_eq!(ids.iter().collect::<Vec<_>>(), vec![(29_004, &"carol")]);
//! ```
//!
//! ## Features
//!
//! - `tracing`: emits `tracing` events on chunk allocation, chunk release and
//!   rejected offsets.

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod collections;
pub mod error;

pub use collections::{Cursor, OffsetAccess, OrderedList, SparseArray, DEFAULT_CHUNK_SIZE};
pub use error::{ListError, SparseArrayError};

// Compile-time assertions for memory layout
const _: () = {
    use core::mem;

    // Cursors are a borrowed pointer plus an optional position, nothing more.
    assert!(mem::size_of::<Cursor<'static, u64>>() <= mem::size_of::<usize>() * 4);
};
