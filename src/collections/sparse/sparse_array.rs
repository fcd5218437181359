//! `SparseArray` — an integer-indexed array that only backs the ranges in use.
//!
//! The offset space is cut into fixed-size chunks of `chunk_size` slots.
//! A chunk is allocated the first time a value lands in its range and freed
//! the moment its last value is removed, so memory tracks the occupied
//! ranges rather than the largest offset.
//!
//! ## Performance Characteristics
//!
//! - **get / set / remove / exists**: O(log C) for `C` allocated chunks
//! - **len**: O(1), the count is maintained incrementally
//! - **capacity**: O(1), `C × chunk_size`
//! - **Full iteration**: O(N + C log C), one ordered-map lookup per chunk crossing
//!
//! ## Element count
//!
//! `len()` follows a deliberately asymmetric rule:
//! - `set` increments the count when an absent slot receives a value;
//! - `remove` decrements it when a present slot is cleared;
//! - `set(offset, None)` clears the slot but leaves the count alone.
//!
//! Use `remove` to clear slots when `len()` must stay exact.
//!
//! ## Usage
//! ```rust
//! use sparse_chunked::SparseArray;
//!
//! let mut fruit: SparseArray<&str> = SparseArray::with_chunk_size(5).unwrap();
//! fruit.set(0, "banana").unwrap();
//! fruit.set(1000, "watermelon").unwrap();
//!
//! assert_eq!(fruit.len(), 2);
//! assert_eq!(fruit.capacity(), 10);
//! assert_eq!(fruit.get(1000).unwrap(), Some(&"watermelon"));
//! assert_eq!(fruit.get(999).unwrap(), None);
//!
//! let offsets: Vec<usize> = fruit.iter().map(|(offset, _)| offset).collect();
//! assert_eq!(offsets, vec![0, 1000]);
//! ```

use super::access::Offset;
use super::chunk::Chunk;
use super::chunk_index::{ChunkIndex, ChunkPosition};
use super::cursor::{Cursor, Iter};
use crate::error::SparseArrayError;
use core::fmt;
use core::iter::FusedIterator;
use num_traits::ToPrimitive;
use std::collections::btree_map;

/// Chunk size used by [`SparseArray::new`].
pub const DEFAULT_CHUNK_SIZE: usize = 10;

/// A sparse array backed by lazily allocated fixed-size chunks.
#[derive(Clone)]
pub struct SparseArray<T> {
    chunk_size: usize,
    chunks: ChunkIndex<T>,
    count: usize,
}

impl<T> SparseArray<T> {
    /// Creates an empty array with [`DEFAULT_CHUNK_SIZE`] slots per chunk.
    pub const fn new() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
            chunks: ChunkIndex::new(),
            count: 0,
        }
    }

    /// Creates an empty array whose chunks hold `chunk_size` slots each.
    ///
    /// # Errors
    /// Returns [`SparseArrayError::InvalidChunkSize`] if `chunk_size` is zero.
    pub fn with_chunk_size(chunk_size: usize) -> Result<Self, SparseArrayError> {
        if chunk_size == 0 {
            return Err(SparseArrayError::InvalidChunkSize);
        }
        Ok(Self {
            chunk_size,
            chunks: ChunkIndex::new(),
            count: 0,
        })
    }

    /// Number of slots per chunk.
    #[inline(always)]
    pub const fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    /// Number of elements, as maintained by `set` and `remove`.
    ///
    /// See the module docs for the one case where this differs from the
    /// number of present slots.
    #[inline(always)]
    pub const fn len(&self) -> usize {
        self.count
    }

    /// Returns `true` if `len()` is zero.
    #[inline(always)]
    pub const fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Number of chunks currently allocated.
    #[inline]
    pub fn chunk_count(&self) -> usize {
        self.chunks.len()
    }

    /// Slot positions currently backed by storage: `chunk_count() × chunk_size()`.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.chunks.len() * self.chunk_size
    }

    /// Returns `true` if `offset` holds a value.
    ///
    /// Offsets that can never hold a value (negative, or wider than `usize`)
    /// simply do not exist.
    pub fn exists<O: Offset>(&self, offset: O) -> bool {
        ToPrimitive::to_usize(&offset).is_some_and(|index| {
            let pos = self.position(index);
            self.chunks
                .get(pos.key)
                .is_some_and(|chunk| chunk.get(pos.slot).is_some())
        })
    }

    /// Returns the value at `offset`, or `None` if the slot is absent.
    ///
    /// # Errors
    /// Returns [`SparseArrayError::InvalidOffset`] for a negative offset or one
    /// that does not fit in `usize`.
    pub fn get<O: Offset>(&self, offset: O) -> Result<Option<&T>, SparseArrayError> {
        let pos = self.locate(offset)?;
        Ok(self.chunks.get(pos.key).and_then(|chunk| chunk.get(pos.slot)))
    }

    /// Returns a mutable reference to the value at `offset`, if present.
    ///
    /// # Errors
    /// Same as [`get`](Self::get).
    pub fn get_mut<O: Offset>(&mut self, offset: O) -> Result<Option<&mut T>, SparseArrayError> {
        let pos = self.locate(offset)?;
        Ok(self
            .chunks
            .get_mut(pos.key)
            .and_then(|chunk| chunk.get_mut(pos.slot)))
    }

    /// Writes `value` at `offset` and returns the previous value.
    ///
    /// Passing a bare `T` stores it; passing `None` clears the slot without
    /// touching `len()`.
    ///
    /// # Errors
    /// Returns [`SparseArrayError::InvalidOffset`] for a negative offset or one
    /// that does not fit in `usize`. Nothing is written in that case.
    pub fn set<O, V>(&mut self, offset: O, value: V) -> Result<Option<T>, SparseArrayError>
    where
        O: Offset,
        V: Into<Option<T>>,
    {
        let pos = self.locate(offset)?;
        Ok(self.set_at(pos, value.into()))
    }

    /// Clears the slot at `offset` and returns the value it held.
    ///
    /// Removing an absent slot is a no-op. Removing the last value of a chunk
    /// frees that chunk.
    ///
    /// # Errors
    /// Returns [`SparseArrayError::InvalidOffset`] for a negative offset or one
    /// that does not fit in `usize`.
    pub fn remove<O: Offset>(&mut self, offset: O) -> Result<Option<T>, SparseArrayError> {
        let pos = self.locate(offset)?;
        Ok(self.remove_at(pos))
    }

    /// Drops every element and frees every chunk.
    pub fn clear(&mut self) {
        self.chunks.clear();
        self.count = 0;
    }

    /// Returns a cursor positioned on the first element.
    pub fn cursor(&self) -> Cursor<'_, T> {
        Cursor::new(self)
    }

    /// Iterates over `(offset, &value)` in ascending offset order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.cursor())
    }

    pub(super) fn chunk_index(&self) -> &ChunkIndex<T> {
        &self.chunks
    }

    #[inline(always)]
    fn position(&self, index: usize) -> ChunkPosition {
        ChunkPosition::from_offset(index, self.chunk_size)
    }

    fn locate<O: Offset>(&self, offset: O) -> Result<ChunkPosition, SparseArrayError> {
        match ToPrimitive::to_usize(&offset) {
            Some(index) => Ok(self.position(index)),
            None => {
                #[cfg(feature = "tracing")]
                tracing::debug!(%offset, "rejected offset");
                Err(SparseArrayError::InvalidOffset {
                    offset: offset.to_string(),
                })
            }
        }
    }

    fn set_at(&mut self, pos: ChunkPosition, value: Option<T>) -> Option<T> {
        match value {
            Some(value) => {
                let previous = self
                    .chunks
                    .get_or_allocate(pos.key, self.chunk_size)
                    .set(pos.slot, Some(value));
                if previous.is_none() {
                    self.count += 1;
                }
                previous
            }
            None => {
                // Never allocates, and never decrements the count.
                let previous = self.chunks.get_mut(pos.key)?.remove(pos.slot);
                if previous.is_some() {
                    self.chunks.release_if_empty(pos.key);
                }
                previous
            }
        }
    }

    fn remove_at(&mut self, pos: ChunkPosition) -> Option<T> {
        let removed = self.chunks.get_mut(pos.key)?.remove(pos.slot)?;
        self.count -= 1;
        self.chunks.release_if_empty(pos.key);
        Some(removed)
    }
}

impl<T> Default for SparseArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for SparseArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<T> Extend<(usize, T)> for SparseArray<T> {
    fn extend<I: IntoIterator<Item = (usize, T)>>(&mut self, iter: I) {
        for (offset, value) in iter {
            let pos = self.position(offset);
            self.set_at(pos, Some(value));
        }
    }
}

impl<T> FromIterator<(usize, T)> for SparseArray<T> {
    fn from_iter<I: IntoIterator<Item = (usize, T)>>(iter: I) -> Self {
        let mut array = Self::new();
        array.extend(iter);
        array
    }
}

impl<'a, T> IntoIterator for &'a SparseArray<T> {
    type Item = (usize, &'a T);
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> IntoIterator for SparseArray<T> {
    type Item = (usize, T);
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            chunk_size: self.chunk_size,
            chunks: self.chunks.into_chunks(),
            current: None,
        }
    }
}

/// Owning iterator over `(offset, value)` in ascending offset order.
pub struct IntoIter<T> {
    chunk_size: usize,
    chunks: btree_map::IntoIter<usize, Chunk<T>>,
    current: Option<(usize, core::iter::Enumerate<std::vec::IntoIter<Option<T>>>)>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = (usize, T);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some((key, slots)) = &mut self.current {
                for (slot, value) in slots.by_ref() {
                    if let Some(value) = value {
                        let pos = ChunkPosition { key: *key, slot };
                        return Some((pos.to_offset(self.chunk_size), value));
                    }
                }
            }
            let (key, chunk) = self.chunks.next()?;
            self.current = Some((key, chunk.into_slots().into_iter().enumerate()));
        }
    }
}

impl<T> FusedIterator for IntoIter<T> {}
