//! `ChunkIndex` — the ordered map from chunk key to [`Chunk`].
//!
//! Keys are kept in a `BTreeMap`, so the smallest key and the successor of any
//! key are both `O(log C)` lookups for `C` allocated chunks. The index never
//! holds a chunk with zero present slots once a mutation through
//! [`SparseArray`](crate::SparseArray) has completed.

use super::chunk::Chunk;
use core::ops::Bound;
use std::collections::btree_map::{self, BTreeMap};

/// Where an offset lives: which chunk, and which slot inside it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChunkPosition {
    /// `offset / chunk_size`.
    pub key: usize,
    /// `offset % chunk_size`.
    pub slot: usize,
}

impl ChunkPosition {
    /// Splits an offset into its chunk key and slot index.
    #[inline(always)]
    pub const fn from_offset(offset: usize, chunk_size: usize) -> Self {
        Self {
            key: offset / chunk_size,
            slot: offset % chunk_size,
        }
    }

    /// Rebuilds the offset this position was derived from.
    #[inline(always)]
    pub const fn to_offset(self, chunk_size: usize) -> usize {
        self.key * chunk_size + self.slot
    }
}

/// Ordered storage for the allocated chunks of a sparse array.
#[derive(Clone)]
pub struct ChunkIndex<T> {
    chunks: BTreeMap<usize, Chunk<T>>,
}

impl<T> ChunkIndex<T> {
    /// Creates an index with no chunks.
    pub const fn new() -> Self {
        Self {
            chunks: BTreeMap::new(),
        }
    }

    /// Number of allocated chunks.
    #[inline]
    pub fn len(&self) -> usize {
        self.chunks.len()
    }

    /// Returns `true` if no chunk is allocated.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }

    /// Chunk stored under `key`, if allocated.
    #[inline]
    pub fn get(&self, key: usize) -> Option<&Chunk<T>> {
        self.chunks.get(&key)
    }

    /// Mutable access to the chunk stored under `key`.
    #[inline]
    pub fn get_mut(&mut self, key: usize) -> Option<&mut Chunk<T>> {
        self.chunks.get_mut(&key)
    }

    /// Returns the chunk for `key`, allocating `chunk_size` absent slots first
    /// if the key has no chunk yet.
    pub fn get_or_allocate(&mut self, key: usize, chunk_size: usize) -> &mut Chunk<T> {
        match self.chunks.entry(key) {
            btree_map::Entry::Occupied(entry) => entry.into_mut(),
            btree_map::Entry::Vacant(entry) => {
                #[cfg(feature = "tracing")]
                tracing::trace!(chunk_key = key, chunk_size, "allocating chunk");
                entry.insert(Chunk::new(chunk_size))
            }
        }
    }

    /// Drops the chunk for `key` if it holds no present slot.
    ///
    /// Returns `true` if a chunk was freed.
    pub fn release_if_empty(&mut self, key: usize) -> bool {
        let empty = self.chunks.get(&key).is_some_and(Chunk::is_empty);
        if empty {
            self.chunks.remove(&key);
            #[cfg(feature = "tracing")]
            tracing::trace!(chunk_key = key, allocated_chunks = self.chunks.len(), "freed chunk");
        }
        empty
    }

    /// Smallest allocated key.
    #[inline]
    pub fn first_key(&self) -> Option<usize> {
        self.chunks.keys().next().copied()
    }

    /// Smallest allocated key strictly greater than `key`.
    #[inline]
    pub fn successor(&self, key: usize) -> Option<usize> {
        self.chunks
            .range((Bound::Excluded(key), Bound::Unbounded))
            .next()
            .map(|(&k, _)| k)
    }

    /// Removes every chunk.
    pub fn clear(&mut self) {
        self.chunks.clear();
    }

    /// Consumes the index, yielding `(key, chunk)` in ascending key order.
    pub fn into_chunks(self) -> btree_map::IntoIter<usize, Chunk<T>> {
        self.chunks.into_iter()
    }
}

impl<T> Default for ChunkIndex<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_split_and_rebuild() {
        let pos = ChunkPosition::from_offset(1000, 5);
        assert_eq!(pos, ChunkPosition { key: 200, slot: 0 });
        assert_eq!(pos.to_offset(5), 1000);

        let pos = ChunkPosition::from_offset(44, 10);
        assert_eq!(pos, ChunkPosition { key: 4, slot: 4 });
        assert_eq!(ChunkPosition::from_offset(9, 10), ChunkPosition { key: 0, slot: 9 });
    }

    #[test]
    fn test_allocation_is_lazy_and_release_is_conditional() {
        let mut index: ChunkIndex<u8> = ChunkIndex::new();
        assert!(index.is_empty());

        index.get_or_allocate(3, 4).set(1, Some(7));
        index.get_or_allocate(3, 4).set(2, Some(8));
        assert_eq!(index.len(), 1);

        assert!(!index.release_if_empty(3));
        index.get_mut(3).unwrap().remove(1);
        index.get_mut(3).unwrap().remove(2);
        assert!(index.release_if_empty(3));
        assert!(index.get(3).is_none());
        assert!(!index.release_if_empty(3));
    }

    #[test]
    fn test_successor_walks_keys_in_ascending_order() {
        let mut index: ChunkIndex<u8> = ChunkIndex::new();
        for key in [200, 0, 8, 2] {
            index.get_or_allocate(key, 5).set(0, Some(1));
        }
        assert_eq!(index.first_key(), Some(0));
        assert_eq!(index.successor(0), Some(2));
        assert_eq!(index.successor(2), Some(8));
        assert_eq!(index.successor(8), Some(200));
        assert_eq!(index.successor(200), None);
        // Works for keys that are not allocated themselves.
        assert_eq!(index.successor(9), Some(200));
    }
}
