//! Ordered, null-skipping traversal of a [`SparseArray`].
//!
//! A [`Cursor`] is a `(chunk key, slot index)` position that only ever rests
//! on a present slot. Moving forward first scans the rest of the current
//! chunk, then hops to the next allocated chunk through the ordered chunk
//! index. When neither yields a slot the cursor becomes invalid.
//!
//! Cursors borrow the array, so the array cannot be mutated while one is
//! alive. Any number of cursors may walk the same array independently.
//!
//! ```rust
//! use sparse_chunked::SparseArray;
//!
//! let mut array: SparseArray<char> = SparseArray::with_chunk_size(4).unwrap();
//! array.set(9, 'b').unwrap();
//! array.set(2, 'a').unwrap();
//!
//! let mut cursor = array.cursor();
//! assert_eq!((cursor.key(), cursor.current()), (Some(2), Some(&'a')));
//! cursor.advance();
//! assert_eq!((cursor.key(), cursor.current()), (Some(9), Some(&'b')));
//! cursor.advance();
//! assert!(!cursor.valid());
//!
//! cursor.rewind();
//! assert_eq!(cursor.key(), Some(2));
//! ```

use super::chunk_index::{ChunkIndex, ChunkPosition};
use super::sparse_array::SparseArray;
use core::iter::FusedIterator;

/// A position over the present slots of a [`SparseArray`].
pub struct Cursor<'a, T> {
    array: &'a SparseArray<T>,
    position: Option<ChunkPosition>,
}

impl<'a, T> Cursor<'a, T> {
    pub(super) fn new(array: &'a SparseArray<T>) -> Self {
        let mut cursor = Self {
            array,
            position: None,
        };
        cursor.rewind();
        cursor
    }

    #[inline(always)]
    fn index(&self) -> &'a ChunkIndex<T> {
        self.array.chunk_index()
    }

    /// First present slot in chunk `key` or any chunk after it.
    fn seek_from(&self, key: usize) -> Option<ChunkPosition> {
        let index = self.index();
        let mut key = key;
        loop {
            if let Some(slot) = index.get(key).and_then(|chunk| chunk.first_occupied()) {
                return Some(ChunkPosition { key, slot });
            }
            key = index.successor(key)?;
        }
    }

    /// Moves to the element with the smallest offset, or invalidates the
    /// cursor if the array holds nothing.
    pub fn rewind(&mut self) {
        self.position = self.index().first_key().and_then(|key| self.seek_from(key));
        #[cfg(feature = "tracing")]
        {
            if self.position.is_none() {
                tracing::trace!("cursor rewound over an empty array");
            }
        }
    }

    /// Returns `true` while the cursor rests on an element.
    #[inline]
    pub fn valid(&self) -> bool {
        self.position.is_some()
    }

    /// Value under the cursor.
    pub fn current(&self) -> Option<&'a T> {
        let pos = self.position?;
        self.index().get(pos.key)?.get(pos.slot)
    }

    /// Offset under the cursor: `chunk key × chunk size + slot index`.
    pub fn key(&self) -> Option<usize> {
        self.position
            .map(|pos| pos.to_offset(self.array.chunk_size()))
    }

    /// Moves to the next element in ascending offset order.
    ///
    /// Does nothing once the cursor is invalid.
    pub fn advance(&mut self) {
        let Some(pos) = self.position else {
            return;
        };
        let index = self.index();
        let within = if pos.slot + 1 < self.array.chunk_size() {
            index.get(pos.key).and_then(|chunk| chunk.next_occupied(pos.slot + 1))
        } else {
            None
        };
        self.position = match within {
            Some(slot) => Some(ChunkPosition { key: pos.key, slot }),
            // Chunk boundary: continue with the next allocated chunk.
            None => index.successor(pos.key).and_then(|next| self.seek_from(next)),
        };
    }
}

impl<T> Clone for Cursor<'_, T> {
    fn clone(&self) -> Self {
        Self {
            array: self.array,
            position: self.position,
        }
    }
}

/// Iterator over `(offset, &value)` pairs in ascending offset order.
pub struct Iter<'a, T> {
    cursor: Cursor<'a, T>,
    yielded: usize,
}

impl<'a, T> Iter<'a, T> {
    pub(super) fn new(cursor: Cursor<'a, T>) -> Self {
        Self { cursor, yielded: 0 }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = (usize, &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        let offset = self.cursor.key()?;
        let value = self.cursor.current()?;
        self.cursor.advance();
        self.yielded += 1;
        Some((offset, value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if !self.cursor.valid() {
            return (0, Some(0));
        }
        // `len()` never undercounts present slots.
        (1, Some(self.cursor.array.len().saturating_sub(self.yielded)))
    }
}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            cursor: self.cursor.clone(),
            yielded: self.yielded,
        }
    }
}
