//! `OrderedList` — an arena-backed doubly linked list with O(1) ends.
//!
//! Nodes live in a `Vec` arena and refer to their neighbours by index, so the
//! list owns every node and no node owns another. Freed slots go onto a free
//! list and are reused by later insertions.
//!
//! # Layout
//! Structure-of-Arrays:
//! - `links`: prev/next indices, or the next free slot for vacant entries.
//! - `values`: element data, `Some` exactly where `links` is occupied.
//!
//! ```rust
//! use sparse_chunked::OrderedList;
//!
//! let mut list = OrderedList::new();
//! list.push(2);
//! list.push(3);
//! list.unshift(1);
//!
//! assert_eq!(list.top(), Ok(&1));
//! assert_eq!(list.bottom(), Ok(&3));
//! assert_eq!(list.shift(), Ok(1));
//! assert_eq!(list.pop(), Ok(3));
//! assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![2]);
//! ```

use crate::error::ListError;
use core::fmt;
use core::iter::FusedIterator;

/// A slot in the links vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LinkSlot {
    Occupied { prev: Option<usize>, next: Option<usize> },
    Free(Option<usize>), // Next free slot index
}

/// A doubly linked list stored in an index-addressed arena.
#[derive(Clone)]
pub struct OrderedList<T> {
    links: Vec<LinkSlot>,
    values: Vec<Option<T>>,

    head: Option<usize>,
    tail: Option<usize>,
    free_head: Option<usize>,
    len: usize,
}

impl<T> OrderedList<T> {
    /// Creates an empty list.
    pub const fn new() -> Self {
        Self {
            links: Vec::new(),
            values: Vec::new(),
            head: None,
            tail: None,
            free_head: None,
            len: 0,
        }
    }

    /// Number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the list holds no element.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Removes every element and releases the arena.
    pub fn clear(&mut self) {
        self.links.clear();
        self.values.clear();
        self.head = None;
        self.tail = None;
        self.free_head = None;
        self.len = 0;
    }

    /// Allocates a node slot, reusing a free one when available.
    fn alloc(&mut self, value: T, prev: Option<usize>, next: Option<usize>) -> usize {
        let link = LinkSlot::Occupied { prev, next };
        match self.free_head {
            Some(idx) => {
                self.free_head = match self.links[idx] {
                    LinkSlot::Free(next_free) => next_free,
                    LinkSlot::Occupied { .. } => unreachable!("free list points at an occupied slot"),
                };
                self.links[idx] = link;
                self.values[idx] = Some(value);
                idx
            }
            None => {
                self.links.push(link);
                self.values.push(Some(value));
                self.links.len() - 1
            }
        }
    }

    /// Moves the value out of `idx` and puts the slot on the free list.
    ///
    /// Caller must relink the neighbours.
    fn free(&mut self, idx: usize) -> T {
        self.links[idx] = LinkSlot::Free(self.free_head);
        self.free_head = Some(idx);
        self.len -= 1;
        self.values[idx]
            .take()
            .unwrap_or_else(|| unreachable!("occupied slot without a value"))
    }

    fn links_of(&self, idx: usize) -> (Option<usize>, Option<usize>) {
        match self.links[idx] {
            LinkSlot::Occupied { prev, next } => (prev, next),
            LinkSlot::Free(_) => unreachable!("list end points at a free slot"),
        }
    }

    fn set_prev(&mut self, idx: usize, to: Option<usize>) {
        if let LinkSlot::Occupied { prev, .. } = &mut self.links[idx] {
            *prev = to;
        }
    }

    fn set_next(&mut self, idx: usize, to: Option<usize>) {
        if let LinkSlot::Occupied { next, .. } = &mut self.links[idx] {
            *next = to;
        }
    }

    /// Appends `value` at the back.
    pub fn push(&mut self, value: T) {
        let old_tail = self.tail;
        let new_idx = self.alloc(value, old_tail, None);
        match old_tail {
            Some(tail_idx) => self.set_next(tail_idx, Some(new_idx)),
            None => self.head = Some(new_idx),
        }
        self.tail = Some(new_idx);
        self.len += 1;
    }

    /// Prepends `value` at the front.
    pub fn unshift(&mut self, value: T) {
        let old_head = self.head;
        let new_idx = self.alloc(value, None, old_head);
        match old_head {
            Some(head_idx) => self.set_prev(head_idx, Some(new_idx)),
            None => self.tail = Some(new_idx),
        }
        self.head = Some(new_idx);
        self.len += 1;
    }

    /// Removes and returns the back element.
    ///
    /// # Errors
    /// [`ListError::Empty`] if the list is empty.
    pub fn pop(&mut self) -> Result<T, ListError> {
        let tail_idx = self.tail.ok_or(ListError::Empty)?;
        let (prev, _) = self.links_of(tail_idx);
        match prev {
            Some(prev_idx) => self.set_next(prev_idx, None),
            None => self.head = None,
        }
        self.tail = prev;
        Ok(self.free(tail_idx))
    }

    /// Removes and returns the front element.
    ///
    /// # Errors
    /// [`ListError::Empty`] if the list is empty.
    pub fn shift(&mut self) -> Result<T, ListError> {
        let head_idx = self.head.ok_or(ListError::Empty)?;
        let (_, next) = self.links_of(head_idx);
        match next {
            Some(next_idx) => self.set_prev(next_idx, None),
            None => self.tail = None,
        }
        self.head = next;
        Ok(self.free(head_idx))
    }

    /// Front element.
    ///
    /// # Errors
    /// [`ListError::Empty`] if the list is empty.
    pub fn top(&self) -> Result<&T, ListError> {
        self.head
            .and_then(|idx| self.values[idx].as_ref())
            .ok_or(ListError::Empty)
    }

    /// Back element.
    ///
    /// # Errors
    /// [`ListError::Empty`] if the list is empty.
    pub fn bottom(&self) -> Result<&T, ListError> {
        self.tail
            .and_then(|idx| self.values[idx].as_ref())
            .ok_or(ListError::Empty)
    }

    /// Iterates front to back.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            list: self,
            front: self.head,
            back: self.tail,
            remaining: self.len,
        }
    }
}

impl<T> Default for OrderedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for OrderedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Extend<T> for OrderedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}

impl<T> FromIterator<T> for OrderedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

/// Borrowing iterator for [`OrderedList`].
pub struct Iter<'a, T> {
    list: &'a OrderedList<T>,
    front: Option<usize>,
    back: Option<usize>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let idx = self.front?;
        self.front = self.list.links_of(idx).1;
        self.remaining -= 1;
        self.list.values[idx].as_ref()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let idx = self.back?;
        self.back = self.list.links_of(idx).0;
        self.remaining -= 1;
        self.list.values[idx].as_ref()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}

impl<'a, T> IntoIterator for &'a OrderedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Consuming iterator for [`OrderedList`].
pub struct IntoIter<T> {
    list: OrderedList<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.list.shift().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.len, Some(self.list.len))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.list.pop().ok()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}
impl<T> FusedIterator for IntoIter<T> {}

impl<T> IntoIterator for OrderedList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { list: self }
    }
}
