//! `Chunk` — one fixed-capacity block of optional slots.
//!
//! A chunk backs one contiguous range of offsets in a
//! [`SparseArray`](crate::SparseArray). Its length is fixed when it is
//! allocated and never changes; every slot starts out absent.
//!
//! Slot indices are checked against `[0, len)`. An out-of-range index is a
//! programming error and panics; the sparse array's offset arithmetic can
//! never produce one.

/// A fixed-length block of `Option<T>` slots with an occupancy counter.
#[derive(Clone)]
pub struct Chunk<T> {
    slots: Box<[Option<T>]>,
    /// Number of slots currently holding `Some`.
    occupied: usize,
}

impl<T> Chunk<T> {
    /// Allocates a chunk of `len` absent slots.
    ///
    /// # Panics
    /// Panics if `len` is zero.
    pub fn new(len: usize) -> Self {
        assert!(len != 0, "Chunk length must be > 0");
        Self {
            slots: (0..len).map(|_| None).collect(),
            occupied: 0,
        }
    }

    /// Number of slots (present or absent) in the chunk.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Number of slots holding a value.
    #[inline(always)]
    pub fn occupied(&self) -> usize {
        self.occupied
    }

    /// Returns `true` if every slot is absent.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.occupied == 0
    }

    #[inline(always)]
    fn check(&self, slot: usize) {
        assert!(
            slot < self.slots.len(),
            "slot index {slot} out of range for chunk of {} slots",
            self.slots.len()
        );
    }

    /// Returns the value at `slot`, or `None` if it is absent.
    #[inline]
    pub fn get(&self, slot: usize) -> Option<&T> {
        self.check(slot);
        self.slots[slot].as_ref()
    }

    /// Returns a mutable reference to the value at `slot`, if present.
    #[inline]
    pub fn get_mut(&mut self, slot: usize) -> Option<&mut T> {
        self.check(slot);
        self.slots[slot].as_mut()
    }

    /// Writes `value` into `slot` and returns what was there before.
    ///
    /// Writing `None` clears the slot.
    pub fn set(&mut self, slot: usize, value: Option<T>) -> Option<T> {
        self.check(slot);
        let incoming = value.is_some();
        let previous = core::mem::replace(&mut self.slots[slot], value);
        match (previous.is_some(), incoming) {
            (false, true) => self.occupied += 1,
            (true, false) => self.occupied -= 1,
            _ => {}
        }
        previous
    }

    /// Clears `slot`, returning the value it held.
    #[inline]
    pub fn remove(&mut self, slot: usize) -> Option<T> {
        self.set(slot, None)
    }

    /// Smallest slot index holding a value.
    #[inline]
    pub fn first_occupied(&self) -> Option<usize> {
        self.next_occupied(0)
    }

    /// Smallest slot index `>= from` holding a value.
    ///
    /// `from` may equal `len()`, in which case the answer is `None`.
    pub fn next_occupied(&self, from: usize) -> Option<usize> {
        if self.occupied == 0 {
            return None;
        }
        self.slots
            .get(from..)?
            .iter()
            .position(Option::is_some)
            .map(|pos| from + pos)
    }

    /// Consumes the chunk, returning every slot in order.
    pub fn into_slots(self) -> Vec<Option<T>> {
        self.slots.into_vec()
    }
}
