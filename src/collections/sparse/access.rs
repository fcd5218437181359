//! The named-operation interface for offset-addressed containers.

use super::cursor::Iter;
use super::sparse_array::SparseArray;
use crate::error::SparseArrayError;
use core::fmt;
use num_traits::PrimInt;

/// Any primitive integer usable as an offset.
///
/// Non-integer offsets do not type-check. Integer offsets that cannot be
/// represented as a `usize` are rejected at run time with
/// [`SparseArrayError::InvalidOffset`].
pub trait Offset: PrimInt + fmt::Display {}

impl<O: PrimInt + fmt::Display> Offset for O {}

/// Indexed read, write, removal, existence and ordered iteration over an
/// integer offset space.
pub trait OffsetAccess {
    /// Element type stored at each offset.
    type Value;

    /// Iterator returned by [`iterate`](Self::iterate).
    type Iter<'a>: Iterator<Item = (usize, &'a Self::Value)>
    where
        Self: 'a;

    /// Value stored at `offset`, `None` if absent.
    ///
    /// # Errors
    /// [`SparseArrayError::InvalidOffset`] if `offset` is not addressable.
    fn get<O: Offset>(&self, offset: O) -> Result<Option<&Self::Value>, SparseArrayError>;

    /// Writes `value` (or clears the slot for `None`), returning the old value.
    ///
    /// # Errors
    /// [`SparseArrayError::InvalidOffset`] if `offset` is not addressable.
    fn set<O: Offset>(
        &mut self,
        offset: O,
        value: Option<Self::Value>,
    ) -> Result<Option<Self::Value>, SparseArrayError>;

    /// Clears `offset`, returning the value it held.
    ///
    /// # Errors
    /// [`SparseArrayError::InvalidOffset`] if `offset` is not addressable.
    fn remove<O: Offset>(&mut self, offset: O) -> Result<Option<Self::Value>, SparseArrayError>;

    /// Returns `true` if `offset` holds a value.
    fn exists<O: Offset>(&self, offset: O) -> bool;

    /// Present `(offset, &value)` pairs in ascending offset order.
    fn iterate(&self) -> Self::Iter<'_>;
}

impl<T> OffsetAccess for SparseArray<T> {
    type Value = T;
    type Iter<'a> = Iter<'a, T>
    where
        Self: 'a;

    fn get<O: Offset>(&self, offset: O) -> Result<Option<&T>, SparseArrayError> {
        SparseArray::get(self, offset)
    }

    fn set<O: Offset>(&mut self, offset: O, value: Option<T>) -> Result<Option<T>, SparseArrayError> {
        SparseArray::set(self, offset, value)
    }

    fn remove<O: Offset>(&mut self, offset: O) -> Result<Option<T>, SparseArrayError> {
        SparseArray::remove(self, offset)
    }

    fn exists<O: Offset>(&self, offset: O) -> bool {
        SparseArray::exists(self, offset)
    }

    fn iterate(&self) -> Self::Iter<'_> {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Written against the trait only, so any implementor can be exercised.
    fn fill<A: OffsetAccess<Value = u16>>(container: &mut A) {
        for offset in [70u16, 3, 41] {
            container.set(offset, Some(offset)).unwrap();
        }
    }

    #[test]
    fn test_trait_operations_delegate_to_sparse_array() {
        let mut array = SparseArray::new();
        fill(&mut array);
        assert!(OffsetAccess::exists(&array, 41));
        assert_eq!(OffsetAccess::get(&array, 70).unwrap(), Some(&70));
        assert_eq!(OffsetAccess::remove(&mut array, 3).unwrap(), Some(3));
        assert!(OffsetAccess::get(&array, -1).is_err());

        let offsets: Vec<usize> = array.iterate().map(|(offset, _)| offset).collect();
        assert_eq!(offsets, vec![41, 70]);
    }
}
