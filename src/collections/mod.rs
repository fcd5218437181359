//! Collections provided by this crate.
//!
//! Collections are organized by data structure type:
//! - `sparse`: the chunked sparse array and its cursor
//! - `list`: the arena-backed ordered list

pub mod list;
pub mod sparse;

// Re-export commonly used types from submodules
pub use list::OrderedList;
pub use sparse::{Cursor, OffsetAccess, SparseArray, DEFAULT_CHUNK_SIZE};
