//! Chunked sparse array.
//!
//! - `chunk`: fixed-capacity slot blocks, the unit of allocation
//! - `chunk_index`: ordered map from chunk key to chunk
//! - `sparse_array`: the public container and its count bookkeeping
//! - `cursor`: ordered, null-skipping traversal
//! - `access`: the `OffsetAccess` capability trait

pub mod access;
pub mod chunk;
pub mod chunk_index;
pub mod cursor;
pub mod sparse_array;

pub use access::{Offset, OffsetAccess};
pub use chunk::Chunk;
pub use chunk_index::{ChunkIndex, ChunkPosition};
pub use cursor::{Cursor, Iter};
pub use sparse_array::{IntoIter, SparseArray, DEFAULT_CHUNK_SIZE};
