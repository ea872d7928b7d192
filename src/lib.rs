//! Skyline (upper envelope) of axis-aligned buildings, computed by sweeping
//! building edges through an indexed max-heap.

pub mod error;
pub mod heap;
pub mod input;
pub mod output;
pub mod skyline;

#[cfg(test)]
mod testing;

pub use crate::error::{HeapError, InputError};
pub use crate::heap::IndexedMaxHeap;
pub use crate::skyline::{compute_skyline, Building, Coord, KeyPoint};
