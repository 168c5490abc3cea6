//! Collection types

pub mod heap;

pub use self::heap::{BinaryHeap, EmptyHeap, MaxHeap, MinHeap};
pub use self::heap::{heapify, heapify_in_place, is_heap};
