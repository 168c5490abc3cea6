//! Binary heaps over arbitrary orderings
//!
//! The heap algorithms live in [`collections::heap::slice`] and work on any slice; the
//! [`BinaryHeap`](collections::BinaryHeap) container wraps them around a `Vec`, and
//! [`select`] uses them for n-largest/n-smallest queries.

#![no_std]

#![deny(missing_debug_implementations)]

extern crate alloc;

#[cfg(test)]
#[macro_use]
extern crate quickcheck_macros;
#[cfg(any(test, feature = "std"))]
extern crate std;

pub mod collections;
pub mod order;
pub mod select;

mod util;

pub use crate::collections::{BinaryHeap, EmptyHeap, MaxHeap, MinHeap};
pub use crate::order::{By, Forward, Lt, Order, Relation, Reverse};
pub use crate::select::{n_extreme, n_largest, n_smallest};
