//! Heaps

pub mod slice;

use alloc::vec::Vec;
use core::fmt;
use core::iter::FromIterator;
use core::slice::Iter;

use crate::order::*;

/// Error of `top` or `pop` on an empty heap
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct EmptyHeap;

impl fmt::Display for EmptyHeap {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result { f.write_str("heap is empty") }
}

#[cfg(feature = "std")]
impl std::error::Error for EmptyHeap {}

/// Make `xs` a heap under `order`, in place.
#[inline] pub fn heapify_in_place<T, O: Order<T>>(xs: &mut [T], order: &O) {
    slice::build(|a, b| order.precedes(a, b), xs)
}

/// Return a heap under `order` of copies of the elements of `xs`, leaving `xs` alone.
#[inline] pub fn heapify<T: Clone, O: Order<T>>(xs: &[T], order: &O) -> Vec<T> {
    let mut v = xs.to_vec();
    heapify_in_place(&mut v[..], order);
    v
}

/// Whether `xs` is a heap under `order`.
#[inline] pub fn is_heap<T, O: Order<T>>(xs: &[T], order: &O) -> bool {
    slice::is_heap(|a, b| order.precedes(a, b), xs)
}

/// Growable binary heap in terms of `Vec`
///
/// The root is the element which precedes all others under `O`, so `BinaryHeap<T, Forward>`
/// is a min-heap and `BinaryHeap<T, Reverse>` a max-heap.
#[derive(Clone, Debug)]
pub struct BinaryHeap<T, O: Order<T> = Forward> {
    order: O,
    data: Vec<T>,
}

/// Heap whose root is its least element
pub type MinHeap<T> = BinaryHeap<T, Forward>;

/// Heap whose root is its greatest element
pub type MaxHeap<T> = BinaryHeap<T, Reverse>;

impl<T, O: Order<T>> BinaryHeap<T, O> {
    /// Make a new heap.
    #[inline] pub fn new(order: O) -> Self { BinaryHeap { order, data: Vec::new() } }

    /// Make a new heap with enough room to hold at least `cap` elements.
    #[inline] pub fn with_capacity(order: O, cap: usize) -> Self {
        BinaryHeap { order, data: Vec::with_capacity(cap) }
    }

    /// Build a heap of the elements of `v`.
    #[inline] pub fn from_vec(order: O, mut v: Vec<T>) -> Self {
        heapify_in_place(&mut v[..], &order);
        BinaryHeap { order, data: v }
    }

    /// Build a heap of copies of the elements of `xs`.
    #[inline] pub fn from_slice(order: O, xs: &[T]) -> Self where T: Clone {
        let data = heapify(xs, &order);
        BinaryHeap { order, data }
    }

    /// Return the order of the heap.
    #[inline] pub fn order   (&self) -> &O { &self.order }

    /// Return number of elements in heap.
    #[inline] pub fn length  (&self) -> usize { self.data.len() }

    /// Return whether the heap has no elements.
    #[inline] pub fn is_empty(&self) -> bool { self.data.is_empty() }

    /// Return number of elements heap can hold before reallocation.
    #[inline] pub fn capacity(&self) -> usize { self.data.capacity() }

    /// Make sure the heap has enough room for at least `n_more` more elements, reallocating if need be.
    #[inline] pub fn reserve(&mut self, n_more: usize) { self.data.reserve(n_more) }

    /// Push an element into the heap.
    #[inline] pub fn push(&mut self, x: T) {
        let (order, data) = self.components();
        data.push(x);
        slice::push(|a, b| order.precedes(a, b), &mut data[..]);
    }

    /// Return a reference to root element.
    ///
    /// # Failures
    ///
    /// Returns `EmptyHeap` if heap empty.
    #[inline] pub fn top(&self) -> Result<&T, EmptyHeap> { self.peek().ok_or(EmptyHeap) }

    /// Return a reference to root element, or `None` if heap empty.
    #[inline] pub fn peek(&self) -> Option<&T> { self.data.first() }

    /// Pop the root element off the heap and return it.
    ///
    /// # Failures
    ///
    /// Returns `EmptyHeap` if heap empty, and leaves it so.
    #[inline] pub fn pop(&mut self) -> Result<T, EmptyHeap> {
        let (order, data) = self.components();
        let x = data.pop().ok_or(EmptyHeap)?;
        Ok(if data.is_empty() { x } else { slice::replace_root(|a, b| order.precedes(a, b), &mut data[..], x) })
    }

    /// Push `x` and pop the root, in one pass.
    #[inline] pub fn push_pop(&mut self, x: T) -> T {
        let (order, data) = self.components();
        let displaces_root = data.first().map_or(false, |y| order.precedes(y, &x));
        if displaces_root { slice::replace_root(|a, b| order.precedes(a, b), &mut data[..], x) } else { x }
    }

    /// Remove all elements.
    #[inline] pub fn clear(&mut self) { self.data.clear() }

    /// Return the elements of heap in heap order.
    #[inline] pub fn as_slice(&self) -> &[T] { &self.data[..] }

    /// Iterate over the elements of heap in heap order.
    #[inline] pub fn iter(&self) -> Iter<T> { self.data.iter() }

    /// Return a `Vec` of elements of heap in heap order.
    #[inline] pub fn into_vec(self) -> Vec<T> { self.data }

    /// Return a `Vec` of elements of heap in the order `pop` would have yielded them.
    #[inline] pub fn into_sorted_vec(mut self) -> Vec<T> {
        {
            let (order, data) = self.components();
            slice::sort(|a, b| order.precedes(a, b), &mut data[..]);
        }
        self.data.reverse();
        self.data
    }

    fn components(&mut self) -> (&O, &mut Vec<T>) { (&self.order, &mut self.data) }
}

impl<T, O: Order<T> + Default> Default for BinaryHeap<T, O> {
    #[inline] fn default() -> Self { Self::new(O::default()) }
}

impl<T, O: Order<T> + Default> From<Vec<T>> for BinaryHeap<T, O> {
    #[inline] fn from(v: Vec<T>) -> Self { Self::from_vec(O::default(), v) }
}

impl<T, O: Order<T> + Default> FromIterator<T> for BinaryHeap<T, O> {
    #[inline] fn from_iter<I: IntoIterator<Item = T>>(xs: I) -> Self {
        Self::from_vec(O::default(), xs.into_iter().collect())
    }
}

impl<T, O: Order<T>> Extend<T> for BinaryHeap<T, O> {
    #[inline] fn extend<I: IntoIterator<Item = T>>(&mut self, xs: I) {
        let xs = xs.into_iter();
        self.reserve(xs.size_hint().0);
        for x in xs { self.push(x) }
    }
}

impl<'a, T, O: Order<T>> IntoIterator for &'a BinaryHeap<T, O> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;
    #[inline] fn into_iter(self) -> Iter<'a, T> { self.iter() }
}
