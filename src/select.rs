//! Selection of the n least or greatest elements
//!
//! The `n` best elements seen so far are kept in a heap under the opposite order, so its root
//! is the one to evict when something better turns up. This costs O(len log n) rather than the
//! O(len log len) of sorting everything.

use alloc::vec::Vec;

use crate::collections::heap::slice;
use crate::order::*;

/// Return the first `n` elements of `xs` under `order`, sorted under `order`.
///
/// Elements which are equal under `order` come out in no particular order.
pub fn n_extreme<T, O: Order<T>, I: IntoIterator<Item = T>>(n: usize, xs: I, order: O) -> Vec<T> {
    if n == 0 { return Vec::new() };
    let rev = Reverse(&order);
    let f = |a: &T, b: &T| rev.precedes(a, b);

    let mut xs = xs.into_iter();
    let mut buf: Vec<T> = xs.by_ref().take(n).collect();
    if buf.len() < n {
        buf.sort_by(|a, b| order.compare(a, b));
        return buf;
    }

    slice::build(&f, &mut buf[..]);
    for x in xs {
        if order.precedes(&x, &buf[0]) { slice::replace_root(&f, &mut buf[..], x); }
    }
    slice::sort(&f, &mut buf[..]);
    buf
}

/// Return the `n` least elements of `xs` in ascending order.
#[inline] pub fn n_smallest<T: Ord + Clone>(n: usize, xs: &[T]) -> Vec<T> {
    n_extreme(n, xs.iter().cloned(), Forward)
}

/// Return the `n` greatest elements of `xs` in descending order.
#[inline] pub fn n_largest<T: Ord + Clone>(n: usize, xs: &[T]) -> Vec<T> {
    n_extreme(n, xs.iter().cloned(), Reverse(Forward))
}

/// Return the `n` elements of `xs` with least keys, in ascending order of key.
#[inline] pub fn n_smallest_by_key<T: Clone, K: Ord, F: Fn(&T) -> K>(n: usize, xs: &[T], key: F) -> Vec<T> {
    n_extreme(n, xs.iter().cloned(), By(key))
}

/// Return the `n` elements of `xs` with greatest keys, in descending order of key.
#[inline] pub fn n_largest_by_key<T: Clone, K: Ord, F: Fn(&T) -> K>(n: usize, xs: &[T], key: F) -> Vec<T> {
    n_extreme(n, xs.iter().cloned(), Reverse(By(key)))
}
