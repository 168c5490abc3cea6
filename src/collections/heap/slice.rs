//! Heap operations on slices
//!
//! Positions are 0-based: the root is at 0 and the children of `i` are at `2i+1` and `2i+2`.
//! Throughout, `f(x,y)` is whether `x` must be nearer to the root than `y`. The heap is the whole
//! slice given, so a heap bounded to its first `len` elements is operated on as `&mut xs[..len]`.

use core::mem;

use crate::util::*;

/// Position of the left child of `i`.
#[inline] pub const fn left(i: usize) -> usize { 2*i+1 }

/// Position of the right child of `i`.
#[inline] pub const fn right(i: usize) -> usize { 2*i+2 }

/// Position of the parent of `i`.
/// `i` being the root is an error.
#[inline] pub const fn parent(i: usize) -> usize { (i-1)/2 }

/// Move the element at `i` toward the leaves until neither child must be nearer to the root
/// than it. Both subtrees under `i` must already be heaps.
#[inline] pub fn percolate_down<A, F: Fn(&A, &A) -> bool>(f: F, xs: &mut [A], mut i: usize) {
    let n = xs.len();
    loop {
        let l = left(i);
        if l >= n { return };
        let r = right(i);
        let c = if r < n && f(&xs[r], &xs[l]) { r } else { l };
        if !f(&xs[c], &xs[i]) { return };
        xs.swap(i, c);
        i = c;
    }
}

/// Put `x` at `i`, percolate it down, and return the element it displaced.
#[inline] pub fn percolate_down_with<A, F: Fn(&A, &A) -> bool>(f: F, xs: &mut [A], i: usize, x: A) -> A {
    let y = mem::replace(&mut xs[i], x);
    percolate_down(f, xs, i);
    y
}

/// Move the element at `i` toward the root until its parent need not be farther from the root
/// than it. All of `xs` but position `i` must already be a heap.
#[inline] pub fn percolate_up<A, F: Fn(&A, &A) -> bool>(f: F, xs: &mut [A], mut i: usize) {
    while i > 0 {
        let p = parent(i);
        if !f(&xs[i], &xs[p]) { return };
        xs.swap(i, p);
        i = p;
    }
}

/// Put `x` at `i`, percolate it up, and return the element it displaced.
#[inline] pub fn percolate_up_with<A, F: Fn(&A, &A) -> bool>(f: F, xs: &mut [A], i: usize, x: A) -> A {
    let y = mem::replace(&mut xs[i], x);
    percolate_up(f, xs, i);
    y
}

/// Make `xs` a heap.
#[inline] pub fn build<A, F: Fn(&A, &A) -> bool>(f: F, xs: &mut [A]) {
    if xs.len() <= 1 { return };
    for k in (0..xs.len()>>1).rev() { percolate_down(&f, xs, k) }
}

/// Whether `xs` is a heap.
#[inline] pub fn is_heap<A, F: Fn(&A, &A) -> bool>(f: F, xs: &[A]) -> bool {
    let g = |opt_x: Option<&A>, opt_y: Option<&A>| map_opt_2_or(false, &f, opt_x, opt_y);
    !(0..xs.len()>>1).any(|n| g(xs.get(left(n)), Some(&xs[n])) || g(xs.get(right(n)), Some(&xs[n])))
}

/// Given a slice `xs` which is all but the last element already a heap, extend
/// the heap to include the last element.
/// `xs` being empty is an error.
#[inline] pub fn push<A, F: Fn(&A, &A) -> bool>(f: F, xs: &mut [A]) {
    assert!(xs.len() > 0);
    let n = xs.len() - 1;
    percolate_up(f, xs, n);
}

/// Given a slice `xs` which is already a heap, move the root to the end of the
/// slice and retract the heap to exclude it.
/// `xs` being empty is an error.
#[inline] pub fn pop<A, F: Fn(&A, &A) -> bool>(f: F, xs: &mut [A]) {
    assert!(xs.len() > 0);
    let l = xs.len()-1;
    xs.swap(0, l);
    percolate_down(f, &mut xs[0..l], 0);
}

/// Given a slice `xs` which is already a heap, replace the root and return the old one.
/// `xs` being empty is an error.
#[inline] pub fn replace_root<A, F: Fn(&A, &A) -> bool>(f: F, xs: &mut [A], x: A) -> A {
    assert!(xs.len() > 0);
    percolate_down_with(f, xs, 0, x)
}

/// Given a slice `xs` which is already a heap, sort the elements so the last is the root.
/// Under a min-heap order this sorts descending.
#[inline] pub fn sort<A, F: Fn(&A, &A) -> bool>(f: F, xs: &mut [A]) {
    for l in (1..xs.len()).rev() {
        // l+1 rather than l here lest we miss last element, as we have 2 half-open ranges
        pop(&f, &mut xs[0..l+1]);
    }
}

#[cfg(test)] mod tests {
    use quickcheck::*;
    use std::vec::*;

    use super::*;
    use crate::util::*;

    fn less<A: Ord>(x: &A, y: &A) -> bool { x < y }
    fn greater<A: Ord>(x: &A, y: &A) -> bool { x > y }

    fn is_sorted_by<A, F: Fn(&A, &A) -> bool>(f: F, xs: &[A]) -> bool {
        (1..xs.len()).all(|k| !f(&xs[k], &xs[k-1]))
    }

    #[test] fn index_arithmetic() {
        assert_eq!((left(0), right(0)), (1, 2));
        assert_eq!((left(3), right(3)), (7, 8));
        for i in 0..64 {
            assert_eq!(parent(left(i)), i);
            assert_eq!(parent(right(i)), i);
        }
    }

    #[test] fn percolate_down_prefers_left_on_tie() {
        let f = |x: &Tagged, y: &Tagged| x.key() < y.key();
        let mut xs = [Tagged(ABC::C, 0), Tagged(ABC::A, 1), Tagged(ABC::A, 2)];
        percolate_down(f, &mut xs, 0);
        assert_eq!(xs, [Tagged(ABC::A, 1), Tagged(ABC::C, 0), Tagged(ABC::A, 2)]);
    }

    #[test] fn percolate_down_stops_at_bound() {
        let mut xs = [9, 3, 4, 1, 0];
        percolate_down(less, &mut xs[..3], 0);
        assert_eq!(xs, [3, 9, 4, 1, 0]);
    }

    #[test] fn percolate_with_returns_displaced() {
        let mut xs = [1, 2, 3, 4, 5, 6];
        assert_eq!(percolate_down_with(less, &mut xs, 0, 7), 1);
        assert!(is_heap(less, &xs));
        assert_eq!(xs[0], 2);
        assert_eq!(percolate_up_with(less, &mut xs, 5, 0), 6);
        assert!(is_heap(less, &xs));
        assert_eq!(xs[0], 0);
    }

    #[test] fn is_heap_finds_violation() {
        assert!(is_heap(less, &[] as &[u8]));
        assert!(is_heap(less, &[1]));
        assert!(is_heap(less, &[1, 2, 2, 3]));
        assert!(!is_heap(less, &[1, 2, 3, 0]));
        assert!(!is_heap(less, &[2, 1]));
        assert!(is_heap(greater, &[2, 1]));
    }

    #[quickcheck] fn build_test(mut xv: Vec<usize>) -> bool {
        build(less, &mut xv[..]);
        is_heap(less, &xv)
    }
    #[quickcheck] fn build_abc_test(mut xv: Vec<ABC>) -> bool {
        build(greater, &mut xv[..]);
        is_heap(greater, &xv)
    }
    #[quickcheck] fn  push_test(mut xv: Vec<usize>) -> TestResult {
        if xv.len() == 0 { return TestResult::discard() };
        let l = xv.len()-1;
        build(less, &mut xv[0..l]);
        push(less, &mut xv[..]);
        TestResult::from_bool(is_heap(less, &xv))
    }
    #[quickcheck] fn   pop_test(mut xv: Vec<usize>) -> TestResult {
        if xv.len() == 0 { return TestResult::discard() };
        let xs = &mut xv[..];
        let l = xs.len()-1;
        build(less, xs);
        pop(less, xs);
        TestResult::from_bool(is_heap(less, &xs[0..l]) && xs[0..l].iter().all(|x| *x >= xs[l]))
    }
    #[quickcheck] fn replace_root_test(mut xv: Vec<ABC>, x: ABC) -> TestResult {
        if xv.len() == 0 { return TestResult::discard() };
        build(less, &mut xv[..]);
        let min = xv[0];
        TestResult::from_bool(replace_root(less, &mut xv[..], x) == min && is_heap(less, &xv))
    }
    #[quickcheck] fn  sort_test(mut xv: Vec<usize>) -> bool {
        let xs = &mut xv[..];
        build(greater, xs);
        sort(greater, xs);
        is_sorted_by(less, xs)
    }
    #[quickcheck] fn sort_is_permutation(xv: Vec<ABC>) -> bool {
        let mut ys = xv.clone();
        build(less, &mut ys[..]);
        sort(less, &mut ys[..]);
        ys.reverse();
        let mut zs = xv;
        zs.sort();
        ys == zs
    }
}
