//! Orderings
//!
//! An [`Order`] says which of two elements must be nearer to the root of a heap. Heaps built
//! under [`Forward`] are min-heaps; under [`Reverse`] they are max-heaps.

use core::cmp::Ordering;
use core::fmt;

use rel::ord::*;

/// Strict total preorder on `A`
pub trait Order<A: ?Sized> {
    /// Whether `x` must come before `y`.
    fn precedes(&self, x: &A, y: &A) -> bool;

    /// Compare `x` and `y`; elements neither of which precedes the other are `Equal`.
    #[inline]
    fn compare(&self, x: &A, y: &A) -> Ordering {
        if self.precedes(x, y) { Ordering::Less }
        else if self.precedes(y, x) { Ordering::Greater }
        else { Ordering::Equal }
    }
}

impl<'a, A: ?Sized, O: Order<A> + ?Sized> Order<A> for &'a O {
    #[inline] fn precedes(&self, x: &A, y: &A) -> bool { (**self).precedes(x, y) }
}

/// Natural order of `Ord`
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Forward;

impl<A: ?Sized + Ord> Order<A> for Forward {
    #[inline] fn precedes(&self, x: &A, y: &A) -> bool { x < y }
}

/// Opposite of `O`
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Reverse<O = Forward>(pub O);

impl<A: ?Sized, O: Order<A>> Order<A> for Reverse<O> {
    #[inline] fn precedes(&self, x: &A, y: &A) -> bool { self.0.precedes(y, x) }
}

/// Order by the natural order of a key
#[derive(Clone, Copy)]
pub struct By<F>(pub F);

impl<A: ?Sized, K: Ord, F: Fn(&A) -> K> Order<A> for By<F> {
    #[inline] fn precedes(&self, x: &A, y: &A) -> bool { (self.0)(x) < (self.0)(y) }
}

impl<F> fmt::Debug for By<F> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result { f.write_str("By(..)") }
}

/// Order by a "less than" predicate
///
/// The predicate must be a strict weak order; heaps built on anything else are meaningless.
#[derive(Clone, Copy)]
pub struct Lt<F>(pub F);

impl<A: ?Sized, F: Fn(&A, &A) -> bool> Order<A> for Lt<F> {
    #[inline] fn precedes(&self, x: &A, y: &A) -> bool { (self.0)(x, y) }
}

impl<F> fmt::Debug for Lt<F> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result { f.write_str("Lt(..)") }
}

/// Order by a [`TotalOrderRelation`], e.g. `rel::Core`
#[derive(Clone, Copy, Debug, Default)]
pub struct Relation<R>(pub R);

impl<A, R: TotalOrderRelation<A>> Order<A> for Relation<R> {
    #[inline] fn precedes(&self, x: &A, y: &A) -> bool { self.0.less(x, y) }
}
