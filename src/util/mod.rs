#[cfg(test)] mod abc;
#[cfg(test)] pub use self::abc::*;

#[inline] pub fn map_opt_2_or<A, B, C, F: Fn(A, B) -> C>(c: C, f: F, opt_a: Option<A>, opt_b: Option<B>) -> C {
    match (opt_a, opt_b) { (Some(a), Some(b)) => f(a, b), _ => c }
}
