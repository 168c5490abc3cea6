#![no_main]
#[macro_use] extern crate libfuzzer_sys;
extern crate binheap;

use binheap::collections::*;
use binheap::order::*;

fuzz_target!(|data: &[u8]| {
    if 0 == data.len() { return; }
    let desc = data[0] % 2 == 1;
    let (init, ops) = data[1..].split_at((data.len()-1)/2);
    let mut h = BinaryHeap::from_slice(Lt(move |a: &u8, b: &u8| if desc { a > b } else { a < b }), init);
    for xs in ops.windows(2) {
        let (c, x) = (xs[0], xs[1]);
        let l = h.length();
        match c % 4 {
            0 | 1 => { h.push(x); assert_eq!(h.length(), l+1); },
            2 => match h.pop() {
                Ok(y) => { assert_eq!(h.length(), l-1); assert!(h.iter().all(|z| !h.order().precedes(z, &y))); },
                Err(EmptyHeap) => assert_eq!(l, 0),
            },
            _ => { h.push_pop(x); assert_eq!(h.length(), l); },
        }
        assert!(is_heap(h.as_slice(), h.order()));
    }
});
