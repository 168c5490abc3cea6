use quickcheck as qc;
use rand::Rng;

/// Three-letter alphabet, so random vectors are full of ties
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ABC { A, B, C }

use self::ABC::*;

impl qc::Arbitrary for ABC {
    fn arbitrary<G: qc::Gen>(g: &mut G) -> Self {
        match g.gen_range(0u8, 3) { 0 => A, 1 => B, _ => C }
    }
}

/// An `ABC` key with a tag which the orderings under test never look at
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Tagged(pub ABC, pub usize);

impl Tagged {
    #[inline] pub fn key(&self) -> ABC { self.0 }

    /// Tag each key with its position in `keys`.
    pub fn enumerate(keys: &[ABC]) -> ::std::vec::Vec<Self> {
        keys.iter().enumerate().map(|(n, &k)| Tagged(k, n)).collect()
    }
}
