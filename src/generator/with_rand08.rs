//! Integration with `rand` (v0.8) crate.

use super::{RandSource, V4Generator};
use rand::RngCore;

/// An adapter that implements [`RandSource`] for [`RngCore`] types.
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct Adapter<T>(/** The wrapped [`RngCore`] type. */ pub T);

impl<T: RngCore> RandSource for Adapter<T> {
    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.0.fill_bytes(dest);
    }
}

impl<T: RngCore> V4Generator<Adapter<T>> {
    /// Creates a generator object with a specified random number generator that implements
    /// [`RngCore`] from `rand` (v0.8) crate.
    pub const fn with_rand08(rng: T) -> Self {
        Self::new(Adapter(rng))
    }
}

#[cfg(test)]
mod tests {
    use crate::{V4Generator, Variant};
    use rand::{rngs::StdRng, SeedableRng};

    /// Reproduces sequence from seeded generator
    #[test]
    fn reproduces_sequence_from_seeded_generator() {
        let a = V4Generator::with_rand08(StdRng::seed_from_u64(42));
        let b = V4Generator::with_rand08(StdRng::seed_from_u64(42));
        for (x, y) in a.zip(b).take(1_000) {
            assert_eq!(x, y);
            assert_eq!(x.variant(), Variant::Rfc4122);
            assert_eq!(x.version(), 4);
        }
    }
}
