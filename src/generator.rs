//! UUIDv4 generator and related types.

use crate::{Uuid, Variant};

pub mod with_rand08;

/// A trait that defines the minimum random number generator interface for [`V4Generator`].
pub trait RandSource {
    /// Fills `dest` with random data.
    fn fill_bytes(&mut self, dest: &mut [u8]);
}

/// Represents a UUIDv4 generator that draws all random bits from the random number generator it
/// owns.
///
/// A generator is not shared between threads by itself. The [`uuid4`](crate::uuid4) function
/// keeps one generator per thread; wrap a generator in a lock to share a custom random source
/// across threads.
///
/// # Examples
///
/// ```rust
/// use rand::rngs::OsRng;
/// use rfc4122::V4Generator;
///
/// let mut g = V4Generator::with_rand08(OsRng);
/// let uuid = g.generate();
/// assert_eq!(uuid.version(), 4);
/// ```
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct V4Generator<R> {
    /// The random number generator used by the generator.
    rng: R,
}

impl<R: RandSource> V4Generator<R> {
    /// Creates a generator instance.
    pub const fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Generates a new UUIDv4 object.
    pub fn generate(&mut self) -> Uuid {
        let mut bytes = [0u8; 16];
        self.rng.fill_bytes(&mut bytes);

        let mut uuid = Uuid::from(bytes);
        uuid.set_variant(Variant::Rfc4122);
        uuid.set_version(4);
        uuid
    }
}

/// Supports operations as an infinite iterator that produces a new UUIDv4 object for each call of
/// `next()`.
///
/// # Examples
///
/// ```rust
/// use rfc4122::V4Generator;
///
/// V4Generator::with_rand08(rand::rngs::OsRng)
///     .enumerate()
///     .skip(4)
///     .take(4)
///     .for_each(|(i, e)| println!("[{}] {}", i, e));
/// ```
impl<R: RandSource> Iterator for V4Generator<R> {
    type Item = Uuid;

    fn next(&mut self) -> Option<Self::Item> {
        Some(self.generate())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

impl<R: RandSource> core::iter::FusedIterator for V4Generator<R> {}
