//! The engine capability contract.
//!
//! [`Engine`] is the single abstraction every generator family implements and
//! every distribution consumes. Families only provide the raw 64-bit draw and
//! their seeding/state surface; the floating-point conversions are shared
//! default methods so that all families derive doubles identically.

use crate::error::StateDecodeError;
use crate::seed::{SeedSource, SystemClockSeed};

/// 2^53, the number of distinct values produced by [`Engine::next_f64`].
const TWO_POW_53: f64 = 9_007_199_254_740_992.0;

/// 2^52, the number of distinct values produced by [`Engine::next_f64_open`].
const TWO_POW_52: f64 = 4_503_599_627_370_496.0;

/// A stateful generator of uniformly distributed 64-bit integers and the
/// doubles derived from them.
///
/// The trait is object safe, so `Box<dyn Engine>` and `&mut dyn Engine` can
/// stand in wherever a concrete family is expected.
///
/// # Examples
///
/// ```rust
/// use randkit_engines::{Engine, SplitMix64};
///
/// let mut a = SplitMix64::new(42);
/// let mut b = SplitMix64::new(42);
/// for _ in 0..100 {
///     assert_eq!(a.next_u64(), b.next_u64());
/// }
///
/// a.reset();
/// let mut fresh = SplitMix64::new(42);
/// assert_eq!(a.next_u64(), fresh.next_u64());
/// ```
pub trait Engine {
    /// Returns the next raw value in `[0, 2^64)` and advances the state.
    fn next_u64(&mut self) -> u64;

    /// Returns a double in `[0, 1)` built from the top 53 bits of
    /// [`next_u64`](Engine::next_u64).
    #[inline]
    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / TWO_POW_53
    }

    /// Returns a double in the open interval `(0, 1)`.
    ///
    /// Uses the top 52 bits offset by one half, so neither `0.0` nor `1.0`
    /// can be produced. Consumers whose transforms diverge at the boundary
    /// (inverse Normal CDF, tangent sampling) draw through this method.
    #[inline]
    fn next_f64_open(&mut self) -> f64 {
        ((self.next_u64() >> 12) as f64 + 0.5) / TWO_POW_52
    }

    /// Reinitialises the engine from `seed`.
    ///
    /// A zero seed is replaced by a time-derived value from the system clock.
    fn set_seed(&mut self, seed: u64) {
        self.set_seed_from(seed, &SystemClockSeed);
    }

    /// Reinitialises the engine from `seed`, drawing from `source` when
    /// `seed` is zero.
    fn set_seed_from(&mut self, seed: u64, source: &dyn SeedSource);

    /// Returns the seed used for the most recent initialisation.
    ///
    /// Never zero: a zero request is recorded as the substituted value.
    fn seed(&self) -> u64;

    /// Serialises the full internal state, cursor included.
    fn state(&self) -> Vec<u8>;

    /// Restores state produced by [`state`](Engine::state) on an engine of the
    /// same family.
    ///
    /// # Errors
    ///
    /// Returns [`StateDecodeError`] when the family tag does not match, the
    /// input is truncated, or a decoded cursor is out of range. The engine is
    /// left unchanged on error.
    fn set_state(&mut self, bytes: &[u8]) -> Result<(), StateDecodeError>;

    /// Re-seeds from the stored seed, restoring the initial sequence.
    fn reset(&mut self) {
        let seed = self.seed();
        self.set_seed(seed);
    }
}

impl<E: Engine + ?Sized> Engine for &mut E {
    #[inline]
    fn next_u64(&mut self) -> u64 {
        (**self).next_u64()
    }

    #[inline]
    fn next_f64(&mut self) -> f64 {
        (**self).next_f64()
    }

    #[inline]
    fn next_f64_open(&mut self) -> f64 {
        (**self).next_f64_open()
    }

    fn set_seed(&mut self, seed: u64) {
        (**self).set_seed(seed)
    }

    fn set_seed_from(&mut self, seed: u64, source: &dyn SeedSource) {
        (**self).set_seed_from(seed, source)
    }

    fn seed(&self) -> u64 {
        (**self).seed()
    }

    fn state(&self) -> Vec<u8> {
        (**self).state()
    }

    fn set_state(&mut self, bytes: &[u8]) -> Result<(), StateDecodeError> {
        (**self).set_state(bytes)
    }

    fn reset(&mut self) {
        (**self).reset()
    }
}

impl<E: Engine + ?Sized> Engine for Box<E> {
    #[inline]
    fn next_u64(&mut self) -> u64 {
        (**self).next_u64()
    }

    #[inline]
    fn next_f64(&mut self) -> f64 {
        (**self).next_f64()
    }

    #[inline]
    fn next_f64_open(&mut self) -> f64 {
        (**self).next_f64_open()
    }

    fn set_seed(&mut self, seed: u64) {
        (**self).set_seed(seed)
    }

    fn set_seed_from(&mut self, seed: u64, source: &dyn SeedSource) {
        (**self).set_seed_from(seed, source)
    }

    fn seed(&self) -> u64 {
        (**self).seed()
    }

    fn state(&self) -> Vec<u8> {
        (**self).state()
    }

    fn set_state(&mut self, bytes: &[u8]) -> Result<(), StateDecodeError> {
        (**self).set_state(bytes)
    }

    fn reset(&mut self) {
        (**self).reset()
    }
}
