//! Adapter exposing any [`Engine`] as a `rand::RngCore`.

use rand::RngCore;

use crate::engine::Engine;

/// Wraps an engine so it can drive code written against `rand::RngCore`.
///
/// `next_u32` takes the upper half of a 64-bit draw; byte fills consume whole
/// draws in little-endian order.
///
/// # Examples
///
/// ```rust
/// use rand::Rng;
/// use randkit_engines::{RandCompat, Xoroshiro128Plus};
///
/// let mut rng = RandCompat::new(Xoroshiro128Plus::new(7));
/// let roll: u8 = rng.gen_range(1..=6);
/// assert!((1..=6).contains(&roll));
/// ```
#[derive(Debug, Clone)]
pub struct RandCompat<E> {
    engine: E,
}

impl<E: Engine> RandCompat<E> {
    /// Wraps `engine`.
    pub fn new(engine: E) -> Self {
        Self { engine }
    }

    /// Returns the wrapped engine.
    pub fn into_inner(self) -> E {
        self.engine
    }

    /// Borrows the wrapped engine.
    pub fn engine(&self) -> &E {
        &self.engine
    }
}

impl<E: Engine> RngCore for RandCompat<E> {
    fn next_u32(&mut self) -> u32 {
        (self.engine.next_u64() >> 32) as u32
    }

    fn next_u64(&mut self) -> u64 {
        self.engine.next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(8) {
            let bytes = self.engine.next_u64().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}
