//! Xoroshiro128+: xor/rotate/shift/rotate over 128 bits of state.
//!
//! Rotation constants (55, 14, 36) from Blackman & Vigna's original 2016
//! release. Period 2^128 - 1 for any non-zero state.

use crate::engine::Engine;
use crate::error::StateDecodeError;
use crate::seed::{resolve_seed, SeedSource};
use crate::splitmix64::SplitMix64;
use crate::state::{StateReader, StateWriter};

const TAG: &str = "xoroshiro128plus";

/// Xoroshiro128+ engine, seeded through SplitMix64.
///
/// # Examples
///
/// ```rust
/// use randkit_engines::{Engine, Xoroshiro128Plus};
///
/// let mut rng = Xoroshiro128Plus::new(20170611);
/// assert_eq!(rng.next_u64(), 8577138835177023919);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Xoroshiro128Plus {
    seed: u64,
    state: [u64; 2],
}

impl Xoroshiro128Plus {
    /// Family tag at the head of the serialised state.
    pub const TAG: &'static str = TAG;

    /// Creates an engine seeded with `seed` (`0` selects a time-derived seed).
    pub fn new(seed: u64) -> Self {
        let mut rng = Self {
            seed: 0,
            state: [0; 2],
        };
        rng.set_seed(seed);
        rng
    }
}

impl Engine for Xoroshiro128Plus {
    #[inline]
    fn next_u64(&mut self) -> u64 {
        let s0 = self.state[0];
        let mut s1 = self.state[1];
        let result = s0.wrapping_add(s1);

        s1 ^= s0;
        self.state[0] = s0.rotate_left(55) ^ s1 ^ (s1 << 14);
        self.state[1] = s1.rotate_left(36);

        result
    }

    fn set_seed_from(&mut self, seed: u64, source: &dyn SeedSource) {
        let seed = resolve_seed(seed, source);
        let mut expander = SplitMix64::expander(seed);
        self.seed = seed;
        self.state = [expander.next_u64(), expander.next_u64()];
    }

    fn seed(&self) -> u64 {
        self.seed
    }

    fn state(&self) -> Vec<u8> {
        StateWriter::new(TAG)
            .word(self.seed)
            .words(&self.state)
            .finish()
    }

    fn set_state(&mut self, bytes: &[u8]) -> Result<(), StateDecodeError> {
        let mut reader = StateReader::open(bytes, TAG)?;
        let seed = reader.word("seed")?;
        let mut state = [0u64; 2];
        reader.words(&mut state)?;
        self.seed = seed;
        self.state = state;
        Ok(())
    }
}
