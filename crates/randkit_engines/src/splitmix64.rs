//! SplitMix64: a 64-bit avalanche generator.
//!
//! Each draw adds the golden gamma to a single word of state and mixes the
//! result through two xor-shift-multiply rounds and a final xor-shift
//! (Steele, Lea & Flood, "Fast Splittable Pseudorandom Number Generators",
//! OOPSLA 2014; constants from Vigna's public domain reference).
//!
//! Besides standalone use, it expands a single 64-bit seed into the
//! multi-word initial state of the larger engines.

use crate::engine::Engine;
use crate::error::StateDecodeError;
use crate::seed::{resolve_seed, SeedSource};
use crate::state::{StateReader, StateWriter};

const TAG: &str = "splitmix64";
const GOLDEN_GAMMA: u64 = 0x9E37_79B9_7F4A_7C15;
const MIX_1: u64 = 0xBF58_476D_1CE4_E5B9;
const MIX_2: u64 = 0x94D0_49BB_1331_11EB;

/// SplitMix64 engine with one word of state.
///
/// # Examples
///
/// ```rust
/// use randkit_engines::{Engine, SplitMix64};
///
/// let mut rng = SplitMix64::new(1234567);
/// assert_eq!(rng.next_u64(), 6457827717110365317);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitMix64 {
    seed: u64,
    state: u64,
}

impl SplitMix64 {
    /// Family tag at the head of the serialised state.
    pub const TAG: &'static str = TAG;

    /// Creates an engine seeded with `seed` (`0` selects a time-derived seed).
    pub fn new(seed: u64) -> Self {
        let mut rng = Self { seed: 0, state: 0 };
        rng.set_seed(seed);
        rng
    }

    /// Creates an engine whose state is exactly `seed`, with no zero
    /// substitution. Used for seed expansion inside the larger engines.
    pub(crate) fn expander(seed: u64) -> Self {
        Self { seed, state: seed }
    }
}

impl Engine for SplitMix64 {
    #[inline]
    fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(GOLDEN_GAMMA);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(MIX_1);
        z = (z ^ (z >> 27)).wrapping_mul(MIX_2);
        z ^ (z >> 31)
    }

    fn set_seed_from(&mut self, seed: u64, source: &dyn SeedSource) {
        let seed = resolve_seed(seed, source);
        self.seed = seed;
        self.state = seed;
    }

    fn seed(&self) -> u64 {
        self.seed
    }

    fn state(&self) -> Vec<u8> {
        StateWriter::new(TAG).word(self.seed).word(self.state).finish()
    }

    fn set_state(&mut self, bytes: &[u8]) -> Result<(), StateDecodeError> {
        let mut reader = StateReader::open(bytes, TAG)?;
        let seed = reader.word("seed")?;
        let state = reader.word("state")?;
        self.seed = seed;
        self.state = state;
        Ok(())
    }
}
