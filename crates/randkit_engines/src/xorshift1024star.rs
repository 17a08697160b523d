//! Xorshift1024*: 1024 bits of state, multiplication as the output scrambler.
//!
//! Shift triple (31, 11, 30) and multiplier from Vigna, "An experimental
//! exploration of Marsaglia's xorshift generators, scrambled" (2016).
//! A rotating cursor selects the word pair updated on each draw.

use crate::engine::Engine;
use crate::error::StateDecodeError;
use crate::seed::{resolve_seed, SeedSource};
use crate::splitmix64::SplitMix64;
use crate::state::{StateReader, StateWriter};

const TAG: &str = "xorshift1024star";
const WORDS: usize = 16;
const MULTIPLIER: u64 = 1_181_783_497_276_652_981;

/// Xorshift1024* engine, seeded through SplitMix64.
///
/// # Examples
///
/// ```rust
/// use randkit_engines::{Engine, Xorshift1024Star};
///
/// let mut rng = Xorshift1024Star::new(20170611);
/// assert_eq!(rng.next_u64(), 7215189442377424257);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Xorshift1024Star {
    seed: u64,
    state: [u64; WORDS],
    index: usize,
}

impl Xorshift1024Star {
    /// Family tag at the head of the serialised state.
    pub const TAG: &'static str = TAG;

    /// Number of 64-bit words of state.
    pub const STATE_WORDS: usize = WORDS;

    /// Creates an engine seeded with `seed` (`0` selects a time-derived seed).
    pub fn new(seed: u64) -> Self {
        let mut rng = Self {
            seed: 0,
            state: [0; WORDS],
            index: 0,
        };
        rng.set_seed(seed);
        rng
    }
}

impl Engine for Xorshift1024Star {
    #[inline]
    fn next_u64(&mut self) -> u64 {
        let s0 = self.state[self.index];
        self.index = (self.index + 1) & (WORDS - 1);
        let mut s1 = self.state[self.index];
        s1 ^= s1 << 31;
        self.state[self.index] = s1 ^ s0 ^ (s1 >> 11) ^ (s0 >> 30);
        self.state[self.index].wrapping_mul(MULTIPLIER)
    }

    fn set_seed_from(&mut self, seed: u64, source: &dyn SeedSource) {
        let seed = resolve_seed(seed, source);
        let mut expander = SplitMix64::expander(seed);
        self.seed = seed;
        self.index = 0;
        for word in self.state.iter_mut() {
            *word = expander.next_u64();
        }
    }

    fn seed(&self) -> u64 {
        self.seed
    }

    fn state(&self) -> Vec<u8> {
        StateWriter::new(TAG)
            .word(self.seed)
            .word(self.index as u64)
            .words(&self.state)
            .finish()
    }

    fn set_state(&mut self, bytes: &[u8]) -> Result<(), StateDecodeError> {
        let mut reader = StateReader::open(bytes, TAG)?;
        let seed = reader.word("seed")?;
        let index = reader.cursor(WORDS - 1)?;
        let mut state = [0u64; WORDS];
        reader.words(&mut state)?;
        self.seed = seed;
        self.index = index;
        self.state = state;
        Ok(())
    }
}
