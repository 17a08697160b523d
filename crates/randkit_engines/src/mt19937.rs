//! MT19937-64: the 64-bit Mersenne Twister.
//!
//! Reference: M. Matsumoto and T. Nishimura, "Mersenne Twister: a
//! 623-dimensionally equidistributed uniform pseudorandom number generator",
//! ACM TOMACS 8 (1998); 64-bit parameters from Nishimura (2000).
//!
//! The 312-word state is regenerated in bulk (the "twist") once every 312
//! draws; each draw then tempers one word.

use crate::engine::Engine;
use crate::error::StateDecodeError;
use crate::seed::{resolve_seed, SeedSource};
use crate::state::{StateReader, StateWriter};

const TAG: &str = "mt19937";

/// Degree of recurrence (state words).
const NN: usize = 312;
/// Middle word offset.
const MM: usize = 156;
const MATRIX_A: u64 = 0xB502_6F5A_A966_19E9;
/// Most significant 33 bits.
const UPPER_MASK: u64 = 0xFFFF_FFFF_8000_0000;
/// Least significant 31 bits.
const LOWER_MASK: u64 = 0x0000_0000_7FFF_FFFF;
const INIT_MULTIPLIER: u64 = 6_364_136_223_846_793_005;

/// 64-bit Mersenne Twister with period 2^19937 - 1.
///
/// # Examples
///
/// ```rust
/// use randkit_engines::{Engine, Mt19937_64};
///
/// // Default seed of the reference implementation
/// let mut rng = Mt19937_64::new(5489);
/// assert_eq!(rng.next_u64(), 14514284786278117030);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mt19937_64 {
    seed: u64,
    index: usize,
    state: Box<[u64; NN]>,
}

impl Mt19937_64 {
    /// Family tag at the head of the serialised state.
    pub const TAG: &'static str = TAG;

    /// Number of 64-bit words of state.
    pub const STATE_WORDS: usize = NN;

    /// Creates an engine seeded with `seed` (`0` selects a time-derived seed).
    pub fn new(seed: u64) -> Self {
        let mut rng = Self {
            seed: 0,
            index: NN,
            state: Box::new([0; NN]),
        };
        rng.set_seed(seed);
        rng
    }

    /// Regenerates all `NN` words and rewinds the cursor.
    fn twist(&mut self) {
        let mt = &mut self.state;

        #[inline(always)]
        fn mix(upper: u64, lower: u64, far: u64) -> u64 {
            let y = (upper & UPPER_MASK) | (lower & LOWER_MASK);
            far ^ (y >> 1) ^ ((y & 1).wrapping_mul(MATRIX_A))
        }

        for i in 0..NN - MM {
            mt[i] = mix(mt[i], mt[i + 1], mt[i + MM]);
        }
        for i in NN - MM..NN - 1 {
            mt[i] = mix(mt[i], mt[i + 1], mt[i + MM - NN]);
        }
        mt[NN - 1] = mix(mt[NN - 1], mt[0], mt[MM - 1]);

        self.index = 0;
    }
}

impl Engine for Mt19937_64 {
    #[inline]
    fn next_u64(&mut self) -> u64 {
        if self.index >= NN {
            self.twist();
        }
        let mut y = self.state[self.index];
        self.index += 1;

        y ^= (y >> 29) & 0x5555_5555_5555_5555;
        y ^= (y << 17) & 0x71D6_7FFF_EDA6_0000;
        y ^= (y << 37) & 0xFFF7_EEE0_0000_0000;
        y ^ (y >> 43)
    }

    fn set_seed_from(&mut self, seed: u64, source: &dyn SeedSource) {
        let seed = resolve_seed(seed, source);
        self.seed = seed;
        self.state[0] = seed;
        for i in 1..NN {
            let prev = self.state[i - 1];
            self.state[i] = INIT_MULTIPLIER
                .wrapping_mul(prev ^ (prev >> 62))
                .wrapping_add(i as u64);
        }
        self.index = NN;
    }

    fn seed(&self) -> u64 {
        self.seed
    }

    fn state(&self) -> Vec<u8> {
        StateWriter::new(TAG)
            .word(self.seed)
            .word(self.index as u64)
            .words(&self.state[..])
            .finish()
    }

    fn set_state(&mut self, bytes: &[u8]) -> Result<(), StateDecodeError> {
        let mut reader = StateReader::open(bytes, TAG)?;
        let seed = reader.word("seed")?;
        let index = reader.cursor(NN)?;
        let mut state = Box::new([0u64; NN]);
        reader.words(&mut state[..])?;

        self.seed = seed;
        self.index = index;
        self.state = state;
        Ok(())
    }
}
