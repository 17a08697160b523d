//! Non-deterministic seed sources.
//!
//! Seeding an engine with `0` asks for a seed nobody chose. Where that value
//! comes from is isolated behind [`SeedSource`] so that tests can pin it.

use std::time::{SystemTime, UNIX_EPOCH};

/// Substituted when a source itself yields zero (the 64-bit golden gamma).
const FALLBACK_SEED: u64 = 0x9E37_79B9_7F4A_7C15;

/// Provider of seeds for engines asked to seed themselves from `0`.
pub trait SeedSource {
    /// Returns a seed value. May be zero; callers go through
    /// [`resolve_seed`] which guarantees a non-zero result.
    fn next_seed(&self) -> u64;
}

/// Wall-clock seed source: nanoseconds since the UNIX epoch.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClockSeed;

impl SeedSource for SystemClockSeed {
    fn next_seed(&self) -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_nanos() as u64)
            .unwrap_or(FALLBACK_SEED)
    }
}

/// Seed source that always yields the same value. Intended for tests.
///
/// # Examples
///
/// ```rust
/// use randkit_engines::{Engine, FixedSeedSource, SplitMix64};
///
/// let mut rng = SplitMix64::new(1);
/// rng.set_seed_from(0, &FixedSeedSource(99));
/// assert_eq!(rng.seed(), 99);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedSeedSource(
    /// Value returned by every call
    pub u64,
);

impl SeedSource for FixedSeedSource {
    fn next_seed(&self) -> u64 {
        self.0
    }
}

/// Returns `seed` unchanged when non-zero, otherwise a non-zero value drawn
/// from `source`.
pub(crate) fn resolve_seed(seed: u64, source: &dyn SeedSource) -> u64 {
    if seed != 0 {
        return seed;
    }
    let drawn = match source.next_seed() {
        0 => FALLBACK_SEED,
        value => value,
    };
    tracing::debug!(seed = drawn, "substituted non-deterministic seed");
    drawn
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_zero_seed_is_kept() {
        assert_eq!(resolve_seed(42, &FixedSeedSource(7)), 42);
    }

    #[test]
    fn test_zero_seed_draws_from_source() {
        assert_eq!(resolve_seed(0, &FixedSeedSource(7)), 7);
    }

    #[test]
    fn test_zero_from_source_uses_fallback() {
        assert_eq!(resolve_seed(0, &FixedSeedSource(0)), FALLBACK_SEED);
    }

    #[test]
    fn test_system_clock_is_non_zero() {
        assert_ne!(resolve_seed(0, &SystemClockSeed), 0);
    }
}
