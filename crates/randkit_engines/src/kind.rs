//! Engine registry: name/tag based construction and state restoration.

use std::fmt;
use std::str::FromStr;

use crate::engine::Engine;
use crate::error::StateDecodeError;
use crate::{Mt19937_64, SplitMix64, Xoroshiro128Plus, Xorshift1024Star, Xorshift128Plus};

/// The engine families known to this crate.
///
/// Parsing and display use the serialised state tags, so a name read from a
/// configuration file and a tag read from a state file resolve identically.
///
/// # Examples
///
/// ```rust
/// use randkit_engines::{Engine, EngineKind};
///
/// let kind: EngineKind = "xorshift1024star".parse().unwrap();
/// let mut rng = kind.build(42);
/// rng.next_u64();
///
/// let restored = EngineKind::restore(&rng.state()).unwrap();
/// assert_eq!(restored.seed(), 42);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
pub enum EngineKind {
    /// [`SplitMix64`]
    #[cfg_attr(feature = "serde", serde(rename = "splitmix64"))]
    SplitMix64,
    /// [`Mt19937_64`]
    #[cfg_attr(feature = "serde", serde(rename = "mt19937"))]
    Mt19937,
    /// [`Xorshift128Plus`]
    #[cfg_attr(feature = "serde", serde(rename = "xorshift128plus"))]
    Xorshift128Plus,
    /// [`Xoroshiro128Plus`]
    #[default]
    #[cfg_attr(feature = "serde", serde(rename = "xoroshiro128plus"))]
    Xoroshiro128Plus,
    /// [`Xorshift1024Star`]
    #[cfg_attr(feature = "serde", serde(rename = "xorshift1024star"))]
    Xorshift1024Star,
}

impl EngineKind {
    /// All families, in a fixed order.
    pub const ALL: [EngineKind; 5] = [
        EngineKind::Mt19937,
        EngineKind::SplitMix64,
        EngineKind::Xorshift128Plus,
        EngineKind::Xorshift1024Star,
        EngineKind::Xoroshiro128Plus,
    ];

    /// ASCII tag heading this family's serialised state.
    pub fn tag(&self) -> &'static str {
        match self {
            EngineKind::SplitMix64 => SplitMix64::TAG,
            EngineKind::Mt19937 => Mt19937_64::TAG,
            EngineKind::Xorshift128Plus => Xorshift128Plus::TAG,
            EngineKind::Xoroshiro128Plus => Xoroshiro128Plus::TAG,
            EngineKind::Xorshift1024Star => Xorshift1024Star::TAG,
        }
    }

    /// Exact length in bytes of this family's serialised state.
    pub fn state_len(&self) -> usize {
        let words = match self {
            EngineKind::SplitMix64 => 2,
            EngineKind::Mt19937 => 2 + Mt19937_64::STATE_WORDS,
            EngineKind::Xorshift128Plus | EngineKind::Xoroshiro128Plus => 3,
            EngineKind::Xorshift1024Star => 2 + Xorshift1024Star::STATE_WORDS,
        };
        self.tag().len() + words * crate::state::WORD_BYTES
    }

    /// Constructs a boxed engine of this family seeded with `seed`.
    pub fn build(&self, seed: u64) -> Box<dyn Engine> {
        match self {
            EngineKind::SplitMix64 => Box::new(SplitMix64::new(seed)),
            EngineKind::Mt19937 => Box::new(Mt19937_64::new(seed)),
            EngineKind::Xorshift128Plus => Box::new(Xorshift128Plus::new(seed)),
            EngineKind::Xoroshiro128Plus => Box::new(Xoroshiro128Plus::new(seed)),
            EngineKind::Xorshift1024Star => Box::new(Xorshift1024Star::new(seed)),
        }
    }

    /// Identifies the family whose tag prefixes `bytes`.
    pub fn detect(bytes: &[u8]) -> Option<EngineKind> {
        Self::ALL
            .into_iter()
            .find(|kind| bytes.starts_with(kind.tag().as_bytes()))
    }

    /// Rebuilds an engine of whichever family produced `bytes`.
    ///
    /// # Errors
    ///
    /// [`StateDecodeError::UnknownTag`] when no family tag matches, otherwise
    /// any error from the family's [`Engine::set_state`].
    pub fn restore(bytes: &[u8]) -> Result<Box<dyn Engine>, StateDecodeError> {
        let kind = Self::detect(bytes).ok_or_else(|| {
            tracing::debug!(len = bytes.len(), "no engine tag matches state");
            StateDecodeError::UnknownTag
        })?;
        // Any non-zero seed avoids the clock; set_state overwrites it.
        let mut engine = kind.build(1);
        engine.set_state(bytes)?;
        Ok(engine)
    }
}

impl fmt::Display for EngineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Error from parsing an unknown engine name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown engine '{0}' (expected one of: mt19937, splitmix64, xorshift128plus, xoroshiro128plus, xorshift1024star)")]
pub struct UnknownEngine(
    /// The rejected name, as given
    pub String,
);

impl FromStr for EngineKind {
    type Err = UnknownEngine;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|kind| kind.tag() == wanted)
            .ok_or_else(|| UnknownEngine(s.to_string()))
    }
}
