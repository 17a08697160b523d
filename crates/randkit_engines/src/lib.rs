//! # randkit_engines: Pseudo-Random Number Engines
//!
//! ## Layer 1 (Foundation) Role
//!
//! randkit_engines is the bottom layer of the randkit workspace, providing:
//! - The [`Engine`] capability contract (`engine`)
//! - Five engine families: [`SplitMix64`], [`Mt19937_64`],
//!   [`Xorshift128Plus`], [`Xoroshiro128Plus`] and [`Xorshift1024Star`]
//! - A binary state codec with family tags (`state`)
//! - A non-deterministic seed injection point (`seed`)
//! - An engine registry for name/tag based construction ([`EngineKind`])
//! - Error types: [`StateDecodeError`]
//!
//! ## Reproducibility
//!
//! Every engine is a pure function of its own state. Two engines of the same
//! family initialised with the same non-zero seed produce identical output
//! forever, and [`Engine::set_state`] restores the exact future sequence of
//! the engine whose state was captured.
//!
//! Seeding with `0` substitutes a time-derived seed. That single call is
//! non-deterministic; tests substitute a [`FixedSeedSource`] through
//! [`Engine::set_seed_from`].
//!
//! ## Usage Examples
//!
//! ```rust
//! use randkit_engines::{Engine, Xoroshiro128Plus};
//!
//! let mut rng = Xoroshiro128Plus::new(20170611);
//! let saved = rng.state();
//!
//! let first = rng.next_u64();
//! let u = rng.next_f64();
//! assert!((0.0..1.0).contains(&u));
//!
//! // Resume from the captured state
//! let mut resumed = Xoroshiro128Plus::new(1);
//! resumed.set_state(&saved).unwrap();
//! assert_eq!(resumed.next_u64(), first);
//! ```
//!
//! ## Concurrency
//!
//! Engines carry no internal locking. Give each thread its own engine, or
//! wrap a shared engine in external synchronisation.
//!
//! ## Feature Flags
//!
//! - `rand`: [`RandCompat`] adapter implementing `rand::RngCore`
//! - `serde`: `Deserialize` for [`EngineKind`]

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

mod engine;
mod error;
mod kind;
mod mt19937;
mod seed;
mod splitmix64;
pub mod state;
mod xoroshiro128plus;
mod xorshift1024star;
mod xorshift128plus;

#[cfg(feature = "rand")]
mod compat;

pub use engine::Engine;
pub use error::StateDecodeError;
pub use kind::{EngineKind, UnknownEngine};
pub use mt19937::Mt19937_64;
pub use seed::{FixedSeedSource, SeedSource, SystemClockSeed};
pub use splitmix64::SplitMix64;
pub use xoroshiro128plus::Xoroshiro128Plus;
pub use xorshift1024star::Xorshift1024Star;
pub use xorshift128plus::Xorshift128Plus;

#[cfg(feature = "rand")]
pub use compat::RandCompat;

// Every family satisfies the engine contract; checked at compile time only.
const _: () = {
    const fn assert_engine<E: Engine>() {}
    assert_engine::<SplitMix64>();
    assert_engine::<Mt19937_64>();
    assert_engine::<Xorshift128Plus>();
    assert_engine::<Xoroshiro128Plus>();
    assert_engine::<Xorshift1024Star>();
};
