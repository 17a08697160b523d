//! # randkit_distributions: Continuous Probability Distributions
//!
//! ## Layer 2 (Distributions) Role
//!
//! randkit_distributions sits on top of randkit_engines, providing:
//! - The [`Distribution`] trait (sampling, PDF, CDF, parameter introspection)
//! - Four continuous families: [`Uniform`], [`Normal`], [`Cauchy`] and
//!   [`LogNormal`]
//! - Numerical helpers: Horner evaluation and the inverse Normal CDF
//!   ([`math`])
//! - Error types: [`DistributionError`]
//!
//! ## Engines
//!
//! Every distribution is generic over any [`Engine`]. Pass an engine by
//! value to hand over ownership, or `&mut engine` to borrow it for the
//! lifetime of the distribution. A distribution only ever calls
//! [`Engine::next_f64`] and [`Engine::next_f64_open`].
//!
//! ## Usage Examples
//!
//! ```rust
//! use randkit_distributions::{Distribution, Normal};
//! use randkit_engines::Xoroshiro128Plus;
//!
//! let mut engine = Xoroshiro128Plus::new(20170611);
//! let mut normal = Normal::new(&mut engine, 3.0, 2.0).unwrap();
//!
//! let x = normal.sample();
//! assert!(x.is_finite());
//! assert!((normal.cdf(3.0) - 0.5).abs() < 1e-15);
//! ```
//!
//! ## Invalid Parameters
//!
//! Construction validates parameters and returns
//! [`DistributionError::InvalidParameter`] rather than panicking:
//!
//! ```rust
//! use randkit_distributions::{DistributionError, Uniform};
//! use randkit_engines::SplitMix64;
//!
//! let err = Uniform::new(SplitMix64::new(1), 5.0, 1.0).unwrap_err();
//! assert!(matches!(err, DistributionError::InvalidParameter { .. }));
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

mod cauchy;
mod error;
mod lognormal;
pub mod math;
mod normal;
mod traits;
mod uniform;

pub use cauchy::Cauchy;
pub use error::{DistributionError, ParameterViolation};
pub use lognormal::LogNormal;
pub use normal::Normal;
pub use traits::Distribution;
pub use uniform::Uniform;

#[doc(no_inline)]
pub use randkit_engines::Engine;
