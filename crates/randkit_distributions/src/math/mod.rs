//! Numerical helpers shared by the distribution families.
//!
//! This module provides:
//! - [`constants`]: Precomputed constants used in densities and inversions
//! - [`poly_eval`]: Horner evaluation with highest-degree-first coefficients
//! - [`inverse_normal_cdf`]: Rational approximation of the standard Normal
//!   quantile function

pub mod constants;
mod inverse_normal;
mod polynomial;

pub use inverse_normal::inverse_normal_cdf;
pub use polynomial::poly_eval;
