//! Error types for distribution construction.
//!
//! This module provides:
//! - `DistributionError`: Failure to initialise a distribution
//! - `ParameterViolation`: The specific constraint that was broken

use thiserror::Error;

/// Distribution construction errors.
///
/// Returned by every constructor and by `set_parameters`. On error, a
/// distribution being re-parameterised keeps its previous parameters.
///
/// # Examples
/// ```
/// use randkit_distributions::{DistributionError, ParameterViolation};
///
/// let err = DistributionError::InvalidParameter {
///     distribution: "Normal",
///     violation: ParameterViolation::NotPositive { name: "sigma", value: 0.0 },
/// };
/// assert!(format!("{}", err).contains("sigma"));
/// ```
#[derive(Debug, Clone, Error, PartialEq)]
pub enum DistributionError {
    /// Parameters violate the family's constraints.
    #[error("Invalid {distribution} parameters: {violation}")]
    InvalidParameter {
        /// Name of the distribution family
        distribution: &'static str,
        /// The constraint that was broken
        violation: ParameterViolation,
    },
}

/// A broken parameter constraint.
///
/// NaN parameters fail the same predicates as out-of-range values, since
/// every comparison with NaN is false.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ParameterViolation {
    /// Wrong number of parameters supplied.
    #[error("expected {expected} parameters, found {found}")]
    Count {
        /// Number of parameters the family takes
        expected: usize,
        /// Number of parameters supplied
        found: usize,
    },

    /// A scale parameter is not strictly positive.
    #[error("parameter '{name}' must be greater than 0, got {value}")]
    NotPositive {
        /// Parameter name
        name: &'static str,
        /// The rejected value
        value: f64,
    },

    /// Interval bounds are not strictly increasing.
    #[error("lower bound {lower} must be less than upper bound {upper}")]
    NotOrdered {
        /// Lower bound supplied
        lower: f64,
        /// Upper bound supplied
        upper: f64,
    },
}

impl DistributionError {
    /// Builds an `InvalidParameter` error, recording it at debug level.
    pub(crate) fn invalid(distribution: &'static str, violation: ParameterViolation) -> Self {
        let err = DistributionError::InvalidParameter {
            distribution,
            violation,
        };
        tracing::debug!(error = %err, "rejected distribution parameters");
        err
    }
}

/// Splits `params` into exactly two values.
pub(crate) fn two_params(
    distribution: &'static str,
    params: &[f64],
) -> Result<(f64, f64), DistributionError> {
    match *params {
        [first, second] => Ok((first, second)),
        _ => Err(DistributionError::invalid(
            distribution,
            ParameterViolation::Count {
                expected: 2,
                found: params.len(),
            },
        )),
    }
}

/// Checks that a scale parameter is strictly positive.
pub(crate) fn positive(
    distribution: &'static str,
    name: &'static str,
    value: f64,
) -> Result<f64, DistributionError> {
    if value > 0.0 {
        Ok(value)
    } else {
        Err(DistributionError::invalid(
            distribution,
            ParameterViolation::NotPositive { name, value },
        ))
    }
}
