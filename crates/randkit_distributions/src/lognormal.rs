//! Log-Normal distribution.

use randkit_engines::Engine;

use crate::error::{two_params, DistributionError, ParameterViolation};
use crate::math::constants::FRAC_1_SQRT_2PI;
use crate::normal::Normal;
use crate::traits::Distribution;

const NAME: &str = "LogNormal";

/// Log-Normal distribution: `X = exp(Y)` with `Y ~ Normal(mu, sigma)`.
///
/// `mu` and `sigma` are the mean and standard deviation of `ln X`, not of
/// `X`. The distribution owns an internal [`Normal`] with the same engine
/// and parameters; sampling exponentiates its draws and the CDF evaluates it
/// at `ln x`. Density and CDF are zero for `x <= 0`.
///
/// # Examples
///
/// ```rust
/// use randkit_distributions::{Distribution, LogNormal};
/// use randkit_engines::Mt19937_64;
///
/// let mut lognormal = LogNormal::new(Mt19937_64::new(5489), 0.0, 1.0).unwrap();
/// assert!(lognormal.sample() > 0.0);
/// assert_eq!(lognormal.cdf(1.0), 0.5);
/// assert_eq!(lognormal.pdf(-2.0), 0.0);
/// ```
#[derive(Debug, Clone)]
pub struct LogNormal<R> {
    normal: Normal<R>,
}

impl<R: Engine> LogNormal<R> {
    /// Creates a Log-Normal distribution.
    ///
    /// # Errors
    ///
    /// [`ParameterViolation::NotPositive`] unless `sigma > 0`.
    pub fn new(engine: R, mu: f64, sigma: f64) -> Result<Self, DistributionError> {
        let normal = Normal::new(engine, mu, sigma).map_err(relabel)?;
        Ok(Self { normal })
    }

    /// Creates a Log-Normal distribution from `[mu, sigma]`.
    ///
    /// # Errors
    ///
    /// [`ParameterViolation::Count`] unless exactly two parameters are given,
    /// otherwise as [`LogNormal::new`].
    pub fn from_params(engine: R, params: &[f64]) -> Result<Self, DistributionError> {
        let (mu, sigma) = two_params(NAME, params)?;
        Self::new(engine, mu, sigma)
    }

    /// Replaces `mu` and `sigma`. On error the previous values are kept.
    ///
    /// # Errors
    ///
    /// As [`LogNormal::new`].
    pub fn set_parameters(&mut self, mu: f64, sigma: f64) -> Result<(), DistributionError> {
        self.normal.set_parameters(mu, sigma).map_err(relabel)
    }

    /// The underlying Normal distribution of `ln X`.
    pub fn normal(&self) -> &Normal<R> {
        &self.normal
    }

    /// Returns the engine.
    pub fn into_engine(self) -> R {
        self.normal.into_engine()
    }
}

// Errors from the inner Normal are reported against this family.
fn relabel(err: DistributionError) -> DistributionError {
    match err {
        DistributionError::InvalidParameter { violation, .. } => {
            DistributionError::InvalidParameter {
                distribution: NAME,
                violation,
            }
        }
    }
}

impl<R: Engine> Distribution for LogNormal<R> {
    #[inline]
    fn sample(&mut self) -> f64 {
        self.normal.sample().exp()
    }

    fn pdf(&self, x: f64) -> f64 {
        if x <= 0.0 {
            return 0.0;
        }
        let (mu, sigma) = self.normal.parameters();
        let z = (x.ln() - mu) / sigma;
        FRAC_1_SQRT_2PI * (-(z * z) / 2.0).exp() / (x * sigma)
    }

    fn cdf(&self, x: f64) -> f64 {
        if x <= 0.0 {
            return 0.0;
        }
        self.normal.cdf(x.ln())
    }

    fn parameters(&self) -> (f64, f64) {
        self.normal.parameters()
    }

    fn name(&self) -> &'static str {
        NAME
    }
}
