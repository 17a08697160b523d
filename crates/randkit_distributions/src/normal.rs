//! Normal (Gaussian) distribution.

use randkit_engines::Engine;

use crate::error::{positive, two_params, DistributionError};
use crate::math::constants::{FRAC_1_SQRT_2, SQRT_2PI};
use crate::math::inverse_normal_cdf;
use crate::traits::Distribution;

const NAME: &str = "Normal";

/// Normal distribution with mean `mean` and standard deviation `sigma > 0`.
///
/// Sampling is by inversion: [`inverse_normal_cdf`] applied to an
/// open-interval draw from [`Engine::next_f64_open`]. One engine draw per
/// variate, no rejection and no cached pair.
///
/// # Examples
///
/// ```rust
/// use randkit_distributions::{Distribution, Normal};
/// use randkit_engines::SplitMix64;
///
/// let normal = Normal::new(SplitMix64::new(1), 0.0, 1.0).unwrap();
/// assert!((normal.pdf(0.0) - 0.3989422804014327).abs() < 1e-15);
/// assert_eq!(normal.cdf(0.0), 0.5);
/// ```
#[derive(Debug, Clone)]
pub struct Normal<R> {
    engine: R,
    mean: f64,
    sigma: f64,
}

impl<R: Engine> Normal<R> {
    /// Creates a Normal distribution.
    ///
    /// # Errors
    ///
    /// [`ParameterViolation::NotPositive`](crate::ParameterViolation::NotPositive)
    /// unless `sigma > 0`.
    pub fn new(engine: R, mean: f64, sigma: f64) -> Result<Self, DistributionError> {
        let sigma = positive(NAME, "sigma", sigma)?;
        Ok(Self {
            engine,
            mean,
            sigma,
        })
    }

    /// Creates a Normal distribution from `[mean, sigma]`.
    ///
    /// # Errors
    ///
    /// [`ParameterViolation::Count`](crate::ParameterViolation::Count) unless
    /// exactly two parameters are given, otherwise as [`Normal::new`].
    pub fn from_params(engine: R, params: &[f64]) -> Result<Self, DistributionError> {
        let (mean, sigma) = two_params(NAME, params)?;
        Self::new(engine, mean, sigma)
    }

    /// Replaces mean and sigma. On error the previous values are kept.
    ///
    /// # Errors
    ///
    /// As [`Normal::new`].
    pub fn set_parameters(&mut self, mean: f64, sigma: f64) -> Result<(), DistributionError> {
        self.sigma = positive(NAME, "sigma", sigma)?;
        self.mean = mean;
        Ok(())
    }

    /// Returns the engine.
    pub fn into_engine(self) -> R {
        self.engine
    }

    #[inline]
    fn standardise(&self, x: f64) -> f64 {
        (x - self.mean) / self.sigma
    }
}

impl<R: Engine> Distribution for Normal<R> {
    #[inline]
    fn sample(&mut self) -> f64 {
        inverse_normal_cdf(self.engine.next_f64_open()) * self.sigma + self.mean
    }

    fn pdf(&self, x: f64) -> f64 {
        let z = self.standardise(x);
        (-(z * z) / 2.0).exp() / (SQRT_2PI * self.sigma)
    }

    fn cdf(&self, x: f64) -> f64 {
        0.5 + 0.5 * libm::erf(self.standardise(x) * FRAC_1_SQRT_2)
    }

    fn parameters(&self) -> (f64, f64) {
        (self.mean, self.sigma)
    }

    fn name(&self) -> &'static str {
        NAME
    }
}
