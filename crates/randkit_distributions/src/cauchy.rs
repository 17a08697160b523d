//! Cauchy (Lorentz) distribution.

use std::f64::consts::PI;

use randkit_engines::Engine;

use crate::error::{positive, two_params, DistributionError};
use crate::math::constants::FRAC_1_PI;
use crate::traits::Distribution;

const NAME: &str = "Cauchy";

/// Cauchy distribution with `location` and `scale > 0`.
///
/// Sampled by exact inversion, `location + scale·tan(π(u - ½))` with `u`
/// drawn from the open unit interval so the tangent never reaches its poles.
/// The distribution has no mean or variance; samples are heavy-tailed.
///
/// # Examples
///
/// ```rust
/// use randkit_distributions::{Cauchy, Distribution};
/// use randkit_engines::Xorshift1024Star;
///
/// let mut cauchy = Cauchy::new(Xorshift1024Star::new(3), 1.0, 0.5).unwrap();
/// assert!(cauchy.sample().is_finite());
/// assert_eq!(cauchy.cdf(1.0), 0.5);
/// ```
#[derive(Debug, Clone)]
pub struct Cauchy<R> {
    engine: R,
    location: f64,
    scale: f64,
}

impl<R: Engine> Cauchy<R> {
    /// Creates a Cauchy distribution.
    ///
    /// # Errors
    ///
    /// [`ParameterViolation::NotPositive`](crate::ParameterViolation::NotPositive)
    /// unless `scale > 0`.
    pub fn new(engine: R, location: f64, scale: f64) -> Result<Self, DistributionError> {
        let scale = positive(NAME, "scale", scale)?;
        Ok(Self {
            engine,
            location,
            scale,
        })
    }

    /// Creates a Cauchy distribution from `[location, scale]`.
    ///
    /// # Errors
    ///
    /// [`ParameterViolation::Count`](crate::ParameterViolation::Count) unless
    /// exactly two parameters are given, otherwise as [`Cauchy::new`].
    pub fn from_params(engine: R, params: &[f64]) -> Result<Self, DistributionError> {
        let (location, scale) = two_params(NAME, params)?;
        Self::new(engine, location, scale)
    }

    /// Replaces location and scale. On error the previous values are kept.
    ///
    /// # Errors
    ///
    /// As [`Cauchy::new`].
    pub fn set_parameters(&mut self, location: f64, scale: f64) -> Result<(), DistributionError> {
        self.scale = positive(NAME, "scale", scale)?;
        self.location = location;
        Ok(())
    }

    /// Returns the engine.
    pub fn into_engine(self) -> R {
        self.engine
    }
}

impl<R: Engine> Distribution for Cauchy<R> {
    #[inline]
    fn sample(&mut self) -> f64 {
        self.location + self.scale * (PI * (self.engine.next_f64_open() - 0.5)).tan()
    }

    fn pdf(&self, x: f64) -> f64 {
        let d = (x - self.location) / self.scale;
        1.0 / (PI * self.scale * (1.0 + d * d))
    }

    fn cdf(&self, x: f64) -> f64 {
        0.5 + FRAC_1_PI * (x - self.location).atan2(self.scale)
    }

    fn parameters(&self) -> (f64, f64) {
        (self.location, self.scale)
    }

    fn name(&self) -> &'static str {
        NAME
    }
}
