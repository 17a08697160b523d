//! Continuous uniform distribution on `[a, b]`.

use randkit_engines::Engine;

use crate::error::{two_params, DistributionError, ParameterViolation};
use crate::traits::Distribution;

const NAME: &str = "Uniform";

/// Uniform distribution with bounds `a < b`.
///
/// Sampling maps [`Engine::next_f64`] linearly onto `[a, b)`.
///
/// # Examples
///
/// ```rust
/// use randkit_distributions::{Distribution, Uniform};
/// use randkit_engines::Xorshift128Plus;
///
/// let mut uniform = Uniform::new(Xorshift128Plus::new(9), -1.0, 4.0).unwrap();
/// let x = uniform.sample();
/// assert!((-1.0..4.0).contains(&x));
/// assert_eq!(uniform.pdf(0.0), 0.2);
/// ```
#[derive(Debug, Clone)]
pub struct Uniform<R> {
    engine: R,
    a: f64,
    b: f64,
}

impl<R: Engine> Uniform<R> {
    /// Creates a uniform distribution over `[a, b]`.
    ///
    /// # Errors
    ///
    /// [`ParameterViolation::NotOrdered`] unless `a < b`.
    pub fn new(engine: R, a: f64, b: f64) -> Result<Self, DistributionError> {
        let (a, b) = validate(a, b)?;
        Ok(Self { engine, a, b })
    }

    /// Creates a uniform distribution from a parameter slice `[a, b]`.
    ///
    /// # Errors
    ///
    /// [`ParameterViolation::Count`] unless exactly two parameters are given,
    /// otherwise as [`Uniform::new`].
    pub fn from_params(engine: R, params: &[f64]) -> Result<Self, DistributionError> {
        let (a, b) = two_params(NAME, params)?;
        Self::new(engine, a, b)
    }

    /// Replaces the bounds. On error the previous bounds are kept.
    ///
    /// # Errors
    ///
    /// As [`Uniform::new`].
    pub fn set_parameters(&mut self, a: f64, b: f64) -> Result<(), DistributionError> {
        (self.a, self.b) = validate(a, b)?;
        Ok(())
    }

    /// Returns the engine.
    pub fn into_engine(self) -> R {
        self.engine
    }
}

fn validate(a: f64, b: f64) -> Result<(f64, f64), DistributionError> {
    if a < b {
        Ok((a, b))
    } else {
        Err(DistributionError::invalid(
            NAME,
            ParameterViolation::NotOrdered { lower: a, upper: b },
        ))
    }
}

impl<R: Engine> Distribution for Uniform<R> {
    #[inline]
    fn sample(&mut self) -> f64 {
        self.a + (self.b - self.a) * self.engine.next_f64()
    }

    fn pdf(&self, x: f64) -> f64 {
        if x < self.a || x > self.b {
            0.0
        } else {
            1.0 / (self.b - self.a)
        }
    }

    fn cdf(&self, x: f64) -> f64 {
        if x < self.a {
            0.0
        } else if x >= self.b {
            1.0
        } else {
            (x - self.a) / (self.b - self.a)
        }
    }

    fn parameters(&self) -> (f64, f64) {
        (self.a, self.b)
    }

    fn name(&self) -> &'static str {
        NAME
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use randkit_engines::{Mt19937_64, SplitMix64};

    #[test]
    fn test_parameters_round_trip() {
        for (a, b) in [(0.0, 1.0), (3.0, 5.0), (-1.0, 4.0)] {
            let uniform = Uniform::new(Mt19937_64::new(1), a, b).unwrap();
            assert_eq!(uniform.parameters(), (a, b));
        }
    }

    #[test]
    fn test_pdf_inside_and_outside() {
        let cases = [
            (0.0, 1.0, [0.990064972772, 0.193343243202], [-1.0, 2.0], 1.0),
            (3.0, 5.0, [3.65506069727, 4.9866123335], [2.0, 6.0], 0.5),
            (-1.0, 4.0, [2.59357665745, -0.320356574673], [-2.0, 5.0], 0.2),
            (-4.0, 0.0, [-0.226993339583, -3.41094373091], [-5.0, 1.0], 0.25),
            (-10.0, -3.0, [-4.17595298522, -9.7428294559], [-11.0, -2.0], 1.0 / 7.0),
        ];
        for (a, b, inside, outside, density) in cases {
            let uniform = Uniform::new(SplitMix64::new(1), a, b).unwrap();
            for x in inside {
                assert_abs_diff_eq!(uniform.pdf(x), density, epsilon = 1e-12);
            }
            for x in outside {
                assert_eq!(uniform.pdf(x), 0.0);
            }
        }
    }

    #[test]
    fn test_cdf() {
        let uniform = Uniform::new(SplitMix64::new(1), -1.0, 4.0).unwrap();
        assert_eq!(uniform.cdf(-2.0), 0.0);
        assert_eq!(uniform.cdf(-1.0), 0.0);
        assert_abs_diff_eq!(uniform.cdf(1.5), 0.5, epsilon = 1e-15);
        assert_eq!(uniform.cdf(4.0), 1.0);
        assert_eq!(uniform.cdf(10.0), 1.0);
    }

    #[test]
    fn test_sample_is_linear_map_of_engine() {
        let mut uniform = Uniform::new(SplitMix64::new(20170611), 3.0, 5.0).unwrap();
        let mut reference = SplitMix64::new(20170611);
        for _ in 0..100 {
            let expected = 3.0 + 2.0 * reference.next_f64();
            assert_eq!(uniform.sample(), expected);
        }
    }

    #[test]
    fn test_rejects_unordered_bounds() {
        for (a, b) in [(1.0, 1.0), (2.0, 1.0), (f64::NAN, 1.0), (0.0, f64::NAN)] {
            let err = Uniform::new(SplitMix64::new(1), a, b).unwrap_err();
            assert!(matches!(
                err,
                DistributionError::InvalidParameter {
                    distribution: "Uniform",
                    violation: ParameterViolation::NotOrdered { .. }
                }
            ));
        }
    }

    #[test]
    fn test_from_params_checks_count() {
        let err = Uniform::from_params(SplitMix64::new(1), &[0.0]).unwrap_err();
        assert_eq!(
            err,
            DistributionError::InvalidParameter {
                distribution: "Uniform",
                violation: ParameterViolation::Count {
                    expected: 2,
                    found: 1
                }
            }
        );
        assert!(Uniform::from_params(SplitMix64::new(1), &[0.0, 1.0]).is_ok());
    }

    #[test]
    fn test_set_parameters_keeps_old_on_error() {
        let mut uniform = Uniform::new(SplitMix64::new(1), 0.0, 1.0).unwrap();
        assert!(uniform.set_parameters(5.0, 5.0).is_err());
        assert_eq!(uniform.parameters(), (0.0, 1.0));
        uniform.set_parameters(-2.0, 2.0).unwrap();
        assert_eq!(uniform.parameters(), (-2.0, 2.0));
    }
}
