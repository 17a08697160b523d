//! The distribution capability trait.

/// A continuous probability distribution driven by an engine.
///
/// Implementors transform uniform engine output into variates and evaluate
/// their density and cumulative distribution in closed form.
///
/// # Examples
///
/// ```rust
/// use randkit_distributions::{Cauchy, Distribution};
/// use randkit_engines::Mt19937_64;
///
/// let mut cauchy = Cauchy::new(Mt19937_64::new(5489), 0.0, 1.0).unwrap();
///
/// let mut buffer = [0.0; 64];
/// cauchy.fill(&mut buffer);
/// assert!(buffer.iter().all(|x| x.is_finite()));
/// assert_eq!(cauchy.parameters(), (0.0, 1.0));
/// ```
pub trait Distribution {
    /// Draws the next variate, advancing the engine.
    fn sample(&mut self) -> f64;

    /// Probability density at `x`.
    fn pdf(&self, x: f64) -> f64;

    /// Probability that a variate is less than or equal to `x`.
    fn cdf(&self, x: f64) -> f64;

    /// The two parameters, in constructor order.
    fn parameters(&self) -> (f64, f64);

    /// Family name, as used in error messages.
    fn name(&self) -> &'static str;

    /// Fills `out` with consecutive variates.
    #[inline]
    fn fill(&mut self, out: &mut [f64]) {
        for slot in out.iter_mut() {
            *slot = self.sample();
        }
    }
}
