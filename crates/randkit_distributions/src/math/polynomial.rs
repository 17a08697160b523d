//! Polynomial evaluation.

use num_traits::Float;

/// Evaluates a polynomial at `x` by Horner's method.
///
/// Coefficients are ordered highest degree first, so
/// `[c_n, ..., c_1, c_0]` evaluates `c_n·xⁿ + ... + c_1·x + c_0`. The degree
/// is `coefficients.len() - 1`; an empty slice evaluates to zero.
///
/// Generic over [`Float`] so it serves both `f32` and `f64` callers.
///
/// # Examples
///
/// ```rust
/// use randkit_distributions::math::poly_eval;
///
/// // -2x² + 5x - 7 at x = 3
/// assert_eq!(poly_eval(3.0, &[-2.0, 5.0, -7.0]), -10.0);
/// ```
#[inline]
pub fn poly_eval<T: Float>(x: T, coefficients: &[T]) -> T {
    coefficients
        .iter()
        .fold(T::zero(), |acc, &coefficient| acc * x + coefficient)
}
