//! Mathematical constants.

/// √(2π)
pub const SQRT_2PI: f64 = 2.506_628_274_631_000_2;

/// 1 / √(2π)
pub const FRAC_1_SQRT_2PI: f64 = 0.398_942_280_401_432_7;

/// 1 / √2
pub const FRAC_1_SQRT_2: f64 = std::f64::consts::FRAC_1_SQRT_2;

/// 1 / π
pub const FRAC_1_PI: f64 = std::f64::consts::FRAC_1_PI;

/// Distance from 1.0 to the next larger `f64`.
pub const EPSILON: f64 = f64::EPSILON;

/// ln(f64::MAX); `exp` overflows above this.
pub const MAX_LOG: f64 = 709.782_712_893_384;
