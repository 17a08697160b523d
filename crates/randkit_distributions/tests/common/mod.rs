//! Goodness-of-fit helpers shared by the integration tests.
//!
//! - Kolmogorov-Smirnov statistic with the limiting-distribution p-value
//! - Anderson-Darling normality test with estimated mean and variance,
//!   using D'Agostino's (1986) p-value approximation

#![allow(dead_code)]

use randkit_distributions::Distribution;

/// Variates drawn per test.
pub const SAMPLES: usize = 10_000;

/// Significance below which a fit is rejected.
pub const ALPHA: f64 = 0.001;

/// Draws `SAMPLES` variates from `dist`.
pub fn draw<D: Distribution>(dist: &mut D) -> Vec<f64> {
    let mut values = vec![0.0; SAMPLES];
    dist.fill(&mut values);
    values
}

/// Two-sided Kolmogorov-Smirnov statistic of `values` against `cdf`.
///
/// Sorts `values` in place.
pub fn ks_statistic(values: &mut [f64], cdf: impl Fn(f64) -> f64) -> f64 {
    values.sort_by(f64::total_cmp);
    let n = values.len() as f64;
    let mut above = 0.0_f64;
    let mut below = 0.0_f64;
    for (i, &x) in values.iter().enumerate() {
        let expected = cdf(x);
        above = above.max((i + 1) as f64 / n - expected);
        below = below.max(expected - i as f64 / n);
    }
    above.max(below)
}

/// Probability that `√n · D` exceeds `y` under the null hypothesis.
///
/// Series from Cephes `kolmogorov.c`.
pub fn kolmogorov(y: f64) -> f64 {
    if y < 1.1e-16 {
        return 1.0;
    }
    let x = -2.0 * y * y;
    let mut sign = 1.0;
    let mut sum = 0.0;
    let mut r = 1.0_f64;
    loop {
        let term = (x * r * r).exp();
        sum += sign * term;
        if term == 0.0 || term / sum <= 1.1e-16 {
            break;
        }
        r += 1.0;
        sign = -sign;
    }
    2.0 * sum
}

/// Draws `SAMPLES` variates and returns the KS statistic and p-value.
pub fn ks_test<D: Distribution>(dist: &mut D) -> (f64, f64) {
    let mut values = draw(dist);
    let d = ks_statistic(&mut values, |x| dist.cdf(x));
    let p = kolmogorov(d * (values.len() as f64).sqrt());
    (d, p)
}

/// Outcome of an Anderson-Darling normality test.
#[derive(Debug, Clone)]
pub struct AndersonDarling {
    /// Small-sample adjusted statistic A²*
    pub statistic: f64,
    /// Approximate p-value
    pub p_value: f64,
}

impl AndersonDarling {
    /// Significance levels in percent.
    pub const SIGNIFICANCE: [f64; 5] = [10.0, 5.0, 2.5, 1.0, 0.5];

    /// Critical values of A²* at each significance level.
    pub const CRITICAL_VALUES: [f64; 5] = [0.631, 0.752, 0.873, 1.035, 1.159];
}

/// Anderson-Darling test that `values` come from some Normal distribution.
///
/// Mean and standard deviation are estimated from the sample. Sorts
/// `values` in place.
pub fn anderson_darling_normality(values: &mut [f64]) -> AndersonDarling {
    values.sort_by(f64::total_cmp);
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let sd = (values.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / (n - 1.0)).sqrt();

    let z: Vec<f64> = values
        .iter()
        .map(|&x| 0.5 + 0.5 * libm::erf((x - mean) / sd * std::f64::consts::FRAC_1_SQRT_2))
        .collect();

    let last = z.len() - 1;
    let sum: f64 = z
        .iter()
        .enumerate()
        .map(|(j, &zj)| (2 * j + 1) as f64 * (zj.ln() + (1.0 - z[last - j]).ln()))
        .sum();
    let a2 = -n - sum / n;
    let statistic = a2 * (1.0 + 0.75 / n + 2.25 / (n * n));

    let s = statistic;
    let p_value = if s >= 0.6 {
        (1.2937 - 5.709 * s + 0.0186 * s * s).exp()
    } else if s >= 0.34 {
        (0.9177 - 4.279 * s - 1.38 * s * s).exp()
    } else if s >= 0.2 {
        1.0 - (-8.318 + 42.796 * s - 59.938 * s * s).exp()
    } else {
        1.0 - (-13.436 + 101.14 * s - 223.73 * s * s).exp()
    };

    AndersonDarling { statistic, p_value }
}
