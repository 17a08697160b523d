//! Tabulated density and distribution values, and construction behaviour
//! shared by every family.

use approx::assert_abs_diff_eq;
use randkit_distributions::math::{inverse_normal_cdf, poly_eval};
use randkit_distributions::{
    Cauchy, Distribution, DistributionError, LogNormal, Normal, ParameterViolation, Uniform,
};
use randkit_engines::{Engine, EngineKind, Xorshift1024Star, Xorshift128Plus};

/// (param1, param2, x, expected)
type Row = (f64, f64, f64, f64);

// ============================================================================
// Cauchy
// ============================================================================

const CAUCHY_PDF: [Row; 6] = [
    (-10.0, 0.5, -6.3616384072018, 0.0118000279625),
    (-10.0, 0.5, -10.2537240807910, 0.5062568041885),
    (-100.34, 1.0, -124.6801623109993, 0.0005363777436),
    (0.0, 1.0, 2.0267398730002, 0.0623199237511),
    (1.0, 0.5, -22.3651239134107, 0.0002913970302),
    (10.0, 50.2, 169.4577279964030, 0.0005717703735),
];

const CAUCHY_CDF: [Row; 6] = [
    (-10.0, 0.5, -10.0632599656590, 0.4599402993444),
    (-100.34, 1.0, -7.1331033068828, 0.9965850416114),
    (0.0, 1.0, -0.5855664561156, 0.3313788413622),
    (0.0, 1.0, -21.2511946020337, 0.0149674058784),
    (1.0, 0.5, 6.9485469032692, 0.9733074797189),
    (10.0, 50.2, -372.4783414423412, 0.0415404929543),
];

#[test]
fn test_cauchy_pdf_table() {
    for (location, scale, x, expected) in CAUCHY_PDF {
        let cauchy = Cauchy::new(Xorshift128Plus::new(0), location, scale).unwrap();
        assert_abs_diff_eq!(cauchy.pdf(x), expected, epsilon = 1e-12);
    }
}

#[test]
fn test_cauchy_cdf_table() {
    for (location, scale, x, expected) in CAUCHY_CDF {
        let cauchy = Cauchy::new(Xorshift1024Star::new(0), location, scale).unwrap();
        assert_abs_diff_eq!(cauchy.cdf(x), expected, epsilon = 1e-12);
    }
}

// ============================================================================
// Log-Normal
// ============================================================================

const LOGNORMAL_PDF: [Row; 7] = [
    (0.0, 1.0, 4.1094083811660, 0.0357610319017),
    (0.0, 1.0, 24.8439591804217, 0.0000921586001),
    (1.0, 1.0, 5.6353528866048, 0.0542711567386),
    (-1.0, 1.5, 1.6528790765271, 0.0974317816377),
    (-1.0, 1.5, -2.5009179920674, 0.0),
    (10.0, 50.2, 2.3303452674682, 0.0033540194704),
    (20.1, 30.5, 2.1348642411043, 0.0050108894653),
];

const LOGNORMAL_CDF: [Row; 7] = [
    (0.0, 1.0, 1.5595321628359, 0.6716181900975),
    (0.0, 1.0, -2.5466090945665, 0.0),
    (1.0, 1.0, 3.4864885989214, 0.5982790362318),
    (-1.0, 1.5, 1.2098229005897, 0.7863001952351),
    (-5.0, 5.0, 7.3577594989543, 0.9191161606926),
    (10.0, 50.2, 0.7626035884834, 0.4189415733792),
    (20.1, 30.5, 1.8254888311942, 0.2613192021241),
];

#[test]
fn test_lognormal_pdf_table() {
    for (mu, sigma, x, expected) in LOGNORMAL_PDF {
        let lognormal = LogNormal::new(Xorshift128Plus::new(0), mu, sigma).unwrap();
        assert_abs_diff_eq!(lognormal.pdf(x), expected, epsilon = 1e-12);
    }
}

#[test]
fn test_lognormal_cdf_table() {
    for (mu, sigma, x, expected) in LOGNORMAL_CDF {
        let lognormal = LogNormal::new(Xorshift1024Star::new(0), mu, sigma).unwrap();
        assert_abs_diff_eq!(lognormal.cdf(x), expected, epsilon = 1e-12);
    }
}

// ============================================================================
// Uniform
// ============================================================================

#[test]
fn test_uniform_cdf_table() {
    let cases: [(f64, f64, [f64; 3], [f64; 3]); 3] = [
        (0.0, 1.0, [0.25, -1.0, 2.0], [0.25, 0.0, 1.0]),
        (3.0, 5.0, [4.0, 2.0, 6.0], [0.5, 0.0, 1.0]),
        (-10.0, -3.0, [-6.5, -11.0, -2.0], [0.5, 0.0, 1.0]),
    ];
    for (a, b, xs, expected) in cases {
        let uniform = Uniform::new(Xorshift1024Star::new(0), a, b).unwrap();
        for (x, c) in xs.into_iter().zip(expected) {
            assert_abs_diff_eq!(uniform.cdf(x), c, epsilon = 1e-12);
        }
    }
}

// ============================================================================
// Math utilities through the public path
// ============================================================================

#[test]
fn test_math_exports() {
    assert_eq!(poly_eval(-2.0, &[3.0, -4.0, 2.0, 9.0]), -35.0);
    assert_abs_diff_eq!(inverse_normal_cdf(0.962746), 1.783485, epsilon = 1e-5);
}

// ============================================================================
// Construction across engines
// ============================================================================

#[test]
fn test_invalid_parameters_with_every_engine() {
    for kind in EngineKind::ALL {
        let mut engine = kind.build(1);

        let err = Uniform::new(&mut engine, 1.0, 0.0).err().unwrap();
        assert!(matches!(
            err,
            DistributionError::InvalidParameter {
                violation: ParameterViolation::NotOrdered { .. },
                ..
            }
        ));
        assert!(Normal::new(&mut engine, 0.0, 0.0).is_err());
        assert!(Cauchy::new(&mut engine, 0.0, -1.0).is_err());
        assert!(LogNormal::new(&mut engine, 0.0, f64::NAN).is_err());
        assert!(Normal::from_params(&mut engine, &[0.0, 1.0, 2.0]).is_err());
    }
}

#[test]
fn test_boxed_dyn_engine_drives_distribution() {
    let engine: Box<dyn Engine> = EngineKind::Mt19937.build(5489);
    let mut uniform = Uniform::new(engine, 0.0, 1.0).unwrap();
    let first = uniform.sample();

    let mut reference = EngineKind::Mt19937.build(5489);
    assert_eq!(first, reference.next_f64());
    assert_eq!(uniform.into_engine().seed(), 5489);
}

#[test]
fn test_engine_state_round_trip_replays_samples() {
    let mut engine = Xorshift128Plus::new(77);
    let saved = engine.state();
    let first: Vec<f64> = {
        let mut normal = Normal::new(&mut engine, 0.0, 1.0).unwrap();
        (0..10).map(|_| normal.sample()).collect()
    };

    engine.set_state(&saved).unwrap();
    let mut normal = Normal::new(&mut engine, 0.0, 1.0).unwrap();
    let replay: Vec<f64> = (0..10).map(|_| normal.sample()).collect();
    assert_eq!(first, replay);
}

#[test]
fn test_fill_matches_repeated_sample() {
    let mut a = Cauchy::new(Xorshift128Plus::new(3), 0.0, 1.0).unwrap();
    let mut b = Cauchy::new(Xorshift128Plus::new(3), 0.0, 1.0).unwrap();
    let mut buffer = [0.0; 32];
    a.fill(&mut buffer);
    for value in buffer {
        assert_eq!(value, b.sample());
    }
}
