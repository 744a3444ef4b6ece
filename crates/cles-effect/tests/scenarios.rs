//! End-to-end scenarios for both estimators

use approx::assert_abs_diff_eq;
use cles_core::Error;
use cles_effect::{
    nonparametric_cles, parametric_cles, DegenerateScale, EffectSizeInterpretation,
    NonParametricEffectSize, NonparametricCles, PairwiseStrategy, ParametricCles,
    ParametricEffectSize, ScaleMethod, BRUTE_FORCE_MAX_PAIRS,
};
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;
use rand_distr::Normal;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .try_init();
}

/// Normal draws rounded to one decimal, so large samples carry many ties
fn rounded_normal_sample(rng: &mut ChaCha8Rng, mean: f64, sd: f64, n: usize) -> Vec<f64> {
    let dist = Normal::new(mean, sd).unwrap();
    (0..n)
        .map(|_| (rng.sample(&dist) * 10.0).round() / 10.0)
        .collect()
}

#[test]
fn test_literal_scenarios() {
    assert_eq!(nonparametric_cles(&[0.0, 1.0], &[0.0, 0.0], true).unwrap(), 0.75);
    assert_eq!(nonparametric_cles(&[0.0, 1.0], &[0.0, 0.0], false).unwrap(), 0.5);
    assert_eq!(nonparametric_cles(&[1.0, 1.0], &[0.0, 0.0], true).unwrap(), 1.0);
    assert_eq!(nonparametric_cles(&[0.0, 0.0], &[1.0, 1.0], true).unwrap(), 0.0);
}

#[test]
fn test_separated_and_identical_samples() {
    let low = [1.0, 2.0, 3.0];
    let high = [4.0, 5.0, 6.0];
    let same = [7.0, 7.0, 7.0];

    assert_eq!(nonparametric_cles(&high, &low, true).unwrap(), 1.0);
    assert_eq!(nonparametric_cles(&low, &high, true).unwrap(), 0.0);
    assert_eq!(nonparametric_cles(&same, &same, true).unwrap(), 0.5);
    assert_eq!(nonparametric_cles(&same, &same, false).unwrap(), 0.0);
}

#[test]
fn test_strategies_agree_on_large_tied_samples() {
    init_tracing();
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    let a = rounded_normal_sample(&mut rng, 0.3, 1.0, 300);
    let b = rounded_normal_sample(&mut rng, 0.0, 1.0, 200);
    assert!(a.len() * b.len() > BRUTE_FORCE_MAX_PAIRS);

    for half_credit in [true, false] {
        let brute = NonparametricCles::new()
            .with_half_credit(half_credit)
            .with_strategy(PairwiseStrategy::BruteForce);
        let ranked = brute.with_strategy(PairwiseStrategy::Ranked);
        let auto = brute.with_strategy(PairwiseStrategy::Auto);

        let counts = brute.counts(&a, &b).unwrap();
        assert!(counts.ties > 0);
        assert_eq!(counts, ranked.counts(&a, &b).unwrap());
        assert_eq!(
            brute.estimate(&a, &b).unwrap(),
            ranked.estimate(&a, &b).unwrap()
        );
        assert_eq!(
            brute.estimate(&a, &b).unwrap(),
            auto.estimate(&a, &b).unwrap()
        );
    }
}

#[test]
fn test_shifted_normals_recover_known_probability() {
    // For N(0.5, 1) vs N(0, 1), P(A > B) = Φ(0.5 / sqrt(2)) ≈ 0.638
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let dist_a = Normal::new(0.5, 1.0).unwrap();
    let dist_b = Normal::new(0.0, 1.0).unwrap();
    let a: Vec<f64> = (0..2000).map(|_| dist_a.sample(&mut rng)).collect();
    let b: Vec<f64> = (0..2000).map(|_| dist_b.sample(&mut rng)).collect();

    let cles = nonparametric_cles(&a, &b, true).unwrap();
    assert_abs_diff_eq!(cles, 0.638, epsilon = 0.03);

    let pooled = ParametricCles::new()
        .with_scale(ScaleMethod::PooledVariance)
        .estimate(&a, &b)
        .unwrap();
    assert_abs_diff_eq!(pooled, 0.638, epsilon = 0.03);
}

// Open question for the owners of the parametric estimator: its scale is
// sqrt(mean(a)² + mean(b)²), built from the means rather than the sample
// variances. The estimate therefore depends on where the samples sit, not
// only on how far apart they are, and drifts toward 0.5 as both samples
// move away from zero. Kept as is until the intended scale is settled;
// ScaleMethod::PooledVariance is the opt-in variance-based alternative.
#[test]
fn test_mean_magnitude_scale_depends_on_location() {
    let a = [10.0, 11.0, 12.0];
    let b = [9.0, 10.0, 11.0];
    let shifted_a: Vec<f64> = a.iter().map(|x| x + 1000.0).collect();
    let shifted_b: Vec<f64> = b.iter().map(|x| x + 1000.0).collect();

    // ma = 11, mb = 10: Φ(1 / sqrt(221))
    let near = parametric_cles(&a, &b).unwrap();
    assert_abs_diff_eq!(near, 0.526_815_537, epsilon = 1e-8);

    let far = parametric_cles(&shifted_a, &shifted_b).unwrap();
    assert!(far < near);
    assert_abs_diff_eq!(far, 0.5, epsilon = 1e-3);

    // The pairwise and pooled-variance estimates ignore the shift
    assert_eq!(
        nonparametric_cles(&a, &b, true).unwrap(),
        nonparametric_cles(&shifted_a, &shifted_b, true).unwrap()
    );
    assert_abs_diff_eq!(nonparametric_cles(&a, &b, true).unwrap(), 7.0 / 9.0, epsilon = 1e-15);

    let pooled = ParametricCles::new().with_scale(ScaleMethod::PooledVariance);
    assert_abs_diff_eq!(
        pooled.estimate(&a, &b).unwrap(),
        pooled.estimate(&shifted_a, &shifted_b).unwrap(),
        epsilon = 1e-9
    );
}

#[test]
fn test_parametric_degenerate_conventions() {
    let a = [-2.0, 2.0];
    let b = [0.0];

    assert!(matches!(
        parametric_cles(&a, &b),
        Err(Error::DegenerateDistribution(_))
    ));

    let neutral = ParametricCles::new()
        .on_degenerate(DegenerateScale::PointMass)
        .estimate(&a, &b)
        .unwrap();
    assert_eq!(neutral, 0.5);
}

#[test]
fn test_empty_and_non_finite_samples() {
    let empty: [f64; 0] = [];
    assert!(matches!(
        nonparametric_cles(&empty, &[1.0], true),
        Err(Error::InvalidInput(_))
    ));
    assert!(matches!(
        parametric_cles(&[1.0], &empty),
        Err(Error::InvalidInput(_))
    ));
    assert!(matches!(
        nonparametric_cles(&[f64::NAN], &[1.0], false),
        Err(Error::InvalidInput(_))
    ));
    assert!(matches!(
        parametric_cles(&[1.0], &[f64::NEG_INFINITY]),
        Err(Error::InvalidInput(_))
    ));
}

#[test]
fn test_effect_size_records() {
    let a = vec![2.5, 3.5, 4.5, 5.5];
    let b = vec![1.0, 2.0, 3.0, 4.0];

    let nonparametric = NonparametricCles::new().compute(&a, &b).unwrap();
    assert_eq!(nonparametric.magnitude, 0.8125);
    assert_eq!(nonparametric.interpretation, EffectSizeInterpretation::Large);
    let display = nonparametric.to_string();
    assert!(display.starts_with("Nonparametric CLES: 0.81"));
    assert!(display.ends_with("(large)"));

    let parametric = ParametricCles::new().compute(&a, &b).unwrap();
    assert!(parametric.favors_a());
    assert_eq!(parametric.sample_sizes, Some((4, 4)));
}
