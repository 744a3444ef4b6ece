//! Common Language Effect Size estimation
//!
//! The Common Language Effect Size (CLES) is the probability that a value
//! drawn at random from sample a exceeds a value drawn at random from
//! sample b. This crate provides two independent estimators:
//!
//! - [`NonparametricCles`]: exact comparison of every (a, b) pair, with
//!   ties optionally earning half credit
//! - [`ParametricCles`]: normal-CDF approximation from the sample means
//!
//! Both are pure functions of their inputs. Empty samples and NaN or
//! infinite values are rejected with [`cles_core::Error::InvalidInput`].
//!
//! # Examples
//!
//! ```rust
//! use cles_effect::{nonparametric_cles, parametric_cles};
//!
//! assert_eq!(nonparametric_cles(&[0.0, 1.0], &[0.0, 0.0], true).unwrap(), 0.75);
//! assert_eq!(nonparametric_cles(&[0.0, 1.0], &[0.0, 0.0], false).unwrap(), 0.5);
//!
//! let p = parametric_cles(&[1.0, 2.0, 3.0], &[0.0, 0.0, 0.0]).unwrap();
//! assert!(p > 0.5);
//! ```
//!
//! ## Estimator builders
//!
//! ```rust
//! use cles_effect::{NonparametricCles, NonParametricEffectSize, PairwiseStrategy};
//!
//! let group_a = vec![2.5, 3.5, 4.5, 5.5];
//! let group_b = vec![1.0, 2.0, 3.0, 4.0];
//!
//! let cles = NonparametricCles::new().with_strategy(PairwiseStrategy::Ranked);
//! let effect_size = cles.compute(&group_a, &group_b).unwrap();
//! println!("{}", effect_size);
//! ```

mod nonparametric;
mod parametric;
mod traits;
mod types;

// Re-exports
pub use nonparametric::{
    pair_credit, NonparametricCles, PairCounts, PairwiseStrategy, BRUTE_FORCE_MAX_PAIRS,
};
pub use parametric::{DegenerateScale, ParametricCles, ScaleMethod};
pub use traits::{EffectSizeEstimator, NonParametricEffectSize, ParametricEffectSize};
pub use types::{EffectSize, EffectSizeInterpretation, EstimationMethod};

use cles_core::{Numeric, Result};

// Convenience constructors

/// Pairwise estimator with half credit for ties and automatic strategy
pub fn nonparametric() -> NonparametricCles {
    NonparametricCles::new()
}

/// Normal-approximation estimator with the mean-magnitude scale
pub fn parametric() -> ParametricCles {
    ParametricCles::new()
}

/// Probability that a draw from `a` exceeds a draw from `b`, by pairwise comparison
///
/// With `half_credit` a tied pair counts as half a win; without it ties
/// count as losses.
pub fn nonparametric_cles<T: Numeric>(a: &[T], b: &[T], half_credit: bool) -> Result<f64> {
    NonparametricCles::new()
        .with_half_credit(half_credit)
        .estimate(a, b)
}

/// Probability that a draw from `a` exceeds a draw from `b`, assuming normality
///
/// Uses `sqrt(mean(a)² + mean(b)²)` as the scale and fails with
/// [`cles_core::Error::DegenerateDistribution`] when both means are zero.
pub fn parametric_cles<T: Numeric>(a: &[T], b: &[T]) -> Result<f64> {
    ParametricCles::new().estimate(a, b)
}
