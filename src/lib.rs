//! Common Language Effect Size (CLES)
//!
//! The probability that a randomly drawn value from sample a exceeds a
//! randomly drawn value from sample b, estimated two ways:
//!
//! - [`nonparametric_cles`]: exact pairwise comparison, ties optionally
//!   worth half a win
//! - [`parametric_cles`]: normal-CDF approximation from the sample means
//!
//! ```rust
//! use cles::{nonparametric_cles, parametric_cles};
//!
//! assert_eq!(nonparametric_cles(&[1.0, 1.0], &[0.0, 0.0], true).unwrap(), 1.0);
//! assert_eq!(nonparametric_cles(&[0.0, 0.0], &[1.0, 1.0], true).unwrap(), 0.0);
//!
//! let p = parametric_cles(&[1.0, 3.0], &[2.0, 2.0]).unwrap();
//! assert!((p - 0.5).abs() < 1e-12);
//! ```
//!
//! The building blocks live in the workspace crates re-exported below.

pub use cles_core;
pub use cles_effect;

pub use cles_core::{Error, Numeric, Result};
pub use cles_effect::{
    nonparametric_cles, parametric_cles, DegenerateScale, EffectSize, EffectSizeEstimator,
    EffectSizeInterpretation, EstimationMethod, NonParametricEffectSize, NonparametricCles,
    PairCounts, PairwiseStrategy, ParametricCles, ParametricEffectSize, ScaleMethod,
};
