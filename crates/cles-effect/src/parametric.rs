//! Parametric Common Language Effect Size
//!
//! Assumes both samples are approximately normal and evaluates the normal
//! CDF of the difference distribution at zero:
//!
//! CLES = Φ((mean(a) - mean(b)) / scale)
//!
//! Normality is assumed, not verified.

use crate::{EffectSize, EffectSizeEstimator, EstimationMethod, ParametricEffectSize};
use cles_core::math::distributions::normal;
use cles_core::{check_samples, mean, sample_variance, Error, Numeric, Result};
use tracing::{debug, trace, warn};

/// Scale of the difference distribution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScaleMethod {
    /// sqrt(mean(a)² + mean(b)²), evaluated without intermediate overflow
    #[default]
    MeanMagnitude,
    /// sqrt(var(a) + var(b)) from unbiased sample variances
    PooledVariance,
}

/// What to return when the scale is zero
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DegenerateScale {
    /// Fail with [`Error::DegenerateDistribution`]
    #[default]
    Fail,
    /// Treat the difference as a point mass at its location: 1 below zero,
    /// 0 above, 0.5 at zero
    PointMass,
}

/// Parametric CLES estimator
///
/// With the default [`ScaleMethod::MeanMagnitude`] the scale is zero only
/// when both means are zero; [`DegenerateScale`] decides that case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ParametricCles {
    scale: ScaleMethod,
    degenerate: DegenerateScale,
}

impl ParametricCles {
    /// Create a new estimator with the mean-magnitude scale
    pub fn new() -> Self {
        Self::default()
    }

    /// Choose how the scale is computed
    pub fn with_scale(mut self, scale: ScaleMethod) -> Self {
        self.scale = scale;
        self
    }

    /// Choose the zero-scale convention
    pub fn on_degenerate(mut self, degenerate: DegenerateScale) -> Self {
        self.degenerate = degenerate;
        self
    }

    pub fn scale_method(&self) -> ScaleMethod {
        self.scale
    }

    pub fn degenerate_scale(&self) -> DegenerateScale {
        self.degenerate
    }

    /// Probability that a draw from `a` exceeds a draw from `b`
    pub fn estimate<T: Numeric>(&self, a: &[T], b: &[T]) -> Result<f64> {
        check_samples(a, b)?;

        let ma = mean(a);
        let mb = mean(b);
        let scale = match self.scale {
            ScaleMethod::MeanMagnitude => ma.hypot(mb),
            ScaleMethod::PooledVariance => (sample_variance(a)? + sample_variance(b)?).sqrt(),
        };
        let location = mb - ma;
        debug!(n_a = a.len(), n_b = b.len(), scale_method = ?self.scale, "parametric CLES");
        trace!(ma, mb, location, scale, "difference distribution");

        if scale == 0.0 {
            return match self.degenerate {
                DegenerateScale::Fail => Err(Error::zero_scale("difference distribution")),
                DegenerateScale::PointMass => {
                    warn!(location, "zero scale, treating difference as a point mass");
                    Ok(point_mass_cdf_at_zero(location))
                }
            };
        }

        let p = normal::cdf(0.0, location, scale)?;
        if !p.is_finite() {
            return Err(Error::Computation(format!(
                "normal CDF with location {location} and scale {scale} is not finite"
            )));
        }
        Ok(p)
    }
}

fn point_mass_cdf_at_zero(location: f64) -> f64 {
    if location < 0.0 {
        1.0
    } else if location > 0.0 {
        0.0
    } else {
        0.5
    }
}

impl<T: Numeric> ParametricEffectSize<T> for ParametricCles {
    fn compute(&self, group_a: &[T], group_b: &[T]) -> Result<EffectSize> {
        let cles = self.estimate(group_a, group_b)?;
        Ok(EffectSize::new(
            cles,
            EstimationMethod::Parametric,
            Some((group_a.len(), group_b.len())),
        ))
    }
}

impl<T: Numeric> EffectSizeEstimator<T> for ParametricCles {
    fn method(&self) -> EstimationMethod {
        EstimationMethod::Parametric
    }
}
