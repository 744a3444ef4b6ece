//! Core traits for effect size estimation

use crate::types::{EffectSize, EstimationMethod};
use cles_core::{Numeric, Result};

/// Base trait for CLES estimators between two samples
pub trait EffectSizeEstimator<T: Numeric = f64> {
    /// Get the method this estimator uses
    fn method(&self) -> EstimationMethod;

    /// Check if the estimator is symmetric (effect_size(A,B) = -effect_size(B,A))
    ///
    /// CLES is complementary instead: CLES(A,B) = 1 - CLES(B,A).
    fn is_symmetric(&self) -> bool {
        false
    }
}

/// Trait for estimators that compare every pair of observations
pub trait NonParametricEffectSize<T: Numeric = f64> {
    /// Compute effect size directly from the data
    fn compute(&self, group_a: &[T], group_b: &[T]) -> Result<EffectSize>;

    /// Compute when `group_b` is already sorted ascending
    fn compute_sorted(&self, group_a: &[T], sorted_group_b: &[T]) -> Result<EffectSize>;
}

/// Trait for estimators that assume a distribution for the samples
pub trait ParametricEffectSize<T: Numeric = f64> {
    /// Compute effect size from the distribution parameters of the data
    fn compute(&self, group_a: &[T], group_b: &[T]) -> Result<EffectSize>;
}
