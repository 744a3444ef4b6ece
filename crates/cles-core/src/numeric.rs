//! Numeric trait for sample element types
//!
//! Estimators are generic over the element type of a sample. All
//! aggregation happens in `f64` regardless of the input precision.

use num_traits::Float;
use std::fmt::Debug;

/// Floating-point types accepted as sample values
pub trait Numeric: Float + Debug + Send + Sync + 'static {
    /// Widen to `f64` for aggregation
    fn as_f64(self) -> f64;
}

impl Numeric for f64 {
    #[inline]
    fn as_f64(self) -> f64 {
        self
    }
}

impl Numeric for f32 {
    #[inline]
    fn as_f64(self) -> f64 {
        self as f64
    }
}
