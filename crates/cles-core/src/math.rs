//! Mathematical utilities for effect size estimation
//!
//! Aggregation primitives over samples and the normal distribution
//! function consumed by the parametric estimator.

use crate::{Numeric, Result};
use std::cmp::Ordering;

/// Sign of a difference `x - y`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sign {
    Negative,
    Zero,
    Positive,
}

impl Sign {
    /// Numeric value of the sign: -1, 0 or +1
    pub fn value(self) -> f64 {
        match self {
            Self::Negative => -1.0,
            Self::Zero => 0.0,
            Self::Positive => 1.0,
        }
    }
}

/// Sign of `x - y`, or `None` if the values are unordered (NaN)
///
/// Compares instead of subtracting: for finite IEEE values `x - y` is zero
/// exactly when `x == y`, so the two agree, and comparing cannot overflow.
#[inline]
pub fn sign_of_difference<T: Numeric>(x: T, y: T) -> Option<Sign> {
    x.partial_cmp(&y).map(|ord| match ord {
        Ordering::Less => Sign::Negative,
        Ordering::Equal => Sign::Zero,
        Ordering::Greater => Sign::Positive,
    })
}

/// Arithmetic mean, accumulated in `f64`
///
/// Updated incrementally as `m += x/k - m/k`, so finite samples near
/// `f64::MAX` keep a finite mean. Returns NaN for an empty slice; callers
/// validate first.
pub fn mean<T: Numeric>(data: &[T]) -> f64 {
    if data.is_empty() {
        return f64::NAN;
    }
    let mut m = 0.0;
    for (i, &x) in data.iter().enumerate() {
        let k = (i + 1) as f64;
        m += x.as_f64() / k - m / k;
    }
    m
}

/// Unbiased sample variance (n - 1 denominator)
pub fn sample_variance<T: Numeric>(data: &[T]) -> Result<f64> {
    if data.len() < 2 {
        return Err(crate::Error::InsufficientData {
            expected: 2,
            actual: data.len(),
        });
    }
    let m = mean(data);
    let ss: f64 = data
        .iter()
        .map(|&x| {
            let d = x.as_f64() - m;
            d * d
        })
        .sum();
    Ok(ss / (data.len() - 1) as f64)
}

/// Distribution-related mathematical functions
pub mod distributions {
    /// Normal distribution utilities
    pub mod normal {
        use crate::{Error, Result};
        use statrs::distribution::{ContinuousCDF, Normal};

        /// CDF at `x` of a normal distribution with the given location and scale
        ///
        /// A zero scale is reported as [`Error::DegenerateDistribution`];
        /// any other parameter rejected by `statrs` is an
        /// [`Error::InvalidParameter`].
        pub fn cdf(x: f64, location: f64, scale: f64) -> Result<f64> {
            if scale == 0.0 {
                return Err(Error::zero_scale("normal distribution"));
            }
            let normal = Normal::new(location, scale).map_err(|e| {
                Error::InvalidParameter(format!(
                    "normal distribution with location {location} and scale {scale}: {e}"
                ))
            })?;
            Ok(normal.cdf(x))
        }

        /// Standard normal CDF, Φ(z)
        pub fn standard_cdf(z: f64) -> Result<f64> {
            cdf(z, 0.0, 1.0)
        }

    }
}
