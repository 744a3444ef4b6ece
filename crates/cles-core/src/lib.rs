//! Core types for common language effect size estimation
//!
//! This crate provides the pieces shared by every estimator:
//!
//! - [`Error`] and [`Result`]: the unified error type
//! - [`Numeric`]: the floating-point element types a sample may hold
//! - [`math`]: mean, variance, sign of a difference and the normal CDF
//! - [`validate`]: non-empty and finite checks on samples
//!
//! # Example
//!
//! ```rust
//! use cles_core::math::{distributions::normal, mean};
//!
//! let data = vec![1.0, 2.0, 3.0, 4.0];
//! assert_eq!(mean(&data), 2.5);
//!
//! let p = normal::cdf(0.0, 0.0, 1.0).unwrap();
//! assert!((p - 0.5).abs() < 1e-12);
//! ```

pub mod error;
pub mod math;
pub mod numeric;
pub mod validate;

pub use error::{Error, Result};
pub use math::{mean, sample_variance, sign_of_difference, Sign};
pub use numeric::Numeric;
pub use validate::{check_sample, check_samples};
