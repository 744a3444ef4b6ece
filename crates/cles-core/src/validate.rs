//! Sample validation shared by all estimators

use crate::{Error, Numeric, Result};

/// Check that a sample is non-empty and holds only finite values
pub fn check_sample<T: Numeric>(name: &str, data: &[T]) -> Result<()> {
    if data.is_empty() {
        return Err(Error::empty_input(name));
    }
    if data.iter().any(|x| !x.is_finite()) {
        return Err(Error::non_finite(name));
    }
    Ok(())
}

/// Check both samples of a two-sample comparison
pub fn check_samples<T: Numeric>(a: &[T], b: &[T]) -> Result<()> {
    check_sample("sample a", a)?;
    check_sample("sample b", b)
}
