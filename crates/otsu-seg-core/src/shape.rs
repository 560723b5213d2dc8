//! Shape validation shared by all operations

use crate::error::{Error, Result};

/// Reject arrays with no samples.
///
/// A zero-dimensional array holds a single sample but has no axes to label
/// along, so it is reported as an unsupported dimensionality.
pub fn check_non_empty(shape: &[usize]) -> Result<()> {
    if shape.is_empty() {
        return Err(Error::UnsupportedDimensionality {
            ndim: 0,
            expected: "at least 1-D",
        });
    }
    if shape.contains(&0) {
        return Err(Error::EmptyImage);
    }
    Ok(())
}

/// Reject arrays whose dimensionality is outside `min..=max`.
///
/// `expected` is used verbatim in the error message (e.g. `"2-D or 3-D"`).
pub fn check_dimensionality(
    shape: &[usize],
    min: usize,
    max: usize,
    expected: &'static str,
) -> Result<()> {
    let ndim = shape.len();
    if ndim < min || ndim > max {
        return Err(Error::UnsupportedDimensionality { ndim, expected });
    }
    check_non_empty(shape)
}
