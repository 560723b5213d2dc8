//! Error types for otsu-seg-core
//!
//! Every variant describes an input the data model cannot represent. The
//! numerical crates wrap this type in their own error enums.

use thiserror::Error;

/// otsu-seg core error type
#[derive(Error, Debug)]
pub enum Error {
    /// The array has no samples
    #[error("empty image: no samples to process")]
    EmptyImage,

    /// The array has a dimensionality the operation does not handle
    #[error("unsupported dimensionality: {ndim}-D, expected {expected}")]
    UnsupportedDimensionality { ndim: usize, expected: &'static str },

    /// A sample is NaN or infinite
    #[error("non-finite sample at flat index {index}")]
    NonFiniteSample { index: usize },

    /// Two arrays that must share a shape do not
    #[error("shape mismatch: expected {expected:?}, got {actual:?}")]
    ShapeMismatch {
        expected: Vec<usize>,
        actual: Vec<usize>,
    },

    /// Index out of bounds
    #[error("index {index:?} out of bounds for shape {shape:?}")]
    IndexOutOfBounds {
        index: Vec<usize>,
        shape: Vec<usize>,
    },

    /// Invalid parameter value
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Array construction failed
    #[error("array shape error: {0}")]
    Shape(#[from] ndarray::ShapeError),
}

/// Result type alias for core operations
pub type Result<T> = std::result::Result<T, Error>;
