//! Error types for the test framework

use thiserror::Error;

/// Errors that can occur while building test fixtures
#[derive(Debug, Error)]
pub enum TestError {
    /// Fixture rows have different lengths
    #[error("ragged fixture: row {row} has {actual} samples, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        actual: usize,
    },

    /// Fixture description does not fit the requested shape
    #[error("invalid fixture: {0}")]
    InvalidFixture(String),

    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] otsu_seg_core::Error),

    /// Array construction failed
    #[error("array shape error: {0}")]
    Shape(#[from] ndarray::ShapeError),
}

/// Result type for test operations
pub type TestResult<T> = Result<T, TestError>;
