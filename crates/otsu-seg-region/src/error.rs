//! Error types for otsu-seg-region

use thiserror::Error;

/// Errors that can occur during region labeling operations
#[derive(Debug, Error)]
pub enum RegionError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] otsu_seg_core::Error),

    /// Label outside `1..=num_labels`
    #[error("invalid label {label}: map has labels 1..={num_labels}")]
    InvalidLabel { label: u32, num_labels: u32 },

    /// More components than a `u32` label can number
    #[error("too many components: label space of {max} exhausted")]
    TooManyLabels { max: u32 },

    /// Invalid parameters
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),
}

/// Result type for region operations
pub type RegionResult<T> = Result<T, RegionError>;
