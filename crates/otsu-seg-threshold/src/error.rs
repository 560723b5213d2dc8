//! Error types for otsu-seg-threshold

use thiserror::Error;

/// Errors that can occur while computing a threshold
#[derive(Debug, Error)]
pub enum ThresholdError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] otsu_seg_core::Error),

    /// Every sample has the same value, so there is nothing to separate
    #[error("uniform image: every sample equals {value}")]
    UniformImage { value: f64 },

    /// Invalid parameters
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),

    /// No split point leaves samples in both classes
    #[error("no valid split among {nbins} histogram bins")]
    NoValidSplit { nbins: usize },
}

/// Result type for threshold operations
pub type ThresholdResult<T> = Result<T, ThresholdError>;
