//! otsu-seg-threshold - Global thresholding
//!
//! This crate turns an intensity image into a [`BinaryMask`]:
//!
//! - **Otsu's method** - Automatic selection of the threshold that maximizes
//!   the between-class variance of the intensity histogram
//! - **Fixed binarization** - Foreground is every sample strictly greater
//!   than the threshold
//!
//! # Examples
//!
//! ```
//! use ndarray::Array2;
//! use otsu_seg_threshold::{OtsuOptions, threshold_otsu};
//!
//! let mut image = Array2::<u8>::zeros((4, 4));
//! image[[1, 1]] = 10;
//! image[[1, 2]] = 10;
//!
//! let image = image.into_dyn();
//! let (threshold, mask) = threshold_otsu(&image.view(), &OtsuOptions::default()).unwrap();
//! assert!(threshold > 0.0 && threshold < 10.0);
//! assert_eq!(mask.count_foreground(), 2);
//! ```
//!
//! [`BinaryMask`]: otsu_seg_core::BinaryMask

pub mod error;
pub mod otsu;

// Re-export core types
pub use otsu_seg_core;

pub use error::{ThresholdError, ThresholdResult};

pub use otsu::{
    DEFAULT_NBINS, OtsuOptions, compute_otsu_threshold, otsu_threshold_from_histogram,
    threshold_otsu, threshold_to_binary,
};
