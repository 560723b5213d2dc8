//! otsu-seg-core - Basic data structures for n-dimensional segmentation
//!
//! This crate provides the fundamental data structures shared by the
//! thresholding and labeling crates:
//!
//! - [`Sample`] - Numeric sample types accepted as image intensities
//! - [`Histogram`] - Intensity histogram over `[min, max]`, equal-width or
//!   one bin per integer value
//! - [`BinaryMask`] - Foreground/background mask of any dimensionality
//! - [`LabelMap`] - Connected-component labels (0 = background)
//! - [`BoundingBox`] - Half-open n-dimensional box
//!
//! Images themselves are plain [`ndarray`] arrays; every operation takes an
//! [`ndarray::ArrayViewD`] so 2D and 3D data go through the same code path.
//!
//! # Examples
//!
//! ```
//! use ndarray::Array2;
//! use otsu_seg_core::{BinaryMask, Histogram};
//!
//! let image = Array2::from_shape_vec((2, 2), vec![0u8, 0, 10, 10]).unwrap().into_dyn();
//! let hist = Histogram::from_samples(&image.view(), 256).unwrap();
//! assert_eq!(hist.total(), 4);
//!
//! let mask = BinaryMask::new(&[2, 2]).unwrap();
//! assert_eq!(mask.count_foreground(), 0);
//! assert_eq!(mask.shape(), &[2, 2]);
//! ```

pub mod bounds;
pub mod convert;
pub mod error;
pub mod histogram;
pub mod labels;
pub mod mask;
pub mod sample;
pub mod shape;

pub use bounds::BoundingBox;
pub use convert::{luma_stack_to_array, luma_to_array};
pub use error::{Error, Result};
pub use histogram::Histogram;
pub use labels::LabelMap;
pub use mask::BinaryMask;
pub use sample::Sample;
pub use shape::{check_dimensionality, check_non_empty};

// Re-export ndarray so downstream crates agree on the array version
pub use ndarray;
