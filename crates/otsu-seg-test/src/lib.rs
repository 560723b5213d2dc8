//! otsu-seg-test - Regression test framework for otsu-seg
//!
//! This crate provides:
//!
//! - [`RegParams`] - Indexed comparisons that collect every failure and
//!   report them together in [`RegParams::cleanup`]
//! - Synthetic fixtures ([`image_from_rows`], [`block_image`],
//!   [`mask_from_points`]) so tests need no image files
//!
//! # Usage
//!
//! ```ignore
//! use otsu_seg_test::{RegParams, image_from_rows};
//!
//! let mut rp = RegParams::new("otsu");
//! rp.compare_values(4.0, mask.count_foreground() as f64, 0.0);
//! assert!(rp.cleanup());
//! ```

mod error;
mod fixtures;
mod params;

pub use error::{TestError, TestResult};
pub use fixtures::{block_image, image_from_rows, mask_from_points};
pub use params::RegParams;
