//! otsu-seg-region - Connected-component labeling
//!
//! This crate provides region labeling for masks of any dimensionality:
//!
//! - **Connected component labeling** - Two-pass union-find labeling with
//!   face or full connectivity
//! - **Component analysis** - Sizes, bounding boxes, centroids
//! - **Component selection** - Extracting one component, filtering by size
//!
//! # Examples
//!
//! ```
//! use otsu_seg_core::BinaryMask;
//! use otsu_seg_region::{ConnectivityType, label_connected_components};
//!
//! let mut mask = BinaryMask::new(&[4, 4]).unwrap();
//! mask.set(&[0, 0], true).unwrap();
//! mask.set(&[1, 1], true).unwrap();
//!
//! // Diagonal neighbors are separate under face connectivity...
//! let labels = label_connected_components(&mask, ConnectivityType::Face).unwrap();
//! assert_eq!(labels.num_labels(), 2);
//!
//! // ...and joined under full connectivity
//! let labels = label_connected_components(&mask, ConnectivityType::Full).unwrap();
//! assert_eq!(labels.num_labels(), 1);
//! ```

pub mod conncomp;
pub mod error;
pub mod label;

// Re-export core types
pub use otsu_seg_core;

// Re-export error types
pub use error::{RegionError, RegionResult};

// Re-export conncomp types and functions
pub use conncomp::{
    ConnectedComponent, ConnectivityType, extract_component, filter_components_by_size,
    find_connected_components, label_connected_components,
};

// Re-export label types and functions
pub use label::{
    ComponentStats, count_components, get_component_bounds, get_component_sizes,
    get_component_stats,
};
