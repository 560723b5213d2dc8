//! otsu-seg - Otsu segmentation widget
//!
//! Given an image layer, the widget computes a global Otsu threshold,
//! binarizes the image, labels the connected foreground regions, and
//! returns a labels layer named after the input.
//!
//! # Example
//!
//! ```
//! use ndarray::Array2;
//! use otsu_seg::{ImageLayer, LayerKind, otsu_seg_widget};
//!
//! let mut data = Array2::<u8>::zeros((4, 4));
//! data[[1, 1]] = 10;
//! data[[1, 2]] = 10;
//! data[[2, 1]] = 10;
//! data[[2, 2]] = 10;
//!
//! let layer = ImageLayer::new("cell", data);
//! let seg = otsu_seg_widget(&layer).unwrap();
//!
//! assert_eq!(seg.metadata.name, "cell_seg");
//! assert_eq!(seg.kind, LayerKind::Labels);
//! assert_eq!(seg.data.num_labels(), 1);
//! ```

pub mod layer;
pub mod plugin;
pub mod widget;

pub use layer::{ImageData, ImageLayer, LayerDataTuple, LayerKind, LayerMetadata};
pub use plugin::{
    OTSU_SEG_WIDGET_ID, PluginError, PluginRegistry, PluginResult, WidgetDescriptor, WidgetFn,
};
pub use widget::{
    SegmentationError, SegmentationOptions, SegmentationResult, otsu_seg_widget, segment_array,
    segment_layer,
};

// Re-export core types (primary data structures used everywhere)
pub use otsu_seg_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use otsu_seg_region as region;
pub use otsu_seg_threshold as threshold;
