//! The Otsu segmentation widget
//!
//! Threshold with Otsu's method, keep samples strictly above the
//! threshold, label the connected regions, and name the result after the
//! input layer.

use crate::layer::{ImageLayer, LayerDataTuple, LayerKind, LayerMetadata, dispatch_image_data};
use ndarray::ArrayViewD;
use otsu_seg_core::{LabelMap, Sample, check_dimensionality};
use otsu_seg_region::{ConnectivityType, RegionError, label_connected_components};
use otsu_seg_threshold::{OtsuOptions, ThresholdError, threshold_otsu};
use thiserror::Error;

/// Suffix appended to the input layer name
pub const DEFAULT_NAME_SUFFIX: &str = "_seg";

/// Errors from the segmentation widget
#[derive(Debug, Error)]
pub enum SegmentationError {
    /// Input image rejected before thresholding
    #[error("invalid image: {0}")]
    Core(#[from] otsu_seg_core::Error),

    /// Threshold selection failed
    #[error("threshold error: {0}")]
    Threshold(#[from] ThresholdError),

    /// Labeling failed
    #[error("region error: {0}")]
    Region(#[from] RegionError),
}

/// Result type for segmentation
pub type SegmentationResult<T> = Result<T, SegmentationError>;

/// Options for the segmentation widget
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SegmentationOptions {
    /// Threshold selection
    pub otsu: OtsuOptions,
    /// Neighborhood used to join foreground samples
    pub connectivity: ConnectivityType,
    /// Appended to the input layer name to name the output layer
    pub name_suffix: String,
}

impl Default for SegmentationOptions {
    fn default() -> Self {
        Self {
            otsu: OtsuOptions::default(),
            connectivity: ConnectivityType::Full,
            name_suffix: DEFAULT_NAME_SUFFIX.to_string(),
        }
    }
}

impl SegmentationOptions {
    /// Set the number of histogram bins
    pub fn with_nbins(mut self, nbins: usize) -> Self {
        self.otsu.nbins = nbins;
        self
    }

    /// Set the connectivity
    pub fn with_connectivity(mut self, connectivity: ConnectivityType) -> Self {
        self.connectivity = connectivity;
        self
    }

    /// Set the output name suffix
    pub fn with_name_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.name_suffix = suffix.into();
        self
    }
}

/// Segment a 2D or 3D array into labeled regions
///
/// # Errors
///
/// Fails if the image is empty, not 2D or 3D, contains NaN or infinite
/// samples, or holds a single intensity value.
pub fn segment_array<T: Sample>(
    image: &ArrayViewD<'_, T>,
    options: &SegmentationOptions,
) -> SegmentationResult<LabelMap> {
    check_dimensionality(image.shape(), 2, 3, "2-D or 3-D")?;

    let (threshold, mask) = threshold_otsu(image, &options.otsu)?;
    let labels = label_connected_components(&mask, options.connectivity)?;

    log::debug!(
        "segmented {:?} image: threshold {}, {} foreground samples, {} regions",
        image.shape(),
        threshold,
        mask.count_foreground(),
        labels.num_labels()
    );

    Ok(labels)
}

/// Segment an image layer with explicit options
pub fn segment_layer(
    layer: &ImageLayer,
    options: &SegmentationOptions,
) -> SegmentationResult<LayerDataTuple> {
    log::debug!(
        "segmenting layer '{}' ({} {:?})",
        layer.name,
        layer.data.dtype(),
        layer.data.shape()
    );

    let labels = dispatch_image_data!(&layer.data, array => segment_array(&array.view(), options))?;

    Ok(LayerDataTuple {
        data: labels,
        metadata: LayerMetadata {
            name: format!("{}{}", layer.name, options.name_suffix),
        },
        kind: LayerKind::Labels,
    })
}

/// Otsu segmentation widget
///
/// Produces a labels layer named `<input>_seg` with one positive label per
/// foreground region, joining diagonal neighbors (8-connected in 2D,
/// 26-connected in 3D).
pub fn otsu_seg_widget(layer: &ImageLayer) -> SegmentationResult<LayerDataTuple> {
    segment_layer(layer, &SegmentationOptions::default())
}
