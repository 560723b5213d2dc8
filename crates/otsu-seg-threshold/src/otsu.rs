//! Otsu thresholding and binarization
//!
//! The threshold is chosen over a histogram of the image's intensity range.
//! For every split point `i`, class 0 holds bins `0..=i` and class 1 holds
//! the rest; the chosen split maximizes
//!
//! ```text
//! w0(i) * w1(i) * (mu0(i) - mu1(i))^2
//! ```
//!
//! Ties resolve to the lowest bin. Samples strictly greater than the
//! threshold are foreground.
//!
//! Integer images whose range fits in [`MAX_UNIT_BINS`] values get one bin
//! per integer value, and their threshold lies half way between the last
//! background value and the next integer. Float images use `nbins`
//! equal-width bins and the center of the split bin.
//!
//! [`MAX_UNIT_BINS`]: otsu_seg_core::histogram::MAX_UNIT_BINS

use crate::error::{ThresholdError, ThresholdResult};
use ndarray::ArrayViewD;
use otsu_seg_core::{BinaryMask, Error, Histogram, Sample};

/// Default number of histogram bins
pub const DEFAULT_NBINS: usize = 256;

/// Options for Otsu threshold selection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OtsuOptions {
    /// Number of equal-width histogram bins (must be >= 2)
    ///
    /// Ignored for integer images binned one value per bin.
    pub nbins: usize,
}

impl Default for OtsuOptions {
    fn default() -> Self {
        Self {
            nbins: DEFAULT_NBINS,
        }
    }
}

impl OtsuOptions {
    /// Set the number of histogram bins
    pub fn with_nbins(mut self, nbins: usize) -> Self {
        self.nbins = nbins;
        self
    }
}

/// Index of the last bin of class 0 at the best split
///
/// Bin indices stand in for bin values: the between-class variance of an
/// affine map of the values is a positive multiple of the original, so the
/// best split is the same and no sum can overflow.
fn otsu_split_index(hist: &Histogram) -> ThresholdResult<usize> {
    let counts = hist.counts();

    let total_weight: f64 = counts.iter().map(|&c| c as f64).sum();
    let total_sum: f64 = counts
        .iter()
        .enumerate()
        .map(|(i, &c)| c as f64 * i as f64)
        .sum();

    let mut weight0 = 0.0;
    let mut sum0 = 0.0;
    let mut best: Option<(usize, f64)> = None;

    // The last bin can't be a split point: class 1 would be empty
    for i in 0..counts.len() - 1 {
        weight0 += counts[i] as f64;
        sum0 += counts[i] as f64 * i as f64;

        let weight1 = total_weight - weight0;
        if weight0 == 0.0 || weight1 == 0.0 {
            continue;
        }

        let mean0 = sum0 / weight0;
        let mean1 = (total_sum - sum0) / weight1;
        let variance = weight0 * weight1 * (mean0 - mean1) * (mean0 - mean1);

        if best.is_none_or(|(_, v)| variance > v) {
            best = Some((i, variance));
        }
    }

    best.map(|(i, _)| i).ok_or(ThresholdError::NoValidSplit {
        nbins: counts.len(),
    })
}

/// Compute Otsu's threshold from an existing histogram
///
/// Returns [`Histogram::split_threshold`] of the split that maximizes the
/// between-class variance.
///
/// # Errors
///
/// - [`ThresholdError::UniformImage`] if all samples share one value
/// - [`ThresholdError::InvalidParameters`] if the histogram has fewer than
///   two bins
/// - [`ThresholdError::NoValidSplit`] if no split leaves samples on both
///   sides
pub fn otsu_threshold_from_histogram(hist: &Histogram) -> ThresholdResult<f64> {
    if hist.is_degenerate() {
        return Err(ThresholdError::UniformImage { value: hist.min() });
    }
    if hist.nbins() < 2 {
        return Err(ThresholdError::InvalidParameters(format!(
            "Otsu needs at least 2 bins, got {}",
            hist.nbins()
        )));
    }

    let split = otsu_split_index(hist)?;
    Ok(hist.split_threshold(split))
}

/// Compute Otsu's threshold for an image of any dimensionality
///
/// # Errors
///
/// - [`ThresholdError::UniformImage`] if all samples share one value
/// - [`ThresholdError::InvalidParameters`] if `options.nbins < 2`
/// - [`ThresholdError::Core`] if the image has no samples or a sample is
///   NaN or infinite
pub fn compute_otsu_threshold<T: Sample>(
    image: &ArrayViewD<'_, T>,
    options: &OtsuOptions,
) -> ThresholdResult<f64> {
    if options.nbins < 2 {
        return Err(ThresholdError::InvalidParameters(format!(
            "Otsu needs at least 2 bins, got {}",
            options.nbins
        )));
    }

    let hist = Histogram::from_samples_auto(image, options.nbins)?;
    let threshold = otsu_threshold_from_histogram(&hist)?;

    log::debug!(
        "otsu: range [{}, {}] over {} bins, threshold {}",
        hist.min(),
        hist.max(),
        hist.nbins(),
        threshold
    );

    Ok(threshold)
}

/// Binarize an image against a fixed threshold
///
/// Samples strictly greater than `threshold` become foreground.
///
/// # Errors
///
/// Returns an error if the threshold is NaN or the image has no samples.
pub fn threshold_to_binary<T: Sample>(
    image: &ArrayViewD<'_, T>,
    threshold: f64,
) -> ThresholdResult<BinaryMask> {
    if threshold.is_nan() {
        return Err(ThresholdError::InvalidParameters(
            "threshold is NaN".to_string(),
        ));
    }
    if image.is_empty() {
        return Err(Error::EmptyImage.into());
    }

    let mask = BinaryMask::from_array(image.mapv(|v| v.to_f64() > threshold))?;
    Ok(mask)
}

/// Binarize an image using Otsu's method
///
/// Returns the selected threshold together with the mask.
pub fn threshold_otsu<T: Sample>(
    image: &ArrayViewD<'_, T>,
    options: &OtsuOptions,
) -> ThresholdResult<(f64, BinaryMask)> {
    let threshold = compute_otsu_threshold(image, options)?;
    let mask = threshold_to_binary(image, threshold)?;
    Ok((threshold, mask))
}
