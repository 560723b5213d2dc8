//! Intensity histograms
//!
//! A histogram covers the `[min, max]` range of the samples with bins of
//! equal width. Bin `i` covers `[start + i * w, start + (i + 1) * w)`; the
//! last bin also includes `max`.
//!
//! Two layouts are built from samples:
//!
//! - `nbins` equal-width bins with `start = min`
//! - one unit bin per integer value, with `start = min - 0.5`, so that bin
//!   centers are the integer values themselves

use crate::error::{Error, Result};
use crate::sample::Sample;
use ndarray::ArrayViewD;

/// Largest number of unit bins [`Histogram::from_samples_auto`] will allocate
pub const MAX_UNIT_BINS: usize = 1 << 20;

/// Equal-width histogram over the intensity range of an image
#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    /// Sample count per bin
    counts: Vec<u64>,
    /// Smallest sample value
    min: f64,
    /// Largest sample value
    max: f64,
    /// Lower edge of bin 0
    start: f64,
    /// Width of one bin
    width: f64,
    /// Samples only take integer values
    integer: bool,
}

/// Smallest and largest sample, rejecting empty arrays and non-finite values
fn sample_range<T: Sample>(image: &ArrayViewD<'_, T>) -> Result<(f64, f64)> {
    if image.is_empty() {
        return Err(Error::EmptyImage);
    }

    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for (index, &sample) in image.iter().enumerate() {
        let v = sample.to_f64();
        if !v.is_finite() {
            return Err(Error::NonFiniteSample { index });
        }
        min = min.min(v);
        max = max.max(v);
    }
    Ok((min, max))
}

/// Width of `nbins` equal bins over `[min, max]`
///
/// `max - min` overflows for ranges wider than `f64::MAX`; halving both ends
/// first keeps the width finite.
fn equal_bin_width(min: f64, max: f64, nbins: usize) -> f64 {
    let range = max - min;
    if range.is_finite() {
        range / nbins as f64
    } else {
        (max * 0.5 - min * 0.5) / nbins as f64 * 2.0
    }
}

fn check_nbins(nbins: usize) -> Result<()> {
    if nbins == 0 {
        return Err(Error::InvalidParameter(
            "histogram needs at least one bin".to_string(),
        ));
    }
    Ok(())
}

impl Histogram {
    /// Build a histogram with `nbins` equal-width bins
    ///
    /// # Arguments
    ///
    /// * `image` - Samples of any dimensionality
    /// * `nbins` - Number of bins (must be > 0)
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidParameter`] if `nbins` is 0
    /// - [`Error::EmptyImage`] if the array has no samples
    /// - [`Error::NonFiniteSample`] if any sample is NaN or infinite
    ///
    /// When every sample has the same value, all samples land in bin 0 and
    /// the bin width is zero; see [`Histogram::is_degenerate`].
    pub fn from_samples<T: Sample>(image: &ArrayViewD<'_, T>, nbins: usize) -> Result<Self> {
        check_nbins(nbins)?;
        let (min, max) = sample_range(image)?;
        Ok(Self::equal_width(image, min, max, nbins))
    }

    /// Build a histogram suited to the sample type
    ///
    /// Integer samples whose range spans at most [`MAX_UNIT_BINS`] values get
    /// one bin per integer value and `nbins` is ignored. Float samples and
    /// wider integer ranges get `nbins` equal-width bins.
    ///
    /// # Errors
    ///
    /// Same as [`Histogram::from_samples`].
    pub fn from_samples_auto<T: Sample>(image: &ArrayViewD<'_, T>, nbins: usize) -> Result<Self> {
        check_nbins(nbins)?;
        let (min, max) = sample_range(image)?;
        if T::INTEGER && max - min < MAX_UNIT_BINS as f64 {
            Ok(Self::unit_bins(image, min, max))
        } else {
            Ok(Self::equal_width(image, min, max, nbins))
        }
    }

    /// Wrap precomputed equal-width bin counts spanning `[min, max]`
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] if `counts` is empty, or if the
    /// range is not finite or `min > max`.
    pub fn from_counts(counts: Vec<u64>, min: f64, max: f64) -> Result<Self> {
        check_nbins(counts.len())?;
        if !min.is_finite() || !max.is_finite() || min > max {
            return Err(Error::InvalidParameter(format!(
                "invalid histogram range [{}, {}]",
                min, max
            )));
        }
        let width = equal_bin_width(min, max, counts.len());
        Ok(Self {
            counts,
            min,
            max,
            start: min,
            width,
            integer: false,
        })
    }

    fn equal_width<T: Sample>(image: &ArrayViewD<'_, T>, min: f64, max: f64, nbins: usize) -> Self {
        let mut counts = vec![0u64; nbins];
        if min == max {
            counts[0] = image.len() as u64;
        } else {
            let range = max - min;
            let (half_min, half_range) = (min * 0.5, max * 0.5 - min * 0.5);
            for &sample in image.iter() {
                let v = sample.to_f64();
                let fraction = if range.is_finite() {
                    (v - min) / range
                } else {
                    (v * 0.5 - half_min) / half_range
                };
                let bin = (fraction * nbins as f64) as usize;
                counts[bin.min(nbins - 1)] += 1;
            }
        }

        log::trace!(
            "histogram: {} samples, range [{}, {}], {} equal bins",
            image.len(),
            min,
            max,
            nbins
        );

        Self {
            counts,
            min,
            max,
            start: min,
            width: equal_bin_width(min, max, nbins),
            integer: T::INTEGER,
        }
    }

    fn unit_bins<T: Sample>(image: &ArrayViewD<'_, T>, min: f64, max: f64) -> Self {
        let nbins = (max - min) as usize + 1;
        let mut counts = vec![0u64; nbins];
        for &sample in image.iter() {
            counts[(sample.to_f64() - min) as usize] += 1;
        }

        log::trace!(
            "histogram: {} samples, range [{}, {}], {} unit bins",
            image.len(),
            min,
            max,
            nbins
        );

        Self {
            counts,
            min,
            max,
            start: min - 0.5,
            width: 1.0,
            integer: true,
        }
    }

    /// Number of bins
    #[inline]
    pub fn nbins(&self) -> usize {
        self.counts.len()
    }

    /// Per-bin sample counts
    #[inline]
    pub fn counts(&self) -> &[u64] {
        &self.counts
    }

    /// Smallest sample value
    #[inline]
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Largest sample value
    #[inline]
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Width of one bin (0 for a degenerate equal-width histogram)
    #[inline]
    pub fn bin_width(&self) -> f64 {
        self.width
    }

    /// True when the samples were of an integer type
    #[inline]
    pub fn has_integer_samples(&self) -> bool {
        self.integer
    }

    /// Total number of samples
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// True when all samples share one value
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.min == self.max
    }

    /// Center value of bin `i`
    #[inline]
    pub fn bin_center(&self, i: usize) -> f64 {
        self.start + (i as f64 + 0.5) * self.width
    }

    /// Center values of every bin
    pub fn bin_centers(&self) -> Vec<f64> {
        (0..self.nbins()).map(|i| self.bin_center(i)).collect()
    }

    /// Upper edge of bin `i`
    #[inline]
    pub fn bin_upper_edge(&self, i: usize) -> f64 {
        self.start + (i + 1) as f64 * self.width
    }

    /// Threshold separating bins `0..=i` from the bins above
    ///
    /// For integer samples this is the half-integer just below the first
    /// integer of bin `i + 1`, so `v > threshold` holds exactly for samples
    /// in the upper bins. For float samples it is the center of bin `i`.
    pub fn split_threshold(&self, i: usize) -> f64 {
        if self.integer {
            self.bin_upper_edge(i).ceil() - 0.5
        } else {
            self.bin_center(i)
        }
    }
}
