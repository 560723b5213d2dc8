//! LabelMap - Connected-component labels
//!
//! A `LabelMap` has the same shape as the mask it was computed from.
//! 0 is background; labels produced by the region crate are consecutive
//! in `1..=num_labels`.

use crate::error::Result;
use crate::mask::BinaryMask;
use crate::shape::check_non_empty;
use ndarray::{ArrayD, ArrayViewD};

/// Integer label per sample, 0 for background
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelMap {
    data: ArrayD<u32>,
    num_labels: u32,
}

impl LabelMap {
    /// Wrap an existing label array
    ///
    /// `num_labels` is taken as the largest label present; labels are not
    /// required to be consecutive.
    ///
    /// # Errors
    ///
    /// Returns an error if the array has no axes or no samples.
    pub fn from_array(data: ArrayD<u32>) -> Result<Self> {
        check_non_empty(data.shape())?;
        let num_labels = data.iter().copied().max().unwrap_or(0);
        Ok(Self { data, num_labels })
    }

    /// Wrap a label array whose largest label is already known
    ///
    /// # Panics
    ///
    /// `num_labels` must be at least every label in `data`. Component
    /// queries size their per-label tables from it and panic on a larger
    /// label; debug builds check the precondition here.
    pub fn new_unchecked(data: ArrayD<u32>, num_labels: u32) -> Self {
        debug_assert!(
            data.iter().all(|&l| l <= num_labels),
            "label map holds a label above num_labels = {}",
            num_labels
        );
        Self { data, num_labels }
    }

    /// Shape of the label array
    #[inline]
    pub fn shape(&self) -> &[usize] {
        self.data.shape()
    }

    /// Number of axes
    #[inline]
    pub fn ndim(&self) -> usize {
        self.data.ndim()
    }

    /// Total number of samples
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Always false: a label map holds at least one sample
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Largest label value
    #[inline]
    pub fn num_labels(&self) -> u32 {
        self.num_labels
    }

    /// Label at an n-dimensional index, `None` if out of bounds
    pub fn get(&self, index: &[usize]) -> Option<u32> {
        if index.len() != self.ndim() {
            return None;
        }
        self.data.get(index).copied()
    }

    /// Labels in row-major order
    pub fn iter(&self) -> impl Iterator<Item = u32> + '_ {
        self.data.iter().copied()
    }

    /// Foreground mask: true wherever the label is non-zero
    pub fn to_mask(&self) -> BinaryMask {
        BinaryMask::from_array_unchecked(self.data.mapv(|l| l > 0))
    }

    /// Borrow the underlying array
    #[inline]
    pub fn view(&self) -> ArrayViewD<'_, u32> {
        self.data.view()
    }

    /// Reference to the underlying array
    #[inline]
    pub fn as_array(&self) -> &ArrayD<u32> {
        &self.data
    }

    /// Consume the map and return the underlying array
    #[inline]
    pub fn into_array(self) -> ArrayD<u32> {
        self.data
    }
}
