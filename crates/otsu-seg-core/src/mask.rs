//! BinaryMask - Foreground/background mask
//!
//! A `BinaryMask` is an n-dimensional array of `bool` with at least one
//! axis and at least one sample. `true` marks foreground.

use crate::error::{Error, Result};
use crate::shape::check_non_empty;
use ndarray::{ArrayD, ArrayViewD, IxDyn};

/// Boolean foreground mask of any dimensionality
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinaryMask {
    data: ArrayD<bool>,
}

impl BinaryMask {
    /// Create an all-background mask
    ///
    /// # Errors
    ///
    /// Returns an error if `shape` has no axes or a zero-length axis.
    pub fn new(shape: &[usize]) -> Result<Self> {
        check_non_empty(shape)?;
        Ok(Self {
            data: ArrayD::from_elem(IxDyn(shape), false),
        })
    }

    /// Wrap an existing boolean array
    ///
    /// # Errors
    ///
    /// Returns an error if the array has no axes or no samples.
    pub fn from_array(data: ArrayD<bool>) -> Result<Self> {
        check_non_empty(data.shape())?;
        Ok(Self { data })
    }

    /// Wrap an array already known to be non-empty
    pub(crate) fn from_array_unchecked(data: ArrayD<bool>) -> Self {
        Self { data }
    }

    /// Shape of the mask
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

    /// Always false: a mask holds at least one sample
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Number of foreground samples
    pub fn count_foreground(&self) -> usize {
        self.data.iter().filter(|&&v| v).count()
    }

    /// Value at an n-dimensional index, `None` if out of bounds
    pub fn get(&self, index: &[usize]) -> Option<bool> {
        if index.len() != self.ndim() {
            return None;
        }
        self.data.get(index).copied()
    }

    /// Set the value at an n-dimensional index
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if `index` is not inside the mask.
    pub fn set(&mut self, index: &[usize], value: bool) -> Result<()> {
        let shape = self.shape().to_vec();
        if index.len() != shape.len() {
            return Err(Error::IndexOutOfBounds {
                index: index.to_vec(),
                shape,
            });
        }
        match self.data.get_mut(index) {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => Err(Error::IndexOutOfBounds {
                index: index.to_vec(),
                shape,
            }),
        }
    }

    /// Samples in row-major order
    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        self.data.iter().copied()
    }

    /// Borrow the underlying array
    #[inline]
    pub fn view(&self) -> ArrayViewD<'_, bool> {
        self.data.view()
    }

    /// Reference to the underlying array
    #[inline]
    pub fn as_array(&self) -> &ArrayD<bool> {
        &self.data
    }

    /// Consume the mask and return the underlying array
    #[inline]
    pub fn into_array(self) -> ArrayD<bool> {
        self.data
    }
}
