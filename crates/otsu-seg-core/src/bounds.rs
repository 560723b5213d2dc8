//! BoundingBox - Axis-aligned n-dimensional box
//!
//! Boxes are half-open: along axis `k` they cover `start[k]..end[k]`.

use crate::error::{Error, Result};

/// Axis-aligned bounding box with half-open extent on each axis
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BoundingBox {
    start: Vec<usize>,
    end: Vec<usize>,
}

impl BoundingBox {
    /// Create a box from its corners
    ///
    /// # Errors
    ///
    /// Returns an error if the corners have different lengths, no axes, or
    /// `start[k] >= end[k]` on some axis.
    pub fn new(start: Vec<usize>, end: Vec<usize>) -> Result<Self> {
        if start.is_empty() || start.len() != end.len() {
            return Err(Error::InvalidParameter(format!(
                "bounding box corners {:?} and {:?} do not describe a box",
                start, end
            )));
        }
        if start.iter().zip(&end).any(|(s, e)| s >= e) {
            return Err(Error::InvalidParameter(format!(
                "bounding box {:?}..{:?} has an empty axis",
                start, end
            )));
        }
        Ok(Self { start, end })
    }

    /// Create a box without validation
    pub fn new_unchecked(start: Vec<usize>, end: Vec<usize>) -> Self {
        Self { start, end }
    }

    /// The box covering exactly one sample
    pub fn from_point(point: &[usize]) -> Self {
        Self {
            start: point.to_vec(),
            end: point.iter().map(|&p| p + 1).collect(),
        }
    }

    /// Grow the box so it covers `point`
    pub fn include(&mut self, point: &[usize]) {
        for (k, &p) in point.iter().enumerate() {
            self.start[k] = self.start[k].min(p);
            self.end[k] = self.end[k].max(p + 1);
        }
    }

    /// Inclusive lower corner
    #[inline]
    pub fn start(&self) -> &[usize] {
        &self.start
    }

    /// Exclusive upper corner
    #[inline]
    pub fn end(&self) -> &[usize] {
        &self.end
    }

    /// Number of axes
    #[inline]
    pub fn ndim(&self) -> usize {
        self.start.len()
    }

    /// Size along each axis
    pub fn extent(&self) -> Vec<usize> {
        self.start
            .iter()
            .zip(&self.end)
            .map(|(s, e)| e - s)
            .collect()
    }

    /// Number of samples covered
    pub fn volume(&self) -> usize {
        self.extent().iter().product()
    }

    /// Check whether `point` lies inside the box
    pub fn contains(&self, point: &[usize]) -> bool {
        point.len() == self.ndim()
            && point
                .iter()
                .enumerate()
                .all(|(k, &p)| p >= self.start[k] && p < self.end[k])
    }
}
