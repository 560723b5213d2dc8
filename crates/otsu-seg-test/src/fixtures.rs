//! Synthetic test images
//!
//! Small arrays written inline in tests replace the image files a
//! file-based regression suite would load.

use crate::error::{TestError, TestResult};
use ndarray::{ArrayD, IxDyn};
use otsu_seg_core::BinaryMask;

/// Build a 2D `(rows, columns)` image from row slices
///
/// # Errors
///
/// Returns [`TestError::RaggedRows`] if rows differ in length, or
/// [`TestError::InvalidFixture`] if there are no rows.
pub fn image_from_rows<T: Copy>(rows: &[&[T]]) -> TestResult<ArrayD<T>> {
    let width = match rows.first() {
        Some(row) => row.len(),
        None => return Err(TestError::InvalidFixture("no rows".to_string())),
    };

    let mut data = Vec::with_capacity(width * rows.len());
    for (row, values) in rows.iter().enumerate() {
        if values.len() != width {
            return Err(TestError::RaggedRows {
                row,
                expected: width,
                actual: values.len(),
            });
        }
        data.extend_from_slice(values);
    }

    Ok(ArrayD::from_shape_vec(IxDyn(&[rows.len(), width]), data)?)
}

/// Build an image of `background` with one axis-aligned block of `foreground`
///
/// The block starts at `start` and spans `extent` samples along each axis.
pub fn block_image<T: Copy>(
    shape: &[usize],
    start: &[usize],
    extent: &[usize],
    foreground: T,
    background: T,
) -> TestResult<ArrayD<T>> {
    if start.len() != shape.len() || extent.len() != shape.len() {
        return Err(TestError::InvalidFixture(format!(
            "block {:?}+{:?} does not match shape {:?}",
            start, extent, shape
        )));
    }
    if (0..shape.len()).any(|k| start[k] + extent[k] > shape[k]) {
        return Err(TestError::InvalidFixture(format!(
            "block {:?}+{:?} exceeds shape {:?}",
            start, extent, shape
        )));
    }

    let image = ArrayD::from_shape_fn(IxDyn(shape), |index| {
        let inside = (0..shape.len())
            .all(|k| index[k] >= start[k] && index[k] < start[k] + extent[k]);
        if inside { foreground } else { background }
    });
    Ok(image)
}

/// Build a mask with foreground exactly at `points`
pub fn mask_from_points(shape: &[usize], points: &[&[usize]]) -> TestResult<BinaryMask> {
    let mut mask = BinaryMask::new(shape)?;
    for point in points {
        mask.set(point, true)?;
    }
    Ok(mask)
}
