//! Conversions from `image` crate buffers
//!
//! Grayscale buffers become `(height, width)` arrays; a stack of equally
//! sized frames becomes a `(depth, height, width)` volume.

use crate::error::{Error, Result};
use crate::sample::Sample;
use image::{ImageBuffer, Luma, Primitive};
use ndarray::{ArrayD, IxDyn};

/// Copy a grayscale image into a 2D `(height, width)` array
///
/// # Errors
///
/// Returns [`Error::EmptyImage`] for a zero-sized image.
pub fn luma_to_array<P>(img: &ImageBuffer<Luma<P>, Vec<P>>) -> Result<ArrayD<P>>
where
    P: Sample + Primitive,
{
    let (width, height) = img.dimensions();
    if width == 0 || height == 0 {
        return Err(Error::EmptyImage);
    }
    let shape = [height as usize, width as usize];
    let data = img.as_raw()[..shape[0] * shape[1]].to_vec();
    Ok(ArrayD::from_shape_vec(IxDyn(&shape), data)?)
}

/// Stack grayscale frames into a 3D `(depth, height, width)` array
///
/// # Errors
///
/// - [`Error::EmptyImage`] if there are no frames or the frames are zero-sized
/// - [`Error::ShapeMismatch`] if the frames differ in size
pub fn luma_stack_to_array<P>(frames: &[ImageBuffer<Luma<P>, Vec<P>>]) -> Result<ArrayD<P>>
where
    P: Sample + Primitive,
{
    let first = frames.first().ok_or(Error::EmptyImage)?;
    let (width, height) = first.dimensions();
    if width == 0 || height == 0 {
        return Err(Error::EmptyImage);
    }

    let plane = (width as usize) * (height as usize);
    let mut data = Vec::with_capacity(plane * frames.len());
    for frame in frames {
        if frame.dimensions() != (width, height) {
            let (w, h) = frame.dimensions();
            return Err(Error::ShapeMismatch {
                expected: vec![height as usize, width as usize],
                actual: vec![h as usize, w as usize],
            });
        }
        data.extend_from_slice(&frame.as_raw()[..plane]);
    }

    let shape = [frames.len(), height as usize, width as usize];
    Ok(ArrayD::from_shape_vec(IxDyn(&shape), data)?)
}
