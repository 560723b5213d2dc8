//! Layer types exchanged with the host viewer
//!
//! The host hands the widget an [`ImageLayer`] and receives a
//! [`LayerDataTuple`] describing the labels layer to add.

use image::DynamicImage;
use ndarray::{Array, ArrayD, Dimension};
use otsu_seg_core::{LabelMap, luma_to_array};
use std::fmt;

/// Pixel data of an image layer, one variant per sample type
#[derive(Debug, Clone, PartialEq)]
pub enum ImageData {
    U8(ArrayD<u8>),
    U16(ArrayD<u16>),
    U32(ArrayD<u32>),
    I8(ArrayD<i8>),
    I16(ArrayD<i16>),
    I32(ArrayD<i32>),
    F32(ArrayD<f32>),
    F64(ArrayD<f64>),
}

/// Evaluate `$body` with `$array` bound to the typed array inside `$data`
macro_rules! dispatch_image_data {
    ($data:expr, $array:ident => $body:expr) => {
        match $data {
            $crate::layer::ImageData::U8($array) => $body,
            $crate::layer::ImageData::U16($array) => $body,
            $crate::layer::ImageData::U32($array) => $body,
            $crate::layer::ImageData::I8($array) => $body,
            $crate::layer::ImageData::I16($array) => $body,
            $crate::layer::ImageData::I32($array) => $body,
            $crate::layer::ImageData::F32($array) => $body,
            $crate::layer::ImageData::F64($array) => $body,
        }
    };
}
pub(crate) use dispatch_image_data;

macro_rules! impl_from_array {
    ($($t:ty => $variant:ident),* $(,)?) => {
        $(
            impl<D: Dimension> From<Array<$t, D>> for ImageData {
                fn from(array: Array<$t, D>) -> Self {
                    ImageData::$variant(array.into_dyn())
                }
            }
        )*
    };
}

impl_from_array! {
    u8 => U8,
    u16 => U16,
    u32 => U32,
    i8 => I8,
    i16 => I16,
    i32 => I32,
    f32 => F32,
    f64 => F64,
}

impl ImageData {
    /// Convert a decoded image to grayscale layer data
    ///
    /// 8-bit and 16-bit grayscale keep their sample type. Color images are
    /// reduced to luminance first, since a global threshold needs one
    /// intensity per pixel; float color images become `F32`.
    pub fn from_dynamic_image(img: &DynamicImage) -> otsu_seg_core::Result<Self> {
        let data = match img {
            DynamicImage::ImageLuma8(buf) => ImageData::U8(luma_to_array(buf)?),
            DynamicImage::ImageLuma16(buf) => ImageData::U16(luma_to_array(buf)?),
            DynamicImage::ImageRgb32F(_) | DynamicImage::ImageRgba32F(_) => {
                log::warn!("reducing {:?} image to luminance", img.color());
                ImageData::F32(luma_to_array(&img.to_luma32f())?)
            }
            DynamicImage::ImageLumaA16(_)
            | DynamicImage::ImageRgb16(_)
            | DynamicImage::ImageRgba16(_) => {
                log::warn!("reducing {:?} image to luminance", img.color());
                ImageData::U16(luma_to_array(&img.to_luma16())?)
            }
            _ => {
                log::warn!("reducing {:?} image to luminance", img.color());
                ImageData::U8(luma_to_array(&img.to_luma8())?)
            }
        };
        Ok(data)
    }

    /// Shape of the pixel array
    pub fn shape(&self) -> &[usize] {
        dispatch_image_data!(self, array => array.shape())
    }

    /// Number of axes
    pub fn ndim(&self) -> usize {
        self.shape().len()
    }

    /// Total number of samples
    pub fn len(&self) -> usize {
        self.shape().iter().product()
    }

    /// True when the array has no samples
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Sample type name, as the host's array library spells it
    pub fn dtype(&self) -> &'static str {
        match self {
            ImageData::U8(_) => "uint8",
            ImageData::U16(_) => "uint16",
            ImageData::U32(_) => "uint32",
            ImageData::I8(_) => "int8",
            ImageData::I16(_) => "int16",
            ImageData::I32(_) => "int32",
            ImageData::F32(_) => "float32",
            ImageData::F64(_) => "float64",
        }
    }
}

/// An image layer: pixel data plus a display name
#[derive(Debug, Clone, PartialEq)]
pub struct ImageLayer {
    /// Pixel data
    pub data: ImageData,
    /// Display name
    pub name: String,
}

impl ImageLayer {
    /// Create a layer from a name and any supported array
    pub fn new(name: impl Into<String>, data: impl Into<ImageData>) -> Self {
        Self {
            data: data.into(),
            name: name.into(),
        }
    }
}

/// Kind of layer the host should create
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LayerKind {
    Image,
    Labels,
}

impl LayerKind {
    /// Layer type name understood by the host's plugin loader
    pub fn as_str(self) -> &'static str {
        match self {
            LayerKind::Image => "image",
            LayerKind::Labels => "labels",
        }
    }
}

impl fmt::Display for LayerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Keyword arguments for the new layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayerMetadata {
    /// Display name of the new layer
    pub name: String,
}

/// Everything the host needs to add a labels layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayerDataTuple {
    /// Label per sample, same shape as the input image
    pub data: LabelMap,
    /// Layer keyword arguments
    pub metadata: LayerMetadata,
    /// Layer kind, always [`LayerKind::Labels`] for segmentation output
    pub kind: LayerKind,
}

impl LayerDataTuple {
    /// Split into `(data, metadata, kind)`
    pub fn into_parts(self) -> (ArrayD<u32>, LayerMetadata, LayerKind) {
        (self.data.into_array(), self.metadata, self.kind)
    }
}
