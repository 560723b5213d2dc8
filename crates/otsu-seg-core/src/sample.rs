//! Numeric sample types
//!
//! Any primitive number that converts losslessly enough to `f64` can be an
//! image intensity. Thresholds are always computed in `f64`.

use num_traits::AsPrimitive;
use std::fmt::Debug;

/// A pixel or voxel intensity.
///
/// Implemented for every primitive integer and float type.
pub trait Sample: AsPrimitive<f64> + Debug + Send + Sync {
    /// True for integer types, whose samples only take integral values
    const INTEGER: bool;

    /// Convert the sample to `f64`.
    #[inline]
    fn to_f64(self) -> f64 {
        self.as_()
    }
}

macro_rules! impl_sample {
    ($integer:expr => $($t:ty),*) => {
        $(
            impl Sample for $t {
                const INTEGER: bool = $integer;
            }
        )*
    };
}

impl_sample!(true => u8, u16, u32, u64, usize, i8, i16, i32, i64, isize);
impl_sample!(false => f32, f64);
