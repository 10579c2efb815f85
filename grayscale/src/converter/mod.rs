//! Interchangeable ARGB to grayscale converters.
//!
//! Every converter takes an immutable [`PixelBuffer`] and returns a new one of
//! the same length in which each pixel is `(A, Y, Y, Y)`.
//!
//! - [`ScalarConverter`]: per-pixel reference, defines correct output.
//! - [`PartitionedConverter`]: the reference formula split across workers.
//! - [`LaneDotConverter`]: one 4-lane float dot product per pixel.
//! - [`BatchVectorConverter`]: 8 pixels per iteration in Q15 fixed point.

mod batch;
mod lane_dot;
mod partitioned;
mod scalar;


use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};

use crate::error::Result;
use crate::pixel_buffer::PixelBuffer;

pub use batch::BatchVectorConverter;
pub use lane_dot::LaneDotConverter;
pub use partitioned::PartitionedConverter;
pub use scalar::ScalarConverter;

pub(crate) use scalar::convert_into as convert_scalar_into;

/// Row kernel: converts whole ARGB records from `src` into `dst`.
/// Both slices have the same length.
pub(crate) type RowConvertFn = fn(src: &[u8], dst: &mut [u8]);

/// Identifies one of the converter implementations.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter, IntoStaticStr,
)]
#[strum(serialize_all = "kebab-case")]
#[strum(ascii_case_insensitive)]
pub enum ConverterKind {
    Scalar,
    Partitioned,
    LaneDot,
    BatchVector,
}

impl ConverterKind {
    /// Whether this converter can run on the current CPU.
    pub fn is_supported(self) -> bool {
        match self {
            ConverterKind::Scalar | ConverterKind::Partitioned => true,
            ConverterKind::LaneDot => LaneDotConverter::is_available(),
            ConverterKind::BatchVector => BatchVectorConverter::is_available(),
        }
    }

    /// Instruction set the converter needs, if any.
    pub fn required_feature(self) -> Option<&'static str> {
        match self {
            ConverterKind::Scalar | ConverterKind::Partitioned => None,
            ConverterKind::LaneDot => Some(lane_dot::REQUIRED_FEATURE),
            ConverterKind::BatchVector => Some(batch::REQUIRED_FEATURE),
        }
    }
}

/// ARGB to grayscale conversion.
pub trait Converter: Send + Sync {
    fn kind(&self) -> ConverterKind;

    /// Whether [`Converter::convert`] can run on the current CPU.
    fn is_supported(&self) -> bool {
        self.kind().is_supported()
    }

    /// Convert every pixel of `pixels` into a freshly allocated buffer.
    ///
    /// Fails without reading the input if the converter needs an instruction
    /// set the CPU lacks.
    fn convert(&self, pixels: &PixelBuffer) -> Result<PixelBuffer>;
}
