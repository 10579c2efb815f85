//! Batched vector conversion, 8 pixels per iteration.
//!
//! Each 32-byte batch goes through:
//!
//! ```text
//! ARGB ARGB ARGB ARGB | ARGB ARGB ARGB ARGB     two 16-byte loads
//! AAAA RRRR GGGG BBBB | AAAA RRRR GGGG BBBB     DEINTERLEAVE
//! 16-bit lanes: AR x2, GB x2                    zero-extend
//! AAAAAAAA RRRRRRRR / GGGGGGGG BBBBBBBB         pack + SWAP_MIDDLE_GROUPS
//! Y = R*wR + G*wG + B*wB                        Q15 multiply-high-round, saturating add
//! AAAAAAAA YYYYYYYY                             pack
//! AYYY AYYY AYYY AYYY | AYYY AYYY AYYY AYYY     EXPAND_LOW / EXPAND_HIGH
//! ```
//!
//! Bytes left over after the last full batch go through the scalar formula.

#[cfg(target_arch = "aarch64")]
mod neon;
#[cfg(target_arch = "x86_64")]
mod sse;
mod tables;

#[cfg(test)]
mod lanes;

#[cfg(any(target_arch = "x86_64", target_arch = "aarch64"))]
use common::cpu_features;

use crate::converter::{Converter, ConverterKind, RowConvertFn};
use crate::error::{Error, Result};
use crate::pixel_buffer::PixelBuffer;

#[cfg(target_arch = "x86_64")]
pub(super) const REQUIRED_FEATURE: &str = "ssse3";
#[cfg(target_arch = "aarch64")]
pub(super) const REQUIRED_FEATURE: &str = "neon";
#[cfg(not(any(target_arch = "x86_64", target_arch = "aarch64")))]
pub(super) const REQUIRED_FEATURE: &str = "ssse3 or neon";

/// Fixed-point vector conversion of 8 pixels per iteration.
///
/// Agrees with [`ScalarConverter`] to within 1 on every pixel.
///
/// [`ScalarConverter`]: crate::ScalarConverter
#[derive(Debug, Clone, Copy, Default)]
pub struct BatchVectorConverter;

impl BatchVectorConverter {
    pub fn new() -> Self {
        Self
    }

    /// Whether the CPU has the byte shuffle and rounding multiply the
    /// pipeline needs.
    pub fn is_available() -> bool {
        row_kernel().is_some()
    }
}

impl Converter for BatchVectorConverter {
    fn kind(&self) -> ConverterKind {
        ConverterKind::BatchVector
    }

    fn convert(&self, pixels: &PixelBuffer) -> Result<PixelBuffer> {
        let kernel = row_kernel().ok_or(Error::CapabilityUnsupported {
            converter: ConverterKind::BatchVector,
            feature: REQUIRED_FEATURE,
        })?;

        let mut output = PixelBuffer::zeroed(pixels.len());
        kernel(pixels.as_bytes(), output.as_bytes_mut());
        Ok(output)
    }
}

/// Row kernel for this CPU, if it can run the batch pipeline.
fn row_kernel() -> Option<RowConvertFn> {
    #[cfg(target_arch = "x86_64")]
    {
        if cpu_features::has_ssse3() {
            return Some(convert_row_ssse3);
        }
    }

    #[cfg(target_arch = "aarch64")]
    {
        if cpu_features::has_neon() {
            return Some(convert_row_neon);
        }
    }

    None
}

#[cfg(target_arch = "x86_64")]
fn convert_row_ssse3(src: &[u8], dst: &mut [u8]) {
    // SAFETY: only handed out by `row_kernel` after the SSSE3 probe.
    unsafe { sse::convert_argb_to_gray_ssse3(src, dst) }
}

#[cfg(target_arch = "aarch64")]
fn convert_row_neon(src: &[u8], dst: &mut [u8]) {
    // SAFETY: only handed out by `row_kernel` after the NEON probe.
    unsafe { neon::convert_argb_to_gray_neon(src, dst) }
}
