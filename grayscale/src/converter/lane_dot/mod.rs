//! One-pixel-at-a-time conversion through a horizontal dot product.
//!
//! Each pixel is loaded as four f32 lanes `(A, R, G, B)` and dotted with
//! `(1.0, wR, wG, wB)` over the three colour lanes only. There is no batching
//! across pixels; this sits between the scalar reference and the batched path.

#[cfg(target_arch = "aarch64")]
mod neon;
#[cfg(target_arch = "x86_64")]
mod sse;

#[cfg(any(target_arch = "x86_64", target_arch = "aarch64"))]
use common::cpu_features;

use crate::converter::{Converter, ConverterKind, RowConvertFn};
use crate::error::{Error, Result};
use crate::pixel_buffer::PixelBuffer;

#[cfg(target_arch = "x86_64")]
pub(super) const REQUIRED_FEATURE: &str = "sse4.1";
#[cfg(target_arch = "aarch64")]
pub(super) const REQUIRED_FEATURE: &str = "neon";
#[cfg(not(any(target_arch = "x86_64", target_arch = "aarch64")))]
pub(super) const REQUIRED_FEATURE: &str = "sse4.1 or neon";

/// Lane weights: alpha passes through the dot product unweighted but is
/// excluded from the sum by the lane mask.
pub(crate) const LANE_WEIGHTS: [f32; 4] = [
    1.0,
    crate::luma::LUMA_R as f32,
    crate::luma::LUMA_G as f32,
    crate::luma::LUMA_B as f32,
];

#[derive(Debug, Clone, Copy, Default)]
pub struct LaneDotConverter;

impl LaneDotConverter {
    pub fn new() -> Self {
        Self
    }

    /// Whether the CPU has a usable horizontal dot product.
    pub fn is_available() -> bool {
        row_kernel().is_some()
    }
}

impl Converter for LaneDotConverter {
    fn kind(&self) -> ConverterKind {
        ConverterKind::LaneDot
    }

    fn convert(&self, pixels: &PixelBuffer) -> Result<PixelBuffer> {
        let kernel = row_kernel().ok_or(Error::CapabilityUnsupported {
            converter: ConverterKind::LaneDot,
            feature: REQUIRED_FEATURE,
        })?;

        let mut output = PixelBuffer::zeroed(pixels.len());
        kernel(pixels.as_bytes(), output.as_bytes_mut());
        Ok(output)
    }
}

/// Row kernel for this CPU, if it has a horizontal dot product.
fn row_kernel() -> Option<RowConvertFn> {
    #[cfg(target_arch = "x86_64")]
    {
        if cpu_features::has_sse4_1() {
            return Some(convert_row_sse41);
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
fn convert_row_sse41(src: &[u8], dst: &mut [u8]) {
    // SAFETY: only handed out by `row_kernel` after the SSE4.1 probe.
    unsafe { sse::convert_argb_to_gray_dp_sse41(src, dst) }
}

#[cfg(target_arch = "aarch64")]
fn convert_row_neon(src: &[u8], dst: &mut [u8]) {
    // SAFETY: only handed out by `row_kernel` after the NEON probe.
    unsafe { neon::convert_argb_to_gray_dot_neon(src, dst) }
}
