//! Luminance weights and the per-pixel reference formula.
//!
//! Rec. 709 relative luminance: `Y = 0.2126 R + 0.7152 G + 0.0722 B`.
//!
//! The vector path works on the same weights in Q15 fixed point
//! (`round(w * 32767)`), applied with a rounding multiply-high that divides by
//! 32768. Lanes carry [`LANE_FRACTION_BITS`] extra fraction bits through the
//! multiply and are truncated afterwards, so the vector result truncates just
//! like [`luma`] and never deviates from it by more than 1.

pub const LUMA_R: f64 = 0.2126;
pub const LUMA_G: f64 = 0.7152;
pub const LUMA_B: f64 = 0.0722;

/// Q15 scale used to pre-scale the weights.
pub(crate) const Q15_SCALE: f64 = i16::MAX as f64;

pub(crate) const LUMA_R_Q15: i16 = to_q15(LUMA_R);
pub(crate) const LUMA_G_Q15: i16 = to_q15(LUMA_G);
pub(crate) const LUMA_B_Q15: i16 = to_q15(LUMA_B);

/// Extra fraction bits carried by 16-bit lanes through the weighting stage.
/// `255 << 6` still fits an i16 lane, and so does the sum of the three
/// weighted channels.
pub(crate) const LANE_FRACTION_BITS: i32 = 6;

const fn to_q15(weight: f64) -> i16 {
    (weight * Q15_SCALE + 0.5) as i16
}

/// Reference luma for one pixel, truncated toward zero.
#[inline]
pub fn luma(r: u8, g: u8, b: u8) -> u8 {
    (r as f64 * LUMA_R + g as f64 * LUMA_G + b as f64 * LUMA_B) as u8
}

/// Software `pmulhrsw`: `round(a * b / 32768)` for one 16-bit lane.
#[inline]
pub(crate) fn mul_high_round_scale(a: i16, b: i16) -> i16 {
    ((a as i32 * b as i32 + (1 << 14)) >> 15).clamp(i16::MIN as i32, i16::MAX as i32) as i16
}
