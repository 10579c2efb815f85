// NEON dot-product implementation for aarch64.

#![allow(unsafe_op_in_unsafe_fn)]

use std::arch::aarch64::*;

use super::LANE_WEIGHTS;

#[target_feature(enable = "neon")]
pub(super) unsafe fn convert_argb_to_gray_dot_neon(src: &[u8], dst: &mut [u8]) {
    debug_assert_eq!(src.len(), dst.len());

    let weights = vld1q_f32(LANE_WEIGHTS.as_ptr());

    for (from, to) in src.chunks_exact(4).zip(dst.chunks_exact_mut(4)) {
        let lanes = [from[0] as f32, from[1] as f32, from[2] as f32, from[3] as f32];
        let products = vmulq_f32(vld1q_f32(lanes.as_ptr()), weights);
        // Drop the alpha lane before the horizontal sum.
        let gray = vaddvq_f32(vsetq_lane_f32::<0>(0.0, products)) as u8;

        to[0] = from[0];
        to[1] = gray;
        to[2] = gray;
        to[3] = gray;
    }
}
