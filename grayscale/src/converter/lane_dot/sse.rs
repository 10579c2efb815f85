// SSE4.1 dot-product implementation for x86_64.

#![allow(unsafe_op_in_unsafe_fn)]

use std::arch::x86_64::*;

use super::LANE_WEIGHTS;

/// `dpps` control: multiply lanes 1..=3 (R, G, B), write the sum to lane 0.
const DOT_RGB_TO_LANE0: i32 = 0b1110_0001;

#[target_feature(enable = "sse4.1")]
pub(super) unsafe fn convert_argb_to_gray_dp_sse41(src: &[u8], dst: &mut [u8]) {
    debug_assert_eq!(src.len(), dst.len());

    let weights = _mm_loadu_ps(LANE_WEIGHTS.as_ptr());

    for (from, to) in src.chunks_exact(4).zip(dst.chunks_exact_mut(4)) {
        let argb = _mm_setr_ps(from[0] as f32, from[1] as f32, from[2] as f32, from[3] as f32);
        let gray = _mm_cvtss_f32(_mm_dp_ps::<DOT_RGB_TO_LANE0>(argb, weights)) as u8;

        to[0] = from[0];
        to[1] = gray;
        to[2] = gray;
        to[3] = gray;
    }
}
