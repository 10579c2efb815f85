// NEON implementation of the batch pipeline for aarch64.

#![allow(unsafe_op_in_unsafe_fn)]

use std::arch::aarch64::*;

use super::tables::{
    BATCH_BYTES, DEINTERLEAVE, EXPAND_HIGH, EXPAND_LOW, SWAP_MIDDLE_GROUPS,
};
use crate::converter::convert_scalar_into;
use crate::luma::{LANE_FRACTION_BITS, LUMA_B_Q15, LUMA_G_Q15, LUMA_R_Q15};

#[target_feature(enable = "neon")]
pub(super) unsafe fn convert_argb_to_gray_neon(src: &[u8], dst: &mut [u8]) {
    assert_eq!(src.len(), dst.len());

    let src_ptr = src.as_ptr();
    let dst_ptr = dst.as_mut_ptr();
    let batches = src.len() / BATCH_BYTES;

    let deinterleave = vld1q_u8(DEINTERLEAVE.as_ptr());
    let swap_middle = vld1q_u8(SWAP_MIDDLE_GROUPS.as_ptr());
    let expand_low = vld1q_u8(EXPAND_LOW.as_ptr());
    let expand_high = vld1q_u8(EXPAND_HIGH.as_ptr());

    let r_w = vdupq_n_s16(LUMA_R_Q15);
    let g_w = vdupq_n_s16(LUMA_G_Q15);
    let b_w = vdupq_n_s16(LUMA_B_Q15);

    for i in 0..batches {
        let offset = i * BATCH_BYTES;

        // ARGB x4 -> AAAARRRRGGGGBBBB
        let v1 = vqtbl1q_u8(vld1q_u8(src_ptr.add(offset)), deinterleave);
        let v2 = vqtbl1q_u8(vld1q_u8(src_ptr.add(offset + 16)), deinterleave);

        let l1 = vreinterpretq_s16_u16(vmovl_u8(vget_low_u8(v1)));
        let h1 = vreinterpretq_s16_u16(vmovl_high_u8(v1));
        let l2 = vreinterpretq_s16_u16(vmovl_u8(vget_low_u8(v2)));
        let h2 = vreinterpretq_s16_u16(vmovl_high_u8(v2));

        // AAAAAAAA RRRRRRRR
        let ar = vqtbl1q_u8(vcombine_u8(vqmovun_s16(l1), vqmovun_s16(l2)), swap_middle);
        // GGGGGGGG BBBBBBBB
        let gb = vqtbl1q_u8(vcombine_u8(vqmovun_s16(h1), vqmovun_s16(h2)), swap_middle);

        let a = vmovl_u8(vget_low_u8(ar));
        let r = weigh(vmovl_high_u8(ar), r_w);
        let g = weigh(vmovl_u8(vget_low_u8(gb)), g_w);
        let b = weigh(vmovl_high_u8(gb), b_w);
        let luma = vshrq_n_u16::<LANE_FRACTION_BITS>(vqaddq_u16(r, vqaddq_u16(g, b)));

        // AAAAAAAA YYYYYYYY
        let packed = vcombine_u8(vqmovn_u16(a), vqmovn_u16(luma));

        vst1q_u8(dst_ptr.add(offset), vqtbl1q_u8(packed, expand_low));
        vst1q_u8(dst_ptr.add(offset + 16), vqtbl1q_u8(packed, expand_high));
    }

    // Scalar remainder
    let done = batches * BATCH_BYTES;
    convert_scalar_into(&src[done..], &mut dst[done..]);
}

/// `round(lane * weight / 32768)` with the lane pre-scaled by
/// `LANE_FRACTION_BITS`. `sqrdmulh` doubles and halves, which lands on the
/// same rounding as `pmulhrsw`.
#[inline]
#[target_feature(enable = "neon")]
unsafe fn weigh(lane: uint16x8_t, weight: int16x8_t) -> uint16x8_t {
    let scaled = vshlq_n_s16::<LANE_FRACTION_BITS>(vreinterpretq_s16_u16(lane));
    vreinterpretq_u16_s16(vqrdmulhq_s16(scaled, weight))
}
