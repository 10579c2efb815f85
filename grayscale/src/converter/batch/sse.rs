// SSSE3 implementation of the batch pipeline for x86_64.

#![allow(unsafe_op_in_unsafe_fn)]

use std::arch::x86_64::*;

use super::tables::{
    BATCH_BYTES, DEINTERLEAVE, EXPAND_HIGH, EXPAND_LOW, SWAP_MIDDLE_GROUPS,
};
use crate::converter::convert_scalar_into;
use crate::luma::{LANE_FRACTION_BITS, LUMA_B_Q15, LUMA_G_Q15, LUMA_R_Q15};

#[target_feature(enable = "ssse3")]
pub(super) unsafe fn convert_argb_to_gray_ssse3(src: &[u8], dst: &mut [u8]) {
    assert_eq!(src.len(), dst.len());

    let src_ptr = src.as_ptr();
    let dst_ptr = dst.as_mut_ptr();
    let batches = src.len() / BATCH_BYTES;

    let deinterleave = load_table(&DEINTERLEAVE);
    let swap_middle = load_table(&SWAP_MIDDLE_GROUPS);
    let expand_low = load_table(&EXPAND_LOW);
    let expand_high = load_table(&EXPAND_HIGH);

    let r_w = _mm_set1_epi16(LUMA_R_Q15);
    let g_w = _mm_set1_epi16(LUMA_G_Q15);
    let b_w = _mm_set1_epi16(LUMA_B_Q15);
    let zero = _mm_setzero_si128();

    for i in 0..batches {
        let offset = i * BATCH_BYTES;

        // ARGB x4 -> AAAARRRRGGGGBBBB
        let v1 = _mm_shuffle_epi8(
            _mm_loadu_si128(src_ptr.add(offset) as *const __m128i),
            deinterleave,
        );
        let v2 = _mm_shuffle_epi8(
            _mm_loadu_si128(src_ptr.add(offset + 16) as *const __m128i),
            deinterleave,
        );

        let l1 = _mm_unpacklo_epi8(v1, zero);
        let h1 = _mm_unpackhi_epi8(v1, zero);
        let l2 = _mm_unpacklo_epi8(v2, zero);
        let h2 = _mm_unpackhi_epi8(v2, zero);

        // AAAAAAAA RRRRRRRR
        let ar = _mm_shuffle_epi8(_mm_packus_epi16(l1, l2), swap_middle);
        // GGGGGGGG BBBBBBBB
        let gb = _mm_shuffle_epi8(_mm_packus_epi16(h1, h2), swap_middle);

        let a = _mm_unpacklo_epi8(ar, zero);
        let r = weigh(_mm_unpackhi_epi8(ar, zero), r_w);
        let g = weigh(_mm_unpacklo_epi8(gb, zero), g_w);
        let b = weigh(_mm_unpackhi_epi8(gb, zero), b_w);
        let luma = _mm_srli_epi16::<LANE_FRACTION_BITS>(_mm_adds_epu16(r, _mm_adds_epu16(g, b)));

        // AAAAAAAA YYYYYYYY
        let packed = _mm_packus_epi16(a, luma);

        _mm_storeu_si128(
            dst_ptr.add(offset) as *mut __m128i,
            _mm_shuffle_epi8(packed, expand_low),
        );
        _mm_storeu_si128(
            dst_ptr.add(offset + 16) as *mut __m128i,
            _mm_shuffle_epi8(packed, expand_high),
        );
    }

    // Scalar remainder
    let done = batches * BATCH_BYTES;
    convert_scalar_into(&src[done..], &mut dst[done..]);
}

/// `round(lane * weight / 32768)` with the lane pre-scaled by
/// `LANE_FRACTION_BITS`.
#[inline]
#[target_feature(enable = "ssse3")]
unsafe fn weigh(lane: __m128i, weight: __m128i) -> __m128i {
    _mm_mulhrs_epi16(_mm_slli_epi16::<LANE_FRACTION_BITS>(lane), weight)
}

#[inline]
#[target_feature(enable = "ssse3")]
unsafe fn load_table(table: &[u8; 16]) -> __m128i {
    _mm_loadu_si128(table.as_ptr() as *const __m128i)
}
