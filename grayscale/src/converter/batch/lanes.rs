//! Portable model of the batch pipeline, one lane at a time.
//!
//! Mirrors the vector kernels instruction for instruction so they can be
//! checked bit for bit on any target.

use super::tables::{
    BATCH_BYTES, DEINTERLEAVE, EXPAND_HIGH, EXPAND_LOW, SWAP_MIDDLE_GROUPS,
};
use crate::luma::{LANE_FRACTION_BITS, LUMA_B_Q15, LUMA_G_Q15, LUMA_R_Q15, mul_high_round_scale};

type Bytes = [u8; 16];
type Words = [u16; 8];

/// `pshufb` / `tbl` with in-range indices.
pub(crate) fn shuffle(v: Bytes, table: &Bytes) -> Bytes {
    std::array::from_fn(|i| v[table[i] as usize])
}

/// Zero-extend bytes 0..8.
fn widen_low(v: Bytes) -> Words {
    std::array::from_fn(|i| v[i] as u16)
}

/// Zero-extend bytes 8..16.
fn widen_high(v: Bytes) -> Words {
    std::array::from_fn(|i| v[i + 8] as u16)
}

/// `packuswb`: signed 16-bit lanes saturated to unsigned bytes.
fn pack_saturate(low: Words, high: Words) -> Bytes {
    std::array::from_fn(|i| {
        let lane = if i < 8 { low[i] } else { high[i - 8] };
        (lane as i16).clamp(0, u8::MAX as i16) as u8
    })
}

fn weigh(v: Words, weight: i16) -> Words {
    v.map(|lane| mul_high_round_scale((lane << LANE_FRACTION_BITS) as i16, weight) as u16)
}

fn add_saturate(a: Words, b: Words) -> Words {
    std::array::from_fn(|i| a[i].saturating_add(b[i]))
}

fn load(chunk: &[u8]) -> Bytes {
    std::array::from_fn(|i| chunk[i])
}

/// Convert one 32-byte batch.
pub(crate) fn convert_batch(chunk: &[u8]) -> [u8; BATCH_BYTES] {
    let v1 = shuffle(load(&chunk[..16]), &DEINTERLEAVE);
    let v2 = shuffle(load(&chunk[16..BATCH_BYTES]), &DEINTERLEAVE);

    let ar = shuffle(pack_saturate(widen_low(v1), widen_low(v2)), &SWAP_MIDDLE_GROUPS);
    let gb = shuffle(pack_saturate(widen_high(v1), widen_high(v2)), &SWAP_MIDDLE_GROUPS);

    let a = widen_low(ar);
    let r = weigh(widen_high(ar), LUMA_R_Q15);
    let g = weigh(widen_low(gb), LUMA_G_Q15);
    let b = weigh(widen_high(gb), LUMA_B_Q15);
    let luma = add_saturate(r, add_saturate(g, b)).map(|lane| lane >> LANE_FRACTION_BITS);

    let packed = pack_saturate(a, luma);
    let mut out = [0u8; BATCH_BYTES];
    out[..16].copy_from_slice(&shuffle(packed, &EXPAND_LOW));
    out[16..].copy_from_slice(&shuffle(packed, &EXPAND_HIGH));
    out
}

/// Whole-buffer model: batches through [`convert_batch`], tail through the
/// scalar formula.
pub(crate) fn convert(src: &[u8]) -> Vec<u8> {
    let mut dst = vec![0u8; src.len()];
    let batched = src.len() / BATCH_BYTES * BATCH_BYTES;
    for (from, to) in src[..batched]
        .chunks_exact(BATCH_BYTES)
        .zip(dst[..batched].chunks_exact_mut(BATCH_BYTES))
    {
        to.copy_from_slice(&convert_batch(from));
    }
    crate::converter::convert_scalar_into(&src[batched..], &mut dst[batched..]);
    dst
}
