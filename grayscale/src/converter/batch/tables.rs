//! Byte permutation tables for the batch pipeline.
//!
//! Every table is a `pshufb` / `tbl` index vector: output byte `i` is input
//! byte `TABLE[i]`. Indices stay below 16, so no lane is ever zeroed.

use crate::pixel_buffer::BYTES_PER_PIXEL;

pub(crate) const BATCH_PIXELS: usize = 8;
pub(crate) const BATCH_BYTES: usize = BATCH_PIXELS * BYTES_PER_PIXEL;

/// `(A R G B) x 4` -> `AAAA RRRR GGGG BBBB`.
///
/// A 4x4 transpose, so it is also its own inverse.
pub(crate) const DEINTERLEAVE: [u8; 16] = [0, 4, 8, 12, 1, 5, 9, 13, 2, 6, 10, 14, 3, 7, 11, 15];

/// Swap the middle 4-byte groups: `A0-3 R0-3 A4-7 R4-7` -> `A0-7 R0-7`.
pub(crate) const SWAP_MIDDLE_GROUPS: [u8; 16] =
    [0, 1, 2, 3, 8, 9, 10, 11, 4, 5, 6, 7, 12, 13, 14, 15];

/// `A0-7 Y0-7` -> `(A Y Y Y)` for pixels 0..4.
pub(crate) const EXPAND_LOW: [u8; 16] = [0, 8, 8, 8, 1, 9, 9, 9, 2, 10, 10, 10, 3, 11, 11, 11];

/// `A0-7 Y0-7` -> `(A Y Y Y)` for pixels 4..8.
pub(crate) const EXPAND_HIGH: [u8; 16] =
    [4, 12, 12, 12, 5, 13, 13, 13, 6, 14, 14, 14, 7, 15, 15, 15];
