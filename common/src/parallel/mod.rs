//! Parallel processing utilities.

use std::ops::Range;

use rayon::prelude::*;

#[cfg(test)]
mod tests;

/// Records per partition when `len` records are split across `parts` workers.
///
/// Ceiling division, so at most `parts` partitions are produced and only the
/// last one may be shorter.
#[inline]
pub fn partition_len(len: usize, parts: usize) -> usize {
    len.div_ceil(parts.max(1)).max(1)
}

/// Record ranges covered by each partition, in order.
#[cfg(test)]
pub(crate) fn partition_ranges(len: usize, parts: usize) -> Vec<Range<usize>> {
    let per_part = partition_len(len, parts);
    (0..len)
        .step_by(per_part)
        .map(|start| start..(start + per_part).min(len))
        .collect()
}

/// Parallel iterator over matching partitions of a read-only source and a
/// mutable destination.
///
/// Both slices are cut on `record_len` boundaries into at most `parts`
/// contiguous partitions. Each item is `(record_range, src_chunk, dst_chunk)`
/// where `record_range` is the partition's position in whole records.
pub fn par_partitions<'a, T: Sync, U: Send>(
    src: &'a [T],
    dst: &'a mut [U],
    record_len: usize,
    parts: usize,
) -> impl IndexedParallelIterator<Item = (Range<usize>, &'a [T], &'a mut [U])> {
    assert!(record_len > 0, "record length must be non-zero");
    assert_eq!(
        src.len(),
        dst.len(),
        "Partitioned slices must have equal length"
    );
    assert_eq!(
        src.len() % record_len,
        0,
        "Partitioned slices must hold whole records"
    );

    let per_part = partition_len(src.len() / record_len, parts);
    let chunk_len = per_part * record_len;
    src.par_chunks(chunk_len)
        .zip(dst.par_chunks_mut(chunk_len))
        .enumerate()
        .map(move |(idx, (src_chunk, dst_chunk))| {
            let start = idx * per_part;
            (start..start + src_chunk.len() / record_len, src_chunk, dst_chunk)
        })
}
