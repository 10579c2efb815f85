use super::*;

#[test]
fn test_partition_len_ceil_divides() {
    assert_eq!(partition_len(10, 3), 4);
    assert_eq!(partition_len(9, 3), 3);
    assert_eq!(partition_len(1, 8), 1);
    assert_eq!(partition_len(0, 4), 1);
    assert_eq!(partition_len(7, 0), 7);
}

#[test]
fn test_partition_ranges_cover_without_overlap() {
    for len in [0usize, 1, 2, 7, 64, 101] {
        for parts in 1..=9 {
            let ranges = partition_ranges(len, parts);
            assert!(ranges.len() <= parts, "len={} parts={}", len, parts);

            let mut next = 0;
            for range in &ranges {
                assert_eq!(range.start, next, "gap at len={} parts={}", len, parts);
                assert!(range.end > range.start);
                next = range.end;
            }
            assert_eq!(next, len, "len={} parts={}", len, parts);
        }
    }
}

#[test]
fn test_par_partitions_offsets() {
    let src: Vec<u32> = (0..100).collect();
    let mut dst: Vec<u32> = vec![0; 100];

    par_partitions(&src, &mut dst, 1, 7).for_each(|(range, s, d)| {
        assert_eq!(range.len(), s.len());
        for (i, (from, to)) in s.iter().zip(d.iter_mut()).enumerate() {
            assert_eq!(*from as usize, range.start + i);
            *to = *from * 2;
        }
    });

    for (i, &v) in dst.iter().enumerate() {
        assert_eq!(v, i as u32 * 2);
    }
}

#[test]
fn test_par_partitions_record_alignment() {
    let record_len = 4;
    let records = 13;
    let src: Vec<u8> = vec![1; record_len * records];
    let mut dst: Vec<u8> = vec![0; record_len * records];

    let ranges: Vec<_> = par_partitions(&src, &mut dst, record_len, 5)
        .map(|(range, s, d)| {
            assert_eq!(s.len() % record_len, 0, "Chunk not record-aligned");
            assert_eq!(s.len(), d.len());
            d.copy_from_slice(s);
            range
        })
        .collect();

    assert_eq!(ranges, partition_ranges(records, 5));
    assert!(dst.iter().all(|&b| b == 1));
}

#[test]
fn test_par_partitions_more_parts_than_records() {
    let src = [9u8; 8];
    let mut dst = [0u8; 8];

    let count = par_partitions(&src, &mut dst, 4, 16)
        .map(|(_, s, d)| d.copy_from_slice(s))
        .count();

    assert_eq!(count, 2);
    assert_eq!(dst, src);
}

#[test]
fn test_par_partitions_empty() {
    let src: [u8; 0] = [];
    let mut dst: [u8; 0] = [];
    assert_eq!(par_partitions(&src, &mut dst, 4, 3).count(), 0);
}

#[test]
#[should_panic(expected = "equal length")]
fn test_par_partitions_unequal_lengths_panics() {
    let src = vec![0u8; 16];
    let mut dst = vec![0u8; 8];
    par_partitions(&src, &mut dst, 4, 2).for_each(|_| {});
}

#[test]
#[should_panic(expected = "whole records")]
fn test_par_partitions_partial_record_panics() {
    let src = vec![0u8; 10];
    let mut dst = vec![0u8; 10];
    par_partitions(&src, &mut dst, 4, 2).for_each(|_| {});
}
