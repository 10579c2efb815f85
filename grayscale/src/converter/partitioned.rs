use std::any::Any;
use std::ops::Range;
use std::panic::{self, AssertUnwindSafe};

use common::parallel;
use rayon::prelude::*;

use crate::converter::{Converter, ConverterKind, RowConvertFn, scalar};
use crate::error::{Error, Result};
use crate::pixel_buffer::{BYTES_PER_PIXEL, PixelBuffer};

/// The reference formula split into contiguous pixel ranges, one per worker.
///
/// Each worker reads the shared input and writes only its own range of the
/// output, so the result is byte-identical to [`ScalarConverter`] for any
/// worker count.
///
/// [`ScalarConverter`]: crate::ScalarConverter
#[derive(Debug)]
pub struct PartitionedConverter {
    workers: usize,
    pool: Option<rayon::ThreadPool>,
    kernel: RowConvertFn,
}

impl PartitionedConverter {
    /// One partition per thread of rayon's global pool.
    pub fn new() -> Self {
        Self {
            workers: rayon::current_num_threads(),
            pool: None,
            kernel: scalar::convert_into,
        }
    }

    /// One partition per thread of a dedicated pool of `workers` threads.
    pub fn with_workers(workers: usize) -> Result<Self> {
        if workers == 0 {
            return Err(Error::InvalidWorkerCount);
        }

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(workers)
            .thread_name(|index| format!("grayscale-worker-{}", index))
            .build()?;
        tracing::debug!(workers, "Built partition worker pool");

        Ok(Self {
            workers,
            pool: Some(pool),
            kernel: scalar::convert_into,
        })
    }

    pub fn workers(&self) -> usize {
        self.workers
    }

    #[cfg(test)]
    pub(crate) fn with_kernel(mut self, kernel: RowConvertFn) -> Self {
        self.kernel = kernel;
        self
    }

    /// Run every partition and collect the ones whose worker panicked.
    fn run_partitions(&self, src: &[u8], dst: &mut [u8]) -> Vec<(Range<usize>, String)> {
        let kernel = self.kernel;
        parallel::par_partitions(src, dst, BYTES_PER_PIXEL, self.workers)
            .filter_map(|(range, src_chunk, dst_chunk)| {
                panic::catch_unwind(AssertUnwindSafe(|| kernel(src_chunk, dst_chunk)))
                    .err()
                    .map(|payload| (range, panic_message(payload.as_ref())))
            })
            .collect()
    }
}

impl Default for PartitionedConverter {
    fn default() -> Self {
        Self::new()
    }
}

impl Converter for PartitionedConverter {
    fn kind(&self) -> ConverterKind {
        ConverterKind::Partitioned
    }

    fn convert(&self, pixels: &PixelBuffer) -> Result<PixelBuffer> {
        let mut output = PixelBuffer::zeroed(pixels.len());
        tracing::debug!(
            pixels = pixels.pixel_count(),
            workers = self.workers,
            pixels_per_partition = parallel::partition_len(pixels.pixel_count(), self.workers),
            "Partitioned conversion"
        );

        let src = pixels.as_bytes();
        let dst = output.as_bytes_mut();
        let failures = match &self.pool {
            Some(pool) => pool.install(|| self.run_partitions(src, dst)),
            None => self.run_partitions(src, dst),
        };

        // The partially written output is dropped with this error.
        if let Some((range, reason)) = failures
            .iter()
            .min_by_key(|(range, _)| range.start)
            .cloned()
        {
            tracing::warn!(
                failed = failures.len(),
                start = range.start,
                end = range.end,
                "Partition worker failed: {}",
                reason
            );
            return Err(Error::PartitionFailed {
                range,
                failed: failures.len(),
                reason,
            });
        }

        Ok(output)
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message.to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "worker panicked".to_string()
    }
}
