//! Error types for grayscale conversion.

use std::ops::Range;

use thiserror::Error;

use crate::converter::ConverterKind;
use crate::pixel_buffer::BYTES_PER_PIXEL;

/// Errors that can occur while building pixel buffers, selecting converters or
/// converting.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Pixel buffer length {len} is not a multiple of {BYTES_PER_PIXEL}")]
    MalformedInput { len: usize },

    #[error("Pixel buffer length {len} does not match {width}x{height} ARGB pixels")]
    DimensionMismatch {
        width: usize,
        height: usize,
        len: usize,
    },

    #[error("{converter} converter requires {feature}, which this CPU does not support")]
    CapabilityUnsupported {
        converter: ConverterKind,
        feature: &'static str,
    },

    #[error(
        "{failed} partition worker(s) failed, first at pixels {}..{}: {reason}",
        range.start,
        range.end
    )]
    PartitionFailed {
        range: Range<usize>,
        failed: usize,
        reason: String,
    },

    #[error("Worker count must be at least 1")]
    InvalidWorkerCount,

    #[error("Failed to build worker pool: {0}")]
    WorkerPool(#[from] rayon::ThreadPoolBuildError),

    #[error("Invalid value '{value}' for {key}")]
    InvalidConfig { key: &'static str, value: String },
}

pub type Result<T> = std::result::Result<T, Error>;
