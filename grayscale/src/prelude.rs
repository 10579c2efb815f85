// Pixel storage
pub use crate::pixel_buffer::{Argb, BYTES_PER_PIXEL, PixelBuffer};

// Error handling
pub use crate::error::{Error, Result};

// Luminance
pub use crate::luma::{LUMA_B, LUMA_G, LUMA_R, luma};

// Converters
pub use crate::converter::{
    BatchVectorConverter, Converter, ConverterKind, LaneDotConverter, PartitionedConverter,
    ScalarConverter,
};

// Configuration and selection
pub use crate::config::{CONVERTER_ENV, ConvertConfig, WORKERS_ENV};
pub use crate::selection::{convert, select_converter};
