//! ARGB8888 to luminance grayscale conversion.
//!
//! Each pixel `(A, R, G, B)` becomes `(A, Y, Y, Y)` with
//! `Y = 0.2126 R + 0.7152 G + 0.0722 B`. Four interchangeable converters
//! trade portability for speed; see [`ConverterKind`].
//!
//! ```no_run
//! use grayscale::prelude::*;
//!
//! let input = PixelBuffer::from_bytes(vec![255, 0, 0, 255])?;
//! let output = convert(&input, &ConvertConfig::default())?;
//! assert_eq!(output.pixels()[0].a, 255);
//! # Ok::<(), grayscale::Error>(())
//! ```

mod config;
mod converter;
mod error;
mod luma;
mod pixel_buffer;
mod selection;

pub mod prelude;

pub use prelude::*;
