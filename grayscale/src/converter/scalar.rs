use crate::converter::{Converter, ConverterKind};
use crate::error::Result;
use crate::luma::luma;
use crate::pixel_buffer::{Argb, PixelBuffer};

/// Per-pixel reference conversion.
///
/// `Y = trunc(0.2126 R + 0.7152 G + 0.0722 B)` in f64. All other converters
/// are measured against this one.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScalarConverter;

impl ScalarConverter {
    pub fn new() -> Self {
        Self
    }
}

impl Converter for ScalarConverter {
    fn kind(&self) -> ConverterKind {
        ConverterKind::Scalar
    }

    fn convert(&self, pixels: &PixelBuffer) -> Result<PixelBuffer> {
        let mut output = PixelBuffer::zeroed(pixels.len());
        convert_into(pixels.as_bytes(), output.as_bytes_mut());
        Ok(output)
    }
}

/// Convert whole ARGB records from `src` into `dst`.
///
/// Also serves as the tail of the vector paths and the per-partition kernel.
pub(crate) fn convert_into(src: &[u8], dst: &mut [u8]) {
    debug_assert_eq!(src.len(), dst.len());

    let src: &[Argb] = bytemuck::cast_slice(src);
    let dst: &mut [Argb] = bytemuck::cast_slice_mut(dst);
    for (from, to) in src.iter().zip(dst.iter_mut()) {
        let y = luma(from.r, from.g, from.b);
        *to = Argb::new(from.a, y, y, y);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_documented_example() {
        let input = PixelBuffer::from_pixels([Argb::new(255, 0, 0, 255)]);
        let output = ScalarConverter.convert(&input).unwrap();
        assert_eq!(output.as_bytes(), &[255, 18, 18, 18]);
    }

    #[test]
    fn test_primaries() {
        let input = PixelBuffer::from_pixels([
            Argb::new(10, 255, 0, 0),
            Argb::new(20, 0, 255, 0),
            Argb::new(30, 0, 0, 0),
        ]);
        let output = ScalarConverter.convert(&input).unwrap();
        // 255 * 0.2126 = 54.213, 255 * 0.7152 = 182.376
        assert_eq!(
            output.pixels(),
            &[
                Argb::new(10, 54, 54, 54),
                Argb::new(20, 182, 182, 182),
                Argb::new(30, 0, 0, 0)
            ]
        );
    }

    #[test]
    fn test_input_untouched() {
        let input = PixelBuffer::from_bytes(vec![1, 2, 3, 4, 5, 6, 7, 8]).unwrap();
        let before = input.clone();
        let _ = ScalarConverter::new().convert(&input).unwrap();
        assert_eq!(input, before);
    }

    #[test]
    fn test_convert_into_sub_slices() {
        let src = [7u8, 100, 100, 100, 9, 0, 0, 255];
        let mut dst = [0u8; 8];
        convert_into(&src[4..], &mut dst[4..]);
        assert_eq!(dst, [0, 0, 0, 0, 9, 18, 18, 18]);
    }
}
