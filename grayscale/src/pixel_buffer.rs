//! Interleaved ARGB8888 pixel storage.

use bytemuck::{Pod, Zeroable};

use crate::error::{Error, Result};

pub const BYTES_PER_PIXEL: usize = 4;

/// One interleaved pixel record, alpha first.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Pod, Zeroable)]
pub struct Argb {
    pub a: u8,
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Argb {
    pub const fn new(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self { a, r, g, b }
    }
}

/// Flat `[A, R, G, B, A, R, G, B, ...]` byte buffer.
///
/// The length is always a whole number of pixels. Converters never mutate an
/// input buffer; each returns a freshly allocated one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PixelBuffer {
    bytes: Vec<u8>,
}

impl PixelBuffer {
    /// Wrap raw ARGB bytes.
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self> {
        if bytes.len() % BYTES_PER_PIXEL != 0 {
            return Err(Error::MalformedInput { len: bytes.len() });
        }
        Ok(Self { bytes })
    }

    /// Wrap raw ARGB bytes of a `width` x `height` image.
    pub fn with_dimensions(width: usize, height: usize, bytes: Vec<u8>) -> Result<Self> {
        let expected = width
            .checked_mul(height)
            .and_then(|pixels| pixels.checked_mul(BYTES_PER_PIXEL));
        if expected != Some(bytes.len()) {
            return Err(Error::DimensionMismatch {
                width,
                height,
                len: bytes.len(),
            });
        }
        Ok(Self { bytes })
    }

    pub fn from_pixels(pixels: impl IntoIterator<Item = Argb>) -> Self {
        let pixels: Vec<Argb> = pixels.into_iter().collect();
        Self {
            bytes: bytemuck::cast_slice(&pixels).to_vec(),
        }
    }

    /// Zero-filled buffer, used as conversion output.
    pub(crate) fn zeroed(len: usize) -> Self {
        debug_assert_eq!(len % BYTES_PER_PIXEL, 0);
        Self {
            bytes: vec![0; len],
        }
    }

    /// Length in bytes.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn pixel_count(&self) -> usize {
        self.bytes.len() / BYTES_PER_PIXEL
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub(crate) fn as_bytes_mut(&mut self) -> &mut [u8] {
        &mut self.bytes
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    /// View the buffer as pixel records without copying.
    pub fn pixels(&self) -> &[Argb] {
        bytemuck::cast_slice(&self.bytes)
    }
}

impl TryFrom<Vec<u8>> for PixelBuffer {
    type Error = Error;

    fn try_from(bytes: Vec<u8>) -> Result<Self> {
        Self::from_bytes(bytes)
    }
}

impl From<PixelBuffer> for Vec<u8> {
    fn from(buffer: PixelBuffer) -> Self {
        buffer.into_bytes()
    }
}
