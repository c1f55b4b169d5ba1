//! Owned 8-bit greyscale buffer.

use super::error::BufferError;
use super::traits::IntensitySource;

/// Owned 8-bit greyscale image, one byte per pixel, row-major.
///
/// # Example
///
/// ```
/// use point_grid::{GrayImage, IntensitySource};
///
/// let img = GrayImage::from_fn(4, 3, |x, y| (x + 10 * y) as u8);
/// assert_eq!(img.intensity(3, 2), 23);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrayImage {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl GrayImage {
    /// Wrap raw luma bytes. Fails if `data.len() != width * height`.
    pub fn new(width: usize, height: usize, data: Vec<u8>) -> Result<Self, BufferError> {
        let expected = width * height;
        if data.len() != expected {
            return Err(BufferError::LengthMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Image of the given size filled with one value.
    pub fn filled(width: usize, height: usize, value: u8) -> Self {
        Self {
            width,
            height,
            data: vec![value; width * height],
        }
    }

    /// Build an image by evaluating `f(x, y)` for every pixel.
    pub fn from_fn(width: usize, height: usize, mut f: impl FnMut(usize, usize) -> u8) -> Self {
        let mut data = Vec::with_capacity(width * height);
        for y in 0..height {
            for x in 0..width {
                data.push(f(x, y));
            }
        }
        Self {
            width,
            height,
            data,
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Raw luma bytes, row-major.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Set a single pixel. Panics if out of bounds.
    #[inline]
    pub fn put(&mut self, x: usize, y: usize, value: u8) {
        self.data[y * self.width + x] = value;
    }
}

impl IntensitySource for GrayImage {
    #[inline]
    fn width(&self) -> usize {
        self.width
    }
    #[inline]
    fn height(&self) -> usize {
        self.height
    }
    #[inline]
    fn intensity(&self, x: usize, y: usize) -> u8 {
        self.data[y * self.width + x]
    }
}
