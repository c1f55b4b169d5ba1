//! Color buffers that overlays are painted onto.
//!
//! Both buffers are created by duplicating a [`GrayImage`], so the greyscale
//! source used for classification is never touched by annotation.

use super::error::BufferError;
use super::gray::GrayImage;
use super::traits::ColorCanvas;
use crate::color::Rgb;

/// Owned 8-bit RGB image, `[R, G, B, R, G, B, ...]` row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RgbImage {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl RgbImage {
    pub fn new(width: usize, height: usize, data: Vec<u8>) -> Result<Self, BufferError> {
        let expected = width * height * 3;
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

    /// Duplicate a greyscale image into a new RGB buffer (R = G = B = luma).
    pub fn from_gray(gray: &GrayImage) -> Self {
        let mut data = Vec::with_capacity(gray.as_bytes().len() * 3);
        for &v in gray.as_bytes() {
            data.extend_from_slice(&[v, v, v]);
        }
        Self {
            width: gray.width(),
            height: gray.height(),
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

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    #[inline]
    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }

    /// Color at `(x, y)`. Panics if out of bounds.
    #[inline]
    pub fn pixel(&self, x: usize, y: usize) -> Rgb {
        let i = (y * self.width + x) * 3;
        Rgb([self.data[i], self.data[i + 1], self.data[i + 2]])
    }
}

impl ColorCanvas for RgbImage {
    #[inline]
    fn width(&self) -> usize {
        self.width
    }
    #[inline]
    fn height(&self) -> usize {
        self.height
    }
    #[inline]
    fn set_color(&mut self, x: usize, y: usize, color: Rgb) {
        let i = (y * self.width + x) * 3;
        self.data[i..i + 3].copy_from_slice(&color.0);
    }
}

/// Owned 8-bit RGBA image, `[R, G, B, A, ...]` row-major.
///
/// Painted pixels are always fully opaque.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RgbaImage {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl RgbaImage {
    /// Duplicate a greyscale image into a new opaque RGBA buffer.
    pub fn from_gray(gray: &GrayImage) -> Self {
        let mut data = Vec::with_capacity(gray.as_bytes().len() * 4);
        for &v in gray.as_bytes() {
            data.extend_from_slice(&[v, v, v, 255]);
        }
        Self {
            width: gray.width(),
            height: gray.height(),
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

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    #[inline]
    pub fn pixel(&self, x: usize, y: usize) -> [u8; 4] {
        let i = (y * self.width + x) * 4;
        [
            self.data[i],
            self.data[i + 1],
            self.data[i + 2],
            self.data[i + 3],
        ]
    }
}

impl ColorCanvas for RgbaImage {
    #[inline]
    fn width(&self) -> usize {
        self.width
    }
    #[inline]
    fn height(&self) -> usize {
        self.height
    }
    #[inline]
    fn set_color(&mut self, x: usize, y: usize, color: Rgb) {
        let i = (y * self.width + x) * 4;
        let [r, g, b] = color.0;
        self.data[i..i + 4].copy_from_slice(&[r, g, b, 255]);
    }
}
