use crate::color::Rgb;

/// Read access to per-pixel intensity.
///
/// Coordinates are `(x, y)` with `x` in `0..width()` and `y` in
/// `0..height()`; callers only ask for in-bounds pixels.
pub trait IntensitySource {
    fn width(&self) -> usize;
    fn height(&self) -> usize;

    /// 8-bit intensity at `(x, y)`.
    fn intensity(&self, x: usize, y: usize) -> u8;
}

/// Write access for overlay drawing.
pub trait ColorCanvas {
    fn width(&self) -> usize;
    fn height(&self) -> usize;

    /// Paint the pixel at `(x, y)`.
    fn set_color(&mut self, x: usize, y: usize, color: Rgb);

    /// Paint `(x, y)` given signed coordinates, ignoring anything off-canvas.
    ///
    /// Returns `true` if a pixel was written.
    fn set_color_clipped(&mut self, x: i64, y: i64, color: Rgb) -> bool {
        if x < 0 || y < 0 {
            return false;
        }
        let (x, y) = (x as usize, y as usize);
        if x >= self.width() || y >= self.height() {
            return false;
        }
        self.set_color(x, y, color);
        true
    }
}

impl<T: IntensitySource + ?Sized> IntensitySource for &T {
    #[inline]
    fn width(&self) -> usize {
        (**self).width()
    }
    #[inline]
    fn height(&self) -> usize {
        (**self).height()
    }
    #[inline]
    fn intensity(&self, x: usize, y: usize) -> u8 {
        (**self).intensity(x, y)
    }
}
