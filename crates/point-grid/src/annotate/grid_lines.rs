//! Grid-line pixel geometry.
//!
//! Lines stop short of every crossing: on a vertical line, rows within one
//! pixel of a horizontal grid row (including row 0) are left unpainted, and
//! symmetrically for horizontal lines. This keeps the sampled pixel and its
//! immediate neighbours visible under the overlay.

/// `true` if `v` is on, or one pixel either side of, a multiple of `spacing`.
///
/// `spacing` must be at least 1.
#[inline]
pub fn near_grid_line(v: usize, spacing: usize) -> bool {
    let r = v % spacing;
    r == 0 || r == 1 || r == spacing - 1
}

/// Pixels covered by the grid overlay of a `width` x `height` image.
///
/// Vertical lines are yielded first (left to right, top to bottom), then
/// horizontal lines. Both spacings must be at least 1. Pixels are produced
/// lazily, nothing is buffered.
pub fn grid_line_pixels(
    width: usize,
    height: usize,
    spacing_x: usize,
    spacing_y: usize,
) -> impl Iterator<Item = (usize, usize)> {
    let vertical = (spacing_x..width).step_by(spacing_x).flat_map(move |x| {
        (0..height)
            .filter(move |&y| !near_grid_line(y, spacing_y))
            .map(move |y| (x, y))
    });
    let horizontal = (spacing_y..height).step_by(spacing_y).flat_map(move |y| {
        (0..width)
            .filter(move |&x| !near_grid_line(x, spacing_x))
            .map(move |x| (x, y))
    });
    vertical.chain(horizontal)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_near_grid_line_wraps_below_zero() {
        // spacing 10: rows 9, 10, 11 and 0, 1 are all near a line
        for v in [0, 1, 9, 10, 11, 19, 20, 21] {
            assert!(near_grid_line(v, 10), "{v}");
        }
        for v in [2, 5, 8, 12, 18] {
            assert!(!near_grid_line(v, 10), "{v}");
        }
    }

    #[test]
    fn test_tiny_spacing_suppresses_everything() {
        for v in 0..10 {
            assert!(near_grid_line(v, 1));
            assert!(near_grid_line(v, 2));
        }
        assert_eq!(grid_line_pixels(10, 10, 2, 2).count(), 0);
    }

    #[test]
    fn test_vertical_line_segment_layout() {
        // 20x20, spacing 10 on both axes: one vertical line at x=10 and
        // one horizontal line at y=10.
        let pixels: Vec<_> = grid_line_pixels(20, 20, 10, 10).collect();

        let vertical: Vec<usize> = pixels
            .iter()
            .filter(|&&(x, _)| x == 10)
            .map(|&(_, y)| y)
            .collect();
        assert_eq!(vertical, vec![2, 3, 4, 5, 6, 7, 8, 12, 13, 14, 15, 16, 17, 18]);

        let horizontal: Vec<usize> = pixels
            .iter()
            .filter(|&&(_, y)| y == 10)
            .map(|&(x, _)| x)
            .collect();
        assert_eq!(horizontal, vec![2, 3, 4, 5, 6, 7, 8, 12, 13, 14, 15, 16, 17, 18]);
        assert_eq!(pixels.len(), 28);
    }

    #[test]
    fn test_lines_only_at_interior_multiples() {
        let pixels = grid_line_pixels(30, 24, 10, 8);
        for (x, y) in pixels {
            assert!(x < 30 && y < 24);
            let on_vertical = x % 10 == 0 && x > 0;
            let on_horizontal = y % 8 == 0 && y > 0;
            assert!(on_vertical || on_horizontal, "stray pixel ({x}, {y})");
        }
    }

    #[test]
    fn test_pixels_are_produced_lazily() {
        // 100 megapixel image: taking a prefix must not walk the whole grid
        let first: Vec<_> = grid_line_pixels(10_000, 10_000, 4, 4).take(3).collect();
        assert_eq!(first, vec![(4, 2), (4, 6), (4, 10)]);
    }

    #[test]
    fn test_vertical_lines_before_horizontal() {
        let pixels: Vec<_> = grid_line_pixels(20, 20, 10, 10).collect();
        assert!(pixels[..14].iter().all(|&(x, _)| x == 10));
        assert!(pixels[14..].iter().all(|&(_, y)| y == 10));
    }
}
