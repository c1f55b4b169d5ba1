//! Enumeration of interior grid intersections.

use super::error::{Axis, GridError};
use super::spec::GridSpec;

/// A grid crossing in pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct IntersectionPoint {
    pub x: usize,
    pub y: usize,
}

impl IntersectionPoint {
    #[inline]
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

/// The set of intersections `(k * spacing_x, j * spacing_y)` with `k, j >= 1`
/// lying strictly inside the image.
///
/// The origin and crossings on the far border are never produced. Iteration
/// is x-major: every `y` of the first column, then the next column.
///
/// ```
/// use point_grid::{GridSampler, IntersectionPoint};
///
/// let sampler = GridSampler::new(100, 80, 25, 20).unwrap();
/// assert_eq!(sampler.len(), 9);
/// assert_eq!(sampler.points().next(), Some(IntersectionPoint::new(25, 20)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridSampler {
    width: usize,
    height: usize,
    spacing_x: usize,
    spacing_y: usize,
}

impl GridSampler {
    /// Sampler over a `width` x `height` image.
    ///
    /// # Errors
    ///
    /// [`GridError::ZeroSpacing`] if either spacing is 0.
    pub fn new(
        width: usize,
        height: usize,
        spacing_x: usize,
        spacing_y: usize,
    ) -> Result<Self, GridError> {
        if spacing_x == 0 {
            return Err(GridError::ZeroSpacing { axis: Axis::X });
        }
        if spacing_y == 0 {
            return Err(GridError::ZeroSpacing { axis: Axis::Y });
        }
        Ok(Self {
            width,
            height,
            spacing_x,
            spacing_y,
        })
    }

    pub(crate) fn from_spec(spec: &GridSpec) -> Self {
        Self {
            width: spec.width(),
            height: spec.height(),
            spacing_x: spec.spacing_x(),
            spacing_y: spec.spacing_y(),
        }
    }

    /// Number of grid columns (vertical lines strictly inside the image).
    #[inline]
    pub fn columns(&self) -> usize {
        interior_multiples(self.width, self.spacing_x)
    }

    /// Number of grid rows (horizontal lines strictly inside the image).
    #[inline]
    pub fn rows(&self) -> usize {
        interior_multiples(self.height, self.spacing_y)
    }

    /// Total number of intersections.
    #[inline]
    pub fn len(&self) -> usize {
        self.columns() * self.rows()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// A fresh pass over all intersections. May be called any number of times.
    pub fn points(&self) -> Points {
        Points {
            width: self.width,
            height: self.height,
            spacing_x: self.spacing_x,
            spacing_y: self.spacing_y,
            x: self.spacing_x,
            y: self.spacing_y,
        }
    }
}

impl IntoIterator for GridSampler {
    type Item = IntersectionPoint;
    type IntoIter = Points;

    fn into_iter(self) -> Points {
        self.points()
    }
}

impl IntoIterator for &GridSampler {
    type Item = IntersectionPoint;
    type IntoIter = Points;

    fn into_iter(self) -> Points {
        self.points()
    }
}

/// Positive multiples of `spacing` strictly below `bound`.
#[inline]
fn interior_multiples(bound: usize, spacing: usize) -> usize {
    if bound == 0 {
        0
    } else {
        (bound - 1) / spacing
    }
}

/// Lazy iterator over a [`GridSampler`]'s intersections.
#[derive(Debug, Clone)]
pub struct Points {
    width: usize,
    height: usize,
    spacing_x: usize,
    spacing_y: usize,
    x: usize,
    y: usize,
}

impl Iterator for Points {
    type Item = IntersectionPoint;

    fn next(&mut self) -> Option<IntersectionPoint> {
        // y only reaches the bound when no row fits at all; wrap-around below
        // always resets it to the first row.
        if self.x >= self.width || self.y >= self.height {
            return None;
        }
        let point = IntersectionPoint::new(self.x, self.y);
        self.y += self.spacing_y;
        if self.y >= self.height {
            self.y = self.spacing_y;
            self.x += self.spacing_x;
        }
        Some(point)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.remaining();
        (n, Some(n))
    }
}

impl ExactSizeIterator for Points {}

impl Points {
    fn remaining(&self) -> usize {
        if self.x >= self.width || self.y >= self.height {
            return 0;
        }
        let rows = interior_multiples(self.height, self.spacing_y);
        let cols = interior_multiples(self.width, self.spacing_x);
        let col = self.x / self.spacing_x;
        let row = self.y / self.spacing_y;
        (rows - row + 1) + (cols - col) * rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(w: usize, h: usize, sx: usize, sy: usize) -> Vec<(usize, usize)> {
        GridSampler::new(w, h, sx, sy)
            .unwrap()
            .points()
            .map(|p| (p.x, p.y))
            .collect()
    }

    #[test]
    fn test_nine_interior_points_in_x_major_order() {
        let points = collect(100, 80, 25, 20);
        assert_eq!(
            points,
            vec![
                (25, 20),
                (25, 40),
                (25, 60),
                (50, 20),
                (50, 40),
                (50, 60),
                (75, 20),
                (75, 40),
                (75, 60),
            ]
        );
    }

    #[test]
    fn test_border_multiples_are_excluded() {
        // 100 is a multiple of 25 but lies on the border
        let points = collect(100, 100, 25, 25);
        assert!(points.iter().all(|&(x, y)| x < 100 && y < 100));
        assert!(!points.contains(&(0, 0)));
        assert_eq!(points.len(), 9);
    }

    #[test]
    fn test_len_matches_enumeration() {
        for &(w, h, sx, sy) in &[
            (100, 80, 25, 20),
            (101, 81, 25, 20),
            (7, 5, 1, 1),
            (10, 10, 3, 7),
            (3, 3, 5, 1),
            (0, 10, 2, 2),
        ] {
            let sampler = GridSampler::new(w, h, sx, sy).unwrap();
            assert_eq!(sampler.points().count(), sampler.len(), "{w}x{h} {sx}x{sy}");
        }
    }

    #[test]
    fn test_spacing_at_least_dimension_yields_nothing() {
        assert!(collect(10, 10, 10, 2).is_empty());
        assert!(collect(10, 10, 2, 12).is_empty());
        assert!(GridSampler::new(10, 10, 2, 12).unwrap().is_empty());
    }

    #[test]
    fn test_zero_spacing_rejected() {
        assert_eq!(
            GridSampler::new(10, 10, 0, 1).unwrap_err(),
            GridError::ZeroSpacing { axis: Axis::X }
        );
        assert_eq!(
            GridSampler::new(10, 10, 1, 0).unwrap_err(),
            GridError::ZeroSpacing { axis: Axis::Y }
        );
    }

    #[test]
    fn test_points_restartable_and_exact_size() {
        let sampler = GridSampler::new(10, 9, 3, 4).unwrap();
        let first: Vec<_> = sampler.points().collect();
        let second: Vec<_> = (&sampler).into_iter().collect();
        assert_eq!(first, second);

        let mut it = sampler.points();
        let mut expected = sampler.len();
        assert_eq!(it.len(), expected);
        while it.next().is_some() {
            expected -= 1;
            assert_eq!(it.len(), expected);
        }
    }

    #[test]
    fn test_sampler_from_spec() {
        let spec = GridSpec::new(100, 80, 4, 4).unwrap();
        assert_eq!(spec.sampler(), GridSampler::new(100, 80, 25, 20).unwrap());
    }
}
