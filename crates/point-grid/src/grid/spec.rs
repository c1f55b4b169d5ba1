//! Grid spacing derived from a requested line count.

use super::error::{Axis, GridError};
use super::sampler::GridSampler;

/// Pixel spacing for `requested` grid lines across `dimension` pixels.
///
/// Computed as `floor(dimension / requested)` over real numbers. The result
/// is 0 whenever `requested > dimension`; callers must not sample with such
/// a spacing. [`GridSpec::new`] performs that check.
///
/// ```
/// use point_grid::compute_spacing;
/// assert_eq!(compute_spacing(100, 4), 25);
/// assert_eq!(compute_spacing(101, 4), 25);
/// assert_eq!(compute_spacing(10, 20), 0);
/// ```
pub fn compute_spacing(dimension: usize, requested: u32) -> usize {
    if requested == 0 {
        return 0;
    }
    (dimension as f64 / requested as f64).floor() as usize
}

/// Grid geometry for one image.
///
/// Built once per image since dimensions may differ between images.
/// Spacings are guaranteed to be at least 1 pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridSpec {
    width: usize,
    height: usize,
    requested_x: u32,
    requested_y: u32,
    spacing_x: usize,
    spacing_y: usize,
}

impl GridSpec {
    /// Derive the grid for a `width` x `height` image with `requested_x`
    /// vertical and `requested_y` horizontal lines.
    ///
    /// # Errors
    ///
    /// - [`GridError::ZeroGridCount`] if either count is 0
    /// - [`GridError::SamplingDegeneracy`] if a count exceeds the matching
    ///   image dimension
    pub fn new(
        width: usize,
        height: usize,
        requested_x: u32,
        requested_y: u32,
    ) -> Result<Self, GridError> {
        let spacing_x = axis_spacing(Axis::X, width, requested_x)?;
        let spacing_y = axis_spacing(Axis::Y, height, requested_y)?;
        Ok(Self {
            width,
            height,
            requested_x,
            requested_y,
            spacing_x,
            spacing_y,
        })
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
    pub fn requested_x(&self) -> u32 {
        self.requested_x
    }

    #[inline]
    pub fn requested_y(&self) -> u32 {
        self.requested_y
    }

    #[inline]
    pub fn spacing_x(&self) -> usize {
        self.spacing_x
    }

    #[inline]
    pub fn spacing_y(&self) -> usize {
        self.spacing_y
    }

    /// Sampler over this grid's interior intersections.
    pub fn sampler(&self) -> GridSampler {
        GridSampler::from_spec(self)
    }
}

fn axis_spacing(axis: Axis, dimension: usize, requested: u32) -> Result<usize, GridError> {
    if requested == 0 {
        return Err(GridError::ZeroGridCount { axis });
    }
    match compute_spacing(dimension, requested) {
        0 => Err(GridError::SamplingDegeneracy {
            axis,
            dimension,
            requested,
        }),
        spacing => Ok(spacing),
    }
}
