//! Overlay drawing: grid lines plus ring markers at positive intersections.
//!
//! Geometry lives in [`grid_line_pixels`] and [`marker_pixels`]; the
//! [`Annotator`] paints them onto any [`ColorCanvas`]. Annotate a duplicate
//! of the source (e.g. [`RgbImage::from_gray`](crate::RgbImage::from_gray)),
//! never the buffer that was classified.

mod grid_lines;
mod marker;

pub use grid_lines::{grid_line_pixels, near_grid_line};
pub use marker::{marker_pixels, MARKER_ANGLE_STEP};

use crate::color::Rgb;
use crate::grid::{Axis, GridError, GridSpec, IntersectionPoint};
use crate::image::ColorCanvas;

/// Default marker radius in pixels.
pub const DEFAULT_MARKER_RADIUS: f64 = 5.0;

/// Colors used for the overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnnotationStyle {
    pub grid_color: Rgb,
    pub marker_color: Rgb,
}

impl Default for AnnotationStyle {
    fn default() -> Self {
        Self {
            grid_color: Rgb::RED,
            marker_color: Rgb::GREEN,
        }
    }
}

/// Everything needed to annotate one image.
#[derive(Debug, Clone, PartialEq)]
pub struct AnnotationRequest {
    spacing_x: usize,
    spacing_y: usize,
    positive_points: Vec<IntersectionPoint>,
    marker_radius: f64,
}

impl AnnotationRequest {
    /// # Errors
    ///
    /// [`GridError::ZeroSpacing`] if either spacing is 0.
    pub fn new(
        spacing_x: usize,
        spacing_y: usize,
        positive_points: Vec<IntersectionPoint>,
        marker_radius: f64,
    ) -> Result<Self, GridError> {
        if spacing_x == 0 {
            return Err(GridError::ZeroSpacing { axis: Axis::X });
        }
        if spacing_y == 0 {
            return Err(GridError::ZeroSpacing { axis: Axis::Y });
        }
        Ok(Self {
            spacing_x,
            spacing_y,
            positive_points,
            marker_radius,
        })
    }

    /// Request for a validated grid; cannot fail.
    pub fn for_grid(
        spec: &GridSpec,
        positive_points: impl IntoIterator<Item = IntersectionPoint>,
        marker_radius: f64,
    ) -> Self {
        Self {
            spacing_x: spec.spacing_x(),
            spacing_y: spec.spacing_y(),
            positive_points: positive_points.into_iter().collect(),
            marker_radius,
        }
    }

    #[inline]
    pub fn spacing(&self) -> (usize, usize) {
        (self.spacing_x, self.spacing_y)
    }

    #[inline]
    pub fn positive_points(&self) -> &[IntersectionPoint] {
        &self.positive_points
    }

    #[inline]
    pub fn marker_radius(&self) -> f64 {
        self.marker_radius
    }
}

/// Paints grid and marker overlays.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Annotator {
    style: AnnotationStyle,
}

impl Annotator {
    pub fn new(style: AnnotationStyle) -> Self {
        Self { style }
    }

    #[inline]
    pub fn style(&self) -> &AnnotationStyle {
        &self.style
    }

    /// Draw the grid, then a marker around every positive point.
    ///
    /// Marker pixels falling outside the canvas are skipped.
    pub fn annotate<C: ColorCanvas + ?Sized>(&self, canvas: &mut C, request: &AnnotationRequest) {
        self.draw_grid(canvas, request.spacing_x, request.spacing_y);
        for point in &request.positive_points {
            self.draw_marker(canvas, *point, request.marker_radius);
        }
    }

    fn draw_grid<C: ColorCanvas + ?Sized>(&self, canvas: &mut C, spacing_x: usize, spacing_y: usize) {
        let (width, height) = (canvas.width(), canvas.height());
        for (x, y) in grid_line_pixels(width, height, spacing_x, spacing_y) {
            canvas.set_color(x, y, self.style.grid_color);
        }
    }

    fn draw_marker<C: ColorCanvas + ?Sized>(
        &self,
        canvas: &mut C,
        center: IntersectionPoint,
        radius: f64,
    ) {
        for (x, y) in marker_pixels(center.x, center.y, radius) {
            canvas.set_color_clipped(x, y, self.style.marker_color);
        }
    }
}
