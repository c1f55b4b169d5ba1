//! point-grid: systematic point sampling for stereology
//!
//! This library overlays a regular grid on an 8-bit greyscale image, samples
//! the pixel at every interior grid crossing, labels each crossing positive
//! or negative against an intensity threshold, and produces the geometry for
//! an annotated overlay (grid lines plus ring markers on positive points).
//!
//! # Quick Start
//!
//! ```
//! use point_grid::{
//!     Aggregator, AnnotationRequest, Annotator, GrayImage, GridSpec, ImageResult, RgbImage,
//!     ThresholdClassifier,
//! };
//! use std::time::Duration;
//!
//! // Bright disc in the middle of a dark 100x80 image
//! let image = GrayImage::from_fn(100, 80, |x, y| {
//!     let (dx, dy) = (x as i32 - 50, y as i32 - 40);
//!     if dx * dx + dy * dy < 30 * 30 { 220 } else { 15 }
//! });
//!
//! let spec = GridSpec::new(image.width(), image.height(), 4, 4).unwrap();
//! let classification = ThresholdClassifier::new(128).classify(spec.sampler(), &image);
//! assert_eq!(classification.total_count(), 9);
//!
//! let mut overlay = RgbImage::from_gray(&image);
//! let request = AnnotationRequest::for_grid(&spec, classification.positives(), 5.0);
//! Annotator::default().annotate(&mut overlay, &request);
//!
//! let mut totals = Aggregator::new();
//! totals.accumulate(ImageResult::new("disc.png", &spec, &classification));
//! let summary = totals.finalize(Duration::ZERO);
//! assert_eq!(summary.grand_total, 9);
//! ```
//!
//! # Pipeline
//!
//! ```text
//! GrayImage + (gridx, gridy)
//!     |
//!     v
//! GridSpec            spacing = floor(dimension / count), rejected if 0
//!     |
//!     v
//! GridSampler         (k * sx, j * sy), k, j >= 1, strictly inside the image
//!     |
//!     v
//! ThresholdClassifier intensity >= threshold -> positive
//!     |
//!     +---> Aggregator      grand positive / grand total across images
//!     |
//!     +---> Annotator       grid lines + rings on a duplicated color buffer
//! ```
//!
//! # Sampling Geometry
//!
//! With `W = 100`, `gridx = 4` the spacing is 25 and the sampled columns are
//! `x = 25, 50, 75`. The origin and the far border (`x = 100`) are never
//! sampled, so a grid of `n` lines over an evenly divisible dimension yields
//! `n - 1` interior columns.
//!
//! A requested count larger than the dimension floors the spacing to zero.
//! [`GridSpec::new`] rejects that case with
//! [`GridError::SamplingDegeneracy`] instead of sampling nothing or looping.
//!
//! # Overlay Geometry
//!
//! Grid lines leave a three-pixel gap around every crossing so the sampled
//! pixel stays visible. Markers are rings sampled at a fixed angular step of
//! [`MARKER_ANGLE_STEP`] radians, which gives the same number of dots for
//! every radius.

pub mod annotate;
pub mod classify;
pub mod color;
pub mod grid;
pub mod image;
pub mod summary;


pub use annotate::{
    AnnotationRequest, AnnotationStyle, Annotator, DEFAULT_MARKER_RADIUS, MARKER_ANGLE_STEP,
};
pub use classify::{ClassifiedPoint, Classification, ThresholdClassifier};
pub use color::{ParseColorError, Rgb};
pub use grid::{compute_spacing, Axis, GridError, GridSampler, GridSpec, IntersectionPoint};
pub use image::{BufferError, ColorCanvas, GrayImage, IntensitySource, RgbImage, RgbaImage};
pub use summary::{Aggregator, CountError, ImageResult, RunSummary};
