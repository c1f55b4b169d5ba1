//! Threshold classification of sampled intersections.

use crate::grid::IntersectionPoint;
use crate::image::IntensitySource;

/// An intersection together with its sampled intensity and label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassifiedPoint {
    pub point: IntersectionPoint,
    pub intensity: u8,
    /// `intensity >= threshold`
    pub positive: bool,
}

/// Labels intersections positive when their intensity meets the threshold.
///
/// The comparison is inclusive: a pixel exactly at the threshold is positive.
///
/// ```
/// use point_grid::{GrayImage, GridSpec, ThresholdClassifier};
///
/// let image = GrayImage::filled(100, 80, 128);
/// let spec = GridSpec::new(100, 80, 4, 4).unwrap();
/// let result = ThresholdClassifier::new(128).classify(spec.sampler(), &image);
///
/// assert_eq!(result.total_count(), 9);
/// assert_eq!(result.positive_count(), 9);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThresholdClassifier {
    threshold: u8,
}

impl ThresholdClassifier {
    pub fn new(threshold: u8) -> Self {
        Self { threshold }
    }

    #[inline]
    pub fn threshold(&self) -> u8 {
        self.threshold
    }

    #[inline]
    pub fn is_positive(&self, intensity: u8) -> bool {
        intensity >= self.threshold
    }

    /// Sample `source` at every point and label each one.
    ///
    /// Points must lie inside `source`.
    pub fn classify<P, S>(&self, points: P, source: &S) -> Classification
    where
        P: IntoIterator<Item = IntersectionPoint>,
        S: IntensitySource + ?Sized,
    {
        let points = points.into_iter();
        let mut classified = Vec::with_capacity(points.size_hint().0);
        let mut positive_count = 0;

        for point in points {
            let intensity = source.intensity(point.x, point.y);
            let positive = self.is_positive(intensity);
            if positive {
                positive_count += 1;
            }
            classified.push(ClassifiedPoint {
                point,
                intensity,
                positive,
            });
        }

        Classification {
            points: classified,
            positive_count,
        }
    }
}

/// Result of classifying one image's intersections.
///
/// Only the positive count is stored; the total is the number of points and
/// the negative count is derived from both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    points: Vec<ClassifiedPoint>,
    positive_count: usize,
}

impl Classification {
    /// All points in sampling order.
    #[inline]
    pub fn points(&self) -> &[ClassifiedPoint] {
        &self.points
    }

    #[inline]
    pub fn positive_count(&self) -> usize {
        self.positive_count
    }

    #[inline]
    pub fn total_count(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn negative_count(&self) -> usize {
        self.total_count() - self.positive_count
    }

    /// Coordinates of the positive points, in sampling order.
    pub fn positives(&self) -> impl Iterator<Item = IntersectionPoint> + '_ {
        self.points.iter().filter(|c| c.positive).map(|c| c.point)
    }

    /// Coordinates of the negative points, in sampling order.
    pub fn negatives(&self) -> impl Iterator<Item = IntersectionPoint> + '_ {
        self.points.iter().filter(|c| !c.positive).map(|c| c.point)
    }
}
