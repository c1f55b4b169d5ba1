//! Per-image results and run-wide totals.

use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::classify::Classification;
use crate::grid::GridSpec;

/// Error returned when raw counts cannot describe an image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CountError {
    /// More positive points than sampled points
    PositiveExceedsTotal { positive: usize, total: usize },
}

impl fmt::Display for CountError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CountError::PositiveExceedsTotal { positive, total } => write!(
                f,
                "positive count ({}) exceeds total ({})",
                positive, total
            ),
        }
    }
}

impl std::error::Error for CountError {}

/// Counts for a single image.
#[derive(Debug, PartialEq, Eq)]
pub struct ImageResult {
    image_path: PathBuf,
    requested_x: u32,
    requested_y: u32,
    spacing_x: usize,
    spacing_y: usize,
    positive_count: usize,
    total_count: usize,
}

impl ImageResult {
    /// Combine an image's grid and its classification.
    pub fn new(
        image_path: impl Into<PathBuf>,
        spec: &GridSpec,
        classification: &Classification,
    ) -> Self {
        Self {
            image_path: image_path.into(),
            requested_x: spec.requested_x(),
            requested_y: spec.requested_y(),
            spacing_x: spec.spacing_x(),
            spacing_y: spec.spacing_y(),
            positive_count: classification.positive_count(),
            total_count: classification.total_count(),
        }
    }

    /// Build a result from raw counts.
    ///
    /// # Errors
    ///
    /// [`CountError::PositiveExceedsTotal`] if `positive_count > total_count`.
    pub fn from_counts(
        image_path: impl Into<PathBuf>,
        requested: (u32, u32),
        spacing: (usize, usize),
        positive_count: usize,
        total_count: usize,
    ) -> Result<Self, CountError> {
        if positive_count > total_count {
            return Err(CountError::PositiveExceedsTotal {
                positive: positive_count,
                total: total_count,
            });
        }
        Ok(Self {
            image_path: image_path.into(),
            requested_x: requested.0,
            requested_y: requested.1,
            spacing_x: spacing.0,
            spacing_y: spacing.1,
            positive_count,
            total_count,
        })
    }

    #[inline]
    pub fn image_path(&self) -> &Path {
        &self.image_path
    }

    #[inline]
    pub fn requested(&self) -> (u32, u32) {
        (self.requested_x, self.requested_y)
    }

    #[inline]
    pub fn spacing(&self) -> (usize, usize) {
        (self.spacing_x, self.spacing_y)
    }

    #[inline]
    pub fn positive_count(&self) -> usize {
        self.positive_count
    }

    #[inline]
    pub fn total_count(&self) -> usize {
        self.total_count
    }

    #[inline]
    pub fn negative_count(&self) -> usize {
        self.total_count - self.positive_count
    }
}

/// Running totals over a batch of images.
///
/// Accumulation is a plain sum, so totals do not depend on the order in which
/// results arrive. [`accumulate`](Aggregator::accumulate) takes the result by
/// value so one result cannot be counted twice.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Aggregator {
    grand_positive: u64,
    grand_total: u64,
    image_count: usize,
}

impl Aggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one image's counts to the totals.
    pub fn accumulate(&mut self, result: ImageResult) {
        self.grand_positive += result.positive_count as u64;
        self.grand_total += result.total_count as u64;
        self.image_count += 1;
    }

    /// Fold another aggregator's totals into this one.
    pub fn merge(&mut self, other: Aggregator) {
        self.grand_positive += other.grand_positive;
        self.grand_total += other.grand_total;
        self.image_count += other.image_count;
    }

    #[inline]
    pub fn grand_positive(&self) -> u64 {
        self.grand_positive
    }

    #[inline]
    pub fn grand_total(&self) -> u64 {
        self.grand_total
    }

    #[inline]
    pub fn image_count(&self) -> usize {
        self.image_count
    }

    /// Close the run, recording how long it took.
    pub fn finalize(self, elapsed: Duration) -> RunSummary {
        RunSummary {
            elapsed_seconds: elapsed.as_secs_f64(),
            grand_positive: self.grand_positive,
            grand_total: self.grand_total,
            image_count: self.image_count,
        }
    }
}

/// Totals for a completed run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunSummary {
    pub elapsed_seconds: f64,
    pub grand_positive: u64,
    pub grand_total: u64,
    pub image_count: usize,
}

impl RunSummary {
    /// Fraction of sampled points that were positive.
    ///
    /// `None` when no points were sampled at all.
    ///
    /// ```
    /// use point_grid::{Aggregator, ImageResult};
    /// use std::time::Duration;
    ///
    /// let mut agg = Aggregator::new();
    /// agg.accumulate(ImageResult::from_counts("a.png", (4, 4), (25, 20), 3, 9).unwrap());
    /// agg.accumulate(ImageResult::from_counts("b.png", (4, 4), (25, 25), 4, 16).unwrap());
    /// let summary = agg.finalize(Duration::ZERO);
    /// assert!((summary.ratio().unwrap() - 0.28).abs() < 1e-12);
    /// ```
    pub fn ratio(&self) -> Option<f64> {
        if self.grand_total == 0 {
            None
        } else {
            Some(self.grand_positive as f64 / self.grand_total as f64)
        }
    }

    #[inline]
    pub fn grand_negative(&self) -> u64 {
        self.grand_total - self.grand_positive
    }
}
