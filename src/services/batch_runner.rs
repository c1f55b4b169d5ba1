use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Instant;

use point_grid::{Aggregator, RunSummary};

use crate::error::ImageError;
use crate::services::{CsvReport, PointCounter};

/// An image that was skipped, and why.
#[derive(Debug)]
pub struct SkippedImage {
    pub path: PathBuf,
    pub error: ImageError,
}

/// What a batch produced beyond the CSV written along the way.
#[derive(Debug)]
pub struct BatchOutcome {
    pub summary: RunSummary,
    pub skipped: Vec<SkippedImage>,
}

/// Runs a [`PointCounter`] over a list of images in order, streaming the
/// CSV report and accumulating run totals.
pub struct BatchRunner {
    counter: PointCounter,
    started: Instant,
}

impl BatchRunner {
    /// The run clock starts here.
    pub fn new(counter: PointCounter) -> Self {
        Self {
            counter,
            started: Instant::now(),
        }
    }

    /// Process `images` in order.
    ///
    /// A failing image is recorded in [`BatchOutcome::skipped`] and left out
    /// of the totals; the batch carries on. Only a failure to write the
    /// report itself aborts the run.
    pub fn run<W: Write>(
        &self,
        images: &[PathBuf],
        report: &mut CsvReport<W>,
    ) -> io::Result<BatchOutcome> {
        report.write_header()?;

        let mut totals = Aggregator::new();
        let mut skipped = Vec::new();

        for path in images {
            match self.counter.count_file(path) {
                Ok(result) => {
                    report.write_row(&result)?;
                    totals.accumulate(result);
                }
                Err(error) => {
                    tracing::debug!(image = %path.display(), %error, "Skipping image");
                    skipped.push(SkippedImage {
                        path: path.clone(),
                        error,
                    });
                }
            }
        }

        let summary = totals.finalize(self.started.elapsed());
        report.write_summary(&summary)?;

        match summary.ratio() {
            Some(ratio) => tracing::info!(
                images = summary.image_count,
                skipped = skipped.len(),
                ratio,
                "Run complete"
            ),
            None => tracing::info!(
                images = summary.image_count,
                skipped = skipped.len(),
                ratio = "undefined",
                "Run complete"
            ),
        }

        Ok(BatchOutcome { summary, skipped })
    }
}
