//! CSV report written to the output stream as images complete.

use std::io::{self, Write};

use point_grid::{ImageResult, RunSummary};

pub const HEADER: &str = "Image,GridSize,GridSizePixel,Positive,Total";
pub const SUMMARY_HEADER: &str = "Seconds,GrandTotalPositive,GrandTotal";

/// Line-oriented CSV writer for per-image rows and the trailing summary.
pub struct CsvReport<W: Write> {
    out: W,
    rows: usize,
}

impl<W: Write> CsvReport<W> {
    pub fn new(out: W) -> Self {
        Self { out, rows: 0 }
    }

    pub fn write_header(&mut self) -> io::Result<()> {
        writeln!(self.out, "{HEADER}")
    }

    /// `<path>,<gx>x<gy>,<sx>x<sy>,<positive>,<total>`
    pub fn write_row(&mut self, result: &ImageResult) -> io::Result<()> {
        let (gx, gy) = result.requested();
        let (sx, sy) = result.spacing();
        writeln!(
            self.out,
            "{},{}x{},{}x{},{},{}",
            result.image_path().display(),
            gx,
            gy,
            sx,
            sy,
            result.positive_count(),
            result.total_count()
        )?;
        // Flush per row so partial results survive a later failure
        self.out.flush()?;
        self.rows += 1;
        Ok(())
    }

    pub fn write_summary(&mut self, summary: &RunSummary) -> io::Result<()> {
        writeln!(self.out, "{SUMMARY_HEADER}")?;
        writeln!(
            self.out,
            "{:.6},{},{}",
            summary.elapsed_seconds, summary.grand_positive, summary.grand_total
        )?;
        self.out.flush()
    }

    /// Rows written so far.
    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
