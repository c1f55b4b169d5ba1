//! Stereological point counting.
//!
//! Overlays a regular grid on greyscale PNG images, counts the grid
//! intersections at or above an intensity threshold, and reports per-image
//! and run totals as CSV. The geometry lives in the `point-grid` crate; this
//! crate adds the command line, PNG I/O and the batch driver.
//! This library exposes modules for integration testing.

pub mod cli;
pub mod error;
pub mod models;
pub mod rendering;
pub mod services;
