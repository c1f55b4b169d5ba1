pub mod batch_runner;
pub mod image_source;
pub mod point_counter;
pub mod report;

pub use batch_runner::{BatchOutcome, BatchRunner, SkippedImage};
pub use image_source::{png_files_in_dir, resolve_images};
pub use point_counter::PointCounter;
pub use report::CsvReport;
