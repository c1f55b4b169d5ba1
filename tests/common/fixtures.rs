//! Test fixtures: synthetic greyscale images written as PNG files.

use std::fs::File;
use std::path::{Path, PathBuf};

use point_grid::GrayImage;
use stereo_point_count::rendering::encode_gray;
use tempfile::TempDir;

/// Images used across tests
pub mod images {
    use point_grid::GrayImage;

    /// 100x80, left half dark (30), right half bright (220).
    ///
    /// With a 4x4 grid the spacing is 25x20 and 6 of 9 points are bright.
    pub fn half_bright() -> GrayImage {
        GrayImage::from_fn(100, 80, |x, _| if x >= 50 { 220 } else { 30 })
    }

    /// 100x100, bright only in the top row band (y < 30).
    ///
    /// With a 4x4 grid the spacing is 25x25 and 3 of 9 points are bright.
    pub fn top_band() -> GrayImage {
        GrayImage::from_fn(100, 100, |_, y| if y < 30 { 200 } else { 10 })
    }

    /// Uniform image.
    pub fn flat(width: usize, height: usize, value: u8) -> GrayImage {
        GrayImage::filled(width, height, value)
    }
}

/// A temporary directory of PNG images plus a separate output directory.
pub struct ImageDir {
    input: TempDir,
    output: TempDir,
}

impl ImageDir {
    pub fn new() -> Self {
        Self {
            input: tempfile::tempdir().expect("Failed to create input dir"),
            output: tempfile::tempdir().expect("Failed to create output dir"),
        }
    }

    /// Directory holding the input images.
    pub fn path(&self) -> &Path {
        self.input.path()
    }

    /// Directory for annotated output.
    pub fn output(&self) -> &Path {
        self.output.path()
    }

    /// Write `image` as `name` in the input directory.
    pub fn add(&self, name: &str, image: &GrayImage) -> PathBuf {
        let path = self.input.path().join(name);
        write_png(&path, image);
        path
    }

    /// Write arbitrary bytes as `name` in the input directory.
    pub fn add_raw(&self, name: &str, bytes: &[u8]) -> PathBuf {
        let path = self.input.path().join(name);
        std::fs::write(&path, bytes).expect("Failed to write fixture");
        path
    }

    /// File names in the output directory, sorted.
    pub fn output_names(&self) -> Vec<String> {
        let mut names: Vec<String> = std::fs::read_dir(self.output.path())
            .expect("Failed to list output dir")
            .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }
}

pub fn write_png(path: &Path, image: &GrayImage) {
    let file = File::create(path).expect("Failed to create PNG");
    encode_gray(image, file).expect("Failed to encode PNG");
}
