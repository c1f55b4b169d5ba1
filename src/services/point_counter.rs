use std::path::{Path, PathBuf};

use point_grid::{GrayImage, GridSpec, ImageResult, ThresholdClassifier};

use crate::error::ImageError;
use crate::models::{OverlaySettings, RunConfig};
use crate::rendering::{annotated_file_name, read_gray_png, render_overlay, write_rgb_png};

/// Counts one image at a time: grid, sample, classify and optionally save
/// an annotated copy.
#[derive(Debug, Clone)]
pub struct PointCounter {
    grid_x: u32,
    grid_y: u32,
    classifier: ThresholdClassifier,
    save_dir: Option<PathBuf>,
    overlay: OverlaySettings,
}

impl PointCounter {
    pub fn new(config: &RunConfig) -> Self {
        Self {
            grid_x: config.grid_x,
            grid_y: config.grid_y,
            classifier: ThresholdClassifier::new(config.threshold),
            save_dir: config.save_dir.clone(),
            overlay: config.overlay,
        }
    }

    /// Decode the PNG at `path` and count it.
    pub fn count_file(&self, path: &Path) -> Result<ImageResult, ImageError> {
        let image = read_gray_png(path)?;
        self.count(path, &image)
    }

    /// Count an already decoded image. `path` labels the result and names
    /// the annotated copy.
    pub fn count(&self, path: &Path, image: &GrayImage) -> Result<ImageResult, ImageError> {
        let spec = GridSpec::new(image.width(), image.height(), self.grid_x, self.grid_y)?;
        let classification = self.classifier.classify(spec.sampler(), image);

        tracing::debug!(
            image = %path.display(),
            width = image.width(),
            height = image.height(),
            spacing_x = spec.spacing_x(),
            spacing_y = spec.spacing_y(),
            positive = classification.positive_count(),
            total = classification.total_count(),
            "Counted image"
        );

        if let Some(dir) = &self.save_dir {
            let name = annotated_file_name(path, &spec, self.classifier.threshold())?;
            let out_path = dir.join(name);
            let canvas = render_overlay(image, &spec, &classification, &self.overlay);
            write_rgb_png(&out_path, &canvas)?;
            tracing::debug!(output = %out_path.display(), "Wrote annotated image");
        }

        Ok(ImageResult::new(path, &spec, &classification))
    }
}
