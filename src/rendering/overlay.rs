use std::path::Path;

use point_grid::{
    AnnotationRequest, Annotator, Classification, GrayImage, GridSpec, RgbImage,
};

use crate::error::ImageError;
use crate::models::OverlaySettings;

/// Duplicate `source` into a color buffer and draw the grid plus a marker on
/// every positive point. `source` itself is left as is.
pub fn render_overlay(
    source: &GrayImage,
    spec: &GridSpec,
    classification: &Classification,
    overlay: &OverlaySettings,
) -> RgbImage {
    let mut canvas = RgbImage::from_gray(source);
    let request =
        AnnotationRequest::for_grid(spec, classification.positives(), overlay.marker_radius);
    Annotator::new(overlay.style).annotate(&mut canvas, &request);
    canvas
}

/// Output file name for an annotated copy of `image_path`:
/// `grid<gx>x<gy>_pixel<sx>x<sy>_thresh<t>.<original file name>`.
pub fn annotated_file_name(
    image_path: &Path,
    spec: &GridSpec,
    threshold: u8,
) -> Result<String, ImageError> {
    let original = image_path
        .file_name()
        .ok_or_else(|| ImageError::NoFileName(image_path.to_path_buf()))?;
    Ok(format!(
        "grid{}x{}_pixel{}x{}_thresh{}.{}",
        spec.requested_x(),
        spec.requested_y(),
        spec.spacing_x(),
        spec.spacing_y(),
        threshold,
        original.to_string_lossy()
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use point_grid::{Rgb, ThresholdClassifier};

    #[test]
    fn test_annotated_file_name() {
        let spec = GridSpec::new(100, 80, 4, 4).unwrap();
        let name = annotated_file_name(Path::new("/data/run1/slice_007.png"), &spec, 128).unwrap();
        assert_eq!(name, "grid4x4_pixel25x20_thresh128.slice_007.png");
    }

    #[test]
    fn test_annotated_file_name_requires_file_name() {
        let spec = GridSpec::new(100, 80, 4, 4).unwrap();
        let err = annotated_file_name(Path::new("/"), &spec, 1).unwrap_err();
        assert!(matches!(err, ImageError::NoFileName(_)));
    }

    #[test]
    fn test_overlay_marks_positive_points_only() {
        let source = GrayImage::from_fn(100, 80, |x, _| if x == 75 { 255 } else { 0 });
        let spec = GridSpec::new(100, 80, 4, 4).unwrap();
        let classification = ThresholdClassifier::new(200).classify(spec.sampler(), &source);
        assert_eq!(classification.positive_count(), 3);

        let overlay = OverlaySettings::default();
        let canvas = render_overlay(&source, &spec, &classification, &overlay);

        assert_eq!(canvas.pixel(75, 40), Rgb::GREEN);
        assert_eq!(canvas.pixel(25, 40), Rgb::grey(0));
        assert_eq!(canvas.pixel(25, 30), Rgb::RED);
        assert_eq!(source.as_bytes()[40 * 100 + 75], 255);
    }
}
