use std::path::{Path, PathBuf};

use point_grid::{AnnotationStyle, Rgb, DEFAULT_MARKER_RADIUS};
use serde::Deserialize;

use crate::error::ConfigError;

/// Largest accepted marker radius in pixels.
pub const MAX_MARKER_RADIUS: f64 = u32::MAX as f64;

/// Overlay appearance loaded from an optional YAML file.
///
/// ```yaml
/// grid_color: "#FF0000"
/// marker_color: "#00FF00"
/// marker_radius: 5.0
/// ```
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct AnnotationConfig {
    /// Color of the grid lines (hex RGB)
    #[serde(default = "default_grid_color")]
    pub grid_color: String,

    /// Color of the rings around positive points (hex RGB)
    #[serde(default = "default_marker_color")]
    pub marker_color: String,

    /// Ring radius in pixels
    #[serde(default = "default_marker_radius")]
    pub marker_radius: f64,
}

fn default_grid_color() -> String {
    Rgb::RED.to_hex()
}

fn default_marker_color() -> String {
    Rgb::GREEN.to_hex()
}

fn default_marker_radius() -> f64 {
    DEFAULT_MARKER_RADIUS
}

impl Default for AnnotationConfig {
    fn default() -> Self {
        Self {
            grid_color: default_grid_color(),
            marker_color: default_marker_color(),
            marker_radius: default_marker_radius(),
        }
    }
}

impl AnnotationConfig {
    /// Load from `path`, or use defaults when no path is given.
    ///
    /// Unlike a missing optional file, a named file that cannot be read or
    /// parsed is an error.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let Some(path) = path else {
            return Ok(Self::default());
        };

        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_yaml(&content).map_err(|source| ConfigError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(
            path = %path.display(),
            grid_color = %config.grid_color,
            marker_color = %config.marker_color,
            marker_radius = config.marker_radius,
            "Loaded annotation config"
        );
        Ok(config)
    }

    /// Parse YAML text. An empty document yields the defaults.
    pub fn from_yaml(content: &str) -> Result<Self, serde_yaml::Error> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content)
    }

    /// Validate colors and radius.
    pub fn resolve(&self) -> Result<OverlaySettings, ConfigError> {
        let grid_color = self
            .grid_color
            .parse::<Rgb>()
            .map_err(|source| ConfigError::InvalidColor {
                field: "grid_color",
                source,
            })?;
        let marker_color =
            self.marker_color
                .parse::<Rgb>()
                .map_err(|source| ConfigError::InvalidColor {
                    field: "marker_color",
                    source,
                })?;
        if !(0.0..=MAX_MARKER_RADIUS).contains(&self.marker_radius) {
            return Err(ConfigError::InvalidMarkerRadius(self.marker_radius));
        }

        Ok(OverlaySettings {
            style: AnnotationStyle {
                grid_color,
                marker_color,
            },
            marker_radius: self.marker_radius,
        })
    }
}

/// Validated overlay appearance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverlaySettings {
    pub style: AnnotationStyle,
    pub marker_radius: f64,
}

impl Default for OverlaySettings {
    fn default() -> Self {
        Self {
            style: AnnotationStyle::default(),
            marker_radius: DEFAULT_MARKER_RADIUS,
        }
    }
}

/// Fully validated parameters for one counting run.
#[derive(Debug, Clone, PartialEq)]
pub struct RunConfig {
    /// A single image or a directory of `.png` images
    pub images: PathBuf,
    /// Number of vertical grid lines
    pub grid_x: u32,
    /// Number of horizontal grid lines
    pub grid_y: u32,
    /// Minimum intensity counted as positive
    pub threshold: u8,
    /// Where annotated copies are written; `None` disables annotation
    pub save_dir: Option<PathBuf>,
    pub overlay: OverlaySettings,
}

impl RunConfig {
    /// A config with default overlay settings and no annotation output.
    pub fn new(images: impl Into<PathBuf>, grid_x: u32, grid_y: u32, threshold: u8) -> Self {
        Self {
            images: images.into(),
            grid_x,
            grid_y,
            threshold,
            save_dir: None,
            overlay: OverlaySettings::default(),
        }
    }

    pub fn with_save_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.save_dir = Some(dir.into());
        self
    }

    pub fn with_overlay(mut self, overlay: OverlaySettings) -> Self {
        self.overlay = overlay;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AnnotationConfig::default();
        assert_eq!(config.grid_color, "#FF0000");
        assert_eq!(config.marker_color, "#00FF00");
        assert_eq!(config.marker_radius, 5.0);

        let overlay = config.resolve().unwrap();
        assert_eq!(overlay, OverlaySettings::default());
    }

    #[test]
    fn test_partial_yaml_keeps_other_defaults() {
        let config = AnnotationConfig::from_yaml("marker_radius: 8\n").unwrap();
        assert_eq!(config.marker_radius, 8.0);
        assert_eq!(config.grid_color, "#FF0000");
    }

    #[test]
    fn test_empty_yaml_is_default() {
        assert_eq!(
            AnnotationConfig::from_yaml("  \n").unwrap(),
            AnnotationConfig::default()
        );
    }

    #[test]
    fn test_unknown_keys_rejected() {
        assert!(AnnotationConfig::from_yaml("grid_colour: \"#000\"\n").is_err());
    }

    #[test]
    fn test_resolve_parses_colors() {
        let config = AnnotationConfig {
            grid_color: "#0000ff".to_string(),
            marker_color: "fff".to_string(),
            marker_radius: 2.5,
        };
        let overlay = config.resolve().unwrap();
        assert_eq!(overlay.style.grid_color, Rgb::new(0, 0, 255));
        assert_eq!(overlay.style.marker_color, Rgb::grey(255));
        assert_eq!(overlay.marker_radius, 2.5);
    }

    #[test]
    fn test_resolve_rejects_bad_color() {
        let config = AnnotationConfig {
            marker_color: "green".to_string(),
            ..Default::default()
        };
        match config.resolve() {
            Err(ConfigError::InvalidColor { field, .. }) => assert_eq!(field, "marker_color"),
            other => panic!("Expected InvalidColor, got {other:?}"),
        }
    }

    #[test]
    fn test_resolve_rejects_negative_radius() {
        let config = AnnotationConfig {
            marker_radius: -3.0,
            ..Default::default()
        };
        assert!(matches!(
            config.resolve(),
            Err(ConfigError::InvalidMarkerRadius(_))
        ));
    }

    #[test]
    fn test_resolve_rejects_oversized_radius() {
        let config = AnnotationConfig::from_yaml("marker_radius: 1.0e30\n").unwrap();
        assert!(matches!(
            config.resolve(),
            Err(ConfigError::InvalidMarkerRadius(_))
        ));

        let at_limit = AnnotationConfig {
            marker_radius: MAX_MARKER_RADIUS,
            ..Default::default()
        };
        assert!(at_limit.resolve().is_ok());
    }

    #[test]
    fn test_load_without_path_uses_defaults() {
        assert_eq!(
            AnnotationConfig::load(None).unwrap(),
            AnnotationConfig::default()
        );
    }

    #[test]
    fn test_load_missing_file_is_error() {
        let err = AnnotationConfig::load(Some(Path::new("/definitely/not/here.yaml"))).unwrap_err();
        assert!(matches!(err, ConfigError::ConfigRead { .. }));
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("overlay.yaml");
        std::fs::write(&path, "grid_color: \"#123456\"\nmarker_radius: 3\n").unwrap();

        let config = AnnotationConfig::load(Some(&path)).unwrap();
        assert_eq!(config.grid_color, "#123456");
        assert_eq!(config.marker_radius, 3.0);
    }

    #[test]
    fn test_run_config_builder() {
        let config = RunConfig::new("imgs", 4, 5, 128).with_save_dir("out");
        assert_eq!(config.images, PathBuf::from("imgs"));
        assert_eq!((config.grid_x, config.grid_y, config.threshold), (4, 5, 128));
        assert_eq!(config.save_dir, Some(PathBuf::from("out")));
    }
}
