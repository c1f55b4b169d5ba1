use std::path::PathBuf;

use point_grid::{BufferError, GridError, ParseColorError};
use thiserror::Error;

/// Problems with the run configuration. Reported before any image is read.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid arguments")]
    NoArguments,

    #[error("{0}")]
    Parse(String),

    #[error("Unknown option(s) found: {}", .0.join(", "))]
    UnknownOption(Vec<String>),

    #[error("Unexpected options found: {}", .0.join(", "))]
    UnexpectedPositional(Vec<String>),

    #[error("--gridx required.  Run with --help for more information")]
    MissingGridX,

    #[error("--gridy required.  Run with --help for more information")]
    MissingGridY,

    #[error("--images required.  Run with --help for more information")]
    MissingImages,

    #[error("--threshold required.  Run with --help for more information")]
    MissingThreshold,

    #[error("--saveimages directory does not exist: {0}")]
    SaveDirNotFound(PathBuf),

    #[error("--saveimages must be a directory: {0}")]
    SaveDirNotDirectory(PathBuf),

    #[error("Failed to read config file {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        source: serde_yaml::Error,
    },

    #[error("Invalid color for {field}: {source}")]
    InvalidColor {
        field: &'static str,
        source: ParseColorError,
    },

    #[error("Invalid marker radius: {0} (must be between 0 and 4294967295)")]
    InvalidMarkerRadius(f64),
}

impl ConfigError {
    /// Process exit status for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            ConfigError::UnknownOption(_) => 2,
            ConfigError::UnexpectedPositional(_) => 3,
            ConfigError::MissingGridX => 4,
            ConfigError::MissingGridY => 5,
            ConfigError::MissingImages => 6,
            ConfigError::MissingThreshold => 7,
            ConfigError::NoArguments
            | ConfigError::Parse(_)
            | ConfigError::SaveDirNotFound(_)
            | ConfigError::SaveDirNotDirectory(_)
            | ConfigError::ConfigRead { .. }
            | ConfigError::ConfigParse { .. }
            | ConfigError::InvalidColor { .. }
            | ConfigError::InvalidMarkerRadius(_) => 1,
        }
    }
}

/// Failure processing a single image. The batch skips the image and goes on.
#[derive(Debug, Error)]
pub enum ImageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("PNG decode error: {0}")]
    Decode(#[from] png::DecodingError),

    #[error("PNG encode error: {0}")]
    Encode(#[from] png::EncodingError),

    #[error("Unsupported image layout: {0}")]
    UnsupportedLayout(String),

    #[error("Invalid pixel buffer: {0}")]
    Buffer(#[from] BufferError),

    #[error("Grid error: {0}")]
    Grid(#[from] GridError),

    #[error("Image path has no file name: {0}")]
    NoFileName(PathBuf),
}
