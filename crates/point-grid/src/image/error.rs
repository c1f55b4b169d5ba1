use std::fmt;

/// Error returned when raw pixel data does not fit the stated dimensions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BufferError {
    /// `data.len()` differs from `width * height * channels`
    LengthMismatch {
        /// Length required by the dimensions
        expected: usize,
        /// Length actually supplied
        actual: usize,
    },
}

impl fmt::Display for BufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BufferError::LengthMismatch { expected, actual } => write!(
                f,
                "pixel buffer length mismatch: expected {} bytes, got {}",
                expected, actual
            ),
        }
    }
}

impl std::error::Error for BufferError {}
