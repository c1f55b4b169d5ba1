use std::fmt;

/// Image axis a grid parameter applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Horizontal axis (vertical grid lines, image width)
    X,
    /// Vertical axis (horizontal grid lines, image height)
    Y,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::X => f.write_str("x"),
            Axis::Y => f.write_str("y"),
        }
    }
}

/// Error type for grid construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// A grid line count of zero was requested
    ZeroGridCount {
        /// Axis with the zero count
        axis: Axis,
    },
    /// The requested line count exceeds the image dimension, so the
    /// spacing floors to zero pixels
    SamplingDegeneracy {
        /// Axis that collapsed
        axis: Axis,
        /// Image dimension along that axis, in pixels
        dimension: usize,
        /// Requested number of grid lines
        requested: u32,
    },
    /// A sampler was built directly with a zero pixel spacing
    ZeroSpacing {
        /// Axis with the zero spacing
        axis: Axis,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridError::ZeroGridCount { axis } => {
                write!(f, "grid count in {} must be at least 1", axis)
            }
            GridError::SamplingDegeneracy {
                axis,
                dimension,
                requested,
            } => write!(
                f,
                "grid count {} in {} exceeds image size {} (spacing would be 0 pixels)",
                requested, axis, dimension
            ),
            GridError::ZeroSpacing { axis } => {
                write!(f, "grid spacing in {} must be at least 1 pixel", axis)
            }
        }
    }
}

impl std::error::Error for GridError {}
