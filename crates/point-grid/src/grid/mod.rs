//! Grid geometry: spacing derivation and intersection enumeration.

mod error;
mod sampler;
mod spec;

pub use error::{Axis, GridError};
pub use sampler::{GridSampler, IntersectionPoint, Points};
pub use spec::{compute_spacing, GridSpec};
