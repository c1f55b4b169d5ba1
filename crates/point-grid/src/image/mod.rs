//! Pixel-buffer capabilities and the concrete buffers that implement them.
//!
//! The sampling side only needs [`IntensitySource`]; the overlay side only
//! needs [`ColorCanvas`]. Any buffer type can join either side by
//! implementing the trait.

mod error;
mod gray;
mod rgb;
mod traits;

pub use error::BufferError;
pub use gray::GrayImage;
pub use rgb::{RgbImage, RgbaImage};
pub use traits::{ColorCanvas, IntensitySource};
