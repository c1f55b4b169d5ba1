pub mod config;

pub use config::{AnnotationConfig, OverlaySettings, RunConfig};
