//! Depth-map loading and SVG visualization.

pub mod loader;
pub mod svg;

pub use loader::{load_csv, load_gray_image};
pub use svg::{SvgConfig, SvgVisualizer};
