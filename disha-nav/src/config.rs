//! Configuration loading for DishaNav

use crate::error::Result;
use serde::Deserialize;
use std::path::Path;

/// Main configuration structure
#[derive(Clone, Debug, Deserialize)]
pub struct DishaConfig {
    #[serde(default)]
    pub source: SourceConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Which depth source backs the advisor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceKind {
    /// Depth map read from a file (CSV or grayscale image)
    File,
    /// Deterministic synthetic scene
    Synthetic,
}

/// Synthetic scene shapes
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SceneKind {
    /// Constant depth everywhere
    Uniform,
    /// Depth increasing linearly left to right
    Gradient,
    /// Near walls on both sides, open center
    Corridor,
}

/// Depth source settings
#[derive(Clone, Debug, Deserialize)]
pub struct SourceConfig {
    /// Source backend (default: synthetic)
    #[serde(default = "default_kind")]
    pub kind: SourceKind,

    /// Input file for the file source
    #[serde(default)]
    pub path: Option<String>,

    /// Depth units per 8-bit luma step for image inputs (default: 0.2)
    #[serde(default = "default_depth_scale")]
    pub depth_scale: f32,

    /// Synthetic scene shape (default: corridor)
    #[serde(default = "default_scene")]
    pub scene: SceneKind,

    /// Synthetic grid width in cells (default: 64)
    #[serde(default = "default_width")]
    pub width: usize,

    /// Synthetic grid height in cells (default: 48)
    #[serde(default = "default_height")]
    pub height: usize,

    /// RNG seed for synthetic noise (default: 7)
    #[serde(default = "default_seed")]
    pub seed: u64,

    /// Gaussian noise sigma added to synthetic depth (default: 0.0)
    #[serde(default)]
    pub noise_std: f32,
}

/// Output configuration
#[derive(Clone, Debug, Deserialize)]
pub struct OutputConfig {
    /// Path to save the SVG audit file; empty disables it
    #[serde(default = "default_svg_path")]
    pub svg_path: String,
}

// Default value functions
fn default_kind() -> SourceKind {
    SourceKind::Synthetic
}
fn default_depth_scale() -> f32 {
    0.2
}
fn default_scene() -> SceneKind {
    SceneKind::Corridor
}
fn default_width() -> usize {
    64
}
fn default_height() -> usize {
    48
}
fn default_seed() -> u64 {
    7
}
fn default_svg_path() -> String {
    "output/direction.svg".to_string()
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            kind: default_kind(),
            path: None,
            depth_scale: default_depth_scale(),
            scene: default_scene(),
            width: default_width(),
            height: default_height(),
            seed: default_seed(),
            noise_std: 0.0,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            svg_path: default_svg_path(),
        }
    }
}

impl Default for DishaConfig {
    fn default() -> Self {
        Self {
            source: SourceConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

impl DishaConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: DishaConfig = toml::from_str(&content)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = DishaConfig::default();
        assert_eq!(config.source.kind, SourceKind::Synthetic);
        assert_eq!(config.source.scene, SceneKind::Corridor);
        assert_eq!(config.source.width, 64);
        assert_eq!(config.source.height, 48);
        assert_eq!(config.output.svg_path, "output/direction.svg");
    }

    #[test]
    fn test_load_partial_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            "[source]\nkind = \"file\"\npath = \"frames/depth.csv\"\n"
        )
        .unwrap();

        let config = DishaConfig::load(file.path()).unwrap();
        assert_eq!(config.source.kind, SourceKind::File);
        assert_eq!(config.source.path.as_deref(), Some("frames/depth.csv"));
        // Unspecified fields keep their defaults
        assert_eq!(config.source.depth_scale, 0.2);
        assert_eq!(config.output.svg_path, "output/direction.svg");
    }

    #[test]
    fn test_load_synthetic_scene() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            "[source]\nscene = \"gradient\"\nwidth = 18\nheight = 2\nnoise_std = 0.5\n\n[output]\nsvg_path = \"\"\n"
        )
        .unwrap();

        let config = DishaConfig::load(file.path()).unwrap();
        assert_eq!(config.source.scene, SceneKind::Gradient);
        assert_eq!(config.source.width, 18);
        assert_eq!(config.source.height, 2);
        assert_eq!(config.source.noise_std, 0.5);
        assert!(config.output.svg_path.is_empty());
    }

    #[test]
    fn test_load_rejects_bad_kind() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "[source]\nkind = \"camera\"\n").unwrap();
        assert!(DishaConfig::load(file.path()).is_err());
    }
}
