//! Depth-map sources.
//!
//! [`DepthSource`] is the seam to the depth-estimation collaborator: the
//! advisor asks it for one map per frame and never sees what sits behind
//! it. A failing source surfaces as [`NavError::UpstreamUnavailable`] and
//! is handled fail-soft upstream; a source that hands over a malformed
//! grid has violated its contract and that error is not recovered.

use crate::config::{SceneKind, SourceConfig, SourceKind};
use crate::error::{NavError, Result};
use disha_vision::io::loader;
use disha_vision::{DepthMap, VisionError};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, Normal};
use std::path::PathBuf;

/// A collaborator that produces one depth map per acquisition.
pub trait DepthSource {
    /// Short name for logging.
    fn name(&self) -> &'static str;

    /// Acquire the next depth map.
    fn acquire(&mut self) -> Result<DepthMap>;
}

impl DepthSource for Box<dyn DepthSource> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn acquire(&mut self) -> Result<DepthMap> {
        (**self).acquire()
    }
}

/// Build the configured source.
pub fn create_source(config: &SourceConfig) -> Result<Box<dyn DepthSource>> {
    match config.kind {
        SourceKind::File => {
            let path = config.path.clone().ok_or_else(|| {
                NavError::Config("source.kind = \"file\" requires source.path".into())
            })?;
            Ok(Box::new(FileDepthSource::new(path, config.depth_scale)))
        }
        SourceKind::Synthetic => Ok(Box::new(SyntheticDepthSource::new(config))),
    }
}

/// Depth maps read from disk: CSV or grayscale image, by extension.
pub struct FileDepthSource {
    path: PathBuf,
    depth_scale: f32,
}

impl FileDepthSource {
    pub fn new(path: impl Into<PathBuf>, depth_scale: f32) -> Self {
        Self {
            path: path.into(),
            depth_scale,
        }
    }
}

impl DepthSource for FileDepthSource {
    fn name(&self) -> &'static str {
        "file"
    }

    fn acquire(&mut self) -> Result<DepthMap> {
        let is_csv = self
            .path
            .extension()
            .map(|ext| ext.eq_ignore_ascii_case("csv"))
            .unwrap_or(false);

        let loaded = if is_csv {
            loader::load_csv(&self.path)
        } else {
            loader::load_gray_image(&self.path, self.depth_scale)
        };

        // An unreadable or undecodable file means the collaborator failed
        // to deliver; a malformed grid means it delivered garbage. Only the
        // former is recoverable.
        loaded.map_err(|e| match e {
            VisionError::Io(io) => {
                NavError::UpstreamUnavailable(format!("{}: {}", self.path.display(), io))
            }
            VisionError::Parse(msg) => NavError::UpstreamUnavailable(msg),
            other @ VisionError::InvalidInput(_) => NavError::Vision(other),
        })
    }
}

/// Deterministic synthetic scenes, optionally with seeded Gaussian noise.
///
/// Stands in for the depth model during tests and dry runs. Every acquire
/// re-seeds from the configured seed, so repeated runs see the same frame.
pub struct SyntheticDepthSource {
    scene: SceneKind,
    width: usize,
    height: usize,
    seed: u64,
    noise_std: f32,
}

impl SyntheticDepthSource {
    pub fn new(config: &SourceConfig) -> Self {
        Self {
            scene: config.scene,
            width: config.width,
            height: config.height,
            seed: config.seed,
            noise_std: config.noise_std,
        }
    }

    fn base_depth(&self, row: usize, col: usize) -> f32 {
        let w = self.width as f32;
        let c = col as f32;
        match self.scene {
            SceneKind::Uniform => 20.0,
            // Close on the right, open on the left
            SceneKind::Gradient => 10.0 + 25.0 * (c / w),
            // Near walls on both edges, falling off toward the open center
            SceneKind::Corridor => {
                let edge = (w / 2.0 - (c - w / 2.0).abs()) / (w / 2.0);
                let floor = 4.0 * (row as f32 / self.height as f32);
                34.0 - 24.0 * edge + floor
            }
        }
    }
}

impl DepthSource for SyntheticDepthSource {
    fn name(&self) -> &'static str {
        "synthetic"
    }

    fn acquire(&mut self) -> Result<DepthMap> {
        let mut values = Vec::with_capacity(self.width * self.height);

        if self.noise_std > 0.0 {
            let mut rng = StdRng::seed_from_u64(self.seed);
            let normal = Normal::new(0.0f32, self.noise_std)
                .map_err(|e| NavError::Config(format!("bad noise_std: {}", e)))?;
            for r in 0..self.height {
                for c in 0..self.width {
                    let noisy = self.base_depth(r, c) + normal.sample(&mut rng);
                    values.push(noisy.max(0.0));
                }
            }
        } else {
            for r in 0..self.height {
                for c in 0..self.width {
                    values.push(self.base_depth(r, c));
                }
            }
        }

        Ok(DepthMap::new(self.width, self.height, values)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SourceConfig;
    use std::io::Write;

    fn synthetic(scene: SceneKind, noise_std: f32) -> SyntheticDepthSource {
        SyntheticDepthSource::new(&SourceConfig {
            scene,
            noise_std,
            ..SourceConfig::default()
        })
    }

    #[test]
    fn test_synthetic_shape() {
        let mut source = synthetic(SceneKind::Uniform, 0.0);
        let map = source.acquire().unwrap();
        assert_eq!(map.width(), 64);
        assert_eq!(map.height(), 48);
        assert!(map.validate().is_ok());
    }

    #[test]
    fn test_synthetic_deterministic() {
        let mut source = synthetic(SceneKind::Corridor, 0.8);
        let first = source.acquire().unwrap();
        let second = source.acquire().unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_synthetic_noise_stays_non_negative() {
        let mut source = synthetic(SceneKind::Gradient, 30.0);
        let map = source.acquire().unwrap();
        let (min, _) = map.value_range();
        assert!(min >= 0.0);
    }

    #[test]
    fn test_gradient_scene_increases_left_to_right() {
        let mut source = synthetic(SceneKind::Gradient, 0.0);
        let map = source.acquire().unwrap();
        assert!(map.value(0, 0) < map.value(0, map.width() - 1));
    }

    #[test]
    fn test_file_source_missing_is_upstream_failure() {
        let mut source = FileDepthSource::new("/nonexistent/depth.csv", 0.2);
        assert!(matches!(
            source.acquire(),
            Err(NavError::UpstreamUnavailable(_))
        ));
    }

    #[test]
    fn test_file_source_reads_csv() {
        let mut file = tempfile::NamedTempFile::with_suffix(".csv").unwrap();
        write!(file, "1,2,3\n4,5,6\n").unwrap();

        let mut source = FileDepthSource::new(file.path(), 0.2);
        let map = source.acquire().unwrap();
        assert_eq!(map.width(), 3);
        assert_eq!(map.height(), 2);
    }

    #[test]
    fn test_file_source_nan_is_contract_violation() {
        let mut file = tempfile::NamedTempFile::with_suffix(".csv").unwrap();
        write!(file, "1,NaN\n2,3\n").unwrap();

        let mut source = FileDepthSource::new(file.path(), 0.2);
        assert!(matches!(source.acquire(), Err(NavError::Vision(_))));
    }

    #[test]
    fn test_create_source_file_requires_path() {
        let config = SourceConfig {
            kind: SourceKind::File,
            path: None,
            ..SourceConfig::default()
        };
        assert!(matches!(create_source(&config), Err(NavError::Config(_))));
    }
}
