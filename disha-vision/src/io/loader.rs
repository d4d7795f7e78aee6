//! Depth-map file loaders.
//!
//! Two interchange formats stand in for a live depth model:
//! - CSV: one grid row per line, comma-separated finite values
//! - Grayscale images (PGM/PNG): pixel intensity mapped to depth through a
//!   caller-provided scale factor

use crate::core::depth::DepthMap;
use crate::error::{Result, VisionError};
use log::debug;
use std::path::Path;

/// Load a depth map from a CSV file.
///
/// Blank lines are skipped; every remaining line must hold the same number
/// of comma-separated values. Shape problems surface as
/// [`VisionError::InvalidInput`], unparseable cells as
/// [`VisionError::Parse`].
pub fn load_csv<P: AsRef<Path>>(path: P) -> Result<DepthMap> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)?;

    let mut rows: Vec<Vec<f32>> = Vec::new();
    for (line_no, line) in content.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let mut row = Vec::new();
        for cell in line.split(',') {
            let value: f32 = cell.trim().parse().map_err(|_| {
                VisionError::Parse(format!(
                    "bad depth value {:?} at {}:{}",
                    cell.trim(),
                    path.display(),
                    line_no + 1
                ))
            })?;
            row.push(value);
        }
        rows.push(row);
    }

    let map = DepthMap::from_rows(rows)?;
    map.validate()?;
    debug!(
        "loaded {}x{} depth map from {}",
        map.height(),
        map.width(),
        path.display()
    );
    Ok(map)
}

/// Load a depth map from a grayscale image (PGM, PNG).
///
/// Each pixel's 8-bit luma value is multiplied by `depth_scale` to produce
/// the depth value for that cell. Color inputs are collapsed to luma first.
pub fn load_gray_image<P: AsRef<Path>>(path: P, depth_scale: f32) -> Result<DepthMap> {
    let path = path.as_ref();
    let image = image::open(path)
        .map_err(|e| VisionError::Parse(format!("failed to decode {}: {}", path.display(), e)))?
        .to_luma8();

    let (width, height) = image.dimensions();
    let mut values = Vec::with_capacity((width * height) as usize);
    for pixel in image.pixels() {
        values.push(f32::from(pixel.0[0]) * depth_scale);
    }

    let map = DepthMap::new(width as usize, height as usize, values)?;
    debug!(
        "loaded {}x{} depth map from {} (scale {})",
        map.height(),
        map.width(),
        path.display(),
        depth_scale
    );
    Ok(map)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_csv_valid() {
        let file = write_temp("1.0, 2.0, 3.0\n4.0, 5.0, 6.0\n");
        let map = load_csv(file.path()).unwrap();
        assert_eq!(map.width(), 3);
        assert_eq!(map.height(), 2);
        assert_eq!(map.value(1, 2), 6.0);
    }

    #[test]
    fn test_load_csv_skips_blank_lines() {
        let file = write_temp("1,2\n\n3,4\n\n");
        let map = load_csv(file.path()).unwrap();
        assert_eq!(map.height(), 2);
    }

    #[test]
    fn test_load_csv_rejects_jagged() {
        let file = write_temp("1,2,3\n4,5\n");
        assert!(matches!(
            load_csv(file.path()),
            Err(VisionError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_load_csv_rejects_garbage() {
        let file = write_temp("1,two,3\n");
        assert!(matches!(load_csv(file.path()), Err(VisionError::Parse(_))));
    }

    #[test]
    fn test_load_csv_rejects_non_finite() {
        let file = write_temp("1,NaN\n2,3\n");
        assert!(matches!(
            load_csv(file.path()),
            Err(VisionError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_load_csv_missing_file() {
        assert!(matches!(
            load_csv("/nonexistent/depth.csv"),
            Err(VisionError::Io(_))
        ));
    }

    #[test]
    fn test_load_gray_image() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("depth.png");

        let mut img = image::GrayImage::new(4, 2);
        for (i, pixel) in img.pixels_mut().enumerate() {
            pixel.0[0] = (i * 10) as u8;
        }
        img.save(&path).unwrap();

        let map = load_gray_image(&path, 0.5).unwrap();
        assert_eq!(map.width(), 4);
        assert_eq!(map.height(), 2);
        assert_eq!(map.value(0, 0), 0.0);
        assert_eq!(map.value(0, 3), 15.0);
        assert_eq!(map.value(1, 3), 35.0);
    }
}
