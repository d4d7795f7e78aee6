//! Depth map grid type.

use crate::error::{Result, VisionError};
use serde::{Deserialize, Serialize};

/// Dense H×W grid of depth values from a monocular depth model.
///
/// Values are stored row-major. Larger values mean closer surfaces
/// (relative inverse depth, the convention of the upstream model); the
/// estimator inverts them when lifting the grid into a point cloud.
///
/// A `DepthMap` is immutable once built and lives for a single estimation
/// request. Construction validates the grid shape; [`DepthMap::validate`]
/// re-checks shape and finiteness and is run again by the estimator before
/// any geometry, so a map deserialized from untrusted data cannot slip
/// NaNs into the scoring loop.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DepthMap {
    values: Vec<f32>,
    width: usize,
    height: usize,
}

impl DepthMap {
    /// Create a depth map from a row-major buffer.
    ///
    /// Fails with [`VisionError::InvalidInput`] if either dimension is zero
    /// or the buffer length does not match `width * height`.
    pub fn new(width: usize, height: usize, values: Vec<f32>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(VisionError::InvalidInput(format!(
                "grid dimensions must be non-zero, got {}x{}",
                height, width
            )));
        }
        if values.len() != width * height {
            return Err(VisionError::InvalidInput(format!(
                "buffer length {} does not match {}x{} grid",
                values.len(),
                height,
                width
            )));
        }
        Ok(Self {
            values,
            width,
            height,
        })
    }

    /// Create a depth map from nested rows.
    ///
    /// Fails with [`VisionError::InvalidInput`] if there are no rows, any
    /// row is empty, or the rows have mismatched lengths.
    pub fn from_rows(rows: Vec<Vec<f32>>) -> Result<Self> {
        let height = rows.len();
        if height == 0 {
            return Err(VisionError::InvalidInput("depth map has no rows".into()));
        }
        let width = rows[0].len();
        for (i, row) in rows.iter().enumerate() {
            if row.len() != width {
                return Err(VisionError::InvalidInput(format!(
                    "row {} has {} columns, expected {}",
                    i,
                    row.len(),
                    width
                )));
            }
        }
        if width == 0 {
            return Err(VisionError::InvalidInput("depth map rows are empty".into()));
        }
        let mut values = Vec::with_capacity(width * height);
        for row in &rows {
            values.extend_from_slice(row);
        }
        Ok(Self {
            values,
            width,
            height,
        })
    }

    /// Grid width in cells (columns)
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Grid height in cells (rows)
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Total number of cells
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.width * self.height
    }

    /// Depth value at (row, col).
    ///
    /// # Panics
    /// Panics if the index is out of bounds.
    #[inline]
    pub fn value(&self, row: usize, col: usize) -> f32 {
        debug_assert!(row < self.height && col < self.width);
        self.values[row * self.width + col]
    }

    /// Depth value at (row, col), returning None if out of bounds.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Option<f32> {
        if row >= self.height || col >= self.width {
            return None;
        }
        Some(self.values[row * self.width + col])
    }

    /// Raw access to the row-major value buffer
    #[inline]
    pub fn values_raw(&self) -> &[f32] {
        &self.values
    }

    /// Validate internal consistency of the grid.
    ///
    /// Checks non-zero dimensions, buffer length, and that every value is
    /// finite. Run by the estimator before any geometry.
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 || self.values.is_empty() {
            return Err(VisionError::InvalidInput("depth map is empty".into()));
        }
        if self.values.len() != self.width * self.height {
            return Err(VisionError::InvalidInput(format!(
                "buffer length {} does not match {}x{} grid",
                self.values.len(),
                self.height,
                self.width
            )));
        }
        for (i, v) in self.values.iter().enumerate() {
            if !v.is_finite() {
                return Err(VisionError::InvalidInput(format!(
                    "non-finite value {} at cell ({}, {})",
                    v,
                    i / self.width,
                    i % self.width
                )));
            }
        }
        Ok(())
    }

    /// Minimum and maximum depth value in the grid.
    pub fn value_range(&self) -> (f32, f32) {
        let mut min = f32::MAX;
        let mut max = f32::MIN;
        for &v in &self.values {
            min = min.min(v);
            max = max.max(v);
        }
        (min, max)
    }
}
