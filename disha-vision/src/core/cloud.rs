//! 3-D point cloud container.

use serde::{Deserialize, Serialize};

/// Collection of 3-D points using Struct of Arrays (SoA) layout.
///
/// Instead of `Vec<Point3>` (x,y,z,x,y,z...), stores coordinates in three
/// contiguous arrays. The scoring loop touches all three components of
/// every point once per frame, and the flat arrays keep that pass cache
/// friendly for camera-sized grids.
///
/// Axis convention (derived from a depth map):
/// - `x`: horizontal, grows to the right, zero-centered on the grid
/// - `y`: inverted depth ("openness" height), larger = further away
/// - `z`: vertical, grows downward with the image row index
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct PointCloud {
    /// X coordinates (SoA layout)
    pub xs: Vec<f32>,
    /// Y coordinates (SoA layout)
    pub ys: Vec<f32>,
    /// Z coordinates (SoA layout)
    pub zs: Vec<f32>,
}

impl PointCloud {
    /// Create an empty point cloud.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty point cloud with pre-allocated capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            xs: Vec::with_capacity(capacity),
            ys: Vec::with_capacity(capacity),
            zs: Vec::with_capacity(capacity),
        }
    }

    /// Append a point.
    #[inline]
    pub fn push(&mut self, x: f32, y: f32, z: f32) {
        self.xs.push(x);
        self.ys.push(y);
        self.zs.push(z);
    }

    /// Number of points.
    #[inline]
    pub fn len(&self) -> usize {
        self.xs.len()
    }

    /// Check if the cloud is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }

    /// Point at index as an (x, y, z) tuple.
    ///
    /// # Panics
    /// Panics if the index is out of bounds.
    #[inline]
    pub fn point(&self, i: usize) -> (f32, f32, f32) {
        (self.xs[i], self.ys[i], self.zs[i])
    }

    /// Iterate over (x, y, z) tuples in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (f32, f32, f32)> + '_ {
        (0..self.len()).map(move |i| self.point(i))
    }

    /// Axis-aligned bounds of the x-y plane: ((min_x, min_y), (max_x, max_y)).
    ///
    /// Returns None for an empty cloud.
    pub fn planar_bounds(&self) -> Option<((f32, f32), (f32, f32))> {
        if self.is_empty() {
            return None;
        }
        let mut min_x = f32::MAX;
        let mut min_y = f32::MAX;
        let mut max_x = f32::MIN;
        let mut max_y = f32::MIN;
        for i in 0..self.len() {
            min_x = min_x.min(self.xs[i]);
            max_x = max_x.max(self.xs[i]);
            min_y = min_y.min(self.ys[i]);
            max_y = max_y.max(self.ys[i]);
        }
        Some(((min_x, min_y), (max_x, max_y)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_index() {
        let mut cloud = PointCloud::new();
        assert!(cloud.is_empty());

        cloud.push(1.0, 2.0, 3.0);
        cloud.push(-1.0, 0.5, 0.0);

        assert_eq!(cloud.len(), 2);
        assert_eq!(cloud.point(0), (1.0, 2.0, 3.0));
        assert_eq!(cloud.point(1), (-1.0, 0.5, 0.0));
    }

    #[test]
    fn test_iter_order() {
        let mut cloud = PointCloud::with_capacity(3);
        cloud.push(0.0, 0.0, 0.0);
        cloud.push(1.0, 1.0, 1.0);
        cloud.push(2.0, 2.0, 2.0);

        let xs: Vec<f32> = cloud.iter().map(|(x, _, _)| x).collect();
        assert_eq!(xs, vec![0.0, 1.0, 2.0]);
    }

    #[test]
    fn test_planar_bounds() {
        let mut cloud = PointCloud::new();
        assert!(cloud.planar_bounds().is_none());

        cloud.push(-2.0, 1.0, 0.0);
        cloud.push(3.0, -4.0, 0.0);
        let ((min_x, min_y), (max_x, max_y)) = cloud.planar_bounds().unwrap();
        assert_eq!((min_x, min_y), (-2.0, -4.0));
        assert_eq!((max_x, max_y), (3.0, 1.0));
    }
}
