//! Test utilities for direction-estimation properties.

#![allow(dead_code)]

use disha_vision::DepthMap;

/// Uniform-depth map (flat scene).
pub fn uniform_map(width: usize, height: usize, depth: f32) -> DepthMap {
    DepthMap::new(width, height, vec![depth; width * height]).unwrap()
}

/// Depth increasing linearly from left (`start`) by `step` per column.
pub fn gradient_map(width: usize, height: usize, start: f32, step: f32) -> DepthMap {
    let mut values = Vec::with_capacity(width * height);
    for _ in 0..height {
        for c in 0..width {
            values.push(start + step * c as f32);
        }
    }
    DepthMap::new(width, height, values).unwrap()
}

/// Mirror a map left-right.
pub fn mirrored(map: &DepthMap) -> DepthMap {
    let mut values = Vec::with_capacity(map.cell_count());
    for r in 0..map.height() {
        for c in (0..map.width()).rev() {
            values.push(map.value(r, c));
        }
    }
    DepthMap::new(map.width(), map.height(), values).unwrap()
}
