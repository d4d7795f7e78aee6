//! Fixed angular partition of the forward half-circle.

use serde::{Deserialize, Serialize};

/// Width of one angular slice in degrees.
pub const SLICE_WIDTH_DEG: f32 = 10.0;

/// Number of slices partitioning [0°, 180°).
pub const SLICE_COUNT: usize = 18;

/// Half-open angular interval `[low, high)` in degrees.
///
/// The 18 slices returned by [`half_circle_slices`] partition [0°, 180°)
/// exactly: non-overlapping, fixed at construction, 10° wide each.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AngularSlice {
    /// Inclusive lower bound in degrees
    pub low_deg: f32,
    /// Exclusive upper bound in degrees
    pub high_deg: f32,
}

impl AngularSlice {
    /// Midpoint angle in degrees.
    #[inline]
    pub fn midpoint_deg(&self) -> f32 {
        (self.low_deg + self.high_deg) / 2.0
    }

    /// Midpoint angle in radians.
    #[inline]
    pub fn midpoint_rad(&self) -> f32 {
        self.midpoint_deg().to_radians()
    }

    /// Whether an angle in degrees falls in `[low, high)`.
    #[inline]
    pub fn contains(&self, angle_deg: f32) -> bool {
        angle_deg >= self.low_deg && angle_deg < self.high_deg
    }
}

/// The fixed 18-slice partition of [0°, 180°), in increasing angle order.
pub fn half_circle_slices() -> [AngularSlice; SLICE_COUNT] {
    let mut slices = [AngularSlice {
        low_deg: 0.0,
        high_deg: 0.0,
    }; SLICE_COUNT];
    for (i, slice) in slices.iter_mut().enumerate() {
        slice.low_deg = i as f32 * SLICE_WIDTH_DEG;
        slice.high_deg = (i + 1) as f32 * SLICE_WIDTH_DEG;
    }
    slices
}

/// Slice index for a planar angle normalized to [0, 360).
///
/// Angles in the rear half-circle [180°, 360°) belong to no slice and
/// return None.
#[inline]
pub fn slice_index(angle_deg: f32) -> Option<usize> {
    if !(0.0..180.0).contains(&angle_deg) {
        return None;
    }
    let idx = (angle_deg / SLICE_WIDTH_DEG) as usize;
    Some(idx.min(SLICE_COUNT - 1))
}

/// Projection score of one slice for a single estimation request.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SliceScore {
    /// The scored slice
    pub slice: AngularSlice,
    /// Sum of squared projected lengths of the selected points
    pub score: f32,
    /// Number of points whose planar angle fell in the slice
    pub point_count: usize,
}
