//! Depth-map-to-heading estimation.
//!
//! Lifts a depth grid into a 3-D point cloud, buckets the points into the
//! fixed slice partition by their planar angle, scores each slice by the
//! squared extent of its points projected onto the slice's vertical plane,
//! and reports the midpoint of the best slice as the most open heading.

use crate::core::cloud::PointCloud;
use crate::core::depth::DepthMap;
use crate::core::math::planar_angle_deg;
use crate::error::Result;
use crate::estimator::slices::{
    half_circle_slices, slice_index, AngularSlice, SliceScore, SLICE_COUNT,
};
use log::{debug, trace};
use serde::{Deserialize, Serialize};

/// Divisor mapping grid row/column indices to scene coordinates.
///
/// Empirical scene-scale constant. Must not change: the slice ranking is
/// calibrated against it.
pub const GRID_SCALE: f32 = 40.0;

/// Offset added to the negated depth value when building the y axis.
///
/// Empirical scene-scale constant, paired with [`GRID_SCALE`]. Depth values
/// above it drop below the forward half-circle and stop contributing.
pub const DEPTH_OFFSET: f32 = 38.0;

/// Heading reported when no slice receives any points: straight ahead.
pub const DEFAULT_DIRECTION_DEG: f32 = 90.0;

/// Lift a depth map into a 3-D point cloud, one point per grid cell.
///
/// For cell (row `r`, col `c`):
/// - `x = c / 40 − mean(all c / 40)` — zero-centered horizontal axis,
///   growing to the right (the unflipped convention)
/// - `y = −depth(r, c) + 38` — inverted depth, larger = more open
/// - `z = r / 40` — vertical axis
///
/// Points are emitted in row-major order; the scoring pass depends on that
/// order for deterministic floating-point summation.
pub fn depth_to_cloud(depth: &DepthMap) -> PointCloud {
    let width = depth.width();
    let height = depth.height();

    // The column mean over the whole grid equals the mean over one row.
    let mut col_sum = 0.0f32;
    for c in 0..width {
        col_sum += c as f32 / GRID_SCALE;
    }
    let col_mean = col_sum / width as f32;

    let mut cloud = PointCloud::with_capacity(width * height);
    for r in 0..height {
        let z = r as f32 / GRID_SCALE;
        for c in 0..width {
            let x = c as f32 / GRID_SCALE - col_mean;
            let y = -depth.value(r, c) + DEPTH_OFFSET;
            cloud.push(x, y, z);
        }
    }
    cloud
}

/// Result of one direction estimation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DirectionEstimate {
    /// Advised heading in degrees, always within [0, 180]
    pub angle_deg: f32,
    /// Index of the winning slice, None when the default heading was used
    pub winner: Option<usize>,
    /// Per-slice scores, in increasing angle order
    pub scores: Vec<SliceScore>,
}

impl DirectionEstimate {
    /// Whether the default heading was used because no slice qualified.
    #[inline]
    pub fn is_fallback(&self) -> bool {
        self.winner.is_none()
    }

    /// The winning slice, if any qualified.
    pub fn winning_slice(&self) -> Option<AngularSlice> {
        self.winner.map(|i| self.scores[i].slice)
    }

    fn fallback(scores: Vec<SliceScore>) -> Self {
        Self {
            angle_deg: DEFAULT_DIRECTION_DEG,
            winner: None,
            scores,
        }
    }
}

/// Estimates the most open direction of travel from a depth map.
///
/// Pure and stateless: the depth map comes in as a plain parameter and the
/// estimator holds no client handles or shared state, so independent
/// estimations can run concurrently. Cost is O(18·H·W) with no blocking
/// operations.
#[derive(Debug, Clone, Copy, Default)]
pub struct DirectionEstimator;

impl DirectionEstimator {
    /// Create an estimator.
    pub fn new() -> Self {
        Self
    }

    /// Estimate the most open heading for a depth map.
    ///
    /// Returns an angle in [0°, 180°]: 0° looks toward the right edge of
    /// the frame, 90° straight ahead, 180° toward the left edge. Fails with
    /// [`crate::VisionError::InvalidInput`] if the grid is empty, has a
    /// shape mismatch, or contains non-finite values; an input for which no
    /// slice qualifies resolves to [`DEFAULT_DIRECTION_DEG`] instead of an
    /// error.
    ///
    /// Deterministic for a fixed depth map, and never mutates its input.
    pub fn estimate(&self, depth: &DepthMap) -> Result<DirectionEstimate> {
        depth.validate()?;

        let cloud = depth_to_cloud(depth);
        let partition = half_circle_slices();

        // A single point has no planar extent to compare slices by; resolve
        // straight to the default heading.
        if cloud.len() < 2 {
            debug!(
                "degenerate {}x{} grid, using default heading",
                depth.height(),
                depth.width()
            );
            return Ok(DirectionEstimate::fallback(empty_scores(&partition)));
        }

        // Unit direction at each slice midpoint. Together with the vertical
        // axis it spans the slice's plane; the basis is orthonormal, so the
        // squared norm of the orthogonal projection of a point reduces to
        // the squared components along the two basis vectors.
        let mut midpoint_cos = [0.0f32; SLICE_COUNT];
        let mut midpoint_sin = [0.0f32; SLICE_COUNT];
        for (i, slice) in partition.iter().enumerate() {
            let theta = slice.midpoint_rad();
            midpoint_cos[i] = theta.cos();
            midpoint_sin[i] = theta.sin();
        }

        let mut scores = [0.0f32; SLICE_COUNT];
        let mut counts = [0usize; SLICE_COUNT];
        for i in 0..cloud.len() {
            let (x, y, z) = cloud.point(i);
            let angle = planar_angle_deg(x, y);
            if let Some(idx) = slice_index(angle) {
                let along = x * midpoint_cos[idx] + y * midpoint_sin[idx];
                scores[idx] += along * along + z * z;
                counts[idx] += 1;
            }
        }

        // Maximum score wins; strict > keeps the first-seen maximum, so on
        // ties the slice with the smaller low bound wins. Slices with no
        // points cannot win.
        let mut winner: Option<usize> = None;
        let mut best_score = 0.0f32;
        for idx in 0..SLICE_COUNT {
            if counts[idx] == 0 {
                continue;
            }
            trace!(
                "slice [{:>3}, {:>3}): {} points, score {:.4}",
                partition[idx].low_deg,
                partition[idx].high_deg,
                counts[idx],
                scores[idx]
            );
            if scores[idx] > best_score {
                best_score = scores[idx];
                winner = Some(idx);
            }
        }

        let table: Vec<SliceScore> = partition
            .iter()
            .zip(scores.iter().zip(counts.iter()))
            .map(|(slice, (&score, &point_count))| SliceScore {
                slice: *slice,
                score,
                point_count,
            })
            .collect();

        match winner {
            Some(idx) => {
                let angle_deg = partition[idx].midpoint_deg();
                debug!(
                    "winning slice [{}, {}): score {:.4} over {} points",
                    partition[idx].low_deg, partition[idx].high_deg, best_score, counts[idx]
                );
                Ok(DirectionEstimate {
                    angle_deg,
                    winner: Some(idx),
                    scores: table,
                })
            }
            None => {
                debug!("no qualifying slice, using default heading");
                Ok(DirectionEstimate::fallback(table))
            }
        }
    }
}

fn empty_scores(partition: &[AngularSlice; SLICE_COUNT]) -> Vec<SliceScore> {
    partition
        .iter()
        .map(|slice| SliceScore {
            slice: *slice,
            score: 0.0,
            point_count: 0,
        })
        .collect()
}
