//! DishaVision - Depth-driven direction estimation for assisted wayfinding
//!
//! # Architecture
//!
//! The crate is organized into 3 logical layers:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │                      io/                            │  ← Infrastructure
//! │           (depth loaders, SVG audit)                │
//! └─────────────────────────────────────────────────────┘
//!                          │
//! ┌─────────────────────────────────────────────────────┐
//! │                  estimator/                         │  ← Core algorithm
//! │        (angular slices, direction scoring)          │
//! └─────────────────────────────────────────────────────┘
//!                          │
//! ┌─────────────────────────────────────────────────────┐
//! │                     core/                           │  ← Foundation
//! │              (types, angle math)                    │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Pipeline
//!
//! A monocular depth model (external to this crate) produces a [`DepthMap`]
//! for a camera frame. [`DirectionEstimator`] lifts the grid into a 3-D
//! point cloud, buckets every point into one of 18 fixed 10°-wide angular
//! slices covering the half-circle in front of the camera, scores each
//! slice by the squared extent of its points projected onto the slice's
//! vertical plane, and reports the midpoint angle of the best slice. 90°
//! means straight ahead; the same value doubles as the fail-soft default
//! when no slice receives any points.
//!
//! The estimator is a pure function over an in-memory grid: no I/O, no
//! shared state, safe to run concurrently on independent depth maps.

// ============================================================================
// Layer 1: Core foundation (no internal deps)
// ============================================================================
pub mod core;

// ============================================================================
// Layer 2: Direction estimation (depends on core)
// ============================================================================
pub mod estimator;

// ============================================================================
// Layer 3: I/O infrastructure (depends on core, estimator)
// ============================================================================
pub mod io;

mod error;

// ============================================================================
// Convenience re-exports (flat namespace for common use)
// ============================================================================

pub use crate::core::cloud::PointCloud;
pub use crate::core::depth::DepthMap;
pub use crate::core::math;
pub use crate::error::{Result, VisionError};
pub use crate::estimator::direction::{
    depth_to_cloud, DirectionEstimate, DirectionEstimator, DEFAULT_DIRECTION_DEG, DEPTH_OFFSET,
    GRID_SCALE,
};
pub use crate::estimator::slices::{
    half_circle_slices, slice_index, AngularSlice, SliceScore, SLICE_COUNT, SLICE_WIDTH_DEG,
};
pub use crate::io::svg::{SvgConfig, SvgVisualizer};
