//! Fail-soft heading advisor.
//!
//! Wires a [`DepthSource`] to the pure estimator. Estimation itself never
//! blocks; all blocking (file reads, a live model) lives behind the source,
//! which runs before the estimator is invoked. If the source fails, the
//! advisor logs the failure and falls back to the straight-ahead default
//! instead of propagating it.

use crate::error::{NavError, Result};
use crate::source::DepthSource;
use disha_vision::{DepthMap, DirectionEstimate, DirectionEstimator, DEFAULT_DIRECTION_DEG};
use tracing::{debug, warn};

/// Where an advised heading came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdviceOrigin {
    /// A slice won the projection scoring
    Estimated,
    /// Estimation ran but no slice qualified; default used
    EmptySelection,
    /// The depth source failed; default used without estimation
    UpstreamFallback,
}

/// One advised heading.
#[derive(Debug, Clone)]
pub struct DirectionAdvice {
    /// Heading in degrees, within [0, 180]
    pub angle_deg: f32,
    /// Provenance of the heading
    pub origin: AdviceOrigin,
    /// The acquired depth map, absent on upstream fallback
    pub depth: Option<DepthMap>,
    /// The full estimate, absent on upstream fallback
    pub estimate: Option<DirectionEstimate>,
}

/// Heading advisor over an injected depth source.
pub struct Guidance<S: DepthSource> {
    source: S,
    estimator: DirectionEstimator,
}

impl<S: DepthSource> Guidance<S> {
    /// Create an advisor over a depth source.
    pub fn new(source: S) -> Self {
        Self {
            source,
            estimator: DirectionEstimator::new(),
        }
    }

    /// Acquire one depth map and advise a heading.
    ///
    /// An unavailable source resolves to the default heading
    /// ([`AdviceOrigin::UpstreamFallback`]). A source that delivers a
    /// malformed grid is a contract violation and the error propagates.
    pub fn advise(&mut self) -> Result<DirectionAdvice> {
        let depth = match self.source.acquire() {
            Ok(depth) => depth,
            Err(NavError::UpstreamUnavailable(reason)) => {
                warn!(
                    source = self.source.name(),
                    %reason,
                    "depth source unavailable, advising default heading"
                );
                return Ok(DirectionAdvice {
                    angle_deg: DEFAULT_DIRECTION_DEG,
                    origin: AdviceOrigin::UpstreamFallback,
                    depth: None,
                    estimate: None,
                });
            }
            Err(e) => return Err(e),
        };

        debug!(
            source = self.source.name(),
            height = depth.height(),
            width = depth.width(),
            "acquired depth map"
        );

        let estimate = self.estimator.estimate(&depth)?;
        let origin = if estimate.is_fallback() {
            AdviceOrigin::EmptySelection
        } else {
            AdviceOrigin::Estimated
        };

        Ok(DirectionAdvice {
            angle_deg: estimate.angle_deg,
            origin,
            depth: Some(depth),
            estimate: Some(estimate),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use disha_vision::VisionError;

    struct FixedSource(Vec<Vec<f32>>);

    impl DepthSource for FixedSource {
        fn name(&self) -> &'static str {
            "fixed"
        }
        fn acquire(&mut self) -> Result<DepthMap> {
            Ok(DepthMap::from_rows(self.0.clone())?)
        }
    }

    struct FailingSource;

    impl DepthSource for FailingSource {
        fn name(&self) -> &'static str {
            "failing"
        }
        fn acquire(&mut self) -> Result<DepthMap> {
            Err(NavError::UpstreamUnavailable("model offline".into()))
        }
    }

    struct GarbageSource;

    impl DepthSource for GarbageSource {
        fn name(&self) -> &'static str {
            "garbage"
        }
        fn acquire(&mut self) -> Result<DepthMap> {
            Err(NavError::Vision(VisionError::InvalidInput(
                "jagged grid".into(),
            )))
        }
    }

    #[test]
    fn test_advise_estimates_open_scene() {
        let rows = vec![vec![20.0; 9]; 6];
        let mut guidance = Guidance::new(FixedSource(rows));

        let advice = guidance.advise().unwrap();
        assert_eq!(advice.origin, AdviceOrigin::Estimated);
        assert!((0.0..=180.0).contains(&advice.angle_deg));
        assert!(advice.depth.is_some());
        assert!(advice.estimate.is_some());
    }

    #[test]
    fn test_advise_falls_back_when_upstream_fails() {
        let mut guidance = Guidance::new(FailingSource);

        let advice = guidance.advise().unwrap();
        assert_eq!(advice.origin, AdviceOrigin::UpstreamFallback);
        assert_eq!(advice.angle_deg, DEFAULT_DIRECTION_DEG);
        assert!(advice.depth.is_none());
        assert!(advice.estimate.is_none());
    }

    #[test]
    fn test_advise_reports_empty_selection() {
        // Depth past the offset everywhere: estimation runs, no slice
        // qualifies, default heading with EmptySelection provenance.
        let rows = vec![vec![60.0; 8]; 8];
        let mut guidance = Guidance::new(FixedSource(rows));

        let advice = guidance.advise().unwrap();
        assert_eq!(advice.origin, AdviceOrigin::EmptySelection);
        assert_eq!(advice.angle_deg, DEFAULT_DIRECTION_DEG);
        assert!(advice.estimate.is_some());
    }

    #[test]
    fn test_advise_surfaces_contract_violations() {
        let mut guidance = Guidance::new(GarbageSource);
        assert!(matches!(guidance.advise(), Err(NavError::Vision(_))));
    }
}
