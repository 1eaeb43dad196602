//! The `Pathfinder` service.

use npc_core::{PathTier, Point3};

use crate::{PathError, PathResult};

/// Interpolation coefficients for the intermediate waypoints of the
/// `Advanced` and `NavMesh` tiers.
///
/// The literal values 0.33 / 0.66 (not exact thirds) are part of the wire
/// behavior consumers already depend on; do not "fix" them.
const WAYPOINT_T1: f32 = 0.33;
const WAYPOINT_T2: f32 = 0.66;

/// Synchronous waypoint service.
///
/// Stateless per call: `find_path` is a pure function of
/// `(start, end, tier)`, which makes the service safe to share across
/// worker threads during a parallel agent update.  The tier only changes
/// through `&mut self`, so it cannot race in-flight queries.
pub struct Pathfinder {
    tier: PathTier,
}

impl Pathfinder {
    /// Create a service with the given quality tier.
    pub fn new(tier: PathTier) -> Self {
        Self { tier }
    }

    /// The active quality tier.
    #[inline]
    pub fn tier(&self) -> PathTier {
        self.tier
    }

    /// Replace the active tier.  Re-callable at any time; has no side
    /// effects beyond the tier swap.
    pub fn set_tier(&mut self, tier: PathTier) {
        self.tier = tier;
    }

    /// Compute the waypoint sequence from `start` to `end`.
    ///
    /// - `Basic` returns the direct segment `[start, end]`.
    /// - `Advanced` and `NavMesh` insert two interior waypoints at the
    ///   0.33 / 0.66 lerp coefficients: `[start, p1, p2, end]`.
    ///
    /// Non-finite endpoints are rejected with [`PathError::NonFinite`].
    pub fn find_path(&self, start: Point3, end: Point3) -> PathResult<Vec<Point3>> {
        if !start.is_finite() || !end.is_finite() {
            return Err(PathError::NonFinite { start, end });
        }

        let path = match self.tier {
            PathTier::Basic => vec![start, end],
            PathTier::Advanced | PathTier::NavMesh => vec![
                start,
                start.lerp(end, WAYPOINT_T1),
                start.lerp(end, WAYPOINT_T2),
                end,
            ],
        };
        Ok(path)
    }

    /// Per-tick hook called by the scheduler after agent processing.
    ///
    /// There is no pending-request queue yet, so this is a guaranteed
    /// non-blocking no-op.  It exists so an asynchronous request path can be
    /// added later without changing the scheduler's tick shape.
    pub fn drain_pending(&self) {}
}

impl Default for Pathfinder {
    /// A service at the fallback tier (`Basic`).
    fn default() -> Self {
        Self::new(PathTier::default())
    }
}
