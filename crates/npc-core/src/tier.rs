//! Pathfinding quality tier.

use std::fmt;

/// Quality level of the pathfinding service.
///
/// The tier controls waypoint density only — see `npc-path` for the exact
/// output of each tier.  `Basic` is the default and the fallback for an
/// unset tier.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PathTier {
    #[default]
    Basic,
    Advanced,
    NavMesh,
}

impl fmt::Display for PathTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PathTier::Basic    => "basic",
            PathTier::Advanced => "advanced",
            PathTier::NavMesh  => "navmesh",
        };
        f.write_str(s)
    }
}
