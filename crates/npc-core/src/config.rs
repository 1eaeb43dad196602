//! Scheduler configuration.

use crate::{CoreError, CoreResult, PathTier};

/// Configuration for the agent scheduler.
///
/// The defaults are safe to run with: a scheduler that was never explicitly
/// configured behaves as if `SchedConfig::default()` had been applied
/// (0.5 s decision cadence, 50 agents per tick, basic pathfinding).
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SchedConfig {
    /// Quality tier handed to the pathfinding service on (re)configure.
    pub tier: PathTier,

    /// Minimum seconds between successive behavior-tree executions for one
    /// agent.  Must be finite and > 0.
    pub decision_rate_secs: f32,

    /// Maximum number of agents whose decision clock advances in a single
    /// `update` call.  Must be > 0.
    pub max_agents_per_update: usize,

    /// Fan agent updates out over Rayon workers.
    ///
    /// Only honored when the `parallel` Cargo feature of `npc-sched` is
    /// compiled in; otherwise updates stay sequential.
    pub parallel: bool,

    /// Rotate the per-tick starting offset through the registry so agents
    /// beyond the processing cap are not starved.
    ///
    /// Off by default: the default preserves the documented cap-from-head
    /// behavior, where the first `max_agents_per_update` registered agents
    /// win every tick.
    pub fair_rotation: bool,
}

impl Default for SchedConfig {
    fn default() -> Self {
        Self {
            tier:                  PathTier::Basic,
            decision_rate_secs:    0.5,
            max_agents_per_update: 50,
            parallel:              false,
            fair_rotation:         false,
        }
    }
}

impl SchedConfig {
    /// Reject configurations the scheduler cannot run with.
    pub fn validate(&self) -> CoreResult<()> {
        if !self.decision_rate_secs.is_finite() || self.decision_rate_secs <= 0.0 {
            return Err(CoreError::Config(format!(
                "decision_rate_secs must be finite and > 0, got {}",
                self.decision_rate_secs
            )));
        }
        if self.max_agents_per_update == 0 {
            return Err(CoreError::Config(
                "max_agents_per_update must be > 0".into(),
            ));
        }
        Ok(())
    }
}
