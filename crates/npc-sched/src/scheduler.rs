//! The `Scheduler` — agent registry, per-tick budget, and path facade.

use std::sync::Arc;

use npc_behavior::{Agent, BehaviorTree, TickContext};
use npc_core::{AgentId, Point3, SchedConfig};
use npc_path::{PathResult, Pathfinder};

use crate::{SchedError, SchedResult};

#[cfg(feature = "fx-hash")]
use rustc_hash::FxHashMap as IndexMap;
#[cfg(not(feature = "fx-hash"))]
use std::collections::HashMap as IndexMap;

/// Drives per-tick decision-making for a registry of agents under a bounded
/// processing budget.
///
/// The scheduler is a plain value — construct one, hand it to whatever owns
/// the tick loop, and call [`update`][Scheduler::update] once per host tick.
/// There is no global instance; tests build their own.
///
/// # Ordering
///
/// Agents are processed in **registration order**.  With the default config
/// the per-tick window always starts at the head of the registry, so agents
/// past the cap never advance — the documented cap-from-head behavior.
/// Setting [`SchedConfig::fair_rotation`] rotates the window start each tick
/// instead, serving every agent round-robin.  Both modes are deterministic.
pub struct Scheduler {
    config: SchedConfig,
    agents: Vec<Agent>,
    index:  IndexMap<AgentId, usize>,
    trees:  Vec<Arc<BehaviorTree>>,
    paths:  Pathfinder,
    cursor: usize,
}

impl Scheduler {
    /// A scheduler running on built-in defaults (`SchedConfig::default()`),
    /// so `update` is safe to call without an explicit `configure`.
    pub fn new() -> Self {
        let config = SchedConfig::default();
        Self {
            paths:  Pathfinder::new(config.tier),
            config,
            agents: Vec::new(),
            index:  IndexMap::default(),
            trees:  Vec::new(),
            cursor: 0,
        }
    }

    /// A scheduler starting from a validated config.
    pub fn with_config(config: SchedConfig) -> SchedResult<Self> {
        let mut sched = Self::new();
        sched.configure(config)?;
        Ok(sched)
    }

    // ── Configuration ─────────────────────────────────────────────────────

    /// Replace the active configuration and re-initialize the pathfinding
    /// tier.  Re-callable mid-run; takes effect on the next `update`.
    pub fn configure(&mut self, config: SchedConfig) -> SchedResult<()> {
        config.validate()?;
        self.paths.set_tier(config.tier);
        self.config = config;
        Ok(())
    }

    pub fn config(&self) -> &SchedConfig {
        &self.config
    }

    // ── Registration ──────────────────────────────────────────────────────

    /// Insert `agent` into the registry, keyed by its identity.
    ///
    /// Idempotent, not an error: if the identity is already registered the
    /// call is a no-op returning `false` and the original agent is kept.
    pub fn register_agent(&mut self, agent: Agent) -> bool {
        if self.index.contains_key(&agent.id()) {
            return false;
        }
        self.index.insert(agent.id(), self.agents.len());
        self.agents.push(agent);
        true
    }

    /// Append `tree` to the tree collection.
    ///
    /// Unconditional: duplicate names are permitted.  Trees are never
    /// auto-bound to agents — bind explicitly via [`Agent::bind_tree`].
    pub fn register_tree(&mut self, tree: Arc<BehaviorTree>) {
        self.trees.push(tree);
    }

    /// The first registered tree with the given name, if any.
    ///
    /// Names are not unique; when duplicates exist the earliest registration
    /// wins.
    pub fn tree_by_name(&self, name: &str) -> Option<&Arc<BehaviorTree>> {
        self.trees.iter().find(|t| t.name() == name)
    }

    pub fn trees(&self) -> &[Arc<BehaviorTree>] {
        &self.trees
    }

    pub fn agent_count(&self) -> usize {
        self.agents.len()
    }

    pub fn agent(&self, id: AgentId) -> Option<&Agent> {
        self.index.get(&id).map(|&i| &self.agents[i])
    }

    pub fn agent_mut(&mut self, id: AgentId) -> Option<&mut Agent> {
        self.index.get(&id).map(|&i| &mut self.agents[i])
    }

    /// All agents in registration order.
    pub fn agents(&self) -> &[Agent] {
        &self.agents
    }

    // ── Tick processing ───────────────────────────────────────────────────

    /// Advance the decision clocks of up to `max_agents_per_update` agents
    /// by `dt` seconds and execute the trees of those that reach the
    /// decision cadence.
    ///
    /// Returns the number of tree executions this tick.  `dt` must be
    /// finite and ≥ 0 (a zero `dt` is a valid no-progress tick).
    pub fn update(&mut self, dt: f32) -> SchedResult<usize> {
        if !dt.is_finite() || dt < 0.0 {
            return Err(SchedError::BadDelta(dt));
        }

        let len = self.agents.len();
        let n = self.config.max_agents_per_update.min(len);
        let start = if self.config.fair_rotation && len > 0 {
            self.cursor % len
        } else {
            0
        };

        let decided = if n == 0 {
            0
        } else {
            let cadence = self.config.decision_rate_secs;
            let ctx = TickContext::new(dt, &self.paths);

            // The window may wrap past the end of the registry under
            // rotation; split it into at most two contiguous slices.
            let first_len = n.min(len - start);
            let wrap_len = n - first_len;
            let (head, tail) = self.agents.split_at_mut(start);
            let first = &mut tail[..first_len];
            let wrapped = &mut head[..wrap_len];

            advance_window(first, wrapped, dt, cadence, &ctx, self.config.parallel)
        };

        self.paths.drain_pending();

        if self.config.fair_rotation && len > 0 {
            self.cursor = (start + n) % len;
        }
        Ok(decided)
    }

    // ── Pathfinding facade ────────────────────────────────────────────────

    /// Synchronous path request against the owned pathfinding service.
    pub fn request_path(&self, start: Point3, end: Point3) -> PathResult<Vec<Point3>> {
        self.paths.find_path(start, end)
    }

    /// The owned pathfinding service (read-only).
    pub fn paths(&self) -> &Pathfinder {
        &self.paths
    }
}

impl Default for Scheduler {
    fn default() -> Self {
        Self::new()
    }
}

// ── Window advancement ────────────────────────────────────────────────────────

/// Advance every agent in the (possibly wrapped) window and count the tree
/// executions.
///
/// Agents are update-independent within a tick, so with the `parallel`
/// feature and `use_parallel` set the two slices fan out over Rayon.  The
/// count comes back through a sum reduction, so the total is deterministic
/// either way.
fn advance_window(
    first:        &mut [Agent],
    wrapped:      &mut [Agent],
    dt:           f32,
    cadence:      f32,
    ctx:          &TickContext<'_>,
    use_parallel: bool,
) -> usize {
    #[cfg(feature = "parallel")]
    {
        if use_parallel {
            use rayon::prelude::*;
            return first
                .par_iter_mut()
                .chain(wrapped.par_iter_mut())
                .map(|agent| usize::from(agent.advance(dt, cadence, ctx).is_some()))
                .sum();
        }
    }
    #[cfg(not(feature = "parallel"))]
    let _ = use_parallel;

    let mut decided = 0;
    for agent in first.iter_mut().chain(wrapped.iter_mut()) {
        if agent.advance(dt, cadence, ctx).is_some() {
            decided += 1;
        }
    }
    decided
}
