//! The `Agent` — identity, tree binding, and decision cadence state.

use std::sync::Arc;

use npc_core::{AgentId, DecisionRng};

use crate::{Blackboard, BehaviorTree, Status, TickContext};

/// An entity that periodically makes decisions via a bound behavior tree.
///
/// An agent carries a caller-assigned identity, an optional display name, at
/// most one tree binding, a private elapsed-time accumulator driving its
/// decision cadence, and the per-agent mutable state nodes operate on (a
/// [`Blackboard`] and a [`DecisionRng`]).
///
/// Binding a tree is the caller's explicit responsibility — registering a
/// tree with the scheduler never binds it to anyone.  An unbound agent
/// accumulates time like any other but performs no decisions.
pub struct Agent {
    id:             AgentId,
    name:           Option<String>,
    tree:           Option<Arc<BehaviorTree>>,
    since_decision: f32,

    /// Working memory read and written by behavior nodes.
    pub blackboard: Blackboard,

    /// Deterministic per-agent RNG for stochastic nodes.
    pub rng: DecisionRng,
}

impl Agent {
    /// Create an agent seeded from its ID alone (global seed 0).
    pub fn new(id: AgentId) -> Self {
        Self::with_seed(id, 0)
    }

    /// Create an agent whose RNG is seeded from `(global_seed, id)`.
    pub fn with_seed(id: AgentId, global_seed: u64) -> Self {
        Self {
            id,
            name:           None,
            tree:           None,
            since_decision: 0.0,
            blackboard:     Blackboard::default(),
            rng:            DecisionRng::new(global_seed, id),
        }
    }

    /// Attach a display name (builder style).
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[inline]
    pub fn id(&self) -> AgentId {
        self.id
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Bind this agent to `tree`.  Replaces any previous binding.
    pub fn bind_tree(&mut self, tree: Arc<BehaviorTree>) {
        self.tree = Some(tree);
    }

    pub fn tree(&self) -> Option<&Arc<BehaviorTree>> {
        self.tree.as_ref()
    }

    /// Seconds accumulated toward the next decision.
    #[inline]
    pub fn accumulated(&self) -> f32 {
        self.since_decision
    }

    /// Advance the decision clock by `dt` seconds against `cadence`.
    ///
    /// When the accumulator reaches the cadence it resets to exactly zero —
    /// the remainder is dropped, so decisions snap to the cadence rather
    /// than drift-correcting.  The reset happens whether or not a tree is
    /// bound; only a bound agent actually executes and returns an outcome.
    pub fn advance(&mut self, dt: f32, cadence: f32, ctx: &TickContext<'_>) -> Option<Status> {
        self.since_decision += dt;
        if self.since_decision < cadence {
            return None;
        }
        self.since_decision = 0.0;

        // Clone the Arc so the tree borrow ends before we hand out &mut self.
        let tree = self.tree.clone()?;
        Some(tree.execute(self, ctx))
    }
}
