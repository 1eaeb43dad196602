//! Leaf nodes — the points where a tree touches the world.

use crate::{Agent, BehaviorNode, Status, TickContext};

// ── Action ────────────────────────────────────────────────────────────────────

/// A leaf that performs a domain effect and reports how it went.
///
/// The effect is an arbitrary closure over the agent and tick context.  The
/// closure is `Fn` (not `FnMut`): any state it needs to change belongs on
/// the agent it receives, keeping the node itself shareable.
///
/// ```rust,ignore
/// let advance = Action::new(|agent, _ctx| {
///     match agent.blackboard.waypoints.first().copied() {
///         Some(wp) => {
///             agent.blackboard.position = wp;
///             agent.blackboard.waypoints.remove(0);
///             Status::Success
///         }
///         None => Status::Failure,
///     }
/// });
/// ```
pub struct Action {
    effect: Box<dyn Fn(&mut Agent, &TickContext<'_>) -> Status + Send + Sync>,
}

impl Action {
    pub fn new(
        effect: impl Fn(&mut Agent, &TickContext<'_>) -> Status + Send + Sync + 'static,
    ) -> Self {
        Self { effect: Box::new(effect) }
    }
}

impl BehaviorNode for Action {
    fn tick(&self, agent: &mut Agent, ctx: &TickContext<'_>) -> Status {
        (self.effect)(agent, ctx)
    }
}

// ── Condition ─────────────────────────────────────────────────────────────────

/// A pure predicate leaf: no side effects, `true` maps to `Success`.
pub struct Condition {
    predicate: Box<dyn Fn(&Agent, &TickContext<'_>) -> bool + Send + Sync>,
}

impl Condition {
    pub fn new(
        predicate: impl Fn(&Agent, &TickContext<'_>) -> bool + Send + Sync + 'static,
    ) -> Self {
        Self { predicate: Box::new(predicate) }
    }
}

impl BehaviorNode for Condition {
    fn tick(&self, agent: &mut Agent, ctx: &TickContext<'_>) -> Status {
        Status::from((self.predicate)(agent, ctx))
    }
}

// ── Chance ────────────────────────────────────────────────────────────────────

/// Succeeds with probability `p`, drawn from the agent's own RNG.
///
/// Because the draw comes from the per-agent
/// [`DecisionRng`][npc_core::DecisionRng], the outcome sequence for a given agent is
/// reproducible across runs and independent of thread scheduling.
pub struct Chance {
    p: f64,
}

impl Chance {
    /// `p` is clamped to [0, 1] at draw time.
    pub fn new(p: f64) -> Self {
        Self { p }
    }
}

impl BehaviorNode for Chance {
    fn tick(&self, agent: &mut Agent, _ctx: &TickContext<'_>) -> Status {
        Status::from(agent.rng.gen_bool(self.p))
    }
}

// ── PlanRoute ─────────────────────────────────────────────────────────────────

/// Requests a path from the agent's current position to its blackboard
/// target and stores the waypoints back on the blackboard.
///
/// Fails when no target is set or when the pathfinder rejects the input
/// (non-finite coordinates).
pub struct PlanRoute;

impl BehaviorNode for PlanRoute {
    fn tick(&self, agent: &mut Agent, ctx: &TickContext<'_>) -> Status {
        let Some(target) = agent.blackboard.target else {
            return Status::Failure;
        };
        match ctx.paths.find_path(agent.blackboard.position, target) {
            Ok(waypoints) => {
                agent.blackboard.waypoints = waypoints;
                Status::Success
            }
            Err(_) => Status::Failure,
        }
    }
}
