//! The `BehaviorTree` wrapper.

use crate::{Agent, BehaviorNode, Status, TickContext};

/// A named, rooted composition of behavior nodes executed as a unit.
///
/// The tree has no state of its own beyond its name and root reference, so
/// one `Arc<BehaviorTree>` can be bound to any number of agents.  Names are
/// not required to be unique; the scheduler stores trees append-only.
pub struct BehaviorTree {
    name: String,
    root: Box<dyn BehaviorNode>,
}

impl BehaviorTree {
    pub fn new(name: impl Into<String>, root: Box<dyn BehaviorNode>) -> Self {
        Self { name: name.into(), root }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Execute the tree for `agent`: delegates to the root node and returns
    /// its outcome.
    pub fn execute(&self, agent: &mut Agent, ctx: &TickContext<'_>) -> Status {
        self.root.tick(agent, ctx)
    }
}
