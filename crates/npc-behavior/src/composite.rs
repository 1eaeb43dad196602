//! Composite nodes — `Sequence` and `Selector`.
//!
//! Both execute their children in declared order and short-circuit; child
//! order is significant and preserved exactly as the tree was built.

use crate::{Agent, BehaviorNode, Status, TickContext};

/// Runs children in order; fails on the first child failure.
///
/// Returns `Success` only if every child succeeds.  An empty sequence
/// succeeds vacuously.
pub struct Sequence {
    children: Vec<Box<dyn BehaviorNode>>,
}

impl Sequence {
    pub fn new(children: Vec<Box<dyn BehaviorNode>>) -> Self {
        Self { children }
    }
}

impl BehaviorNode for Sequence {
    fn tick(&self, agent: &mut Agent, ctx: &TickContext<'_>) -> Status {
        for child in &self.children {
            if child.tick(agent, ctx).is_failure() {
                return Status::Failure;
            }
        }
        Status::Success
    }
}

/// Runs children in order; succeeds on the first child success.
///
/// Returns `Failure` only if every child fails.  An empty selector fails
/// vacuously.
pub struct Selector {
    children: Vec<Box<dyn BehaviorNode>>,
}

impl Selector {
    pub fn new(children: Vec<Box<dyn BehaviorNode>>) -> Self {
        Self { children }
    }
}

impl BehaviorNode for Selector {
    fn tick(&self, agent: &mut Agent, ctx: &TickContext<'_>) -> Status {
        for child in &self.children {
            if child.tick(agent, ctx).is_success() {
                return Status::Success;
            }
        }
        Status::Failure
    }
}
