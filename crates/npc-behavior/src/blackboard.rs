//! Per-agent working memory.

use std::collections::HashMap;

use npc_core::Point3;

/// Mutable state a tree reads and writes while deciding for one agent.
///
/// Every agent owns its own blackboard; nodes themselves stay stateless.
/// The typed fields cover the movement loop most trees need; `facts` holds
/// whatever else the application wants to remember between decisions.
#[derive(Default)]
pub struct Blackboard {
    /// Where the agent currently is.
    pub position: Point3,

    /// Where the agent wants to go, if anywhere.
    pub target: Option<Point3>,

    /// Waypoints still to visit, in order.  Filled by
    /// [`PlanRoute`][crate::PlanRoute], consumed by movement actions.
    pub waypoints: Vec<Point3>,

    /// Free-form named values for application-defined state.
    pub facts: HashMap<String, f64>,
}

impl Blackboard {
    /// Read a fact, defaulting to 0.0 when unset.
    pub fn fact(&self, key: &str) -> f64 {
        self.facts.get(key).copied().unwrap_or(0.0)
    }

    /// Overwrite (or create) a fact.
    pub fn set_fact(&mut self, key: impl Into<String>, value: f64) {
        self.facts.insert(key.into(), value);
    }

    /// Add `delta` to a fact, creating it at 0.0 first if absent.
    pub fn add_fact(&mut self, key: impl Into<String>, delta: f64) {
        *self.facts.entry(key.into()).or_insert(0.0) += delta;
    }
}
