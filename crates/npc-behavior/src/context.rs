//! Read-only services passed to every behavior node.

use npc_path::Pathfinder;

/// Per-tick view of the scheduler's services, handed to every node `tick`.
///
/// Built once per `update` call and shared (immutably) across all agents
/// processed that tick, including across Rayon workers when the scheduler
/// runs in parallel.  Anything a node must mutate belongs on the `Agent`
/// it receives alongside this context.
pub struct TickContext<'a> {
    /// Delta time of the current host tick, in seconds.
    pub dt: f32,

    /// The scheduler's pathfinding service.  Queries are synchronous and
    /// side-effect free.
    pub paths: &'a Pathfinder,
}

impl<'a> TickContext<'a> {
    #[inline]
    pub fn new(dt: f32, paths: &'a Pathfinder) -> Self {
        Self { dt, paths }
    }
}
