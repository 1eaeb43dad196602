//! The `BehaviorNode` trait — the polymorphic execution unit of a tree.

use crate::{Agent, Status, TickContext};

/// A single unit of decision logic.
///
/// Concrete nodes are either leaves ([`Action`][crate::Action],
/// [`Condition`][crate::Condition], …) or composites
/// ([`Sequence`][crate::Sequence], [`Selector`][crate::Selector]) that own
/// children and combine their outcomes.
///
/// # Statelessness
///
/// Implementations must hold no per-invocation mutable state: `tick` takes
/// `&self`, and for the same agent state and children outcomes it must
/// return the same `Status`.  Memory that varies per agent lives on the
/// [`Agent`] (its blackboard and RNG), which is what makes one tree safe to
/// share across many agents.
///
/// # Termination
///
/// Trees are rooted, finite, and acyclic; a `tick` call must always
/// terminate.  No node may loop without bound.
///
/// # Thread safety
///
/// The scheduler may tick agents in parallel, so nodes must be
/// `Send + Sync`.
pub trait BehaviorNode: Send + Sync {
    /// Execute this node for `agent`.
    fn tick(&self, agent: &mut Agent, ctx: &TickContext<'_>) -> Status;
}
