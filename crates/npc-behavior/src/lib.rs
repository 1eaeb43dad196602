//! `npc-behavior` — behavior trees and the agents they drive.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                   |
//! |---------------|------------------------------------------------------------|
//! | [`status`]    | `Status` — success/failure outcome                         |
//! | [`node`]      | `BehaviorNode` trait                                       |
//! | [`context`]   | `TickContext<'a>` — read-only per-tick services            |
//! | [`leaf`]      | `Action`, `Condition`, `Chance`, `PlanRoute`               |
//! | [`composite`] | `Sequence`, `Selector`                                     |
//! | [`tree`]      | `BehaviorTree` — named wrapper around a root node          |
//! | [`agent`]     | `Agent` — identity, tree binding, decision accumulator     |
//! | [`blackboard`]| `Blackboard` — per-agent working memory                    |
//!
//! # Design notes
//!
//! Nodes are stateless strategy objects: every `tick` call receives the
//! agent it is deciding for, and all per-invocation memory lives on that
//! agent (its [`Blackboard`] and [`DecisionRng`][npc_core::DecisionRng]).
//! This is what lets a single `Arc<BehaviorTree>` be shared by an arbitrary
//! number of agents — including across worker threads during a parallel
//! scheduler tick.

pub mod agent;
pub mod blackboard;
pub mod composite;
pub mod context;
pub mod leaf;
pub mod node;
pub mod status;
pub mod tree;


pub use agent::Agent;
pub use blackboard::Blackboard;
pub use composite::{Selector, Sequence};
pub use context::TickContext;
pub use leaf::{Action, Chance, Condition, PlanRoute};
pub use node::BehaviorNode;
pub use status::Status;
pub use tree::BehaviorTree;
