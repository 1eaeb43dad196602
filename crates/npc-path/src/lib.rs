//! `npc-path` — tiered waypoint pathfinding for the `npc_ai` framework.
//!
//! # Crate layout
//!
//! | Module      | Contents                                |
//! |-------------|-----------------------------------------|
//! | [`planner`] | `Pathfinder` — the waypoint service     |
//! | [`error`]   | `PathError`, `PathResult<T>`            |
//!
//! # Simplification boundary
//!
//! `Pathfinder` performs no graph search, no obstacle avoidance, and no cost
//! modelling — the configured [`PathTier`][npc_core::PathTier] changes
//! waypoint density only.  An application that needs real navigation swaps in
//! its own implementation behind the same synchronous `find_path` contract.

pub mod error;
pub mod planner;

#[cfg(test)]
mod tests;

pub use error::{PathError, PathResult};
pub use planner::Pathfinder;
