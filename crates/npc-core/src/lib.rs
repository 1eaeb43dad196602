//! `npc-core` — foundational types for the `npc_ai` agent framework.
//!
//! This crate is a dependency of every other `npc-*` crate.  It intentionally
//! has no `npc-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module     | Contents                                      |
//! |------------|-----------------------------------------------|
//! | [`ids`]    | `AgentId`                                     |
//! | [`point`]  | `Point3`, lerp and distance helpers           |
//! | [`tier`]   | `PathTier` enum                               |
//! | [`config`] | `SchedConfig`                                 |
//! | [`rng`]    | `DecisionRng` (per-agent deterministic RNG)   |
//! | [`error`]  | `CoreError`, `CoreResult`                     |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod config;
pub mod error;
pub mod ids;
pub mod point;
pub mod rng;
pub mod tier;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::SchedConfig;
pub use error::{CoreError, CoreResult};
pub use ids::AgentId;
pub use point::Point3;
pub use rng::DecisionRng;
pub use tier::PathTier;
