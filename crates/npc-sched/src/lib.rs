//! `npc-sched` — the tick scheduler for the `npc_ai` framework.
//!
//! # Tick shape
//!
//! ```text
//! host calls scheduler.update(dt):
//!   ① Window  — pick min(cap, agent_count) agents in registration order,
//!               from index 0 (default) or the rotation cursor (fair_rotation).
//!   ② Advance — add dt to each windowed agent's accumulator; agents whose
//!               accumulator reaches the decision cadence execute their bound
//!               tree (parallel with the `parallel` feature + config flag).
//!   ③ Drain   — call the pathfinder's pending-request hook (no-op today).
//! ```
//!
//! Agents outside the window do not advance at all that tick.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                  |
//! |------------|---------------------------------------------------------|
//! | `parallel` | Runs the agent window on Rayon's thread pool.           |
//! | `fx-hash`  | FxHash for the identity→index map (integer keys).       |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use npc_behavior::Agent;
//! use npc_core::{AgentId, SchedConfig};
//! use npc_sched::Scheduler;
//!
//! let mut sched = Scheduler::with_config(SchedConfig::default())?;
//! sched.register_agent(Agent::new(AgentId(0)));
//! loop {
//!     let decided = sched.update(frame_dt)?;
//! }
//! ```

pub mod error;
pub mod scheduler;


pub use error::{SchedError, SchedResult};
pub use scheduler::Scheduler;
