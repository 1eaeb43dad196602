//! Strongly typed agent identifier.
//!
//! `AgentId` is `Copy + Ord + Hash` so it can be used as a map key and sorted
//! without ceremony.  The inner integer is `pub` to let callers mint IDs from
//! whatever numbering scheme the host uses; prefer `.index()` when the value
//! is used as a `Vec` index.

use std::fmt;

/// Caller-assigned identity of an agent.
///
/// The scheduler keys its registry by `AgentId`; an ID is never reassigned
/// for the lifetime of the registry.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AgentId(pub u32);

impl AgentId {
    /// Cast to `usize` for direct use as a `Vec` index.
    #[inline(always)]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for AgentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AgentId({})", self.0)
    }
}

impl From<u32> for AgentId {
    #[inline(always)]
    fn from(n: u32) -> AgentId {
        AgentId(n)
    }
}
