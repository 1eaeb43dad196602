//! Deterministic per-agent RNG wrapper.
//!
//! # Determinism strategy
//!
//! Each agent gets its own independent `SmallRng` seeded by:
//!
//!   seed = global_seed XOR (agent_id * MIXING_CONSTANT)
//!
//! The mixing constant is the 64-bit fractional part of the golden ratio,
//! which spreads consecutive agent IDs uniformly across the seed space.
//! This means:
//!
//! - Agents never share RNG state (no contention, no ordering dependency),
//!   so stochastic behavior nodes produce the same outcome sequence whether
//!   the tick ran sequentially or on a worker pool.
//! - Registering more agents does not disturb the seeds of existing ones —
//!   runs stay reproducible as populations grow.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::AgentId;

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

/// Per-agent deterministic RNG.
///
/// Lives on the `Agent` (never on a behavior node) so the same tree instance
/// can serve many agents with independent random streams.
pub struct DecisionRng(SmallRng);

impl DecisionRng {
    /// Seed deterministically from the host's global seed and an agent ID.
    pub fn new(global_seed: u64, agent: AgentId) -> Self {
        let seed = global_seed ^ (agent.0 as u64).wrapping_mul(MIXING_CONSTANT);
        DecisionRng(SmallRng::seed_from_u64(seed))
    }

    /// Sample a uniformly distributed value of any `Standard`-distributed type.
    #[inline]
    pub fn random<T>(&mut self) -> T
    where
        rand::distributions::Standard: rand::distributions::Distribution<T>,
    {
        self.0.r#gen()
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// `true` with probability `p` (clamped to [0, 1]).
    #[inline]
    pub fn gen_bool(&mut self, p: f64) -> bool {
        self.0.gen_bool(p.clamp(0.0, 1.0))
    }

    /// Choose a random element from a slice.
    /// Returns `None` if the slice is empty.
    #[inline]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.0)
    }
}
