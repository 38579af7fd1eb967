//! The simulation engine: three eviction policies sharing one result shape.
//!
//! # Components
//! - [`Policy`] - Selects one of the three replacement policies
//! - [`run`] / [`run_all`] - Validating entry points
//! - [`SimulationResult`] / [`Step`] / [`Performance`] - The result shape
//!
//! Each policy run is a pure, deterministic computation over its inputs:
//! no I/O, no shared state, no dependence on wall-clock time. Policies do
//! not interact, so callers may evaluate them in any order (or in parallel)
//! against the same `(refs, frame_count)` pair.

mod fifo;
mod lru;
mod optimal;
mod result;

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::common::{Error, Page, Result};

pub use result::{Performance, SimulationResult, Step};

/// A page replacement policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Policy {
    /// First-In First-Out: evict in insertion order.
    Fifo,
    /// Least Recently Used: evict the entry untouched longest.
    Lru,
    /// Belady's optimal: evict the entry with the farthest (or no) next use.
    Optimal,
}

impl Policy {
    /// Every policy, in presentation order.
    pub const ALL: [Policy; 3] = [Policy::Fifo, Policy::Lru, Policy::Optimal];

    /// Human-readable policy name.
    pub fn name(&self) -> &'static str {
        match self {
            Policy::Fifo => "First-In First-Out (FIFO)",
            Policy::Lru => "Least Recently Used (LRU)",
            Policy::Optimal => "Optimal",
        }
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Policy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "fifo" => Ok(Policy::Fifo),
            "lru" => Ok(Policy::Lru),
            "optimal" | "opt" => Ok(Policy::Optimal),
            _ => Err(Error::NoPolicySelected),
        }
    }
}

/// Run one policy against a reference sequence.
///
/// Inputs are validated at entry: an empty sequence or a zero frame count is
/// rejected before any simulation state exists. The display ceiling on the
/// frame count is *not* enforced here (see [`crate::input`]); it is a
/// presentation policy, not an engine invariant.
///
/// # Errors
/// - [`Error::EmptySequence`] if `refs` is empty
/// - [`Error::InvalidFrameCount`] if `frame_count` is zero
///
/// # Example
/// ```
/// use framesim::{sim, Page, Policy};
///
/// let refs: Vec<Page> = [1, 2, 1].iter().map(|&p| Page::new(p)).collect();
/// let result = sim::run(Policy::Lru, &refs, 2).unwrap();
/// assert_eq!(result.page_faults, 2);
/// ```
pub fn run(policy: Policy, refs: &[Page], frame_count: usize) -> Result<SimulationResult> {
    if refs.is_empty() {
        return Err(Error::EmptySequence);
    }
    if frame_count == 0 {
        return Err(Error::InvalidFrameCount(frame_count));
    }

    Ok(match policy {
        Policy::Fifo => fifo::simulate(refs, frame_count),
        Policy::Lru => lru::simulate(refs, frame_count),
        Policy::Optimal => optimal::simulate(refs, frame_count),
    })
}

/// Run several policies against the identical inputs.
///
/// Results come back in the order the policies were requested; each one is
/// independent, as if produced by a lone [`run`] call.
///
/// # Errors
/// - [`Error::NoPolicySelected`] if `policies` is empty
/// - Everything [`run`] can return
pub fn run_all(
    policies: &[Policy],
    refs: &[Page],
    frame_count: usize,
) -> Result<Vec<SimulationResult>> {
    if policies.is_empty() {
        return Err(Error::NoPolicySelected);
    }

    policies
        .iter()
        .map(|&policy| run(policy, refs, frame_count))
        .collect()
}

/// Run the FIFO policy. Shorthand for `run(Policy::Fifo, ..)`.
pub fn simulate_fifo(refs: &[Page], frame_count: usize) -> Result<SimulationResult> {
    run(Policy::Fifo, refs, frame_count)
}

/// Run the LRU policy. Shorthand for `run(Policy::Lru, ..)`.
pub fn simulate_lru(refs: &[Page], frame_count: usize) -> Result<SimulationResult> {
    run(Policy::Lru, refs, frame_count)
}

/// Run the Optimal policy. Shorthand for `run(Policy::Optimal, ..)`.
pub fn simulate_optimal(refs: &[Page], frame_count: usize) -> Result<SimulationResult> {
    run(Policy::Optimal, refs, frame_count)
}
