//! Simulation results: per-step trace records and aggregate statistics.

use std::fmt;

use serde::Serialize;

use crate::common::Page;
use crate::sim::Policy;

/// One simulated-time record.
///
/// `frames` is a value snapshot of the frame pool taken after the step's
/// mutation (if any). Later mutation of the live pool never changes an
/// emitted step, which is what makes the trace replayable.
///
/// Empty slots are `None`; FIFO emits them for slots not yet filled, while
/// LRU and Optimal only emit occupied slots (padding for display is a report
/// concern, not an engine invariant).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Step {
    /// The page referenced at this step.
    pub page: Page,

    /// Frame pool snapshot, in policy-specific order (see the simulators).
    pub frames: Vec<Option<Page>>,

    /// Whether this reference faulted.
    pub fault: bool,
}

/// Qualitative rating of a policy run, derived from its fault ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Performance {
    Excellent,
    Good,
    Average,
    Poor,
}

impl Performance {
    /// Classify a run by fault ratio `page_faults / reference_count`.
    ///
    /// Band boundaries are inclusive on the lower side: a ratio of exactly
    /// 0.30 is Excellent and exactly 0.50 is Good.
    ///
    /// # Example
    /// ```
    /// use framesim::Performance;
    ///
    /// assert_eq!(Performance::rating(3, 10), Performance::Excellent);
    /// assert_eq!(Performance::rating(9, 10), Performance::Poor);
    /// ```
    pub fn rating(page_faults: usize, reference_count: usize) -> Self {
        let ratio = page_faults as f64 / reference_count as f64;
        if ratio <= 0.3 {
            Performance::Excellent
        } else if ratio <= 0.5 {
            Performance::Good
        } else if ratio <= 0.7 {
            Performance::Average
        } else {
            Performance::Poor
        }
    }
}

impl fmt::Display for Performance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Performance::Excellent => "Excellent",
            Performance::Good => "Good",
            Performance::Average => "Average",
            Performance::Poor => "Poor",
        };
        write!(f, "{}", label)
    }
}

/// The complete outcome of one policy run.
///
/// Fully computed in one pass and immutable after return; running the same
/// policy twice on identical inputs yields an equal result.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimulationResult {
    /// Which policy produced this result.
    pub policy: Policy,

    /// Number of steps that faulted.
    pub page_faults: usize,

    /// Length of the reference sequence.
    pub reference_count: usize,

    /// Percentage of references that were hits, in `0..=100`.
    pub hit_ratio: f64,

    /// The full replayable trace, one step per reference, in reference order.
    pub steps: Vec<Step>,

    /// Qualitative rating of the run.
    pub performance: Performance,
}

impl SimulationResult {
    /// Assemble a result from a finished trace.
    ///
    /// Shared by all simulators so the derived statistics are computed in
    /// exactly one place.
    pub(crate) fn assemble(policy: Policy, page_faults: usize, steps: Vec<Step>) -> Self {
        let reference_count = steps.len();
        let hit_ratio = (reference_count - page_faults) as f64 / reference_count as f64 * 100.0;

        Self {
            policy,
            page_faults,
            reference_count,
            hit_ratio,
            steps,
            performance: Performance::rating(page_faults, reference_count),
        }
    }
}
