//! FIFO (First-In First-Out) page replacement.

use crate::common::Page;
use crate::sim::result::{SimulationResult, Step};
use crate::sim::Policy;

/// Replay the reference sequence against a FIFO frame pool.
///
/// The pool has exactly `frame_count` slots plus a circular insertion
/// pointer. Hits never touch the pool or the pointer: eviction order is
/// strictly insertion order regardless of later accesses, which is FIFO's
/// defining property (and why it is exposed to Belady's anomaly).
///
/// Snapshots are emitted in slot order, including empty markers for slots
/// not yet filled.
pub(crate) fn simulate(refs: &[Page], frame_count: usize) -> SimulationResult {
    let mut frames: Vec<Option<Page>> = vec![None; frame_count];
    let mut pointer = 0;
    let mut page_faults = 0;
    let mut steps = Vec::with_capacity(refs.len());

    for &page in refs {
        let hit = frames.contains(&Some(page));
        if !hit {
            frames[pointer] = Some(page);
            pointer = (pointer + 1) % frame_count;
            page_faults += 1;
        }

        steps.push(Step {
            page,
            frames: frames.clone(),
            fault: !hit,
        });
    }

    SimulationResult::assemble(Policy::Fifo, page_faults, steps)
}
