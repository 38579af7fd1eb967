//! LRU (Least Recently Used) page replacement.

use crate::common::Page;
use crate::sim::result::{SimulationResult, Step};
use crate::sim::Policy;

/// Replay the reference sequence against an LRU recency list.
///
/// The pool is an ordered list, oldest first, growing to at most
/// `frame_count` entries. A hit moves the page to the newest (tail) end,
/// even when it is the sole occupant of a not-yet-full pool. A fault on a
/// full pool drops the head, which by construction is the entry untouched
/// longest.
///
/// Snapshots are emitted oldest-to-newest and are not padded to
/// `frame_count`; the emitted order is authoritative recency order.
pub(crate) fn simulate(refs: &[Page], frame_count: usize) -> SimulationResult {
    let mut frames: Vec<Page> = Vec::with_capacity(frame_count);
    let mut page_faults = 0;
    let mut steps = Vec::with_capacity(refs.len());

    for &page in refs {
        let hit = match frames.iter().position(|&held| held == page) {
            Some(position) => {
                frames.remove(position);
                frames.push(page);
                true
            }
            None => {
                if frames.len() == frame_count {
                    frames.remove(0);
                }
                frames.push(page);
                page_faults += 1;
                false
            }
        };

        steps.push(Step {
            page,
            frames: frames.iter().map(|&held| Some(held)).collect(),
            fault: !hit,
        });
    }

    SimulationResult::assemble(Policy::Lru, page_faults, steps)
}
