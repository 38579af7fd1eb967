//! Optimal (Belady) page replacement.
//!
//! Requires the full reference sequence up front, which is fine here: the
//! engine explicitly does not support streaming input. Belady's algorithm is
//! the provably fault-minimal offline policy, so it serves as the baseline
//! the other policies are compared against.

use crate::common::Page;
use crate::sim::result::{SimulationResult, Step};
use crate::sim::Policy;

/// Replay the reference sequence against Belady's optimal policy.
///
/// The pool is a slot list growing to at most `frame_count` entries; slot
/// identity persists across replacements (unlike LRU's recency list, a
/// replacement writes in place). Snapshots are emitted in slot order.
///
/// Victim selection on a fault with a full pool is [`victim_slot`].
pub(crate) fn simulate(refs: &[Page], frame_count: usize) -> SimulationResult {
    let mut frames: Vec<Page> = Vec::with_capacity(frame_count);
    let mut page_faults = 0;
    let mut steps = Vec::with_capacity(refs.len());

    for (index, &page) in refs.iter().enumerate() {
        let hit = frames.contains(&page);
        if !hit {
            if frames.len() < frame_count {
                frames.push(page);
            } else {
                let victim = victim_slot(&frames, refs, index + 1);
                frames[victim] = page;
            }
            page_faults += 1;
        }

        steps.push(Step {
            page,
            frames: frames.iter().map(|&held| Some(held)).collect(),
            fault: !hit,
        });
    }

    SimulationResult::assemble(Policy::Optimal, page_faults, steps)
}

/// Pick the slot to replace, per Belady's rule.
///
/// For each held page, scan the suffix `refs[start..]` for its next
/// occurrence. A page never referenced again wins immediately (first such
/// slot in pool order). Otherwise the strictly farthest next occurrence
/// wins, ties broken in favor of the earlier slot.
///
/// The tie-break is a documented contract, not an accident: an alternate
/// break order would still be "optimal" in fault count on many inputs but
/// would produce different traces, and traces must be reproducible.
///
/// Worst case O(frames × remaining) per fault. For larger inputs a
/// precomputed next-occurrence index would be the substitute, with
/// identical observable behavior.
fn victim_slot(frames: &[Page], refs: &[Page], start: usize) -> usize {
    let mut victim = 0;
    let mut farthest: Option<usize> = None;

    for (slot, &held) in frames.iter().enumerate() {
        match refs[start..].iter().position(|&page| page == held) {
            None => return slot,
            Some(distance) => {
                if farthest.map_or(true, |current| distance > current) {
                    farthest = Some(distance);
                    victim = slot;
                }
            }
        }
    }

    victim
}
