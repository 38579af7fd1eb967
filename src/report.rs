//! Plain-text rendering of simulation results.
//!
//! The report is lossless: it enumerates the reference sequence, the frame
//! count, and for every policy the fault count, hit ratio (two decimals),
//! performance label, and the full ordered timeline. Feeding the same
//! results in always yields byte-identical text.

use std::io::{self, Write};

use crate::common::Page;
use crate::sim::SimulationResult;

/// Render the full report for one or more policy runs.
pub fn render_report(refs: &[Page], frame_count: usize, results: &[SimulationResult]) -> String {
    let mut lines: Vec<String> = Vec::new();

    lines.push("Page Replacement Algorithm Simulation Results".to_string());
    lines.push("=".repeat(48));
    lines.push(format!("Reference string: {}", join_pages(refs)));
    lines.push(format!("Frame count: {}", frame_count));
    lines.push(String::new());

    for result in results {
        let name = result.policy.name();
        lines.push(name.to_string());
        lines.push("-".repeat(name.len() + 12));
        lines.push(format!("Page faults: {}", result.page_faults));
        lines.push(format!("Hit ratio: {:.2}%", result.hit_ratio));
        lines.push(format!("Performance: {}", result.performance));
        lines.push("Timeline:".to_string());
        for (index, step) in result.steps.iter().enumerate() {
            lines.push(format!(
                "  {}. page {} -> {} :: {}",
                index + 1,
                step.page,
                format_frames(&step.frames, frame_count),
                if step.fault { "FAULT" } else { "HIT" },
            ));
        }
        lines.push(String::new());
    }

    lines.join("\n")
}

/// Render a one-line-per-policy comparison summary.
pub fn render_summary(results: &[SimulationResult]) -> String {
    let mut lines: Vec<String> = Vec::new();

    lines.push(format!(
        "{:<28} {:>8} {:>11} {:>12}",
        "Policy", "Faults", "Hit ratio", "Performance"
    ));
    for result in results {
        lines.push(format!(
            "{:<28} {:>8} {:>10.2}% {:>12}",
            result.policy.name(),
            result.page_faults,
            result.hit_ratio,
            result.performance.to_string(),
        ));
    }

    lines.join("\n")
}

/// Write the full report to any `io::Write` sink.
pub fn write_report<W: Write>(
    writer: &mut W,
    refs: &[Page],
    frame_count: usize,
    results: &[SimulationResult],
) -> io::Result<()> {
    writer.write_all(render_report(refs, frame_count, results).as_bytes())?;
    writer.write_all(b"\n")
}

/// Format a frame snapshot, padded to `frame_count` with `-` markers.
///
/// LRU and Optimal snapshots are not padded by the engine; the report pads
/// them so every timeline row has the same width.
pub fn format_frames(frames: &[Option<Page>], frame_count: usize) -> String {
    let mut cells: Vec<String> = frames
        .iter()
        .map(|slot| match slot {
            Some(page) => page.to_string(),
            None => "-".to_string(),
        })
        .collect();
    while cells.len() < frame_count {
        cells.push("-".to_string());
    }

    format!("[{}]", cells.join(", "))
}

fn join_pages(refs: &[Page]) -> String {
    refs.iter()
        .map(Page::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
