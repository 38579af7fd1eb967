//! Integration tests for report rendering and export.

use std::fs;
use std::io::Read;

use framesim::{input, report, sim, Policy};
use tempfile::tempdir;

#[test]
fn test_full_report_is_lossless() {
    let refs = input::parse_reference_string("7,0,1,2,0,3,0,4,2,3,0,3,2").unwrap();
    let results = sim::run_all(&Policy::ALL, &refs, 3).unwrap();
    let report = report::render_report(&refs, 3, &results);

    // Inputs are enumerated.
    assert!(report.contains("Reference string: 7, 0, 1, 2, 0, 3, 0, 4, 2, 3, 0, 3, 2"));
    assert!(report.contains("Frame count: 3"));

    // Every policy block carries its statistics.
    assert!(report.contains("First-In First-Out (FIFO)"));
    assert!(report.contains("Least Recently Used (LRU)"));
    assert!(report.contains("Optimal"));
    assert!(report.contains("Page faults: 10"));
    assert!(report.contains("Page faults: 9"));
    assert!(report.contains("Page faults: 7"));

    // Every timeline has one row per reference, 1-based.
    assert_eq!(report.matches("  1. page 7 ->").count(), 3);
    assert_eq!(report.matches("  13. page 2 ->").count(), 3);
}

#[test]
fn test_report_is_deterministic() {
    let refs = input::parse_reference_string("1 2 3 4 1 2 5").unwrap();
    let results = sim::run_all(&Policy::ALL, &refs, 4).unwrap();

    let first = report::render_report(&refs, 4, &results);
    let second = report::render_report(&refs, 4, &results);
    assert_eq!(first, second);
}

#[test]
fn test_write_report_to_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("results.txt");

    let refs = input::parse_reference_string("5").unwrap();
    let results = sim::run_all(&[Policy::Lru], &refs, 1).unwrap();

    let mut file = fs::File::create(&path).unwrap();
    report::write_report(&mut file, &refs, 1, &results).unwrap();
    drop(file);

    let mut written = String::new();
    fs::File::open(&path)
        .unwrap()
        .read_to_string(&mut written)
        .unwrap();

    assert_eq!(written, report::render_report(&refs, 1, &results) + "\n");
    assert!(written.contains("  1. page 5 -> [5] :: FAULT"));
}

#[test]
fn test_hit_ratio_rendered_to_two_decimals() {
    let refs = input::parse_reference_string("7,0,1,2,0,3,0,4,2,3,0,3,2").unwrap();
    let results = sim::run_all(&[Policy::Lru], &refs, 3).unwrap();
    let report = report::render_report(&refs, 3, &results);

    // 4 hits out of 13 references.
    assert!(report.contains("Hit ratio: 30.77%"));
}
