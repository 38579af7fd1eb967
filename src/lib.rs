//! framesim - A page-replacement simulator with replayable per-step traces.
//!
//! Given an ordered sequence of page references and a fixed number of memory
//! frames, framesim replays the sequence against three classic eviction
//! policies - FIFO, LRU, and Optimal (Belady) - and produces, for each, a
//! per-step trace of frame contents, a hit/fault classification, and
//! aggregate statistics.
//!
//! # Architecture
//! ```text
//! ┌────────────────────────────────────────────────────────────┐
//! │                         framesim                           │
//! ├────────────────────────────────────────────────────────────┤
//! │  ┌──────────────────────────────────────────────────────┐  │
//! │  │        Validation boundary (input/)                  │  │
//! │  │   raw text → Vec<Page> + checked frame count         │  │
//! │  └──────────────────────────────────────────────────────┘  │
//! │                            ↓                               │
//! │  ┌──────────────────────────────────────────────────────┐  │
//! │  │        Simulation engine (sim/)                      │  │
//! │  │   ┌──────────────────────────────────────────────┐   │  │
//! │  │   │  Eviction policies: FIFO | LRU | Optimal     │   │  │
//! │  │   └──────────────────────────────────────────────┘   │  │
//! │  │   Step traces + statistics + performance rating      │  │
//! │  └──────────────────────────────────────────────────────┘  │
//! │                            ↓                               │
//! │  ┌──────────────────────────────────────────────────────┐  │
//! │  │        Rendering (report/)                           │  │
//! │  │   plain-text report, comparison summary, JSON        │  │
//! │  └──────────────────────────────────────────────────────┘  │
//! └────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//! - [`common`] - Shared primitives (Page, Error, config)
//! - [`input`] - Reference-string parsing and frame-count validation
//! - [`sim`] - The three policy simulators and the result shape
//! - [`report`] - Plain-text report rendering
//!
//! # Quick Start
//! ```
//! use framesim::{input, report, sim, Policy};
//!
//! let refs = input::parse_reference_string("7,0,1,2,0,3,0,4,2,3,0,3,2").unwrap();
//! let results = sim::run_all(&Policy::ALL, &refs, 3).unwrap();
//!
//! // Optimal is never worse than the others (Belady's theorem).
//! assert!(results[2].page_faults <= results[0].page_faults);
//! assert!(results[2].page_faults <= results[1].page_faults);
//!
//! println!("{}", report::render_report(&refs, 3, &results));
//! ```

pub mod common;
pub mod input;
pub mod report;
pub mod sim;

// Re-export commonly used items at crate root for convenience
pub use common::config::MAX_FRAME_COUNT;
pub use common::{Error, Page, Result};
pub use sim::{Performance, Policy, SimulationResult, Step};
