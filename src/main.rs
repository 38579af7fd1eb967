//! framesim CLI - run page-replacement simulations from the command line.
//!
//! ```text
//! framesim "7,0,1,2,0,3,0,4,2,3,0,3,2" --frames 3
//! framesim "1 2 3 4 1 2 5" -f 4 -p fifo --format json -o results.json
//! ```

use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};

use framesim::common::config::DEFAULT_FRAME_COUNT;
use framesim::{input, report, sim, Policy};

/// Simulate FIFO, LRU, and Optimal page replacement over a reference string.
#[derive(Parser)]
#[command(name = "framesim")]
#[command(about = "Page-replacement policy simulator", long_about = None)]
struct Cli {
    /// Page reference string, e.g. "7,0,1,2,0,3" (commas or spaces)
    reference: String,

    /// Number of memory frames (1..=25)
    #[arg(short, long, default_value_t = DEFAULT_FRAME_COUNT)]
    frames: usize,

    /// Which policy to run
    #[arg(short, long, value_enum, default_value_t = PolicyArg::All)]
    policy: PolicyArg,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Write output to a file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum PolicyArg {
    Fifo,
    Lru,
    Optimal,
    All,
}

impl PolicyArg {
    fn policies(self) -> Vec<Policy> {
        match self {
            PolicyArg::Fifo => vec![Policy::Fifo],
            PolicyArg::Lru => vec![Policy::Lru],
            PolicyArg::Optimal => vec![Policy::Optimal],
            PolicyArg::All => Policy::ALL.to_vec(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let refs = input::parse_reference_string(&cli.reference)?;
    input::validate_frame_count(cli.frames)?;

    let results = sim::run_all(&cli.policy.policies(), &refs, cli.frames)?;

    let rendered = match cli.format {
        Format::Text => format!(
            "{}\n\n{}",
            report::render_summary(&results),
            report::render_report(&refs, cli.frames, &results)
        ),
        Format::Json => serde_json::to_string_pretty(&results)?,
    };

    match cli.output {
        Some(path) => {
            let mut file = File::create(&path)
                .with_context(|| format!("cannot create {}", path.display()))?;
            file.write_all(rendered.as_bytes())?;
            file.write_all(b"\n")?;
        }
        None => {
            let stdout = io::stdout();
            let mut out = stdout.lock();
            out.write_all(rendered.as_bytes())?;
            out.write_all(b"\n")?;
        }
    }

    Ok(())
}
