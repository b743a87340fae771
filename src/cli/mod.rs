//! CLI Module
//!
//! Command-line interface for wavefx. Outer options are handled by clap;
//! the effect flags that follow are order-sensitive and are tokenised by
//! [`ops::parse_operations`].

pub mod commands;
pub mod ops;

use clap::Parser;
use std::path::PathBuf;

pub use commands::{execute, process, run};
pub use ops::parse_operations;

const OPERATIONS_HELP: &str = "\
Options must come before the first operation.

Operations (applied in the order given):
  -r                 Reverse both channels
  -s <factor>        Change speed (factor > 1 is faster)
  -f                 Swap left and right channels
  -o <seconds>       Fade out
  -i <seconds>       Fade in
  -v <scale>         Scale volume
  -e <delay> <factor>  Add an echo

Example:
  wavefx -s 1.5 -e 0.25 0.4 -o 2 < in.wav > out.wav";

/// Batch effects processor for 16-bit stereo 44.1kHz WAV files
#[derive(Parser, Debug, Default)]
#[command(name = "wavefx")]
#[command(version, about, long_about = None, after_help = OPERATIONS_HELP)]
pub struct Cli {
    /// Read from this file instead of stdin
    #[arg(long, value_name = "PATH")]
    pub input: Option<PathBuf>,

    /// Write to this file instead of stdout
    #[arg(long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Enable verbose output
    #[arg(long)]
    pub verbose: bool,

    /// Do not print header summaries
    #[arg(long, conflicts_with = "json_summary")]
    pub quiet: bool,

    /// Print header summaries as JSON lines
    #[arg(long)]
    pub json_summary: bool,

    /// Effect operations, applied in order
    #[arg(
        value_name = "OPERATIONS",
        num_args = 0..,
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    pub operations: Vec<String>,
}

impl Cli {
    /// How header summaries should be reported
    pub fn summary_format(&self) -> SummaryFormat {
        if self.quiet {
            SummaryFormat::None
        } else if self.json_summary {
            SummaryFormat::Json
        } else {
            SummaryFormat::Text
        }
    }
}

/// Diagnostic header summary style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SummaryFormat {
    #[default]
    Text,
    Json,
    None,
}
