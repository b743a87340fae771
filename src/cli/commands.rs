//! CLI Command Implementations
//!
//! One run is: read and validate the input, report its header, parse the
//! effect flags, apply the chain, then write the result. Summaries go to the
//! diagnostic stream; output is only written once processing has succeeded.

use std::io::{self, Read, Write};

use log::info;
use serde::Serialize;

use crate::cli::ops::parse_operations;
use crate::cli::{Cli, SummaryFormat};
use crate::dsp::TransformChain;
use crate::engine::{HeaderSummary, WaveFile, WaveHeader};
use crate::error::Result;

#[derive(Serialize)]
struct StageSummary<'a> {
    stage: &'a str,
    header: HeaderSummary,
}

/// Run with the streams the command line asks for
///
/// Reads `--input` or stdin and writes `--output` or stdout. Summaries go
/// to stderr. An output file is only created after processing succeeds.
pub fn run(cli: &Cli) -> Result<()> {
    let file = match &cli.input {
        Some(path) => {
            info!("Reading {}", path.display());
            WaveFile::load(path)?
        }
        None => WaveFile::read_from(&mut io::stdin().lock())?,
    };

    let stderr = io::stderr();
    let mut diag = stderr.lock();
    let file = process(file, &cli.operations, cli.summary_format(), &mut diag)?;

    match &cli.output {
        Some(path) => {
            info!("Writing {}", path.display());
            file.save(path)
        }
        None => file.write_to(&mut io::stdout().lock()),
    }
}

/// Run against caller-supplied streams
pub fn execute<R, W, D>(cli: &Cli, input: &mut R, output: &mut W, diag: &mut D) -> Result<()>
where
    R: Read,
    W: Write,
    D: Write,
{
    let file = WaveFile::read_from(input)?;
    let file = process(file, &cli.operations, cli.summary_format(), diag)?;
    file.write_to(output)
}

/// Report, parse the effect flags and transform one validated file
///
/// The input summary is written before any flag is looked at, so header
/// errors always win over flag errors.
pub fn process<S, D>(
    file: WaveFile,
    tokens: &[S],
    format: SummaryFormat,
    diag: &mut D,
) -> Result<WaveFile>
where
    S: AsRef<str>,
    D: Write,
{
    report(diag, format, "input", &file.header)?;

    let operations = parse_operations(tokens)?;
    let chain = TransformChain::from_operations(&operations)?;

    info!(
        "Applying {} transform(s): {:?}",
        chain.len(),
        chain.names()
    );
    let file = chain.process_file(file)?;
    report(diag, format, "output", &file.header)?;

    Ok(file)
}

fn report<D: Write>(
    diag: &mut D,
    format: SummaryFormat,
    stage: &str,
    header: &WaveHeader,
) -> Result<()> {
    match format {
        SummaryFormat::None => {}
        SummaryFormat::Text => {
            let title = match stage {
                "input" => "Input",
                _ => "Output",
            };
            writeln!(diag)?;
            writeln!(diag, "{} Wave Header Information", title)?;
            writeln!(diag)?;
            write!(diag, "{}", header.summary())?;
        }
        SummaryFormat::Json => {
            let summary = StageSummary {
                stage,
                header: header.to_summary(),
            };
            serde_json::to_writer(&mut *diag, &summary)?;
            writeln!(diag)?;
        }
    }
    Ok(())
}
