//! wavefx - WAV effects processor
//!
//! Reads a stereo 16-bit 44.1kHz WAV file, applies effects in command-line
//! order and writes the result.

use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use env_logger::Env;
use log::debug;

use wavefx::cli::{self, Cli};
use wavefx::WaveError;

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // Help and version go to stdout and are not failures
            let _ = err.print();
            return if err.use_stderr() {
                ExitCode::from(1)
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    // Initialize logger
    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_filter)).init();

    debug!("wavefx v{}", env!("CARGO_PKG_VERSION"));

    match cli::run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            debug!("{} failed: {:?}", err.error_code(), err);
            let _ = report_error(&mut io::stderr().lock(), &err);
            ExitCode::from(err.exit_code())
        }
    }
}

/// Print the error once, followed by its hint
fn report_error<W: Write>(out: &mut W, err: &WaveError) -> io::Result<()> {
    writeln!(out, "error: {}", err)?;
    writeln!(out, "{}", err.recovery_hint())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_error_prints_message_once() {
        let err = WaveError::TruncatedHeader { available: 0 };
        let mut out = Vec::new();
        report_error(&mut out, &err).unwrap();

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("error: File is not a RIFF file"));
        assert_eq!(lines[1], err.recovery_hint());
        assert_eq!(text.matches("not a RIFF file").count(), 1);
    }
}
