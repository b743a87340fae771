//! Effect flag tokenizer
//!
//! Turns the trailing command-line tokens into an ordered list of
//! operations. Every numeric argument must be a finite number above zero.

use crate::dsp::Operation;
use crate::error::{Result, WaveError};

/// Outer options, which clap only sees before the first operation
const OUTER_OPTIONS: &[&str] = &[
    "--input",
    "--output",
    "--verbose",
    "--quiet",
    "--json-summary",
    "--help",
    "--version",
];

/// Parse effect flags in the order they appear
///
/// # Errors
/// * `MisplacedOption` - for an outer option given after an operation
/// * `UnknownFlag` - for any other token that is not an effect flag
/// * `InvalidSpeed` / `InvalidFadeTime` / `InvalidVolume` / `InvalidEcho` -
///   for missing, non-numeric or non-positive arguments
pub fn parse_operations<S: AsRef<str>>(tokens: &[S]) -> Result<Vec<Operation>> {
    let mut operations = Vec::new();
    let mut tokens = tokens.iter().map(AsRef::as_ref);

    while let Some(token) = tokens.next() {
        let op = match token {
            "-r" => Operation::Reverse,
            "-f" => Operation::Flip,
            "-s" => Operation::Speed {
                factor: positive(tokens.next(), |value| WaveError::InvalidSpeed { value })?,
            },
            "-o" => Operation::FadeOut {
                seconds: positive(tokens.next(), |value| WaveError::InvalidFadeTime { value })?,
            },
            "-i" => Operation::FadeIn {
                seconds: positive(tokens.next(), |value| WaveError::InvalidFadeTime { value })?,
            },
            "-v" => Operation::Volume {
                factor: positive(tokens.next(), |value| WaveError::InvalidVolume { value })?,
            },
            "-e" => {
                let delay = positive(tokens.next(), |value| WaveError::InvalidEcho { value })?;
                let factor = positive(tokens.next(), |value| WaveError::InvalidEcho { value })?;
                Operation::Echo { delay, factor }
            }
            other if is_outer_option(other) => {
                return Err(WaveError::MisplacedOption {
                    option: other.to_string(),
                })
            }
            other => {
                return Err(WaveError::UnknownFlag {
                    flag: other.to_string(),
                })
            }
        };
        operations.push(op);
    }

    Ok(operations)
}

fn is_outer_option(token: &str) -> bool {
    let name = token.split('=').next().unwrap_or(token);
    OUTER_OPTIONS.contains(&name)
}

fn positive<F>(arg: Option<&str>, err: F) -> Result<f64>
where
    F: Fn(Option<String>) -> WaveError,
{
    let arg = arg.ok_or_else(|| err(None))?;
    arg.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && *v > 0.0)
        .ok_or_else(|| err(Some(arg.to_string())))
}
