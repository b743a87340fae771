//! wavefx - Batch WAV Effects Processing
//!
//! wavefx reads one stereo 16-bit 44.1kHz PCM WAV file, applies a sequence
//! of effects and writes a new file with a consistent header.
//!
//! # Architecture
//!
//! - `engine`: header codec, validation and the two-channel sample store
//! - `dsp`: the transforms and the chain that runs them in order
//! - `cli`: argument parsing and the read/process/write driver

pub mod cli;
pub mod dsp;
pub mod engine;
pub mod error;

pub use error::{Result, WaveError};
