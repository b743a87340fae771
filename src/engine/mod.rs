//! Audio Engine Module
//!
//! Core file handling:
//! - RIFF/WAVE header codec and validation
//! - Stereo sample storage
//! - File I/O

pub mod buffer;
pub mod header;
pub mod io;

pub use buffer::{saturate, StereoBuffer};
pub use header::{DataChunk, FormatChunk, HeaderSummary, WaveHeader, HEADER_SIZE};
pub use io::WaveFile;

/// The only supported sample rate in Hz
pub const SAMPLE_RATE: u32 = 44100;

/// Bytes per stereo sample pair (two channels of 16 bits)
pub const BYTES_PER_FRAME: usize = 4;
