//! Error handling for wavefx
//!
//! Every failure is terminal. Each error carries the process exit code the
//! CLI reports, so calling scripts can tell failure causes apart.

use thiserror::Error;

/// Result type alias for wavefx operations
pub type Result<T> = std::result::Result<T, WaveError>;

/// Broad failure classes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorClass {
    /// Truncated header/body or container tag mismatch
    StructuralIo,
    /// Wrong channel count, sample rate, or bit depth
    FormatConstraint,
    /// Unknown flag or bad numeric parameter
    Argument,
    /// Allocation failure or output too large
    ResourceExhaustion,
    /// File system or output stream failure
    Io,
}

/// Main error type for wavefx operations
#[derive(Error, Debug)]
pub enum WaveError {
    // Header errors
    #[error("File is not a RIFF file: header truncated ({available} of 44 bytes)")]
    TruncatedHeader { available: usize },

    #[error("File is not a RIFF file (found tag {found:?})")]
    NotRiff { found: String },

    #[error("Format chunk is corrupted (found tag {found:?})")]
    FormatCorrupt { found: String },

    #[error("Data chunk is corrupted (found tag {found:?})")]
    DataCorrupt { found: String },

    #[error("File is not stereo ({channels} channels)")]
    NotStereo { channels: u16 },

    #[error("File does not use 44,100Hz sample rate ({sample_rate}Hz)")]
    BadSampleRate { sample_rate: u32 },

    #[error("File does not have 16-bit samples ({bits_per_sample}-bit)")]
    BadBitDepth { bits_per_sample: u16 },

    // Sample data errors
    #[error("File size does not match size in header: expected {expected} data bytes, got {actual}")]
    ShortRead { expected: usize, actual: usize },

    #[error("File size does not match size in header: data continues past {expected} bytes")]
    TrailingData { expected: usize },

    // Argument errors
    #[error("Unknown option: {flag}")]
    UnknownFlag { flag: String },

    #[error("Option {option} must come before the operations")]
    MisplacedOption { option: String },

    #[error("A positive number must be supplied for the speed change{}", describe(value))]
    InvalidSpeed { value: Option<String> },

    #[error("A positive number must be supplied for the fade in and fade out time{}", describe(value))]
    InvalidFadeTime { value: Option<String> },

    #[error("A positive number must be supplied for the volume scale{}", describe(value))]
    InvalidVolume { value: Option<String> },

    #[error("Two positive numbers must be supplied for the echo delay and factor{}", describe(value))]
    InvalidEcho { value: Option<String> },

    // Resource errors
    #[error("Program out of memory: cannot allocate {samples} samples")]
    OutOfMemory { samples: usize },

    #[error("Output too large: {channel_length} samples per channel overflow the RIFF size fields")]
    OutputTooLarge { channel_length: usize },

    // I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

fn describe(value: &Option<String>) -> String {
    match value {
        Some(v) => format!(" (got {:?})", v),
        None => " (argument missing)".to_string(),
    }
}

impl WaveError {
    /// Get the failure class for this error
    pub fn class(&self) -> ErrorClass {
        match self {
            WaveError::TruncatedHeader { .. }
            | WaveError::NotRiff { .. }
            | WaveError::FormatCorrupt { .. }
            | WaveError::DataCorrupt { .. }
            | WaveError::ShortRead { .. }
            | WaveError::TrailingData { .. } => ErrorClass::StructuralIo,
            WaveError::NotStereo { .. }
            | WaveError::BadSampleRate { .. }
            | WaveError::BadBitDepth { .. } => ErrorClass::FormatConstraint,
            WaveError::UnknownFlag { .. }
            | WaveError::MisplacedOption { .. }
            | WaveError::InvalidSpeed { .. }
            | WaveError::InvalidFadeTime { .. }
            | WaveError::InvalidVolume { .. }
            | WaveError::InvalidEcho { .. } => ErrorClass::Argument,
            WaveError::OutOfMemory { .. } | WaveError::OutputTooLarge { .. } => {
                ErrorClass::ResourceExhaustion
            }
            WaveError::Io(_) | WaveError::Serialization(_) => ErrorClass::Io,
        }
    }

    /// Get the process exit code for this error
    pub fn exit_code(&self) -> u8 {
        match self {
            WaveError::UnknownFlag { .. } | WaveError::MisplacedOption { .. } => 1,
            WaveError::OutOfMemory { .. } | WaveError::OutputTooLarge { .. } => 2,
            WaveError::TruncatedHeader { .. } | WaveError::NotRiff { .. } => 3,
            WaveError::FormatCorrupt { .. } => 4,
            WaveError::DataCorrupt { .. } => 5,
            WaveError::NotStereo { .. } => 6,
            WaveError::BadSampleRate { .. } => 7,
            WaveError::BadBitDepth { .. } => 8,
            WaveError::ShortRead { .. } | WaveError::TrailingData { .. } => 9,
            WaveError::InvalidSpeed { .. } => 10,
            WaveError::InvalidFadeTime { .. } => 11,
            WaveError::InvalidVolume { .. } => 12,
            WaveError::InvalidEcho { .. } => 13,
            WaveError::Io(_) | WaveError::Serialization(_) => 14,
        }
    }

    /// Get the error code for this error type
    pub fn error_code(&self) -> &'static str {
        match self {
            WaveError::TruncatedHeader { .. } => "TRUNCATED_HEADER",
            WaveError::NotRiff { .. } => "NOT_RIFF",
            WaveError::FormatCorrupt { .. } => "FORMAT_CORRUPT",
            WaveError::DataCorrupt { .. } => "DATA_CORRUPT",
            WaveError::NotStereo { .. } => "NOT_STEREO",
            WaveError::BadSampleRate { .. } => "BAD_SAMPLE_RATE",
            WaveError::BadBitDepth { .. } => "BAD_BIT_DEPTH",
            WaveError::ShortRead { .. } => "SHORT_READ",
            WaveError::TrailingData { .. } => "TRAILING_DATA",
            WaveError::UnknownFlag { .. } => "UNKNOWN_FLAG",
            WaveError::MisplacedOption { .. } => "MISPLACED_OPTION",
            WaveError::InvalidSpeed { .. } => "INVALID_SPEED",
            WaveError::InvalidFadeTime { .. } => "INVALID_FADE_TIME",
            WaveError::InvalidVolume { .. } => "INVALID_VOLUME",
            WaveError::InvalidEcho { .. } => "INVALID_ECHO",
            WaveError::OutOfMemory { .. } => "OUT_OF_MEMORY",
            WaveError::OutputTooLarge { .. } => "OUTPUT_TOO_LARGE",
            WaveError::Io(_) => "IO_ERROR",
            WaveError::Serialization(_) => "SERIALIZATION_ERROR",
        }
    }

    /// Returns a suggested recovery action for this error
    pub fn recovery_hint(&self) -> &'static str {
        match self.class() {
            ErrorClass::StructuralIo => "Check that the input is a complete, uncompressed WAV file",
            ErrorClass::FormatConstraint => "Convert the input to 16-bit stereo PCM at 44,100Hz",
            ErrorClass::Argument => {
                "Usage: wavefx [-r] [-s factor] [-f] [-o seconds] [-i seconds] [-v scale] [-e delay factor] < input > output"
            }
            ErrorClass::ResourceExhaustion => "Process a shorter file or use smaller speed/echo parameters",
            ErrorClass::Io => "Check the file paths and that the output location is writable",
        }
    }
}
