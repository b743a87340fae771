//! WAV file I/O for wavefx
//!
//! A `WaveFile` is loaded once (header decode, validation, sample decode)
//! and written once. Output is assembled in memory and handed to the writer
//! in a single call so a failed run never leaves partial output behind.

use std::fs::File;
use std::io::{BufReader, Read, Write};
use std::path::Path;

use log::debug;

use crate::engine::buffer::StereoBuffer;
use crate::engine::header::{WaveHeader, HEADER_SIZE};
use crate::engine::BYTES_PER_FRAME;
use crate::error::Result;

/// A validated header together with its sample data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WaveFile {
    pub header: WaveHeader,
    pub buffer: StereoBuffer,
}

impl WaveFile {
    /// Wrap a buffer in a canonical header sized to match it
    pub fn from_buffer(buffer: StereoBuffer) -> Result<Self> {
        let header = WaveHeader::stereo_cd(buffer.len())?;
        Ok(Self { header, buffer })
    }

    /// Read a complete stereo 16-bit 44.1kHz file from `reader`
    ///
    /// # Errors
    /// * `TruncatedHeader` / `NotRiff` / `FormatCorrupt` / `DataCorrupt`
    /// * `NotStereo` / `BadSampleRate` / `BadBitDepth`
    /// * `OutOfMemory` - if the declared data cannot be allocated
    /// * `ShortRead` / `TrailingData` - if the data disagrees with the header
    pub fn read_from<R: Read>(reader: &mut R) -> Result<Self> {
        let header = WaveHeader::decode(reader)?;
        header.validate()?;

        let channel_length = header.channel_length();
        let buffer = StereoBuffer::decode(reader, channel_length)?;
        debug!(
            "Decoded {} samples per channel ({:.3}s)",
            buffer.len(),
            buffer.duration_secs()
        );

        Ok(Self { header, buffer })
    }

    /// Load a file from disk
    pub fn load(path: &Path) -> Result<Self> {
        let file = File::open(path)?;
        Self::read_from(&mut BufReader::new(file))
    }

    /// Header and data bytes, in file order
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(HEADER_SIZE + self.buffer.len() * BYTES_PER_FRAME);
        out.extend_from_slice(&self.header.encode());
        out.extend_from_slice(&self.buffer.encode());
        out
    }

    /// Consume the file and write it to `writer`
    pub fn write_to<W: Write>(self, writer: &mut W) -> Result<()> {
        let bytes = self.to_bytes();
        writer.write_all(&bytes)?;
        writer.flush()?;
        debug!("Wrote {} bytes", bytes.len());
        Ok(())
    }

    /// Consume the file and write it to disk
    pub fn save(self, path: &Path) -> Result<()> {
        let mut file = File::create(path)?;
        self.write_to(&mut file)
    }
}

// ============================================================================
// Tests
// ============================================================================
