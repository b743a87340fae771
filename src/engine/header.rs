//! RIFF/WAVE header codec
//!
//! The header is a fixed 44-byte little-endian record: a RIFF container
//! descriptor, a `fmt ` chunk and a `data` chunk descriptor. Decoding and
//! encoding are exact inverses so an untouched header round-trips byte for
//! byte.

use std::fmt;
use std::io::{Cursor, Read, Write};

use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};
use serde::Serialize;

use crate::engine::{BYTES_PER_FRAME, SAMPLE_RATE};
use crate::error::{Result, WaveError};

// ============================================================================
// Constants
// ============================================================================

/// Size of the fixed header in bytes
pub const HEADER_SIZE: usize = 44;

/// Bytes of header counted by the RIFF size field after the data chunk
const RIFF_SIZE_OVERHEAD: u32 = 36;

pub const RIFF_TAG: [u8; 4] = *b"RIFF";
pub const WAVE_TAG: [u8; 4] = *b"WAVE";
pub const FMT_TAG: [u8; 4] = *b"fmt ";
pub const DATA_TAG: [u8; 4] = *b"data";

/// The only supported channel count
pub const REQUIRED_CHANNELS: u16 = 2;

/// The only supported sample width
pub const REQUIRED_BITS_PER_SAMPLE: u16 = 16;

// ============================================================================
// Header structures
// ============================================================================

/// Format chunk descriptor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatChunk {
    pub id: [u8; 4],
    pub size: u32,
    pub compression: u16,
    pub channels: u16,
    pub sample_rate: u32,
    pub byte_rate: u32,
    pub block_align: u16,
    pub bits_per_sample: u16,
}

/// Data chunk descriptor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DataChunk {
    pub id: [u8; 4],
    /// Data size in bytes
    pub size: u32,
}

/// Complete fixed-layout WAV header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WaveHeader {
    pub id: [u8; 4],
    /// Total file size minus 8
    pub size: u32,
    pub format: [u8; 4],
    pub format_chunk: FormatChunk,
    pub data_chunk: DataChunk,
}

impl WaveHeader {
    /// Build a canonical 16-bit stereo 44.1kHz PCM header for `channel_length`
    /// sample pairs.
    ///
    /// # Errors
    /// * `OutputTooLarge` - if the sizes do not fit the 32-bit fields
    pub fn stereo_cd(channel_length: usize) -> Result<Self> {
        let mut header = Self {
            id: RIFF_TAG,
            size: RIFF_SIZE_OVERHEAD,
            format: WAVE_TAG,
            format_chunk: FormatChunk {
                id: FMT_TAG,
                size: 16,
                compression: 1,
                channels: REQUIRED_CHANNELS,
                sample_rate: SAMPLE_RATE,
                byte_rate: SAMPLE_RATE * BYTES_PER_FRAME as u32,
                block_align: BYTES_PER_FRAME as u16,
                bits_per_sample: REQUIRED_BITS_PER_SAMPLE,
            },
            data_chunk: DataChunk {
                id: DATA_TAG,
                size: 0,
            },
        };
        header.resync(channel_length)?;
        Ok(header)
    }

    /// Read exactly one header from `reader`
    ///
    /// # Errors
    /// * `TruncatedHeader` - if the stream ends before 44 bytes
    pub fn decode<R: Read>(reader: &mut R) -> Result<Self> {
        let mut raw = Vec::with_capacity(HEADER_SIZE);
        reader.by_ref().take(HEADER_SIZE as u64).read_to_end(&mut raw)?;
        if raw.len() < HEADER_SIZE {
            return Err(WaveError::TruncatedHeader {
                available: raw.len(),
            });
        }
        Self::from_bytes(&raw)
    }

    fn from_bytes(raw: &[u8]) -> Result<Self> {
        let mut cursor = Cursor::new(raw);
        let id = read_tag(&mut cursor)?;
        let size = cursor.read_u32::<LittleEndian>()?;
        let format = read_tag(&mut cursor)?;

        let format_chunk = FormatChunk {
            id: read_tag(&mut cursor)?,
            size: cursor.read_u32::<LittleEndian>()?,
            compression: cursor.read_u16::<LittleEndian>()?,
            channels: cursor.read_u16::<LittleEndian>()?,
            sample_rate: cursor.read_u32::<LittleEndian>()?,
            byte_rate: cursor.read_u32::<LittleEndian>()?,
            block_align: cursor.read_u16::<LittleEndian>()?,
            bits_per_sample: cursor.read_u16::<LittleEndian>()?,
        };

        let data_chunk = DataChunk {
            id: read_tag(&mut cursor)?,
            size: cursor.read_u32::<LittleEndian>()?,
        };

        Ok(Self {
            id,
            size,
            format,
            format_chunk,
            data_chunk,
        })
    }

    /// Check the tags and the format constraints, in order
    ///
    /// The `WAVE` format tag is not checked.
    pub fn validate(&self) -> Result<()> {
        if self.id != RIFF_TAG {
            return Err(WaveError::NotRiff {
                found: tag_text(&self.id),
            });
        }
        if self.format_chunk.id != FMT_TAG {
            return Err(WaveError::FormatCorrupt {
                found: tag_text(&self.format_chunk.id),
            });
        }
        if self.data_chunk.id != DATA_TAG {
            return Err(WaveError::DataCorrupt {
                found: tag_text(&self.data_chunk.id),
            });
        }
        if self.format_chunk.channels != REQUIRED_CHANNELS {
            return Err(WaveError::NotStereo {
                channels: self.format_chunk.channels,
            });
        }
        if self.format_chunk.sample_rate != SAMPLE_RATE {
            return Err(WaveError::BadSampleRate {
                sample_rate: self.format_chunk.sample_rate,
            });
        }
        if self.format_chunk.bits_per_sample != REQUIRED_BITS_PER_SAMPLE {
            return Err(WaveError::BadBitDepth {
                bits_per_sample: self.format_chunk.bits_per_sample,
            });
        }
        Ok(())
    }

    /// Serialize the header in the same layout `decode` reads
    pub fn encode(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(HEADER_SIZE);
        // Writing into a Vec cannot fail.
        let _ = self.write_to(&mut out);
        out
    }

    /// Write the header to `writer`
    pub fn write_to<W: Write>(&self, writer: &mut W) -> Result<()> {
        writer.write_all(&self.id)?;
        writer.write_u32::<LittleEndian>(self.size)?;
        writer.write_all(&self.format)?;

        let fmt = &self.format_chunk;
        writer.write_all(&fmt.id)?;
        writer.write_u32::<LittleEndian>(fmt.size)?;
        writer.write_u16::<LittleEndian>(fmt.compression)?;
        writer.write_u16::<LittleEndian>(fmt.channels)?;
        writer.write_u32::<LittleEndian>(fmt.sample_rate)?;
        writer.write_u32::<LittleEndian>(fmt.byte_rate)?;
        writer.write_u16::<LittleEndian>(fmt.block_align)?;
        writer.write_u16::<LittleEndian>(fmt.bits_per_sample)?;

        writer.write_all(&self.data_chunk.id)?;
        writer.write_u32::<LittleEndian>(self.data_chunk.size)?;
        Ok(())
    }

    /// Number of stereo sample pairs declared by the data chunk
    pub fn channel_length(&self) -> usize {
        self.data_chunk.size as usize / BYTES_PER_FRAME
    }

    /// Recompute the size fields after the channel length changed
    ///
    /// # Errors
    /// * `OutputTooLarge` - if the sizes no longer fit the 32-bit fields
    pub fn resync(&mut self, channel_length: usize) -> Result<()> {
        let too_large = || WaveError::OutputTooLarge { channel_length };
        let data_size = u32::try_from(channel_length)
            .ok()
            .and_then(|len| len.checked_mul(BYTES_PER_FRAME as u32))
            .ok_or_else(too_large)?;
        let size = data_size
            .checked_add(RIFF_SIZE_OVERHEAD)
            .ok_or_else(too_large)?;

        self.data_chunk.size = data_size;
        self.size = size;
        Ok(())
    }

    /// Human-readable listing of every header field
    pub fn summary(&self) -> String {
        self.to_string()
    }

    /// Serializable view of the header
    pub fn to_summary(&self) -> HeaderSummary {
        HeaderSummary {
            id: tag_text(&self.id),
            size: self.size,
            format: tag_text(&self.format),
            format_id: tag_text(&self.format_chunk.id),
            format_size: self.format_chunk.size,
            compression: self.format_chunk.compression,
            channels: self.format_chunk.channels,
            sample_rate: self.format_chunk.sample_rate,
            byte_rate: self.format_chunk.byte_rate,
            block_align: self.format_chunk.block_align,
            bits_per_sample: self.format_chunk.bits_per_sample,
            data_id: tag_text(&self.data_chunk.id),
            data_size: self.data_chunk.size,
        }
    }
}

impl fmt::Display for WaveHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fmt_chunk = &self.format_chunk;
        writeln!(f, "{:<18}{}", "ID:", tag_text(&self.id))?;
        writeln!(f, "{:<18}{}", "Size:", self.size)?;
        writeln!(f, "{:<18}{}", "Format:", tag_text(&self.format))?;
        writeln!(f, "{:<18}{}", "Format ID:", tag_text(&fmt_chunk.id))?;
        writeln!(f, "{:<18}{:<4}(PCM = 16)", "Format Size:", fmt_chunk.size)?;
        writeln!(f, "{:<18}{:<4}(None = 1)", "Compression:", fmt_chunk.compression)?;
        writeln!(f, "{:<18}{:<4}(Stereo = 2)", "Channels:", fmt_chunk.channels)?;
        writeln!(f, "{:<18}{}", "Sample Rate:", fmt_chunk.sample_rate)?;
        writeln!(f, "{:<18}{}", "Byte Rate:", fmt_chunk.byte_rate)?;
        writeln!(f, "{:<18}{}", "Block Align:", fmt_chunk.block_align)?;
        writeln!(f, "{:<18}{}", "Bits Per Sample:", fmt_chunk.bits_per_sample)?;
        writeln!(f, "{:<18}{}", "Data ID:", tag_text(&self.data_chunk.id))?;
        writeln!(f, "{:<18}{}", "Data Size:", self.data_chunk.size)
    }
}

/// Header fields flattened for JSON output
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeaderSummary {
    pub id: String,
    pub size: u32,
    pub format: String,
    pub format_id: String,
    pub format_size: u32,
    pub compression: u16,
    pub channels: u16,
    pub sample_rate: u32,
    pub byte_rate: u32,
    pub block_align: u16,
    pub bits_per_sample: u16,
    pub data_id: String,
    pub data_size: u32,
}

// ============================================================================
// Internal helper functions
// ============================================================================

fn read_tag<R: Read>(reader: &mut R) -> Result<[u8; 4]> {
    let mut tag = [0u8; 4];
    reader.read_exact(&mut tag)?;
    Ok(tag)
}

fn tag_text(tag: &[u8; 4]) -> String {
    String::from_utf8_lossy(tag).into_owned()
}

// ============================================================================
// Tests
// ============================================================================
