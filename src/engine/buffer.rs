//! Stereo sample storage
//!
//! Holds the left and right channels as separate `Vec<i16>`, decoded from
//! and encoded to the interleaved little-endian layout of the data chunk.

use std::io::Read;

use byteorder::{ByteOrder, LittleEndian};

use crate::engine::BYTES_PER_FRAME;
use crate::error::{Result, WaveError};

// ============================================================================
// Helper Functions
// ============================================================================

/// Clamp a computed amplitude into the 16-bit sample range
///
/// Fractional values truncate toward zero.
#[inline]
pub fn saturate(value: f64) -> i16 {
    value.clamp(i16::MIN as f64, i16::MAX as f64) as i16
}

/// Allocate an empty channel with room for `len` samples
///
/// # Errors
/// * `OutOfMemory` - if the allocation cannot be satisfied
pub fn try_alloc_channel(len: usize) -> Result<Vec<i16>> {
    let mut channel = Vec::new();
    channel
        .try_reserve_exact(len)
        .map_err(|_| WaveError::OutOfMemory { samples: len })?;
    Ok(channel)
}

// ============================================================================
// Stereo Buffer
// ============================================================================

/// Two equal-length channels of 16-bit samples
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StereoBuffer {
    pub left: Vec<i16>,
    pub right: Vec<i16>,
}

impl StereoBuffer {
    /// Create a buffer from two channels
    ///
    /// # Panics
    /// Panics if the channels differ in length.
    pub fn new(left: Vec<i16>, right: Vec<i16>) -> Self {
        assert_eq!(
            left.len(),
            right.len(),
            "stereo channels must have equal length"
        );
        Self { left, right }
    }

    /// Create a silent buffer of `len` samples per channel
    pub fn silence(len: usize) -> Self {
        Self {
            left: vec![0; len],
            right: vec![0; len],
        }
    }

    /// Read `channel_length` interleaved sample pairs and require end of stream
    ///
    /// # Errors
    /// * `OutOfMemory` - if the channels cannot be allocated
    /// * `ShortRead` - if the stream ends early
    /// * `TrailingData` - if bytes remain after the expected count
    pub fn decode<R: Read>(reader: &mut R, channel_length: usize) -> Result<Self> {
        let expected = channel_length
            .checked_mul(BYTES_PER_FRAME)
            .ok_or(WaveError::OutOfMemory {
                samples: channel_length,
            })?;

        let mut left = try_alloc_channel(channel_length)?;
        let mut right = try_alloc_channel(channel_length)?;

        let mut raw = Vec::new();
        raw.try_reserve_exact(expected)
            .map_err(|_| WaveError::OutOfMemory {
                samples: channel_length,
            })?;
        reader.by_ref().take(expected as u64).read_to_end(&mut raw)?;
        if raw.len() < expected {
            return Err(WaveError::ShortRead {
                expected,
                actual: raw.len(),
            });
        }

        if reader.bytes().next().transpose()?.is_some() {
            return Err(WaveError::TrailingData { expected });
        }

        for frame in raw.chunks_exact(BYTES_PER_FRAME) {
            left.push(LittleEndian::read_i16(&frame[0..2]));
            right.push(LittleEndian::read_i16(&frame[2..4]));
        }

        Ok(Self { left, right })
    }

    /// Interleave the channels back into data chunk bytes
    pub fn encode(&self) -> Vec<u8> {
        let mut out = vec![0u8; self.len() * BYTES_PER_FRAME];
        for ((frame, &l), &r) in out
            .chunks_exact_mut(BYTES_PER_FRAME)
            .zip(&self.left)
            .zip(&self.right)
        {
            LittleEndian::write_i16(&mut frame[0..2], l);
            LittleEndian::write_i16(&mut frame[2..4], r);
        }
        out
    }

    /// Swap the left and right channels
    #[inline]
    pub fn flip(&mut self) {
        std::mem::swap(&mut self.left, &mut self.right);
    }

    /// Number of samples per channel
    #[inline]
    pub fn len(&self) -> usize {
        self.left.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.left.is_empty()
    }

    /// Duration in seconds at the fixed sample rate
    pub fn duration_secs(&self) -> f64 {
        self.len() as f64 / crate::engine::SAMPLE_RATE as f64
    }
}

// ============================================================================
// Tests
// ============================================================================
