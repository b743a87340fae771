//! Transform trait definition
//!
//! Base trait for all buffer transforms.

use serde_json::Value;

use crate::engine::StereoBuffer;
use crate::error::Result;

/// Base trait for all sample-buffer transforms
///
/// Transforms take ownership of channel data and hand back either the same
/// storage mutated in place or a newly sized replacement. Superseded
/// storage is dropped when the transform returns.
pub trait Transform: Send + Sync {
    /// Get the transform type identifier
    fn name(&self) -> &'static str;

    /// Get all parameters as JSON (for logging)
    fn params(&self) -> Value;

    /// Whether the output length can differ from the input length
    ///
    /// The chain resyncs the header after every transform returning `true`.
    fn changes_length(&self) -> bool {
        false
    }

    /// Transform a single channel
    fn process_channel(&self, samples: Vec<i16>) -> Result<Vec<i16>>;

    /// Transform both channels
    fn apply(&self, buffer: StereoBuffer) -> Result<StereoBuffer> {
        let StereoBuffer { left, right } = buffer;
        let left = self.process_channel(left)?;
        let right = self.process_channel(right)?;
        Ok(StereoBuffer::new(left, right))
    }
}
