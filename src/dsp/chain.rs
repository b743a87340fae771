//! Transform Chain
//!
//! Runs transforms strictly in the order they were added and keeps the
//! header size fields in step with the channel length.

use log::debug;

use crate::dsp::operation::Operation;
use crate::dsp::transform::Transform;
use crate::engine::{StereoBuffer, WaveFile, WaveHeader};
use crate::error::Result;

/// Ordered chain of transforms
pub struct TransformChain {
    transforms: Vec<Box<dyn Transform>>,
}

impl TransformChain {
    pub fn new() -> Self {
        Self {
            transforms: Vec::new(),
        }
    }

    /// Build a chain from parsed operations, in order
    pub fn from_operations(operations: &[Operation]) -> Result<Self> {
        let mut chain = Self::new();
        for op in operations {
            chain.add(op.into_transform()?);
        }
        Ok(chain)
    }

    /// Add a transform to the end of the chain
    pub fn add(&mut self, transform: Box<dyn Transform>) {
        self.transforms.push(transform);
    }

    /// Apply every transform to `buffer`, resyncing `header` after each
    /// length-changing step
    pub fn process(&self, header: &mut WaveHeader, buffer: StereoBuffer) -> Result<StereoBuffer> {
        let mut buffer = buffer;
        for transform in &self.transforms {
            let before = buffer.len();
            buffer = transform.apply(buffer)?;
            debug!(
                "Applied {} {}: {} -> {} samples per channel",
                transform.name(),
                transform.params(),
                before,
                buffer.len()
            );

            if transform.changes_length() {
                header.resync(buffer.len())?;
                debug!(
                    "Resynced header: data size {}, RIFF size {}",
                    header.data_chunk.size, header.size
                );
            }
        }
        Ok(buffer)
    }

    /// Apply the chain to a whole file
    pub fn process_file(&self, file: WaveFile) -> Result<WaveFile> {
        let WaveFile { mut header, buffer } = file;
        let buffer = self.process(&mut header, buffer)?;
        Ok(WaveFile { header, buffer })
    }

    /// Get number of transforms in chain
    pub fn len(&self) -> usize {
        self.transforms.len()
    }

    /// Check if chain is empty
    pub fn is_empty(&self) -> bool {
        self.transforms.is_empty()
    }

    /// Get transform names in order
    pub fn names(&self) -> Vec<&'static str> {
        self.transforms.iter().map(|t| t.name()).collect()
    }
}

impl Default for TransformChain {
    fn default() -> Self {
        Self::new()
    }
}
