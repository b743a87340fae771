//! Flip Transform
//!
//! Swaps the left and right channels.

use serde_json::{json, Value};

use crate::dsp::transform::Transform;
use crate::engine::StereoBuffer;
use crate::error::Result;

#[derive(Debug, Clone, Copy, Default)]
pub struct Flip;

impl Transform for Flip {
    fn name(&self) -> &'static str {
        "flip"
    }

    fn params(&self) -> Value {
        json!({})
    }

    fn process_channel(&self, samples: Vec<i16>) -> Result<Vec<i16>> {
        Ok(samples)
    }

    fn apply(&self, mut buffer: StereoBuffer) -> Result<StereoBuffer> {
        buffer.flip();
        Ok(buffer)
    }
}
