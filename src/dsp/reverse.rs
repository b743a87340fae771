//! Reverse Transform
//!
//! Plays each channel backwards.

use serde_json::{json, Value};

use crate::dsp::transform::Transform;
use crate::error::Result;

/// Mirror `samples` in place
pub fn reverse(samples: &mut [i16]) {
    let len = samples.len();
    for i in 0..len / 2 {
        samples.swap(i, len - 1 - i);
    }
}

/// Reverses both channels
#[derive(Debug, Clone, Copy, Default)]
pub struct Reverse;

impl Transform for Reverse {
    fn name(&self) -> &'static str {
        "reverse"
    }

    fn params(&self) -> Value {
        json!({})
    }

    fn process_channel(&self, mut samples: Vec<i16>) -> Result<Vec<i16>> {
        reverse(&mut samples);
        Ok(samples)
    }
}
