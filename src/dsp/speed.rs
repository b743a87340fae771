//! Speed Transform
//!
//! Nearest-neighbour resampling. Factors above 1 shorten the audio (faster
//! playback), factors below 1 lengthen it.

use serde_json::{json, Value};

use crate::dsp::transform::Transform;
use crate::engine::buffer::try_alloc_channel;
use crate::error::{Result, WaveError};

/// Resample `samples` by `factor`
///
/// The output has `floor(len / factor)` samples and output index `i` takes
/// input sample `floor(i * factor)`.
///
/// # Errors
/// * `OutOfMemory` - if the resampled channel cannot be allocated
pub fn resample(samples: &[i16], factor: f64) -> Result<Vec<i16>> {
    let len = samples.len();
    let new_len = (len as f64 / factor).floor() as usize;
    let mut out = try_alloc_channel(new_len)?;

    for i in 0..new_len {
        let src = ((i as f64 * factor).floor() as usize).min(len - 1);
        out.push(samples[src]);
    }

    Ok(out)
}

/// Speed change applied to both channels
#[derive(Debug, Clone, Copy)]
pub struct Speed {
    factor: f64,
}

impl Speed {
    /// Create a speed change
    ///
    /// # Errors
    /// * `InvalidSpeed` - unless `factor` is positive and finite
    pub fn new(factor: f64) -> Result<Self> {
        if !(factor.is_finite() && factor > 0.0) {
            return Err(WaveError::InvalidSpeed {
                value: Some(factor.to_string()),
            });
        }
        Ok(Self { factor })
    }
}

impl Transform for Speed {
    fn name(&self) -> &'static str {
        "speed"
    }

    fn params(&self) -> Value {
        json!({ "factor": self.factor })
    }

    fn changes_length(&self) -> bool {
        true
    }

    fn process_channel(&self, samples: Vec<i16>) -> Result<Vec<i16>> {
        resample(&samples, self.factor)
    }
}
