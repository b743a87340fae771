//! Volume Transform
//!
//! Linear volume scaling with 16-bit saturation.

use serde_json::{json, Value};

use crate::dsp::transform::Transform;
use crate::engine::saturate;
use crate::error::{Result, WaveError};

/// Multiply every sample by `factor`, saturating
pub fn scale(samples: &mut [i16], factor: f64) {
    for sample in samples.iter_mut() {
        *sample = saturate(*sample as f64 * factor);
    }
}

/// Volume scaling effect
///
/// # Example
/// ```
/// use wavefx::dsp::{Transform, Volume};
/// use wavefx::engine::StereoBuffer;
///
/// let volume = Volume::new(2.0).unwrap();
/// let buffer = StereoBuffer::new(vec![30000, 100], vec![-30000, -100]);
/// let louder = volume.apply(buffer).unwrap();
/// assert_eq!(louder.left, vec![32767, 200]);
/// assert_eq!(louder.right, vec![-32768, -200]);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Volume {
    factor: f64,
}

impl Volume {
    /// Create a volume change
    ///
    /// # Errors
    /// * `InvalidVolume` - unless `factor` is positive and finite
    pub fn new(factor: f64) -> Result<Self> {
        if !(factor.is_finite() && factor > 0.0) {
            return Err(WaveError::InvalidVolume {
                value: Some(factor.to_string()),
            });
        }
        Ok(Self { factor })
    }
}

impl Transform for Volume {
    fn name(&self) -> &'static str {
        "volume"
    }

    fn params(&self) -> Value {
        json!({ "factor": self.factor })
    }

    fn process_channel(&self, mut samples: Vec<i16>) -> Result<Vec<i16>> {
        scale(&mut samples, self.factor);
        Ok(samples)
    }
}
