//! Echo Transform
//!
//! Appends a single attenuated, delayed copy of each channel. The channel
//! grows by the delay length.
//!
//! The echo is mixed onto the copied original: where the delayed copy
//! overlaps the original signal both are kept. Echoes do not feed back into
//! later echoes.

use serde_json::{json, Value};

use crate::dsp::transform::Transform;
use crate::engine::buffer::try_alloc_channel;
use crate::engine::{saturate, SAMPLE_RATE};
use crate::error::{Result, WaveError};

/// Delay length in samples
#[inline]
pub fn delay_samples(delay_secs: f64) -> usize {
    (SAMPLE_RATE as f64 * delay_secs).floor() as usize
}

/// Mix a copy of `samples`, delayed by `delay_secs` and scaled by `factor`
///
/// # Errors
/// * `OutOfMemory` - if the lengthened channel cannot be allocated
pub fn echo(samples: &[i16], delay_secs: f64, factor: f64) -> Result<Vec<i16>> {
    let offset = delay_samples(delay_secs);
    let new_len = samples
        .len()
        .checked_add(offset)
        .ok_or(WaveError::OutOfMemory { samples: usize::MAX })?;

    let mut out = try_alloc_channel(new_len)?;
    out.extend_from_slice(samples);
    out.resize(new_len, 0);

    for (j, &original) in samples.iter().enumerate() {
        let target = &mut out[j + offset];
        *target = saturate(*target as f64 + original as f64 * factor);
    }

    Ok(out)
}

/// Single-tap echo applied to both channels
#[derive(Debug, Clone, Copy)]
pub struct Echo {
    /// Delay in seconds
    delay: f64,
    /// Echo level relative to the original
    factor: f64,
}

impl Echo {
    /// Create an echo
    ///
    /// # Errors
    /// * `InvalidEcho` - unless both `delay` and `factor` are positive and finite
    pub fn new(delay: f64, factor: f64) -> Result<Self> {
        for value in [delay, factor] {
            if !(value.is_finite() && value > 0.0) {
                return Err(WaveError::InvalidEcho {
                    value: Some(value.to_string()),
                });
            }
        }
        Ok(Self { delay, factor })
    }
}

impl Transform for Echo {
    fn name(&self) -> &'static str {
        "echo"
    }

    fn params(&self) -> Value {
        json!({
            "delay": self.delay,
            "factor": self.factor,
            "delay_samples": delay_samples(self.delay),
        })
    }

    fn changes_length(&self) -> bool {
        true
    }

    fn process_channel(&self, samples: Vec<i16>) -> Result<Vec<i16>> {
        echo(&samples, self.delay, self.factor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_impulse_echo() {
        let mut samples = vec![0i16; 44100];
        samples[0] = 1000;

        let out = echo(&samples, 0.001, 0.5).unwrap();

        assert_eq!(out.len(), 44100 + 44);
        assert_eq!(out[0], 1000);
        assert_eq!(out[44], 500);
        assert_eq!(out.iter().filter(|&&s| s != 0).count(), 2);
    }

    #[test]
    fn test_echo_overlap_keeps_original() {
        let samples = vec![100, 200, 300, 400];
        // 2-sample delay
        let out = echo(&samples, 2.0 / 44100.0 + 1e-9, 0.5).unwrap();

        assert_eq!(out, vec![100, 200, 350, 500, 150, 200]);
    }

    #[test]
    fn test_echo_is_not_recursive() {
        let samples = vec![1000, 0, 0, 0];
        let out = echo(&samples, 1.0 / 44100.0 + 1e-9, 0.5).unwrap();
        // A feedback delay would put 250 at index 2
        assert_eq!(out, vec![1000, 500, 0, 0, 0]);
    }

    #[test]
    fn test_echo_saturates() {
        let samples = vec![30000, -30000, 20000, -20000];
        let out = echo(&samples, 2.0 / 44100.0 + 1e-9, 1.0).unwrap();
        assert_eq!(out, vec![30000, -30000, 32767, -32768, 20000, -20000]);
    }

    #[test]
    fn test_echo_empty_channel_grows_silent() {
        let out = echo(&[], 0.001, 0.5).unwrap();
        assert_eq!(out, vec![0i16; 44]);
    }

    #[test]
    fn test_new_validates_both_arguments() {
        assert!(matches!(
            Echo::new(0.0, 0.5),
            Err(WaveError::InvalidEcho { .. })
        ));
        assert!(matches!(
            Echo::new(0.5, -1.0),
            Err(WaveError::InvalidEcho { .. })
        ));
        let echo = Echo::new(0.1, 0.5).unwrap();
        assert!(echo.changes_length());
        assert_eq!(echo.params()["delay_samples"], 4410);
    }
}
