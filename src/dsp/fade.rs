//! Fade Transforms
//!
//! Quadratic fade-in and fade-out envelopes over a window of
//! `k = floor(44100 * seconds)` samples.
//!
//! When the channel is shorter than the window the whole channel is faded
//! and the envelope is only partially traversed: a fade-out starts partway
//! through the curve, and a fade-in never reaches full amplitude.

use serde_json::{json, Value};

use crate::dsp::transform::Transform;
use crate::engine::{saturate, SAMPLE_RATE};
use crate::error::{Result, WaveError};

// ============================================================================
// Helper Functions
// ============================================================================

/// Fade window length in samples
#[inline]
pub fn window_len(seconds: f64) -> usize {
    (SAMPLE_RATE as f64 * seconds).floor() as usize
}

fn check_seconds(seconds: f64) -> Result<()> {
    if seconds.is_finite() && seconds > 0.0 {
        Ok(())
    } else {
        Err(WaveError::InvalidFadeTime {
            value: Some(seconds.to_string()),
        })
    }
}

/// Scale the final `k` samples by `(1 - j/k)^2`
pub fn fade_out(samples: &mut [i16], seconds: f64) {
    let k = window_len(seconds);
    if k == 0 {
        return;
    }

    let len = samples.len();
    let (start, j0) = if len < k { (0, k - len) } else { (len - k, 0) };
    let k = k as f64;

    for (offset, sample) in samples[start..].iter_mut().enumerate() {
        let j = (j0 + offset) as f64;
        let gain = (1.0 - j / k).powi(2);
        *sample = saturate(*sample as f64 * gain);
    }
}

/// Scale the first `k` samples by `(j/k)^2`
pub fn fade_in(samples: &mut [i16], seconds: f64) {
    let k = window_len(seconds);
    if k == 0 {
        return;
    }

    let end = samples.len().min(k);
    let k = k as f64;

    for (j, sample) in samples[..end].iter_mut().enumerate() {
        let gain = (j as f64 / k).powi(2);
        *sample = saturate(*sample as f64 * gain);
    }
}

// ============================================================================
// Fade Out
// ============================================================================

#[derive(Debug, Clone, Copy)]
pub struct FadeOut {
    seconds: f64,
}

impl FadeOut {
    /// # Errors
    /// * `InvalidFadeTime` - unless `seconds` is positive and finite
    pub fn new(seconds: f64) -> Result<Self> {
        check_seconds(seconds)?;
        Ok(Self { seconds })
    }
}

impl Transform for FadeOut {
    fn name(&self) -> &'static str {
        "fade_out"
    }

    fn params(&self) -> Value {
        json!({ "seconds": self.seconds, "window": window_len(self.seconds) })
    }

    fn process_channel(&self, mut samples: Vec<i16>) -> Result<Vec<i16>> {
        fade_out(&mut samples, self.seconds);
        Ok(samples)
    }
}

// ============================================================================
// Fade In
// ============================================================================

#[derive(Debug, Clone, Copy)]
pub struct FadeIn {
    seconds: f64,
}

impl FadeIn {
    /// # Errors
    /// * `InvalidFadeTime` - unless `seconds` is positive and finite
    pub fn new(seconds: f64) -> Result<Self> {
        check_seconds(seconds)?;
        Ok(Self { seconds })
    }
}

impl Transform for FadeIn {
    fn name(&self) -> &'static str {
        "fade_in"
    }

    fn params(&self) -> Value {
        json!({ "seconds": self.seconds, "window": window_len(self.seconds) })
    }

    fn process_channel(&self, mut samples: Vec<i16>) -> Result<Vec<i16>> {
        fade_in(&mut samples, self.seconds);
        Ok(samples)
    }
}

// ============================================================================
// Tests
// ============================================================================
