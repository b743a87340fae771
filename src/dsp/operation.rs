//! Operations requested on the command line
//!
//! An `Operation` is the parsed, parameterised form of one effect flag. It
//! turns into the boxed transform the chain runs.

use serde::Serialize;

use crate::dsp::{Echo, FadeIn, FadeOut, Flip, Reverse, Speed, Transform, Volume};
use crate::error::Result;

/// One step of the processing plan
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Operation {
    Reverse,
    Speed { factor: f64 },
    Flip,
    FadeOut { seconds: f64 },
    FadeIn { seconds: f64 },
    Volume { factor: f64 },
    Echo { delay: f64, factor: f64 },
}

impl Operation {
    /// Build the transform, validating its parameters
    pub fn into_transform(self) -> Result<Box<dyn Transform>> {
        Ok(match self {
            Operation::Reverse => Box::new(Reverse),
            Operation::Speed { factor } => Box::new(Speed::new(factor)?),
            Operation::Flip => Box::new(Flip),
            Operation::FadeOut { seconds } => Box::new(FadeOut::new(seconds)?),
            Operation::FadeIn { seconds } => Box::new(FadeIn::new(seconds)?),
            Operation::Volume { factor } => Box::new(Volume::new(factor)?),
            Operation::Echo { delay, factor } => Box::new(Echo::new(delay, factor)?),
        })
    }
}
