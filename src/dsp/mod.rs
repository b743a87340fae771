//! Sample-buffer transforms
//!
//! Every transform implements the `Transform` trait and is run through a
//! `TransformChain` in command-line order.

mod chain;
mod echo;
mod fade;
mod flip;
mod operation;
mod reverse;
mod speed;
mod transform;
mod volume;

pub use chain::TransformChain;
pub use echo::{delay_samples, echo, Echo};
pub use fade::{fade_in, fade_out, window_len, FadeIn, FadeOut};
pub use flip::Flip;
pub use operation::Operation;
pub use reverse::{reverse, Reverse};
pub use speed::{resample, Speed};
pub use transform::Transform;
pub use volume::{scale, Volume};
