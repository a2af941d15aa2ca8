//! Keyframe animation primitives.
//!
//! An animated property is a [`Track`]: a [`Keyframes`] list of values
//! spread evenly across one period, and a [`Transition`] describing timing
//! (duration, start delay, repeat behaviour, easing). Sampling a track at an
//! elapsed time yields the value to render for that frame:
//!
//! ```text
//! elapsed --Transition--> progress [0,1] --Keyframes+Easing--> value
//! ```
//!
//! Easing is applied per keyframe segment, so a three-point pulse
//! `low -> high -> low` eases in and out of both halves.

mod easing;
mod keyframes;
mod lerp;
mod transition;

pub use easing::Easing;
pub use keyframes::Keyframes;
pub use lerp::{Lerp, Rgba};
pub use transition::{Repeat, Track, Transition};
