//! Background particle field.
//!
//! Forty soft circles scattered over the screen, each breathing on its own
//! slow cycle. Positions and timing are drawn once per mount.

use std::ops::Range;

use rand::Rng;
use serde::Serialize;

use crate::motion::{Easing, Keyframes, Track, Transition};

/// Number of particles generated per mount
pub const PARTICLE_COUNT: usize = 40;

/// Horizontal and vertical position, percent of the container
pub const POSITION_RANGE: Range<f64> = 0.0..100.0;
/// Diameter in pixels
pub const SIZE_RANGE: Range<f64> = 10.0..40.0;
/// Loop period in seconds
pub const DURATION_RANGE: Range<f64> = 30.0..50.0;
/// Start offset in seconds
pub const DELAY_RANGE: Range<f64> = 0.0..10.0;

/// One randomly placed, independently animated particle
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ParticleDescriptor {
    /// Index within the generated set, used as the render key
    pub id: usize,
    pub x: f64,
    pub y: f64,
    pub size: f64,
    pub duration: f64,
    pub delay: f64,
}

impl ParticleDescriptor {
    /// Sample every field independently and uniformly
    pub fn sample<R: Rng + ?Sized>(id: usize, rng: &mut R) -> Self {
        Self {
            id,
            x: rng.random_range(POSITION_RANGE),
            y: rng.random_range(POSITION_RANGE),
            size: rng.random_range(SIZE_RANGE),
            duration: rng.random_range(DURATION_RANGE),
            delay: rng.random_range(DELAY_RANGE),
        }
    }

    pub fn transition(&self) -> Transition {
        Transition::looping(self.duration)
            .delay(self.delay)
            .ease(Easing::EaseInOut)
    }

    /// Opacity breathes low -> high -> low
    pub fn opacity_track(&self) -> Track<f64> {
        Track::new(Keyframes::of([0.1, 0.3, 0.1]), self.transition())
    }

    /// Scale swells 1 -> 1.2 -> 1
    pub fn scale_track(&self) -> Track<f64> {
        Track::new(Keyframes::of([1.0, 1.2, 1.0]), self.transition())
    }

    /// Both tracks, built together
    pub fn motion(&self) -> ParticleMotion {
        ParticleMotion {
            opacity: self.opacity_track(),
            scale: self.scale_track(),
        }
    }

    /// Whether every field lies inside its sampling range
    pub fn is_within_bounds(&self) -> bool {
        POSITION_RANGE.contains(&self.x)
            && POSITION_RANGE.contains(&self.y)
            && SIZE_RANGE.contains(&self.size)
            && DURATION_RANGE.contains(&self.duration)
            && DELAY_RANGE.contains(&self.delay)
    }
}

/// Animated properties of one particle
#[derive(Debug, Clone, PartialEq)]
pub struct ParticleMotion {
    pub opacity: Track<f64>,
    pub scale: Track<f64>,
}

/// Generate the full particle set for one mount
pub fn generate_particles<R: Rng + ?Sized>(rng: &mut R) -> Vec<ParticleDescriptor> {
    (0..PARTICLE_COUNT)
        .map(|id| ParticleDescriptor::sample(id, rng))
        .collect()
}
