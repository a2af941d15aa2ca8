//! Glitch flashes over the whole screen.
//!
//! Two layers of short, rare flashes: full-screen red tints that jitter
//! sideways, and white hairlines that snap open across the screen. Every
//! flash has its own jitter and its own pause between repeats, drawn once
//! per mount.

use std::ops::Range;

use rand::Rng;
use serde::Serialize;

use super::lines::SwayMotion;
use crate::motion::{Easing, Keyframes, Track, Transition};

pub const FLASH_LAYER_COUNT: usize = 5;
pub const LINE_FLASH_COUNT: usize = 10;

/// Length of one full-screen flash, in seconds
pub const FLASH_DURATION: f64 = 0.2;
/// Horizontal jitter at the flash peak, in pixels
pub const FLASH_JITTER_RANGE: Range<f64> = -5.0..5.0;
/// Horizontal stretch at the flash peak
pub const FLASH_SCALE_RANGE: Range<f64> = 1.01..1.11;
/// Pause between full-screen flashes, in seconds
pub const FLASH_REPEAT_DELAY_RANGE: Range<f64> = 3.0..8.0;

/// Length of one line flash, in seconds
pub const LINE_FLASH_DURATION: f64 = 0.4;
/// Vertical position, percent of the container
pub const LINE_TOP_RANGE: Range<f64> = 0.0..100.0;
/// Horizontal drift at the flash peak, in pixels
pub const LINE_DRIFT_RANGE: Range<f64> = -50.0..50.0;
/// Pause between line flashes, in seconds
pub const LINE_REPEAT_DELAY_RANGE: Range<f64> = 5.0..13.0;

/// A full-screen tinted flash
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FlashLayer {
    pub id: usize,
    pub x_jitter: f64,
    pub scale_jitter: f64,
    pub repeat_delay: f64,
}

impl FlashLayer {
    pub fn sample<R: Rng + ?Sized>(id: usize, rng: &mut R) -> Self {
        Self {
            id,
            x_jitter: rng.random_range(FLASH_JITTER_RANGE),
            scale_jitter: rng.random_range(FLASH_SCALE_RANGE),
            repeat_delay: rng.random_range(FLASH_REPEAT_DELAY_RANGE),
        }
    }

    pub fn transition(&self) -> Transition {
        Transition::looping(FLASH_DURATION)
            .repeat_delay(self.repeat_delay)
            .ease(Easing::EaseInOut)
    }

    pub fn opacity_track(&self) -> Track<f64> {
        Track::new(Keyframes::of([0.0, 0.05, 0.0]), self.transition())
    }

    pub fn offset_x_track(&self) -> Track<f64> {
        Track::new(Keyframes::of([0.0, self.x_jitter, 0.0]), self.transition())
    }

    pub fn scale_x_track(&self) -> Track<f64> {
        Track::new(Keyframes::of([1.0, self.scale_jitter, 1.0]), self.transition())
    }

    pub fn motion(&self) -> SwayMotion {
        SwayMotion {
            opacity: self.opacity_track(),
            offset_x: self.offset_x_track(),
            scale_x: self.scale_x_track(),
        }
    }

    pub fn is_within_bounds(&self) -> bool {
        FLASH_JITTER_RANGE.contains(&self.x_jitter)
            && FLASH_SCALE_RANGE.contains(&self.scale_jitter)
            && FLASH_REPEAT_DELAY_RANGE.contains(&self.repeat_delay)
    }
}

/// A thin horizontal line that flashes open and closed
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LineFlash {
    pub id: usize,
    pub top: f64,
    pub drift: f64,
    pub repeat_delay: f64,
}

impl LineFlash {
    pub fn sample<R: Rng + ?Sized>(id: usize, rng: &mut R) -> Self {
        Self {
            id,
            top: rng.random_range(LINE_TOP_RANGE),
            drift: rng.random_range(LINE_DRIFT_RANGE),
            repeat_delay: rng.random_range(LINE_REPEAT_DELAY_RANGE),
        }
    }

    pub fn transition(&self) -> Transition {
        Transition::looping(LINE_FLASH_DURATION)
            .repeat_delay(self.repeat_delay)
            .ease(Easing::EaseInOut)
    }

    pub fn opacity_track(&self) -> Track<f64> {
        Track::new(Keyframes::of([0.0, 0.7, 0.0]), self.transition())
    }

    pub fn scale_x_track(&self) -> Track<f64> {
        Track::new(Keyframes::of([0.0, 1.0, 0.0]), self.transition())
    }

    pub fn offset_x_track(&self) -> Track<f64> {
        Track::new(Keyframes::of([0.0, self.drift, 0.0]), self.transition())
    }

    pub fn motion(&self) -> SwayMotion {
        SwayMotion {
            opacity: self.opacity_track(),
            offset_x: self.offset_x_track(),
            scale_x: self.scale_x_track(),
        }
    }

    pub fn is_within_bounds(&self) -> bool {
        LINE_TOP_RANGE.contains(&self.top)
            && LINE_DRIFT_RANGE.contains(&self.drift)
            && LINE_REPEAT_DELAY_RANGE.contains(&self.repeat_delay)
    }
}

pub fn generate_flash_layers<R: Rng + ?Sized>(rng: &mut R) -> Vec<FlashLayer> {
    (0..FLASH_LAYER_COUNT)
        .map(|id| FlashLayer::sample(id, rng))
        .collect()
}

pub fn generate_line_flashes<R: Rng + ?Sized>(rng: &mut R) -> Vec<LineFlash> {
    (0..LINE_FLASH_COUNT)
        .map(|id| LineFlash::sample(id, rng))
        .collect()
}
