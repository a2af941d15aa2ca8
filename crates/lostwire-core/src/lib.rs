//! Lostwire Core Library
//!
//! Motion engine and procedural scene generation for the "connection lost"
//! overlay.
//!
//! ## Overview
//!
//! The overlay is a purely decorative screen: a glowing brand mark, a status
//! avatar, a status message, and a busy background of drifting particles,
//! scan lines and glitch flashes. Nothing here talks to a network. This crate
//! holds everything that can be reasoned about without a renderer:
//!
//! - **Motion**: keyframe lists, easing curves and looping transitions,
//!   sampled against elapsed time
//! - **Scene**: the randomized descriptor sets backing the background and
//!   glitch layers, plus the fixed animation tables for the foreground
//! - **Config**: validated frame rate for the frame clock
//!
//! ## Quick Start
//!
//! ```ignore
//! use lostwire_core::{BackgroundScene, Track};
//!
//! let scene = BackgroundScene::generate(&mut rand::rng());
//! for particle in &scene.particles {
//!     let opacity = particle.opacity_track().value_at(12.5);
//!     println!("{} at ({:.1}%, {:.1}%) opacity {:.2}", particle.id, particle.x, particle.y, opacity);
//! }
//! ```

pub mod config;
pub mod error;
pub mod motion;
pub mod scene;

// Re-exports
pub use config::{FrameRate, DEFAULT_FRAME_RATE};
pub use error::{MotionError, MotionResult};
pub use motion::{Easing, Keyframes, Lerp, Repeat, Rgba, Track, Transition};
pub use scene::{
    BackgroundMotion, BackgroundScene, FlashLayer, GlitchMotion, GlitchScene, LineFlash,
    ParticleDescriptor, ParticleMotion, Scene, ScanLine, SwayMotion,
};
