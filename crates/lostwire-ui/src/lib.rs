//! Lostwire UI Components
//!
//! Dioxus components for the "connection lost" overlay.
//!
//! ## Layering
//!
//! ```text
//! ConnectionLostScreen          owns the motion clock
//! ├── AnimatedBackground        gradient, 40 particles, 8 scan lines
//! │   └── GlitchOverlay         5 tint flashes, 10 line flashes
//! └── foreground                brand label, avatar, status message
//! ```
//!
//! Every animation is sampled from the shared [`MotionClock`] each frame.
//! Randomized content is drawn once per mount through [`use_background_scene`]
//! and [`use_glitch_scene`] and held for the lifetime of the component.

pub mod components;
pub mod hooks;
pub mod theme;

pub use components::*;
pub use hooks::*;
pub use theme::OVERLAY_STYLES;
