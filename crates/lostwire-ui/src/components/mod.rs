//! Overlay components.

mod background;
mod glitch;
mod indicators;
mod screen;

pub use background::*;
pub use glitch::*;
pub use indicators::*;
pub use screen::*;
