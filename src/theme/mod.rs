//! Global theme for the desktop window.

mod styles;

pub use styles::GLOBAL_STYLES;
