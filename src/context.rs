//! Settings context for the desktop overlay.
//!
//! Command-line settings are stored once at startup and provided to the
//! component tree through `use_context`.
//!
//! ## Usage
//!
//! ```ignore
//! // In App component
//! use_context_provider(get_settings);
//!
//! // In child components
//! let settings = use_settings();
//! ```

use dioxus::prelude::*;
use lostwire_core::FrameRate;
use lostwire_ui::DEFAULT_AVATAR_SRC;

/// Launch-time configuration of the overlay
#[derive(Clone, Debug, PartialEq)]
pub struct OverlaySettings {
    /// Avatar image path, handed to the webview as-is
    pub avatar_src: String,
    /// Fixed seed for the background draw; `None` draws fresh on every mount
    pub seed: Option<u64>,
    pub frame_rate: FrameRate,
}

impl Default for OverlaySettings {
    fn default() -> Self {
        Self {
            avatar_src: DEFAULT_AVATAR_SRC.to_string(),
            seed: None,
            frame_rate: FrameRate::default(),
        }
    }
}

/// Get the settings stored from command line args.
pub fn get_settings() -> OverlaySettings {
    crate::get_settings()
}

/// Hook to access the overlay settings from context.
pub fn use_settings() -> OverlaySettings {
    use_context::<OverlaySettings>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_settings() {
        let settings = OverlaySettings::default();
        assert_eq!(settings.avatar_src, "./avatar.png");
        assert_eq!(settings.seed, None);
        assert_eq!(settings.frame_rate.fps(), 30);
    }
}
