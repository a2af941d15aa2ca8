use dioxus::prelude::*;
use lostwire_ui::{ConnectionLostScreen, OVERLAY_STYLES};

use crate::context::{get_settings, use_settings};
use crate::theme::GLOBAL_STYLES;

/// Root application component.
///
/// Provides global styles and settings context, then fills the window with
/// the connection-lost screen.
#[component]
pub fn App() -> Element {
    use_context_provider(get_settings);

    rsx! {
        style { {GLOBAL_STYLES} }
        style { {OVERLAY_STYLES} }
        Overlay {}
    }
}

#[component]
fn Overlay() -> Element {
    let settings = use_settings();

    rsx! {
        main { class: "app-shell",
            ConnectionLostScreen {
                avatar_src: settings.avatar_src.clone(),
                seed: settings.seed,
                frame_rate: settings.frame_rate,
            }
        }
    }
}
