//! Connection Lost Screen
//!
//! The full overlay: animated background behind three stacked groups.
//! - top: pulsing "DBR" brand label
//! - center: avatar in a glowing frame
//! - bottom: alert glyph, "CONNECTION LOST", and the reconnect line
//!
//! Purely presentational. Nothing here knows about an actual connection.

use std::rc::Rc;

use dioxus::prelude::*;
use lostwire_core::scene::shell::{ShellMotion, BRAND_LABEL, STATUS_DETAIL, STATUS_HEADLINE};
use lostwire_core::FrameRate;

use super::{AlertGlyph, AnimatedBackground, Spinner};
use crate::hooks::use_motion_clock;

/// Avatar image path used when none is configured
pub const DEFAULT_AVATAR_SRC: &str = "./avatar.png";

/// Properties for the ConnectionLostScreen component
#[derive(Clone, PartialEq, Props)]
pub struct ConnectionLostScreenProps {
    /// Path of the avatar image; a missing file shows the webview's
    /// broken-image placeholder
    #[props(default = DEFAULT_AVATAR_SRC.to_string())]
    pub avatar_src: String,
    /// Fixed seed for the background draw
    #[props(default)]
    pub seed: Option<u64>,
    /// Tick rate of the motion clock
    #[props(default)]
    pub frame_rate: FrameRate,
    /// Render a still frame at this many seconds instead of animating
    #[props(default)]
    pub frozen_at: Option<f64>,
}

/// Animated "connection lost / reconnecting" overlay
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     div { style: "width: 100%; height: 100vh;",
///         ConnectionLostScreen { avatar_src: "./2.png".to_string() }
///     }
/// }
/// ```
#[component]
pub fn ConnectionLostScreen(props: ConnectionLostScreenProps) -> Element {
    let clock = use_motion_clock(props.frame_rate, props.frozen_at);
    let shell = use_hook(|| Rc::new(ShellMotion::new()));
    let now = clock.now();

    use_hook(|| {
        tracing::info!(
            seed = ?props.seed,
            frame_rate = %props.frame_rate,
            "Connection lost screen mounted"
        );
    });

    let top = shell.top.style(now);
    let center = shell.center.style(now);
    let bottom = shell.bottom.style(now);

    let brand_style = format!("text-shadow: {};", shell.brand.text_shadow(now));

    let avatar_style = format!(
        "transform: scale({:.4}); box-shadow: {};",
        shell.avatar.scale.value_at(now),
        shell.avatar.box_shadow(now)
    );

    let headline_style = format!("opacity: {:.3};", shell.headline_opacity.value_at(now));

    rsx! {
        div { class: "connection-lost",
            div { class: "background-layer",
                AnimatedBackground { seed: props.seed }
            }

            div { class: "overlay-content",
                div { class: "content-group brand-group", style: top,
                    h1 { class: "brand-label", style: brand_style, "{BRAND_LABEL}" }
                }

                div { class: "content-group avatar-group", style: center,
                    div { class: "avatar-frame", style: avatar_style,
                        div { class: "avatar-card",
                            img {
                                class: "avatar-image",
                                src: "{props.avatar_src}",
                                alt: "Status avatar",
                            }
                        }
                    }
                }

                div { class: "content-group status-group", style: bottom,
                    div { class: "content-group",
                        AlertGlyph {}
                        h2 { class: "status-headline", style: headline_style, "{STATUS_HEADLINE}" }
                    }

                    div { class: "status-detail",
                        Spinner {}
                        p { class: "status-detail-text", "{STATUS_DETAIL}" }
                    }
                }
            }
        }
    }
}
