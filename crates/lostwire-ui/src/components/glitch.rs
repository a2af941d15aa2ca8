//! Glitch Overlay Component
//!
//! Short, rare flashes that make the screen feel like a failing signal.

use dioxus::prelude::*;
use lostwire_core::{LineFlash, SwayMotion};

use crate::hooks::{use_glitch_motion, use_glitch_scene, use_motion_time};

/// Properties for the GlitchOverlay component
#[derive(Clone, PartialEq, Props)]
pub struct GlitchOverlayProps {
    /// Fixed seed for the random draw; `None` draws fresh on every mount
    #[props(default)]
    pub seed: Option<u64>,
}

/// Five full-screen tint flashes and ten hairline flashes.
///
/// Each flash keeps the jitter, position and repeat delay it was given on
/// mount.
#[component]
pub fn GlitchOverlay(props: GlitchOverlayProps) -> Element {
    let scene = use_glitch_scene(props.seed);
    let motion = use_glitch_motion(&scene);
    let now = use_motion_time();

    rsx! {
        for (flash, tracks) in scene.flashes.iter().zip(motion.flashes.iter()) {
            div {
                key: "glitch-{flash.id}",
                class: "glitch-flash",
                style: flash_style(tracks, now),
            }
        }

        for (line, tracks) in scene.line_flashes.iter().zip(motion.line_flashes.iter()) {
            div {
                key: "h-glitch-{line.id}",
                class: "glitch-line",
                style: line_flash_style(line, tracks, now),
            }
        }
    }
}

fn flash_style(tracks: &SwayMotion, now: f64) -> String {
    format!(
        "opacity: {:.3}; transform: translateX({:.2}px) scaleX({:.4});",
        tracks.opacity.value_at(now),
        tracks.offset_x.value_at(now),
        tracks.scale_x.value_at(now),
    )
}

fn line_flash_style(line: &LineFlash, tracks: &SwayMotion, now: f64) -> String {
    format!(
        "top: {:.3}%; opacity: {:.3}; transform: translateX({:.2}px) scaleX({:.4});",
        line.top,
        tracks.opacity.value_at(now),
        tracks.offset_x.value_at(now),
        tracks.scale_x.value_at(now),
    )
}
