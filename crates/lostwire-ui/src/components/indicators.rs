//! Small animated indicators for the status message.

use std::rc::Rc;

use dioxus::prelude::*;
use lostwire_core::scene::shell::{self, AlertPulse};

use crate::hooks::use_motion_time;

/// Rotating loading ring
#[component]
pub fn Spinner() -> Element {
    let rotation = use_hook(|| Rc::new(shell::spinner_rotation()));
    let now = use_motion_time();
    let angle = rotation.value_at(now);
    let style = format!("display: inline-block; transform: rotate({angle:.1}deg);");

    rsx! {
        span {
            class: "spinner",
            role: "progressbar",
            style: style,
        }
    }
}

/// Pulsing "wifi off" glyph
#[component]
pub fn AlertGlyph(#[props(default = 60)] size: u32) -> Element {
    let pulse = use_hook(|| Rc::new(AlertPulse::new()));
    let now = use_motion_time();
    let scale = pulse.scale.value_at(now);
    let opacity = pulse.opacity.value_at(now);
    let style = format!("opacity: {opacity:.3}; transform: scale({scale:.4});");

    rsx! {
        div {
            class: "alert-glyph",
            style: style,
            svg {
                view_box: "0 0 24 24",
                width: "{size}",
                height: "{size}",
                fill: "none",
                stroke: "currentColor",
                stroke_width: "2",
                stroke_linecap: "round",
                stroke_linejoin: "round",
                "aria-hidden": "true",
                path { d: "M12 20h.01" }
                path { d: "M8.5 16.429a5 5 0 0 1 7 0" }
                path { d: "M5 12.859a10 10 0 0 1 5.17-2.69" }
                path { d: "M19 12.859a10 10 0 0 0-2.007-1.523" }
                path { d: "M2 8.82a15 15 0 0 1 4.177-2.643" }
                path { d: "M22 8.82a15 15 0 0 0-11.288-3.764" }
                path { d: "m2 2 20 20" }
            }
        }
    }
}
