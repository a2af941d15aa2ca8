//! Animated Background Component
//!
//! Three stacked layers behind the overlay content:
//! - a dark red gradient that slowly brightens and fades back
//! - forty soft particles, each breathing on its own period
//! - eight scan lines swaying out of phase
//!
//! The glitch overlay is rendered last, on top of all three.

use dioxus::prelude::*;
use lostwire_core::scene::gradient_css;
use lostwire_core::{ParticleDescriptor, ParticleMotion, ScanLine, SwayMotion};

use super::GlitchOverlay;
use crate::hooks::{use_background_motion, use_background_scene, use_motion_time};

/// Properties for the AnimatedBackground component
#[derive(Clone, PartialEq, Props)]
pub struct AnimatedBackgroundProps {
    /// Fixed seed for the random draw; `None` draws fresh on every mount
    #[props(default)]
    pub seed: Option<u64>,
}

/// Procedurally generated background
///
/// The particle set is drawn on the first render and kept for as long as
/// this component stays mounted; re-rendering the parent does not move
/// anything.
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     div { class: "background-layer",
///         AnimatedBackground {}
///     }
/// }
/// ```
#[component]
pub fn AnimatedBackground(props: AnimatedBackgroundProps) -> Element {
    let scene = use_background_scene(props.seed);
    let motion = use_background_motion(&scene);
    let now = use_motion_time();
    let gradient = gradient_css(motion.gradient.value_at(now));

    rsx! {
        div {
            class: "bg-gradient",
            style: "background: {gradient};",
        }

        div { class: "bg-particles",
            for (particle, tracks) in scene.particles.iter().zip(motion.particles.iter()) {
                div {
                    key: "{particle.id}",
                    class: "bg-particle",
                    style: particle_style(particle, tracks, now),
                }
            }
        }

        div { class: "bg-lines",
            for (line, tracks) in scene.lines.iter().zip(motion.lines.iter()) {
                div {
                    key: "line-{line.index}",
                    class: "bg-scan-line",
                    style: scan_line_style(line, tracks, now),
                }
            }
        }

        GlitchOverlay { seed: props.seed }
    }
}

fn particle_style(particle: &ParticleDescriptor, tracks: &ParticleMotion, now: f64) -> String {
    format!(
        "left: {:.3}%; top: {:.3}%; width: {:.3}px; height: {:.3}px; opacity: {:.3}; transform: scale({:.4});",
        particle.x,
        particle.y,
        particle.size,
        particle.size,
        tracks.opacity.value_at(now),
        tracks.scale.value_at(now),
    )
}

fn scan_line_style(line: &ScanLine, tracks: &SwayMotion, now: f64) -> String {
    format!(
        "top: {}%; opacity: {:.3}; transform: translateX({:.2}px) scaleX({:.4});",
        line.top,
        tracks.opacity.value_at(now),
        tracks.offset_x.value_at(now),
        tracks.scale_x.value_at(now),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn particle_style_places_and_sizes() {
        let particle = ParticleDescriptor {
            id: 0,
            x: 12.5,
            y: 99.0,
            size: 20.0,
            duration: 30.0,
            delay: 0.0,
        };
        assert_eq!(
            particle_style(&particle, &particle.motion(), 0.0),
            "left: 12.500%; top: 99.000%; width: 20.000px; height: 20.000px; opacity: 0.100; transform: scale(1.0000);"
        );
    }

    #[test]
    fn scan_line_style_starts_at_rest() {
        let line = ScanLine::new(2);
        assert_eq!(
            scan_line_style(&line, &line.motion(), 0.0),
            "top: 30%; opacity: 0.200; transform: translateX(0.00px) scaleX(1.0000);"
        );
    }
}
