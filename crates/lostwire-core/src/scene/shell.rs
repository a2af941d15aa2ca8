//! Fixed animation tables for the foreground of the screen.
//!
//! Nothing here is random: the brand label, avatar, alert glyph and status
//! text loop on fixed periods, and the three content groups fade in once
//! after mount.

use crate::motion::{Easing, Keyframes, Rgba, Track, Transition};

/// Red used for glows and borders
pub const ALERT_RED: Rgba = Rgba::rgb(239, 68, 68);

pub const BRAND_LABEL: &str = "DBR";
pub const STATUS_HEADLINE: &str = "CONNECTION LOST";
pub const STATUS_DETAIL: &str = "Attempting to reconnect...";

/// Brand label text-shadow: blur radius (px) and glow color
pub struct BrandGlow {
    pub blur: Track<f64>,
    pub color: Track<Rgba>,
}

impl BrandGlow {
    pub fn new() -> Self {
        let timing = Transition::looping(2.0).ease(Easing::EaseInOut);
        Self {
            blur: Track::new(Keyframes::of([8.0, 12.0, 8.0]), timing),
            color: Track::new(
                Keyframes::of([
                    ALERT_RED.with_alpha(0.7),
                    ALERT_RED.with_alpha(0.9),
                    ALERT_RED.with_alpha(0.7),
                ]),
                timing,
            ),
        }
    }

    /// CSS `text-shadow` value at `elapsed`
    pub fn text_shadow(&self, elapsed: f64) -> String {
        format!(
            "0 0 {:.2}px {}",
            self.blur.value_at(elapsed),
            self.color.value_at(elapsed)
        )
    }
}

impl Default for BrandGlow {
    fn default() -> Self {
        Self::new()
    }
}

/// Avatar frame: gentle swell plus a ring glow cycling three states
pub struct AvatarGlow {
    pub scale: Track<f64>,
    pub spread: Track<f64>,
    pub color: Track<Rgba>,
}

impl AvatarGlow {
    pub fn new() -> Self {
        let timing = Transition::looping(3.0).ease(Easing::EaseInOut);
        Self {
            scale: Track::new(Keyframes::of([1.0, 1.03, 1.0]), timing),
            spread: Track::new(Keyframes::of([3.0, 4.0, 3.0]), timing),
            color: Track::new(
                Keyframes::of([
                    ALERT_RED.with_alpha(0.3),
                    ALERT_RED.with_alpha(0.5),
                    ALERT_RED.with_alpha(0.3),
                ]),
                timing,
            ),
        }
    }

    /// CSS `box-shadow` value at `elapsed`
    pub fn box_shadow(&self, elapsed: f64) -> String {
        format!(
            "0 0 0 {:.2}px {}",
            self.spread.value_at(elapsed),
            self.color.value_at(elapsed)
        )
    }
}

impl Default for AvatarGlow {
    fn default() -> Self {
        Self::new()
    }
}

/// Alert glyph pulse: scale and opacity on a 2s loop
pub fn alert_scale() -> Track<f64> {
    Track::new(Keyframes::of([1.0, 1.05, 1.0]), Transition::looping(2.0))
}

pub fn alert_opacity() -> Track<f64> {
    Track::new(Keyframes::of([1.0, 0.8, 1.0]), Transition::looping(2.0))
}

/// Headline opacity pulse on a 2.5s loop
pub fn headline_opacity() -> Track<f64> {
    Track::new(
        Keyframes::of([1.0, 0.7, 1.0]),
        Transition::looping(2.5).ease(Easing::EaseInOut),
    )
}

/// Loading indicator rotation in degrees
pub fn spinner_rotation() -> Track<f64> {
    Track::new(
        Keyframes::of([0.0, 360.0]),
        Transition::looping(0.8).ease(Easing::Linear),
    )
}

/// One-shot entrance for a content group: fade plus a slide or zoom
pub struct Entrance {
    pub opacity: Track<f64>,
    /// Vertical offset in pixels
    pub offset_y: Track<f64>,
    pub scale: Track<f64>,
}

impl Entrance {
    /// Top group: drops in from 20px above
    pub fn top() -> Self {
        let timing = Transition::once(0.7);
        Self {
            opacity: Track::new(Keyframes::of([0.0, 1.0]), timing),
            offset_y: Track::new(Keyframes::of([-20.0, 0.0]), timing),
            scale: Track::new(Keyframes::constant(1.0), timing),
        }
    }

    /// Center group: zooms up from 90% after 0.3s
    pub fn center() -> Self {
        let timing = Transition::once(0.8).delay(0.3);
        Self {
            opacity: Track::new(Keyframes::of([0.0, 1.0]), timing),
            offset_y: Track::new(Keyframes::constant(0.0), timing),
            scale: Track::new(Keyframes::of([0.9, 1.0]), timing),
        }
    }

    /// Bottom group: rises from 20px below after 0.5s
    pub fn bottom() -> Self {
        let timing = Transition::once(0.7).delay(0.5);
        Self {
            opacity: Track::new(Keyframes::of([0.0, 1.0]), timing),
            offset_y: Track::new(Keyframes::of([20.0, 0.0]), timing),
            scale: Track::new(Keyframes::constant(1.0), timing),
        }
    }

    /// Inline style for the group at `elapsed`
    pub fn style(&self, elapsed: f64) -> String {
        format!(
            "opacity: {:.3}; transform: translateY({:.2}px) scale({:.4});",
            self.opacity.value_at(elapsed),
            self.offset_y.value_at(elapsed),
            self.scale.value_at(elapsed)
        )
    }
}

/// Every foreground track the screen itself samples, built once per mount
pub struct ShellMotion {
    pub top: Entrance,
    pub center: Entrance,
    pub bottom: Entrance,
    pub brand: BrandGlow,
    pub avatar: AvatarGlow,
    pub headline_opacity: Track<f64>,
}

impl ShellMotion {
    pub fn new() -> Self {
        Self {
            top: Entrance::top(),
            center: Entrance::center(),
            bottom: Entrance::bottom(),
            brand: BrandGlow::new(),
            avatar: AvatarGlow::new(),
            headline_opacity: headline_opacity(),
        }
    }
}

impl Default for ShellMotion {
    fn default() -> Self {
        Self::new()
    }
}

/// Alert glyph scale and opacity, sharing one loop
pub struct AlertPulse {
    pub scale: Track<f64>,
    pub opacity: Track<f64>,
}

impl AlertPulse {
    pub fn new() -> Self {
        Self {
            scale: alert_scale(),
            opacity: alert_opacity(),
        }
    }
}

impl Default for AlertPulse {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn brand_glow_cycles_every_two_seconds() {
        let glow = BrandGlow::new();
        assert_eq!(glow.text_shadow(0.0), "0 0 8.00px rgba(239, 68, 68, 0.700)");
        assert_eq!(glow.text_shadow(1.0), "0 0 12.00px rgba(239, 68, 68, 0.900)");
        assert_eq!(glow.text_shadow(2.0), glow.text_shadow(0.0));
    }

    #[test]
    fn avatar_ring_has_three_states() {
        let glow = AvatarGlow::new();
        assert_eq!(glow.box_shadow(0.0), "0 0 0 3.00px rgba(239, 68, 68, 0.300)");
        assert_eq!(glow.box_shadow(1.5), "0 0 0 4.00px rgba(239, 68, 68, 0.500)");
        assert!((glow.scale.value_at(1.5) - 1.03).abs() < 1e-9);
    }

    #[test]
    fn pulses_dip_at_half_period() {
        assert!((alert_opacity().value_at(1.0) - 0.8).abs() < 1e-9);
        assert!((alert_scale().value_at(1.0) - 1.05).abs() < 1e-9);
        assert!((headline_opacity().value_at(1.25) - 0.7).abs() < 1e-9);

        let pulse = AlertPulse::new();
        assert!((pulse.opacity.value_at(1.0) - 0.8).abs() < 1e-9);
        assert_eq!(pulse.scale.value_at(2.0), 1.0);
    }

    #[test]
    fn spinner_turns_linearly() {
        let spin = spinner_rotation();
        assert!((spin.value_at(0.2) - 90.0).abs() < 1e-9);
        assert!((spin.value_at(1.0) - 90.0).abs() < 1e-6);
    }

    #[test]
    fn entrances_settle_in_place() {
        for entrance in [Entrance::top(), Entrance::center(), Entrance::bottom()] {
            assert_eq!(
                entrance.style(10.0),
                "opacity: 1.000; transform: translateY(0.00px) scale(1.0000);"
            );
        }
        assert_eq!(Entrance::top().opacity.value_at(0.0), 0.0);
        assert_eq!(Entrance::bottom().offset_y.value_at(0.4), 20.0);
        assert_eq!(Entrance::center().scale.value_at(0.0), 0.9);
    }

    #[test]
    fn shell_motion_staggers_groups() {
        let shell = ShellMotion::new();
        // At 0.4s the top group is fading in while the others wait
        assert!(shell.top.opacity.value_at(0.4) > 0.0);
        assert_eq!(shell.center.opacity.value_at(0.3), 0.0);
        assert_eq!(shell.bottom.opacity.value_at(0.4), 0.0);
        assert_eq!(shell.brand.text_shadow(1.0), BrandGlow::new().text_shadow(1.0));
    }
}
