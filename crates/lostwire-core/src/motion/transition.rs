//! Timing for keyframe animations.

use serde::Serialize;

use super::{Easing, Keyframes, Lerp};

/// Whether an animation plays once or loops
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Repeat {
    /// Play once and hold the final keyframe
    Never,
    /// Restart after every period (plus repeat delay), with no end
    #[default]
    Forever,
}

/// Timing parameters shared by every property of one animated element
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Transition {
    /// Length of one pass through the keyframes, in seconds
    pub duration: f64,
    /// Wait before the first pass starts
    pub delay: f64,
    pub repeat: Repeat,
    /// Pause between passes, holding the final keyframe
    pub repeat_delay: f64,
    pub ease: Easing,
}

impl Transition {
    /// Looping transition with no delays and the default easing
    pub fn looping(duration: f64) -> Self {
        Self {
            duration,
            delay: 0.0,
            repeat: Repeat::Forever,
            repeat_delay: 0.0,
            ease: Easing::default(),
        }
    }

    /// One-shot transition, eased out
    pub fn once(duration: f64) -> Self {
        Self {
            repeat: Repeat::Never,
            ease: Easing::EaseOut,
            ..Self::looping(duration)
        }
    }

    pub fn delay(mut self, delay: f64) -> Self {
        self.delay = delay;
        self
    }

    pub fn repeat_delay(mut self, repeat_delay: f64) -> Self {
        self.repeat_delay = repeat_delay;
        self
    }

    pub fn ease(mut self, ease: Easing) -> Self {
        self.ease = ease;
        self
    }

    /// Length of one full cycle including the pause between passes
    pub fn cycle(&self) -> f64 {
        self.duration + self.repeat_delay.max(0.0)
    }

    /// Linear progress through the current pass at `elapsed` seconds.
    ///
    /// Zero until the start delay has passed. A one-shot transition saturates
    /// at 1; a looping one restarts every [`cycle`](Self::cycle) and holds at 1
    /// during the repeat delay.
    pub fn progress_at(&self, elapsed: f64) -> f64 {
        let t = elapsed - self.delay;
        if t.is_nan() || t <= 0.0 {
            return 0.0;
        }
        if self.duration <= 0.0 {
            return 1.0;
        }

        match self.repeat {
            Repeat::Never => (t / self.duration).min(1.0),
            Repeat::Forever => {
                let local = t % self.cycle();
                if local >= self.duration {
                    1.0
                } else {
                    local / self.duration
                }
            }
        }
    }
}

/// One animated property: its keyframes and timing
#[derive(Debug, Clone, PartialEq)]
pub struct Track<T> {
    pub keyframes: Keyframes<T>,
    pub transition: Transition,
}

impl<T: Lerp> Track<T> {
    pub fn new(keyframes: Keyframes<T>, transition: Transition) -> Self {
        Self {
            keyframes,
            transition,
        }
    }

    /// Value to render `elapsed` seconds after mount
    pub fn value_at(&self, elapsed: f64) -> T {
        let progress = self.transition.progress_at(elapsed);
        self.keyframes.sample(progress, self.transition.ease)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn nothing_moves_before_delay() {
        let t = Transition::looping(8.0).delay(3.5);
        assert_eq!(t.progress_at(0.0), 0.0);
        assert_eq!(t.progress_at(3.5), 0.0);
        assert!(close(t.progress_at(5.5), 0.25));
    }

    #[test]
    fn looping_wraps_each_period() {
        let t = Transition::looping(2.0);
        assert!(close(t.progress_at(0.5), 0.25));
        assert!(close(t.progress_at(2.5), 0.25));
        assert!(close(t.progress_at(41.0), 0.5));
    }

    #[test]
    fn repeat_delay_holds_final_frame() {
        // 0.2s flash followed by a 4s pause
        let t = Transition::looping(0.2).repeat_delay(4.0);
        assert!(close(t.progress_at(0.1), 0.5));
        assert_eq!(t.progress_at(0.2), 1.0);
        assert_eq!(t.progress_at(3.0), 1.0);
        assert!(close(t.progress_at(4.3), 0.5));
        assert!(close(t.cycle(), 4.2));
    }

    #[test]
    fn one_shot_saturates() {
        let t = Transition::once(0.8).delay(0.3);
        assert_eq!(t.progress_at(0.2), 0.0);
        assert!(close(t.progress_at(0.7), 0.5));
        assert_eq!(t.progress_at(1.1), 1.0);
        assert_eq!(t.progress_at(100.0), 1.0);
    }

    #[test]
    fn zero_duration_jumps_to_end() {
        let t = Transition::looping(0.0);
        assert_eq!(t.progress_at(0.0), 0.0);
        assert_eq!(t.progress_at(0.01), 1.0);
    }

    #[test]
    fn track_samples_keyframes_over_time() {
        let track = Track::new(
            Keyframes::of([1.0, 1.2, 1.0]),
            Transition::looping(2.0).ease(Easing::Linear),
        );
        assert_eq!(track.value_at(0.0), 1.0);
        assert!(close(track.value_at(1.0), 1.2));
        assert!(close(track.value_at(0.5), 1.1));
        assert!(close(track.value_at(3.0), 1.2));
    }

    #[test]
    fn one_shot_track_holds_last_value() {
        let track = Track::new(Keyframes::of([-20.0, 0.0]), Transition::once(0.7));
        assert_eq!(track.value_at(0.0), -20.0);
        assert_eq!(track.value_at(5.0), 0.0);
    }
}
