//! Ordered keyframe lists.

use super::{Easing, Lerp};

/// Ordered values an animated property passes through in one period.
///
/// Keyframes are spaced evenly: with `n` values, value `i` sits at progress
/// `i / (n - 1)`.
#[derive(Debug, Clone, PartialEq)]
pub struct Keyframes<T> {
    values: Vec<T>,
}

impl<T: Lerp> Keyframes<T> {
    /// Build from a fixed, non-empty array
    pub fn of<const N: usize>(values: [T; N]) -> Self {
        const { assert!(N > 0, "keyframe list must not be empty") };
        Self {
            values: values.into(),
        }
    }

    /// A single value held for the whole period
    pub fn constant(value: T) -> Self {
        Self::of([value])
    }

    /// Value at `progress` through the period, easing each segment.
    ///
    /// Progress is clamped to [0, 1].
    pub fn sample(&self, progress: f64, easing: Easing) -> T {
        let segments = self.values.len() - 1;
        if segments == 0 {
            return self.values[0].clone();
        }

        let progress = if progress.is_nan() { 0.0 } else { progress.clamp(0.0, 1.0) };
        let position = progress * segments as f64;
        let index = (position.floor() as usize).min(segments - 1);
        let local = position - index as f64;

        self.values[index].lerp(&self.values[index + 1], easing.apply(local))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pulse() -> Keyframes<f64> {
        Keyframes::of([0.1, 0.3, 0.1])
    }

    #[test]
    fn samples_hit_keyframes_at_boundaries() {
        let k = pulse();
        assert_eq!(k.sample(0.0, Easing::EaseInOut), 0.1);
        assert!((k.sample(0.5, Easing::EaseInOut) - 0.3).abs() < 1e-12);
        assert!((k.sample(1.0, Easing::EaseInOut) - 0.1).abs() < 1e-12);
    }

    #[test]
    fn linear_sampling_within_segment() {
        let k = Keyframes::of([0.0, 10.0, -10.0, 0.0]);
        // Segment boundaries at 0, 1/3, 2/3, 1
        assert!((k.sample(1.0 / 6.0, Easing::Linear) - 5.0).abs() < 1e-9);
        assert!((k.sample(0.5, Easing::Linear) - 0.0).abs() < 1e-9);
        assert!((k.sample(5.0 / 6.0, Easing::Linear) + 5.0).abs() < 1e-9);
    }

    #[test]
    fn easing_applies_per_segment() {
        let k = pulse();
        // A quarter of the way is the middle of the first segment, where
        // ease-in-out is symmetric.
        assert!((k.sample(0.25, Easing::EaseInOut) - 0.2).abs() < 1e-4);
        // Early in the first segment ease-in-out lags behind linear
        assert!(k.sample(0.05, Easing::EaseInOut) < k.sample(0.05, Easing::Linear));
    }

    #[test]
    fn progress_is_clamped() {
        let k = pulse();
        assert_eq!(k.sample(-1.0, Easing::Linear), 0.1);
        assert!((k.sample(2.0, Easing::Linear) - 0.1).abs() < 1e-12);
        assert_eq!(k.sample(f64::NAN, Easing::Linear), 0.1);
    }

    #[test]
    fn constant_holds_value() {
        let k = Keyframes::constant(4.0);
        assert_eq!(k.sample(0.0, Easing::Linear), 4.0);
        assert_eq!(k.sample(0.7, Easing::EaseInOut), 4.0);
        assert_eq!(k.sample(1.0, Easing::EaseOut), 4.0);
    }
}
