//! Property-based tests for scene generation and motion sampling
//!
//! Uses proptest to verify sampling ranges and sampling invariants across
//! arbitrary seeds and times.

use lostwire_core::motion::{Easing, Keyframes, Track, Transition};
use lostwire_core::scene::{glitch, lines, particles};
use lostwire_core::{BackgroundScene, GlitchScene, Scene};
use proptest::prelude::*;

// ============================================================================
// Strategy Generators
// ============================================================================

fn easing_strategy() -> impl Strategy<Value = Easing> {
    prop_oneof![
        Just(Easing::Linear),
        Just(Easing::EaseIn),
        Just(Easing::EaseOut),
        Just(Easing::EaseInOut),
    ]
}

/// Elapsed times from mount up to a few minutes
fn elapsed_strategy() -> impl Strategy<Value = f64> {
    0.0..600.0f64
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Every seed yields exactly 40 particles inside their ranges
    #[test]
    fn particles_always_in_range(seed in any::<u64>()) {
        let scene = BackgroundScene::seeded(seed);
        prop_assert_eq!(scene.particles.len(), particles::PARTICLE_COUNT);
        for p in &scene.particles {
            prop_assert!((0.0..100.0).contains(&p.x));
            prop_assert!((0.0..100.0).contains(&p.y));
            prop_assert!((10.0..40.0).contains(&p.size));
            prop_assert!((30.0..50.0).contains(&p.duration));
            prop_assert!((0.0..10.0).contains(&p.delay));
        }
    }

    /// Glitch counts never depend on the random draw
    #[test]
    fn glitch_counts_fixed(seed in any::<u64>()) {
        let scene = GlitchScene::seeded(seed);
        prop_assert_eq!(scene.flashes.len(), glitch::FLASH_LAYER_COUNT);
        prop_assert_eq!(scene.line_flashes.len(), glitch::LINE_FLASH_COUNT);
        prop_assert!(scene.flashes.iter().all(|f| f.is_within_bounds()));
        prop_assert!(scene.line_flashes.iter().all(|l| l.is_within_bounds()));
    }

    /// Scan lines are deterministic regardless of seed
    #[test]
    fn scan_lines_independent_of_seed(seed in any::<u64>()) {
        prop_assert_eq!(BackgroundScene::seeded(seed).lines, lines::scan_lines());
    }

    /// A seed always reproduces the same scene
    #[test]
    fn seed_is_deterministic(seed in any::<u64>()) {
        prop_assert_eq!(Scene::from_seed(Some(seed)), Scene::from_seed(Some(seed)));
    }

    /// Looping progress always lies within [0, 1]
    #[test]
    fn progress_is_bounded(
        duration in 0.01..60.0f64,
        delay in 0.0..10.0f64,
        repeat_delay in 0.0..15.0f64,
        elapsed in elapsed_strategy(),
    ) {
        let t = Transition::looping(duration).delay(delay).repeat_delay(repeat_delay);
        let p = t.progress_at(elapsed);
        prop_assert!((0.0..=1.0).contains(&p));
    }

    /// A pulse between two levels never overshoots either level
    #[test]
    fn pulse_stays_between_levels(
        low in 0.0..1.0f64,
        high in 1.0..2.0f64,
        easing in easing_strategy(),
        elapsed in elapsed_strategy(),
    ) {
        let track = Track::new(
            Keyframes::of([low, high, low]),
            Transition::looping(3.0).ease(easing),
        );
        let v = track.value_at(elapsed);
        prop_assert!(v >= low - 1e-9 && v <= high + 1e-9);
    }

    /// Particle opacity stays inside its breathing range at any time
    #[test]
    fn particle_opacity_bounded(seed in any::<u64>(), elapsed in elapsed_strategy()) {
        for p in BackgroundScene::seeded(seed).particles.iter().take(5) {
            let o = p.opacity_track().value_at(elapsed);
            prop_assert!((0.1 - 1e-9..=0.3 + 1e-9).contains(&o));
        }
    }
}
