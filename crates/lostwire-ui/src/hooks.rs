//! Hooks shared by the overlay components.
//!
//! ## Motion clock
//!
//! One timer per screen advances elapsed time at the configured frame rate.
//! Components read it with [`use_motion_time`] and re-render on every tick.
//! The timer task belongs to the screen's scope, so unmounting the screen
//! stops it.
//!
//! ## Scenes
//!
//! [`use_background_scene`] and [`use_glitch_scene`] sample their content in
//! a hook initializer: it runs on the first render of a component instance
//! and the result is returned unchanged on every render after that. The
//! matching motion hooks build the tracks for that content the same way, so
//! a frame only samples them.

use std::rc::Rc;

use dioxus::prelude::*;
use lostwire_core::{BackgroundMotion, BackgroundScene, FrameRate, GlitchMotion, GlitchScene};
use tokio::time::{Instant, MissedTickBehavior};

/// Seconds since the owning screen mounted, shared through context
#[derive(Clone, Copy, PartialEq)]
pub struct MotionClock {
    elapsed: Signal<f64>,
}

impl MotionClock {
    /// Current time; reading it subscribes the calling component
    pub fn now(&self) -> f64 {
        (self.elapsed)()
    }
}

/// Start a motion clock and provide it to all descendants.
///
/// With `frozen_at` set, the clock is pinned to that instant and no timer
/// runs. Used for still snapshots.
pub fn use_motion_clock(frame_rate: FrameRate, frozen_at: Option<f64>) -> MotionClock {
    let mut elapsed = use_signal(|| frozen_at.unwrap_or(0.0));

    use_future(move || async move {
        if frozen_at.is_some() {
            return;
        }

        let start = Instant::now();
        let mut ticker = tokio::time::interval(frame_rate.frame_interval());
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
        tracing::debug!(%frame_rate, "Motion clock started");

        loop {
            ticker.tick().await;
            elapsed.set(start.elapsed().as_secs_f64());
        }
    });

    use_context_provider(|| MotionClock { elapsed })
}

/// Current animation time from the nearest motion clock.
///
/// Without a clock in scope this is always `0.0`, i.e. the first frame.
pub fn use_motion_time() -> f64 {
    try_use_context::<MotionClock>()
        .map(|clock| clock.now())
        .unwrap_or(0.0)
}

/// Particles and scan lines, generated once per component instance
pub fn use_background_scene(seed: Option<u64>) -> Rc<BackgroundScene> {
    use_hook(|| Rc::new(BackgroundScene::from_seed(seed)))
}

/// Glitch flashes, generated once per component instance
pub fn use_glitch_scene(seed: Option<u64>) -> Rc<GlitchScene> {
    use_hook(|| Rc::new(GlitchScene::from_seed(seed)))
}

/// Tracks for a background scene, built on the first render
pub fn use_background_motion(scene: &BackgroundScene) -> Rc<BackgroundMotion> {
    use_hook(|| Rc::new(BackgroundMotion::new(scene)))
}

/// Tracks for a glitch scene, built on the first render
pub fn use_glitch_motion(scene: &GlitchScene) -> Rc<GlitchMotion> {
    use_hook(|| Rc::new(GlitchMotion::new(scene)))
}
