//! Procedurally generated scene content.
//!
//! Each mounted screen owns one [`BackgroundScene`] and one [`GlitchScene`].
//! Both are generated once, when the screen mounts, and never change
//! afterwards; a new mount draws a fresh scene.

pub mod glitch;
pub mod lines;
pub mod particles;
pub mod shell;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

use crate::motion::{Easing, Keyframes, Rgba, Track, Transition};

pub use glitch::{FlashLayer, LineFlash};
pub use lines::{ScanLine, SwayMotion};
pub use particles::{ParticleDescriptor, ParticleMotion};

/// Period of the background gradient loop, in seconds
pub const GRADIENT_PERIOD: f64 = 8.0;

/// Offset mixed into a user seed so the glitch layer does not mirror the
/// background draw
const GLITCH_SEED_OFFSET: u64 = 0x9e37_79b9_7f4a_7c15;

/// Leading gradient color stops, cycled over [`GRADIENT_PERIOD`]
pub fn gradient_stops() -> [Rgba; 3] {
    [
        Rgba::rgb(0x7f, 0x1d, 0x1d),
        Rgba::rgb(0x99, 0x1b, 0x1b),
        Rgba::rgb(0x7f, 0x1d, 0x1d),
    ]
}

/// The leading color of the background gradient over time
pub fn gradient_track() -> Track<Rgba> {
    Track::new(
        Keyframes::of(gradient_stops()),
        Transition::looping(GRADIENT_PERIOD).ease(Easing::EaseInOut),
    )
}

/// CSS background for the gradient layer with `lead` as its first stop
pub fn gradient_css(lead: Rgba) -> String {
    format!("linear-gradient(to bottom right, {}, {})", lead, Rgba::BLACK)
}

/// Particles and scan lines behind the content
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BackgroundScene {
    pub particles: Vec<ParticleDescriptor>,
    pub lines: Vec<ScanLine>,
}

impl BackgroundScene {
    pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let scene = Self {
            particles: particles::generate_particles(rng),
            lines: lines::scan_lines(),
        };
        tracing::debug!(
            particles = scene.particles.len(),
            lines = scene.lines.len(),
            "Generated background scene"
        );
        scene
    }

    pub fn seeded(seed: u64) -> Self {
        Self::generate(&mut StdRng::seed_from_u64(seed))
    }

    /// Draw from the given seed, or from the thread RNG when there is none
    pub fn from_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::seeded(seed),
            None => Self::generate(&mut rand::rng()),
        }
    }
}

/// Tracks for every animated element of a [`BackgroundScene`].
///
/// Built once per mount so rendering a frame only samples.
#[derive(Debug, Clone, PartialEq)]
pub struct BackgroundMotion {
    pub gradient: Track<Rgba>,
    /// Parallel to [`BackgroundScene::particles`]
    pub particles: Vec<ParticleMotion>,
    /// Parallel to [`BackgroundScene::lines`]
    pub lines: Vec<SwayMotion>,
}

impl BackgroundMotion {
    pub fn new(scene: &BackgroundScene) -> Self {
        Self {
            gradient: gradient_track(),
            particles: scene.particles.iter().map(ParticleDescriptor::motion).collect(),
            lines: scene.lines.iter().map(ScanLine::motion).collect(),
        }
    }
}

/// Flash layers over the whole screen
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GlitchScene {
    pub flashes: Vec<FlashLayer>,
    pub line_flashes: Vec<LineFlash>,
}

impl GlitchScene {
    pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let scene = Self {
            flashes: glitch::generate_flash_layers(rng),
            line_flashes: glitch::generate_line_flashes(rng),
        };
        tracing::debug!(
            flashes = scene.flashes.len(),
            line_flashes = scene.line_flashes.len(),
            "Generated glitch scene"
        );
        scene
    }

    pub fn seeded(seed: u64) -> Self {
        Self::generate(&mut StdRng::seed_from_u64(seed ^ GLITCH_SEED_OFFSET))
    }

    pub fn from_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::seeded(seed),
            None => Self::generate(&mut rand::rng()),
        }
    }
}

/// Tracks for every flash of a [`GlitchScene`], parallel to its lists
#[derive(Debug, Clone, PartialEq)]
pub struct GlitchMotion {
    pub flashes: Vec<SwayMotion>,
    pub line_flashes: Vec<SwayMotion>,
}

impl GlitchMotion {
    pub fn new(scene: &GlitchScene) -> Self {
        Self {
            flashes: scene.flashes.iter().map(FlashLayer::motion).collect(),
            line_flashes: scene.line_flashes.iter().map(LineFlash::motion).collect(),
        }
    }
}

/// Everything randomized for one mount of the screen
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scene {
    pub seed: Option<u64>,
    pub background: BackgroundScene,
    pub glitch: GlitchScene,
}

impl Scene {
    pub fn from_seed(seed: Option<u64>) -> Self {
        Self {
            seed,
            background: BackgroundScene::from_seed(seed),
            glitch: GlitchScene::from_seed(seed),
        }
    }
}
