#![allow(non_snake_case)]

mod app;
pub mod context;
mod theme;

use std::sync::OnceLock;

use anyhow::{ensure, Result};
use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use lostwire_core::FrameRate;
use lostwire_ui::DEFAULT_AVATAR_SRC;
use tracing_subscriber::EnvFilter;

use crate::context::OverlaySettings;

/// Global overlay settings, set from command line
static SETTINGS: OnceLock<OverlaySettings> = OnceLock::new();

/// Get the overlay settings (set from command line or default)
pub fn get_settings() -> OverlaySettings {
    SETTINGS.get().cloned().unwrap_or_default()
}

/// Lostwire - Connection Lost Overlay
#[derive(Parser, Debug)]
#[command(name = "lostwire-desktop")]
#[command(about = "Lostwire - animated connection-lost overlay")]
struct Args {
    /// Avatar image path shown in the center of the screen
    #[arg(short, long, default_value = DEFAULT_AVATAR_SRC)]
    avatar: String,

    /// Animation frame rate (1-120)
    #[arg(long, default_value = "30")]
    fps: FrameRate,

    /// Seed for the background draw (same seed, same scene)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Window width in logical pixels
    #[arg(long, default_value_t = 700.0, allow_negative_numbers = true)]
    width: f64,

    /// Window height in logical pixels
    #[arg(long, default_value_t = 900.0, allow_negative_numbers = true)]
    height: f64,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    validate_window(args.width, args.height)?;

    let frame_rate = args.fps;
    let settings = OverlaySettings {
        avatar_src: args.avatar,
        seed: args.seed,
        frame_rate,
    };

    tracing::info!(
        avatar = %settings.avatar_src,
        seed = ?settings.seed,
        %frame_rate,
        "Starting connection-lost overlay"
    );

    // Store settings globally
    let _ = SETTINGS.set(settings);

    // Configure desktop window
    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("DBR - Connection Lost")
            .with_inner_size(dioxus::desktop::LogicalSize::new(args.width, args.height))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);

    Ok(())
}

/// Window dimensions must be finite and positive
fn validate_window(width: f64, height: f64) -> Result<()> {
    ensure!(
        width.is_finite() && width > 0.0,
        "invalid --width: {width} (expected a positive size)"
    );
    ensure!(
        height.is_finite() && height > 0.0,
        "invalid --height: {height} (expected a positive size)"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Args, clap::Error> {
        Args::try_parse_from(std::iter::once("lostwire-desktop").chain(args.iter().copied()))
    }

    #[test]
    fn defaults_match_window_layout() {
        let args = parse(&[]).unwrap();
        assert_eq!(args.avatar, DEFAULT_AVATAR_SRC);
        assert_eq!(args.fps, FrameRate::default());
        assert_eq!(args.seed, None);
        assert_eq!((args.width, args.height), (700.0, 900.0));
    }

    #[test]
    fn frame_rate_is_validated_at_parse_time() {
        assert_eq!(parse(&["--fps", "60"]).unwrap().fps.fps(), 60);

        for bad in ["0", "121", "sixty"] {
            let err = parse(&["--fps", bad]).unwrap_err();
            assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation, "--fps {bad}");
        }
    }

    #[test]
    fn window_size_must_be_positive() {
        assert!(validate_window(700.0, 900.0).is_ok());
        assert!(validate_window(0.0, 900.0).is_err());
        assert!(validate_window(700.0, -1.0).is_err());
        assert!(validate_window(f64::NAN, 900.0).is_err());

        let args = parse(&["--width", "-20", "--height", "100"]).unwrap();
        let err = validate_window(args.width, args.height).unwrap_err();
        assert!(err.to_string().contains("invalid --width"));
    }
}
