//! Lostwire CLI
//!
//! Headless tooling around the connection-lost overlay.
//!
//! ## Usage
//!
//! ```bash
//! # Print a freshly generated scene as JSON
//! lostwire scene
//!
//! # Same scene every time
//! lostwire scene --seed 42 --pretty
//!
//! # Render a still frame, 2.5 seconds after mount, to an HTML file
//! lostwire snapshot --seed 42 --at 2.5 --output overlay.html
//! ```

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use dioxus::prelude::*;
use lostwire_core::config::validate_instant;
use lostwire_core::{FrameRate, Scene};
use lostwire_ui::{
    ConnectionLostScreen, ConnectionLostScreenProps, DEFAULT_AVATAR_SRC, OVERLAY_STYLES,
};
use tracing_subscriber::EnvFilter;

/// Lostwire - Connection Lost Overlay
#[derive(Parser)]
#[command(name = "lostwire")]
#[command(version = "0.1.0")]
#[command(about = "Lostwire - headless tools for the connection-lost overlay")]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a scene and print it as JSON
    Scene {
        /// Seed for the random draw
        #[arg(short, long)]
        seed: Option<u64>,

        /// Pretty-print the JSON
        #[arg(long)]
        pretty: bool,
    },

    /// Render the screen at a fixed instant to a standalone HTML document
    Snapshot {
        /// Seed for the random draw
        #[arg(short, long)]
        seed: Option<u64>,

        /// Seconds after mount to capture
        #[arg(long, default_value_t = 2.0, allow_negative_numbers = true)]
        at: f64,

        /// Avatar image path written into the document
        #[arg(short, long, default_value = DEFAULT_AVATAR_SRC)]
        avatar: String,

        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Scene { seed, pretty } => {
            let scene = Scene::from_seed(seed);
            let json = if pretty {
                serde_json::to_string_pretty(&scene)?
            } else {
                serde_json::to_string(&scene)?
            };
            println!("{}", json);
        }

        Commands::Snapshot {
            seed,
            at,
            avatar,
            output,
        } => {
            let at = validate_instant(at).context("invalid --at")?;
            let html = render_snapshot(ConnectionLostScreenProps {
                avatar_src: avatar,
                seed,
                frame_rate: FrameRate::default(),
                frozen_at: Some(at),
            });

            match output {
                Some(path) => {
                    fs::write(&path, &html)
                        .with_context(|| format!("failed to write {}", path.display()))?;
                    println!("Snapshot written to {}", path.display());
                }
                None => print!("{}", html),
            }
        }
    }

    Ok(())
}

/// Map `-v` repetitions onto a default filter; `RUST_LOG` still wins.
/// Logs go to stderr so stdout stays machine-readable.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)))
        .with_writer(std::io::stderr)
        .init();
}

/// Mount the screen once, headless, and wrap the markup in a full document
fn render_snapshot(props: ConnectionLostScreenProps) -> String {
    tracing::info!(seed = ?props.seed, at = ?props.frozen_at, "Rendering snapshot");

    let mut dom = VirtualDom::new_with_props(ConnectionLostScreen, props);
    dom.rebuild_in_place();
    let body = dioxus_ssr::render(&dom);

    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>DBR - Connection Lost</title>\n<style>\nhtml, body {{ margin: 0; width: 100%; height: 100%; background: #000; }}\n{}\n</style>\n</head>\n<body>\n<div style=\"width: 100vw; height: 100vh;\">{}</div>\n</body>\n</html>\n",
        OVERLAY_STYLES, body
    )
}
