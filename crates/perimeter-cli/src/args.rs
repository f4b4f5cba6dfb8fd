//! Command-line argument definitions for the perimeter CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments control the simulated viewport, the random
//! seed, input/output paths and logging verbosity.

use clap::Parser;

/// Command-line arguments for the perimeter placement preview
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Viewport width in pixels; omit to use the fallback classification
    #[arg(short, long)]
    pub width: Option<f32>,

    /// Viewport height in pixels, used for the preview only
    #[arg(long, default_value_t = 900.0)]
    pub height: f32,

    /// Seed for reproducible placements
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Path to the output SVG file
    #[arg(short, long, default_value = "out.svg")]
    pub output: String,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
