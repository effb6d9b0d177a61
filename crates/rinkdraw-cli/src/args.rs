//! Command-line argument definitions for the Rinkdraw CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments control input/output paths, configuration file
//! selection, surface overrides, strictness and logging verbosity.

use clap::Parser;

/// Command-line arguments for the Rinkdraw drill tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the input notation file
    #[arg(help = "Path to the input file")]
    pub input: String,

    /// Path to the output SVG file
    #[arg(short, long, default_value = "out.svg")]
    pub output: String,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Surface width in pixels, overriding the configuration
    #[arg(long)]
    pub width: Option<f32>,

    /// Surface height in pixels, overriding the configuration
    #[arg(long)]
    pub height: Option<f32>,

    /// Do not draw goal lines, blue lines, the red line or face-off dots
    #[arg(long)]
    pub hide_zone_markers: bool,

    /// Fail if the notation produces any diagnostic
    #[arg(long)]
    pub strict: bool,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
