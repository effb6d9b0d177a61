//! CLI logic for the Rinkdraw drill tool.
//!
//! This module contains the core CLI logic: load the configuration, parse
//! the notation, report diagnostics and write the SVG.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use std::fs;

use log::{info, warn};

use rinkdraw::{DiagramBuilder, RinkdrawError};
use rinkdraw_parser::ParseError;

use error_adapter::{drill_reports, render_report, summarize};

/// Run the Rinkdraw CLI application
///
/// Processes the input file through the Rinkdraw pipeline and writes the
/// resulting SVG to the output file. Diagnostics are logged as warnings;
/// with `--strict` any diagnostic fails the run instead.
///
/// # Errors
///
/// Returns `RinkdrawError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Diagnostics in strict mode
/// - Rendering errors
pub fn run(args: &Args) -> Result<(), RinkdrawError> {
    info!(
        input_path = args.input,
        output_path = args.output,
        strict = args.strict;
        "Processing drill"
    );

    let app_config = config::load_config(args.config.as_ref())?;
    let app_config = config::apply_overrides(app_config, args)?;

    let source = fs::read_to_string(&args.input)?;

    let builder = DiagramBuilder::new(app_config);
    let (diagram, diagnostics) = builder.parse(&source).into_parts();

    if !diagnostics.is_empty() {
        if args.strict {
            return Err(RinkdrawError::new_parse_error(
                ParseError::new(diagnostics),
                source,
            ));
        }

        for report in drill_reports(&diagnostics, &source) {
            warn!("{}", render_report(&report));
        }
        warn!(summary = summarize(&diagnostics); "Drill rendered with diagnostics");
    }

    builder.write_svg(&diagram, &args.output)?;

    info!(output_file = args.output; "SVG exported successfully");

    Ok(())
}
