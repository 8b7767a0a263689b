//! dotviz CLI library
//!
//! This module contains the core CLI logic for the dotviz renderer.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;
pub use error_adapter::ErrorAdapter;

use std::{
    fs,
    io::{self, Write},
};

use log::info;

use dotviz::{DotvizError, OutputFormat, RenderBackend, RenderOptions, Renderer};

use args::STDIO_PATH;

/// Run the dotviz CLI application
///
/// This function reads DOT source from the input, renders it and writes
/// the resulting SVG to the output. `-` selects standard input or output.
///
/// # Errors
///
/// Returns `DotvizError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Unsupported output formats
pub fn run(args: &Args) -> Result<(), DotvizError> {
    info!(
        input_path = args.input,
        output_path = args.output,
        format = args.format;
        "Processing graph"
    );

    // Reject the format before touching the input.
    args.format.parse::<OutputFormat>()?;
    let options = RenderOptions::new(args.format.as_str());

    let app_config = config::load_config(args.config.as_ref())?;

    let source = if args.input == STDIO_PATH {
        io::read_to_string(io::stdin())?
    } else {
        fs::read_to_string(&args.input)?
    };

    let renderer = Renderer::new(app_config);
    let svg = renderer.render(&source, &options)?;

    if args.output == STDIO_PATH {
        let mut stdout = io::stdout().lock();
        stdout.write_all(svg.as_bytes())?;
        stdout.flush()?;
    } else {
        fs::write(&args.output, svg)?;
    }

    info!(output_file = args.output; "SVG exported successfully");

    Ok(())
}
