//! CLI logic for the bundlesvg tool.
//!
//! This module contains the core CLI logic: it reads a bundle file, renders
//! it with the URL-template icon resolver, and writes the SVG document.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use std::fs;

use log::info;

use bundlesvg::{BundleSvgError, DiagramBuilder, icon::UrlTemplate};

/// Run the bundlesvg CLI application
///
/// The document is serialized in memory and the output file is written only
/// once that succeeds, so a failing run never leaves a partial document
/// behind.
///
/// # Errors
///
/// Returns `BundleSvgError` for:
/// - File I/O errors
/// - Configuration loading errors, including an invalid icon URL template
/// - Unreadable or invalid bundles
/// - Render errors
pub fn run(args: &Args) -> Result<(), BundleSvgError> {
    info!(
        input_path = args.input,
        output_path = args.output;
        "Processing bundle"
    );

    let app_config = config::load_config(args.config.as_ref())?;

    let template = args
        .icon_url_template
        .as_deref()
        .unwrap_or(app_config.icons().url_template());
    let resolver = UrlTemplate::new(template).map_err(BundleSvgError::Config)?;

    let source = fs::read_to_string(&args.input)?;

    let builder = DiagramBuilder::new(app_config);
    let bundle = builder.read(&source)?;
    let diagram = builder.render(&bundle, &resolver)?;

    let mut document = Vec::new();
    diagram.serialize(&mut document)?;
    fs::write(&args.output, document)?;

    info!(output_file = args.output; "SVG exported successfully");

    Ok(())
}
