//! CLI logic for the perimeter placement preview.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use log::info;
use rand::{SeedableRng, rngs::StdRng};

use perimeter::{PerimeterError, PlacementBuilder, export::Viewport};

/// Run the perimeter CLI application
///
/// Places the configured items for the requested viewport and writes an SVG
/// preview to the output file.
///
/// # Errors
///
/// Returns `PerimeterError` for:
/// - File I/O errors
/// - Configuration loading or validation errors
/// - Rendering errors
pub fn run(args: &Args) -> Result<(), PerimeterError> {
    info!(
        width:? = args.width,
        seed:? = args.seed,
        output_path = args.output;
        "Generating placement preview"
    );

    // Load configuration
    let app_config = config::load_config(args.config.as_ref())?;
    let builder = PlacementBuilder::new(app_config);

    // Seeded runs are reproducible
    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let placements = builder.place(args.width, &mut rng)?;

    // Preview canvas; the placement policy still follows `args.width`
    let preview_width = args
        .width
        .filter(|width| *width > 0.0)
        .unwrap_or(Viewport::default().width());
    let viewport = Viewport::new(preview_width, args.height);

    // Write output file
    builder.write_svg(&placements, viewport, &args.output)?;

    info!(
        placed = placements.len(),
        dropped = placements.dropped(),
        output_file = args.output;
        "SVG exported successfully"
    );

    Ok(())
}
