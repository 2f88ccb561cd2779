//! Preview binary for the Lone Mountain generator.
//!
//! Loads `config.ron` (CLI flags override it), generates an elevation facet
//! around the mountain, writes elevation and surface-material PNG previews,
//! and rasterizes one chunk on the mountain flank.
//! Run with `cargo run -p talus-demo -- --radius-x 400 --output ./out`.

mod chunk_preview;

use std::error::Error;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use clap::Parser;
use glam::IVec2;
use talus_config::{CliArgs, Config};
use talus_terrain::debug_viz::{DebugImage, render_elevation_debug, render_material_debug};
use talus_terrain::{GaussianSurfaceProvider, Rect2, SurfaceMaterialClassifier};
use tracing::info;

fn main() -> Result<(), Box<dyn Error>> {
    let args = CliArgs::parse();

    let config_dir = match args.config.clone() {
        Some(dir) => dir,
        None => dirs::config_dir()
            .ok_or("failed to resolve config directory")?
            .join("talus"),
    };

    let mut config = Config::load_or_create(&config_dir).unwrap_or_else(|e| {
        eprintln!("Failed to load config: {e}, using defaults");
        Config::default()
    });
    config.apply_cli_overrides(&args);

    let log_dir = config_dir.join("logs");
    talus_log::init_logging(Some(&log_dir), cfg!(debug_assertions), Some(&config));

    config.preview.validate()?;
    let provider = GaussianSurfaceProvider::new(config.lone_mountain)?;
    info!(
        profile = provider.configuration_name(),
        height = config.lone_mountain.mountain_height,
        radius_x = config.lone_mountain.mountain_radius_x,
        radius_y = config.lone_mountain.mountain_radius_y,
        "Generating preview"
    );

    let area = Rect2::centered(IVec2::ZERO, config.preview.extent);
    let facet = provider.process(area, config.preview.border.max(1));
    if let Some((lo, hi)) = facet.min_max() {
        info!(min = lo, max = hi, "Elevation range");
    }

    std::fs::create_dir_all(&args.output)?;
    let classifier = SurfaceMaterialClassifier::new();

    let elevation = render_elevation_debug(&facet, config.lone_mountain.mountain_height);
    save_png(&elevation, &args.output.join("elevation.png"))?;

    let materials = render_material_debug(&facet, &classifier);
    save_png(&materials, &args.output.join("materials.png"))?;

    chunk_preview::rasterize_flank_chunk(&provider)?;

    Ok(())
}

fn save_png(image: &DebugImage, path: &Path) -> Result<(), Box<dyn Error>> {
    let file = File::create(path)?;
    image.write_png(BufWriter::new(file))?;
    info!(path = %path.display(), width = image.width, height = image.height, "Wrote preview");
    Ok(())
}
