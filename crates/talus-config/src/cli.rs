//! Command-line argument parsing for the talus demo.

use std::path::PathBuf;

use clap::Parser;

use crate::Config;

/// talus command-line arguments.
///
/// CLI values override settings loaded from `config.ron`.
#[derive(Parser, Debug)]
#[command(name = "talus", about = "Lone Mountain terrain preview")]
pub struct CliArgs {
    /// Mountain peak height.
    #[arg(long)]
    pub height: Option<f64>,

    /// Mountain radius along x.
    #[arg(long)]
    pub radius_x: Option<f64>,

    /// Mountain radius along y.
    #[arg(long)]
    pub radius_y: Option<f64>,

    /// Half-width of the previewed area.
    #[arg(long)]
    pub extent: Option<u32>,

    /// Directory the preview images are written to.
    #[arg(long, default_value = ".")]
    pub output: PathBuf,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Path to config directory (overrides default location).
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(h) = args.height {
            self.lone_mountain.mountain_height = h;
        }
        if let Some(rx) = args.radius_x {
            self.lone_mountain.mountain_radius_x = rx;
        }
        if let Some(ry) = args.radius_y {
            self.lone_mountain.mountain_radius_y = ry;
        }
        if let Some(extent) = args.extent {
            self.preview.extent = extent;
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
    }
}
