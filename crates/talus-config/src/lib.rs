//! Configuration for the talus world generator.
//!
//! Holds the "Lone Mountain" generation parameters together with preview and
//! debug settings. Settings persist to disk as RON, carry documented valid
//! ranges, and can be overridden from the command line via clap.

mod cli;
mod config;
mod error;
mod range;

pub use cli::CliArgs;
pub use config::{Config, DebugConfig, LoneMountainConfig, PreviewConfig};
pub use error::ConfigError;
pub use range::{
    MOUNTAIN_HEIGHT_RANGE, MOUNTAIN_RADIUS_X_RANGE, MOUNTAIN_RADIUS_Y_RANGE, PREVIEW_BORDER_RANGE,
    PREVIEW_EXTENT_RANGE, ParamRange,
};
