//! Configuration structs with sensible defaults and RON persistence.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::range::{
    MOUNTAIN_HEIGHT_RANGE, MOUNTAIN_RADIUS_X_RANGE, MOUNTAIN_RADIUS_Y_RANGE, PREVIEW_BORDER_RANGE,
    PREVIEW_EXTENT_RANGE,
};

/// Top-level generator configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Gaussian mountain parameters.
    pub lone_mountain: LoneMountainConfig,
    /// Preview image settings.
    pub preview: PreviewConfig,
    /// Debug/development settings.
    pub debug: DebugConfig,
}

/// Parameters of the "Lone Mountain" elevation profile.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LoneMountainConfig {
    /// Peak elevation in blocks.
    pub mountain_height: f64,
    /// Gaussian radius along the world x axis, in blocks.
    pub mountain_radius_x: f64,
    /// Gaussian radius along the second horizontal axis, in blocks.
    pub mountain_radius_y: f64,
}

/// Preview rendering configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PreviewConfig {
    /// Half-width of the square area sampled around the mountain center.
    pub extent: u32,
    /// Border added around the area when generating the elevation facet.
    pub border: u32,
}

/// Debug/development configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level override (e.g., "debug", "info", "warn").
    pub log_level: String,
}

// --- Default implementations ---

impl Default for LoneMountainConfig {
    fn default() -> Self {
        Self {
            mountain_height: 400.0,
            mountain_radius_x: 200.0,
            mountain_radius_y: 200.0,
        }
    }
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            extent: 512,
            border: 1,
        }
    }
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

impl LoneMountainConfig {
    /// Check every parameter against its documented range.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::OutOfRange`] for the first parameter that falls
    /// outside its range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        MOUNTAIN_HEIGHT_RANGE.check(self.mountain_height)?;
        MOUNTAIN_RADIUS_X_RANGE.check(self.mountain_radius_x)?;
        MOUNTAIN_RADIUS_Y_RANGE.check(self.mountain_radius_y)?;
        Ok(())
    }
}

impl PreviewConfig {
    /// Check the preview area against its documented range.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::OutOfRange`] if `extent` or `border` would
    /// produce an area too large to sample.
    pub fn validate(&self) -> Result<(), ConfigError> {
        PREVIEW_EXTENT_RANGE.check(f64::from(self.extent))?;
        PREVIEW_BORDER_RANGE.check(f64::from(self.border))?;
        Ok(())
    }
}

// --- Load / Save ---

impl Config {
    /// Load config from the given directory, or create a default config file.
    pub fn load_or_create(config_dir: &Path) -> Result<Self, ConfigError> {
        let config_path = config_dir.join("config.ron");

        if config_path.exists() {
            let contents = std::fs::read_to_string(&config_path).map_err(ConfigError::ReadError)?;
            let config: Config = ron::from_str(&contents).map_err(ConfigError::ParseError)?;
            log::info!("Loaded config from {}", config_path.display());
            Ok(config)
        } else {
            let config = Config::default();
            config.save(config_dir)?;
            log::info!("Created default config at {}", config_path.display());
            Ok(config)
        }
    }

    /// Save config to the given directory as `config.ron`.
    pub fn save(&self, config_dir: &Path) -> Result<(), ConfigError> {
        std::fs::create_dir_all(config_dir).map_err(ConfigError::WriteError)?;

        let config_path = config_dir.join("config.ron");
        let pretty = ron::ser::PrettyConfig::new()
            .depth_limit(2)
            .enumerate_arrays(false);

        let serialized =
            ron::ser::to_string_pretty(self, pretty).map_err(ConfigError::SerializeError)?;

        std::fs::write(&config_path, serialized).map_err(ConfigError::WriteError)?;
        Ok(())
    }
}
