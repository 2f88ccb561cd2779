//! Documented valid ranges for the numeric generation parameters.

use crate::error::ConfigError;

/// Inclusive range and UI step for a numeric configuration parameter.
///
/// Hosts with a settings UI use `increment` as the slider step; validation
/// only enforces the bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParamRange {
    /// Inclusive lower bound.
    pub min: f64,
    /// Inclusive upper bound.
    pub max: f64,
    /// Step between selectable values.
    pub increment: f64,
    /// Label shown next to the parameter.
    pub description: &'static str,
}

/// Range of [`LoneMountainConfig::mountain_height`](crate::LoneMountainConfig::mountain_height).
pub const MOUNTAIN_HEIGHT_RANGE: ParamRange = ParamRange {
    min: 20.0,
    max: 500.0,
    increment: 10.0,
    description: "Mountain Height",
};

/// Range of [`LoneMountainConfig::mountain_radius_x`](crate::LoneMountainConfig::mountain_radius_x).
pub const MOUNTAIN_RADIUS_X_RANGE: ParamRange = ParamRange {
    min: 10.0,
    max: 1000.0,
    increment: 10.0,
    description: "Mountain Radius X",
};

/// Range of [`LoneMountainConfig::mountain_radius_y`](crate::LoneMountainConfig::mountain_radius_y).
pub const MOUNTAIN_RADIUS_Y_RANGE: ParamRange = ParamRange {
    min: 10.0,
    max: 1000.0,
    increment: 10.0,
    description: "Mountain Radius Y",
};

/// Range of [`PreviewConfig::extent`](crate::PreviewConfig::extent).
pub const PREVIEW_EXTENT_RANGE: ParamRange = ParamRange {
    min: 1.0,
    max: 2048.0,
    increment: 1.0,
    description: "Preview Extent",
};

/// Range of [`PreviewConfig::border`](crate::PreviewConfig::border).
pub const PREVIEW_BORDER_RANGE: ParamRange = ParamRange {
    min: 0.0,
    max: 16.0,
    increment: 1.0,
    description: "Preview Border",
};

impl ParamRange {
    /// Returns `true` if `value` lies within `[min, max]`. NaN is never contained.
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    /// Check `value` against the range.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::OutOfRange`] naming this parameter if the value
    /// is outside the bounds or NaN.
    pub fn check(&self, value: f64) -> Result<(), ConfigError> {
        if self.contains(value) {
            Ok(())
        } else {
            Err(ConfigError::OutOfRange {
                field: self.description,
                value,
                min: self.min,
                max: self.max,
            })
        }
    }

    /// Round `value` to the nearest step from `min` and clamp into the range.
    pub fn snap(&self, value: f64) -> f64 {
        let steps = ((value - self.min) / self.increment).round();
        (self.min + steps * self.increment).clamp(self.min, self.max)
    }
}
