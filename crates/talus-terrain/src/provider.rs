//! "Lone Mountain" elevation provider.
//!
//! Turns a [`LoneMountainConfig`] into a [`GaussianSurfaceSampler`] centred at
//! the world origin and fills elevation facets for requested areas.

use glam::DVec2;
use talus_config::{ConfigError, LoneMountainConfig};
use thiserror::Error;

use crate::elevation::ElevationFacet;
use crate::gaussian::{GaussianParams, GaussianParamsError, GaussianSurfaceSampler};
use crate::region::Rect2;

/// Peak position of the mountain on the world plane.
pub const CENTER: DVec2 = DVec2::ZERO;

/// Profile name shown by host configuration screens.
pub const CONFIGURATION_NAME: &str = "Lone Mountain";

/// Errors raised while building a [`GaussianSurfaceProvider`].
#[derive(Debug, Error)]
pub enum ProviderError {
    /// A configuration value is outside its documented range.
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// The derived Gaussian parameters are unusable.
    #[error(transparent)]
    Params(#[from] GaussianParamsError),
}

/// Produces elevation facets shaped like a single Gaussian mountain.
#[derive(Clone, Debug)]
pub struct GaussianSurfaceProvider {
    configuration: LoneMountainConfig,
    sampler: GaussianSurfaceSampler,
}

impl GaussianSurfaceProvider {
    /// Validate `configuration` and build the sampler.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::Config`] if a parameter is outside its range,
    /// or [`ProviderError::Params`] if the Gaussian cannot be built.
    pub fn new(configuration: LoneMountainConfig) -> Result<Self, ProviderError> {
        configuration.validate()?;
        let sampler = GaussianSurfaceSampler::new(GaussianParams {
            center: CENTER,
            radius: DVec2::new(
                configuration.mountain_radius_x,
                configuration.mountain_radius_y,
            ),
            height: configuration.mountain_height,
        })?;
        tracing::debug!(
            height = configuration.mountain_height,
            radius_x = configuration.mountain_radius_x,
            radius_y = configuration.mountain_radius_y,
            "lone mountain provider initialized"
        );
        Ok(Self {
            configuration,
            sampler,
        })
    }

    /// Sample every position of `area` grown by `border` into a new facet.
    pub fn process(&self, area: Rect2, border: u32) -> ElevationFacet {
        let mut facet = ElevationFacet::new(area, border);
        let world_area = facet.world_area();
        for (pos, value) in world_area.positions().zip(facet.values_mut()) {
            *value = self.sampler.sample(pos.as_dvec2());
        }
        tracing::debug!(
            min = ?world_area.min,
            size = ?world_area.size,
            "generated elevation facet"
        );
        facet
    }

    /// Human-readable profile name.
    pub fn configuration_name(&self) -> &'static str {
        CONFIGURATION_NAME
    }

    /// The configuration the provider was built from.
    pub fn configuration(&self) -> &LoneMountainConfig {
        &self.configuration
    }

    /// The underlying sampler.
    pub fn sampler(&self) -> &GaussianSurfaceSampler {
        &self.sampler
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::{IVec2, UVec2};

    fn default_provider() -> GaussianSurfaceProvider {
        GaussianSurfaceProvider::new(LoneMountainConfig::default()).unwrap()
    }

    #[test]
    fn test_configuration_name() {
        assert_eq!(default_provider().configuration_name(), "Lone Mountain");
    }

    #[test]
    fn test_sampler_uses_configuration() {
        let provider = GaussianSurfaceProvider::new(LoneMountainConfig {
            mountain_height: 150.0,
            mountain_radius_x: 300.0,
            mountain_radius_y: 40.0,
        })
        .unwrap();
        let params = provider.sampler().params();
        assert_eq!(params.center, CENTER);
        assert_eq!(params.radius, DVec2::new(300.0, 40.0));
        assert_eq!(params.height, 150.0);
    }

    #[test]
    fn test_out_of_range_configuration_rejected() {
        let result = GaussianSurfaceProvider::new(LoneMountainConfig {
            mountain_radius_x: 0.0,
            ..Default::default()
        });
        assert!(matches!(
            result,
            Err(ProviderError::Config(ConfigError::OutOfRange { .. }))
        ));
    }

    #[test]
    fn test_process_covers_area_and_border() {
        let provider = default_provider();
        let area = Rect2::new(IVec2::new(-8, -8), UVec2::new(16, 16));
        let facet = provider.process(area, 1);
        assert_eq!(facet.world_area(), area.expand(1));
        assert_eq!(facet.values().len(), 18 * 18);
        assert!(facet.get_world(IVec2::new(-9, -9)).is_some());
        assert!(facet.get_world(IVec2::new(8, 8)).is_some());
        assert!(facet.get_world(IVec2::new(9, 0)).is_none());
    }

    #[test]
    fn test_process_peak_at_origin() {
        let provider = default_provider();
        let facet = provider.process(Rect2::centered(IVec2::ZERO, 16), 0);
        assert_eq!(facet.get_world(IVec2::ZERO), Some(400.0));
        let (lo, hi) = facet.min_max().unwrap();
        assert_eq!(hi, 400.0);
        assert!(lo > 0.0 && lo < hi);
    }

    #[test]
    fn test_process_matches_sampler() {
        let provider = default_provider();
        let facet = provider.process(Rect2::new(IVec2::new(100, -40), UVec2::new(5, 7)), 2);
        for pos in facet.world_area().positions() {
            let expected = provider.sampler().sample(pos.as_dvec2());
            assert_eq!(facet.get_world(pos), Some(expected), "mismatch at {pos}");
        }
    }

    #[test]
    fn test_process_is_repeatable() {
        let provider = default_provider();
        let area = Rect2::new(IVec2::new(3, 3), UVec2::new(4, 4));
        assert_eq!(
            provider.process(area, 1).values(),
            provider.process(area, 1).values()
        );
    }
}
