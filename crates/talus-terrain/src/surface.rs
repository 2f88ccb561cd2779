//! Surface material classification.
//!
//! Surface blocks get sand on gentle slopes. Steeper slopes get grass when
//! they face east and snow otherwise. Buried solid blocks become stone.

use glam::DVec3;
use serde::{Deserialize, Serialize};

/// Steepest slope, in radians, that is still covered in sand (15°).
pub const MAX_SAND_STEEPNESS: f64 = 15.0 * DEG_TO_RAD;

const DEG_TO_RAD: f64 = core::f64::consts::PI / 180.0;

/// World east direction.
pub const EAST: DVec3 = DVec3::X;

/// Material painted into a block.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MaterialTag {
    /// Gentle slopes.
    Sand,
    /// Steep slopes facing east.
    Grass,
    /// Steep slopes facing away from east.
    Snow,
    /// Solid blocks below the surface.
    Stone,
}

impl MaterialTag {
    /// All tags, in declaration order.
    pub const ALL: [MaterialTag; 4] = [Self::Sand, Self::Grass, Self::Snow, Self::Stone];

    /// Block URI the host resolves this tag to.
    pub fn block_uri(self) -> &'static str {
        match self {
            Self::Sand => "CoreAssets:Sand",
            Self::Grass => "CoreAssets:Grass",
            Self::Snow => "CoreAssets:Snow",
            Self::Stone => "CoreAssets:Stone",
        }
    }
}

/// Host-computed facet values at one block position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SurfaceSample {
    /// Whether the block is the topmost solid block of its column.
    pub is_surface: bool,
    /// Unit surface normal. Only meaningful when `is_surface` is set.
    pub normal: DVec3,
    /// Angle between the normal and straight up, in radians.
    pub steepness: f64,
    /// Terrain density. Positive values are solid.
    pub density: f64,
}

impl Default for SurfaceSample {
    fn default() -> Self {
        Self {
            is_surface: false,
            normal: DVec3::Y,
            steepness: 0.0,
            density: 0.0,
        }
    }
}

/// Decide the material for a block from its facet values.
///
/// Returns `None` for blocks that should be left untouched (air).
/// `normal` is used as given; a non-unit normal does not error.
pub fn classify(
    is_surface: bool,
    normal: DVec3,
    steepness: f64,
    density: f64,
) -> Option<MaterialTag> {
    if !is_surface {
        return (density > 0.0).then_some(MaterialTag::Stone);
    }
    if steepness <= MAX_SAND_STEEPNESS {
        return Some(MaterialTag::Sand);
    }
    if normal.dot(EAST) >= 0.0 {
        Some(MaterialTag::Grass)
    } else {
        Some(MaterialTag::Snow)
    }
}

/// Stateless classifier handed to the rasterizer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SurfaceMaterialClassifier;

impl SurfaceMaterialClassifier {
    /// Create a classifier.
    pub const fn new() -> Self {
        Self
    }

    /// See [`classify`].
    pub fn classify(
        &self,
        is_surface: bool,
        normal: DVec3,
        steepness: f64,
        density: f64,
    ) -> Option<MaterialTag> {
        classify(is_surface, normal, steepness, density)
    }

    /// Classify a bundled [`SurfaceSample`].
    pub fn classify_sample(&self, sample: &SurfaceSample) -> Option<MaterialTag> {
        classify(
            sample.is_surface,
            sample.normal,
            sample.steepness,
            sample.density,
        )
    }
}
