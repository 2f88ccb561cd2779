//! Lone Mountain world generation: a Gaussian elevation provider and a
//! surface-material rasterizer driven by host-computed surface facets.

mod elevation;
mod gaussian;
mod provider;
mod rasterizer;
mod region;
mod surface;

pub mod debug_viz;

pub use elevation::{ElevationFacet, FacetError};
pub use gaussian::{GaussianParams, GaussianParamsError, GaussianSurfaceSampler};
pub use provider::{CENTER, CONFIGURATION_NAME, GaussianSurfaceProvider, ProviderError};
pub use rasterizer::{
    BlockSink, ChunkMaterials, SurfaceFacetGrid, SurfaceFacets, SurfaceFacetsRasterizer,
};
pub use region::{ChunkRegion, Rect2};
pub use surface::{
    EAST, MAX_SAND_STEEPNESS, MaterialTag, SurfaceMaterialClassifier, SurfaceSample, classify,
};

#[cfg(test)]
mod thread_safety {
    use super::*;

    static_assertions::assert_impl_all!(GaussianSurfaceSampler: Send, Sync);
    static_assertions::assert_impl_all!(GaussianSurfaceProvider: Send, Sync);
    static_assertions::assert_impl_all!(SurfaceMaterialClassifier: Send, Sync, Copy);
    static_assertions::assert_impl_all!(SurfaceFacetsRasterizer: Send, Sync);
    static_assertions::assert_impl_all!(ElevationFacet: Send, Sync);
}
