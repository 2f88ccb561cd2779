//! Rasterizes a single chunk on the mountain flank and reports what was painted.

use glam::{DVec2, IVec2, IVec3, UVec2, UVec3};
use talus_terrain::debug_viz::estimate_surface_sample;
use talus_terrain::{
    ChunkRegion, GaussianSurfaceProvider, MaterialTag, Rect2, SurfaceFacetGrid,
    SurfaceFacetsRasterizer, SurfaceSample,
};
use tracing::info;

const CHUNK_SIZE: u32 = 32;

/// Build column facets for a chunk straddling the mountain's east flank and
/// rasterize it.
pub fn rasterize_flank_chunk(provider: &GaussianSurfaceProvider) -> Result<(), String> {
    let params = provider.sampler().params();
    let flank_x = params.radius.x.round() as i32;
    let surface_y = provider.sampler().sample(DVec2::new(flank_x as f64, 0.0)) as i32;

    let min = IVec3::new(
        flank_x - CHUNK_SIZE as i32 / 2,
        surface_y - CHUNK_SIZE as i32 / 2,
        -(CHUNK_SIZE as i32) / 2,
    );
    let region = ChunkRegion::new(min, UVec3::splat(CHUNK_SIZE));
    let columns = provider.process(
        Rect2::new(IVec2::new(min.x, min.z), UVec2::splat(CHUNK_SIZE)),
        1,
    );

    let grid = SurfaceFacetGrid::from_fn(region, |pos| {
        let column = IVec2::new(pos.x, pos.z);
        let height = columns.get_world(column).unwrap_or(0.0).floor() as i32;
        if pos.y < height {
            SurfaceSample {
                density: 1.0,
                ..Default::default()
            }
        } else if pos.y == height {
            estimate_surface_sample(&columns, column).unwrap_or_default()
        } else {
            SurfaceSample {
                density: -1.0,
                ..Default::default()
            }
        }
    });

    let materials = SurfaceFacetsRasterizer::new().rasterize(&region, &grid);
    if materials.solid_count() == 0 {
        return Err(format!("chunk at {min} contains no terrain"));
    }

    info!(
        chunk_min = %min,
        sand = materials.count(MaterialTag::Sand),
        grass = materials.count(MaterialTag::Grass),
        snow = materials.count(MaterialTag::Snow),
        stone = materials.count(MaterialTag::Stone),
        "Rasterized flank chunk"
    );
    Ok(())
}
