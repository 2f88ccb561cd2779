//! Per-block material rasterizer.
//!
//! The host supplies surface facets for a chunk region through
//! [`SurfaceFacets`] and receives block assignments through [`BlockSink`].

use glam::{DVec3, IVec3, UVec3};

use crate::region::ChunkRegion;
use crate::surface::{MaterialTag, SurfaceMaterialClassifier, SurfaceSample};

/// Per-position facet data the rasterizer reads. Positions are world block
/// coordinates inside the region being rasterized.
pub trait SurfaceFacets {
    /// Whether the block is a terrain surface block.
    fn is_surface(&self, pos: IVec3) -> bool;
    /// Unit surface normal at the block.
    fn normal(&self, pos: IVec3) -> DVec3;
    /// Surface steepness at the block, in radians.
    fn steepness(&self, pos: IVec3) -> f64;
    /// Terrain density at the block.
    fn density(&self, pos: IVec3) -> f64;
}

/// Receives the blocks the rasterizer decides to place.
pub trait BlockSink {
    /// Place `material` at a chunk-relative position.
    fn set_block(&mut self, relative: UVec3, material: MaterialTag);
}

/// Paints sand, grass, snow, and stone into chunks.
#[derive(Clone, Copy, Debug, Default)]
pub struct SurfaceFacetsRasterizer {
    classifier: SurfaceMaterialClassifier,
}

impl SurfaceFacetsRasterizer {
    /// Create a rasterizer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Classify every block of `region` and write the placed ones to `sink`.
    ///
    /// Blocks classified as air are not written. Normal and steepness are
    /// only read for surface blocks, density only for the rest.
    ///
    /// Returns the number of blocks written.
    pub fn generate_chunk<F, S>(&self, region: &ChunkRegion, facets: &F, sink: &mut S) -> usize
    where
        F: SurfaceFacets + ?Sized,
        S: BlockSink + ?Sized,
    {
        let mut written = 0;
        for pos in region.positions() {
            let material = if facets.is_surface(pos) {
                self.classifier
                    .classify(true, facets.normal(pos), facets.steepness(pos), 0.0)
            } else {
                self.classifier
                    .classify(false, DVec3::ZERO, 0.0, facets.density(pos))
            };
            if let Some(material) = material {
                sink.set_block((pos - region.min).as_uvec3(), material);
                written += 1;
            }
        }
        tracing::trace!(min = ?region.min, written, "rasterized chunk");
        written
    }

    /// Rasterize `region` into a fresh [`ChunkMaterials`] buffer.
    pub fn rasterize<F>(&self, region: &ChunkRegion, facets: &F) -> ChunkMaterials
    where
        F: SurfaceFacets + ?Sized,
    {
        let mut materials = ChunkMaterials::new(*region);
        self.generate_chunk(region, facets, &mut materials);
        materials
    }
}

/// Dense facet values for every block of a chunk region.
#[derive(Clone, Debug)]
pub struct SurfaceFacetGrid {
    region: ChunkRegion,
    samples: Vec<SurfaceSample>,
}

impl SurfaceFacetGrid {
    /// Create a grid with every block set to `fill`.
    pub fn new(region: ChunkRegion, fill: SurfaceSample) -> Self {
        Self {
            region,
            samples: vec![fill; region.volume()],
        }
    }

    /// Build a grid by evaluating `f` at every world position of the region.
    pub fn from_fn(region: ChunkRegion, f: impl FnMut(IVec3) -> SurfaceSample) -> Self {
        Self {
            region,
            samples: region.positions().map(f).collect(),
        }
    }

    /// The region the grid covers.
    pub fn region(&self) -> ChunkRegion {
        self.region
    }

    /// Sample at a world position, or `None` outside the region.
    pub fn get(&self, pos: IVec3) -> Option<&SurfaceSample> {
        self.region
            .relative(pos)
            .map(|rel| &self.samples[self.region.linear_index(rel)])
    }

    /// Overwrite the sample at a world position. Returns `false` if `pos` is
    /// outside the region.
    pub fn set(&mut self, pos: IVec3, sample: SurfaceSample) -> bool {
        match self.region.relative(pos) {
            Some(rel) => {
                let index = self.region.linear_index(rel);
                self.samples[index] = sample;
                true
            }
            None => false,
        }
    }

    fn sample(&self, pos: IVec3) -> SurfaceSample {
        self.get(pos).copied().unwrap_or_default()
    }
}

/// Positions outside the grid read as air: not a surface, zero density.
impl SurfaceFacets for SurfaceFacetGrid {
    fn is_surface(&self, pos: IVec3) -> bool {
        self.sample(pos).is_surface
    }

    fn normal(&self, pos: IVec3) -> DVec3 {
        self.sample(pos).normal
    }

    fn steepness(&self, pos: IVec3) -> f64 {
        self.sample(pos).steepness
    }

    fn density(&self, pos: IVec3) -> f64 {
        self.sample(pos).density
    }
}

/// Materials placed in one chunk region, indexed by chunk-relative position.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChunkMaterials {
    region: ChunkRegion,
    blocks: Vec<Option<MaterialTag>>,
}

impl ChunkMaterials {
    /// Create an all-air buffer for `region`.
    pub fn new(region: ChunkRegion) -> Self {
        Self {
            region,
            blocks: vec![None; region.volume()],
        }
    }

    /// The region the buffer covers.
    pub fn region(&self) -> ChunkRegion {
        self.region
    }

    /// Material at a chunk-relative position. `None` for air or out of range.
    pub fn get(&self, relative: UVec3) -> Option<MaterialTag> {
        if relative.cmpge(self.region.size).any() {
            return None;
        }
        self.blocks[self.region.linear_index(relative)]
    }

    /// Count placed blocks of the given material.
    pub fn count(&self, material: MaterialTag) -> usize {
        self.blocks.iter().filter(|b| **b == Some(material)).count()
    }

    /// Count all placed (non-air) blocks.
    pub fn solid_count(&self) -> usize {
        self.blocks.iter().filter(|b| b.is_some()).count()
    }
}

impl BlockSink for ChunkMaterials {
    fn set_block(&mut self, relative: UVec3, material: MaterialTag) {
        if relative.cmpge(self.region.size).any() {
            return;
        }
        let index = self.region.linear_index(relative);
        self.blocks[index] = Some(material);
    }
}
