//! Integer world areas and chunk regions.

use glam::{IVec2, IVec3, UVec2, UVec3};

/// Axis-aligned integer area of the world plane.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rect2 {
    /// Inclusive minimum corner.
    pub min: IVec2,
    /// Extent along each axis.
    pub size: UVec2,
}

impl Rect2 {
    /// Create an area from its minimum corner and size.
    pub const fn new(min: IVec2, size: UVec2) -> Self {
        Self { min, size }
    }

    /// Create a square area of side `2 * half_extent` centred on `center`.
    ///
    /// `half_extent` must not exceed `i32::MAX / 2`; callers taking it from
    /// user input bound it first (see `PreviewConfig::validate`).
    pub fn centered(center: IVec2, half_extent: u32) -> Self {
        Self {
            min: center - IVec2::splat(half_extent as i32),
            size: UVec2::splat(half_extent * 2),
        }
    }

    /// Exclusive maximum corner.
    pub fn max(&self) -> IVec2 {
        self.min + self.size.as_ivec2()
    }

    /// Number of integer positions in the area.
    pub fn area(&self) -> usize {
        self.size.x as usize * self.size.y as usize
    }

    /// Returns `true` if the area has no positions.
    pub fn is_empty(&self) -> bool {
        self.area() == 0
    }

    /// Returns `true` if `pos` lies inside the area.
    pub fn contains(&self, pos: IVec2) -> bool {
        pos.cmpge(self.min).all() && pos.cmplt(self.max()).all()
    }

    /// Grow the area by `border` on every side.
    ///
    /// The grown size must fit in `i32` along each axis.
    pub fn expand(&self, border: u32) -> Self {
        Self {
            min: self.min - IVec2::splat(border as i32),
            size: self.size + UVec2::splat(border * 2),
        }
    }

    /// Row-major index of `pos`, or `None` if it lies outside.
    pub(crate) fn index_of(&self, pos: IVec2) -> Option<usize> {
        if !self.contains(pos) {
            return None;
        }
        let rel = (pos - self.min).as_uvec2();
        Some(rel.y as usize * self.size.x as usize + rel.x as usize)
    }

    /// Iterate all positions, x fastest.
    pub fn positions(&self) -> impl Iterator<Item = IVec2> + '_ {
        let min = self.min;
        let max = self.max();
        (min.y..max.y).flat_map(move |y| (min.x..max.x).map(move |x| IVec2::new(x, y)))
    }
}

/// Axis-aligned integer box of world blocks handed to the rasterizer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ChunkRegion {
    /// Inclusive minimum corner in world block coordinates.
    pub min: IVec3,
    /// Extent along each axis.
    pub size: UVec3,
}

impl ChunkRegion {
    /// Create a region from its minimum corner and size.
    pub const fn new(min: IVec3, size: UVec3) -> Self {
        Self { min, size }
    }

    /// Exclusive maximum corner.
    pub fn max(&self) -> IVec3 {
        self.min + self.size.as_ivec3()
    }

    /// Number of blocks in the region.
    pub fn volume(&self) -> usize {
        self.size.x as usize * self.size.y as usize * self.size.z as usize
    }

    /// Returns `true` if `pos` lies inside the region.
    pub fn contains(&self, pos: IVec3) -> bool {
        pos.cmpge(self.min).all() && pos.cmplt(self.max()).all()
    }

    /// Convert a world position inside the region to a chunk-relative one.
    pub fn relative(&self, world: IVec3) -> Option<UVec3> {
        self.contains(world).then(|| (world - self.min).as_uvec3())
    }

    /// Convert a chunk-relative position back to world coordinates.
    pub fn world(&self, relative: UVec3) -> IVec3 {
        self.min + relative.as_ivec3()
    }

    /// Linear index of a chunk-relative position (x fastest, then z, then y).
    pub(crate) fn linear_index(&self, relative: UVec3) -> usize {
        let (sx, sz) = (self.size.x as usize, self.size.z as usize);
        relative.x as usize + relative.z as usize * sx + relative.y as usize * sx * sz
    }

    /// Iterate all world positions, x fastest, then z, then y.
    pub fn positions(&self) -> impl Iterator<Item = IVec3> + '_ {
        let min = self.min;
        let max = self.max();
        (min.y..max.y).flat_map(move |y| {
            (min.z..max.z).flat_map(move |z| (min.x..max.x).map(move |x| IVec3::new(x, y, z)))
        })
    }
}
