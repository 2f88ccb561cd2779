//! Elevation facet: a dense 2D field of surface heights over a world area.

use glam::{IVec2, UVec2};
use thiserror::Error;

use crate::region::Rect2;

/// Errors raised when writing to a facet.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FacetError {
    /// The position lies outside the facet's world area.
    #[error("position {pos} is outside facet area {min}..{max}")]
    OutOfBounds {
        /// Requested world position.
        pos: IVec2,
        /// Inclusive minimum corner of the facet.
        min: IVec2,
        /// Exclusive maximum corner of the facet.
        max: IVec2,
    },
}

/// Surface elevation for every integer position of a world area.
///
/// The world area is the requested area grown by the facet border, so
/// consumers that need neighbouring samples (normals, steepness) can read one
/// step past the requested edge.
#[derive(Clone, Debug)]
pub struct ElevationFacet {
    world_area: Rect2,
    relative_area: Rect2,
    values: Vec<f64>,
}

impl ElevationFacet {
    /// Create a zero-filled facet covering `area` grown by `border`.
    pub fn new(area: Rect2, border: u32) -> Self {
        let world_area = area.expand(border);
        let relative_area = Rect2::new(IVec2::splat(border as i32), area.size);
        Self {
            world_area,
            relative_area,
            values: vec![0.0; world_area.area()],
        }
    }

    /// World area covered by the facet, border included.
    pub fn world_area(&self) -> Rect2 {
        self.world_area
    }

    /// Requested area expressed relative to [`Self::world_area`]'s minimum corner.
    pub fn relative_area(&self) -> Rect2 {
        self.relative_area
    }

    /// Requested area in world coordinates, border excluded.
    pub fn requested_area(&self) -> Rect2 {
        Rect2::new(
            self.world_area.min + self.relative_area.min,
            self.relative_area.size,
        )
    }

    /// Elevation at a world position, or `None` outside the facet.
    pub fn get_world(&self, pos: IVec2) -> Option<f64> {
        self.world_area.index_of(pos).map(|i| self.values[i])
    }

    /// Set the elevation at a world position.
    ///
    /// # Errors
    ///
    /// Returns [`FacetError::OutOfBounds`] if `pos` lies outside the facet.
    pub fn set_world(&mut self, pos: IVec2, value: f64) -> Result<(), FacetError> {
        let index = self
            .world_area
            .index_of(pos)
            .ok_or(FacetError::OutOfBounds {
                pos,
                min: self.world_area.min,
                max: self.world_area.max(),
            })?;
        self.values[index] = value;
        Ok(())
    }

    /// Elevation at a position relative to the facet's minimum corner.
    pub fn get_relative(&self, rel: UVec2) -> Option<f64> {
        self.get_world(self.world_area.min + rel.as_ivec2())
    }

    /// Raw row-major values (x fastest), border included.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Mutable raw values, in the same layout as [`Self::values`].
    pub(crate) fn values_mut(&mut self) -> &mut [f64] {
        &mut self.values
    }

    /// Minimum and maximum elevation, or `None` for an empty facet.
    pub fn min_max(&self) -> Option<(f64, f64)> {
        self.values.iter().copied().fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_border_expands_world_area() {
        let facet = ElevationFacet::new(Rect2::new(IVec2::new(10, 20), UVec2::new(8, 4)), 1);
        assert_eq!(facet.world_area().min, IVec2::new(9, 19));
        assert_eq!(facet.world_area().size, UVec2::new(10, 6));
        assert_eq!(facet.values().len(), 60);
        assert_eq!(facet.relative_area().min, IVec2::ONE);
        assert_eq!(
            facet.requested_area(),
            Rect2::new(IVec2::new(10, 20), UVec2::new(8, 4))
        );
    }

    #[test]
    fn test_set_then_get_world() {
        let mut facet = ElevationFacet::new(Rect2::new(IVec2::ZERO, UVec2::splat(4)), 0);
        facet.set_world(IVec2::new(2, 3), 17.5).unwrap();
        assert_eq!(facet.get_world(IVec2::new(2, 3)), Some(17.5));
        assert_eq!(facet.get_relative(UVec2::new(2, 3)), Some(17.5));
        assert_eq!(facet.get_world(IVec2::new(3, 2)), Some(0.0));
    }

    #[test]
    fn test_border_positions_are_addressable() {
        let mut facet = ElevationFacet::new(Rect2::new(IVec2::ZERO, UVec2::splat(4)), 2);
        assert!(facet.set_world(IVec2::new(-2, -2), 1.0).is_ok());
        assert!(facet.set_world(IVec2::new(5, 5), 1.0).is_ok());
        assert!(facet.get_world(IVec2::new(6, 0)).is_none());
    }

    #[test]
    fn test_out_of_bounds_write_rejected() {
        let mut facet = ElevationFacet::new(Rect2::new(IVec2::ZERO, UVec2::splat(4)), 0);
        let err = facet.set_world(IVec2::new(4, 0), 1.0).unwrap_err();
        assert_eq!(
            err,
            FacetError::OutOfBounds {
                pos: IVec2::new(4, 0),
                min: IVec2::ZERO,
                max: IVec2::splat(4),
            }
        );
    }

    #[test]
    fn test_min_max() {
        let mut facet = ElevationFacet::new(Rect2::new(IVec2::ZERO, UVec2::new(3, 1)), 0);
        assert_eq!(facet.min_max(), Some((0.0, 0.0)));
        facet.set_world(IVec2::new(0, 0), -2.0).unwrap();
        facet.set_world(IVec2::new(2, 0), 9.0).unwrap();
        assert_eq!(facet.min_max(), Some((-2.0, 9.0)));

        let empty = ElevationFacet::new(Rect2::new(IVec2::ZERO, UVec2::ZERO), 0);
        assert_eq!(empty.min_max(), None);
    }
}
