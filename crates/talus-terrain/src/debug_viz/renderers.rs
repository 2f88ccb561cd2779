//! Elevation and material preview renderers.

use glam::{DVec3, IVec2};

use super::image::DebugImage;
use crate::elevation::ElevationFacet;
use crate::surface::{MaterialTag, SurfaceMaterialClassifier, SurfaceSample};

/// Render the requested area of `facet` as a colour-banded elevation map.
///
/// Pixel `(px, py)` shows world position `requested.min + (px, py)`.
/// `max_height` is the elevation mapped to the top colour band.
pub fn render_elevation_debug(facet: &ElevationFacet, max_height: f64) -> DebugImage {
    let area = facet.requested_area();
    let mut image = DebugImage::new(area.size.x, area.size.y);

    for pos in area.positions() {
        let rel = (pos - area.min).as_uvec2();
        let height = facet.get_world(pos).unwrap_or(0.0);
        let normalized = if max_height > 0.0 {
            (height / max_height).clamp(0.0, 1.0)
        } else {
            0.0
        };
        let (r, g, b) = elevation_to_color(normalized);
        image.set_pixel(rel.x, rel.y, [r, g, b, 255]);
    }

    image
}

/// Map a normalized elevation `[0, 1]` to an RGB color.
///
/// Bands: lowland green, hillside brown, peak white.
pub fn elevation_to_color(normalized: f64) -> (u8, u8, u8) {
    let t = normalized.clamp(0.0, 1.0);
    if t < 0.4 {
        let s = t / 0.4;
        ((40.0 + s * 60.0) as u8, (140.0 - s * 20.0) as u8, (40.0 + s * 10.0) as u8)
    } else if t < 0.8 {
        let s = (t - 0.4) / 0.4;
        ((100.0 + s * 50.0) as u8, (120.0 - s * 30.0) as u8, (50.0 + s * 20.0) as u8)
    } else {
        let s = (t - 0.8) / 0.2;
        let v = (200.0 + s * 55.0) as u8;
        (v, v, v)
    }
}

/// Estimate the surface sample of the column at `pos` from its neighbours.
///
/// Treats the facet's second axis as world z with y up and uses central
/// differences, so `pos` needs all four neighbours inside the facet. Returns
/// `None` otherwise. Only intended for previews.
pub fn estimate_surface_sample(facet: &ElevationFacet, pos: IVec2) -> Option<SurfaceSample> {
    let east = facet.get_world(pos + IVec2::X)?;
    let west = facet.get_world(pos - IVec2::X)?;
    let south = facet.get_world(pos + IVec2::Y)?;
    let north = facet.get_world(pos - IVec2::Y)?;

    let dh_dx = (east - west) * 0.5;
    let dh_dz = (south - north) * 0.5;
    let normal = DVec3::new(-dh_dx, 1.0, -dh_dz).normalize();
    let steepness = normal.y.clamp(-1.0, 1.0).acos();

    Some(SurfaceSample {
        is_surface: true,
        normal,
        steepness,
        density: 1.0,
    })
}

/// RGBA colour used for a material in previews. Air is transparent.
pub fn material_color(material: Option<MaterialTag>) -> [u8; 4] {
    match material {
        Some(MaterialTag::Sand) => [220, 200, 130, 255],
        Some(MaterialTag::Grass) => [70, 150, 50, 255],
        Some(MaterialTag::Snow) => [240, 245, 250, 255],
        Some(MaterialTag::Stone) => [128, 128, 128, 255],
        None => [0, 0, 0, 0],
    }
}

/// Render the material the classifier paints on each surface column of the
/// requested area. Columns without a full neighbourhood stay transparent.
pub fn render_material_debug(
    facet: &ElevationFacet,
    classifier: &SurfaceMaterialClassifier,
) -> DebugImage {
    let area = facet.requested_area();
    let mut image = DebugImage::new(area.size.x, area.size.y);

    for pos in area.positions() {
        let rel = (pos - area.min).as_uvec2();
        let material = estimate_surface_sample(facet, pos)
            .and_then(|sample| classifier.classify_sample(&sample));
        image.set_pixel(rel.x, rel.y, material_color(material));
    }

    image
}
