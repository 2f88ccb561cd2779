//! Top-down debug previews of generated terrain.
//!
//! Renders elevation facets and the material the classifier would paint on
//! each surface column into [`DebugImage`]s that can be saved as PNG.

mod image;
mod renderers;

pub use self::image::DebugImage;
pub use renderers::{
    elevation_to_color, estimate_surface_sample, material_color, render_elevation_debug,
    render_material_debug,
};
