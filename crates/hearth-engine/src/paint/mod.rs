//! Flat colors and the scene palette.
//!
//! Materials and lights carry their own RGB values (`glam::Vec3`); this module only
//! covers the per-draw `objectColor` used by untextured surfaces.

pub mod color;

pub use color::Color;

/// Named colors used by the winter scene.
pub mod palette {
    use super::Color;

    /// House body stone (light).
    pub const STONE: Color = Color::rgb(0.78, 0.78, 0.84);
    /// Corner trim, frames and fascia.
    pub const TRIM: Color = Color::rgb(0.64, 0.64, 0.72);
    /// Roof lavender, used when no roof or brick texture is available.
    pub const ROOF: Color = Color::rgb(0.64, 0.60, 0.70);
    pub const DOOR: Color = Color::rgb(0.12, 0.10, 0.14);
    pub const GLASS: Color = Color::rgb(0.60, 0.85, 0.92);
    /// Chimney cap stone.
    pub const LIGHT_STONE: Color = Color::rgb(0.86, 0.86, 0.92);

    /// Backdrop wall, dusk purple.
    pub const DUSK: Color = Color::rgb(0.28, 0.22, 0.42);
    /// Ground snow, blue-white.
    pub const SNOW: Color = Color::rgb(0.80, 0.88, 0.98);
    /// Mountain snow cap.
    pub const PEAK_SNOW: Color = Color::rgb(0.93, 0.96, 1.0);

    pub const BARK: Color = Color::rgb(0.35, 0.30, 0.28);
    pub const EVERGREEN: Color = Color::rgb(0.55, 0.70, 0.68);
    pub const FROST: Color = Color::rgb(0.90, 0.95, 1.0);

    pub const FENCE_POST: Color = Color::rgb(0.50, 0.48, 0.52);
    pub const FENCE_RAIL_LOW: Color = Color::rgb(0.55, 0.53, 0.56);
    pub const FENCE_RAIL_HIGH: Color = Color::rgb(0.58, 0.56, 0.60);
}
