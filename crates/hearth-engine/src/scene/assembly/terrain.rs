use glam::Vec3;

use crate::paint::palette;
use crate::render::Primitive;
use crate::scene::DrawItem;
use crate::transform::TransformSpec;

/// Material tag used by ground snow.
pub const SNOW_MATERIAL: &str = "snow";

/// Dusk sky wall behind the scene and the snow ground plane.
///
/// The sky wall carries no material and keeps whatever is active; the ground uses the
/// snow material.
pub fn backdrop() -> [DrawItem; 2] {
    [
        DrawItem::flat(
            "sky_wall",
            Primitive::Plane,
            TransformSpec::new(
                Vec3::new(60.0, 1.0, 40.0),
                Vec3::new(90.0, 0.0, 0.0),
                Vec3::new(0.0, 14.0, -35.0),
            ),
            palette::DUSK,
        ),
        DrawItem::flat(
            "ground",
            Primitive::Plane,
            TransformSpec::new(
                Vec3::new(60.0, 1.0, 60.0),
                Vec3::new(-90.0, 0.0, 0.0),
                Vec3::new(0.0, -2.0, 0.0),
            ),
            palette::SNOW,
        )
        .with_material(SNOW_MATERIAL),
    ]
}

/// Flat snow disc marking a distant mountain top.
pub fn mountain_cap(position: Vec3) -> DrawItem {
    DrawItem::flat(
        "mountain_cap",
        Primitive::Cylinder,
        TransformSpec::scaled_at(Vec3::new(2.6, 0.12, 2.6), position),
        palette::PEAK_SNOW,
    )
    .with_material(SNOW_MATERIAL)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ground_is_snow_and_sky_has_no_material() {
        let [sky, ground] = backdrop();
        assert_eq!(sky.material, None);
        assert_eq!(ground.material.as_deref(), Some(SNOW_MATERIAL));
        assert_eq!(sky.primitive, Primitive::Plane);
        assert_eq!(ground.transform.translation.y, -2.0);
    }

    #[test]
    fn cap_sits_at_position() {
        let cap = mountain_cap(Vec3::new(0.0, 3.15, -11.5));
        assert_eq!(cap.transform.translation, Vec3::new(0.0, 3.15, -11.5));
        assert_eq!(cap.primitive, Primitive::Cylinder);
    }
}
