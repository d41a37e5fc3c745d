//! The cottage: brick body with a bump-out, framed openings, a two-slope roof, a
//! chimney and a porch.
//!
//! Every piece is placed at `anchor + offset`; offsets are not rotated by the house
//! yaw. The yaw only turns each piece about its own centre.

use glam::{Vec2, Vec3};

use crate::paint::{palette, Color};
use crate::render::Primitive;
use crate::scene::{DrawItem, Surface};
use crate::transform::TransformSpec;

/// Front face depth relative to the anchor.
const FRONT_Z: f32 = 1.26;
/// Openings sit slightly proud of the front face.
const OPENING_Z: f32 = FRONT_Z + 0.04;
/// Frames sit just in front of their openings.
const FRAME_Z: f32 = OPENING_Z + 0.02;
const FRAME_MARGIN: f32 = 0.06;

const ROOF_Y: f32 = 2.10;
const CHIMNEY_X: f32 = 0.90;
const CHIMNEY_Z: f32 = -0.60;
const CHIMNEY_BASE_Y: f32 = ROOF_Y + 1.45;
const CHIMNEY_CAP_Y: f32 = CHIMNEY_BASE_Y + 0.95;
/// Chimney stack yaw relative to the house.
const CHIMNEY_TWIST: f32 = -12.0;

const BRICK_TILING: Vec2 = Vec2::new(3.0, 2.0);

/// Textures and material used for the house.
#[derive(Debug, Clone, PartialEq)]
pub struct HouseStyle {
    pub wall_texture: String,
    /// Falls back to `wall_texture` when not registered.
    pub roof_texture: String,
    pub material: String,
}

impl Default for HouseStyle {
    fn default() -> Self {
        Self {
            wall_texture: "brick".to_owned(),
            roof_texture: "roof".to_owned(),
            material: "house".to_owned(),
        }
    }
}

/// Which side of the ridge a roof slope covers.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum RoofSide {
    Left,
    Right,
}

/// A door or window pane with a frame behind it.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Opening {
    pub label: &'static str,
    /// Horizontal and vertical offset from the anchor, on the front face.
    pub offset: Vec2,
    pub size: Vec2,
    pub depth: f32,
    pub frame_depth: f32,
    pub color: Color,
}

impl Opening {
    pub const DOOR: Opening = Opening {
        label: "door",
        offset: Vec2::new(0.0, -0.55),
        size: Vec2::new(0.86, 1.52),
        depth: 0.08,
        frame_depth: 0.02,
        color: palette::DOOR,
    };

    pub const LEFT_WINDOW: Opening = Opening {
        label: "window",
        offset: Vec2::new(-1.60, 0.32),
        size: Vec2::new(0.62, 0.62),
        depth: 0.05,
        frame_depth: 0.01,
        color: palette::GLASS,
    };

    pub const RIGHT_WINDOW: Opening = Opening {
        label: "window",
        offset: Vec2::new(1.45, 0.28),
        size: Vec2::new(0.70, 0.92),
        depth: 0.05,
        frame_depth: 0.01,
        color: palette::GLASS,
    };
}

/// A brick-textured box, stone-colored when no wall texture is loaded.
pub fn wall(label: &'static str, anchor: Vec3, offset: Vec3, size: Vec3, yaw: f32, style: &HouseStyle) -> DrawItem {
    DrawItem::new(
        label,
        Primitive::Box,
        TransformSpec::scaled_at(size, anchor + offset).with_yaw(yaw),
        Surface::textured(style.wall_texture.as_str(), BRICK_TILING, palette::STONE),
    )
}

/// One roof slope, tilted 30 degrees down toward its eave.
pub fn roof_slope(anchor: Vec3, side: RoofSide, yaw: f32, style: &HouseStyle) -> DrawItem {
    let (label, x, tilt) = match side {
        RoofSide::Left => ("roof_left", -0.78, 30.0),
        RoofSide::Right => ("roof_right", 0.78, -30.0),
    };
    DrawItem::new(
        label,
        Primitive::Box,
        TransformSpec::new(
            Vec3::new(1.95, 0.25, 3.05),
            Vec3::new(0.0, yaw, tilt),
            anchor + Vec3::new(x, 3.00, 0.06),
        ),
        Surface::textured(style.roof_texture.as_str(), BRICK_TILING, palette::ROOF)
            .or_texture(style.wall_texture.as_str()),
    )
}

/// Pane then frame, both facing forward.
pub fn framed_opening(anchor: Vec3, opening: &Opening, yaw: f32) -> [DrawItem; 2] {
    let at = |z: f32| anchor + Vec3::new(opening.offset.x, opening.offset.y, z);
    let frame_size = opening.size + Vec2::splat(FRAME_MARGIN);
    [
        DrawItem::flat(
            opening.label,
            Primitive::Box,
            TransformSpec::scaled_at(opening.size.extend(opening.depth), at(OPENING_Z)).with_yaw(yaw),
            opening.color,
        ),
        DrawItem::flat(
            "frame",
            Primitive::Box,
            TransformSpec::scaled_at(frame_size.extend(opening.frame_depth), at(FRAME_Z)).with_yaw(yaw),
            palette::TRIM,
        ),
    ]
}

/// Chimney stack with an unrotated cap on top.
pub fn chimney(anchor: Vec3, yaw: f32) -> [DrawItem; 2] {
    [
        DrawItem::flat(
            "chimney",
            Primitive::Box,
            TransformSpec::scaled_at(
                Vec3::new(0.45, 1.10, 0.45),
                anchor + Vec3::new(CHIMNEY_X, CHIMNEY_BASE_Y, CHIMNEY_Z),
            )
            .with_yaw(yaw + CHIMNEY_TWIST),
            palette::TRIM,
        ),
        DrawItem::flat(
            "chimney_cap",
            Primitive::Box,
            TransformSpec::scaled_at(
                Vec3::new(0.60, 0.12, 0.60),
                anchor + Vec3::new(CHIMNEY_X, CHIMNEY_CAP_Y, CHIMNEY_Z),
            ),
            palette::LIGHT_STONE,
        ),
    ]
}

/// Porch slab tucked under the front wall, and a step in front of it.
pub fn porch(anchor: Vec3, yaw: f32) -> [DrawItem; 2] {
    [
        DrawItem::flat(
            "porch",
            Primitive::Box,
            TransformSpec::scaled_at(Vec3::new(2.20, 0.14, 1.60), anchor + Vec3::new(0.0, -1.35, FRONT_Z - 0.20))
                .with_yaw(yaw),
            palette::STONE,
        ),
        DrawItem::flat(
            "step",
            Primitive::Box,
            TransformSpec::scaled_at(Vec3::new(1.70, 0.12, 0.75), anchor + Vec3::new(0.0, -1.52, FRONT_Z + 0.20))
                .with_yaw(yaw),
            palette::STONE,
        ),
    ]
}

/// The whole house, every piece tagged with the style's material.
pub fn house(anchor: Vec3, yaw: f32, style: &HouseStyle) -> Vec<DrawItem> {
    let mut items = Vec::with_capacity(16);

    items.push(wall("body", anchor, Vec3::new(0.0, 0.0, 0.10), Vec3::new(3.90, 3.80, 2.70), yaw, style));
    items.push(wall("bump_out", anchor, Vec3::new(-1.60, -0.10, 0.20), Vec3::new(1.50, 2.40, 2.20), yaw, style));
    items.push(DrawItem::flat(
        "corner_trim",
        Primitive::Box,
        TransformSpec::scaled_at(Vec3::new(0.06, 3.80, 0.06), anchor + Vec3::new(1.82, 0.0, FRONT_Z)).with_yaw(yaw),
        palette::TRIM,
    ));

    for opening in [Opening::DOOR, Opening::LEFT_WINDOW, Opening::RIGHT_WINDOW] {
        items.extend(framed_opening(anchor, &opening, yaw));
    }

    items.push(roof_slope(anchor, RoofSide::Left, yaw, style));
    items.push(roof_slope(anchor, RoofSide::Right, yaw, style));
    items.extend(chimney(anchor, yaw));

    items.push(DrawItem::flat(
        "fascia",
        Primitive::Box,
        TransformSpec::scaled_at(Vec3::new(3.80, 0.07, 0.10), anchor + Vec3::new(0.0, 1.60, FRONT_Z)).with_yaw(yaw),
        palette::TRIM,
    ));
    items.extend(porch(anchor, yaw));

    items
        .into_iter()
        .map(|item| item.with_material(style.material.as_str()))
        .collect()
}
