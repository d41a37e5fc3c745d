use glam::Vec3;

use crate::paint::palette;
use crate::render::Primitive;
use crate::scene::DrawItem;
use crate::transform::TransformSpec;

/// Trunk and crown proportions of an evergreen.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TreeDims {
    pub trunk_height: f32,
    pub trunk_radius: f32,
    pub crown_height: f32,
    pub crown_radius: f32,
}

impl TreeDims {
    #[inline]
    pub const fn new(trunk_height: f32, trunk_radius: f32, crown_height: f32, crown_radius: f32) -> Self {
        Self {
            trunk_height,
            trunk_radius,
            crown_height,
            crown_radius,
        }
    }
}

/// Snow disc thickness on top of the crown.
const CAP_HEIGHT: f32 = 0.08;
/// Snow disc radius relative to the crown radius.
const CAP_RADIUS_RATIO: f32 = 0.55;
/// How far the disc sinks into the crown tip.
const CAP_SINK: f32 = 0.02;

/// Trunk cylinder, cone crown and a snow disc, standing on `base`.
///
/// The primitives are unit-sized and centred, so each piece is placed at the middle of
/// its vertical extent.
pub fn tree(base: Vec3, dims: TreeDims) -> Vec<DrawItem> {
    let TreeDims {
        trunk_height: ht,
        trunk_radius: rt,
        crown_height: hc,
        crown_radius: rc,
    } = dims;

    vec![
        DrawItem::flat(
            "trunk",
            Primitive::Cylinder,
            TransformSpec::scaled_at(Vec3::new(rt, ht, rt), base + Vec3::new(0.0, ht * 0.5, 0.0)),
            palette::BARK,
        ),
        DrawItem::flat(
            "crown",
            Primitive::Cone,
            TransformSpec::scaled_at(Vec3::new(rc, hc, rc), base + Vec3::new(0.0, ht + hc * 0.5, 0.0)),
            palette::EVERGREEN,
        ),
        DrawItem::flat(
            "snow_cap",
            Primitive::Cylinder,
            TransformSpec::scaled_at(
                Vec3::new(rc * CAP_RADIUS_RATIO, CAP_HEIGHT, rc * CAP_RADIUS_RATIO),
                base + Vec3::new(0.0, ht + hc - CAP_SINK, 0.0),
            ),
            palette::FROST,
        ),
    ]
}
