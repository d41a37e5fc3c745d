use glam::Vec3;

use crate::paint::palette;
use crate::render::Primitive;
use crate::scene::DrawItem;
use crate::transform::TransformSpec;

const POST_SIZE: Vec3 = Vec3::new(0.10, 0.60, 0.10);
const POST_RAISE: f32 = 0.15;
const RAIL_HEIGHT: f32 = 0.05;
const RAIL_DEPTH: f32 = 0.12;
const LOWER_RAIL_Y: f32 = -0.30;
const UPPER_RAIL_Y: f32 = 0.05;

/// A straight fence run: two rails, then `posts` posts spaced `spacing` apart along `dir`.
///
/// Rails span the post run (`spacing * (posts - 1)`) and are yawed to follow `dir`.
/// With fewer than two posts there is nothing to span and no rails are emitted. A zero
/// or non-finite `dir` falls back to +X.
pub fn fence(start: Vec3, dir: Vec3, posts: usize, spacing: f32) -> Vec<DrawItem> {
    let dir = dir.try_normalize().unwrap_or(Vec3::X);
    let mut items = Vec::with_capacity(posts + 2);

    if posts >= 2 {
        let span = spacing * (posts - 1) as f32;
        let mid = start + dir * (span * 0.5);
        let yaw = (-dir.z).atan2(dir.x).to_degrees();
        let scale = Vec3::new(span, RAIL_HEIGHT, RAIL_DEPTH);

        items.push(DrawItem::flat(
            "rail_lower",
            Primitive::Box,
            TransformSpec::scaled_at(scale, mid + Vec3::new(0.0, LOWER_RAIL_Y, 0.0)).with_yaw(yaw),
            palette::FENCE_RAIL_LOW,
        ));
        items.push(DrawItem::flat(
            "rail_upper",
            Primitive::Box,
            TransformSpec::scaled_at(scale, mid + Vec3::new(0.0, UPPER_RAIL_Y, 0.0)).with_yaw(yaw),
            palette::FENCE_RAIL_HIGH,
        ));
    }

    items.extend((0..posts).map(|i| {
        let p = start + dir * (spacing * i as f32);
        DrawItem::flat(
            "post",
            Primitive::Box,
            TransformSpec::scaled_at(POST_SIZE, p + Vec3::new(0.0, POST_RAISE, 0.0)),
            palette::FENCE_POST,
        )
    }));

    items
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-4;

    fn close(a: Vec3, b: Vec3) -> bool {
        (a - b).abs().max_element() < EPS
    }

    #[test]
    fn ten_posts_along_x() {
        let start = Vec3::new(-4.5, -2.4, 5.05);
        let items = fence(start, Vec3::X, 10, 0.95);

        assert_eq!(items.len(), 12);
        let posts: Vec<_> = items.iter().filter(|i| i.label == "post").collect();
        assert_eq!(posts.len(), 10);
        for (i, post) in posts.iter().enumerate() {
            let expected = start + Vec3::new(0.95 * i as f32, 0.15, 0.0);
            assert!(close(post.transform.translation, expected), "post {i}");
        }

        let lower = &items[0];
        assert_eq!(lower.label, "rail_lower");
        assert!((lower.transform.scale.x - 8.55).abs() < EPS);
        assert!(close(lower.transform.translation, start + Vec3::new(4.275, -0.30, 0.0)));
        assert!(lower.transform.rotation_deg.y.abs() < EPS);
        assert!(close(items[1].transform.translation, start + Vec3::new(4.275, 0.05, 0.0)));
    }

    #[test]
    fn rails_follow_direction() {
        let items = fence(Vec3::ZERO, Vec3::Z, 3, 1.0);
        let lower = &items[0];

        // Rail length runs along local X; after the yaw it must lie along +Z.
        let m = lower.transform.compose();
        let along = m.transform_vector3(Vec3::X);
        assert!(close(along, Vec3::new(0.0, 0.0, 2.0)), "got {along:?}");
        assert!(close(lower.transform.translation, Vec3::new(0.0, -0.30, 1.0)));
    }

    #[test]
    fn single_post_has_no_rails() {
        let items = fence(Vec3::ZERO, Vec3::X, 1, 0.95);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].label, "post");
        assert!(fence(Vec3::ZERO, Vec3::X, 0, 0.95).is_empty());
    }

    #[test]
    fn zero_direction_falls_back_to_x() {
        let items = fence(Vec3::ZERO, Vec3::ZERO, 2, 1.0);
        assert_eq!(items.len(), 4);
        assert!(close(items[3].transform.translation, Vec3::new(1.0, 0.15, 0.0)));
    }

    #[test]
    fn unnormalized_direction_is_normalized() {
        let items = fence(Vec3::ZERO, Vec3::new(3.0, 0.0, 0.0), 2, 0.5);
        assert!(close(items[3].transform.translation, Vec3::new(0.5, 0.15, 0.0)));
    }
}
