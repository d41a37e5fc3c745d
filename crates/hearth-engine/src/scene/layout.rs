use glam::Vec3;

use super::assembly::{self, HouseStyle, TreeDims};
use super::cmd::with_material;
use super::DrawList;

/// A tree instance: where it stands relative to the house anchor, and its shape.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TreePlacement {
    pub offset: Vec3,
    pub dims: TreeDims,
}

/// A fence run placed relative to the house anchor.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FencePlacement {
    pub offset: Vec3,
    pub direction: Vec3,
    pub posts: usize,
    pub spacing: f32,
}

/// Anchors and parameters for the whole winter scene.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneLayout {
    /// House anchor `H`; trees and fence are offset from it.
    pub house_anchor: Vec3,
    pub house_yaw: f32,
    pub house: HouseStyle,
    pub mountain_cap: Vec3,
    pub trees: Vec<TreePlacement>,
    pub fence: Option<FencePlacement>,
    /// Material applied to trees and fence.
    pub yard_material: String,
}

impl Default for SceneLayout {
    fn default() -> Self {
        Self {
            house_anchor: Vec3::new(0.0, -0.55, 2.8),
            house_yaw: -4.0,
            house: HouseStyle::default(),
            mountain_cap: Vec3::new(0.0, 3.15, -11.5),
            trees: vec![
                TreePlacement {
                    offset: Vec3::new(-3.8, -1.9, 1.6),
                    dims: TreeDims::new(1.0, 0.18, 1.4, 0.9),
                },
                TreePlacement {
                    offset: Vec3::new(3.6, -1.95, 1.4),
                    dims: TreeDims::new(0.9, 0.17, 1.2, 0.8),
                },
            ],
            fence: Some(FencePlacement {
                offset: Vec3::new(-4.5, -1.85, 2.25),
                direction: Vec3::X,
                posts: 10,
                spacing: 0.95,
            }),
            yard_material: "house".to_owned(),
        }
    }
}

/// Records the full scene into `list`, replacing whatever it held.
///
/// Order: backdrop, house, mountain cap, trees, fence. The result depends only on
/// `layout`, so recording twice gives identical lists.
pub fn compose_scene(layout: &SceneLayout, list: &mut DrawList) {
    list.clear();

    list.extend(assembly::backdrop());
    list.extend(assembly::house(layout.house_anchor, layout.house_yaw, &layout.house));
    list.push(assembly::mountain_cap(layout.mountain_cap));

    for placement in &layout.trees {
        let base = layout.house_anchor + placement.offset;
        list.extend(with_material(assembly::tree(base, placement.dims), &layout.yard_material));
    }

    if let Some(f) = &layout.fence {
        let start = layout.house_anchor + f.offset;
        list.extend(with_material(
            assembly::fence(start, f.direction, f.posts, f.spacing),
            &layout.yard_material,
        ));
    }
}
