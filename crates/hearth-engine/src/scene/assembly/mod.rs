//! Reusable sub-assemblies built from unit primitives.
//!
//! Each builder is a pure function returning draw items in submission order. Pieces are
//! positioned by adding offsets to an anchor point; there is no transform nesting.

mod fence;
mod house;
mod terrain;
mod tree;

pub use fence::fence;
pub use house::{chimney, framed_opening, house, porch, roof_slope, wall, HouseStyle, Opening, RoofSide};
pub use terrain::{backdrop, mountain_cap, SNOW_MATERIAL};
pub use tree::{tree, TreeDims};
