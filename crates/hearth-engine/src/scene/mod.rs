//! Scene composition.
//!
//! Responsibilities:
//! - describe each object as a renderer-agnostic [`DrawItem`]
//! - build sub-assemblies (tree, fence, house parts) from unit primitives
//! - record the whole frame in a fixed order into a [`DrawList`]
//! - own the registries and drive preparation through [`SceneManager`]

pub mod assembly;
mod cmd;
mod config;
mod error;
mod layout;
mod list;
mod manager;

pub use cmd::{with_material, DrawItem, Surface, TexturedSurface};
pub use config::{SceneConfig, TextureAsset};
pub use error::SceneError;
pub use layout::{compose_scene, FencePlacement, SceneLayout, TreePlacement};
pub use list::DrawList;
pub use manager::SceneManager;
