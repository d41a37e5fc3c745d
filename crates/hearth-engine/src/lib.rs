//! Hearth engine crate.
//!
//! Composes a static winter scene (a cottage, evergreens, a fence and snow) from unit
//! primitives and submits it frame by frame to a shader program through the
//! [`render::FrameTarget`] traits.
//!
//! Setup goes through [`scene::SceneManager::prepare_scene`]: materials, the light rig,
//! meshes and textures. Each frame is then [`scene::SceneManager::render_scene`].

pub mod device;
pub mod lighting;
pub mod logging;
pub mod material;
pub mod paint;
pub mod render;
pub mod scene;
pub mod shader;
pub mod texture;
pub mod transform;
