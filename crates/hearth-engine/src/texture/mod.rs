//! Texture loading and the tag -> slot registry.
//!
//! Images are decoded through an [`ImageLoader`], uploaded through a
//! [`TextureBackend`], and registered at the next free texture unit. Two backends are
//! provided: [`WgpuTextureBackend`] for a real device and [`CpuTextureBackend`] for
//! headless runs and tests.

mod backend;
mod decode;
mod error;
mod gpu;
mod registry;

pub use backend::{
    CpuTexture, CpuTextureBackend, DEFAULT_TEXTURE_UNITS, Filter, TextureBackend, TextureHandle,
    TextureParams, TextureSlot, WrapMode,
};
pub use decode::{DecodedImage, FileImageLoader, ImageLoader, MipLevel};
pub use error::TextureError;
pub use gpu::{GpuTexture, WgpuTextureBackend};
pub use registry::{TextureEntry, TextureRegistry};
