use thiserror::Error;

use crate::lighting::LightingError;
use crate::texture::TextureError;

/// Errors that stop scene preparation.
///
/// Only fatal texture errors end up here; decode and duplicate-tag failures are logged
/// and the texture is skipped.
#[derive(Debug, Error)]
pub enum SceneError {
    #[error("texture '{tag}': {source}")]
    Texture {
        tag: String,
        #[source]
        source: TextureError,
    },

    #[error(transparent)]
    Lighting(#[from] LightingError),
}
