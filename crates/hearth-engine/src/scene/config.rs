use std::path::{Path, PathBuf};

use crate::texture::DEFAULT_TEXTURE_UNITS;

/// An image to register under `tag` during preparation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextureAsset {
    pub tag: String,
    /// Relative to [`SceneConfig::asset_root`] unless absolute.
    pub path: PathBuf,
}

impl TextureAsset {
    pub fn new(tag: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            tag: tag.into(),
            path: path.into(),
        }
    }
}

/// Scene preparation settings.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneConfig {
    pub asset_root: PathBuf,
    pub textures: Vec<TextureAsset>,
    /// Upper bound on registered textures; also capped by the backend.
    pub texture_units: usize,
    /// Flip images so row 0 is the bottom, as the shader's UVs expect.
    pub flip_textures_vertically: bool,
    pub lighting_enabled: bool,
}

impl SceneConfig {
    /// Resolves an asset path against the asset root.
    pub fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.asset_root.join(path)
        }
    }
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            asset_root: PathBuf::from("assets"),
            textures: vec![
                TextureAsset::new("brick", "textures/Brick.jpg"),
                TextureAsset::new("roof", "textures/Roof.jpg"),
            ],
            texture_units: DEFAULT_TEXTURE_UNITS,
            flip_textures_vertically: true,
            lighting_enabled: true,
        }
    }
}
