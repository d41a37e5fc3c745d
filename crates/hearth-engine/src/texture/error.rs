use std::path::PathBuf;

use thiserror::Error;

/// Failures while loading or registering a texture.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TextureError {
    /// The file could not be read or parsed as an image.
    #[error("could not decode image {}: {reason}", .path.display())]
    Decode { path: PathBuf, reason: String },

    /// Only 3- and 4-channel images are accepted.
    #[error("image {} has {channels} channel(s); only RGB and RGBA are supported", .path.display())]
    UnsupportedFormat { path: PathBuf, channels: u8 },

    #[error("texture tag '{0}' is already registered")]
    DuplicateTag(String),

    /// Every texture unit is already taken. This is a scene authoring mistake.
    #[error("all {capacity} texture units are in use")]
    CapacityExceeded { capacity: usize },

    #[error("texture backend error: {0}")]
    Backend(String),
}

impl TextureError {
    /// Whether this error means the scene is misconfigured, as opposed to one asset
    /// being unusable.
    pub fn is_fatal(&self) -> bool {
        matches!(self, TextureError::CapacityExceeded { .. } | TextureError::Backend(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_capacity_and_backend_are_fatal() {
        assert!(TextureError::CapacityExceeded { capacity: 16 }.is_fatal());
        assert!(TextureError::Backend("lost".into()).is_fatal());
        assert!(!TextureError::DuplicateTag("brick".into()).is_fatal());
        assert!(
            !TextureError::Decode { path: "a.png".into(), reason: "eof".into() }.is_fatal()
        );
        assert!(
            !TextureError::UnsupportedFormat { path: "a.png".into(), channels: 2 }.is_fatal()
        );
    }

    #[test]
    fn display_names_the_file() {
        let e = TextureError::UnsupportedFormat { path: "tex/gray.png".into(), channels: 1 };
        assert_eq!(
            e.to_string(),
            "image tex/gray.png has 1 channel(s); only RGB and RGBA are supported"
        );
    }
}
