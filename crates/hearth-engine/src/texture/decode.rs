//! Image decoding and CPU-side mip generation.

use std::path::Path;

use image::imageops::{self, FilterType};
use image::RgbaImage;

use super::TextureError;

/// Decoded pixel data with its source channel count.
///
/// `pixels` is tightly packed 8-bit data, `channels` bytes per pixel, rows bottom-up
/// when the loader flipped the image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedImage {
    pub width: u32,
    pub height: u32,
    pub channels: u8,
    pub pixels: Vec<u8>,
}

/// One RGBA8 mip level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MipLevel {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

impl DecodedImage {
    pub fn new(width: u32, height: u32, channels: u8, pixels: Vec<u8>) -> Self {
        Self { width, height, channels, pixels }
    }

    /// A solid-color image, mostly useful for placeholders and tests.
    pub fn solid(width: u32, height: u32, rgba: [u8; 4], channels: u8) -> Self {
        let texel = &rgba[..channels.min(4) as usize];
        let pixels = texel.repeat((width * height) as usize);
        Self::new(width, height, channels, pixels)
    }

    /// True when the image is RGB or RGBA.
    #[inline]
    pub fn is_supported(&self) -> bool {
        matches!(self.channels, 3 | 4)
    }

    /// True when the buffer length matches the dimensions and the image is non-empty.
    #[inline]
    pub fn is_consistent(&self) -> bool {
        self.width > 0
            && self.height > 0
            && self.pixels.len() == self.width as usize * self.height as usize * self.channels as usize
    }

    /// Number of levels in a full mip chain down to 1x1.
    #[inline]
    pub fn mip_level_count(&self) -> u32 {
        32 - self.width.max(self.height).max(1).leading_zeros()
    }

    /// Expands to RGBA8. RGB gets an opaque alpha channel.
    ///
    /// Returns `None` for unsupported channel counts or inconsistent buffers.
    pub fn to_rgba8(&self) -> Option<Vec<u8>> {
        if !self.is_consistent() {
            return None;
        }
        match self.channels {
            4 => Some(self.pixels.clone()),
            3 => {
                let mut out = Vec::with_capacity(self.pixels.len() / 3 * 4);
                for px in self.pixels.chunks_exact(3) {
                    out.extend_from_slice(px);
                    out.push(u8::MAX);
                }
                Some(out)
            }
            _ => None,
        }
    }

    /// Builds the full RGBA8 mip chain, level 0 first.
    pub fn rgba_mip_chain(&self) -> Option<Vec<MipLevel>> {
        let base = RgbaImage::from_raw(self.width, self.height, self.to_rgba8()?)?;
        let count = self.mip_level_count();

        let mut levels = Vec::with_capacity(count as usize);
        let mut current = base;
        for _ in 1..count {
            let w = (current.width() / 2).max(1);
            let h = (current.height() / 2).max(1);
            let next = imageops::resize(&current, w, h, FilterType::Triangle);
            levels.push(into_level(current));
            current = next;
        }
        levels.push(into_level(current));
        Some(levels)
    }

    /// RGBA8 levels to upload: the full chain, or just level 0 without mipmaps.
    pub fn rgba_levels(&self, generate_mipmaps: bool) -> Option<Vec<MipLevel>> {
        if generate_mipmaps {
            return self.rgba_mip_chain();
        }
        let pixels = self.to_rgba8()?;
        Some(vec![MipLevel { width: self.width, height: self.height, pixels }])
    }
}

fn into_level(img: RgbaImage) -> MipLevel {
    let (width, height) = img.dimensions();
    MipLevel { width, height, pixels: img.into_raw() }
}

/// Source of decoded images.
pub trait ImageLoader {
    fn load(&self, path: &Path) -> Result<DecodedImage, TextureError>;
}

/// Decodes image files from disk with the `image` crate.
#[derive(Debug, Copy, Clone)]
pub struct FileImageLoader {
    /// Flip rows on load so that UV (0,0) is the bottom-left texel.
    pub flip_vertically: bool,
}

impl Default for FileImageLoader {
    fn default() -> Self {
        Self { flip_vertically: true }
    }
}

impl ImageLoader for FileImageLoader {
    fn load(&self, path: &Path) -> Result<DecodedImage, TextureError> {
        let img = image::open(path).map_err(|e| TextureError::Decode {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        let img = if self.flip_vertically { img.flipv() } else { img };

        let channels = img.color().channel_count();
        let (width, height) = (img.width(), img.height());
        let pixels = match channels {
            3 => img.into_rgb8().into_raw(),
            4 => img.into_rgba8().into_raw(),
            // Kept as-is; the registry rejects it.
            _ => img.into_bytes(),
        };

        Ok(DecodedImage { width, height, channels, pixels })
    }
}
