use super::decode::{DecodedImage, MipLevel};
use super::TextureError;

/// Texture unit count assumed when the backend does not report one.
pub const DEFAULT_TEXTURE_UNITS: usize = 16;

/// Opaque reference to a texture owned by a [`TextureBackend`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct TextureHandle(u32);

impl TextureHandle {
    #[inline]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    #[inline]
    pub const fn id(self) -> u32 {
        self.0
    }
}

/// Index of a texture unit.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct TextureSlot(u32);

impl TextureSlot {
    #[inline]
    pub const fn new(unit: u32) -> Self {
        Self(unit)
    }

    #[inline]
    pub const fn unit(self) -> u32 {
        self.0
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum WrapMode {
    Repeat,
    MirrorRepeat,
    ClampToEdge,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Filter {
    Nearest,
    Linear,
}

/// Sampling and mip parameters for an uploaded texture.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct TextureParams {
    pub wrap: WrapMode,
    pub mag_filter: Filter,
    pub min_filter: Filter,
    /// Filter between mip levels; `None` samples level 0 only.
    pub mipmap_filter: Option<Filter>,
    pub generate_mipmaps: bool,
}

impl Default for TextureParams {
    /// Repeat wrapping, linear filtering, trilinear mips.
    fn default() -> Self {
        Self {
            wrap: WrapMode::Repeat,
            mag_filter: Filter::Linear,
            min_filter: Filter::Linear,
            mipmap_filter: Some(Filter::Linear),
            generate_mipmaps: true,
        }
    }
}

/// Creates textures and binds them to units.
pub trait TextureBackend {
    /// Hardware texture unit limit.
    fn max_texture_units(&self) -> usize {
        DEFAULT_TEXTURE_UNITS
    }

    /// Uploads an RGB or RGBA image and returns its handle.
    fn upload(
        &mut self,
        label: &str,
        image: &DecodedImage,
        params: &TextureParams,
    ) -> Result<TextureHandle, TextureError>;

    /// Makes `handle` resident on texture unit `slot`.
    fn bind(&mut self, slot: TextureSlot, handle: TextureHandle);
}

/// A texture kept in host memory.
#[derive(Debug, Clone)]
pub struct CpuTexture {
    pub label: String,
    pub levels: Vec<MipLevel>,
    pub params: TextureParams,
}

impl CpuTexture {
    #[inline]
    pub fn size(&self) -> (u32, u32) {
        self.levels.first().map_or((0, 0), |l| (l.width, l.height))
    }
}

/// Texture backend that keeps mip chains in memory.
///
/// Used when no GPU is available and by tests.
#[derive(Debug, Clone)]
pub struct CpuTextureBackend {
    textures: Vec<CpuTexture>,
    units: Vec<Option<TextureHandle>>,
}

impl CpuTextureBackend {
    pub fn new() -> Self {
        Self::with_units(DEFAULT_TEXTURE_UNITS)
    }

    pub fn with_units(units: usize) -> Self {
        Self {
            textures: Vec::new(),
            units: vec![None; units],
        }
    }

    #[inline]
    pub fn texture(&self, handle: TextureHandle) -> Option<&CpuTexture> {
        self.textures.get(handle.id() as usize)
    }

    /// Texture currently resident on `slot`.
    #[inline]
    pub fn bound(&self, slot: TextureSlot) -> Option<TextureHandle> {
        self.units.get(slot.index()).copied().flatten()
    }

    #[inline]
    pub fn texture_count(&self) -> usize {
        self.textures.len()
    }
}

impl Default for CpuTextureBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl TextureBackend for CpuTextureBackend {
    fn max_texture_units(&self) -> usize {
        self.units.len()
    }

    fn upload(
        &mut self,
        label: &str,
        image: &DecodedImage,
        params: &TextureParams,
    ) -> Result<TextureHandle, TextureError> {
        let levels = image
            .rgba_levels(params.generate_mipmaps)
            .ok_or_else(|| TextureError::Backend(format!("'{label}': pixel data does not match its dimensions")))?;

        let handle = TextureHandle::new(self.textures.len() as u32);
        self.textures.push(CpuTexture {
            label: label.to_owned(),
            levels,
            params: *params,
        });
        Ok(handle)
    }

    fn bind(&mut self, slot: TextureSlot, handle: TextureHandle) {
        match self.units.get_mut(slot.index()) {
            Some(unit) => *unit = Some(handle),
            None => log::error!("texture unit {} does not exist", slot.unit()),
        }
    }
}
