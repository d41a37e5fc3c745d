use super::backend::{Filter, TextureBackend, TextureHandle, TextureParams, TextureSlot, WrapMode};
use super::decode::{DecodedImage, MipLevel};
use super::TextureError;

/// A texture living on the GPU.
pub struct GpuTexture {
    pub label: String,
    pub texture: wgpu::Texture,
    pub view: wgpu::TextureView,
    pub sampler: wgpu::Sampler,
}

/// Texture backend that creates `wgpu` textures.
///
/// wgpu has no RGB8 format, so RGB sources are expanded to RGBA8 on upload. Mips are
/// generated on the CPU and written level by level.
pub struct WgpuTextureBackend {
    device: wgpu::Device,
    queue: wgpu::Queue,
    format: wgpu::TextureFormat,
    textures: Vec<GpuTexture>,
    units: Vec<Option<TextureHandle>>,
}

impl WgpuTextureBackend {
    pub fn new(device: &wgpu::Device, queue: &wgpu::Queue) -> Self {
        let units = device.limits().max_sampled_textures_per_shader_stage as usize;
        Self {
            device: device.clone(),
            queue: queue.clone(),
            format: wgpu::TextureFormat::Rgba8UnormSrgb,
            textures: Vec::new(),
            units: vec![None; units],
        }
    }

    #[inline]
    pub fn texture(&self, handle: TextureHandle) -> Option<&GpuTexture> {
        self.textures.get(handle.id() as usize)
    }

    /// Texture resident on `slot`, if any.
    pub fn resident(&self, slot: TextureSlot) -> Option<&GpuTexture> {
        let handle = self.units.get(slot.index()).copied().flatten()?;
        self.texture(handle)
    }

    #[inline]
    pub fn texture_count(&self) -> usize {
        self.textures.len()
    }

    fn write_level(&self, texture: &wgpu::Texture, mip_level: u32, level: &MipLevel) {
        self.queue.write_texture(
            wgpu::TexelCopyTextureInfo {
                texture,
                mip_level,
                origin: wgpu::Origin3d::ZERO,
                aspect: wgpu::TextureAspect::All,
            },
            &level.pixels,
            wgpu::TexelCopyBufferLayout {
                offset: 0,
                bytes_per_row: Some(level.width * 4),
                rows_per_image: Some(level.height),
            },
            wgpu::Extent3d {
                width: level.width,
                height: level.height,
                depth_or_array_layers: 1,
            },
        );
    }

    fn create_sampler(&self, label: &str, params: &TextureParams) -> wgpu::Sampler {
        let address_mode = to_address_mode(params.wrap);
        self.device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some(label),
            address_mode_u: address_mode,
            address_mode_v: address_mode,
            address_mode_w: address_mode,
            mag_filter: to_filter_mode(params.mag_filter),
            min_filter: to_filter_mode(params.min_filter),
            mipmap_filter: match params.mipmap_filter {
                Some(Filter::Linear) => wgpu::MipmapFilterMode::Linear,
                Some(Filter::Nearest) | None => wgpu::MipmapFilterMode::Nearest,
            },
            ..Default::default()
        })
    }
}

impl TextureBackend for WgpuTextureBackend {
    fn max_texture_units(&self) -> usize {
        self.units.len()
    }

    fn upload(
        &mut self,
        label: &str,
        image: &DecodedImage,
        params: &TextureParams,
    ) -> Result<TextureHandle, TextureError> {
        let max_dim = self.device.limits().max_texture_dimension_2d;
        if image.width > max_dim || image.height > max_dim {
            return Err(TextureError::Backend(format!(
                "'{label}' is {}x{}, larger than the device limit {max_dim}",
                image.width, image.height
            )));
        }

        let levels = image
            .rgba_levels(params.generate_mipmaps)
            .ok_or_else(|| TextureError::Backend(format!("'{label}': pixel data does not match its dimensions")))?;

        let texture = self.device.create_texture(&wgpu::TextureDescriptor {
            label: Some(label),
            size: wgpu::Extent3d {
                width: image.width,
                height: image.height,
                depth_or_array_layers: 1,
            },
            mip_level_count: levels.len() as u32,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: self.format,
            usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
            view_formats: &[],
        });

        for (i, level) in levels.iter().enumerate() {
            self.write_level(&texture, i as u32, level);
        }

        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
        let sampler = self.create_sampler(label, params);

        let handle = TextureHandle::new(self.textures.len() as u32);
        self.textures.push(GpuTexture {
            label: label.to_owned(),
            texture,
            view,
            sampler,
        });

        log::debug!(
            "uploaded texture '{label}' ({}x{}, {} mip levels)",
            image.width,
            image.height,
            levels.len()
        );
        Ok(handle)
    }

    fn bind(&mut self, slot: TextureSlot, handle: TextureHandle) {
        match self.units.get_mut(slot.index()) {
            Some(unit) => *unit = Some(handle),
            None => log::error!(
                "texture unit {} exceeds the device limit of {}",
                slot.unit(),
                self.units.len()
            ),
        }
    }
}

fn to_address_mode(wrap: WrapMode) -> wgpu::AddressMode {
    match wrap {
        WrapMode::Repeat => wgpu::AddressMode::Repeat,
        WrapMode::MirrorRepeat => wgpu::AddressMode::MirrorRepeat,
        WrapMode::ClampToEdge => wgpu::AddressMode::ClampToEdge,
    }
}

fn to_filter_mode(filter: Filter) -> wgpu::FilterMode {
    match filter {
        Filter::Nearest => wgpu::FilterMode::Nearest,
        Filter::Linear => wgpu::FilterMode::Linear,
    }
}
