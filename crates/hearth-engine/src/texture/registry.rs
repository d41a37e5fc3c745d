use std::collections::HashMap;
use std::path::Path;

use super::backend::{TextureBackend, TextureHandle, TextureParams, TextureSlot};
use super::decode::ImageLoader;
use super::TextureError;

/// A registered texture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextureEntry {
    pub tag: String,
    pub handle: TextureHandle,
    pub slot: TextureSlot,
}

/// Tag -> texture slot registry.
///
/// Slots are handed out in load order, one per texture, up to the texture unit
/// capacity. Entries live as long as the registry; there is no per-texture unload.
pub struct TextureRegistry<B: TextureBackend> {
    backend: B,
    entries: Vec<TextureEntry>,
    by_tag: HashMap<String, usize>,
    capacity: usize,
    params: TextureParams,
}

impl<B: TextureBackend> TextureRegistry<B> {
    /// Creates a registry limited to the backend's texture unit count.
    pub fn new(backend: B) -> Self {
        let capacity = backend.max_texture_units();
        Self::with_capacity(backend, capacity)
    }

    /// Creates a registry limited to `capacity` slots (never more than the backend has).
    pub fn with_capacity(backend: B, capacity: usize) -> Self {
        let capacity = capacity.min(backend.max_texture_units());
        Self {
            backend,
            entries: Vec::new(),
            by_tag: HashMap::new(),
            capacity,
            params: TextureParams::default(),
        }
    }

    /// Decodes `path`, uploads it and registers it under `tag` at the next free slot.
    ///
    /// Nothing is registered on failure.
    pub fn load(
        &mut self,
        loader: &dyn ImageLoader,
        path: &Path,
        tag: &str,
    ) -> Result<TextureSlot, TextureError> {
        if self.by_tag.contains_key(tag) {
            return Err(TextureError::DuplicateTag(tag.to_owned()));
        }
        if self.entries.len() >= self.capacity {
            return Err(TextureError::CapacityExceeded { capacity: self.capacity });
        }

        let image = loader.load(path)?;
        if !image.is_supported() {
            return Err(TextureError::UnsupportedFormat {
                path: path.to_path_buf(),
                channels: image.channels,
            });
        }
        if !image.is_consistent() {
            return Err(TextureError::Decode {
                path: path.to_path_buf(),
                reason: format!(
                    "{} bytes do not describe a {}x{} image",
                    image.pixels.len(),
                    image.width,
                    image.height
                ),
            });
        }

        let handle = self.backend.upload(tag, &image, &self.params)?;
        let slot = TextureSlot::new(self.entries.len() as u32);

        self.by_tag.insert(tag.to_owned(), self.entries.len());
        self.entries.push(TextureEntry {
            tag: tag.to_owned(),
            handle,
            slot,
        });

        log::info!(
            "loaded texture '{tag}' from {} ({}x{}, {} channels) into slot {}",
            path.display(),
            image.width,
            image.height,
            image.channels,
            slot.unit()
        );
        Ok(slot)
    }

    #[inline]
    pub fn find_slot(&self, tag: &str) -> Option<TextureSlot> {
        self.entry(tag).map(|e| e.slot)
    }

    #[inline]
    pub fn find_handle(&self, tag: &str) -> Option<TextureHandle> {
        self.entry(tag).map(|e| e.handle)
    }

    #[inline]
    pub fn entry(&self, tag: &str) -> Option<&TextureEntry> {
        self.by_tag.get(tag).map(|&i| &self.entries[i])
    }

    /// Makes every registered texture resident on its own unit.
    pub fn bind_all(&mut self) {
        for entry in &self.entries {
            self.backend.bind(entry.slot, entry.handle);
        }
    }

    /// Entries in slot order.
    #[inline]
    pub fn entries(&self) -> &[TextureEntry] {
        &self.entries
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline]
    pub fn backend(&self) -> &B {
        &self.backend
    }
}
