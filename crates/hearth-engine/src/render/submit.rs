use crate::material::{Material, MaterialRegistry};
use crate::scene::{DrawItem, DrawList, Surface};
use crate::texture::{TextureBackend, TextureRegistry, TextureSlot};

use super::ctx::FrameTarget;
use super::state::DrawState;

/// Resolves texture tags to bound slots at submission time.
pub trait TextureLookup {
    fn slot_for(&self, tag: &str) -> Option<TextureSlot>;
}

impl<B: TextureBackend> TextureLookup for TextureRegistry<B> {
    #[inline]
    fn slot_for(&self, tag: &str) -> Option<TextureSlot> {
        self.find_slot(tag)
    }
}

/// Per-frame submission counters.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FrameStats {
    pub draws: usize,
    pub textured: usize,
    pub flat: usize,
    /// Textured draws that used their fallback texture.
    pub texture_fallbacks: usize,
    /// Textured draws that found no texture and were drawn with their fallback color.
    pub color_fallbacks: usize,
    pub material_misses: usize,
}

/// Walks a [`DrawList`] and issues uniform writes and draws for each item.
///
/// Per item: `model`, then the material if one is named, then the surface, then the
/// draw. The texture flag is written for every draw, so no item inherits texturing
/// from the one before it.
pub struct FrameSubmitter<'a, L: TextureLookup + ?Sized> {
    textures: &'a L,
    materials: &'a MaterialRegistry,
    neutral: Material,
}

impl<'a, L: TextureLookup + ?Sized> FrameSubmitter<'a, L> {
    pub fn new(textures: &'a L, materials: &'a MaterialRegistry) -> Self {
        Self {
            textures,
            materials,
            neutral: Material::neutral(),
        }
    }

    /// Resets `state` to the baseline and submits every item in order.
    pub fn submit<T: FrameTarget + ?Sized>(
        &self,
        list: &DrawList,
        state: &mut DrawState,
        target: &mut T,
    ) -> FrameStats {
        let mut stats = FrameStats::default();
        state.reset(target, &self.neutral);

        for item in list.items() {
            self.submit_item(item, state, target, &mut stats);
        }

        stats
    }

    fn submit_item<T: FrameTarget + ?Sized>(
        &self,
        item: &DrawItem,
        state: &mut DrawState,
        target: &mut T,
        stats: &mut FrameStats,
    ) {
        state.set_model(target, item.transform.compose());

        if let Some(tag) = item.material.as_deref() {
            if !state.use_material(target, self.materials, tag) {
                log::debug!("{}: material '{tag}' not defined, keeping current", item.label);
                stats.material_misses += 1;
            }
        }

        match &item.surface {
            Surface::Flat(color) => {
                state.use_color(target, *color);
                stats.flat += 1;
            }
            Surface::Textured(surface) => {
                let primary = self.textures.slot_for(&surface.texture);
                let fallback = || {
                    surface
                        .fallback_texture
                        .as_deref()
                        .and_then(|tag| self.textures.slot_for(tag))
                };

                match primary {
                    Some(slot) => {
                        state.use_texture(target, slot, surface.uv_scale);
                        stats.textured += 1;
                    }
                    None => match fallback() {
                        Some(slot) => {
                            log::debug!(
                                "{}: texture '{}' missing, using fallback texture",
                                item.label,
                                surface.texture
                            );
                            state.use_texture(target, slot, surface.uv_scale);
                            stats.textured += 1;
                            stats.texture_fallbacks += 1;
                        }
                        None => {
                            log::debug!(
                                "{}: texture '{}' missing, drawing flat",
                                item.label,
                                surface.texture
                            );
                            state.use_color(target, surface.fallback_color);
                            stats.flat += 1;
                            stats.color_fallbacks += 1;
                        }
                    },
                }
            }
        }

        target.draw(item.primitive);
        stats.draws += 1;
    }
}
