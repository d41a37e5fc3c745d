use glam::{Mat4, Vec2};

use crate::material::{Material, MaterialRegistry};
use crate::paint::Color;
use crate::shader::{names, UniformSink};
use crate::texture::TextureSlot;

/// Shader state as last written by the submitter.
///
/// Uniforms persist across draws, so this value mirrors what the program currently
/// holds. It is passed explicitly through submission rather than living in a global.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawState {
    pub model: Mat4,
    pub texturing: bool,
    /// Unit sampled by `objectTexture`; only meaningful while `texturing` is set.
    pub texture_slot: Option<TextureSlot>,
    pub color: Color,
    pub uv_scale: Vec2,
    pub material: Option<String>,
}

impl DrawState {
    /// Texturing off, white, unit UV scale, neutral material.
    pub fn baseline() -> Self {
        Self {
            model: Mat4::IDENTITY,
            texturing: false,
            texture_slot: None,
            color: Color::white(),
            uv_scale: Vec2::ONE,
            material: None,
        }
    }

    /// Writes the baseline to the shader and resets this value to match.
    pub fn reset<S: UniformSink + ?Sized>(&mut self, sink: &mut S, neutral: &Material) {
        *self = Self::baseline();
        sink.set_bool(names::USE_TEXTURE, false);
        sink.set_vec4(names::OBJECT_COLOR, self.color.to_vec4());
        sink.set_vec2(names::UV_SCALE, self.uv_scale);
        neutral.upload(sink);
    }

    pub fn set_model<S: UniformSink + ?Sized>(&mut self, sink: &mut S, model: Mat4) {
        sink.set_mat4(names::MODEL, model);
        self.model = model;
    }

    /// Switches to flat shading with `color`. Always writes the texture flag.
    pub fn use_color<S: UniformSink + ?Sized>(&mut self, sink: &mut S, color: Color) {
        sink.set_bool(names::USE_TEXTURE, false);
        sink.set_vec4(names::OBJECT_COLOR, color.to_vec4());
        self.texturing = false;
        self.texture_slot = None;
        self.color = color;
    }

    /// Switches to texturing from `slot` with `uv_scale` tiling.
    pub fn use_texture<S: UniformSink + ?Sized>(&mut self, sink: &mut S, slot: TextureSlot, uv_scale: Vec2) {
        sink.set_bool(names::USE_TEXTURE, true);
        sink.set_sampler(names::OBJECT_TEXTURE, slot.unit());
        sink.set_vec2(names::UV_SCALE, uv_scale);
        self.texturing = true;
        self.texture_slot = Some(slot);
        self.uv_scale = uv_scale;
    }

    /// Applies a tagged material. On a miss nothing is written and the current
    /// material stays active.
    pub fn use_material<S: UniformSink + ?Sized>(
        &mut self,
        sink: &mut S,
        materials: &MaterialRegistry,
        tag: &str,
    ) -> bool {
        if self.material.as_deref() == Some(tag) {
            return true;
        }
        let found = materials.apply(tag, sink);
        if found {
            self.material = Some(tag.to_owned());
        }
        found
    }
}

impl Default for DrawState {
    fn default() -> Self {
        Self::baseline()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::material::winter_palette;
    use crate::shader::{UniformTable, UniformValue};

    fn palette() -> MaterialRegistry {
        let mut reg = MaterialRegistry::new();
        for m in winter_palette() {
            reg.define(m);
        }
        reg
    }

    #[test]
    fn color_after_texture_disables_texturing() {
        let mut t = UniformTable::new();
        let mut state = DrawState::baseline();

        state.use_texture(&mut t, TextureSlot::new(3), Vec2::new(3.0, 2.0));
        assert!(state.texturing);
        assert_eq!(t.get(names::OBJECT_TEXTURE).and_then(UniformValue::as_sampler), Some(3));

        state.use_color(&mut t, Color::black());
        assert!(!state.texturing);
        assert_eq!(state.texture_slot, None);
        assert_eq!(t.get(names::USE_TEXTURE).and_then(UniformValue::as_bool), Some(false));
    }

    #[test]
    fn reset_restores_baseline_uniforms() {
        let mut t = UniformTable::new();
        let mut state = DrawState::baseline();
        state.use_texture(&mut t, TextureSlot::new(1), Vec2::splat(4.0));
        state.use_material(&mut t, &palette(), "house");

        let neutral = Material::neutral();
        state.reset(&mut t, &neutral);

        assert_eq!(state, DrawState::baseline());
        assert_eq!(t.get(names::USE_TEXTURE).and_then(UniformValue::as_bool), Some(false));
        assert_eq!(t.get(names::UV_SCALE), Some(&UniformValue::Vec2(Vec2::ONE)));
        assert_eq!(
            t.get(names::MATERIAL_SHININESS).and_then(UniformValue::as_float),
            Some(neutral.shininess)
        );
    }

    #[test]
    fn material_miss_keeps_current_material() {
        let mut t = UniformTable::new();
        let mut state = DrawState::baseline();
        let reg = palette();

        assert!(state.use_material(&mut t, &reg, "snow"));
        let writes = t.write_count();
        assert!(!state.use_material(&mut t, &reg, "missing"));

        assert_eq!(state.material.as_deref(), Some("snow"));
        assert_eq!(t.write_count(), writes);
    }

    #[test]
    fn reapplying_active_material_writes_nothing() {
        let mut t = UniformTable::new();
        let mut state = DrawState::baseline();
        let reg = palette();

        state.use_material(&mut t, &reg, "house");
        let writes = t.write_count();
        assert!(state.use_material(&mut t, &reg, "house"));
        assert_eq!(t.write_count(), writes);
    }
}
