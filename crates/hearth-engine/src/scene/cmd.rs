use glam::Vec2;

use crate::paint::Color;
use crate::render::Primitive;
use crate::transform::TransformSpec;

/// How a draw is shaded.
///
/// A draw is either flat-colored or textured, never both.
#[derive(Debug, Clone, PartialEq)]
pub enum Surface {
    Flat(Color),
    Textured(TexturedSurface),
}

/// Texture reference plus what to fall back to when it is missing.
#[derive(Debug, Clone, PartialEq)]
pub struct TexturedSurface {
    pub texture: String,
    /// Tried when `texture` is not registered.
    pub fallback_texture: Option<String>,
    /// Used as a flat color when neither texture is registered.
    pub fallback_color: Color,
    pub uv_scale: Vec2,
}

impl Surface {
    #[inline]
    pub fn flat(color: Color) -> Self {
        Surface::Flat(color)
    }

    /// Textured with the given UV tiling; falls back to `fallback_color` when missing.
    pub fn textured(texture: impl Into<String>, uv_scale: Vec2, fallback_color: Color) -> Self {
        Surface::Textured(TexturedSurface {
            texture: texture.into(),
            fallback_texture: None,
            fallback_color,
            uv_scale,
        })
    }

    /// Adds a second texture to try before the flat fallback. No-op on flat surfaces.
    pub fn or_texture(mut self, fallback: impl Into<String>) -> Self {
        if let Surface::Textured(t) = &mut self {
            t.fallback_texture = Some(fallback.into());
        }
        self
    }

    #[inline]
    pub fn is_textured(&self) -> bool {
        matches!(self, Surface::Textured(_))
    }
}

/// One object to draw: what, where, and how it is shaded.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawItem {
    /// Human-readable name for traces and tests.
    pub label: &'static str,
    pub primitive: Primitive,
    pub transform: TransformSpec,
    /// Material tag to apply before drawing. `None` keeps the current material.
    pub material: Option<String>,
    pub surface: Surface,
}

impl DrawItem {
    pub fn new(label: &'static str, primitive: Primitive, transform: TransformSpec, surface: Surface) -> Self {
        Self {
            label,
            primitive,
            transform,
            material: None,
            surface,
        }
    }

    #[inline]
    pub fn flat(label: &'static str, primitive: Primitive, transform: TransformSpec, color: Color) -> Self {
        Self::new(label, primitive, transform, Surface::Flat(color))
    }

    pub fn with_material(mut self, tag: impl Into<String>) -> Self {
        self.material = Some(tag.into());
        self
    }
}

/// Assigns `tag` to every item that has no material yet.
pub fn with_material(items: Vec<DrawItem>, tag: &str) -> Vec<DrawItem> {
    items
        .into_iter()
        .map(|item| match item.material {
            Some(_) => item,
            None => item.with_material(tag),
        })
        .collect()
}
