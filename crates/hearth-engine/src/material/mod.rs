//! Surface materials looked up by tag.
//!
//! Materials are defined once while the scene is prepared and then only read. Defining
//! a tag a second time replaces the earlier entry.

use std::collections::HashMap;

use glam::Vec3;

use crate::shader::names;
use crate::shader::UniformSink;

/// Phong-style material parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct Material {
    pub tag: String,
    pub ambient_color: Vec3,
    pub ambient_strength: f32,
    pub diffuse_color: Vec3,
    pub specular_color: Vec3,
    pub shininess: f32,
}

impl Material {
    pub fn new(
        tag: impl Into<String>,
        ambient_strength: f32,
        ambient_color: Vec3,
        diffuse_color: Vec3,
        specular_color: Vec3,
        shininess: f32,
    ) -> Self {
        Self {
            tag: tag.into(),
            ambient_color,
            ambient_strength,
            diffuse_color,
            specular_color,
            shininess,
        }
    }

    /// Neutral grey, used as the per-frame baseline before any tagged material is applied.
    pub fn neutral() -> Self {
        Self::new("neutral", 0.2, Vec3::ONE, Vec3::splat(0.8), Vec3::splat(0.1), 8.0)
    }

    /// Uploads all five material fields.
    pub fn upload<S: UniformSink + ?Sized>(&self, sink: &mut S) {
        sink.set_vec3(names::MATERIAL_AMBIENT_COLOR, self.ambient_color);
        sink.set_float(names::MATERIAL_AMBIENT_STRENGTH, self.ambient_strength);
        sink.set_vec3(names::MATERIAL_DIFFUSE_COLOR, self.diffuse_color);
        sink.set_vec3(names::MATERIAL_SPECULAR_COLOR, self.specular_color);
        sink.set_float(names::MATERIAL_SHININESS, self.shininess);
    }
}

/// Tag -> material map.
#[derive(Debug, Default, Clone)]
pub struct MaterialRegistry {
    materials: HashMap<String, Material>,
}

impl MaterialRegistry {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a material, replacing any earlier definition with the same tag.
    ///
    /// Returns the replaced material, if there was one.
    pub fn define(&mut self, material: Material) -> Option<Material> {
        let replaced = self.materials.insert(material.tag.clone(), material);
        if let Some(old) = &replaced {
            log::warn!("material '{}' redefined; later definition wins", old.tag);
        }
        replaced
    }

    #[inline]
    pub fn find(&self, tag: &str) -> Option<&Material> {
        self.materials.get(tag)
    }

    /// Uploads the material named `tag`.
    ///
    /// Unknown tags upload nothing, so whatever material was active stays active.
    /// Returns whether the tag was found.
    pub fn apply<S: UniformSink + ?Sized>(&self, tag: &str, sink: &mut S) -> bool {
        match self.find(tag) {
            Some(material) => {
                material.upload(sink);
                true
            }
            None => {
                log::debug!("material '{tag}' not defined; keeping previous material");
                false
            }
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.materials.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.materials.is_empty()
    }

    pub fn clear(&mut self) {
        self.materials.clear();
    }
}

/// Materials used by the winter scene.
pub fn winter_palette() -> Vec<Material> {
    vec![
        // Snow / ground: bluish, low ambient.
        Material::new(
            "snow",
            0.18,
            Vec3::new(0.70, 0.78, 0.92),
            Vec3::new(0.80, 0.88, 0.98),
            Vec3::splat(0.15),
            8.0,
        ),
        // House: neutral, slightly cool.
        Material::new(
            "house",
            0.15,
            Vec3::new(0.62, 0.62, 0.70),
            Vec3::new(0.70, 0.70, 0.78),
            Vec3::splat(0.18),
            12.0,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shader::{UniformTable, UniformValue};

    fn palette_registry() -> MaterialRegistry {
        let mut reg = MaterialRegistry::new();
        for m in winter_palette() {
            reg.define(m);
        }
        reg
    }

    #[test]
    fn find_defined_and_undefined() {
        let reg = palette_registry();
        assert_eq!(reg.len(), 2);
        assert_eq!(reg.find("snow").map(|m| m.shininess), Some(8.0));
        assert!(reg.find("lava").is_none());
    }

    #[test]
    fn apply_uploads_all_five_fields() {
        let reg = palette_registry();
        let mut t = UniformTable::new();
        assert!(reg.apply("house", &mut t));

        assert_eq!(t.len(), 5);
        assert_eq!(
            t.get(names::MATERIAL_AMBIENT_STRENGTH).and_then(UniformValue::as_float),
            Some(0.15)
        );
        assert_eq!(
            t.get(names::MATERIAL_DIFFUSE_COLOR).and_then(UniformValue::as_vec3),
            Some(Vec3::new(0.70, 0.70, 0.78))
        );
        assert_eq!(t.get(names::MATERIAL_SHININESS).and_then(UniformValue::as_float), Some(12.0));
    }

    #[test]
    fn apply_unknown_tag_leaves_previous_upload_untouched() {
        let reg = palette_registry();
        let mut t = UniformTable::new();
        reg.apply("snow", &mut t);
        let writes = t.write_count();
        let before = t.clone();

        assert!(!reg.apply("missing", &mut t));
        assert_eq!(t.write_count(), writes);
        for name in [
            names::MATERIAL_AMBIENT_COLOR,
            names::MATERIAL_AMBIENT_STRENGTH,
            names::MATERIAL_DIFFUSE_COLOR,
            names::MATERIAL_SPECULAR_COLOR,
            names::MATERIAL_SHININESS,
        ] {
            assert_eq!(t.get(name), before.get(name));
        }
    }

    #[test]
    fn redefinition_replaces_earlier_entry() {
        let mut reg = palette_registry();
        let replaced = reg.define(Material::new("snow", 0.5, Vec3::ONE, Vec3::ONE, Vec3::ONE, 64.0));

        assert_eq!(replaced.map(|m| m.shininess), Some(8.0));
        assert_eq!(reg.len(), 2);
        assert_eq!(reg.find("snow").map(|m| m.shininess), Some(64.0));
    }
}
