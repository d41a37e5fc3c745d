//! Uniform names understood by the scene shader.

pub const MODEL: &str = "model";
pub const OBJECT_COLOR: &str = "objectColor";
pub const OBJECT_TEXTURE: &str = "objectTexture";
pub const USE_TEXTURE: &str = "bUseTexture";
pub const USE_LIGHTING: &str = "bUseLighting";
pub const UV_SCALE: &str = "UVscale";

pub const MATERIAL_AMBIENT_COLOR: &str = "material.ambientColor";
pub const MATERIAL_AMBIENT_STRENGTH: &str = "material.ambientStrength";
pub const MATERIAL_DIFFUSE_COLOR: &str = "material.diffuseColor";
pub const MATERIAL_SPECULAR_COLOR: &str = "material.specularColor";
pub const MATERIAL_SHININESS: &str = "material.shininess";

/// Fields of one `lightSources[i]` struct.
pub mod light {
    pub const POSITION: &str = "position";
    pub const AMBIENT_COLOR: &str = "ambientColor";
    pub const DIFFUSE_COLOR: &str = "diffuseColor";
    pub const SPECULAR_COLOR: &str = "specularColor";
    pub const FOCAL_STRENGTH: &str = "focalStrength";
    pub const SPECULAR_INTENSITY: &str = "specularIntensity";
}

/// Builds `lightSources[<index>].<field>`.
#[inline]
pub fn light_field(index: usize, field: &str) -> String {
    format!("lightSources[{index}].{field}")
}
