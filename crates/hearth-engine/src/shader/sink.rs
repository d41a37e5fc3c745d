use glam::{Mat4, Vec2, Vec3, Vec4};

/// Upload target for named shader uniforms.
///
/// Implementations forward to whatever program is currently active. Every entry point
/// takes the uniform name verbatim; the engine never caches locations.
pub trait UniformSink {
    fn set_float(&mut self, name: &str, value: f32);
    fn set_int(&mut self, name: &str, value: i32);
    fn set_bool(&mut self, name: &str, value: bool);
    fn set_vec2(&mut self, name: &str, value: Vec2);
    fn set_vec3(&mut self, name: &str, value: Vec3);
    fn set_vec4(&mut self, name: &str, value: Vec4);
    fn set_mat4(&mut self, name: &str, value: Mat4);

    /// Points a sampler uniform at a texture unit.
    fn set_sampler(&mut self, name: &str, unit: u32);
}

/// A single uploaded uniform value, as captured by recording sinks.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum UniformValue {
    Float(f32),
    Int(i32),
    Bool(bool),
    Vec2(Vec2),
    Vec3(Vec3),
    Vec4(Vec4),
    Mat4(Mat4),
    Sampler(u32),
}

impl UniformValue {
    #[inline]
    pub fn as_bool(&self) -> Option<bool> {
        match *self {
            UniformValue::Bool(b) => Some(b),
            UniformValue::Int(i) => Some(i != 0),
            _ => None,
        }
    }

    #[inline]
    pub fn as_float(&self) -> Option<f32> {
        match *self {
            UniformValue::Float(v) => Some(v),
            _ => None,
        }
    }

    #[inline]
    pub fn as_vec3(&self) -> Option<Vec3> {
        match *self {
            UniformValue::Vec3(v) => Some(v),
            _ => None,
        }
    }

    #[inline]
    pub fn as_sampler(&self) -> Option<u32> {
        match *self {
            UniformValue::Sampler(u) => Some(u),
            _ => None,
        }
    }
}
