use glam::{Mat4, Vec2, Vec3, Vec4};

use crate::shader::{UniformSink, UniformValue};

use super::primitive::{Primitive, PrimitiveRenderer};

/// One operation captured by [`FrameRecorder`].
#[derive(Debug, Clone, PartialEq)]
pub enum RecordedOp {
    Uniform { name: String, value: UniformValue },
    LoadMesh(Primitive),
    Draw(Primitive),
}

/// A draw plus the uniform writes issued since the previous draw.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawCall<'a> {
    pub primitive: Primitive,
    pub uniforms: Vec<(&'a str, UniformValue)>,
}

impl DrawCall<'_> {
    /// Last value written under `name` before this draw, if any.
    pub fn uniform(&self, name: &str) -> Option<UniformValue> {
        self.uniforms
            .iter()
            .rev()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| *v)
    }
}

/// Frame target that records every uniform write and draw in order.
///
/// Stands in for the shader program and mesh renderer in headless runs and tests.
#[derive(Debug, Default, Clone)]
pub struct FrameRecorder {
    ops: Vec<RecordedOp>,
}

impl FrameRecorder {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn ops(&self) -> &[RecordedOp] {
        &self.ops
    }

    /// Clears recorded ops. Keeps allocated capacity for reuse.
    #[inline]
    pub fn clear(&mut self) {
        self.ops.clear();
    }

    pub fn draw_count(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, RecordedOp::Draw(_)))
            .count()
    }

    /// Splits the recording into draws, each carrying the uniforms written before it.
    ///
    /// Uniform writes after the last draw are not part of any call.
    pub fn draw_calls(&self) -> Vec<DrawCall<'_>> {
        let mut calls = Vec::new();
        let mut pending = Vec::new();
        for op in &self.ops {
            match op {
                RecordedOp::Uniform { name, value } => pending.push((name.as_str(), *value)),
                RecordedOp::Draw(primitive) => calls.push(DrawCall {
                    primitive: *primitive,
                    uniforms: std::mem::take(&mut pending),
                }),
                RecordedOp::LoadMesh(_) => {}
            }
        }
        calls
    }

    #[inline]
    fn uniform(&mut self, name: &str, value: UniformValue) {
        self.ops.push(RecordedOp::Uniform { name: name.to_owned(), value });
    }
}

impl UniformSink for FrameRecorder {
    fn set_float(&mut self, name: &str, value: f32) {
        self.uniform(name, UniformValue::Float(value));
    }

    fn set_int(&mut self, name: &str, value: i32) {
        self.uniform(name, UniformValue::Int(value));
    }

    fn set_bool(&mut self, name: &str, value: bool) {
        self.uniform(name, UniformValue::Bool(value));
    }

    fn set_vec2(&mut self, name: &str, value: Vec2) {
        self.uniform(name, UniformValue::Vec2(value));
    }

    fn set_vec3(&mut self, name: &str, value: Vec3) {
        self.uniform(name, UniformValue::Vec3(value));
    }

    fn set_vec4(&mut self, name: &str, value: Vec4) {
        self.uniform(name, UniformValue::Vec4(value));
    }

    fn set_mat4(&mut self, name: &str, value: Mat4) {
        self.uniform(name, UniformValue::Mat4(value));
    }

    fn set_sampler(&mut self, name: &str, unit: u32) {
        self.uniform(name, UniformValue::Sampler(unit));
    }
}

impl PrimitiveRenderer for FrameRecorder {
    fn load_mesh(&mut self, primitive: Primitive) {
        self.ops.push(RecordedOp::LoadMesh(primitive));
    }

    fn draw(&mut self, primitive: Primitive) {
        self.ops.push(RecordedOp::Draw(primitive));
    }
}
