use glam::{Mat4, Vec2, Vec3, Vec4};

use crate::shader::UniformSink;

use super::primitive::{Primitive, PrimitiveRenderer};

/// Everything a frame is submitted to: uniform uploads plus primitive draws.
///
/// Implemented for any type that is both a [`UniformSink`] and a [`PrimitiveRenderer`].
/// Hosts that keep the two in separate objects can wrap them in a [`RenderCtx`].
pub trait FrameTarget: UniformSink + PrimitiveRenderer {}

impl<T: UniformSink + PrimitiveRenderer + ?Sized> FrameTarget for T {}

/// Pairs a separate uniform sink and primitive renderer into one [`FrameTarget`].
pub struct RenderCtx<'a> {
    pub sink: &'a mut dyn UniformSink,
    pub renderer: &'a mut dyn PrimitiveRenderer,
}

impl<'a> RenderCtx<'a> {
    #[inline]
    pub fn new(sink: &'a mut dyn UniformSink, renderer: &'a mut dyn PrimitiveRenderer) -> Self {
        Self { sink, renderer }
    }
}

impl UniformSink for RenderCtx<'_> {
    fn set_float(&mut self, name: &str, value: f32) {
        self.sink.set_float(name, value);
    }

    fn set_int(&mut self, name: &str, value: i32) {
        self.sink.set_int(name, value);
    }

    fn set_bool(&mut self, name: &str, value: bool) {
        self.sink.set_bool(name, value);
    }

    fn set_vec2(&mut self, name: &str, value: Vec2) {
        self.sink.set_vec2(name, value);
    }

    fn set_vec3(&mut self, name: &str, value: Vec3) {
        self.sink.set_vec3(name, value);
    }

    fn set_vec4(&mut self, name: &str, value: Vec4) {
        self.sink.set_vec4(name, value);
    }

    fn set_mat4(&mut self, name: &str, value: Mat4) {
        self.sink.set_mat4(name, value);
    }

    fn set_sampler(&mut self, name: &str, unit: u32) {
        self.sink.set_sampler(name, unit);
    }
}

impl PrimitiveRenderer for RenderCtx<'_> {
    fn load_mesh(&mut self, primitive: Primitive) {
        self.renderer.load_mesh(primitive);
    }

    fn draw(&mut self, primitive: Primitive) {
        self.renderer.draw(primitive);
    }
}
