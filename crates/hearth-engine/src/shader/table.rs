use std::collections::HashMap;

use glam::{Mat4, Vec2, Vec3, Vec4};

use super::{UniformSink, UniformValue};

/// Uniform sink that keeps the latest value written under each name.
///
/// Mirrors what a real program would hold after a sequence of uploads, which makes it
/// the natural sink for assertions about "current" shader state.
#[derive(Debug, Default, Clone)]
pub struct UniformTable {
    values: HashMap<String, UniformValue>,
    writes: usize,
}

impl UniformTable {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn get(&self, name: &str) -> Option<&UniformValue> {
        self.values.get(name)
    }

    /// Number of distinct uniform names written so far.
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Total number of writes, including overwrites.
    #[inline]
    pub fn write_count(&self) -> usize {
        self.writes
    }

    pub fn clear(&mut self) {
        self.values.clear();
        self.writes = 0;
    }

    #[inline]
    fn put(&mut self, name: &str, value: UniformValue) {
        self.writes += 1;
        self.values.insert(name.to_owned(), value);
    }
}

impl UniformSink for UniformTable {
    fn set_float(&mut self, name: &str, value: f32) {
        self.put(name, UniformValue::Float(value));
    }

    fn set_int(&mut self, name: &str, value: i32) {
        self.put(name, UniformValue::Int(value));
    }

    fn set_bool(&mut self, name: &str, value: bool) {
        self.put(name, UniformValue::Bool(value));
    }

    fn set_vec2(&mut self, name: &str, value: Vec2) {
        self.put(name, UniformValue::Vec2(value));
    }

    fn set_vec3(&mut self, name: &str, value: Vec3) {
        self.put(name, UniformValue::Vec3(value));
    }

    fn set_vec4(&mut self, name: &str, value: Vec4) {
        self.put(name, UniformValue::Vec4(value));
    }

    fn set_mat4(&mut self, name: &str, value: Mat4) {
        self.put(name, UniformValue::Mat4(value));
    }

    fn set_sampler(&mut self, name: &str, unit: u32) {
        self.put(name, UniformValue::Sampler(unit));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_latest_value_per_name() {
        let mut t = UniformTable::new();
        t.set_float("a", 1.0);
        t.set_float("a", 2.0);
        t.set_bool("b", true);

        assert_eq!(t.len(), 2);
        assert_eq!(t.write_count(), 3);
        assert_eq!(t.get("a").and_then(UniformValue::as_float), Some(2.0));
        assert_eq!(t.get("b").and_then(UniformValue::as_bool), Some(true));
    }

    #[test]
    fn int_flag_reads_as_bool() {
        let mut t = UniformTable::new();
        t.set_int("flag", 1);
        assert_eq!(t.get("flag").and_then(UniformValue::as_bool), Some(true));
    }
}
