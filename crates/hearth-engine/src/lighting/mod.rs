//! Static point-light rig.
//!
//! The shader exposes a fixed `lightSources[MAX_LIGHT_SOURCES]` array. Every slot is
//! written on setup; slots the scene does not use are left inert (black, zero specular)
//! so they cannot add stray illumination. The rig is uploaded during scene preparation.

use glam::Vec3;
use thiserror::Error;

use crate::shader::names::{self, light};
use crate::shader::UniformSink;

/// Size of the shader's `lightSources` array.
pub const MAX_LIGHT_SOURCES: usize = 4;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LightingError {
    #[error("light slot {index} is out of range (capacity {capacity})")]
    SlotOutOfRange { index: usize, capacity: usize },
}

/// One entry of the shader's light array.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct LightSlot {
    pub position: Vec3,
    pub ambient_color: Vec3,
    pub diffuse_color: Vec3,
    pub specular_color: Vec3,
    /// Specular falloff exponent. Higher is a tighter highlight.
    pub focal_strength: f32,
    pub specular_intensity: f32,
}

impl LightSlot {
    /// A slot that contributes nothing.
    pub const INERT: LightSlot = LightSlot {
        position: Vec3::ZERO,
        ambient_color: Vec3::ZERO,
        diffuse_color: Vec3::ZERO,
        specular_color: Vec3::ZERO,
        focal_strength: 1.0,
        specular_intensity: 0.0,
    };

    /// Cool moonlight key light: strong diffuse, tight bright highlight, almost no ambient.
    pub fn moonlight_key() -> Self {
        Self {
            position: Vec3::new(6.0, 7.0, 3.0),
            ambient_color: Vec3::new(0.02, 0.03, 0.05),
            diffuse_color: Vec3::new(0.65, 0.75, 1.00),
            specular_color: Vec3::new(0.85, 0.90, 1.00),
            focal_strength: 32.0,
            specular_intensity: 0.60,
        }
    }

    /// Lavender fill from the left-back: no ambient, broad soft highlight.
    pub fn lavender_fill() -> Self {
        Self {
            position: Vec3::new(-6.0, 4.0, -4.0),
            ambient_color: Vec3::ZERO,
            diffuse_color: Vec3::new(0.55, 0.45, 0.70),
            specular_color: Vec3::new(0.20, 0.16, 0.28),
            focal_strength: 16.0,
            specular_intensity: 0.20,
        }
    }

    /// True when every color is black and the specular intensity is zero.
    pub fn is_inert(&self) -> bool {
        self.ambient_color == Vec3::ZERO
            && self.diffuse_color == Vec3::ZERO
            && self.specular_color == Vec3::ZERO
            && self.specular_intensity == 0.0
    }

    fn upload<S: UniformSink + ?Sized>(&self, index: usize, sink: &mut S) {
        sink.set_vec3(&names::light_field(index, light::POSITION), self.position);
        sink.set_vec3(&names::light_field(index, light::AMBIENT_COLOR), self.ambient_color);
        sink.set_vec3(&names::light_field(index, light::DIFFUSE_COLOR), self.diffuse_color);
        sink.set_vec3(&names::light_field(index, light::SPECULAR_COLOR), self.specular_color);
        sink.set_float(&names::light_field(index, light::FOCAL_STRENGTH), self.focal_strength);
        sink.set_float(
            &names::light_field(index, light::SPECULAR_INTENSITY),
            self.specular_intensity,
        );
    }
}

impl Default for LightSlot {
    fn default() -> Self {
        Self::INERT
    }
}

/// The full light array plus the global lighting switch.
#[derive(Debug, Clone, PartialEq)]
pub struct LightRig {
    slots: [LightSlot; MAX_LIGHT_SOURCES],
    enabled: bool,
}

impl LightRig {
    /// All slots inert, lighting enabled.
    pub fn inert() -> Self {
        Self {
            slots: [LightSlot::INERT; MAX_LIGHT_SOURCES],
            enabled: true,
        }
    }

    /// The winter night rig: moonlight key in slot 0, lavender fill in slot 1.
    pub fn winter_night() -> Self {
        let mut rig = Self::inert();
        rig.slots[0] = LightSlot::moonlight_key();
        rig.slots[1] = LightSlot::lavender_fill();
        rig
    }

    pub fn configure(&mut self, index: usize, slot: LightSlot) -> Result<(), LightingError> {
        let target = self.slots.get_mut(index).ok_or(LightingError::SlotOutOfRange {
            index,
            capacity: MAX_LIGHT_SOURCES,
        })?;
        *target = slot;
        Ok(())
    }

    /// Returns every slot to the inert default.
    pub fn reset(&mut self) {
        for slot in &mut self.slots {
            *slot = LightSlot::INERT;
        }
    }

    #[inline]
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    #[inline]
    pub fn enabled(&self) -> bool {
        self.enabled
    }

    #[inline]
    pub fn slots(&self) -> &[LightSlot; MAX_LIGHT_SOURCES] {
        &self.slots
    }

    pub fn active_count(&self) -> usize {
        self.slots.iter().filter(|s| !s.is_inert()).count()
    }

    /// Writes `bUseLighting` and every slot of the array.
    pub fn upload<S: UniformSink + ?Sized>(&self, sink: &mut S) {
        sink.set_bool(names::USE_LIGHTING, self.enabled);
        for (i, slot) in self.slots.iter().enumerate() {
            slot.upload(i, sink);
        }
        log::debug!(
            "uploaded {} light slots ({} active, lighting {})",
            MAX_LIGHT_SOURCES,
            self.active_count(),
            if self.enabled { "on" } else { "off" }
        );
    }
}

impl Default for LightRig {
    fn default() -> Self {
        Self::inert()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shader::{UniformTable, UniformValue};

    fn vec3_at(t: &UniformTable, i: usize, field: &str) -> Vec3 {
        t.get(&names::light_field(i, field))
            .and_then(UniformValue::as_vec3)
            .unwrap()
    }

    fn float_at(t: &UniformTable, i: usize, field: &str) -> f32 {
        t.get(&names::light_field(i, field))
            .and_then(UniformValue::as_float)
            .unwrap()
    }

    #[test]
    fn winter_night_has_two_active_slots() {
        let rig = LightRig::winter_night();
        assert_eq!(rig.active_count(), 2);
        assert!(!rig.slots()[0].is_inert());
        assert!(!rig.slots()[1].is_inert());
        for slot in &rig.slots()[2..] {
            assert_eq!(*slot, LightSlot::INERT);
        }
    }

    #[test]
    fn upload_writes_every_slot_and_zeroes_unused() {
        let mut t = UniformTable::new();
        LightRig::winter_night().upload(&mut t);

        assert_eq!(t.get(names::USE_LIGHTING).and_then(UniformValue::as_bool), Some(true));
        // 1 flag + 6 fields per slot.
        assert_eq!(t.len(), 1 + 6 * MAX_LIGHT_SOURCES);

        let non_zero = (0..MAX_LIGHT_SOURCES)
            .filter(|&i| vec3_at(&t, i, light::DIFFUSE_COLOR) != Vec3::ZERO)
            .count();
        assert_eq!(non_zero, 2);

        for i in 2..MAX_LIGHT_SOURCES {
            assert_eq!(vec3_at(&t, i, light::AMBIENT_COLOR), Vec3::ZERO);
            assert_eq!(vec3_at(&t, i, light::DIFFUSE_COLOR), Vec3::ZERO);
            assert_eq!(vec3_at(&t, i, light::SPECULAR_COLOR), Vec3::ZERO);
            assert_eq!(float_at(&t, i, light::SPECULAR_INTENSITY), 0.0);
            assert_eq!(float_at(&t, i, light::FOCAL_STRENGTH), 1.0);
        }
    }

    #[test]
    fn key_light_is_tighter_than_fill() {
        let rig = LightRig::winter_night();
        let [key, fill, ..] = *rig.slots();
        assert!(key.focal_strength > fill.focal_strength);
        assert!(key.specular_intensity > fill.specular_intensity);
        assert_eq!(fill.ambient_color, Vec3::ZERO);
    }

    #[test]
    fn configure_rejects_out_of_range_index() {
        let mut rig = LightRig::inert();
        let err = rig.configure(MAX_LIGHT_SOURCES, LightSlot::moonlight_key()).unwrap_err();
        assert_eq!(
            err,
            LightingError::SlotOutOfRange { index: MAX_LIGHT_SOURCES, capacity: MAX_LIGHT_SOURCES }
        );
        assert_eq!(rig.active_count(), 0);
    }

    #[test]
    fn reset_clears_configured_slots() {
        let mut rig = LightRig::winter_night();
        rig.reset();
        assert_eq!(rig.active_count(), 0);
    }

    #[test]
    fn disabled_rig_uploads_false_flag() {
        let mut rig = LightRig::winter_night();
        rig.set_enabled(false);
        let mut t = UniformTable::new();
        rig.upload(&mut t);
        assert_eq!(t.get(names::USE_LIGHTING).and_then(UniformValue::as_bool), Some(false));
    }
}
