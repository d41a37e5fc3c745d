use crate::lighting::{LightRig, LightSlot};
use crate::material::{winter_palette, MaterialRegistry};
use crate::render::{DrawState, FrameStats, FrameSubmitter, FrameTarget, Primitive};
use crate::texture::{FileImageLoader, ImageLoader, TextureBackend, TextureRegistry};

use super::config::SceneConfig;
use super::error::SceneError;
use super::layout::{compose_scene, SceneLayout};
use super::DrawList;

/// Owns the scene's registries and drives preparation and per-frame submission.
///
/// Registries are filled by [`prepare_scene`](Self::prepare_scene) and only read by
/// [`render_scene`](Self::render_scene).
pub struct SceneManager<B: TextureBackend> {
    config: SceneConfig,
    layout: SceneLayout,
    textures: TextureRegistry<B>,
    materials: MaterialRegistry,
    lights: LightRig,
    loader: Box<dyn ImageLoader>,
    draw_list: DrawList,
    state: DrawState,
    materials_ready: bool,
    lights_uploaded: bool,
    meshes_loaded: bool,
    /// Index into `config.textures` of the next asset to load.
    next_texture: usize,
    textures_bound: bool,
}

impl<B: TextureBackend> SceneManager<B> {
    /// Loads images from disk, relative to `config.asset_root`.
    pub fn new(backend: B, config: SceneConfig) -> Self {
        let loader = FileImageLoader {
            flip_vertically: config.flip_textures_vertically,
        };
        Self::with_loader(backend, config, Box::new(loader))
    }

    pub fn with_loader(backend: B, config: SceneConfig, loader: Box<dyn ImageLoader>) -> Self {
        let textures = TextureRegistry::with_capacity(backend, config.texture_units);
        let mut lights = LightRig::winter_night();
        lights.set_enabled(config.lighting_enabled);

        Self {
            config,
            layout: SceneLayout::default(),
            textures,
            materials: MaterialRegistry::new(),
            lights,
            loader,
            draw_list: DrawList::new(),
            state: DrawState::baseline(),
            materials_ready: false,
            lights_uploaded: false,
            meshes_loaded: false,
            next_texture: 0,
            textures_bound: false,
        }
    }

    pub fn with_layout(mut self, layout: SceneLayout) -> Self {
        self.layout = layout;
        self
    }

    /// Replaces one light slot. The rig is uploaded again on the next `prepare_scene`.
    pub fn configure_light(&mut self, index: usize, slot: LightSlot) -> Result<(), SceneError> {
        self.lights.configure(index, slot)?;
        self.lights_uploaded = false;
        Ok(())
    }

    /// Defines materials, uploads lights, loads meshes and textures, then binds every
    /// texture to its unit.
    ///
    /// Each step runs once. A texture that fails to decode, has an unsupported format
    /// or reuses a tag is skipped with a warning; surfaces using it fall back at draw
    /// time. Capacity and backend failures abort, and a later call resumes at the
    /// texture that failed. The light rig is uploaded again after `configure_light`.
    pub fn prepare_scene<T: FrameTarget + ?Sized>(&mut self, target: &mut T) -> Result<(), SceneError> {
        if !self.materials_ready {
            for material in winter_palette() {
                self.materials.define(material);
            }
            self.materials_ready = true;
        }

        if !self.lights_uploaded {
            self.lights.upload(target);
            self.lights_uploaded = true;
        }

        if !self.meshes_loaded {
            for primitive in Primitive::ALL {
                target.load_mesh(primitive);
            }
            self.meshes_loaded = true;
        }

        if !self.textures_bound {
            self.load_textures()?;
            self.textures.bind_all();
            self.textures_bound = true;

            log::info!(
                "scene prepared: {} textures, {} materials, {} meshes",
                self.textures.len(),
                self.materials.len(),
                Primitive::ALL.len()
            );
        }

        Ok(())
    }

    fn load_textures(&mut self) -> Result<(), SceneError> {
        while let Some(asset) = self.config.textures.get(self.next_texture) {
            let path = self.config.resolve(&asset.path);
            match self.textures.load(self.loader.as_ref(), &path, &asset.tag) {
                Ok(_) => {}
                Err(e) if e.is_fatal() => {
                    log::error!("texture '{}' failed: {e}", asset.tag);
                    return Err(SceneError::Texture {
                        tag: asset.tag.clone(),
                        source: e,
                    });
                }
                Err(e) => log::warn!("skipping texture '{}': {e}", asset.tag),
            }
            self.next_texture += 1;
        }
        Ok(())
    }

    /// Records the scene and submits it to `target`.
    ///
    /// Never fails: missing textures and materials degrade to fallbacks.
    pub fn render_scene<T: FrameTarget + ?Sized>(&mut self, target: &mut T) -> FrameStats {
        if !(self.materials_ready && self.textures_bound) {
            log::warn!("rendering before prepare_scene; textures and materials are not loaded");
        }

        compose_scene(&self.layout, &mut self.draw_list);
        let submitter = FrameSubmitter::new(&self.textures, &self.materials);
        let stats = submitter.submit(&self.draw_list, &mut self.state, target);

        log::trace!("frame submitted: {stats:?}");
        stats
    }

    #[inline]
    pub fn is_prepared(&self) -> bool {
        self.materials_ready && self.lights_uploaded && self.meshes_loaded && self.textures_bound
    }

    #[inline]
    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    #[inline]
    pub fn layout(&self) -> &SceneLayout {
        &self.layout
    }

    #[inline]
    pub fn textures(&self) -> &TextureRegistry<B> {
        &self.textures
    }

    #[inline]
    pub fn materials(&self) -> &MaterialRegistry {
        &self.materials
    }

    #[inline]
    pub fn lights(&self) -> &LightRig {
        &self.lights
    }

    /// The list recorded by the last `render_scene`.
    #[inline]
    pub fn draw_list(&self) -> &DrawList {
        &self.draw_list
    }

    /// Shader state as left by the last `render_scene`.
    #[inline]
    pub fn state(&self) -> &DrawState {
        &self.state
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::path::{Path, PathBuf};

    use glam::Vec4;

    use super::*;
    use crate::paint::palette;
    use crate::render::{FrameRecorder, RecordedOp, RenderCtx};
    use crate::scene::TextureAsset;
    use crate::shader::{names, UniformTable, UniformValue};
    use crate::texture::{CpuTextureBackend, DecodedImage, TextureError};

    /// In-memory loader keyed by resolved path.
    #[derive(Default)]
    struct MemLoader {
        images: HashMap<PathBuf, DecodedImage>,
    }

    impl MemLoader {
        fn with(mut self, path: &str) -> Self {
            self.images
                .insert(PathBuf::from(path), DecodedImage::solid(4, 4, [180, 90, 70, 255], 3));
            self
        }
    }

    impl ImageLoader for MemLoader {
        fn load(&self, path: &Path) -> Result<DecodedImage, TextureError> {
            self.images.get(path).cloned().ok_or_else(|| TextureError::Decode {
                path: path.to_path_buf(),
                reason: "no such file".into(),
            })
        }
    }

    fn manager(loader: MemLoader) -> SceneManager<CpuTextureBackend> {
        SceneManager::with_loader(CpuTextureBackend::new(), SceneConfig::default(), Box::new(loader))
    }

    fn both_textures() -> MemLoader {
        MemLoader::default()
            .with("assets/textures/Brick.jpg")
            .with("assets/textures/Roof.jpg")
    }

    fn prepared(loader: MemLoader) -> (SceneManager<CpuTextureBackend>, FrameRecorder) {
        let mut scene = manager(loader);
        let mut rec = FrameRecorder::new();
        scene.prepare_scene(&mut rec).expect("prepare");
        rec.clear();
        (scene, rec)
    }

    // ── preparation ─────────────────────────────────────────────────────

    #[test]
    fn prepare_loads_everything() {
        let mut scene = manager(both_textures());
        let mut rec = FrameRecorder::new();
        scene.prepare_scene(&mut rec).expect("prepare");

        assert!(scene.is_prepared());
        assert_eq!(scene.textures().len(), 2);
        assert!(scene.materials().find("snow").is_some());
        assert!(scene.materials().find("house").is_some());

        let meshes = rec
            .ops()
            .iter()
            .filter(|op| matches!(op, RecordedOp::LoadMesh(_)))
            .count();
        assert_eq!(meshes, Primitive::ALL.len());

        let backend = scene.textures().backend();
        for entry in scene.textures().entries() {
            assert_eq!(backend.bound(entry.slot), Some(entry.handle));
        }
    }

    #[test]
    fn prepare_twice_does_nothing_the_second_time() {
        let mut scene = manager(both_textures());
        let mut rec = FrameRecorder::new();
        scene.prepare_scene(&mut rec).expect("first");
        let ops = rec.ops().len();

        scene.prepare_scene(&mut rec).expect("second");
        assert_eq!(rec.ops().len(), ops);
        assert_eq!(scene.textures().len(), 2);
    }

    #[test]
    fn changed_light_is_uploaded_on_next_prepare() {
        let (mut scene, mut rec) = prepared(both_textures());

        scene
            .configure_light(2, LightSlot::lavender_fill())
            .expect("slot 2 exists");
        assert!(!scene.is_prepared());
        scene.prepare_scene(&mut rec).expect("prepare");

        assert_eq!(rec.draw_count(), 0);
        assert!(rec.ops().iter().any(|op| matches!(
            op,
            RecordedOp::Uniform { name, .. } if name == "lightSources[2].position"
        )));
        assert!(!rec.ops().iter().any(|op| matches!(op, RecordedOp::LoadMesh(_))));
    }

    #[test]
    fn out_of_range_light_is_rejected() {
        let mut scene = manager(both_textures());
        let err = scene.configure_light(4, LightSlot::INERT).unwrap_err();
        assert!(matches!(err, SceneError::Lighting(_)));
    }

    #[test]
    fn missing_texture_file_is_skipped() {
        let (scene, _) = prepared(MemLoader::default().with("assets/textures/Brick.jpg"));
        assert_eq!(scene.textures().len(), 1);
        assert!(scene.textures().find_slot("roof").is_none());
    }

    #[test]
    fn capacity_overflow_is_fatal() {
        let config = SceneConfig {
            texture_units: 1,
            ..SceneConfig::default()
        };
        let mut scene = SceneManager::with_loader(CpuTextureBackend::new(), config, Box::new(both_textures()));

        let err = scene.prepare_scene(&mut FrameRecorder::new()).unwrap_err();
        match err {
            SceneError::Texture { tag, source } => {
                assert_eq!(tag, "roof");
                assert_eq!(source, TextureError::CapacityExceeded { capacity: 1 });
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn prepare_after_fatal_error_resumes_at_failed_texture() {
        let config = SceneConfig {
            texture_units: 1,
            ..SceneConfig::default()
        };
        let mut scene = SceneManager::with_loader(CpuTextureBackend::new(), config, Box::new(both_textures()));
        let mut rec = FrameRecorder::new();

        assert!(scene.prepare_scene(&mut rec).is_err());
        assert!(!scene.is_prepared());
        assert!(rec.ops().iter().any(|op| matches!(
            op,
            RecordedOp::Uniform { name, .. } if name == names::USE_LIGHTING
        )));

        rec.clear();
        let err = scene.prepare_scene(&mut rec).unwrap_err();
        assert!(matches!(err, SceneError::Texture { ref tag, .. } if tag == "roof"));

        // Nothing before the failed texture runs again.
        assert!(rec.ops().is_empty());
        assert_eq!(scene.materials().len(), 2);
        assert_eq!(scene.textures().len(), 1);
        assert_eq!(scene.textures().backend().texture_count(), 1);
    }

    #[test]
    fn duplicate_asset_tag_is_skipped() {
        let mut config = SceneConfig::default();
        config.textures.push(TextureAsset::new("brick", "textures/Roof.jpg"));
        let mut scene = SceneManager::with_loader(CpuTextureBackend::new(), config, Box::new(both_textures()));

        scene.prepare_scene(&mut FrameRecorder::new()).expect("prepare");
        assert_eq!(scene.textures().len(), 2);
    }

    // ── rendering ───────────────────────────────────────────────────────

    #[test]
    fn consecutive_frames_are_identical() {
        let (mut scene, mut rec) = prepared(both_textures());

        scene.render_scene(&mut rec);
        let first = rec.ops().to_vec();
        rec.clear();
        scene.render_scene(&mut rec);

        assert_eq!(rec.ops(), first.as_slice());
    }

    #[test]
    fn every_draw_sets_texture_flag() {
        let (mut scene, mut rec) = prepared(both_textures());
        let stats = scene.render_scene(&mut rec);

        let calls = rec.draw_calls();
        assert_eq!(calls.len(), stats.draws);
        assert_eq!(stats.draws, scene.draw_list().len());
        for call in &calls {
            assert!(call.uniform(names::USE_TEXTURE).is_some());
            assert!(call.uniform(names::MODEL).is_some());
        }
        // body, bump-out and both roof slopes
        assert_eq!(stats.textured, 4);
        assert_eq!(stats.texture_fallbacks, 0);
    }

    #[test]
    fn roof_falls_back_to_brick() {
        let (mut scene, mut rec) = prepared(MemLoader::default().with("assets/textures/Brick.jpg"));
        let stats = scene.render_scene(&mut rec);
        assert_eq!(stats.textured, 4);
        assert_eq!(stats.texture_fallbacks, 2);

        let brick = scene.textures().find_slot("brick").map(|s| s.unit());
        let roof_index = scene
            .draw_list()
            .items()
            .iter()
            .position(|i| i.label == "roof_left")
            .expect("roof in scene");
        let call = &rec.draw_calls()[roof_index];
        assert_eq!(call.uniform(names::OBJECT_TEXTURE).and_then(|v| v.as_sampler()), brick);
    }

    #[test]
    fn no_textures_draws_everything_flat() {
        let (mut scene, mut rec) = prepared(MemLoader::default());
        let stats = scene.render_scene(&mut rec);

        assert_eq!(stats.textured, 0);
        assert_eq!(stats.color_fallbacks, 4);
        assert_eq!(stats.draws, scene.draw_list().len());

        let roof_index = scene
            .draw_list()
            .items()
            .iter()
            .position(|i| i.label == "roof_right")
            .expect("roof in scene");
        let call = &rec.draw_calls()[roof_index];
        assert_eq!(call.uniform(names::USE_TEXTURE), Some(UniformValue::Bool(false)));
        assert_eq!(
            call.uniform(names::OBJECT_COLOR),
            Some(UniformValue::Vec4(palette::ROOF.to_vec4()))
        );
    }

    #[test]
    fn fence_is_drawn_with_ten_posts() {
        let (mut scene, mut rec) = prepared(both_textures());
        scene.render_scene(&mut rec);

        let posts = scene.draw_list().labeled("post").count();
        assert_eq!(posts, 10);
        let rail = scene
            .draw_list()
            .labeled("rail_lower")
            .next()
            .expect("lower rail");
        assert!((rail.transform.scale.x - 8.55).abs() < 1e-4);
    }

    #[test]
    fn frame_starts_with_texturing_off_and_white() {
        let (mut scene, mut rec) = prepared(both_textures());
        scene.render_scene(&mut rec);

        let first_color = rec.ops().iter().find_map(|op| match op {
            RecordedOp::Uniform { name, value } if name == names::OBJECT_COLOR => Some(*value),
            _ => None,
        });
        assert_eq!(first_color, Some(UniformValue::Vec4(Vec4::ONE)));
        assert_eq!(scene.materials().len(), 2);
    }

    #[test]
    fn split_sink_and_renderer_see_the_same_frame() {
        let (mut scene, mut combined) = prepared(both_textures());
        let expected = scene.render_scene(&mut combined);

        let mut scene = manager(both_textures());
        let mut table = UniformTable::new();
        let mut meshes = FrameRecorder::new();
        scene
            .prepare_scene(&mut RenderCtx::new(&mut table, &mut meshes))
            .expect("prepare");
        assert_eq!(meshes.ops().len(), Primitive::ALL.len());

        meshes.clear();
        let stats = scene.render_scene(&mut RenderCtx::new(&mut table, &mut meshes));

        assert_eq!(stats, expected);
        assert_eq!(meshes.draw_count(), combined.draw_count());
        assert!(meshes.draw_calls().iter().all(|call| call.uniform(names::MODEL).is_none()));
        assert_eq!(table.get(names::USE_LIGHTING), Some(&UniformValue::Bool(true)));
        assert!(table.get(names::USE_TEXTURE).is_some());
        assert!(table.get(names::MODEL).is_some());
    }

    #[test]
    fn rendering_unprepared_scene_still_draws() {
        let mut scene = manager(both_textures());
        let mut rec = FrameRecorder::new();
        let stats = scene.render_scene(&mut rec);

        assert_eq!(stats.draws, scene.draw_list().len());
        assert_eq!(stats.textured, 0);
        assert!(stats.material_misses > 0);
    }
}
