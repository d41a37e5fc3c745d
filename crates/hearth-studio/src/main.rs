//! Headless driver for the winter scene.
//!
//! Prepares the scene, renders a number of frames into a recorder and reports what
//! was submitted. Textures go to the GPU when an adapter is available, otherwise to
//! the CPU backend.
//!
//! Environment:
//! - `HEARTH_ASSET_ROOT`: directory holding `textures/` (default `assets`)
//! - `HEARTH_FRAMES`: frames to render (default 1)
//! - `HEARTH_LOG`: log filter, takes precedence over `RUST_LOG`
//!
//! Flags:
//! - `--trace`: print every uniform write and draw of the last frame
//! - `--cpu`: skip GPU initialization

use std::path::PathBuf;

use anyhow::{Context, Result};
use hearth_engine::device::{Gpu, GpuInit};
use hearth_engine::logging::{LoggingConfig, init_logging};
use hearth_engine::render::{FrameRecorder, FrameStats, RecordedOp};
use hearth_engine::scene::{SceneConfig, SceneManager};
use hearth_engine::texture::{CpuTextureBackend, TextureBackend, WgpuTextureBackend};

struct Options {
    scene: SceneConfig,
    frames: u32,
    trace: bool,
    cpu_only: bool,
}

impl Options {
    fn from_env() -> Result<Self> {
        let mut scene = SceneConfig::default();
        if let Ok(root) = std::env::var("HEARTH_ASSET_ROOT") {
            scene.asset_root = PathBuf::from(root);
        }

        let frames = match std::env::var("HEARTH_FRAMES") {
            Ok(v) => v
                .parse()
                .with_context(|| format!("HEARTH_FRAMES must be a frame count, got '{v}'"))?,
            Err(_) => 1,
        };

        let mut trace = false;
        let mut cpu_only = false;
        for arg in std::env::args().skip(1) {
            match arg.as_str() {
                "--trace" => trace = true,
                "--cpu" => cpu_only = true,
                other => anyhow::bail!("unknown argument '{other}' (expected --trace or --cpu)"),
            }
        }

        Ok(Self {
            scene,
            frames,
            trace,
            cpu_only,
        })
    }
}

fn main() -> Result<()> {
    let logging = match std::env::var("HEARTH_LOG") {
        Ok(filter) => LoggingConfig::with_filter(filter),
        Err(_) => LoggingConfig::default(),
    };
    init_logging(logging);
    let options = Options::from_env()?;

    log::info!(
        "hearth-studio: {} frame(s), assets from {}",
        options.frames,
        options.scene.asset_root.display()
    );

    if !options.cpu_only {
        match Gpu::new_blocking(GpuInit::default()) {
            Ok(gpu) => {
                let backend = WgpuTextureBackend::new(gpu.device(), gpu.queue());
                return run(backend, &options);
            }
            Err(e) => log::warn!("no GPU available ({e:#}); using CPU textures"),
        }
    }

    run(CpuTextureBackend::new(), &options)
}

fn run<B: TextureBackend>(backend: B, options: &Options) -> Result<()> {
    let mut scene = SceneManager::new(backend, options.scene.clone());
    let mut recorder = FrameRecorder::new();

    scene
        .prepare_scene(&mut recorder)
        .context("scene preparation failed")?;

    let mut last = FrameStats::default();
    for frame in 0..options.frames {
        recorder.clear();
        last = scene.render_scene(&mut recorder);
        log::debug!("frame {frame}: {last:?}");
    }

    log::info!(
        "{} draws per frame: {} textured, {} flat ({} texture fallbacks, {} color fallbacks, {} material misses)",
        last.draws,
        last.textured,
        last.flat,
        last.texture_fallbacks,
        last.color_fallbacks,
        last.material_misses
    );

    if options.trace {
        print_trace(&recorder);
    }
    Ok(())
}

fn print_trace(recorder: &FrameRecorder) {
    for op in recorder.ops() {
        match op {
            RecordedOp::Uniform { name, value } => println!("  {name} = {value:?}"),
            RecordedOp::LoadMesh(p) => println!("load {}", p.name()),
            RecordedOp::Draw(p) => println!("draw {}", p.name()),
        }
    }
}
