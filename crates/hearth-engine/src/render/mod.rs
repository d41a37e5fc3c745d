//! Frame submission.
//!
//! Consumes `scene` draw lists and turns them into uniform writes plus primitive draws
//! on a [`FrameTarget`]. The target is a trait pair so the same submission path drives
//! a real shader program or a [`FrameRecorder`].
//!
//! Convention:
//! - Uniforms persist across draws; [`DrawState`] tracks what was last written.
//! - Every draw writes `model` and `bUseTexture` before `draw()`.

mod ctx;
mod primitive;
mod recorder;
mod state;
mod submit;

pub use ctx::{FrameTarget, RenderCtx};
pub use primitive::{Primitive, PrimitiveRenderer};
pub use recorder::{DrawCall, FrameRecorder, RecordedOp};
pub use state::DrawState;
pub use submit::{FrameStats, FrameSubmitter, TextureLookup};
