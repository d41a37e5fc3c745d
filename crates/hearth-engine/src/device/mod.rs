//! Headless GPU device management.
//!
//! Creates the wgpu Instance/Adapter/Device/Queue that texture uploads go through.

mod gpu;

pub use gpu::{Gpu, GpuInit};
