//! Logger installation for hearth binaries.
//!
//! The engine only emits through `log`. A binary picks the filter (its own variable,
//! `RUST_LOG`, or the quiet-wgpu default) and installs `env_logger` through
//! [`init_logging`].

mod init;

pub use init::{init_logging, LoggingConfig};
