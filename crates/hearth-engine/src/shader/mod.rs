//! Named-uniform interface to the scene shader.
//!
//! The shader program itself (compilation, binding, the actual upload) is owned by the
//! host. The engine only talks to it through [`UniformSink`], using the names in
//! [`names`].

pub mod names;
mod sink;
mod table;

pub use sink::{UniformSink, UniformValue};
pub use table::UniformTable;
