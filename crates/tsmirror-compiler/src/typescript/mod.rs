//! TypeScript module emission.

mod config;
mod emitter;
mod module;
mod render;


pub use config::Config;
pub use emitter::Emitter;
pub use module::{Field, Import, Interface, Method, Module};
