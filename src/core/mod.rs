// ChromaLog - core/mod.rs
//
// Core business logic layer.
// Dependencies: standard library, chrono.
// Must NOT depend on: ui, platform, app, or any I/O crate directly.

pub mod buffer;
pub mod export;
pub mod format;
pub mod model;
pub mod sink;
