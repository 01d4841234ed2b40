//! 2D canvas rendering
//!
//! A frame is a list of draw commands built from a [`Snapshot`](crate::sim::Snapshot)
//! and replayed on a [`Surface`]. The browser surface wraps a canvas context.

#[cfg(target_arch = "wasm32")]
pub mod canvas2d;
pub mod commands;
pub mod scene;

#[cfg(target_arch = "wasm32")]
pub use canvas2d::CanvasSurface;
pub use commands::{DrawCommand, Surface, render};
pub use scene::build_scene;
