//! Rendering module
//!
//! The painter turns animator state into a backend-independent [`DrawList`]. Native
//! builds draw it with wgpu via a triangle tessellation; wasm builds replay it on a
//! 2D canvas context.

pub mod painter;
pub mod scene;
pub mod tessellate;

#[cfg(target_arch = "wasm32")]
pub mod canvas;
#[cfg(not(target_arch = "wasm32"))]
pub mod context;
#[cfg(not(target_arch = "wasm32"))]
pub mod gpu;
#[cfg(not(target_arch = "wasm32"))]
pub mod pipeline;

pub use painter::ReptilePainter;
pub use scene::{Color, DrawList, Glow, Shape};
pub use tessellate::{ShapeVertex, Tessellator};

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasRenderer;
#[cfg(not(target_arch = "wasm32"))]
pub use context::GpuContext;
#[cfg(not(target_arch = "wasm32"))]
pub use gpu::GpuRenderer;
#[cfg(not(target_arch = "wasm32"))]
pub use pipeline::ShapePipeline;
