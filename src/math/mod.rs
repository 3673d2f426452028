//! Math utilities module
//!
//! Provides convenient re-exports from glam plus the 2D viewport and transform types
//! shared by the animator and both renderers.

mod transform;
mod viewport;

pub use transform::{direction_angle, Transform2};
pub use viewport::Viewport;

// Re-export commonly used glam types
pub use glam::Vec2;
