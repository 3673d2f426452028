//! # reptile-follow
//!
//! A pointer-following reptile: a chain of points dragged behind an eased head, drawn
//! as a body, spine, legs, head and eye, with a glowing arrow on the pointer.
//!
//! ## Features
//! - Direction-projection chain follow (every link kept at a fixed length, no angle limits)
//! - Exponential head easing, per frame or scaled by frame time
//! - Backend-independent draw lists, rendered with wgpu natively or a 2D canvas on the web
//! - Frame scheduler with an injectable clock
//!
//! ## Example
//! ```rust
//! use reptile_follow::{AnimatorConfig, ChainAnimator, Viewport};
//! use glam::Vec2;
//!
//! let viewport = Viewport::new(800, 600);
//! let mut animator = ChainAnimator::new(AnimatorConfig::default(), viewport).unwrap();
//! animator.activate();
//! animator.pointer_moved(Vec2::new(700.0, 100.0));
//! for _ in 0..120 {
//!     animator.update(1.0 / 60.0);
//! }
//! let frame = animator.draw_list();
//! assert!(!frame.is_empty());
//! ```

pub mod animator;
pub mod config;
pub mod dynamics;
pub mod error;
pub mod follow;
pub mod math;
pub mod render;
pub mod scheduler;

#[cfg(not(target_arch = "wasm32"))]
pub mod native;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use animator::ChainAnimator;
pub use config::{AnimatorConfig, DegenerateDirection, EasingMode, Palette};
pub use dynamics::{ExponentialEasing, Interpolatable};
pub use error::{Error, Result};
pub use follow::{FollowResult, FollowSolver, SegmentChain, SegmentChainBuilder};
pub use math::{Transform2, Viewport};
pub use render::{Color, DrawList, Glow, ReptilePainter, Shape};
pub use scheduler::{Clock, FrameHandler, FrameScheduler, ManualClock};
