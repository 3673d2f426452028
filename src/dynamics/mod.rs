//! Smoothing of values that chase a moving goal.

mod easing;

pub use easing::{time_scaled_factor, ExponentialEasing, Interpolatable};
