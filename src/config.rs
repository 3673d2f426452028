//! Animator configuration.
//!
//! Defaults give the classic reptile: 45 segments spaced 16 px apart, a head
//! that closes 5% of the gap to the pointer every frame, and the green palette.
//!
//! ```rust
//! use reptile_follow::config::{AnimatorConfig, EasingMode};
//!
//! let config = AnimatorConfig::new()
//!     .with_segment_count(30)
//!     .with_segment_length(12.0)
//!     .with_easing_mode(EasingMode::TimeScaled { reference_hz: 60.0 });
//! assert!(config.validate().is_ok());
//! ```

use crate::error::{Error, Result};
use crate::render::Color;
use glam::Vec2;

/// How the head easing factor relates to frame time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EasingMode {
    /// The factor applies once per update call regardless of `dt`.
    PerFrame,
    /// The factor is rescaled so motion speed does not depend on the refresh rate.
    TimeScaled { reference_hz: f32 },
}

/// What to do with a segment that sits exactly on top of its predecessor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DegenerateDirection {
    /// Leave the segment where it is while the lead is still. Once the lead moves the
    /// segment trails its predecessor along the previous link.
    Hold,
    /// Project along a fixed direction. `Axis(Vec2::X)` puts the segment to the left
    /// of its predecessor, like `atan2(0, 0) == 0` does.
    Axis(Vec2),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub background: Color,
    pub body: Color,
    pub spine: Color,
    pub legs: Color,
    pub head: Color,
    pub eye: Color,
    pub arrow: Color,
    pub arrow_glow: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: Color::rgb8(0x10, 0x14, 0x10),
            body: Color::rgb8(0x3F, 0xBF, 0x3F),
            spine: Color::rgb8(0x1F, 0x7F, 0x1F),
            legs: Color::rgb8(0x3F, 0xBF, 0x3F),
            head: Color::rgb8(0x4F, 0xDF, 0x4F),
            eye: Color::BLACK,
            arrow: Color::rgb8(0x6F, 0xFF, 0x6F),
            arrow_glow: Color::rgb8(0x4F, 0xDF, 0x4F),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AnimatorConfig {
    /// Number of chain points, head included.
    pub segment_count: usize,
    /// Fixed distance between neighbouring chain points.
    pub segment_length: f32,
    /// Fraction of the head-to-target gap closed per step, in `(0, 1]`.
    pub easing_factor: f32,
    pub easing_mode: EasingMode,
    pub degenerate: DegenerateDirection,
    pub head_radius: f32,
    /// Eye position relative to the head centre when the target is on the head.
    pub eye_offset: Vec2,
    pub eye_radius: f32,
    /// Fraction of the head-to-target vector added to the eye position.
    pub eye_tracking: f32,
    pub body_width: f32,
    pub spine_width: f32,
    /// A pair of legs is drawn at every `leg_stride`-th segment.
    pub leg_stride: usize,
    pub leg_length: f32,
    pub leg_width: f32,
    pub arrow_size: f32,
    pub arrow_glow_blur: f32,
    pub palette: Palette,
}

impl Default for AnimatorConfig {
    fn default() -> Self {
        Self {
            segment_count: 45,
            segment_length: 16.0,
            easing_factor: 0.05,
            easing_mode: EasingMode::PerFrame,
            degenerate: DegenerateDirection::Hold,
            head_radius: 15.0,
            eye_offset: Vec2::new(6.0, -5.0),
            eye_radius: 3.0,
            eye_tracking: 0.015,
            body_width: 12.0,
            spine_width: 3.0,
            leg_stride: 5,
            leg_length: 15.0,
            leg_width: 3.0,
            arrow_size: 15.0,
            arrow_glow_blur: 30.0,
            palette: Palette::default(),
        }
    }
}

impl AnimatorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_segment_count(mut self, segment_count: usize) -> Self {
        self.segment_count = segment_count;
        self
    }

    pub fn with_segment_length(mut self, segment_length: f32) -> Self {
        self.segment_length = segment_length;
        self
    }

    pub fn with_easing_factor(mut self, easing_factor: f32) -> Self {
        self.easing_factor = easing_factor;
        self
    }

    pub fn with_easing_mode(mut self, easing_mode: EasingMode) -> Self {
        self.easing_mode = easing_mode;
        self
    }

    pub fn with_degenerate_direction(mut self, degenerate: DegenerateDirection) -> Self {
        self.degenerate = degenerate;
        self
    }

    pub fn with_eye_tracking(mut self, eye_tracking: f32) -> Self {
        self.eye_tracking = eye_tracking;
        self
    }

    pub fn with_leg_stride(mut self, leg_stride: usize) -> Self {
        self.leg_stride = leg_stride;
        self
    }

    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.segment_count == 0 {
            return Err(Error::InvalidConfig("segment count must be at least 1".into()));
        }
        if !(self.segment_length.is_finite() && self.segment_length > 0.0) {
            return Err(Error::InvalidConfig(format!(
                "segment length must be positive and finite, got {}",
                self.segment_length
            )));
        }
        if !(self.easing_factor > 0.0 && self.easing_factor <= 1.0) {
            return Err(Error::InvalidConfig(format!(
                "easing factor must be in (0, 1], got {}",
                self.easing_factor
            )));
        }
        if let EasingMode::TimeScaled { reference_hz } = self.easing_mode {
            if !(reference_hz.is_finite() && reference_hz > 0.0) {
                return Err(Error::InvalidConfig(format!(
                    "reference rate must be positive, got {reference_hz}"
                )));
            }
        }
        if let DegenerateDirection::Axis(axis) = self.degenerate {
            if !axis.is_finite() || axis.length_squared() < 1e-8 {
                return Err(Error::InvalidConfig(
                    "degenerate axis must be a non-zero vector".into(),
                ));
            }
        }
        if self.leg_stride == 0 {
            return Err(Error::InvalidConfig("leg stride must be at least 1".into()));
        }
        Ok(())
    }
}
