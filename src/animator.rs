//! The pointer-following reptile.

use crate::config::{AnimatorConfig, EasingMode};
use crate::dynamics::{time_scaled_factor, ExponentialEasing};
use crate::error::Result;
use crate::follow::{FollowSolver, SegmentChain};
use crate::math::Viewport;
use crate::render::{DrawList, ReptilePainter};
use crate::scheduler::FrameHandler;
use glam::Vec2;

/// Owns the head, the trailing chain and the pointer target.
///
/// Nothing moves until [`activate`](Self::activate) is called; after that every
/// [`update`](Self::update) eases the head toward the target and drags the chain
/// behind it.
#[derive(Debug, Clone)]
pub struct ChainAnimator {
    config: AnimatorConfig,
    head: ExponentialEasing<Vec2>,
    chain: SegmentChain,
    target: Vec2,
    viewport: Viewport,
    active: bool,
    frames: u64,
}

impl ChainAnimator {
    /// Places head, target and every segment at the viewport centre.
    pub fn new(config: AnimatorConfig, viewport: Viewport) -> Result<Self> {
        config.validate()?;

        let center = viewport.center();
        let chain = SegmentChain::builder()
            .segment_length(config.segment_length)
            .add_collapsed(center, config.segment_count)
            .build();

        Ok(Self {
            head: ExponentialEasing::new(config.easing_factor, center),
            chain,
            target: center,
            viewport,
            active: false,
            frames: 0,
            config,
        })
    }

    /// Starts the animation. Returns `false` if it was already running; there is no
    /// way back to the idle state.
    pub fn activate(&mut self) -> bool {
        if self.active {
            return false;
        }
        self.active = true;
        log::info!("animation started");
        true
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Pointer input. Ignored until the animation has been started.
    pub fn pointer_moved(&mut self, position: Vec2) {
        if self.active {
            self.target = position;
        }
    }

    pub fn set_target(&mut self, target: Vec2) {
        self.target = target;
    }

    /// Changes only the drawing surface size; the reptile stays where it is.
    pub fn resize(&mut self, viewport: Viewport) {
        log::debug!("viewport resized to {}x{}", viewport.width, viewport.height);
        self.viewport = viewport;
    }

    /// Advances one frame. Does nothing while inactive.
    pub fn update(&mut self, dt: f32) {
        if !self.active {
            return;
        }

        let head = match self.config.easing_mode {
            EasingMode::PerFrame => self.head.step(self.target),
            EasingMode::TimeScaled { reference_hz } => {
                let factor = time_scaled_factor(self.config.easing_factor, dt, reference_hz);
                self.head.step_with_factor(self.target, factor)
            }
        };

        let result = FollowSolver::follow(&mut self.chain, head, self.config.degenerate);
        self.frames += 1;
        log::trace!(
            "frame {} dt={dt:.4} head=({:.1}, {:.1}) held={}",
            self.frames,
            head.x,
            head.y,
            result.held
        );
    }

    pub fn head(&self) -> Vec2 {
        self.head.current()
    }

    pub fn target(&self) -> Vec2 {
        self.target
    }

    pub fn segments(&self) -> &[Vec2] {
        self.chain.points()
    }

    pub fn chain(&self) -> &SegmentChain {
        &self.chain
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn config(&self) -> &AnimatorConfig {
        &self.config
    }

    /// Number of update steps taken while active.
    pub fn frame_count(&self) -> u64 {
        self.frames
    }

    /// The eye sits at a fixed offset from the head centre and leans slightly toward
    /// the target.
    pub fn eye_position(&self) -> Vec2 {
        let head = self.head();
        head + self.config.eye_offset + (self.target - head) * self.config.eye_tracking
    }

    pub fn draw_list(&self) -> DrawList {
        ReptilePainter::paint(self)
    }
}

/// Lets a bare animator be driven by a [`FrameScheduler`](crate::scheduler::FrameScheduler)
/// when there is no surface to draw to.
impl FrameHandler for ChainAnimator {
    fn update(&mut self, dt: f32) {
        ChainAnimator::update(self, dt);
    }

    fn render(&mut self) {}
}
