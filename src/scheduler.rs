//! Frame pacing.
//!
//! The host (browser `requestAnimationFrame`, winit `RedrawRequested`) decides *when*
//! a frame happens; [`FrameScheduler`] turns each of those callbacks into an
//! `update(dt)` followed by a `render()`, reading time from an injectable [`Clock`].

use std::cell::Cell;

/// Monotonic time source in seconds.
pub trait Clock {
    fn now(&self) -> f64;
}

/// Clock that only moves when told to.
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Cell<f64>,
}

impl ManualClock {
    pub fn new(start: f64) -> Self {
        Self {
            now: Cell::new(start),
        }
    }

    pub fn advance(&self, seconds: f64) {
        self.now.set(self.now.get() + seconds);
    }

    pub fn set(&self, seconds: f64) {
        self.now.set(seconds);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> f64 {
        self.now.get()
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> f64 {
        (**self).now()
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub use system::SystemClock;

#[cfg(not(target_arch = "wasm32"))]
mod system {
    use super::Clock;
    use std::time::Instant;

    /// Seconds since construction, from [`Instant`].
    #[derive(Debug, Clone, Copy)]
    pub struct SystemClock {
        start: Instant,
    }

    impl SystemClock {
        pub fn new() -> Self {
            Self {
                start: Instant::now(),
            }
        }
    }

    impl Default for SystemClock {
        fn default() -> Self {
            Self::new()
        }
    }

    impl Clock for SystemClock {
        fn now(&self) -> f64 {
            self.start.elapsed().as_secs_f64()
        }
    }
}

/// Something advanced and drawn once per frame.
pub trait FrameHandler {
    fn update(&mut self, dt: f32);
    fn render(&mut self);
}

pub struct FrameScheduler<C: Clock> {
    clock: C,
    last_time: Option<f64>,
    first_dt: f32,
    max_dt: f32,
    frames: u64,
}

impl<C: Clock> FrameScheduler<C> {
    pub fn new(clock: C) -> Self {
        Self {
            clock,
            last_time: None,
            first_dt: 1.0 / 60.0,
            max_dt: 0.1,
            frames: 0,
        }
    }

    /// Upper bound on a single step, so a stalled tab does not teleport the reptile.
    pub fn with_max_dt(mut self, max_dt: f32) -> Self {
        self.max_dt = max_dt;
        self
    }

    /// Step used for the very first frame, which has no predecessor to measure from.
    pub fn with_first_dt(mut self, first_dt: f32) -> Self {
        self.first_dt = first_dt;
        self
    }

    pub fn frame_count(&self) -> u64 {
        self.frames
    }

    /// Runs one frame and returns the `dt` handed to `update`.
    pub fn tick<H: FrameHandler + ?Sized>(&mut self, handler: &mut H) -> f32 {
        let now = self.clock.now();
        let dt = match self.last_time {
            Some(last) => ((now - last) as f32).clamp(0.0, self.max_dt),
            None => self.first_dt,
        };
        self.last_time = Some(now);

        handler.update(dt);
        handler.render();
        self.frames += 1;
        dt
    }
}
