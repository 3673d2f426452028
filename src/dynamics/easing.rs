use glam::Vec2;

pub trait Interpolatable: Clone + Copy {
    fn add(self, other: Self) -> Self;
    fn sub(self, other: Self) -> Self;
    fn scale(self, factor: f32) -> Self;
}

impl Interpolatable for f32 {
    fn add(self, other: Self) -> Self { self + other }
    fn sub(self, other: Self) -> Self { self - other }
    fn scale(self, factor: f32) -> Self { self * factor }
}

impl Interpolatable for Vec2 {
    fn add(self, other: Self) -> Self { self + other }
    fn sub(self, other: Self) -> Self { self - other }
    fn scale(self, factor: f32) -> Self { self * factor }
}

/// Converts a per-frame easing factor into the factor for a step of `dt` seconds,
/// so that `reference_hz` steps of `1 / reference_hz` cover the same ground as
/// `reference_hz` per-frame steps.
pub fn time_scaled_factor(factor: f32, dt: f32, reference_hz: f32) -> f32 {
    if dt <= 0.0 {
        return 0.0;
    }
    1.0 - (1.0 - factor).powf(dt * reference_hz)
}

/// Moves a value a fixed fraction of the remaining distance toward its goal on
/// every step.
#[derive(Debug, Clone, Copy)]
pub struct ExponentialEasing<T: Interpolatable> {
    value: T,
    factor: f32,
}

impl<T: Interpolatable> ExponentialEasing<T> {
    pub fn new(factor: f32, initial: T) -> Self {
        Self {
            value: initial,
            factor,
        }
    }

    /// `value += (goal - value) * factor`
    pub fn step(&mut self, goal: T) -> T {
        self.step_with_factor(goal, self.factor)
    }

    pub fn step_with_factor(&mut self, goal: T, factor: f32) -> T {
        self.value = self.value.add(goal.sub(self.value).scale(factor));
        self.value
    }

    pub fn current(&self) -> T {
        self.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_moves_fraction_of_remaining_distance() {
        let mut easing = ExponentialEasing::new(0.25, 0.0f32);
        assert_eq!(easing.step(8.0), 2.0);
        assert_eq!(easing.step(8.0), 3.5);
        assert_eq!(easing.current(), 3.5);
    }

    #[test]
    fn step_at_goal_is_stationary() {
        let start = Vec2::new(3.0, -4.0);
        let mut easing = ExponentialEasing::new(0.05, start);
        for _ in 0..10 {
            assert_eq!(easing.step(start), start);
        }
    }

    #[test]
    fn time_scaled_factor_matches_per_frame_at_reference_rate() {
        let k = 0.05;
        let scaled = time_scaled_factor(k, 1.0 / 60.0, 60.0);
        assert!((scaled - k).abs() < 1e-6);

        // Two frames' worth of time in one step covers two frames' worth of distance.
        let double = time_scaled_factor(k, 2.0 / 60.0, 60.0);
        let expected = 1.0 - (1.0 - k) * (1.0 - k);
        assert!((double - expected).abs() < 1e-6);

        assert_eq!(time_scaled_factor(k, 0.0, 60.0), 0.0);
    }
}
