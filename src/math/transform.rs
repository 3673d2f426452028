use glam::Vec2;

/// Angle in radians of the vector pointing from `from` to `to`.
///
/// Coincident points give `0.0`, the `atan2(0, 0)` convention.
pub fn direction_angle(from: Vec2, to: Vec2) -> f32 {
    let delta = to - from;
    delta.y.atan2(delta.x)
}

/// Rigid 2D transform: rotate about the origin, then translate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform2 {
    pub position: Vec2,
    pub rotation: f32,
}

impl Default for Transform2 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Transform2 {
    pub const IDENTITY: Self = Self {
        position: Vec2::ZERO,
        rotation: 0.0,
    };

    pub fn new(position: Vec2, rotation: f32) -> Self {
        Self { position, rotation }
    }

    /// Places the origin at `position` with +X pointing away from `from`.
    pub fn looking_away_from(position: Vec2, from: Vec2) -> Self {
        Self {
            position,
            rotation: direction_angle(from, position),
        }
    }

    pub fn forward(&self) -> Vec2 {
        Vec2::from_angle(self.rotation)
    }

    pub fn transform_point(&self, point: Vec2) -> Vec2 {
        Vec2::from_angle(self.rotation).rotate(point) + self.position
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn direction_angle_matches_atan2() {
        assert_eq!(direction_angle(Vec2::ZERO, Vec2::new(1.0, 0.0)), 0.0);
        assert!((direction_angle(Vec2::ZERO, Vec2::new(0.0, 2.0)) - FRAC_PI_2).abs() < 1e-6);
        assert_eq!(direction_angle(Vec2::ONE, Vec2::ONE), 0.0);
    }

    #[test]
    fn transform_rotates_then_translates() {
        let transform = Transform2::new(Vec2::new(10.0, 5.0), FRAC_PI_2);
        let p = transform.transform_point(Vec2::new(1.0, 0.0));
        assert!((p - Vec2::new(10.0, 6.0)).length() < 1e-5);
    }

    #[test]
    fn looking_away_points_forward_along_offset() {
        let transform = Transform2::looking_away_from(Vec2::new(5.0, 0.0), Vec2::ZERO);
        assert!((transform.forward() - Vec2::X).length() < 1e-6);
        assert_eq!(transform.transform_point(Vec2::ZERO), Vec2::new(5.0, 0.0));
    }
}
