//! Converts a [`DrawList`] into a flat triangle list for the GPU renderer.

use super::scene::{Color, DrawList, Glow, Shape};
use bytemuck::{Pod, Zeroable};
use glam::Vec2;
use std::f32::consts::TAU;

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct ShapeVertex {
    /// Viewport pixels, y down.
    pub position: [f32; 2],
    pub color: [f32; 4],
}

pub struct Tessellator {
    /// Emit linear-light colours, for sRGB surfaces that re-encode on write.
    pub linear_color: bool,
    pub circle_segments: u32,
    pub glow_layers: u32,
}

impl Default for Tessellator {
    fn default() -> Self {
        Self {
            linear_color: false,
            circle_segments: 24,
            glow_layers: 8,
        }
    }
}

impl Tessellator {
    pub fn new(linear_color: bool) -> Self {
        Self {
            linear_color,
            ..Default::default()
        }
    }

    pub fn tessellate(&self, list: &DrawList) -> Vec<ShapeVertex> {
        let mut out = Vec::new();
        for shape in &list.shapes {
            match shape {
                Shape::Polyline { points, width, color } => {
                    self.stroke(points, *width, *color, &mut out);
                }
                Shape::Circle { center, radius, color } => {
                    self.circle(*center, *radius, *color, &mut out);
                }
                Shape::Polygon { points, color, glow } => {
                    if let Some(glow) = glow {
                        self.glow(points, *glow, &mut out);
                    }
                    self.polygon(points, *color, &mut out);
                }
            }
        }
        out
    }

    fn vertex(&self, position: Vec2, color: Color) -> ShapeVertex {
        let color = if self.linear_color { color.to_linear() } else { color };
        ShapeVertex {
            position: position.to_array(),
            color: color.to_array(),
        }
    }

    fn triangle(&self, a: Vec2, b: Vec2, c: Vec2, color: Color, out: &mut Vec<ShapeVertex>) {
        out.push(self.vertex(a, color));
        out.push(self.vertex(b, color));
        out.push(self.vertex(c, color));
    }

    fn circle(&self, center: Vec2, radius: f32, color: Color, out: &mut Vec<ShapeVertex>) {
        if radius <= 0.0 {
            return;
        }
        let n = self.circle_segments.max(3);
        for k in 0..n {
            let a0 = TAU * k as f32 / n as f32;
            let a1 = TAU * (k + 1) as f32 / n as f32;
            self.triangle(
                center,
                center + Vec2::from_angle(a0) * radius,
                center + Vec2::from_angle(a1) * radius,
                color,
                out,
            );
        }
    }

    /// A quad per link plus a disc on every point gives round caps and joins.
    fn stroke(&self, points: &[Vec2], width: f32, color: Color, out: &mut Vec<ShapeVertex>) {
        let half = width / 2.0;
        if half <= 0.0 {
            return;
        }

        for pair in points.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            let dir = b - a;
            if dir.length_squared() < 1e-8 {
                continue;
            }
            let n = dir.normalize().perp() * half;
            self.triangle(a + n, a - n, b + n, color, out);
            self.triangle(b + n, a - n, b - n, color, out);
        }

        for &p in points {
            self.circle(p, half, color, out);
        }
    }

    fn polygon(&self, points: &[Vec2], color: Color, out: &mut Vec<ShapeVertex>) {
        if points.len() < 3 {
            return;
        }
        for k in 1..points.len() - 1 {
            self.triangle(points[0], points[k], points[k + 1], color, out);
        }
    }

    /// Stacks progressively smaller, faint copies of the polygon so the overlap builds
    /// a falloff toward the shape.
    fn glow(&self, points: &[Vec2], glow: Glow, out: &mut Vec<ShapeVertex>) {
        if points.len() < 3 || glow.blur <= 0.0 || self.glow_layers == 0 {
            return;
        }
        let centroid = points.iter().copied().sum::<Vec2>() / points.len() as f32;
        let layers = self.glow_layers;
        let color = glow.color.with_alpha(glow.color.a * 0.6 / layers as f32);

        for layer in (1..=layers).rev() {
            let spread = glow.blur * 0.5 * layer as f32 / layers as f32;
            let expanded: Vec<Vec2> = points
                .iter()
                .map(|&p| p + (p - centroid).normalize_or_zero() * spread)
                .collect();
            self.polygon(&expanded, color, out);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::Viewport;

    fn list_with(shape: Shape) -> DrawList {
        let mut list = DrawList::new(Viewport::new(100, 100));
        list.push(shape);
        list
    }

    #[test]
    fn circle_is_a_triangle_fan() {
        let tess = Tessellator::default();
        let list = list_with(Shape::Circle {
            center: Vec2::new(50.0, 50.0),
            radius: 10.0,
            color: Color::BLACK,
        });
        let vertices = tess.tessellate(&list);
        assert_eq!(vertices.len(), 3 * tess.circle_segments as usize);
        for v in &vertices {
            let d = Vec2::from_array(v.position).distance(Vec2::new(50.0, 50.0));
            assert!(d <= 10.0 + 1e-4);
        }
    }

    #[test]
    fn stroke_has_quad_per_link_and_disc_per_point() {
        let tess = Tessellator::default();
        let list = list_with(Shape::Polyline {
            points: vec![Vec2::ZERO, Vec2::new(10.0, 0.0), Vec2::new(10.0, 0.0)],
            width: 4.0,
            color: Color::BLACK,
        });
        let disc = 3 * tess.circle_segments as usize;
        // The zero-length second link contributes no quad.
        assert_eq!(tess.tessellate(&list).len(), 6 + 3 * disc);
    }

    #[test]
    fn glowing_polygon_draws_halo_before_fill() {
        let tess = Tessellator::default();
        let fill = Color::rgb8(0x6F, 0xFF, 0x6F);
        let list = list_with(Shape::Polygon {
            points: vec![Vec2::ZERO, Vec2::new(-15.0, 7.5), Vec2::new(-15.0, -7.5)],
            color: fill,
            glow: Some(Glow {
                color: Color::rgb8(0x4F, 0xDF, 0x4F),
                blur: 30.0,
            }),
        });
        let vertices = tess.tessellate(&list);
        assert_eq!(vertices.len(), 3 * (tess.glow_layers as usize + 1));

        let last = vertices.last().map(|v| v.color);
        assert_eq!(last, Some(fill.to_array()));
        assert!(vertices[0].color[3] < 1.0);
    }

    #[test]
    fn linear_output_converts_colours() {
        let color = Color::rgb8(128, 64, 32);
        let list = list_with(Shape::Circle {
            center: Vec2::ZERO,
            radius: 1.0,
            color,
        });
        let vertices = Tessellator::new(true).tessellate(&list);
        assert_eq!(vertices[0].color, color.to_linear().to_array());
    }

    #[test]
    fn degenerate_shapes_emit_nothing() {
        let tess = Tessellator::default();
        let mut list = DrawList::new(Viewport::new(10, 10));
        list.push(Shape::Circle {
            center: Vec2::ZERO,
            radius: 0.0,
            color: Color::BLACK,
        });
        list.push(Shape::Polygon {
            points: vec![Vec2::ZERO, Vec2::ONE],
            color: Color::BLACK,
            glow: None,
        });
        assert!(tess.tessellate(&list).is_empty());
    }
}
