use crate::math::Viewport;
use glam::Vec2;

/// Non-premultiplied RGBA colour with sRGB-encoded channels in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const BLACK: Self = Self {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 1.0,
    };

    pub fn rgb8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
            a: 1.0,
        }
    }

    pub fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }

    pub fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Same colour with linear-light RGB channels, for sRGB render targets.
    pub fn to_linear(self) -> Self {
        fn channel(c: f32) -> f32 {
            if c <= 0.04045 {
                c / 12.92
            } else {
                ((c + 0.055) / 1.055).powf(2.4)
            }
        }
        Self {
            r: channel(self.r),
            g: channel(self.g),
            b: channel(self.b),
            a: self.a,
        }
    }

    /// CSS `rgba()` string for the 2D canvas API.
    pub fn to_css(self) -> String {
        let byte = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        format!(
            "rgba({}, {}, {}, {})",
            byte(self.r),
            byte(self.g),
            byte(self.b),
            self.a.clamp(0.0, 1.0)
        )
    }
}

/// Soft halo drawn around a filled shape.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Glow {
    pub color: Color,
    pub blur: f32,
}

/// A single drawing primitive in viewport pixel coordinates (y down).
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    /// Stroked open path with round caps and joins.
    Polyline {
        points: Vec<Vec2>,
        width: f32,
        color: Color,
    },
    Circle {
        center: Vec2,
        radius: f32,
        color: Color,
    },
    /// Filled convex polygon.
    Polygon {
        points: Vec<Vec2>,
        color: Color,
        glow: Option<Glow>,
    },
}

/// Everything needed to draw one frame: the surface size and the shapes in
/// back-to-front order. Executing a list always starts by clearing the surface.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DrawList {
    pub viewport: Viewport,
    pub shapes: Vec<Shape>,
}

impl DrawList {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            shapes: Vec::new(),
        }
    }

    pub fn push(&mut self, shape: Shape) {
        self.shapes.push(shape);
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }
}
