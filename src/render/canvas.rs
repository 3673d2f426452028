use super::scene::{DrawList, Shape};
use crate::error::{Error, Result};
use crate::math::Viewport;
use glam::Vec2;
use std::f64::consts::TAU;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

/// Replays a [`DrawList`] on an HTML canvas through its 2D context.
pub struct CanvasRenderer {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasRenderer {
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|_| Error::Dom("getContext('2d') threw".into()))?
            .ok_or_else(|| Error::Dom("2d context unavailable".into()))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| Error::Dom("context is not a CanvasRenderingContext2d".into()))?;

        Ok(Self { canvas, ctx })
    }

    /// Matches the drawing buffer to the viewport. Setting a canvas dimension also
    /// resets the context state.
    pub fn resize(&self, viewport: Viewport) {
        self.canvas.set_width(viewport.width);
        self.canvas.set_height(viewport.height);
    }

    pub fn render(&self, list: &DrawList) {
        let ctx = &self.ctx;
        ctx.clear_rect(
            0.0,
            0.0,
            list.viewport.width as f64,
            list.viewport.height as f64,
        );
        ctx.set_line_cap("round");

        for shape in &list.shapes {
            match shape {
                Shape::Polyline { points, width, color } => {
                    if !self.trace(points) {
                        continue;
                    }
                    ctx.set_stroke_style_str(&color.to_css());
                    ctx.set_line_width(*width as f64);
                    ctx.stroke();
                }
                Shape::Circle { center, radius, color } => {
                    ctx.begin_path();
                    if ctx
                        .arc(center.x as f64, center.y as f64, *radius as f64, 0.0, TAU)
                        .is_err()
                    {
                        continue;
                    }
                    ctx.set_fill_style_str(&color.to_css());
                    ctx.fill();
                }
                Shape::Polygon { points, color, glow } => {
                    if !self.trace(points) {
                        continue;
                    }
                    ctx.close_path();
                    ctx.save();
                    if let Some(glow) = glow {
                        ctx.set_shadow_color(&glow.color.to_css());
                        ctx.set_shadow_blur(glow.blur as f64);
                    }
                    ctx.set_fill_style_str(&color.to_css());
                    ctx.fill();
                    ctx.restore();
                }
            }
        }
    }

    /// Starts a new path through `points`; `false` when there is nothing to trace.
    fn trace(&self, points: &[Vec2]) -> bool {
        let Some((first, rest)) = points.split_first() else {
            return false;
        };
        self.ctx.begin_path();
        self.ctx.move_to(first.x as f64, first.y as f64);
        for p in rest {
            self.ctx.line_to(p.x as f64, p.y as f64);
        }
        true
    }
}
