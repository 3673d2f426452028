use super::scene::{Color, DrawList, Glow, Shape};
use crate::animator::ChainAnimator;
use crate::math::{direction_angle, Transform2};
use glam::Vec2;
use std::f32::consts::FRAC_PI_2;

/// Turns animator state into the shapes of one frame.
pub struct ReptilePainter;

impl ReptilePainter {
    /// An inactive animator, an empty chain or an empty viewport paint nothing, which
    /// leaves a cleared surface.
    pub fn paint(animator: &ChainAnimator) -> DrawList {
        let viewport = animator.viewport();
        let mut list = DrawList::new(viewport);

        let segments = animator.segments();
        if !animator.is_active() || viewport.is_empty() || segments.is_empty() {
            return list;
        }

        let config = animator.config();
        let palette = &config.palette;
        let head = animator.head();
        let target = animator.target();

        let body: Vec<Vec2> = std::iter::once(head)
            .chain(segments.iter().skip(1).copied())
            .collect();
        list.push(Shape::Polyline {
            points: body,
            width: config.body_width,
            color: palette.body,
        });

        let spine: Vec<Vec2> = std::iter::once(head)
            .chain(segments.iter().skip(1).step_by(2).copied())
            .collect();
        list.push(Shape::Polyline {
            points: spine,
            width: config.spine_width,
            color: palette.spine,
        });

        for i in (config.leg_stride..segments.len()).step_by(config.leg_stride) {
            let seg = segments[i];
            let angle = direction_angle(seg, segments[i - 1]);
            for side in [FRAC_PI_2, -FRAC_PI_2] {
                let foot = seg + Vec2::from_angle(angle + side) * config.leg_length;
                list.push(Shape::Polyline {
                    points: vec![seg, foot],
                    width: config.leg_width,
                    color: palette.legs,
                });
            }
        }

        list.push(Shape::Circle {
            center: head,
            radius: config.head_radius,
            color: palette.head,
        });
        list.push(Shape::Circle {
            center: animator.eye_position(),
            radius: config.eye_radius,
            color: palette.eye,
        });

        let glow = Glow {
            color: palette.arrow_glow,
            blur: config.arrow_glow_blur,
        };
        list.push(Self::arrow(head, target, config.arrow_size, palette.arrow, glow));

        list
    }

    /// Triangle with its tip on `target`, pointing along head -> target.
    fn arrow(head: Vec2, target: Vec2, size: f32, color: Color, glow: Glow) -> Shape {
        let transform = Transform2::looking_away_from(target, head);
        let points = [
            Vec2::ZERO,
            Vec2::new(-size, size / 2.0),
            Vec2::new(-size, -size / 2.0),
        ]
        .into_iter()
        .map(|p| transform.transform_point(p))
        .collect();

        Shape::Polygon {
            points,
            color,
            glow: Some(glow),
        }
    }
}
