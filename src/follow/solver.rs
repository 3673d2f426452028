use super::chain::SegmentChain;
use crate::config::DegenerateDirection;
use glam::Vec2;

/// Below this separation two points are treated as coincident.
const COINCIDENT_EPSILON: f32 = 0.0001;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FollowResult {
    /// Links whose direction was undefined and were left in place.
    pub held: usize,
}

pub struct FollowSolver;

impl FollowSolver {
    /// Pins the first point to `lead`, then walks the chain placing every point exactly
    /// one segment length from its predecessor along the line joining them.
    ///
    /// There are no angular limits, so the chain may fold back on itself.
    ///
    /// With [`DegenerateDirection::Hold`], a point sitting on its predecessor is placed
    /// behind it along the previous link, or along the lead's motion for the first
    /// link. It is only left in place when neither is defined, which keeps a collapsed
    /// chain under a still lead collapsed.
    pub fn follow(
        chain: &mut SegmentChain,
        lead: Vec2,
        degenerate: DegenerateDirection,
    ) -> FollowResult {
        let mut held = 0;

        let Some(first) = chain.points.first_mut() else {
            return FollowResult { held };
        };
        let previous_lead = *first;
        *first = lead;
        let motion = lead - previous_lead;

        let segment_length = chain.segment_length;
        for i in 1..chain.points.len() {
            let prev_pos = chain.points[i - 1];
            let curr_pos = chain.points[i];

            let direction = match Self::link_direction(prev_pos, curr_pos) {
                Some(direction) => Some(direction),
                None => match degenerate {
                    DegenerateDirection::Axis(axis) => {
                        Some(axis.try_normalize().unwrap_or(Vec2::X))
                    }
                    DegenerateDirection::Hold if i == 1 => {
                        Self::link_direction(motion, Vec2::ZERO)
                    }
                    DegenerateDirection::Hold => {
                        Self::link_direction(chain.points[i - 2], prev_pos)
                    }
                },
            };

            match direction {
                Some(direction) => chain.points[i] = prev_pos - direction * segment_length,
                None => held += 1,
            }
        }

        FollowResult { held }
    }

    /// Unit vector from `curr` toward `prev`, if the two points are apart.
    fn link_direction(prev: Vec2, curr: Vec2) -> Option<Vec2> {
        let dir = prev - curr;
        let len = dir.length();
        (len > COINCIDENT_EPSILON).then(|| dir / len)
    }
}
