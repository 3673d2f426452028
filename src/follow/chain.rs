use glam::Vec2;

/// Ordered chain points where each point trails its predecessor at a fixed spacing.
#[derive(Debug, Clone)]
pub struct SegmentChain {
    pub(crate) points: Vec<Vec2>,
    pub(crate) segment_length: f32,
}

impl SegmentChain {
    pub fn builder() -> SegmentChainBuilder {
        SegmentChainBuilder::new()
    }

    pub fn points(&self) -> &[Vec2] {
        &self.points
    }

    pub fn segment_length(&self) -> f32 {
        self.segment_length
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn lead(&self) -> Option<Vec2> {
        self.points.first().copied()
    }

    /// Current distance between each pair of neighbouring points, lead first.
    pub fn link_lengths(&self) -> impl Iterator<Item = f32> + '_ {
        self.points.windows(2).map(|w| w[0].distance(w[1]))
    }

    /// Length the chain has when every link is at its rest spacing.
    pub fn rest_length(&self) -> f32 {
        self.points.len().saturating_sub(1) as f32 * self.segment_length
    }
}

pub struct SegmentChainBuilder {
    points: Vec<Vec2>,
    segment_length: f32,
}

impl SegmentChainBuilder {
    pub fn new() -> Self {
        Self {
            points: Vec::new(),
            segment_length: 16.0,
        }
    }

    pub fn add_point(mut self, position: Vec2) -> Self {
        self.points.push(position);
        self
    }

    /// Appends `count` points stacked on `position`.
    pub fn add_collapsed(mut self, position: Vec2, count: usize) -> Self {
        self.points.extend(std::iter::repeat(position).take(count));
        self
    }

    pub fn segment_length(mut self, segment_length: f32) -> Self {
        self.segment_length = segment_length;
        self
    }

    pub fn build(self) -> SegmentChain {
        SegmentChain {
            points: self.points,
            segment_length: self.segment_length,
        }
    }
}

impl Default for SegmentChainBuilder {
    fn default() -> Self {
        Self::new()
    }
}
