use glam::Vec2;
use reptile_follow::{DegenerateDirection, FollowSolver, SegmentChain};

const EPSILON: f32 = 5e-3;

/// Small deterministic generator so the wandering targets are reproducible.
struct Lcg(u64);

impl Lcg {
    fn next_f32(&mut self) -> f32 {
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        (self.0 >> 40) as f32 / (1u64 << 24) as f32
    }
}

fn assert_links_at_rest(chain: &SegmentChain) {
    for (i, len) in chain.link_lengths().enumerate() {
        assert!(
            (len - chain.segment_length()).abs() < EPSILON,
            "link {} has length {}, expected {}",
            i + 1,
            len,
            chain.segment_length()
        );
    }
}

#[test]
fn follow_pins_first_point_to_lead() {
    let mut chain = SegmentChain::builder()
        .segment_length(10.0)
        .add_collapsed(Vec2::ZERO, 5)
        .build();

    FollowSolver::follow(&mut chain, Vec2::new(3.0, 4.0), DegenerateDirection::Hold);
    assert_eq!(chain.lead(), Some(Vec2::new(3.0, 4.0)));
}

#[test]
fn follow_projects_each_point_along_link_direction() {
    let mut chain = SegmentChain::builder()
        .segment_length(10.0)
        .add_point(Vec2::ZERO)
        .add_point(Vec2::new(-2.0, 0.0))
        .add_point(Vec2::new(-2.0, -3.0))
        .build();

    FollowSolver::follow(&mut chain, Vec2::ZERO, DegenerateDirection::Hold);

    let points = chain.points();
    assert!((points[1] - Vec2::new(-10.0, 0.0)).length() < 1e-5);
    // Third point keeps the direction it had toward the moved second point.
    let expected_dir = (points[1] - Vec2::new(-2.0, -3.0)).normalize();
    assert!((points[2] - (points[1] - expected_dir * 10.0)).length() < 1e-4);
    assert_links_at_rest(&chain);
}

#[test]
fn link_lengths_stay_fixed_for_wandering_lead() {
    let mut chain = SegmentChain::builder()
        .segment_length(16.0)
        .add_collapsed(Vec2::new(400.0, 300.0), 45)
        .build();
    let mut rng = Lcg(7);
    let mut lead = Vec2::new(400.0, 300.0);

    for frame in 0..600 {
        let goal = Vec2::new(rng.next_f32() * 800.0, rng.next_f32() * 600.0);
        lead += (goal - lead) * 0.05;
        let result = FollowSolver::follow(&mut chain, lead, DegenerateDirection::Hold);

        if frame > 0 {
            assert_eq!(result.held, 0, "frame {frame} held links");
            assert_links_at_rest(&chain);
        }
    }
}

#[test]
fn chain_may_fold_back_on_itself() {
    // Lead jumps behind the chain: no angular limit stops the first link reversing.
    let mut chain = SegmentChain::builder()
        .segment_length(5.0)
        .add_point(Vec2::new(0.0, 0.0))
        .add_point(Vec2::new(-5.0, 0.0))
        .add_point(Vec2::new(-10.0, 0.0))
        .build();

    FollowSolver::follow(&mut chain, Vec2::new(-12.0, 0.0), DegenerateDirection::Hold);

    let points = chain.points();
    assert!((points[1] - Vec2::new(-7.0, 0.0)).length() < 1e-5);
    // The second link flips to point back toward the new lead.
    assert!((points[2] - Vec2::new(-12.0, 0.0)).length() < 1e-4);
    assert_links_at_rest(&chain);
}

#[test]
fn collapsed_chain_holds_until_lead_moves() {
    let start = Vec2::new(50.0, 50.0);
    let mut chain = SegmentChain::builder()
        .segment_length(16.0)
        .add_collapsed(start, 10)
        .build();

    let result = FollowSolver::follow(&mut chain, start, DegenerateDirection::Hold);
    assert_eq!(result.held, 9);
    assert!(chain.points().iter().all(|&p| p == start));

    let moved = start + Vec2::new(1.0, 0.0);
    let result = FollowSolver::follow(&mut chain, moved, DegenerateDirection::Hold);
    assert_eq!(result.held, 0);
    assert_links_at_rest(&chain);
}

#[test]
fn axis_fallback_zigzags_collapsed_chain() {
    let start = Vec2::new(100.0, 100.0);
    let mut chain = SegmentChain::builder()
        .segment_length(16.0)
        .add_collapsed(start, 4)
        .build();

    FollowSolver::follow(&mut chain, start, DegenerateDirection::Axis(Vec2::X));

    // Odd points fall back along the axis; even points are then pulled back onto the
    // start because they still sit there.
    for (i, p) in chain.points().iter().enumerate() {
        let expected = if i % 2 == 1 { start - Vec2::new(16.0, 0.0) } else { start };
        assert!((*p - expected).length() < 1e-4, "point {i} at {p:?}");
    }
    assert_links_at_rest(&chain);
    assert_eq!(chain.rest_length(), 48.0);
}
