use glam::Vec2;
use reptile_follow::{AnimatorConfig, ChainAnimator, EasingMode, Error, Viewport};

fn animator() -> ChainAnimator {
    ChainAnimator::new(AnimatorConfig::default(), Viewport::new(800, 600)).unwrap()
}

fn snapshot(animator: &ChainAnimator) -> (Vec2, Vec<Vec2>) {
    (animator.head(), animator.segments().to_vec())
}

#[test]
fn starts_collapsed_at_viewport_center() {
    let animator = animator();
    let center = Vec2::new(400.0, 300.0);

    assert!(!animator.is_active());
    assert_eq!(animator.head(), center);
    assert_eq!(animator.target(), center);
    assert_eq!(animator.segments().len(), 45);
    assert!(animator.segments().iter().all(|&p| p == center));
}

#[test]
fn rejects_invalid_config() {
    let result = ChainAnimator::new(
        AnimatorConfig::new().with_segment_count(0),
        Viewport::new(800, 600),
    );
    assert!(matches!(result, Err(Error::InvalidConfig(_))));
}

#[test]
fn one_update_eases_head_by_exact_fraction() {
    let mut animator = animator();
    animator.activate();

    let before = animator.head();
    let target = Vec2::new(700.0, 120.0);
    animator.pointer_moved(target);
    animator.update(1.0 / 60.0);

    assert_eq!(animator.head(), before + (target - before) * 0.05);
    assert_eq!(animator.segments()[0], animator.head());
}

#[test]
fn inactive_updates_change_nothing() {
    let mut animator = animator();
    animator.set_target(Vec2::new(10.0, 10.0));
    let before = snapshot(&animator);

    for _ in 0..100 {
        animator.update(1.0 / 60.0);
    }

    assert_eq!(snapshot(&animator), before);
    assert_eq!(animator.frame_count(), 0);
}

#[test]
fn pointer_is_ignored_before_activation() {
    let mut animator = animator();
    animator.pointer_moved(Vec2::new(10.0, 10.0));
    assert_eq!(animator.target(), Vec2::new(400.0, 300.0));

    animator.activate();
    animator.pointer_moved(Vec2::new(10.0, 10.0));
    assert_eq!(animator.target(), Vec2::new(10.0, 10.0));
}

#[test]
fn activation_is_one_shot() {
    let mut animator = animator();
    assert!(animator.activate());
    assert!(!animator.activate());
    assert!(animator.is_active());
}

#[test]
fn links_keep_segment_length_while_chasing() {
    let mut animator = animator();
    animator.activate();

    let targets = [
        Vec2::new(750.0, 50.0),
        Vec2::new(20.0, 580.0),
        Vec2::new(400.0, 310.0),
        Vec2::new(790.0, 590.0),
    ];
    for target in targets {
        animator.pointer_moved(target);
        for _ in 0..90 {
            animator.update(1.0 / 60.0);
            for w in animator.segments().windows(2) {
                let d = w[0].distance(w[1]);
                assert!((d - 16.0).abs() < 5e-3, "link length {d}");
            }
        }
    }
    assert_eq!(animator.frame_count(), 360);
}

#[test]
fn first_step_of_exactly_one_segment_spreads_the_chain() {
    let mut animator = animator();
    animator.activate();

    // 5% of 320 px puts the head exactly one segment from the collapsed body.
    animator.pointer_moved(Vec2::new(720.0, 300.0));
    animator.update(1.0 / 60.0);
    assert_eq!(animator.head(), Vec2::new(416.0, 300.0));

    for _ in 0..60 {
        for (i, w) in animator.segments().windows(2).enumerate() {
            let d = w[0].distance(w[1]);
            assert!((d - 16.0).abs() < 5e-3, "link {} has length {d}", i + 1);
        }
        animator.update(1.0 / 60.0);
    }
}

#[test]
fn head_converges_on_still_target() {
    let mut animator = animator();
    animator.activate();
    let target = Vec2::new(600.0, 200.0);
    animator.pointer_moved(target);

    for _ in 0..400 {
        animator.update(1.0 / 60.0);
    }
    assert!(animator.head().distance(target) < 0.01);
}

#[test]
fn resize_leaves_positions_alone() {
    let mut animator = animator();
    animator.activate();
    animator.pointer_moved(Vec2::new(100.0, 100.0));
    for _ in 0..30 {
        animator.update(1.0 / 60.0);
    }

    let before = snapshot(&animator);
    animator.resize(Viewport::new(1920, 1080));

    assert_eq!(snapshot(&animator), before);
    assert_eq!(animator.viewport(), Viewport::new(1920, 1080));
    assert_eq!(animator.target(), Vec2::new(100.0, 100.0));
}

#[test]
fn target_on_head_keeps_chain_still() {
    let mut animator = animator();
    animator.activate();
    let center = Vec2::new(400.0, 300.0);

    for _ in 0..100 {
        animator.update(1.0 / 60.0);
    }

    assert_eq!(animator.head(), center);
    assert!(animator.segments().iter().all(|&p| p == center));
}

#[test]
fn time_scaled_easing_depends_on_dt() {
    let config =
        AnimatorConfig::new().with_easing_mode(EasingMode::TimeScaled { reference_hz: 60.0 });
    let mut animator = ChainAnimator::new(config, Viewport::new(800, 600)).unwrap();
    animator.activate();
    let target = Vec2::new(500.0, 300.0);
    animator.pointer_moved(target);

    animator.update(0.0);
    assert_eq!(animator.head(), Vec2::new(400.0, 300.0));

    animator.update(1.0 / 60.0);
    assert!((animator.head().x - 405.0).abs() < 1e-3);

    // Half a reference frame moves less than a full one would.
    let before = animator.head();
    animator.update(1.0 / 120.0);
    let half_step = animator.head().x - before.x;
    assert!(half_step > 0.0 && half_step < (target.x - before.x) * 0.05);
}

#[test]
fn eye_leans_toward_target() {
    let mut animator = animator();
    let head = animator.head();
    assert_eq!(animator.eye_position(), head + Vec2::new(6.0, -5.0));

    animator.set_target(head + Vec2::new(200.0, 0.0));
    let eye = animator.eye_position();
    assert!((eye - (head + Vec2::new(9.0, -5.0))).length() < 1e-4, "eye at {eye:?}");
}
