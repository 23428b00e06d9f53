// Host-side tests for nearest-target resolution.

use glam::{Vec2, Vec3};
use tree_core::*;

fn candidate(index: usize, x: f32, y: f32, distance: f32) -> FocusCandidate {
    FocusCandidate {
        index,
        screen: Vec2::new(x, y),
        camera_distance: distance,
    }
}

#[test]
fn closer_on_screen_wins_at_equal_depth() {
    let hand = Vec2::new(0.4, 0.5);
    let picked = resolve_nearest(
        hand,
        [candidate(0, 0.7, 0.5, 20.0), candidate(1, 0.4, 0.5, 20.0)],
    );
    assert_eq!(picked, Some(1));
}

#[test]
fn depth_is_weighted_against_screen_distance() {
    let hand = Vec2::new(0.5, 0.5);
    // 3 * 10 + 50 * 0.3 = 45 vs 3 * 20 + 0 = 60
    let picked = resolve_nearest(
        hand,
        [candidate(0, 0.5, 0.5, 20.0), candidate(1, 0.5, 0.2 + 0.6, 10.0)],
    );
    // Second candidate sits outside the vertical window.
    assert_eq!(picked, Some(0));

    let picked = resolve_nearest(
        hand,
        [candidate(0, 0.5, 0.5, 20.0), candidate(1, 0.78, 0.5, 10.0)],
    );
    assert_eq!(picked, Some(1));
}

#[test]
fn window_bounds_are_exclusive() {
    let hand = Vec2::new(0.5, 0.5);
    for (x, y) in [(0.2, 0.5), (0.8, 0.5), (0.5, 0.35), (0.5, 0.65)] {
        assert_eq!(resolve_nearest(hand, [candidate(0, x, y, 10.0)]), None, "({x}, {y})");
    }
    assert_eq!(resolve_nearest(hand, [candidate(0, 0.21, 0.36, 10.0)]), Some(0));
}

#[test]
fn empty_set_resolves_to_none() {
    assert_eq!(resolve_nearest(Vec2::splat(0.5), Vec::<FocusCandidate>::new()), None);
}

#[test]
fn ties_keep_the_first_candidate() {
    let hand = Vec2::new(0.5, 0.5);
    let picked = resolve_nearest(
        hand,
        [candidate(4, 0.375, 0.5, 10.0), candidate(2, 0.625, 0.5, 10.0)],
    );
    assert_eq!(picked, Some(4));
}

#[test]
fn camera_projects_center_of_view_to_screen_center() {
    let cam = Camera::default();
    let s = cam.project(Vec3::new(0.0, 0.0, 0.0));
    assert!((s - Vec2::splat(0.5)).length() < 1e-5);

    // Screen y grows downward, like landmark coordinates.
    let above = cam.project(Vec3::new(0.0, 5.0, 0.0));
    assert!(above.y < 0.5);
    let right = cam.project(Vec3::new(5.0, 0.0, 0.0));
    assert!(right.x > 0.5);
}

#[test]
fn focus_view_prefers_frame_under_the_hand() {
    let cam = Camera::default();
    let worlds = [Vec3::new(-6.0, 0.0, 0.0), Vec3::new(6.0, 0.0, 0.0)];
    let view = FocusView {
        world_positions: &worlds,
        projector: &cam,
    };
    assert_eq!(view.len(), 2);

    let right_hand = cam.project(worlds[1]);
    assert_eq!(view.nearest_to(right_hand), Some(1));
    let left_hand = cam.project(worlds[0]);
    assert_eq!(view.nearest_to(left_hand), Some(0));
}

#[test]
fn candidate_distance_is_measured_from_eye() {
    let cam = Camera::default();
    let c = FocusCandidate::project(3, Vec3::new(0.0, 0.0, 36.0), &cam);
    assert_eq!(c.index, 3);
    assert!((c.camera_distance - 14.0).abs() < 1e-4);
    assert!(c.is_visible());
}
