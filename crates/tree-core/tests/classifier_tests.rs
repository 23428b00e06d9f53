// Host-side tests for landmark classification.

use glam::{Vec2, Vec3};
use tree_core::*;

fn desktop() -> GestureTuning {
    GestureTuning::for_platform(Platform::Desktop)
}

fn mobile() -> GestureTuning {
    GestureTuning::for_platform(Platform::Mobile)
}

fn read(pose: HandPose, tuning: &GestureTuning) -> HandReading {
    let frame = LandmarkFrame::posed(pose, Vec2::new(0.4, 0.6));
    classify(Some(&frame), tuning).expect("complete frame classifies")
}

#[test]
fn no_frame_is_no_hand() {
    assert!(classify(None, &desktop()).is_none());
}

#[test]
fn truncated_frame_is_no_hand() {
    let frame = LandmarkFrame::new(vec![Vec3::ZERO; 12]);
    assert!(!frame.is_complete());
    assert!(classify(Some(&frame), &desktop()).is_none());
}

#[test]
fn palm_comes_from_landmark_nine() {
    let frame = LandmarkFrame::posed(HandPose::Relaxed, Vec2::new(0.25, 0.7));
    let reading = classify(Some(&frame), &desktop()).unwrap();
    assert_eq!(reading.palm, Vec2::new(0.25, 0.7));
}

#[test]
fn relaxed_hand_has_no_gesture_on_either_platform() {
    for tuning in [desktop(), mobile()] {
        let r = read(HandPose::Relaxed, &tuning);
        assert_eq!(r.gestures, GestureCandidates::default(), "{tuning:?}");
    }
}

#[test]
fn posed_hands_classify_as_their_pose() {
    let t = desktop();
    let pinch = read(HandPose::Pinch, &t).gestures;
    assert!(pinch.pinch && !pinch.peace_sign && !pinch.open_hand);

    let peace = read(HandPose::Peace, &t).gestures;
    assert!(peace.peace_sign && !peace.pinch && !peace.open_hand);

    let open = read(HandPose::Open, &t).gestures;
    assert!(open.open_hand && !open.pinch && !open.peace_sign);
}

#[test]
fn pinch_threshold_depends_on_platform() {
    let f = HandFeatures {
        pinch_dist: 0.10,
        index_dist: 0.15,
        middle_dist: 0.15,
        ring_dist: 0.15,
    };
    assert!(!candidates(&f, &desktop()).pinch);
    assert!(candidates(&f, &mobile()).pinch);
}

#[test]
fn pinch_threshold_is_strict() {
    let f = HandFeatures {
        pinch_dist: PINCH_THRESHOLD_DESKTOP,
        ..Default::default()
    };
    assert!(!candidates(&f, &desktop()).pinch);
}

#[test]
fn peace_needs_curled_ring_finger() {
    let mut f = HandFeatures {
        pinch_dist: 0.3,
        index_dist: 0.33,
        middle_dist: 0.33,
        ring_dist: 0.2,
    };
    assert!(candidates(&f, &desktop()).peace_sign);
    f.ring_dist = 0.33;
    assert!(!candidates(&f, &desktop()).peace_sign);
}

#[test]
fn candidates_are_independent() {
    // A wide open hand with a curled ring finger reads as both peace and open.
    let f = HandFeatures {
        pinch_dist: 0.3,
        index_dist: 0.45,
        middle_dist: 0.45,
        ring_dist: 0.1,
    };
    let g = candidates(&f, &desktop());
    assert!(g.peace_sign && g.open_hand);
}

#[test]
fn open_hand_uses_mean_of_index_and_middle() {
    let f = HandFeatures {
        pinch_dist: 0.3,
        index_dist: 0.30,
        middle_dist: 0.50,
        ring_dist: 0.4,
    };
    assert!(candidates(&f, &desktop()).open_hand);
}

#[test]
fn platform_tuning_values() {
    assert_eq!(desktop().pinch_release_delay, 5);
    assert_eq!(mobile().pinch_release_delay, 10);
    assert_eq!(GestureTuning::default(), desktop());
}
