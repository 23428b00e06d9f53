//! Hand landmark frames as produced by an external detector.
//!
//! Points are in image-normalized space: x and y in \[0, 1\] with y growing
//! downwards, z a relative depth the core never reads.

use glam::{Vec2, Vec3};
use smallvec::SmallVec;

pub const LANDMARK_COUNT: usize = 21;

pub const WRIST: usize = 0;
pub const THUMB_TIP: usize = 4;
pub const INDEX_TIP: usize = 8;
pub const PALM: usize = 9;
pub const MIDDLE_TIP: usize = 12;
pub const RING_TIP: usize = 16;
pub const PINKY_TIP: usize = 20;

/// One detector observation for a single hand.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LandmarkFrame {
    pub points: SmallVec<[Vec3; LANDMARK_COUNT]>,
}

impl LandmarkFrame {
    pub fn new(points: impl IntoIterator<Item = Vec3>) -> Self {
        Self {
            points: points.into_iter().collect(),
        }
    }

    /// A frame is only usable when the detector produced the full skeleton.
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.points.len() >= LANDMARK_COUNT
    }

    #[inline]
    pub fn planar(&self, index: usize) -> Option<Vec2> {
        self.points.get(index).map(|p| p.truncate())
    }

    /// Palm position (landmark 9) in image-normalized coordinates.
    #[inline]
    pub fn palm(&self) -> Option<Vec2> {
        self.planar(PALM)
    }

    /// Build a plausible skeleton for `pose` centred on `palm`.
    ///
    /// Used by the simulated camera and by tests; fingertip offsets are chosen
    /// so each pose lands clearly on one side of the classifier thresholds.
    pub fn posed(pose: HandPose, palm: Vec2) -> Self {
        let wrist = palm + Vec2::new(0.0, 0.2);
        let (thumb, index, middle, ring) = match pose {
            HandPose::Relaxed => (
                Vec2::new(-0.16, -0.1),
                Vec2::new(-0.03, -0.14),
                Vec2::new(0.0, -0.15),
                Vec2::new(0.03, -0.13),
            ),
            HandPose::Pinch => (
                Vec2::new(-0.06, -0.14),
                Vec2::new(-0.05, -0.15),
                Vec2::new(0.0, -0.16),
                Vec2::new(0.03, -0.13),
            ),
            HandPose::Peace => (
                Vec2::new(-0.14, -0.1),
                Vec2::new(-0.05, -0.35),
                Vec2::new(0.05, -0.35),
                Vec2::new(0.03, -0.12),
            ),
            HandPose::Open => (
                Vec2::new(-0.18, -0.2),
                Vec2::new(-0.04, -0.42),
                Vec2::new(0.02, -0.44),
                Vec2::new(0.06, -0.4),
            ),
        };

        let mut points: SmallVec<[Vec3; LANDMARK_COUNT]> =
            SmallVec::from_elem(wrist.extend(0.0), LANDMARK_COUNT);
        // Joints are spaced evenly from wrist to tip; only tips and palm are read.
        let fingers = [
            (THUMB_TIP, thumb),
            (INDEX_TIP, index),
            (MIDDLE_TIP, middle),
            (RING_TIP, ring),
            (PINKY_TIP, ring),
        ];
        for (tip_index, offset) in fingers {
            for joint in 1..=4 {
                let f = joint as f32 / 4.0;
                points[tip_index - 4 + joint] = (wrist + offset * f).extend(0.0);
            }
        }
        points[PALM] = palm.extend(0.0);
        Self { points }
    }
}

/// Canonical poses the simulator can synthesize.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HandPose {
    Relaxed,
    Pinch,
    Peace,
    Open,
}
