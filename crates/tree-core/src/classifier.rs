use crate::constants::*;
use crate::landmarks::{LandmarkFrame, INDEX_TIP, MIDDLE_TIP, RING_TIP, THUMB_TIP, WRIST};
use glam::Vec2;

/// Device class; picks the pinch tunables.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Platform {
    #[default]
    Desktop,
    Mobile,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureTuning {
    pub pinch_threshold: f32,
    pub pinch_release_delay: u32,
}

impl GestureTuning {
    pub fn for_platform(platform: Platform) -> Self {
        match platform {
            Platform::Desktop => Self {
                pinch_threshold: PINCH_THRESHOLD_DESKTOP,
                pinch_release_delay: PINCH_RELEASE_DELAY_DESKTOP,
            },
            Platform::Mobile => Self {
                pinch_threshold: PINCH_THRESHOLD_MOBILE,
                pinch_release_delay: PINCH_RELEASE_DELAY_MOBILE,
            },
        }
    }
}

impl Default for GestureTuning {
    fn default() -> Self {
        Self::for_platform(Platform::Desktop)
    }
}

/// Planar distances measured on one frame.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct HandFeatures {
    pub pinch_dist: f32,
    pub index_dist: f32,
    pub middle_dist: f32,
    pub ring_dist: f32,
}

/// Gesture candidates; independent, the controller decides precedence.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GestureCandidates {
    pub pinch: bool,
    pub peace_sign: bool,
    pub open_hand: bool,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HandReading {
    pub palm: Vec2,
    pub features: HandFeatures,
    pub gestures: GestureCandidates,
}

/// Classify one frame. `None` means no usable hand this tick.
pub fn classify(frame: Option<&LandmarkFrame>, tuning: &GestureTuning) -> Option<HandReading> {
    let frame = frame.filter(|f| f.is_complete())?;
    let wrist = frame.planar(WRIST)?;
    let thumb = frame.planar(THUMB_TIP)?;
    let index = frame.planar(INDEX_TIP)?;
    let middle = frame.planar(MIDDLE_TIP)?;
    let ring = frame.planar(RING_TIP)?;

    let features = HandFeatures {
        pinch_dist: thumb.distance(index),
        index_dist: index.distance(wrist),
        middle_dist: middle.distance(wrist),
        ring_dist: ring.distance(wrist),
    };
    Some(HandReading {
        palm: frame.palm()?,
        features,
        gestures: candidates(&features, tuning),
    })
}

#[inline]
pub fn candidates(f: &HandFeatures, tuning: &GestureTuning) -> GestureCandidates {
    GestureCandidates {
        pinch: f.pinch_dist < tuning.pinch_threshold,
        peace_sign: f.index_dist > FINGER_EXTENDED_DIST
            && f.middle_dist > FINGER_EXTENDED_DIST
            && f.ring_dist < RING_CURLED_DIST,
        open_hand: (f.index_dist + f.middle_dist) / 2.0 > OPEN_HAND_MEAN_DIST,
    }
}
