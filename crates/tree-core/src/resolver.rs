//! Picks the photo frame a pinching hand most plausibly points at.

use crate::constants::*;
use glam::{Vec2, Vec3};

/// Anything that can place world points on the normalized screen.
///
/// Screen coordinates follow the landmark convention: x right, y down,
/// both in \[0, 1\] across the viewport.
pub trait ScreenProjector {
    fn project(&self, world: Vec3) -> Vec2;
    fn eye(&self) -> Vec3;
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FocusCandidate {
    pub index: usize,
    pub screen: Vec2,
    pub camera_distance: f32,
}

impl FocusCandidate {
    pub fn project(index: usize, world: Vec3, projector: &dyn ScreenProjector) -> Self {
        Self {
            index,
            screen: projector.project(world),
            camera_distance: world.distance(projector.eye()),
        }
    }

    #[inline]
    pub fn is_visible(&self) -> bool {
        self.screen.x > VISIBLE_X_MIN
            && self.screen.x < VISIBLE_X_MAX
            && self.screen.y > VISIBLE_Y_MIN
            && self.screen.y < VISIBLE_Y_MAX
    }

    #[inline]
    pub fn score(&self, hand: Vec2) -> f32 {
        DEPTH_WEIGHT * self.camera_distance + SCREEN_WEIGHT * self.screen.distance(hand)
    }
}

/// World positions of the focusable set as seen through the active camera.
pub struct FocusView<'a> {
    pub world_positions: &'a [Vec3],
    pub projector: &'a dyn ScreenProjector,
}

impl<'a> FocusView<'a> {
    #[inline]
    pub fn len(&self) -> usize {
        self.world_positions.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.world_positions.is_empty()
    }

    pub fn candidates(&self) -> impl Iterator<Item = FocusCandidate> + '_ {
        self.world_positions
            .iter()
            .enumerate()
            .map(|(i, w)| FocusCandidate::project(i, *w, self.projector))
    }

    pub fn nearest_to(&self, hand: Vec2) -> Option<usize> {
        resolve_nearest(hand, self.candidates())
    }
}

/// Lowest-scoring visible candidate, or `None` when nothing is in the window.
///
/// Ties keep the earlier candidate.
pub fn resolve_nearest(
    hand: Vec2,
    candidates: impl IntoIterator<Item = FocusCandidate>,
) -> Option<usize> {
    let mut best: Option<(usize, f32)> = None;
    for c in candidates.into_iter().filter(FocusCandidate::is_visible) {
        let score = c.score(hand);
        if best.map_or(true, |(_, s)| score < s) {
            best = Some((c.index, score));
        }
    }
    if let Some((index, score)) = best {
        log::debug!("[resolver] hand=({:.2},{:.2}) -> #{index} score={score:.1}", hand.x, hand.y);
    }
    best.map(|(i, _)| i)
}
