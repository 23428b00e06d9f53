//! Gesture debouncing and display-mode state machine.
//!
//! The controller itself only holds tuning; all mutable state lives in
//! [`GestureState`] inside the session so the animation side can read it
//! without reaching into the controller.

use crate::classifier::{classify, GestureTuning, HandReading};
use crate::constants::*;
use crate::landmarks::LandmarkFrame;
use crate::resolver::FocusView;
use glam::Vec2;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum DisplayMode {
    #[default]
    Tree,
    Scatter,
    Focus,
}

impl DisplayMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Tree => "tree",
            Self::Scatter => "scatter",
            Self::Focus => "focus",
        }
    }
}

/// Short text shown to the user after a gesture fires.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GestureLabel {
    FocusPhoto,
    TreeMode,
    GalleryMode,
}

impl GestureLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FocusPhoto => "Pinch: focus photo",
            Self::TreeMode => "Peace: tree mode",
            Self::GalleryMode => "Open hand: gallery mode",
        }
    }
}

#[derive(Clone, Debug)]
pub struct GestureState {
    pub mode: DisplayMode,
    pub focus_target: usize,
    pub is_grabbing: bool,
    pub pinch_release_count: u32,
    /// `None` until the first gesture fires, so nothing is on cooldown at start.
    pub last_gesture_at: Option<u64>,
    pub last_palm_x: f32,
    /// Smoothed scene rotation: x = pitch, y = yaw (radians).
    pub rotation_offset: Vec2,
    pub label: Option<GestureLabel>,
    pub label_clear_at: Option<u64>,
    pub hand_detected: bool,
    presence_changed_at: Option<u64>,
}

impl Default for GestureState {
    fn default() -> Self {
        Self {
            mode: DisplayMode::Tree,
            focus_target: 0,
            is_grabbing: false,
            pinch_release_count: 0,
            last_gesture_at: None,
            last_palm_x: 0.5,
            rotation_offset: Vec2::ZERO,
            label: None,
            label_clear_at: None,
            hand_detected: false,
            presence_changed_at: None,
        }
    }
}

impl GestureState {
    #[inline]
    pub fn cooled_down(&self, now_ms: u64, window_ms: u64) -> bool {
        self.last_gesture_at
            .map_or(true, |t| now_ms.saturating_sub(t) > window_ms)
    }

    fn mark_gesture(&mut self, now_ms: u64) {
        self.last_gesture_at = Some(now_ms);
    }

    fn show_label(&mut self, label: GestureLabel) {
        if self.label != Some(label) {
            log::debug!("[gesture] {}", label.as_str());
        }
        self.label = Some(label);
        self.label_clear_at = None;
    }

    fn set_presence(&mut self, present: bool, now_ms: u64) {
        if self.hand_detected == present {
            return;
        }
        let throttled = self
            .presence_changed_at
            .is_some_and(|t| now_ms.saturating_sub(t) <= PRESENCE_THROTTLE_MS);
        if !throttled {
            self.hand_detected = present;
            self.presence_changed_at = Some(now_ms);
        }
    }

    /// Select a frame directly (photo ingestion); keeps the index in range.
    pub fn focus_on(&mut self, index: usize, focusable_count: usize) {
        if focusable_count == 0 {
            return;
        }
        self.focus_target = index % focusable_count;
        self.mode = DisplayMode::Focus;
    }
}

/// What a single tick changed; handy for logging and tests.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TickOutcome {
    pub hand: bool,
    pub grabbed: bool,
    pub released: bool,
    pub mode_changed: bool,
    pub swiped: bool,
}

#[derive(Clone, Debug, Default)]
pub struct ModeController {
    pub tuning: GestureTuning,
}

impl ModeController {
    pub fn new(tuning: GestureTuning) -> Self {
        Self { tuning }
    }

    /// Advance the state machine by one detection tick.
    pub fn tick(
        &self,
        state: &mut GestureState,
        now_ms: u64,
        frame: Option<&LandmarkFrame>,
        focusables: &FocusView<'_>,
    ) -> TickOutcome {
        // The clear deadline is checked on every tick, hand or not.
        if state.label_clear_at.is_some_and(|t| now_ms >= t) {
            state.label = None;
            state.label_clear_at = None;
        }

        match classify(frame, &self.tuning) {
            Some(reading) => {
                state.set_presence(true, now_ms);
                self.on_hand(state, now_ms, &reading, focusables)
            }
            None => {
                state.set_presence(false, now_ms);
                if state.label.is_some() && state.label_clear_at.is_none() {
                    state.label_clear_at = Some(now_ms + LABEL_CLEAR_DELAY_MS);
                }
                TickOutcome::default()
            }
        }
    }

    fn on_hand(
        &self,
        state: &mut GestureState,
        now_ms: u64,
        reading: &HandReading,
        focusables: &FocusView<'_>,
    ) -> TickOutcome {
        let mut out = TickOutcome {
            hand: true,
            ..Default::default()
        };
        let palm = reading.palm;
        let gestures = reading.gestures;
        let mode_before = state.mode;

        let target = Vec2::new(
            (palm.y - 0.5) * ROTATION_PITCH_SPAN,
            (palm.x - 0.5) * ROTATION_YAW_SPAN,
        );
        state.rotation_offset += (target - state.rotation_offset) * ROTATION_SMOOTHING;

        // 1. Pinch grabs; it has its own, shorter cooldown.
        if gestures.pinch {
            state.pinch_release_count = 0;
            if !state.is_grabbing && state.cooled_down(now_ms, PINCH_COOLDOWN_MS) {
                if let Some(index) = focusables.nearest_to(palm) {
                    state.focus_target = index % focusables.len();
                    state.mode = DisplayMode::Focus;
                    state.is_grabbing = true;
                    state.mark_gesture(now_ms);
                    state.show_label(GestureLabel::FocusPhoto);
                    out.grabbed = true;
                }
            }
        } else if state.is_grabbing {
            state.pinch_release_count += 1;
            if state.pinch_release_count >= self.tuning.pinch_release_delay {
                state.is_grabbing = false;
                state.pinch_release_count = 0;
                out.released = true;
            }
        }

        // 2. Mode switches.
        if state.cooled_down(now_ms, MODE_SWITCH_COOLDOWN_MS) {
            if gestures.peace_sign {
                state.mode = DisplayMode::Tree;
                state.mark_gesture(now_ms);
                state.show_label(GestureLabel::TreeMode);
            } else if gestures.open_hand && state.mode != DisplayMode::Scatter {
                state.mode = DisplayMode::Scatter;
                state.mark_gesture(now_ms);
                state.show_label(GestureLabel::GalleryMode);
            }
        }

        // 3. Carousel swipe. Moving the palm right steps backwards.
        if state.mode == DisplayMode::Focus
            && !state.is_grabbing
            && state.cooled_down(now_ms, SWIPE_COOLDOWN_MS)
        {
            let delta_x = palm.x - state.last_palm_x;
            if delta_x.abs() > SWIPE_MIN_DELTA_X {
                let count = focusables.len();
                if count > 0 {
                    let step = if delta_x > 0.0 { count - 1 } else { 1 };
                    state.focus_target = (state.focus_target % count + step) % count;
                    out.swiped = true;
                }
                state.mark_gesture(now_ms);
            }
        }

        // 4.
        state.last_palm_x = palm.x;

        if state.mode != mode_before {
            log::info!(
                "[mode] {} -> {} (target #{})",
                mode_before.as_str(),
                state.mode.as_str(),
                state.focus_target
            );
            out.mode_changed = true;
        }
        out
    }
}
