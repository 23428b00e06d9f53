//! Session context and the explicit frame driver.
//!
//! One [`SessionContext`] holds all mutable scene state. The [`FrameDriver`]
//! owns the clock, the controller and the detector link, and steps the
//! context once per display refresh. Tests drive it with a manual clock.

use crate::animation::AnimationEngine;
use crate::clock::Clock;
use crate::config::SceneConfig;
use crate::controller::{DisplayMode, GestureState, ModeController, TickOutcome};
use crate::detector::DetectorLink;
use crate::error::InitFailure;
use crate::resolver::FocusView;
use crate::rig::CameraRig;
use glam::{EulerRot, Quat, Vec3};

pub struct SessionContext {
    pub config: SceneConfig,
    pub gesture: GestureState,
    pub rig: CameraRig,
    pub scene: AnimationEngine,
}

impl SessionContext {
    pub fn new(config: SceneConfig) -> Self {
        let scene = AnimationEngine::new(&config);
        Self {
            config,
            gesture: GestureState::default(),
            rig: CameraRig::default(),
            scene,
        }
    }

    /// Append a photo and bring it into focus.
    pub fn ingest_photo(&mut self) -> usize {
        let index = self.scene.add_photo();
        self.gesture.focus_on(index, self.scene.frame_count());
        log::info!("[photos] added #{index}, {} total", self.scene.frame_count());
        index
    }

    /// Rotation of the whole scene group, driven by the palm.
    pub fn scene_rotation(&self) -> Quat {
        let r = self.gesture.rotation_offset;
        Quat::from_euler(EulerRot::XYZ, r.x, r.y, 0.0)
    }

    /// Photo frame positions in world space (scene rotation applied).
    pub fn focusable_world_positions(&self) -> Vec<Vec3> {
        let rotation = self.scene_rotation();
        self.scene
            .frames
            .iter()
            .map(|f| rotation * f.transform.position)
            .collect()
    }

    /// Advance the rig and every element for the current mode.
    pub fn animate(&mut self, time: f32) {
        let mode = self.gesture.mode;
        self.rig.update(mode, time);
        self.scene.update(mode, self.gesture.focus_target, time);
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameReport {
    pub now_ms: u64,
    pub mode: DisplayMode,
    /// `None` when detection was skipped this frame.
    pub detection: Option<TickOutcome>,
}

pub struct FrameDriver<C: Clock> {
    clock: C,
    controller: ModeController,
    detector: DetectorLink,
    last_frame_ts: Option<u64>,
    running: bool,
}

impl<C: Clock> FrameDriver<C> {
    pub fn new(clock: C, controller: ModeController, detector: DetectorLink) -> Self {
        Self {
            clock,
            controller,
            detector,
            last_frame_ts: None,
            running: true,
        }
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn detector_failure(&self) -> Option<&InitFailure> {
        self.detector.failure()
    }

    pub fn detector_pending(&self) -> bool {
        self.detector.is_pending()
    }

    /// Run one frame: detection (when a new camera frame exists), then animation.
    pub fn step(&mut self, ctx: &mut SessionContext) -> Option<FrameReport> {
        if !self.running {
            return None;
        }
        let now_ms = self.clock.now_ms();
        self.detector.poll(now_ms);
        let detection = self.detect(ctx, now_ms);
        ctx.animate(now_ms as f32 / 1000.0);
        Some(FrameReport {
            now_ms,
            mode: ctx.gesture.mode,
            detection,
        })
    }

    fn detect(&mut self, ctx: &mut SessionContext, now_ms: u64) -> Option<TickOutcome> {
        let detector = self.detector.detector_mut()?;
        let ts = detector.latest_frame_timestamp()?;
        if self.last_frame_ts == Some(ts) {
            return None;
        }
        self.last_frame_ts = Some(ts);

        let frame = match detector.detect() {
            Ok(frame) => frame,
            Err(e) => {
                log::warn!("[detector] frame {ts}: {e}");
                None
            }
        };
        let world = ctx.focusable_world_positions();
        let view = FocusView {
            world_positions: &world,
            projector: &ctx.rig.camera,
        };
        Some(
            self.controller
                .tick(&mut ctx.gesture, now_ms, frame.as_ref(), &view),
        )
    }

    /// Release the camera and stop ticking.
    pub fn shutdown(&mut self) {
        if self.running {
            self.running = false;
            self.detector.shutdown();
        }
    }
}
