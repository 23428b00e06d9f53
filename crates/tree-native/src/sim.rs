//! Simulated camera: mouse position is the palm, held keys pick the pose.

use glam::Vec2;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};
use tree_core::{DetectError, DetectorInitError, HandDetector, HandPose, LandmarkFrame};

const FRAME_INTERVAL_MS: u64 = 33; // ~30 fps camera

/// Shared between the window event handler and the detector.
#[derive(Clone, Copy, Debug)]
pub struct SimInput {
    pub palm: Vec2,
    pub present: bool,
    pub pinch: bool,
    pub peace: bool,
    pub open: bool,
}

impl Default for SimInput {
    fn default() -> Self {
        Self {
            palm: Vec2::splat(0.5),
            present: false,
            pinch: false,
            peace: false,
            open: false,
        }
    }
}

impl SimInput {
    pub fn pose(&self) -> HandPose {
        if self.pinch {
            HandPose::Pinch
        } else if self.peace {
            HandPose::Peace
        } else if self.open {
            HandPose::Open
        } else {
            HandPose::Relaxed
        }
    }
}

/// How the fake camera behaves at start-up.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CameraBehaviour {
    #[default]
    Working,
    Missing,
    Busy,
    Denied,
    /// Never finishes starting; exercises the init timeout.
    Hang,
}

impl CameraBehaviour {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "ok" | "working" => Some(Self::Working),
            "missing" => Some(Self::Missing),
            "busy" => Some(Self::Busy),
            "denied" => Some(Self::Denied),
            "hang" => Some(Self::Hang),
            _ => None,
        }
    }
}

pub struct SimulatedCamera {
    input: Arc<Mutex<SimInput>>,
    behaviour: CameraBehaviour,
    opened_at: Option<Instant>,
}

impl SimulatedCamera {
    pub fn new(input: Arc<Mutex<SimInput>>, behaviour: CameraBehaviour) -> Self {
        Self {
            input,
            behaviour,
            opened_at: None,
        }
    }
}

impl HandDetector for SimulatedCamera {
    fn init(&mut self) -> Result<(), DetectorInitError> {
        match self.behaviour {
            CameraBehaviour::Working => {
                // Model load
                std::thread::sleep(Duration::from_millis(300));
                self.opened_at = Some(Instant::now());
                Ok(())
            }
            CameraBehaviour::Missing => Err(DetectorInitError::NotFound),
            CameraBehaviour::Busy => Err(DetectorInitError::DeviceBusy),
            CameraBehaviour::Denied => Err(DetectorInitError::PermissionDenied),
            CameraBehaviour::Hang => {
                std::thread::sleep(Duration::from_secs(60));
                Err(DetectorInitError::Other("simulated camera hung".into()))
            }
        }
    }

    fn latest_frame_timestamp(&self) -> Option<u64> {
        let opened = self.opened_at?;
        Some(opened.elapsed().as_millis() as u64 / FRAME_INTERVAL_MS)
    }

    fn detect(&mut self) -> Result<Option<LandmarkFrame>, DetectError> {
        let input = *self
            .input
            .lock()
            .map_err(|e| DetectError::Backend(e.to_string()))?;
        if !input.present {
            return Ok(None);
        }
        Ok(Some(LandmarkFrame::posed(input.pose(), input.palm)))
    }

    fn shutdown(&mut self) {
        if self.opened_at.take().is_some() {
            log::info!("[sim-camera] stream closed");
        }
    }
}
