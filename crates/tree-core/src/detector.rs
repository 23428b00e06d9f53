//! Hand detector collaborator and its asynchronous start-up.
//!
//! Detector start-up can take seconds (model load, camera permission), so it
//! runs on its own thread and the frame loop polls for the result. The scene
//! animates the whole time; if start-up fails or exceeds the timeout the
//! session simply never receives hand input.

use crate::error::{DetectError, DetectorInitError, InitFailure};
use crate::landmarks::LandmarkFrame;
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;

/// Anything that turns camera frames into hand landmarks.
pub trait HandDetector: Send + 'static {
    /// Acquire the camera and load the model. Called once, off the frame loop.
    fn init(&mut self) -> Result<(), DetectorInitError>;

    /// Timestamp of the newest camera frame, if any frame has arrived yet.
    fn latest_frame_timestamp(&self) -> Option<u64>;

    /// Detect on the newest frame. `Ok(None)` means no hand in view.
    fn detect(&mut self) -> Result<Option<LandmarkFrame>, DetectError>;

    /// Release the camera. Called on teardown and on failed start-up.
    fn shutdown(&mut self) {}
}

type InitResult = (Box<dyn HandDetector>, Result<(), DetectorInitError>);

pub enum DetectorLink {
    Pending {
        rx: Receiver<InitResult>,
        started_ms: u64,
        timeout_ms: u64,
    },
    Ready(Box<dyn HandDetector>),
    Unavailable(InitFailure),
    Stopped,
}

impl DetectorLink {
    /// Start `detector` on a background thread.
    pub fn spawn<D: HandDetector>(detector: D, now_ms: u64, timeout_ms: u64) -> Self {
        let (tx, rx) = mpsc::channel::<InitResult>();
        let spawned = thread::Builder::new()
            .name("hand-detector-init".into())
            .spawn(move || {
                let mut detector: Box<dyn HandDetector> = Box::new(detector);
                let result = detector.init();
                // The frame loop gave up on us; release the camera ourselves.
                if let Err(mpsc::SendError((mut late, _))) = tx.send((detector, result)) {
                    late.shutdown();
                }
            });
        match spawned {
            Ok(_) => {
                log::info!("[detector] starting (timeout {timeout_ms} ms)");
                Self::Pending {
                    rx,
                    started_ms: now_ms,
                    timeout_ms,
                }
            }
            Err(e) => Self::fail(DetectorInitError::Other(e.to_string()).into()),
        }
    }

    /// Already-initialized detector (tests, synchronous backends).
    pub fn ready<D: HandDetector>(detector: D) -> Self {
        Self::Ready(Box::new(detector))
    }

    /// No detector at all; visuals only.
    pub fn none() -> Self {
        Self::Unavailable(DetectorInitError::NotFound.into())
    }

    fn fail(failure: InitFailure) -> Self {
        log::warn!("[detector] unavailable: {failure} - {}", failure.advisory());
        Self::Unavailable(failure)
    }

    /// Resolve a pending start-up, if it finished or timed out.
    pub fn poll(&mut self, now_ms: u64) {
        let Self::Pending {
            rx,
            started_ms,
            timeout_ms,
        } = self
        else {
            return;
        };
        let next = match rx.try_recv() {
            Ok((detector, Ok(()))) => {
                log::info!("[detector] ready");
                Self::Ready(detector)
            }
            Ok((mut detector, Err(e))) => {
                detector.shutdown();
                Self::fail(e.into())
            }
            Err(TryRecvError::Empty) => {
                if now_ms.saturating_sub(*started_ms) < *timeout_ms {
                    return;
                }
                Self::fail(InitFailure::TimedOut(*timeout_ms))
            }
            Err(TryRecvError::Disconnected) => Self::fail(
                DetectorInitError::Other("init thread exited without reporting".into()).into(),
            ),
        };
        *self = next;
    }

    pub fn detector_mut(&mut self) -> Option<&mut (dyn HandDetector + 'static)> {
        match self {
            Self::Ready(d) => Some(d.as_mut()),
            _ => None,
        }
    }

    pub fn failure(&self) -> Option<&InitFailure> {
        match self {
            Self::Unavailable(f) => Some(f),
            _ => None,
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending { .. })
    }

    /// Release the camera and stop delivering frames.
    pub fn shutdown(&mut self) {
        if let Self::Ready(d) = self {
            d.shutdown();
            log::info!("[detector] camera released");
        }
        *self = Self::Stopped;
    }
}
