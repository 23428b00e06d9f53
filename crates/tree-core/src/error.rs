use thiserror::Error;

/// Why the hand detector could not start.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DetectorInitError {
    #[error("camera is busy")]
    DeviceBusy,
    #[error("camera permission denied")]
    PermissionDenied,
    #[error("no camera found")]
    NotFound,
    #[error("detector failed to start: {0}")]
    Other(String),
}

/// A single detection call failed; the tick is treated as "no hand".
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DetectError {
    #[error("detector backend error: {0}")]
    Backend(String),
    #[error("detector used before it was ready")]
    NotReady,
}

/// Terminal detector state after which the scene runs without gestures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InitFailure {
    #[error(transparent)]
    Failed(#[from] DetectorInitError),
    #[error("detector did not start within {0} ms")]
    TimedOut(u64),
}

impl InitFailure {
    /// User-facing, non-fatal notice.
    pub fn advisory(&self) -> &'static str {
        match self {
            Self::Failed(DetectorInitError::DeviceBusy) => {
                "Camera is in use by another application; running without gestures."
            }
            Self::Failed(DetectorInitError::PermissionDenied) => {
                "Camera permission denied; running without gestures."
            }
            Self::Failed(DetectorInitError::NotFound) => {
                "No camera found; running without gestures."
            }
            Self::Failed(DetectorInitError::Other(_)) => {
                "Hand tracking failed to start; running without gestures."
            }
            Self::TimedOut(_) => "Hand tracking timed out; running without gestures.",
        }
    }
}
