// Host-side tests for the frame driver and detector start-up.

use glam::Vec2;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tree_core::*;

type Script = Arc<Mutex<VecDeque<Result<Option<LandmarkFrame>, DetectError>>>>;

/// Detector that replays queued results; shared handles let tests poke it.
#[derive(Clone, Default)]
struct Scripted {
    timestamp: Arc<AtomicU64>,
    has_frame: Arc<AtomicBool>,
    script: Script,
    detect_calls: Arc<AtomicU64>,
    released: Arc<AtomicBool>,
    init_error: Option<DetectorInitError>,
}

impl Scripted {
    fn with_frame() -> Self {
        let s = Self::default();
        s.has_frame.store(true, Ordering::SeqCst);
        s.timestamp.store(1, Ordering::SeqCst);
        s
    }

    fn push(&self, result: Result<Option<LandmarkFrame>, DetectError>) {
        self.script.lock().unwrap().push_back(result);
    }

    fn next_frame(&self) {
        self.timestamp.fetch_add(1, Ordering::SeqCst);
    }
}

impl HandDetector for Scripted {
    fn init(&mut self) -> Result<(), DetectorInitError> {
        match self.init_error.clone() {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    fn latest_frame_timestamp(&self) -> Option<u64> {
        self.has_frame
            .load(Ordering::SeqCst)
            .then(|| self.timestamp.load(Ordering::SeqCst))
    }

    fn detect(&mut self) -> Result<Option<LandmarkFrame>, DetectError> {
        self.detect_calls.fetch_add(1, Ordering::SeqCst);
        self.script.lock().unwrap().pop_front().unwrap_or(Ok(None))
    }

    fn shutdown(&mut self) {
        self.released.store(true, Ordering::SeqCst);
    }
}

/// Never finishes `init` until the test drops the sender.
struct Hanging {
    gate: Mutex<mpsc::Receiver<()>>,
}

impl HandDetector for Hanging {
    fn init(&mut self) -> Result<(), DetectorInitError> {
        let _ = self.gate.lock().map(|rx| rx.recv());
        Err(DetectorInitError::Other("gate closed".into()))
    }
    fn latest_frame_timestamp(&self) -> Option<u64> {
        None
    }
    fn detect(&mut self) -> Result<Option<LandmarkFrame>, DetectError> {
        Err(DetectError::NotReady)
    }
}

fn driver(link: DetectorLink) -> (FrameDriver<ManualClock>, ManualClock, SessionContext) {
    let clock = ManualClock::starting_at(0);
    let config = SceneConfig::minimal();
    let controller = ModeController::new(config.tuning());
    let ctx = SessionContext::new(config);
    (FrameDriver::new(clock.clone(), controller, link), clock, ctx)
}

/// Step until the link stops pending, sleeping in real time for the init thread.
fn wait_for_link(driver: &mut FrameDriver<ManualClock>, ctx: &mut SessionContext) {
    for _ in 0..500 {
        driver.step(ctx);
        if !driver.detector_pending() {
            return;
        }
        std::thread::sleep(Duration::from_millis(5));
    }
    panic!("detector start-up never resolved");
}

#[test]
fn scene_animates_without_a_detector() {
    let (mut driver, clock, mut ctx) = driver(DetectorLink::none());
    let report = driver.step(&mut ctx).unwrap();
    assert_eq!(report.detection, None);
    assert_eq!(report.mode, DisplayMode::Tree);
    assert!(matches!(
        driver.detector_failure(),
        Some(InitFailure::Failed(DetectorInitError::NotFound))
    ));

    let burst = ctx.scene.burst();
    clock.advance(16);
    driver.step(&mut ctx).unwrap();
    assert!(ctx.scene.burst() < burst);
}

#[test]
fn detection_runs_once_per_camera_frame() {
    let det = Scripted::with_frame();
    let (mut driver, clock, mut ctx) = driver(DetectorLink::ready(det.clone()));

    assert!(driver.step(&mut ctx).unwrap().detection.is_some());
    clock.advance(16);
    assert!(driver.step(&mut ctx).unwrap().detection.is_none());
    assert_eq!(det.detect_calls.load(Ordering::SeqCst), 1);

    det.next_frame();
    clock.advance(16);
    assert!(driver.step(&mut ctx).unwrap().detection.is_some());
    assert_eq!(det.detect_calls.load(Ordering::SeqCst), 2);
}

#[test]
fn no_camera_frame_yet_skips_detection() {
    let det = Scripted::default();
    let (mut driver, _clock, mut ctx) = driver(DetectorLink::ready(det.clone()));
    assert!(driver.step(&mut ctx).unwrap().detection.is_none());
    assert_eq!(det.detect_calls.load(Ordering::SeqCst), 0);
}

#[test]
fn detect_error_counts_as_no_hand() {
    let det = Scripted::with_frame();
    det.push(Err(DetectError::Backend("inference failed".into())));
    let (mut driver, _clock, mut ctx) = driver(DetectorLink::ready(det.clone()));

    let outcome = driver.step(&mut ctx).unwrap().detection.unwrap();
    assert!(!outcome.hand);
    assert!(!ctx.gesture.hand_detected);
    assert!(driver.is_running());
}

#[test]
fn pinch_through_driver_focuses_greeting_card() {
    let det = Scripted::with_frame();
    det.push(Ok(Some(LandmarkFrame::posed(
        HandPose::Pinch,
        Vec2::new(0.5, 0.5),
    ))));
    let (mut driver, clock, mut ctx) = driver(DetectorLink::ready(det.clone()));
    clock.set(1_000);

    let report = driver.step(&mut ctx).unwrap();
    assert!(report.detection.unwrap().grabbed);
    assert_eq!(report.mode, DisplayMode::Focus);
    assert_eq!(ctx.gesture.focus_target, 0);
}

#[test]
fn spawned_detector_becomes_ready() {
    let det = Scripted::with_frame();
    let (mut driver, _clock, mut ctx) = driver(DetectorLink::spawn(det.clone(), 0, 60_000));
    assert!(driver.detector_pending());
    wait_for_link(&mut driver, &mut ctx);
    assert!(driver.detector_failure().is_none());
}

#[test]
fn failed_start_releases_camera_and_advises() {
    let det = Scripted {
        init_error: Some(DetectorInitError::DeviceBusy),
        ..Scripted::default()
    };
    let (mut driver, _clock, mut ctx) = driver(DetectorLink::spawn(det.clone(), 0, 60_000));
    wait_for_link(&mut driver, &mut ctx);

    let failure = driver.detector_failure().unwrap();
    assert_eq!(failure, &InitFailure::Failed(DetectorInitError::DeviceBusy));
    assert!(failure.advisory().contains("in use"));
    assert!(det.released.load(Ordering::SeqCst));
}

#[test]
fn slow_start_times_out() {
    let (gate_tx, gate_rx) = mpsc::channel();
    let hanging = Hanging {
        gate: Mutex::new(gate_rx),
    };
    let (mut driver, clock, mut ctx) = driver(DetectorLink::spawn(hanging, 0, 1_000));

    clock.set(999);
    driver.step(&mut ctx).unwrap();
    assert!(driver.detector_pending());

    clock.set(1_000);
    let report = driver.step(&mut ctx).unwrap();
    assert!(!driver.detector_pending());
    assert_eq!(driver.detector_failure(), Some(&InitFailure::TimedOut(1_000)));
    assert!(driver
        .detector_failure()
        .unwrap()
        .advisory()
        .contains("timed out"));
    // The scene keeps running.
    assert_eq!(report.mode, DisplayMode::Tree);
    drop(gate_tx);
}

#[test]
fn shutdown_stops_ticks_and_releases_camera() {
    let det = Scripted::with_frame();
    let (mut driver, _clock, mut ctx) = driver(DetectorLink::ready(det.clone()));
    driver.step(&mut ctx).unwrap();

    driver.shutdown();
    assert!(det.released.load(Ordering::SeqCst));
    assert!(!driver.is_running());
    assert!(driver.step(&mut ctx).is_none());
    // Second shutdown is a no-op.
    driver.shutdown();
}
