use glam::Vec3;

// Shared gesture/animation tuning constants used by the core and the native frontend.

// Gesture classification
pub const PINCH_THRESHOLD_DESKTOP: f32 = 0.08; // thumb-index distance below which a pinch is seen
pub const PINCH_THRESHOLD_MOBILE: f32 = 0.12;
pub const PINCH_RELEASE_DELAY_DESKTOP: u32 = 5; // consecutive open ticks before a grab releases
pub const PINCH_RELEASE_DELAY_MOBILE: u32 = 10;
pub const FINGER_EXTENDED_DIST: f32 = 0.28; // wrist-to-tip distance for an extended finger
pub const RING_CURLED_DIST: f32 = 0.32; // ring finger must stay under this for a peace sign
pub const OPEN_HAND_MEAN_DIST: f32 = 0.38; // mean index/middle extension for an open hand

// Debounce windows (milliseconds)
pub const PINCH_COOLDOWN_MS: u64 = 400;
pub const MODE_SWITCH_COOLDOWN_MS: u64 = 500;
pub const SWIPE_COOLDOWN_MS: u64 = 600;
pub const SWIPE_MIN_DELTA_X: f32 = 0.15; // palm travel between ticks that counts as a swipe
pub const LABEL_CLEAR_DELAY_MS: u64 = 2_000;
pub const PRESENCE_THROTTLE_MS: u64 = 200;

// Palm-driven scene rotation
pub const ROTATION_YAW_SPAN: f32 = 0.8;
pub const ROTATION_PITCH_SPAN: f32 = 0.4;
pub const ROTATION_SMOOTHING: f32 = 0.08;

// Nearest-target resolver
pub const VISIBLE_X_MIN: f32 = 0.2;
pub const VISIBLE_X_MAX: f32 = 0.8;
pub const VISIBLE_Y_MIN: f32 = 0.35;
pub const VISIBLE_Y_MAX: f32 = 0.65;
pub const DEPTH_WEIGHT: f32 = 3.0;
pub const SCREEN_WEIGHT: f32 = 50.0;

// Detector lifecycle
pub const DETECTOR_INIT_TIMEOUT_MS: u64 = 15_000;

// Element counts
pub const MAIN_PARTICLE_COUNT: usize = 1800;
pub const CANDY_CANE_COUNT: usize = 80;
pub const GROUND_SNOW_COUNT: usize = 4000;
pub const GROUND_MIST_COUNT: usize = 220;
pub const BASE_FILLER_COUNT: usize = 1500;
pub const FALLING_SNOW_COUNT: usize = 2500;
pub const DUST_COUNT: usize = 1200;

// Smoothing factors (fraction of the remaining gap closed per frame)
pub const ORNAMENT_POSITION_SMOOTHING: f32 = 0.04;
pub const ORNAMENT_SCALE_SMOOTHING: f32 = 0.06;
pub const FRAME_SMOOTHING: f32 = 0.05;
pub const STAR_SMOOTHING: f32 = 0.05;
pub const CAMERA_SMOOTHING: f32 = 0.05;
pub const GROUND_FADE_IN: f32 = 0.02;
pub const GROUND_FADE_OUT: f32 = 0.1;

// Mode-change burst
pub const BURST_DECAY: f32 = 0.94; // per-frame multiplier
pub const BURST_STRENGTH: f32 = 3.5; // outward push at full burst

// Ground opacity targets while the tree is shown
pub const GROUND_SNOW_OPACITY: f32 = 0.15;
pub const GROUND_MIST_OPACITY: f32 = 0.12;
pub const BASE_FILLER_OPACITY: f32 = 0.04;

// Ornament emissive base levels
pub const MAIN_PARTICLE_EMISSIVE: f32 = 1.0;
pub const CANDY_CANE_EMISSIVE: f32 = 0.6;

// Camera
pub const CAMERA_FOVY_DEG: f32 = 75.0;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 1000.0;
pub const CAMERA_START: [f32; 3] = [0.0, 0.0, 50.0];
pub const CAMERA_TREE: [f32; 3] = [0.0, 2.0, 50.0];
pub const CAMERA_SCATTER: [f32; 3] = [0.0, 0.0, 85.0];
pub const CAMERA_FOCUS: [f32; 3] = [0.0, 0.0, 90.0];

// Palette (linear-ish RGB)
pub const GOLD: [f32; 3] = [0.83, 0.69, 0.22]; // frame and ornament gold
pub const FRAME_TREE_GLOW: [f32; 3] = [0.8, 1.0, 1.0]; // cyan-white while on the tree
pub const ORNAMENT_GOLD: [f32; 3] = [1.0, 0.8, 0.2];
pub const ORNAMENT_GREEN: [f32; 3] = [0.0, 1.0, 0.27];
pub const ORNAMENT_RED: [f32; 3] = [1.0, 0.13, 0.2];
pub const STAR_COLOR: [f32; 3] = [1.0, 0.84, 0.0];

#[inline]
pub fn camera_eye_for(mode: crate::DisplayMode) -> Vec3 {
    match mode {
        crate::DisplayMode::Tree => Vec3::from(CAMERA_TREE),
        crate::DisplayMode::Scatter => Vec3::from(CAMERA_SCATTER),
        crate::DisplayMode::Focus => Vec3::from(CAMERA_FOCUS),
    }
}
