use crate::ambient::AtmosphereCounts;
use crate::classifier::{GestureTuning, Platform};
use crate::constants::*;

/// Everything fixed at scene start.
#[derive(Clone, Debug)]
pub struct SceneConfig {
    pub platform: Platform,
    /// Base seed for every element family.
    pub seed: u64,
    pub ornament_count: usize,
    pub candy_cane_count: usize,
    pub atmosphere: AtmosphereCounts,
    pub detector_timeout_ms: u64,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            platform: Platform::Desktop,
            seed: 42,
            ornament_count: MAIN_PARTICLE_COUNT,
            candy_cane_count: CANDY_CANE_COUNT,
            atmosphere: AtmosphereCounts::default(),
            detector_timeout_ms: DETECTOR_INIT_TIMEOUT_MS,
        }
    }
}

impl SceneConfig {
    pub fn tuning(&self) -> GestureTuning {
        GestureTuning::for_platform(self.platform)
    }

    /// Small scene for tests and headless runs.
    pub fn minimal() -> Self {
        Self {
            ornament_count: 60,
            candy_cane_count: 8,
            atmosphere: AtmosphereCounts {
                ground_snow: 40,
                ground_mist: 12,
                base_filler: 30,
                falling_snow: 50,
                dust: 20,
            },
            ..Self::default()
        }
    }
}
