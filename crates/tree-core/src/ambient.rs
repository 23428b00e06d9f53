//! Atmosphere layers: ground snow, mist, base filler, falling snow and dust.
//!
//! Ground layers crossfade instead of moving between modes; snow and dust
//! fall continuously regardless of mode.

use crate::constants::*;
use crate::controller::DisplayMode;
use crate::layout::{filler_drift, mist_position};
use glam::Vec3;
use rand::prelude::*;

/// A point cloud with one shared opacity.
#[derive(Clone, Debug, Default)]
pub struct PointLayer {
    pub positions: Vec<Vec3>,
    pub seeds: Vec<f32>,
    pub tints: Vec<[f32; 3]>,
    pub opacity: f32,
    pub point_size: f32,
}

impl PointLayer {
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    #[inline]
    fn fade_toward(&mut self, target: f32, rate: f32) {
        self.opacity += (target - self.opacity) * rate;
    }
}

/// Points that fall at their own speed and wrap vertically.
#[derive(Clone, Debug, Default)]
pub struct FallingLayer {
    pub positions: Vec<Vec3>,
    pub speeds: Vec<f32>,
    pub opacity: f32,
    pub point_size: f32,
    pub floor: f32,
    pub ceiling: f32,
}

impl FallingLayer {
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

#[derive(Clone, Debug, Default)]
pub struct Atmosphere {
    pub ground_snow: PointLayer,
    pub ground_mist: PointLayer,
    pub base_filler: PointLayer,
    pub snow: FallingLayer,
    pub dust: FallingLayer,
}

impl Atmosphere {
    pub fn new(rng: &mut StdRng, counts: &AtmosphereCounts) -> Self {
        Self {
            ground_snow: ground_snow(rng, counts.ground_snow),
            ground_mist: ground_mist(rng, counts.ground_mist),
            base_filler: base_filler(rng, counts.base_filler),
            snow: falling_snow(rng, counts.falling_snow),
            dust: dust(rng, counts.dust),
        }
    }

    pub fn update(&mut self, mode: DisplayMode, time: f32) {
        self.fall(time);

        if mode != DisplayMode::Tree {
            self.ground_snow.fade_toward(0.0, GROUND_FADE_OUT);
            self.ground_mist.fade_toward(0.0, GROUND_FADE_OUT);
            self.base_filler.fade_toward(0.0, GROUND_FADE_OUT);
            return;
        }

        self.ground_snow.fade_toward(GROUND_SNOW_OPACITY, GROUND_FADE_IN);
        self.ground_mist.fade_toward(GROUND_MIST_OPACITY, GROUND_FADE_IN);
        self.base_filler.fade_toward(BASE_FILLER_OPACITY, GROUND_FADE_IN);

        let mist = &mut self.ground_mist;
        for (p, seed) in mist.positions.iter_mut().zip(&mist.seeds) {
            *p = mist_position(*seed, time);
        }
        let filler = &mut self.base_filler;
        for (p, seed) in filler.positions.iter_mut().zip(&filler.seeds) {
            let (x, rest_y, z) = filler_drift(*seed, time);
            p.x = x;
            p.y += (rest_y - p.y) * 0.04;
            p.z = z;
        }
    }

    fn fall(&mut self, time: f32) {
        let snow = &mut self.snow;
        for (i, (p, v)) in snow.positions.iter_mut().zip(&snow.speeds).enumerate() {
            p.y -= v;
            p.x += (time * 0.4 + i as f32).sin() * 0.01;
            if p.y < snow.floor {
                p.y = snow.ceiling;
            }
        }
        let dust = &mut self.dust;
        for (p, v) in dust.positions.iter_mut().zip(&dust.speeds) {
            p.y -= v;
            if p.y < dust.floor {
                p.y = dust.ceiling;
            }
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct AtmosphereCounts {
    pub ground_snow: usize,
    pub ground_mist: usize,
    pub base_filler: usize,
    pub falling_snow: usize,
    pub dust: usize,
}

impl Default for AtmosphereCounts {
    fn default() -> Self {
        Self {
            ground_snow: GROUND_SNOW_COUNT,
            ground_mist: GROUND_MIST_COUNT,
            base_filler: BASE_FILLER_COUNT,
            falling_snow: FALLING_SNOW_COUNT,
            dust: DUST_COUNT,
        }
    }
}

#[inline]
fn ring_point(rng: &mut StdRng, radius: f32, y: f32) -> Vec3 {
    let angle = rng.gen::<f32>() * std::f32::consts::TAU;
    Vec3::new(angle.cos() * radius, y, angle.sin() * radius)
}

fn ground_snow(rng: &mut StdRng, count: usize) -> PointLayer {
    let mut layer = PointLayer {
        point_size: 0.12,
        ..Default::default()
    };
    for _ in 0..count {
        let r = 5.0 + rng.gen::<f32>().powf(0.5) * 40.0;
        layer.positions.push(ring_point(rng, r, -16.9));
        layer.seeds.push(rng.gen::<f32>() * 2000.0);
        layer.tints.push([0.8, 0.8, 1.0]);
    }
    layer
}

fn ground_mist(rng: &mut StdRng, count: usize) -> PointLayer {
    let mut layer = PointLayer {
        point_size: 20.0,
        ..Default::default()
    };
    for _ in 0..count {
        let inner = rng.gen::<f32>() > 0.7;
        let r = if inner {
            6.0 + rng.gen::<f32>() * 8.0
        } else {
            12.0 + rng.gen::<f32>() * 32.0
        };
        layer.positions.push(ring_point(rng, r, -16.2));
        layer.seeds.push(rng.gen::<f32>() * 1000.0);
        layer
            .tints
            .push(if inner { [0.6, 0.5, 0.4] } else { [0.3, 0.4, 0.6] });
    }
    layer
}

fn base_filler(rng: &mut StdRng, count: usize) -> PointLayer {
    let mut layer = PointLayer {
        point_size: 0.15,
        ..Default::default()
    };
    for _ in 0..count {
        let r = 3.0 + rng.gen::<f32>().powf(0.8) * 15.0;
        let y = rng.gen::<f32>() * 3.0 - 17.0;
        layer.positions.push(ring_point(rng, r, y));
        layer.seeds.push(rng.gen::<f32>() * 1000.0);
        layer.tints.push([0.8, 0.7, 0.5]);
    }
    layer
}

fn falling_snow(rng: &mut StdRng, count: usize) -> FallingLayer {
    let positions = (0..count)
        .map(|_| {
            Vec3::new(
                (rng.gen::<f32>() - 0.5) * 150.0,
                rng.gen::<f32>() * 150.0 - 75.0,
                (rng.gen::<f32>() - 0.5) * 150.0,
            )
        })
        .collect();
    let speeds = (0..count).map(|_| 0.04 + rng.gen::<f32>() * 0.08).collect();
    FallingLayer {
        positions,
        speeds,
        opacity: 0.4,
        point_size: 1.0,
        floor: -75.0,
        ceiling: 75.0,
    }
}

fn dust(rng: &mut StdRng, count: usize) -> FallingLayer {
    let positions = (0..count)
        .map(|_| {
            Vec3::new(
                (rng.gen::<f32>() - 0.5) * 150.0,
                (rng.gen::<f32>() - 0.5) * 100.0,
                (rng.gen::<f32>() - 0.5) * 150.0,
            )
        })
        .collect();
    FallingLayer {
        positions,
        speeds: vec![0.05; count],
        opacity: 0.4,
        point_size: 0.2,
        floor: -50.0,
        ceiling: 50.0,
    }
}
