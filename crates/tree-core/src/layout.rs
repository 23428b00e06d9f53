//! Closed-form per-mode target layouts.
//!
//! Every function here is pure in `(mode, t, seed, time)`; the engine only
//! smooths toward what these return.

use crate::constants::*;
use crate::controller::DisplayMode;
use glam::Vec3;
use std::f32::consts::{PI, TAU};

const TREE_HEIGHT: f32 = 32.0;
const TREE_BASE_Y: f32 = -16.0;
const TREE_MAX_RADIUS: f32 = 14.0;
const TREE_SPIRAL_TURNS: f32 = 65.0; // half-turns over the full height
const TREE_DENSITY_EXP: f32 = 1.4;

const FRAME_TREE_HEIGHT: f32 = 28.0;
const FRAME_TREE_BASE_Y: f32 = -14.0;
const FRAME_SPIRAL_TURNS: f32 = 55.0;

const GALLERY_RADIUS: f32 = 32.0;
const GALLERY_LAYER_SIZE: usize = 15;
const GALLERY_LAYER_SPACING: f32 = 18.0;
const GALLERY_SPIN: f32 = 0.7;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrnamentTarget {
    pub position: Vec3,
    pub scale: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameTarget {
    pub position: Vec3,
    pub scale: f32,
    pub rotation: Vec3,
    pub emissive: f32,
    pub glow: [f32; 3],
}

/// Deterministic value in \[0, 1) derived from an element seed.
#[inline]
pub fn jitter(seed: f32) -> f32 {
    (seed * 0.618_034).fract().abs()
}

/// Target for main particles and candy canes; `t` is the normalized index.
pub fn ornament_target(mode: DisplayMode, t: f32, seed: f32, time: f32) -> OrnamentTarget {
    match mode {
        DisplayMode::Tree => {
            let t_y = t.powf(TREE_DENSITY_EXP);
            // The floor shrinks to zero at the apex so the tip stays sharp.
            let min_radius = (2.0 * (1.0 - t)).max(0.0);
            let base_radius = TREE_MAX_RADIUS * (1.0 - t);
            let radius = min_radius.max(base_radius + (seed * 0.5 + time * 0.3).sin() * 0.8);
            let angle = t * TREE_SPIRAL_TURNS * PI + (seed * 0.4).cos() * 0.8;
            OrnamentTarget {
                position: Vec3::new(
                    radius * angle.cos(),
                    t_y * TREE_HEIGHT + TREE_BASE_Y,
                    radius * angle.sin(),
                ),
                scale: 1.0,
            }
        }
        DisplayMode::Scatter => {
            let angle = t * TAU + time * 0.1;
            let r = 20.0 + seed.sin() * 4.0;
            let h = (t - 0.5) * 65.0;
            OrnamentTarget {
                position: Vec3::new(r * angle.cos(), h, r * angle.sin()),
                scale: 1.0,
            }
        }
        DisplayMode::Focus => {
            let angle = t * TAU;
            let r = 45.0 + jitter(seed) * 20.0;
            OrnamentTarget {
                position: Vec3::new(angle.cos() * r, angle.sin() * r, -50.0),
                scale: 0.4,
            }
        }
    }
}

/// Twinkling emissive level for an ornament.
#[inline]
pub fn ornament_emissive(base: f32, seed: f32, time: f32) -> f32 {
    let twinkle = 0.5 + (time * 2.0 + seed).sin() * 0.5;
    base * (1.0 + twinkle * 0.5)
}

/// Target for photo frame `i` of `count`; `focus` is already reduced modulo `count`.
pub fn frame_target(mode: DisplayMode, i: usize, count: usize, focus: usize, time: f32) -> FrameTarget {
    let fi = i as f32;
    match mode {
        DisplayMode::Tree => {
            let t = (fi + 0.5) / (count as f32 + 1.0);
            let radius = TREE_MAX_RADIUS * (1.0 - t) + (fi * 12.0).sin() * 1.5;
            let angle = t * FRAME_SPIRAL_TURNS * PI + fi * 15.0;
            FrameTarget {
                position: Vec3::new(
                    radius * angle.cos(),
                    t.powf(TREE_DENSITY_EXP) * FRAME_TREE_HEIGHT + FRAME_TREE_BASE_Y,
                    radius * angle.sin(),
                ),
                scale: 0.65,
                rotation: Vec3::new(time * 0.3 + fi, time * 0.5 + fi, time * 0.2),
                emissive: 0.8 + (time * 2.0 + fi).sin() * 0.4,
                glow: FRAME_TREE_GLOW,
            }
        }
        DisplayMode::Scatter => {
            let layer = i / GALLERY_LAYER_SIZE;
            let slot = i % GALLERY_LAYER_SIZE;
            let in_layer = GALLERY_LAYER_SIZE.min(count - layer * GALLERY_LAYER_SIZE);
            let angle = (slot as f32 / in_layer as f32) * TAU + time * GALLERY_SPIN;
            let layers = count.div_ceil(GALLERY_LAYER_SIZE) as f32;
            let h = (layer as f32 - (layers - 1.0) / 2.0) * GALLERY_LAYER_SPACING;
            // Face away from the axis: +Z of the frame points along (cos, 0, sin).
            let yaw = PI / 2.0 - angle;
            FrameTarget {
                position: Vec3::new(GALLERY_RADIUS * angle.cos(), h, GALLERY_RADIUS * angle.sin()),
                scale: 2.2,
                rotation: Vec3::new(0.0, yaw, 0.0),
                emissive: 1.0 + (time * 4.0 + fi).sin() * 0.5,
                glow: GOLD,
            }
        }
        DisplayMode::Focus if i == focus => FrameTarget {
            position: Vec3::new(0.0, 0.0, 36.0),
            scale: 11.0,
            rotation: Vec3::new(0.0, (time * 0.5).sin() * 0.15, 0.0),
            emissive: 0.1,
            glow: GOLD,
        },
        DisplayMode::Focus => {
            let angle = (fi - focus as f32) * 0.8;
            FrameTarget {
                position: Vec3::new(angle.cos() * 80.0, 45.0, -80.0),
                scale: 0.1,
                rotation: Vec3::ZERO,
                emissive: 0.0,
                glow: GOLD,
            }
        }
    }
}

/// Orbiting mist puff position while the tree is shown.
#[inline]
pub fn mist_position(seed: f32, time: f32) -> Vec3 {
    let r = 8.0 + seed % 34.0;
    let speed = 0.025 + seed % 0.045;
    let angle = time * speed + seed;
    Vec3::new(angle.cos() * r, -15.8 + (time * 0.25 + seed).sin() * 1.8, angle.sin() * r)
}

/// Horizontal drift and resting height of a base-filler point.
#[inline]
pub fn filler_drift(seed: f32, time: f32) -> (f32, f32, f32) {
    let drift = time * 0.1 + seed;
    let r = 5.0 + seed % 12.0;
    (drift.cos() * r, -16.9 + seed % 2.5, drift.sin() * r)
}
