use crate::ambient::Atmosphere;
use crate::config::SceneConfig;
use crate::constants::*;
use crate::controller::DisplayMode;
use crate::layout::{frame_target, ornament_emissive, ornament_target};
use glam::{EulerRot, Quat, Vec3};
use std::f32::consts::{PI, TAU};
use rand::prelude::*;

/// Position, uniform scale and XYZ Euler rotation (radians).
///
/// The native billboard renderer draws position and scale only. Rotation
/// (frame facing, ornament spin) is for renderers that draw oriented meshes;
/// use [`Transform::quat`] there.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    pub position: Vec3,
    pub scale: f32,
    pub rotation: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            scale: 1.0,
            rotation: Vec3::ZERO,
        }
    }
}

impl Transform {
    pub fn quat(&self) -> Quat {
        Quat::from_euler(EulerRot::XYZ, self.rotation.x, self.rotation.y, self.rotation.z)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OrnamentKind {
    Bauble,
    Snowflake,
    CandyCane,
}

#[derive(Clone, Debug)]
pub struct Ornament {
    pub kind: OrnamentKind,
    pub transform: Transform,
    pub seed: f32,
    pub spin: Vec3,
    pub base_emissive: f32,
    pub emissive: f32,
    pub tint: [f32; 3],
}

#[derive(Clone, Debug)]
pub struct PhotoFrame {
    pub transform: Transform,
    pub emissive: f32,
    pub glow: [f32; 3],
}

impl PhotoFrame {
    fn new() -> Self {
        Self {
            transform: Transform::default(),
            emissive: 0.0,
            glow: GOLD,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Star {
    pub transform: Transform,
    pub emissive: f32,
    pub halo_visible: bool,
    /// Halo rotation about the view axis; like [`Transform::rotation`], not
    /// drawn by round billboards.
    pub halo_roll: f32,
}

impl Default for Star {
    fn default() -> Self {
        Self {
            transform: Transform::default(),
            emissive: 0.5,
            halo_visible: true,
            halo_roll: 0.0,
        }
    }
}

/// Per-frame procedural animation for every managed element.
pub struct AnimationEngine {
    pub ornaments: Vec<Ornament>,
    pub candy_canes: Vec<Ornament>,
    pub frames: Vec<PhotoFrame>,
    pub atmosphere: Atmosphere,
    pub star: Star,
    pub ground_glow_visible: bool,
    last_mode: Option<DisplayMode>,
    burst: f32,
}

impl AnimationEngine {
    pub fn new(config: &SceneConfig) -> Self {
        // One RNG per element family so counts can change without reshuffling the others
        let family_rng = |family: u64| {
            let mix = config.seed ^ family.wrapping_mul(0x9E37_79B9_7F4A_7C15);
            StdRng::seed_from_u64(mix)
        };

        let mut rng = family_rng(1);
        let ornaments = (0..config.ornament_count)
            .map(|_| {
                let kind = if rng.gen::<f32>() > 0.6 {
                    OrnamentKind::Bauble
                } else {
                    OrnamentKind::Snowflake
                };
                let tint = match rng.gen::<f32>() {
                    m if m > 0.7 => ORNAMENT_GOLD,
                    m if m > 0.3 => ORNAMENT_GREEN,
                    _ => ORNAMENT_RED,
                };
                new_ornament(&mut rng, kind, 0.05, MAIN_PARTICLE_EMISSIVE, tint)
            })
            .collect();

        let mut rng = family_rng(2);
        let candy_canes = (0..config.candy_cane_count)
            .map(|_| {
                new_ornament(
                    &mut rng,
                    OrnamentKind::CandyCane,
                    0.04,
                    CANDY_CANE_EMISSIVE,
                    [1.0, 0.55, 0.55],
                )
            })
            .collect();

        let mut rng = family_rng(3);
        let atmosphere = Atmosphere::new(&mut rng, &config.atmosphere);

        let mut engine = Self {
            ornaments,
            candy_canes,
            frames: Vec::new(),
            atmosphere,
            star: Star::default(),
            ground_glow_visible: true,
            last_mode: None,
            burst: 0.0,
        };
        // Default greeting card
        engine.add_photo();
        engine
    }

    /// Append a photo frame; returns its index in the focusable set.
    pub fn add_photo(&mut self) -> usize {
        self.frames.push(PhotoFrame::new());
        self.frames.len() - 1
    }

    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    #[inline]
    pub fn burst(&self) -> f32 {
        self.burst
    }

    /// Advance every element one frame toward its target for `mode`.
    pub fn update(&mut self, mode: DisplayMode, focus_target: usize, time: f32) {
        if self.last_mode != Some(mode) {
            self.last_mode = Some(mode);
            self.burst = 1.0;
        }
        self.burst *= BURST_DECAY;

        let burst = self.burst;
        update_ornaments(&mut self.ornaments, mode, time, burst);
        update_ornaments(&mut self.candy_canes, mode, time, burst);
        self.update_frames(mode, focus_target, time);
        self.atmosphere.update(mode, time);
        self.update_star(mode, time);
        self.ground_glow_visible = mode == DisplayMode::Tree;
    }

    fn update_frames(&mut self, mode: DisplayMode, focus_target: usize, time: f32) {
        let count = self.frames.len();
        if count == 0 {
            return;
        }
        let focus = focus_target % count;
        for (i, frame) in self.frames.iter_mut().enumerate() {
            let target = frame_target(mode, i, count, focus, time);
            let tr = &mut frame.transform;
            tr.position = tr.position.lerp(target.position, FRAME_SMOOTHING);
            tr.scale += (target.scale - tr.scale) * FRAME_SMOOTHING;
            tr.rotation = ease_angles(tr.rotation, target.rotation, FRAME_SMOOTHING);
            frame.emissive = target.emissive;
            frame.glow = target.glow;
        }
    }

    fn update_star(&mut self, mode: DisplayMode, time: f32) {
        let star = &mut self.star;
        let (position, scale) = if mode == DisplayMode::Tree {
            (Vec3::new(0.0, 20.0, 0.0), 2.0)
        } else {
            (Vec3::new(0.0, 40.0, -50.0), 0.1)
        };
        star.transform.position = star.transform.position.lerp(position, STAR_SMOOTHING);
        star.transform.scale += (scale - star.transform.scale) * STAR_SMOOTHING;

        if mode == DisplayMode::Tree {
            star.transform.rotation.y += 0.005;
            star.transform.rotation.z += 0.002;
            star.emissive = 0.7 + (time * 1.5).sin() * 0.15;
            star.halo_roll = star.transform.rotation.z * 0.5;
        } else {
            star.emissive = 0.15;
        }
        star.halo_visible = mode == DisplayMode::Tree;
    }
}

fn new_ornament(
    rng: &mut StdRng,
    kind: OrnamentKind,
    max_spin: f32,
    base_emissive: f32,
    tint: [f32; 3],
) -> Ornament {
    let spin = Vec3::new(
        rng.gen::<f32>() * max_spin,
        rng.gen::<f32>() * max_spin,
        rng.gen::<f32>() * max_spin,
    );
    Ornament {
        kind,
        transform: Transform::default(),
        seed: rng.gen::<f32>() * 1000.0,
        spin,
        base_emissive,
        emissive: base_emissive,
        tint,
    }
}

/// Ease each Euler angle toward its target the short way round.
fn ease_angles(current: Vec3, target: Vec3, k: f32) -> Vec3 {
    let step = |c: f32, t: f32| c + wrap_angle(t - c) * k;
    Vec3::new(
        step(current.x, target.x),
        step(current.y, target.y),
        step(current.z, target.z),
    )
}

/// Map an angle into \[-PI, PI).
#[inline]
fn wrap_angle(a: f32) -> f32 {
    (a + PI).rem_euclid(TAU) - PI
}

fn update_ornaments(list: &mut [Ornament], mode: DisplayMode, time: f32, burst: f32) {
    let n = list.len() as f32;
    for (i, o) in list.iter_mut().enumerate() {
        let t = i as f32 / n;
        let target = ornament_target(mode, t, o.seed, time);
        o.emissive = ornament_emissive(o.base_emissive, o.seed, time);

        let tr = &mut o.transform;
        let push = tr.position.normalize_or_zero() * burst * BURST_STRENGTH;
        tr.position = tr
            .position
            .lerp(target.position + push, ORNAMENT_POSITION_SMOOTHING);
        tr.scale += (target.scale - tr.scale) * ORNAMENT_SCALE_SMOOTHING;
        tr.rotation.x += o.spin.x;
        tr.rotation.y += o.spin.y;
    }
}
