//! Camera and light rig that follows the display mode.
//!
//! These types avoid platform-specific APIs; the native frontend builds its
//! view-projection from [`Camera`] and the resolver projects through it.

use crate::constants::*;
use crate::controller::DisplayMode;
use crate::resolver::ScreenProjector;
use glam::{Mat4, Vec2, Vec3};

/// Right-handed perspective camera looking down -Z from `eye`.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            eye: Vec3::from(CAMERA_START),
            aspect: 16.0 / 9.0,
            fovy_radians: CAMERA_FOVY_DEG.to_radians(),
            znear: CAMERA_ZNEAR,
            zfar: CAMERA_ZFAR,
        }
    }
}

impl Camera {
    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }
    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_to_rh(self.eye, Vec3::NEG_Z, Vec3::Y)
    }
    pub fn view_proj(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}

impl ScreenProjector for Camera {
    fn project(&self, world: Vec3) -> Vec2 {
        let ndc = self.view_proj().project_point3(world);
        Vec2::new((ndc.x + 1.0) / 2.0, (1.0 - ndc.y) / 2.0)
    }

    fn eye(&self) -> Vec3 {
        self.eye
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointLight {
    pub position: Vec3,
    pub intensity: f32,
}

#[derive(Clone, Debug, Default)]
pub struct CameraRig {
    pub camera: Camera,
    pub star_light: PointLight,
    pub ground_light: PointLight,
}

impl CameraRig {
    pub fn update(&mut self, mode: DisplayMode, time: f32) {
        let pulse = (time * 2.0).sin();
        match mode {
            DisplayMode::Tree => {
                self.star_light = PointLight {
                    position: Vec3::new(0.0, 20.0, 5.0),
                    intensity: 15.0 + pulse * 5.0,
                };
                self.ground_light = PointLight {
                    position: Vec3::new(0.0, -18.0, 12.0),
                    intensity: 1.5 + pulse * 0.5,
                };
            }
            DisplayMode::Scatter => {
                self.star_light = PointLight {
                    position: Vec3::new(0.0, 30.0, -20.0),
                    intensity: 2.0,
                };
                self.ground_light.intensity = 0.0;
            }
            DisplayMode::Focus => {
                self.star_light.intensity = 1.0;
                self.ground_light.intensity = 0.0;
            }
        }
        let eye = camera_eye_for(mode);
        self.camera.eye = self.camera.eye.lerp(eye, CAMERA_SMOOTHING);
    }
}
