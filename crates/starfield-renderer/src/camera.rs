//! Perspective camera on the +Z axis looking at the origin.

use starfield_config::schema::CameraConfig;
use starfield_field::Vec3;

use crate::matrix::{self, Mat4};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub fov_y: f32,
    pub near: f32,
    pub far: f32,
    pub distance: f32,
    pub aspect: f32,
}

impl Camera {
    pub fn from_config(config: &CameraConfig, width: u32, height: u32) -> Self {
        let mut camera = Self {
            fov_y: config.fov_degrees.to_radians(),
            near: config.near,
            far: config.far,
            distance: config.distance,
            aspect: 1.0,
        };
        camera.set_viewport(width, height);
        camera
    }

    /// Follow the surface aspect. A zero dimension keeps the old aspect.
    pub fn set_viewport(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            self.aspect = width as f32 / height as f32;
        }
    }

    pub fn position(&self) -> Vec3 {
        [0.0, 0.0, self.distance]
    }

    pub fn view(&self) -> Mat4 {
        matrix::translate(0.0, 0.0, -self.distance)
    }

    pub fn projection(&self) -> Mat4 {
        matrix::perspective(self.fov_y, self.aspect, self.near, self.far)
    }

    pub fn view_projection(&self) -> Mat4 {
        matrix::mul(&self.projection(), &self.view())
    }
}
