//! Visual-side state types shared with the web frontend.
//!
//! These types avoid referencing platform-specific APIs. The web frontend
//! consumes them to build camera matrices and to configure the bloom pass.

use glam::{Mat4, Vec3};

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    /// Camera on the +Z axis looking at the origin.
    pub fn looking_at_origin(distance: f32, aspect: f32) -> Self {
        Self {
            eye: Vec3::new(0.0, 0.0, distance),
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect,
            fovy_radians: 75f32.to_radians(),
            znear: 0.1,
            zfar: 2000.0,
        }
    }

    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }
    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }
}

/// Bloom pass parameters, passed through untouched to the renderer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BloomParams {
    pub strength: f32,
    pub radius: f32,
    pub threshold: f32,
}

/// What the renderer needs from the driver each frame besides the particle buffers.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewState {
    pub bloom: BloomParams,
    pub camera_distance: f32,
}
