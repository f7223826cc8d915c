use crate::constants::*;
use glam::{EulerRot, Mat4, Vec3};
use particles_core::Camera;

/// Matches `Scene` in `shaders/particles.wgsl`.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SceneUniforms {
    pub projection: [[f32; 4]; 4],
    pub model_view: [[f32; 4]; 4],
    pub resolution: [f32; 2],
    pub fog_density: f32,
    pub _pad: f32,
}

impl SceneUniforms {
    pub fn new(camera: &Camera, rotation: Vec3, width: u32, height: u32) -> Self {
        let view = camera.view_matrix();
        let model_view = view * model_matrix(rotation);
        Self {
            projection: camera.projection_matrix().to_cols_array_2d(),
            model_view: model_view.to_cols_array_2d(),
            resolution: [width.max(1) as f32, height.max(1) as f32],
            fog_density: FOG_DENSITY,
            _pad: 0.0,
        }
    }
}

/// Matches `Post` in `shaders/post.wgsl`.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct PostUniforms {
    pub resolution: [f32; 2],
    pub blur_dir: [f32; 2],
    pub bloom_strength: f32,
    pub blur_spread: f32,
    pub threshold: f32,
    pub exposure: f32,
}

/// Euler XYZ rotation of the whole ensemble.
#[inline]
pub fn model_matrix(rotation: Vec3) -> Mat4 {
    Mat4::from_euler(EulerRot::XYZ, rotation.x, rotation.y, rotation.z)
}

/// Blur tap spacing in bloom texels for a bloom radius.
#[inline]
pub fn blur_spread(radius: f32) -> f32 {
    BLUR_BASE_SPREAD + radius.max(0.0) * BLUR_RADIUS_SPREAD
}

#[inline]
pub fn clamp_frame_delta(dt_sec: f32) -> f32 {
    dt_sec.clamp(0.0, MAX_FRAME_DT_SEC)
}

#[inline]
pub fn bloom_extent(width: u32, height: u32) -> (u32, u32) {
    (
        (width.max(1) / BLOOM_DOWNSCALE).max(1),
        (height.max(1) / BLOOM_DOWNSCALE).max(1),
    )
}
