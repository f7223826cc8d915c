use super::helpers::create_color_texture;
use crate::uniforms::bloom_extent;

pub const HDR_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Rgba16Float;

/// Offscreen HDR scene target plus the two half-resolution bloom buffers.
pub(crate) struct RenderTargets {
    _hdr: wgpu::Texture,
    pub(crate) hdr_view: wgpu::TextureView,
    _bloom_a: wgpu::Texture,
    pub(crate) bloom_a_view: wgpu::TextureView,
    _bloom_b: wgpu::Texture,
    pub(crate) bloom_b_view: wgpu::TextureView,
    pub(crate) bloom_size: (u32, u32),
}

impl RenderTargets {
    pub(crate) fn new(device: &wgpu::Device, width: u32, height: u32) -> Self {
        let (hdr, hdr_view) = create_color_texture(device, "hdr_tex", width, height, HDR_FORMAT);
        let (bw, bh) = bloom_extent(width, height);
        let (bloom_a, bloom_a_view) = create_color_texture(device, "bloom_a", bw, bh, HDR_FORMAT);
        let (bloom_b, bloom_b_view) = create_color_texture(device, "bloom_b", bw, bh, HDR_FORMAT);
        Self {
            _hdr: hdr,
            hdr_view,
            _bloom_a: bloom_a,
            bloom_a_view,
            _bloom_b: bloom_b,
            bloom_b_view,
            bloom_size: (bw, bh),
        }
    }

    pub(crate) fn recreate(&mut self, device: &wgpu::Device, width: u32, height: u32) {
        *self = Self::new(device, width, height);
    }
}
