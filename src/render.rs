use crate::constants::*;
use crate::points::PointCloud;
use crate::uniforms::{blur_spread, PostUniforms, SceneUniforms};
use glam::Vec3;
use particles_core::{Camera, ViewState};
use web_sys as web;

mod helpers;
mod particles;
mod post;
mod targets;

use particles::ParticleLayer;
use post::{PostBindGroups, PostResources};
use targets::RenderTargets;

pub struct GpuState<'a> {
    surface: wgpu::Surface<'a>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,

    particles: ParticleLayer,
    targets: RenderTargets,
    linear_sampler: wgpu::Sampler,
    post: PostResources,
    bind_groups: PostBindGroups,

    width: u32,
    height: u32,
    clear_color: wgpu::Color,
}

impl<'a> GpuState<'a> {
    pub async fn new(canvas: &'a web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let width = canvas.width().max(1);
        let height = canvas.height().max(1);

        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No WebGPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    // Default limits; older WebGPU implementations reject unknown fields
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await
            .map_err(|e| anyhow::anyhow!("request_device error: {:?}", e))?;
        let caps = surface.get_capabilities(&adapter);
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| {
                matches!(
                    f,
                    wgpu::TextureFormat::Bgra8UnormSrgb | wgpu::TextureFormat::Rgba8UnormSrgb
                )
            })
            .or_else(|| caps.formats.first().copied())
            .ok_or_else(|| anyhow::anyhow!("surface reports no formats"))?;
        let alpha_mode = caps
            .alpha_modes
            .first()
            .copied()
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let targets = RenderTargets::new(&device, width, height);
        let particles = ParticleLayer::new(&device);

        let post_shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("post_shader"),
            source: wgpu::ShaderSource::Wgsl(crate::POST_WGSL.into()),
        });
        let linear_sampler = helpers::linear_sampler(&device);
        let post = post::create_post_resources(&device, &post_shader, format);
        let bind_groups = post.bind_groups(&device, &linear_sampler, &targets);

        log::info!("[render] WebGPU ready {}x{} ({:?})", width, height, format);
        Ok(Self {
            surface,
            device,
            queue,
            config,
            particles,
            targets,
            linear_sampler,
            post,
            bind_groups,
            width,
            height,
            clear_color: wgpu::Color {
                r: CLEAR_COLOR[0],
                g: CLEAR_COLOR[1],
                b: CLEAR_COLOR[2],
                a: 1.0,
            },
        })
    }

    pub fn resize_if_needed(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            self.config.width = width;
            self.config.height = height;
            self.surface.configure(&self.device, &self.config);

            self.targets.recreate(&self.device, width, height);
            self.bind_groups = self
                .post
                .bind_groups(&self.device, &self.linear_sampler, &self.targets);
        }
    }

    /// Draw one frame: points into HDR, bloom at half resolution, tone-mapped composite.
    pub fn render(
        &mut self,
        cloud: &mut PointCloud,
        rotation: Vec3,
        view: &ViewState,
    ) -> Result<(), wgpu::SurfaceError> {
        let aspect = self.width as f32 / self.height.max(1) as f32;
        let camera = Camera::looking_at_origin(view.camera_distance, aspect);
        let scene = SceneUniforms::new(&camera, rotation, self.width, self.height);
        self.particles.sync(&self.device, &self.queue, cloud, &scene);

        let (bw, bh) = self.targets.bloom_size;
        self.post.write_uniforms(
            &self.queue,
            PostUniforms {
                resolution: [bw as f32, bh as f32],
                blur_dir: [0.0, 0.0],
                bloom_strength: view.bloom.strength,
                blur_spread: blur_spread(view.bloom.radius),
                threshold: view.bloom.threshold,
                exposure: TONE_MAPPING_EXPOSURE,
            },
        );

        let frame = self.surface.get_current_texture()?;
        let frame_view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });

        // Pass 1: particles → HDR
        self.particles
            .draw(&mut encoder, &self.targets.hdr_view, self.clear_color);

        // Pass 2: bright pass → bloom_a
        post::blit(
            &mut encoder,
            "bright_pass",
            &self.targets.bloom_a_view,
            &self.post.bright_pipeline,
            &self.bind_groups.from_hdr,
            None,
        );
        // Pass 3: blur horizontal bloom_a → bloom_b
        post::blit(
            &mut encoder,
            "blur_h",
            &self.targets.bloom_b_view,
            &self.post.blur_pipeline,
            &self.bind_groups.from_bloom_a,
            None,
        );
        // Pass 4: blur vertical bloom_b → bloom_a
        post::blit(
            &mut encoder,
            "blur_v",
            &self.targets.bloom_a_view,
            &self.post.blur_pipeline,
            &self.bind_groups.from_bloom_b,
            None,
        );
        // Pass 5: composite to swapchain
        post::blit(
            &mut encoder,
            "composite",
            &frame_view,
            &self.post.composite_pipeline,
            &self.bind_groups.from_hdr,
            Some(&self.bind_groups.bloom_a_only),
        );

        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }

    /// Reconfigure after a lost or outdated surface.
    pub fn reconfigure(&mut self) {
        self.surface.configure(&self.device, &self.config);
    }
}
