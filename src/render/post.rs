use super::helpers::make_post_pipeline;
use super::targets::{RenderTargets, HDR_FORMAT};
use crate::uniforms::PostUniforms;

pub(crate) struct PostResources {
    pub(crate) bgl0: wgpu::BindGroupLayout, // tex+sampler+uniform
    pub(crate) bgl1: wgpu::BindGroupLayout, // tex+sampler
    // One buffer per blur direction; queue writes all land before submit
    pub(crate) base_uniforms: wgpu::Buffer,
    pub(crate) blur_h_uniforms: wgpu::Buffer,
    pub(crate) blur_v_uniforms: wgpu::Buffer,
    pub(crate) bright_pipeline: wgpu::RenderPipeline,
    pub(crate) blur_pipeline: wgpu::RenderPipeline,
    pub(crate) composite_pipeline: wgpu::RenderPipeline,
}

/// Bind groups over the current render targets; rebuilt on resize.
pub(crate) struct PostBindGroups {
    pub(crate) from_hdr: wgpu::BindGroup,
    pub(crate) from_bloom_a: wgpu::BindGroup,
    pub(crate) from_bloom_b: wgpu::BindGroup,
    pub(crate) bloom_a_only: wgpu::BindGroup,
}

fn texture_entry(binding: u32) -> wgpu::BindGroupLayoutEntry {
    wgpu::BindGroupLayoutEntry {
        binding,
        visibility: wgpu::ShaderStages::FRAGMENT,
        ty: wgpu::BindingType::Texture {
            multisampled: false,
            view_dimension: wgpu::TextureViewDimension::D2,
            sample_type: wgpu::TextureSampleType::Float { filterable: true },
        },
        count: None,
    }
}

fn sampler_entry(binding: u32) -> wgpu::BindGroupLayoutEntry {
    wgpu::BindGroupLayoutEntry {
        binding,
        visibility: wgpu::ShaderStages::FRAGMENT,
        ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
        count: None,
    }
}

pub(crate) fn create_post_resources(
    device: &wgpu::Device,
    post_shader: &wgpu::ShaderModule,
    swap_format: wgpu::TextureFormat,
) -> PostResources {
    let bgl0 = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some("post_bgl0"),
        entries: &[
            texture_entry(0),
            sampler_entry(1),
            wgpu::BindGroupLayoutEntry {
                binding: 2,
                visibility: wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            },
        ],
    });
    let bgl1 = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some("post_bgl1"),
        entries: &[texture_entry(0), sampler_entry(1)],
    });
    let uniforms = |label: &str| {
        device.create_buffer(&wgpu::BufferDescriptor {
            label: Some(label),
            size: std::mem::size_of::<PostUniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        })
    };
    let base_uniforms = uniforms("post_uniforms");
    let blur_h_uniforms = uniforms("blur_h_uniforms");
    let blur_v_uniforms = uniforms("blur_v_uniforms");
    let pl_bright_blur = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("pl_post_0"),
        bind_group_layouts: &[&bgl0],
        push_constant_ranges: &[],
    });
    let pl_composite = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("pl_post_comp"),
        bind_group_layouts: &[&bgl0, &bgl1],
        push_constant_ranges: &[],
    });
    let bright_pipeline = make_post_pipeline(
        device,
        "bright_pipeline",
        &pl_bright_blur,
        post_shader,
        "fs_bright",
        HDR_FORMAT,
    );
    let blur_pipeline = make_post_pipeline(
        device,
        "blur_pipeline",
        &pl_bright_blur,
        post_shader,
        "fs_blur",
        HDR_FORMAT,
    );
    let composite_pipeline = make_post_pipeline(
        device,
        "composite_pipeline",
        &pl_composite,
        post_shader,
        "fs_composite",
        swap_format,
    );

    PostResources {
        bgl0,
        bgl1,
        base_uniforms,
        blur_h_uniforms,
        blur_v_uniforms,
        bright_pipeline,
        blur_pipeline,
        composite_pipeline,
    }
}

impl PostResources {
    pub(crate) fn bind_groups(
        &self,
        device: &wgpu::Device,
        sampler: &wgpu::Sampler,
        targets: &RenderTargets,
    ) -> PostBindGroups {
        let with_uniforms = |label: &str, view: &wgpu::TextureView, uniforms: &wgpu::Buffer| {
            device.create_bind_group(&wgpu::BindGroupDescriptor {
                label: Some(label),
                layout: &self.bgl0,
                entries: &[
                    wgpu::BindGroupEntry {
                        binding: 0,
                        resource: wgpu::BindingResource::TextureView(view),
                    },
                    wgpu::BindGroupEntry {
                        binding: 1,
                        resource: wgpu::BindingResource::Sampler(sampler),
                    },
                    wgpu::BindGroupEntry {
                        binding: 2,
                        resource: uniforms.as_entire_binding(),
                    },
                ],
            })
        };
        let bloom_a_only = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("bg_bloom_a_only"),
            layout: &self.bgl1,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: wgpu::BindingResource::TextureView(&targets.bloom_a_view),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::Sampler(sampler),
                },
            ],
        });
        PostBindGroups {
            from_hdr: with_uniforms("bg_hdr", &targets.hdr_view, &self.base_uniforms),
            from_bloom_a: with_uniforms(
                "bg_from_bloom_a",
                &targets.bloom_a_view,
                &self.blur_h_uniforms,
            ),
            from_bloom_b: with_uniforms(
                "bg_from_bloom_b",
                &targets.bloom_b_view,
                &self.blur_v_uniforms,
            ),
            bloom_a_only,
        }
    }

    /// Write the frame's parameters; the blur buffers get their own directions.
    pub(crate) fn write_uniforms(&self, queue: &wgpu::Queue, base: PostUniforms) {
        let horizontal = PostUniforms {
            blur_dir: [1.0, 0.0],
            ..base
        };
        let vertical = PostUniforms {
            blur_dir: [0.0, 1.0],
            ..base
        };
        queue.write_buffer(&self.base_uniforms, 0, bytemuck::bytes_of(&base));
        queue.write_buffer(&self.blur_h_uniforms, 0, bytemuck::bytes_of(&horizontal));
        queue.write_buffer(&self.blur_v_uniforms, 0, bytemuck::bytes_of(&vertical));
    }
}

pub(crate) fn blit(
    encoder: &mut wgpu::CommandEncoder,
    label: &str,
    target: &wgpu::TextureView,
    pipeline: &wgpu::RenderPipeline,
    bg0: &wgpu::BindGroup,
    bg1: Option<&wgpu::BindGroup>,
) {
    let mut r = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
        label: Some(label),
        color_attachments: &[Some(wgpu::RenderPassColorAttachment {
            view: target,
            resolve_target: None,
            ops: wgpu::Operations {
                load: wgpu::LoadOp::Clear(wgpu::Color::BLACK),
                store: wgpu::StoreOp::Store,
            },
        })],
        depth_stencil_attachment: None,
        timestamp_writes: None,
        occlusion_query_set: None,
    });
    r.set_pipeline(pipeline);
    r.set_bind_group(0, bg0, &[]);
    if let Some(g1) = bg1 {
        r.set_bind_group(1, g1, &[]);
    }
    r.draw(0..3, 0..1);
}
