//! Bright-pass and ping-pong Gaussian blur.
//!
//! Bright: scene -> a
//! Per pass: horizontal (a -> b), vertical (b -> a)
//! The glow always ends up in `a`.

use super::types::{BloomSettings, BloomUniforms};
use crate::render_state::{draw_fullscreen, hdr_texture, SCENE_FORMAT};

/// Size-dependent resources, rebuilt on resize.
struct BloomTargets {
    view_a: wgpu::TextureView,
    view_b: wgpu::TextureView,
    /// Sampling the scene, `a` and `b` respectively.
    reads_scene: wgpu::BindGroup,
    reads_a: wgpu::BindGroup,
    reads_b: wgpu::BindGroup,
    _textures: [wgpu::Texture; 2],
}

pub struct BloomPipeline {
    bright: wgpu::RenderPipeline,
    blur_h: wgpu::RenderPipeline,
    blur_v: wgpu::RenderPipeline,
    uniform_buffer: wgpu::Buffer,
    layout: wgpu::BindGroupLayout,
    sampler: wgpu::Sampler,
    targets: BloomTargets,
    settings: BloomSettings,
}

impl BloomPipeline {
    /// Create the bloom pipeline reading from `scene_view`.
    pub fn new(
        device: &wgpu::Device,
        scene_view: &wgpu::TextureView,
        width: u32,
        height: u32,
        settings: BloomSettings,
    ) -> Self {
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("bloom shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("../shaders/bloom.wgsl").into()),
        });

        let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("bloom sampler"),
            address_mode_u: wgpu::AddressMode::ClampToEdge,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            ..Default::default()
        });

        let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("bloom uniforms"),
            size: std::mem::size_of::<BloomUniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let slot = |binding: u32, ty: wgpu::BindingType| wgpu::BindGroupLayoutEntry {
            binding,
            visibility: wgpu::ShaderStages::FRAGMENT,
            ty,
            count: None,
        };
        let layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("bloom inputs layout"),
            entries: &[
                slot(
                    0,
                    wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: None,
                    },
                ),
                slot(
                    1,
                    wgpu::BindingType::Texture {
                        sample_type: wgpu::TextureSampleType::Float { filterable: true },
                        view_dimension: wgpu::TextureViewDimension::D2,
                        multisampled: false,
                    },
                ),
                slot(2, wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering)),
            ],
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("bloom pipeline layout"),
            bind_group_layouts: &[&layout],
            push_constant_ranges: &[],
        });

        // All three passes share the fullscreen vertex stage and write HDR.
        let fullscreen = |label: &str, fragment: &str| {
            device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
                label: Some(label),
                layout: Some(&pipeline_layout),
                vertex: wgpu::VertexState {
                    module: &shader,
                    entry_point: Some("vs_main"),
                    buffers: &[],
                    compilation_options: wgpu::PipelineCompilationOptions::default(),
                },
                fragment: Some(wgpu::FragmentState {
                    module: &shader,
                    entry_point: Some(fragment),
                    targets: &[Some(SCENE_FORMAT.into())],
                    compilation_options: wgpu::PipelineCompilationOptions::default(),
                }),
                primitive: wgpu::PrimitiveState::default(),
                depth_stencil: None,
                multisample: wgpu::MultisampleState::default(),
                multiview: None,
                cache: None,
            })
        };

        let bright = fullscreen("bloom bright pipeline", "fs_bright");
        let blur_h = fullscreen("bloom h pipeline", "fs_blur_h");
        let blur_v = fullscreen("bloom v pipeline", "fs_blur_v");

        let targets = BloomTargets::new(
            device,
            &layout,
            &uniform_buffer,
            &sampler,
            scene_view,
            width,
            height,
        );

        Self {
            bright,
            blur_h,
            blur_v,
            uniform_buffer,
            layout,
            sampler,
            targets,
            settings,
        }
    }

    /// Recreate textures and bind groups after a resize.
    pub fn resize(
        &mut self,
        device: &wgpu::Device,
        scene_view: &wgpu::TextureView,
        width: u32,
        height: u32,
    ) {
        self.targets = BloomTargets::new(
            device,
            &self.layout,
            &self.uniform_buffer,
            &self.sampler,
            scene_view,
            width,
            height,
        );
    }

    /// Upload bloom uniforms for the current frame.
    pub fn update_uniforms(&self, queue: &wgpu::Queue, width: u32, height: u32) {
        let uniforms = self.settings.uniforms(width, height);
        queue.write_buffer(&self.uniform_buffer, 0, bytemuck::bytes_of(&uniforms));
    }

    /// Record the bright pass and `passes` blur pairs.
    ///
    /// Returns early if bloom is disabled.
    pub fn render(&self, encoder: &mut wgpu::CommandEncoder) {
        if !self.settings.enabled {
            return;
        }
        let t = &self.targets;

        draw_fullscreen(encoder, "bloom bright pass", &t.view_a, &self.bright, &t.reads_scene);
        for _ in 0..self.settings.passes {
            draw_fullscreen(encoder, "bloom h pass", &t.view_b, &self.blur_h, &t.reads_a);
            draw_fullscreen(encoder, "bloom v pass", &t.view_a, &self.blur_v, &t.reads_b);
        }
    }

    /// The blurred glow, valid after `render`.
    pub fn output_view(&self) -> &wgpu::TextureView {
        &self.targets.view_a
    }
}

impl BloomTargets {
    fn new(
        device: &wgpu::Device,
        layout: &wgpu::BindGroupLayout,
        uniform_buffer: &wgpu::Buffer,
        sampler: &wgpu::Sampler,
        scene_view: &wgpu::TextureView,
        width: u32,
        height: u32,
    ) -> Self {
        let (texture_a, view_a) = hdr_texture(device, width, height, "bloom a");
        let (texture_b, view_b) = hdr_texture(device, width, height, "bloom b");

        let reading = |label: &str, source: &wgpu::TextureView| {
            let resources = [
                uniform_buffer.as_entire_binding(),
                wgpu::BindingResource::TextureView(source),
                wgpu::BindingResource::Sampler(sampler),
            ];
            let entries: Vec<wgpu::BindGroupEntry> = resources
                .into_iter()
                .zip(0u32..)
                .map(|(resource, binding)| wgpu::BindGroupEntry { binding, resource })
                .collect();
            device.create_bind_group(&wgpu::BindGroupDescriptor {
                label: Some(label),
                layout,
                entries: &entries,
            })
        };

        Self {
            reads_scene: reading("bloom reads scene", scene_view),
            reads_a: reading("bloom reads a", &view_a),
            reads_b: reading("bloom reads b", &view_b),
            view_a,
            view_b,
            _textures: [texture_a, texture_b],
        }
    }
}
