//! Composite pipeline: final pass adding bloom over the scene and writing
//! the result to the surface.
//!
//! Renders a fullscreen triangle. When the surface format is not sRGB the
//! shader encodes the linear scene itself.

use super::helpers::draw_fullscreen;

/// Uniforms for the composite shader.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CompositeUniforms {
    pub bloom_strength: f32,
    /// 1.0 when the bloom texture holds this frame's glow.
    pub bloom_enabled: f32,
    /// 1.0 when the shader must apply the sRGB transfer curve.
    pub encode_srgb: f32,
    pub _padding: f32,
}

impl CompositeUniforms {
    pub fn new(bloom_strength: f32, bloom_enabled: bool, surface_format: wgpu::TextureFormat) -> Self {
        Self {
            bloom_strength,
            bloom_enabled: if bloom_enabled { 1.0 } else { 0.0 },
            encode_srgb: if surface_format.is_srgb() { 0.0 } else { 1.0 },
            _padding: 0.0,
        }
    }
}

/// Binding slots, mirrored in `composite.wgsl`.
const UNIFORM_SLOT: u32 = 0;
const SCENE_SLOT: u32 = 1;
const BLOOM_SLOT: u32 = 2;
const SAMPLER_SLOT: u32 = 3;

/// Final pass: scene plus scaled glow, written to the swapchain image.
pub struct CompositePipeline {
    pipeline: wgpu::RenderPipeline,
    layout: wgpu::BindGroupLayout,
    uniforms: wgpu::Buffer,
    sampler: wgpu::Sampler,
    inputs: wgpu::BindGroup,
}

impl CompositePipeline {
    /// `scene_view` and `bloom_view` are sampled, `format` is the surface's.
    pub fn new(
        device: &wgpu::Device,
        scene_view: &wgpu::TextureView,
        bloom_view: &wgpu::TextureView,
        format: wgpu::TextureFormat,
        uniforms: CompositeUniforms,
    ) -> Self {
        use wgpu::util::DeviceExt;

        let module = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("composite shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("../shaders/composite.wgsl").into()),
        });

        let fragment_only = |binding: u32, ty: wgpu::BindingType| wgpu::BindGroupLayoutEntry {
            binding,
            visibility: wgpu::ShaderStages::FRAGMENT,
            ty,
            count: None,
        };
        let hdr_input = wgpu::BindingType::Texture {
            sample_type: wgpu::TextureSampleType::Float { filterable: true },
            view_dimension: wgpu::TextureViewDimension::D2,
            multisampled: false,
        };
        let layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("composite inputs layout"),
            entries: &[
                fragment_only(
                    UNIFORM_SLOT,
                    wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: None,
                    },
                ),
                fragment_only(SCENE_SLOT, hdr_input),
                fragment_only(BLOOM_SLOT, hdr_input),
                fragment_only(
                    SAMPLER_SLOT,
                    wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                ),
            ],
        });

        let uniform_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("composite uniforms"),
            contents: bytemuck::bytes_of(&uniforms),
            usage: wgpu::BufferUsages::UNIFORM,
        });
        let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("composite sampler"),
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            ..Default::default()
        });

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("composite pipeline"),
            layout: Some(&device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
                label: Some("composite pipeline layout"),
                bind_group_layouts: &[&layout],
                push_constant_ranges: &[],
            })),
            vertex: wgpu::VertexState {
                module: &module,
                entry_point: Some("vs_main"),
                buffers: &[],
                compilation_options: Default::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: &module,
                entry_point: Some("fs_main"),
                // Opaque write: alpha comes from the shader for transparent windows.
                targets: &[Some(format.into())],
                compilation_options: Default::default(),
            }),
            primitive: wgpu::PrimitiveState::default(),
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview: None,
            cache: None,
        });

        let inputs = bind_inputs(device, &layout, &uniform_buffer, &sampler, scene_view, bloom_view);
        Self {
            pipeline,
            layout,
            uniforms: uniform_buffer,
            sampler,
            inputs,
        }
    }

    /// Rebind the resized scene and bloom views.
    pub fn resize(
        &mut self,
        device: &wgpu::Device,
        scene_view: &wgpu::TextureView,
        bloom_view: &wgpu::TextureView,
    ) {
        self.inputs = bind_inputs(
            device,
            &self.layout,
            &self.uniforms,
            &self.sampler,
            scene_view,
            bloom_view,
        );
    }

    /// Record the composite pass onto the surface.
    pub fn render(&self, encoder: &mut wgpu::CommandEncoder, surface_view: &wgpu::TextureView) {
        draw_fullscreen(encoder, "composite pass", surface_view, &self.pipeline, &self.inputs);
    }
}

fn bind_inputs(
    device: &wgpu::Device,
    layout: &wgpu::BindGroupLayout,
    uniforms: &wgpu::Buffer,
    sampler: &wgpu::Sampler,
    scene_view: &wgpu::TextureView,
    bloom_view: &wgpu::TextureView,
) -> wgpu::BindGroup {
    let entry = |binding, resource| wgpu::BindGroupEntry { binding, resource };
    device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some("composite inputs"),
        layout,
        entries: &[
            entry(UNIFORM_SLOT, uniforms.as_entire_binding()),
            entry(SCENE_SLOT, wgpu::BindingResource::TextureView(scene_view)),
            entry(BLOOM_SLOT, wgpu::BindingResource::TextureView(bloom_view)),
            entry(SAMPLER_SLOT, wgpu::BindingResource::Sampler(sampler)),
        ],
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn composite_uniforms_size_is_16_bytes() {
        assert_eq!(std::mem::size_of::<CompositeUniforms>(), 16);
    }

    #[test]
    fn srgb_surface_needs_no_encoding() {
        let u = CompositeUniforms::new(1.2, true, wgpu::TextureFormat::Bgra8UnormSrgb);
        assert_eq!(u.encode_srgb, 0.0);
        assert_eq!(u.bloom_enabled, 1.0);

        let u = CompositeUniforms::new(1.2, false, wgpu::TextureFormat::Bgra8Unorm);
        assert_eq!(u.encode_srgb, 1.0);
        assert_eq!(u.bloom_enabled, 0.0);
    }
}
