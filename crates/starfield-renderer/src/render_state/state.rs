use std::sync::Arc;
use winit::window::Window;

use starfield_config::StarfieldConfig;
use starfield_field::LogoTransform;

use super::composite::{CompositePipeline, CompositeUniforms};
use super::target::SceneTarget;
use crate::bloom::{BloomPipeline, BloomSettings};
use crate::camera::Camera;
use crate::gpu::{GpuContext, PhysicalSize, RendererError};
use crate::logo::{LogoMaterial, LogoPipeline};
use crate::points::{PointStyle, PointsPipeline, SpriteImage};

/// Initial particle instance capacity; the buffer grows on demand.
const INITIAL_PARTICLE_CAPACITY: usize = 1200;

/// Core rendering state holding the GPU context and every pipeline.
///
/// A frame is: logo then particles into the 4x multisampled scene target
/// (resolved to HDR), bloom over the scene, then the composite pass onto
/// the swapchain.
pub struct RenderState {
    pub gpu: GpuContext,
    pub camera: Camera,
    scene: SceneTarget,
    points: PointsPipeline,
    logo: LogoPipeline,
    bloom: BloomPipeline,
    composite: CompositePipeline,
    clear_color: wgpu::Color,
}

impl RenderState {
    /// Create a fully initialized render state from a window.
    pub async fn new(window: Arc<Window>, config: &StarfieldConfig) -> Result<Self, RendererError> {
        let gpu = GpuContext::new(window, config.window.transparent).await?;
        let PhysicalSize { width, height } = gpu.size;

        let camera = Camera::from_config(&config.camera, width, height);
        let scene = SceneTarget::new(&gpu.device, width, height);

        let sprite = SpriteImage::from_config(config.particles.sprite.as_deref());
        let points = PointsPipeline::new(
            &gpu.device,
            &gpu.queue,
            &sprite,
            PointStyle::from_config(&config.particles),
            INITIAL_PARTICLE_CAPACITY,
        );

        let logo = LogoPipeline::new(
            &gpu.device,
            LogoMaterial::from_config(&config.logo, &config.lighting),
        );

        let bloom_settings = BloomSettings::from_config(&config.bloom);
        let bloom = BloomPipeline::new(&gpu.device, &scene.color_view, width, height, bloom_settings);

        let composite = CompositePipeline::new(
            &gpu.device,
            &scene.color_view,
            bloom.output_view(),
            gpu.format(),
            CompositeUniforms::new(bloom_settings.strength, bloom_settings.enabled, gpu.format()),
        );

        tracing::info!(
            "Renderer ready: {}x{}, bloom={}, passes={}",
            width,
            height,
            bloom_settings.enabled,
            bloom_settings.passes,
        );

        Ok(Self {
            gpu,
            camera,
            scene,
            points,
            logo,
            bloom,
            composite,
            clear_color: super::helpers::clear_color(&config.window),
        })
    }

    /// Handle a window resize: surface, camera aspect and every offscreen
    /// target follow the new size.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            tracing::debug!("ignoring zero-size resize ({width}x{height})");
            return;
        }
        self.gpu.resize(width, height);
        self.camera.set_viewport(width, height);
        self.scene = SceneTarget::new(&self.gpu.device, width, height);
        self.bloom
            .resize(&self.gpu.device, &self.scene.color_view, width, height);
        self.composite
            .resize(&self.gpu.device, &self.scene.color_view, self.bloom.output_view());
    }

    /// Upload the flat `xyz` particle positions for the next frame.
    pub fn set_particle_positions(&mut self, positions: &[f32]) {
        self.points
            .upload_positions(&self.gpu.device, &self.gpu.queue, positions);
    }

    pub fn set_logo_transform(&mut self, transform: LogoTransform) {
        self.logo.set_transform(transform);
    }

    /// Render and present one frame.
    ///
    /// A lost or outdated surface is reconfigured and the frame skipped.
    pub fn render_frame(&mut self) -> Result<(), RendererError> {
        let output = match self.gpu.current_texture() {
            Ok(t) => t,
            Err(e @ (wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated)) => {
                tracing::warn!("Surface {e}, reconfiguring");
                self.gpu.reconfigure();
                return Err(e.into());
            }
            Err(e) => {
                tracing::error!("Failed to get surface texture: {e}");
                return Err(e.into());
            }
        };

        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let PhysicalSize { width, height } = self.gpu.size;
        self.points.update_uniforms(&self.gpu.queue, &self.camera);
        self.logo.update_uniforms(&self.gpu.queue, &self.camera);
        self.bloom.update_uniforms(&self.gpu.queue, width, height);

        let mut encoder = self
            .gpu
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("starfield frame encoder"),
            });

        {
            let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("starfield scene pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &self.scene.msaa_view,
                    resolve_target: Some(&self.scene.color_view),
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Discard,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.scene.depth_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Discard,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            // Opaque logo first so its depth hides the particles behind it.
            self.logo.render(&mut pass);
            self.points.render(&mut pass);
        }

        self.bloom.render(&mut encoder);
        self.composite.render(&mut encoder, &view);

        self.gpu.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        super::helpers::log_first_frame(width, height, self.gpu.format());

        Ok(())
    }
}
