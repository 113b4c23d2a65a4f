use std::sync::Arc;
use winit::window::Window;

use super::types::{PhysicalSize, RendererError};

pub struct GpuContext {
    pub device: wgpu::Device,
    pub queue: wgpu::Queue,
    pub surface: wgpu::Surface<'static>,
    pub surface_config: wgpu::SurfaceConfiguration,
    pub size: PhysicalSize,
}

impl GpuContext {
    /// Initialize wgpu: create instance, surface, adapter, device, and configure
    /// the surface for rendering.
    ///
    /// With `transparent` set, a compositing alpha mode is requested so the
    /// desktop shows through wherever the scene is empty.
    pub async fn new(window: Arc<Window>, transparent: bool) -> Result<Self, RendererError> {
        let size = window.inner_size();
        let size = PhysicalSize {
            width: size.width.max(1),
            height: size.height.max(1),
        };

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor::default());
        let surface = instance.create_surface(window)?;
        let adapter = pick_adapter(&instance, &surface).await?;

        let info = adapter.get_info();
        tracing::info!(
            name = %info.name,
            device_type = ?info.device_type,
            backend = ?info.backend,
            "GPU adapter selected"
        );

        let descriptor = wgpu::DeviceDescriptor {
            label: Some("starfield device"),
            ..Default::default()
        };
        let (device, queue) = adapter.request_device(&descriptor, None).await?;

        let surface_config = surface_config_for(&surface.get_capabilities(&adapter), size, transparent);
        surface.configure(&device, &surface_config);

        Ok(Self {
            device,
            queue,
            surface,
            surface_config,
            size,
        })
    }

    /// Reconfigure the surface after a window resize.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.size = PhysicalSize {
            width: width.max(1),
            height: height.max(1),
        };
        self.surface_config.width = self.size.width;
        self.surface_config.height = self.size.height;
        self.reconfigure();
    }

    /// Reapply the current configuration, e.g. after the surface was lost.
    pub fn reconfigure(&self) {
        self.surface.configure(&self.device, &self.surface_config);
    }

    /// Get the next frame's surface texture.
    pub fn current_texture(&self) -> Result<wgpu::SurfaceTexture, wgpu::SurfaceError> {
        self.surface.get_current_texture()
    }

    /// Return the surface texture format.
    pub fn format(&self) -> wgpu::TextureFormat {
        self.surface_config.format
    }
}

/// Try a discrete or integrated GPU first, then a software adapter.
async fn pick_adapter(
    instance: &wgpu::Instance,
    surface: &wgpu::Surface<'_>,
) -> Result<wgpu::Adapter, RendererError> {
    let preferences = [
        (wgpu::PowerPreference::HighPerformance, false),
        (wgpu::PowerPreference::LowPower, true),
    ];
    for (power_preference, force_fallback_adapter) in preferences {
        let options = wgpu::RequestAdapterOptions {
            power_preference,
            force_fallback_adapter,
            compatible_surface: Some(surface),
        };
        if let Some(adapter) = instance.request_adapter(&options).await {
            return Ok(adapter);
        }
        if !force_fallback_adapter {
            tracing::warn!("No hardware GPU adapter found, trying software fallback");
        }
    }
    Err(RendererError::AdapterNotFound)
}

fn surface_config_for(
    caps: &wgpu::SurfaceCapabilities,
    size: PhysicalSize,
    transparent: bool,
) -> wgpu::SurfaceConfiguration {
    let format = choose_format(&caps.formats);
    let alpha_mode = choose_alpha_mode(&caps.alpha_modes, transparent);
    tracing::info!(?format, ?alpha_mode, available = ?caps.formats, "Configuring surface");

    wgpu::SurfaceConfiguration {
        usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
        format,
        width: size.width,
        height: size.height,
        present_mode: wgpu::PresentMode::Fifo,
        desired_maximum_frame_latency: 2,
        alpha_mode,
        view_formats: Vec::new(),
    }
}

/// First sRGB format the surface offers, else its first format.
pub fn choose_format(formats: &[wgpu::TextureFormat]) -> wgpu::TextureFormat {
    formats
        .iter()
        .copied()
        .find(|f| f.is_srgb())
        .or_else(|| formats.first().copied())
        .unwrap_or(wgpu::TextureFormat::Bgra8UnormSrgb)
}

/// Opaque unless transparency was asked for and the platform can composite.
pub fn choose_alpha_mode(
    modes: &[wgpu::CompositeAlphaMode],
    transparent: bool,
) -> wgpu::CompositeAlphaMode {
    use wgpu::CompositeAlphaMode as Mode;

    if transparent {
        if let Some(mode) = modes
            .iter()
            .copied()
            .find(|m| matches!(m, Mode::PreMultiplied | Mode::PostMultiplied))
        {
            return mode;
        }
        tracing::warn!("transparent window requested but surface offers {modes:?}");
    }
    if modes.contains(&Mode::Opaque) {
        Mode::Opaque
    } else {
        Mode::Auto
    }
}
