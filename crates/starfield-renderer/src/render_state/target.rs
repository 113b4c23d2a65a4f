use super::{DEPTH_FORMAT, SCENE_FORMAT, SCENE_SAMPLES};

/// Offscreen attachments the logo and particles are drawn into before
/// bloom and composite.
///
/// The pass renders into the multisampled `msaa_view` and `depth_view`
/// and resolves into `color_view`, which is what later passes sample.
pub struct SceneTarget {
    pub color_view: wgpu::TextureView,
    pub msaa_view: wgpu::TextureView,
    pub depth_view: wgpu::TextureView,
    _textures: [wgpu::Texture; 3],
}

impl SceneTarget {
    pub fn new(device: &wgpu::Device, width: u32, height: u32) -> Self {
        let (color, color_view) = hdr_texture(device, width, height, "scene color");
        let attachment = |label: &str, format: wgpu::TextureFormat| {
            device.create_texture(&wgpu::TextureDescriptor {
                label: Some(label),
                size: extent(width, height),
                mip_level_count: 1,
                sample_count: SCENE_SAMPLES,
                dimension: wgpu::TextureDimension::D2,
                format,
                usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
                view_formats: &[],
            })
        };
        let msaa = attachment("scene msaa color", SCENE_FORMAT);
        let depth = attachment("scene depth", DEPTH_FORMAT);

        Self {
            color_view,
            msaa_view: msaa.create_view(&wgpu::TextureViewDescriptor::default()),
            depth_view: depth.create_view(&wgpu::TextureViewDescriptor::default()),
            _textures: [color, msaa, depth],
        }
    }
}

/// A sampleable `SCENE_FORMAT` render target. Zero sizes are bumped to 1.
pub(crate) fn hdr_texture(
    device: &wgpu::Device,
    width: u32,
    height: u32,
    label: &str,
) -> (wgpu::Texture, wgpu::TextureView) {
    let texture = device.create_texture(&wgpu::TextureDescriptor {
        label: Some(label),
        size: extent(width, height),
        mip_level_count: 1,
        sample_count: 1,
        dimension: wgpu::TextureDimension::D2,
        format: SCENE_FORMAT,
        usage: wgpu::TextureUsages::RENDER_ATTACHMENT | wgpu::TextureUsages::TEXTURE_BINDING,
        view_formats: &[],
    });
    let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
    (texture, view)
}

fn extent(width: u32, height: u32) -> wgpu::Extent3d {
    wgpu::Extent3d {
        width: width.max(1),
        height: height.max(1),
        depth_or_array_layers: 1,
    }
}
