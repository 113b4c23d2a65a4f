use starfield_common::Color;
use starfield_config::schema::WindowConfig;

/// Log the first frame presentation (once only).
pub(crate) fn log_first_frame(width: u32, height: u32, format: wgpu::TextureFormat) {
    static PRESENTED: std::sync::atomic::AtomicBool = std::sync::atomic::AtomicBool::new(false);
    if !PRESENTED.swap(true, std::sync::atomic::Ordering::Relaxed) {
        tracing::info!(
            "First frame presented ({}x{}, format={:?})",
            width,
            height,
            format,
        );
    }
}

/// Draw a fullscreen triangle into `target`, clearing it first.
pub(crate) fn draw_fullscreen(
    encoder: &mut wgpu::CommandEncoder,
    label: &str,
    target: &wgpu::TextureView,
    pipeline: &wgpu::RenderPipeline,
    bind_group: &wgpu::BindGroup,
) {
    let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
        label: Some(label),
        color_attachments: &[Some(wgpu::RenderPassColorAttachment {
            view: target,
            resolve_target: None,
            ops: wgpu::Operations {
                load: wgpu::LoadOp::Clear(wgpu::Color::TRANSPARENT),
                store: wgpu::StoreOp::Store,
            },
        })],
        depth_stencil_attachment: None,
        timestamp_writes: None,
        occlusion_query_set: None,
    });
    pass.set_pipeline(pipeline);
    pass.set_bind_group(0, bind_group, &[]);
    pass.draw(0..3, 0..1);
}

/// Scene clear color: the linear background, or fully clear for a
/// transparent window.
pub fn clear_color(window: &WindowConfig) -> wgpu::Color {
    if window.transparent {
        return wgpu::Color::TRANSPARENT;
    }
    let [r, g, b, _] = Color::from_hex(&window.background)
        .unwrap_or(Color::BLACK)
        .to_linear_f32();
    wgpu::Color {
        r: r as f64,
        g: g as f64,
        b: b as f64,
        a: 1.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_background_is_opaque_black() {
        assert_eq!(clear_color(&WindowConfig::default()), wgpu::Color::BLACK);
    }

    #[test]
    fn transparent_window_clears_to_nothing() {
        let window = WindowConfig {
            transparent: true,
            background: "#ffffff".into(),
            ..WindowConfig::default()
        };
        assert_eq!(clear_color(&window), wgpu::Color::TRANSPARENT);
    }

    #[test]
    fn background_is_linearized() {
        let window = WindowConfig {
            background: "#808080".into(),
            ..WindowConfig::default()
        };
        let c = clear_color(&window);
        // sRGB 0.5 is about 0.216 linear
        assert!((c.r - 0.216).abs() < 0.01);
        assert_eq!(c.r, c.b);
    }
}
