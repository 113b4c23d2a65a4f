//! Particle pipeline types.

use starfield_common::Color;
use starfield_config::schema::ParticlesConfig;

use crate::camera::Camera;

/// Per-frame uniforms for the particle shader.
///
/// Layout: two matrices + tint + params = 160 bytes, 16-byte aligned.
#[repr(C)]
#[derive(Debug, Clone, Copy, bytemuck::Pod, bytemuck::Zeroable)]
pub struct PointUniforms {
    pub view: [f32; 16],
    pub projection: [f32; 16],
    /// Linear tint in rgb, opacity in alpha.
    pub color: [f32; 4],
    /// x = sprite size in world units, yzw unused.
    pub params: [f32; 4],
}

/// Particle appearance derived from config at pipeline creation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointStyle {
    pub size: f32,
    pub opacity: f32,
    /// Linear RGB tint.
    pub tint: [f32; 3],
}

impl PointStyle {
    pub fn from_config(config: &ParticlesConfig) -> Self {
        let [r, g, b, _] = Color::from_hex(&config.color)
            .unwrap_or(Color::WHITE)
            .to_linear_f32();
        Self {
            size: config.size,
            opacity: config.opacity.clamp(0.0, 1.0),
            tint: [r, g, b],
        }
    }

    pub fn uniforms(&self, camera: &Camera) -> PointUniforms {
        PointUniforms {
            view: camera.view(),
            projection: camera.projection(),
            color: [self.tint[0], self.tint[1], self.tint[2], self.opacity],
            params: [self.size, 0.0, 0.0, 0.0],
        }
    }
}

/// Additive blending: overlapping sprites brighten instead of occluding.
pub const ADDITIVE_BLEND: wgpu::BlendState = wgpu::BlendState {
    color: wgpu::BlendComponent {
        src_factor: wgpu::BlendFactor::SrcAlpha,
        dst_factor: wgpu::BlendFactor::One,
        operation: wgpu::BlendOperation::Add,
    },
    alpha: wgpu::BlendComponent {
        src_factor: wgpu::BlendFactor::One,
        dst_factor: wgpu::BlendFactor::One,
        operation: wgpu::BlendOperation::Add,
    },
};

/// One instance per particle: the `xyz` triple straight from the field's
/// position buffer.
pub const POSITION_LAYOUT: wgpu::VertexBufferLayout<'static> = wgpu::VertexBufferLayout {
    array_stride: 12,
    step_mode: wgpu::VertexStepMode::Instance,
    attributes: &[wgpu::VertexAttribute {
        format: wgpu::VertexFormat::Float32x3,
        offset: 0,
        shader_location: 0,
    }],
};

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use starfield_config::schema::CameraConfig;

    #[test]
    fn point_uniforms_size_is_160_bytes() {
        assert_eq!(std::mem::size_of::<PointUniforms>(), 160);
    }

    #[test]
    fn style_from_default_config() {
        let style = PointStyle::from_config(&ParticlesConfig::default());
        assert!((style.size - 0.5).abs() < f32::EPSILON);
        assert!((style.opacity - 0.4).abs() < f32::EPSILON);
        assert!(style.tint.iter().all(|c| (c - 1.0).abs() < 1e-5));
    }

    #[test]
    fn style_tint_is_linear() {
        let config = ParticlesConfig {
            color: "#808080".into(),
            ..Default::default()
        };
        let style = PointStyle::from_config(&config);
        // sRGB 0.5 is about 0.214 linear
        assert!((style.tint[0] - 0.2158).abs() < 1e-3);
    }

    #[test]
    fn uniforms_carry_opacity_and_size() {
        let camera = Camera::from_config(&CameraConfig::default(), 800, 600);
        let style = PointStyle::from_config(&ParticlesConfig::default());
        let u = style.uniforms(&camera);
        assert!((u.color[3] - 0.4).abs() < f32::EPSILON);
        assert!((u.params[0] - 0.5).abs() < f32::EPSILON);
        assert_eq!(u.view, camera.view());
    }

    #[test]
    fn position_stride_matches_field_buffer() {
        assert_eq!(POSITION_LAYOUT.array_stride, 3 * std::mem::size_of::<f32>() as u64);
    }
}
