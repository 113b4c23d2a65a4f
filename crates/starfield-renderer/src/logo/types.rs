//! Logo mesh vertex types, material and per-frame uniforms.

use starfield_common::Color;
use starfield_config::schema::{LightingConfig, LogoConfig};
use starfield_field::{vector, LogoTransform};

use crate::camera::Camera;
use crate::matrix;

/// A single vertex of the logo mesh.
///
/// Layout: position(vec3) + normal(vec3) = 24 bytes.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct LogoVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

impl LogoVertex {
    /// wgpu vertex buffer layout for `LogoVertex`.
    pub const LAYOUT: wgpu::VertexBufferLayout<'static> = wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<LogoVertex>() as u64,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &[
            // position: vec3<f32> at offset 0
            wgpu::VertexAttribute {
                format: wgpu::VertexFormat::Float32x3,
                offset: 0,
                shader_location: 0,
            },
            // normal: vec3<f32> at offset 12
            wgpu::VertexAttribute {
                format: wgpu::VertexFormat::Float32x3,
                offset: 12,
                shader_location: 1,
            },
        ],
    };
}

/// Uniforms for the logo shader.
///
/// Layout: two matrices + six vec4 = 224 bytes.
#[repr(C)]
#[derive(Debug, Clone, Copy, bytemuck::Pod, bytemuck::Zeroable)]
pub struct LogoUniforms {
    pub view_proj: [f32; 16],
    /// Group transform; rotation and translation only, so it also
    /// transforms normals.
    pub model: [f32; 16],
    /// Linear base color, alpha 1.
    pub base_color: [f32; 4],
    /// Linear emissive color, alpha unused.
    pub emissive: [f32; 4],
    /// xyz = camera position, w unused.
    pub camera_position: [f32; 4],
    /// xyz = unit vector toward the directional light, w = intensity.
    pub light_direction: [f32; 4],
    /// xyz = point light position, w = intensity.
    pub point_light: [f32; 4],
    /// x = ambient intensity, y = metalness, z = roughness, w unused.
    pub material: [f32; 4],
}

/// Material and lights, resolved from config once.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LogoMaterial {
    pub base_color: [f32; 3],
    pub emissive: [f32; 3],
    pub metalness: f32,
    pub roughness: f32,
    pub ambient: f32,
    pub light_direction: [f32; 3],
    pub directional: f32,
    pub point_position: [f32; 3],
    pub point: f32,
}

impl LogoMaterial {
    pub fn from_config(logo: &LogoConfig, lighting: &LightingConfig) -> Self {
        let linear = |hex: &str, fallback: Color| {
            let [r, g, b, _] = Color::from_hex(hex).unwrap_or(fallback).to_linear_f32();
            [r, g, b]
        };
        Self {
            base_color: linear(&logo.color, Color::WHITE),
            emissive: linear(&logo.emissive, Color::BLACK),
            metalness: logo.metalness.clamp(0.0, 1.0),
            roughness: logo.roughness.clamp(0.0, 1.0),
            ambient: lighting.ambient,
            light_direction: vector::normalize(lighting.directional_position)
                .unwrap_or([0.0, 0.0, 1.0]),
            directional: lighting.directional,
            point_position: lighting.point_position,
            point: lighting.point,
        }
    }

    pub fn uniforms(&self, camera: &Camera, transform: LogoTransform) -> LogoUniforms {
        let model = matrix::translate_rotate_xy(
            [0.0, transform.vertical_offset, 0.0],
            transform.rotation_x,
            transform.rotation_y,
        );
        let [cx, cy, cz] = camera.position();
        let [r, g, b] = self.base_color;
        let [er, eg, eb] = self.emissive;
        let [lx, ly, lz] = self.light_direction;
        let [px, py, pz] = self.point_position;

        LogoUniforms {
            view_proj: camera.view_projection(),
            model,
            base_color: [r, g, b, 1.0],
            emissive: [er, eg, eb, 0.0],
            camera_position: [cx, cy, cz, 0.0],
            light_direction: [lx, ly, lz, self.directional],
            point_light: [px, py, pz, self.point],
            material: [self.ambient, self.metalness, self.roughness, 0.0],
        }
    }
}

/// An axis-aligned box in logo space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LogoBox {
    pub size: [f32; 3],
    pub center: [f32; 3],
}

impl LogoBox {
    const fn new(size: [f32; 3], center: [f32; 3]) -> Self {
        Self { size, center }
    }
}

/// The letters "E" and "T".
pub const LOGO_BOXES: [LogoBox; 6] = [
    // E: stem and three bars
    LogoBox::new([0.5, 3.0, 0.5], [-2.0, 0.0, 0.0]),
    LogoBox::new([1.5, 0.5, 0.5], [-1.25, 1.25, 0.0]),
    LogoBox::new([1.25, 0.5, 0.5], [-1.375, 0.0, 0.0]),
    LogoBox::new([1.5, 0.5, 0.5], [-1.25, -1.25, 0.0]),
    // T: stem and bar
    LogoBox::new([0.5, 3.0, 0.5], [1.75, 0.0, 0.0]),
    LogoBox::new([2.0, 0.5, 0.5], [1.75, 1.25, 0.0]),
];

// =============================================================================
// Tests
// =============================================================================
