//! Frame orchestration: scene target, composite pass and the
//! `RenderState` that owns every pipeline.

mod composite;
mod helpers;
mod state;
mod target;

pub use composite::{CompositePipeline, CompositeUniforms};
pub(crate) use helpers::draw_fullscreen;
pub use helpers::clear_color;
pub use state::RenderState;
pub(crate) use target::hdr_texture;
pub use target::SceneTarget;

/// HDR color format of the scene and bloom targets.
pub const SCENE_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Rgba16Float;

/// Depth format shared by the logo and particle pipelines.
pub const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth32Float;

/// MSAA sample count of the scene pass. The logo and particle pipelines
/// must match it; bloom and composite read the resolved texture.
pub const SCENE_SAMPLES: u32 = 4;

/// Multisample state for pipelines drawing into the scene pass.
pub fn scene_multisample() -> wgpu::MultisampleState {
    wgpu::MultisampleState {
        count: SCENE_SAMPLES,
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scene_pass_is_four_times_multisampled() {
        let state = scene_multisample();
        assert_eq!(state.count, 4);
        assert_eq!(state.mask, !0);
        assert!(!state.alpha_to_coverage_enabled);
    }

    #[test]
    fn scene_formats_support_four_samples() {
        let flags = wgpu::TextureFormatFeatureFlags::MULTISAMPLE_X4;
        for format in [SCENE_FORMAT, DEPTH_FORMAT] {
            let features = format.guaranteed_format_features(wgpu::Features::empty());
            assert!(features.flags.contains(flags), "{format:?}");
        }
    }
}
