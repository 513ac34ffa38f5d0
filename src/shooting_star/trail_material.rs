use bevy::prelude::*;
use bevy::render::render_resource::AsBindGroup;
use bevy::shader::ShaderRef;

/// Trail line material: a flat color modulated by the per-vertex fade
/// alpha, blended additively so overlapping trails brighten the sky.
#[derive(Asset, TypePath, AsBindGroup, Debug, Clone)]
pub struct TrailMaterial {
    #[uniform(0)]
    pub color: LinearRgba,
}

impl Material for TrailMaterial {
    fn fragment_shader() -> ShaderRef {
        "shaders/star_trail.wgsl".into()
    }

    fn alpha_mode(&self) -> AlphaMode {
        AlphaMode::Add
    }
}

impl Default for TrailMaterial {
    fn default() -> Self {
        Self {
            color: LinearRgba::WHITE,
        }
    }
}
