use bevy::prelude::*;

#[derive(Component, Reflect, Default)]
#[reflect(Component)]
pub struct MainCamera;

/// Damped orbit rig around a fixed focus point. Yaw/pitch/zoom velocities
/// carry the damping state between frames.
#[derive(Component)]
pub struct OrbitCamera {
    pub focus: Vec3,
    pub yaw: f32,
    pub pitch: f32,
    pub distance: f32,
    pub yaw_velocity: f32,
    pub pitch_velocity: f32,
    pub zoom_velocity: f32,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        // Matches the startup camera pose at (0, 3, 10)
        Self {
            focus: Vec3::ZERO,
            yaw: 0.0,
            pitch: (3.0f32 / (109.0f32).sqrt()).asin(),
            distance: (109.0f32).sqrt(),
            yaw_velocity: 0.0,
            pitch_velocity: 0.0,
            zoom_velocity: 0.0,
        }
    }
}
