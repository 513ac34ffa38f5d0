use bevy::math::{Vec2, Vec3};
use std::f32::consts::FRAC_PI_2;

/// Zoom distance stays within [5, 30] world units.
pub const MIN_DISTANCE: f32 = 5.0;
pub const MAX_DISTANCE: f32 = 30.0;

/// Elevation above the horizon; the camera never dips below the ground
/// plane and never reaches the exact zenith (look_at degenerates there).
pub const MIN_PITCH: f32 = 0.1;
pub const MAX_PITCH: f32 = FRAC_PI_2 - 0.01;

const ROTATE_SENSITIVITY: f32 = 0.25;
const ZOOM_SENSITIVITY: f32 = 2.0;
/// Exponential decay rate for the damped orbit velocities.
const DAMPING: f32 = 8.0;

pub struct OrbitInput {
    /// Accumulated mouse drag this frame, in pixels.
    pub rotate: Vec2,
    /// Accumulated scroll-wheel lines this frame.
    pub zoom: f32,
}

pub struct OrbitState {
    pub yaw: f32,
    pub pitch: f32,
    pub distance: f32,
    pub yaw_velocity: f32,
    pub pitch_velocity: f32,
    pub zoom_velocity: f32,
}

/// Advance the damped orbit by one frame: fold the frame's input into the
/// angular/zoom velocities, integrate, decay, and clamp pitch and distance.
pub fn step_orbit(state: &mut OrbitState, input: &OrbitInput, delta_time: f32) {
    state.yaw_velocity += input.rotate.x * ROTATE_SENSITIVITY;
    state.pitch_velocity += input.rotate.y * ROTATE_SENSITIVITY;
    state.zoom_velocity += input.zoom * ZOOM_SENSITIVITY;

    state.yaw -= state.yaw_velocity * delta_time;
    state.pitch += state.pitch_velocity * delta_time;
    state.distance -= state.zoom_velocity * delta_time * state.distance * 0.2;

    state.pitch = state.pitch.clamp(MIN_PITCH, MAX_PITCH);
    state.distance = state.distance.clamp(MIN_DISTANCE, MAX_DISTANCE);

    let decay = (-DAMPING * delta_time).exp();
    state.yaw_velocity *= decay;
    state.pitch_velocity *= decay;
    state.zoom_velocity *= decay;
}

/// Offset from the focus point to the camera for the given orbit angles.
/// Yaw 0 places the camera on the +Z side; pitch is elevation above the
/// horizon plane.
pub fn orbit_offset(yaw: f32, pitch: f32, distance: f32) -> Vec3 {
    let (yaw_sin, yaw_cos) = yaw.sin_cos();
    let (pitch_sin, pitch_cos) = pitch.sin_cos();
    distance * Vec3::new(pitch_cos * yaw_sin, pitch_sin, pitch_cos * yaw_cos)
}

/// Aspect ratio for a resized viewport, guarded against a zero-height
/// window during minimization.
pub fn viewport_aspect(width: f32, height: f32) -> f32 {
    if height <= 0.0 { 1.0 } else { width / height }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn still_state(pitch: f32, distance: f32) -> OrbitState {
        OrbitState {
            yaw: 0.0,
            pitch,
            distance,
            yaw_velocity: 0.0,
            pitch_velocity: 0.0,
            zoom_velocity: 0.0,
        }
    }

    #[test]
    fn test_no_input_no_motion() {
        let mut state = still_state(0.3, 10.0);
        step_orbit(&mut state, &OrbitInput { rotate: Vec2::ZERO, zoom: 0.0 }, 0.016);

        assert_eq!(state.yaw, 0.0);
        assert!((state.pitch - 0.3).abs() < 1e-6);
        assert!((state.distance - 10.0).abs() < 1e-6);
    }

    #[rstest]
    #[case(-100.0)] // zoom far out
    #[case(100.0)] // zoom far in
    fn test_distance_stays_clamped(#[case] zoom: f32) {
        let mut state = still_state(0.3, 10.0);
        for _ in 0..600 {
            step_orbit(&mut state, &OrbitInput { rotate: Vec2::ZERO, zoom }, 0.016);
        }

        assert!(state.distance >= MIN_DISTANCE, "distance was {}", state.distance);
        assert!(state.distance <= MAX_DISTANCE, "distance was {}", state.distance);
    }

    #[rstest]
    #[case(-500.0)] // drag toward the horizon
    #[case(500.0)] // drag toward the zenith
    fn test_pitch_stays_above_horizon(#[case] drag_y: f32) {
        let mut state = still_state(0.3, 10.0);
        for _ in 0..600 {
            let input = OrbitInput { rotate: Vec2::new(0.0, drag_y), zoom: 0.0 };
            step_orbit(&mut state, &input, 0.016);
        }

        assert!(state.pitch >= MIN_PITCH, "pitch was {}", state.pitch);
        assert!(state.pitch <= MAX_PITCH, "pitch was {}", state.pitch);
    }

    #[test]
    fn test_damping_decays_velocity() {
        let mut state = still_state(0.3, 10.0);
        step_orbit(&mut state, &OrbitInput { rotate: Vec2::new(10.0, 0.0), zoom: 0.0 }, 0.016);
        let after_impulse = state.yaw_velocity.abs();
        assert!(after_impulse > 0.0);

        for _ in 0..120 {
            step_orbit(&mut state, &OrbitInput { rotate: Vec2::ZERO, zoom: 0.0 }, 0.016);
        }

        assert!(state.yaw_velocity.abs() < after_impulse * 1e-3);
    }

    #[test]
    fn test_orbit_offset_preserves_distance() {
        let offset = orbit_offset(1.2, 0.4, 10.0);
        assert!((offset.length() - 10.0).abs() < 1e-4);
    }

    #[test]
    fn test_orbit_offset_elevation() {
        let offset = orbit_offset(0.0, 0.5, 10.0);
        assert!((offset.y - 10.0 * 0.5f32.sin()).abs() < 1e-5);
        // Yaw 0 keeps the camera on the +Z side
        assert!(offset.z > 0.0);
        assert!(offset.x.abs() < 1e-5);
    }

    #[rstest]
    #[case(1200.0, 800.0, 1.5)]
    #[case(800.0, 600.0, 800.0 / 600.0)]
    #[case(640.0, 0.0, 1.0)] // minimized window
    fn test_viewport_aspect(#[case] width: f32, #[case] height: f32, #[case] expected: f32) {
        assert!((viewport_aspect(width, height) - expected).abs() < 1e-6);
    }
}
