use crate::core::camera::components::{MainCamera, OrbitCamera};
use crate::core::camera::logic::{OrbitInput, OrbitState, orbit_offset, step_orbit, viewport_aspect};
use bevy::input::ButtonInput;
use bevy::input::mouse::{MouseMotion, MouseWheel};
use bevy::prelude::*;
use bevy::window::WindowResized;

pub fn spawn_camera(mut commands: Commands) {
    commands.spawn((
        Camera3d::default(),
        Projection::Perspective(PerspectiveProjection {
            fov: 60.0_f32.to_radians(),
            near: 0.1,
            far: 200.0,
            ..default()
        }),
        Transform::from_xyz(0.0, 3.0, 10.0).looking_at(Vec3::ZERO, Vec3::Y),
        MainCamera,
        OrbitCamera::default(),
    ));

    info!("Camera spawned");
}

/// Damped orbit control: drag to rotate, wheel to zoom. Pitch is clamped
/// above the horizon and zoom distance to [5, 30].
pub fn orbit_camera_control(
    mouse_input: Res<ButtonInput<MouseButton>>,
    mut mouse_motion: MessageReader<MouseMotion>,
    mut mouse_wheel: MessageReader<MouseWheel>,
    time: Res<Time>,
    mut camera_q: Query<(&mut Transform, &mut OrbitCamera), With<MainCamera>>,
) {
    let Ok((mut transform, mut orbit)) = camera_q.single_mut() else {
        return;
    };

    let mut rotate = Vec2::ZERO;
    if mouse_input.pressed(MouseButton::Left) {
        for ev in mouse_motion.read() {
            rotate += ev.delta;
        }
    } else {
        mouse_motion.clear();
    }

    let mut zoom = 0.0;
    for ev in mouse_wheel.read() {
        zoom += ev.y;
    }

    let mut state = OrbitState {
        yaw: orbit.yaw,
        pitch: orbit.pitch,
        distance: orbit.distance,
        yaw_velocity: orbit.yaw_velocity,
        pitch_velocity: orbit.pitch_velocity,
        zoom_velocity: orbit.zoom_velocity,
    };
    step_orbit(&mut state, &OrbitInput { rotate, zoom }, time.delta_secs());

    orbit.yaw = state.yaw;
    orbit.pitch = state.pitch;
    orbit.distance = state.distance;
    orbit.yaw_velocity = state.yaw_velocity;
    orbit.pitch_velocity = state.pitch_velocity;
    orbit.zoom_velocity = state.zoom_velocity;

    let focus = orbit.focus;
    transform.translation = focus + orbit_offset(orbit.yaw, orbit.pitch, orbit.distance);
    transform.look_at(focus, Vec3::Y);
}

/// Keep the projection's aspect ratio in sync with the window within the
/// same frame as the resize; the render surface itself is resized by the
/// windowing backend.
pub fn handle_viewport_resize(
    mut resize_events: MessageReader<WindowResized>,
    mut camera_q: Query<&mut Projection, With<MainCamera>>,
) {
    for ev in resize_events.read() {
        let aspect = viewport_aspect(ev.width, ev.height);
        for mut projection in camera_q.iter_mut() {
            if let Projection::Perspective(perspective) = projection.as_mut() {
                perspective.aspect_ratio = aspect;
            }
        }
        info!("Viewport resized to {}x{}", ev.width, ev.height);
    }
}
