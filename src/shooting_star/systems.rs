use crate::shooting_star::components::{ShootingStar, StarTrail, TrailLine};
use crate::shooting_star::logic::{Trail, plan_flight, step_star};
use crate::shooting_star::trail_material::TrailMaterial;
use bevy::asset::RenderAssetUsages;
use bevy::mesh::PrimitiveTopology;
use bevy::prelude::*;
use rand::Rng;
use std::time::Duration;

/// Delay between spawns, re-randomized after every firing.
const SPAWN_DELAY_MS: (u64, u64) = (2000, 4000);

/// One-shot timer; each firing schedules the next with a fresh random
/// delay instead of repeating a fixed period.
#[derive(Resource)]
pub struct SpawnTimer(pub Timer);

impl Default for SpawnTimer {
    fn default() -> Self {
        let mut timer = Timer::from_seconds(0.0, TimerMode::Once);
        schedule_next_spawn(&mut timer, &mut rand::rng());
        Self(timer)
    }
}

fn schedule_next_spawn(timer: &mut Timer, rng: &mut impl Rng) {
    let delay = rng.random_range(SPAWN_DELAY_MS.0..=SPAWN_DELAY_MS.1);
    timer.set_duration(Duration::from_millis(delay));
    timer.reset();
}

/// Spawn one shooting star per timer firing: a small bright sphere at the
/// top of the dome plus its trail line entity.
pub fn spawn_shooting_stars(
    mut commands: Commands,
    time: Res<Time>,
    mut timer: ResMut<SpawnTimer>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut trail_materials: ResMut<Assets<TrailMaterial>>,
) {
    if !timer.0.tick(time.delta()).just_finished() {
        return;
    }

    let mut rng = rand::rng();
    let flight = plan_flight(&mut rng);

    let trail_mesh = meshes.add(trail_mesh(flight.start));
    let line = commands
        .spawn((
            Mesh3d(trail_mesh.clone()),
            MeshMaterial3d(trail_materials.add(TrailMaterial::default())),
            Transform::default(),
            TrailLine,
        ))
        .id();

    commands.spawn((
        Mesh3d(meshes.add(Sphere::new(0.1).mesh().uv(6, 6))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::WHITE,
            unlit: true,
            ..default()
        })),
        Transform::from_translation(flight.start),
        ShootingStar {
            velocity: flight.velocity,
            life: 0.0,
            max_life: flight.duration,
        },
        StarTrail {
            buffer: Trail::new(),
            line,
            mesh: trail_mesh,
        },
    ));

    info!("Shooting star spawned, flight time {:.1}s", flight.duration);

    schedule_next_spawn(&mut timer.0, &mut rng);
}

/// Move every active star, refresh its trail geometry, and retire stars
/// whose life is spent. Despawns go through `Commands`, so each star is
/// visited exactly once this tick before removal applies.
pub fn advance_shooting_stars(
    mut commands: Commands,
    time: Res<Time>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut stars: Query<(Entity, &mut Transform, &mut ShootingStar, &mut StarTrail)>,
) {
    let delta = time.delta_secs();

    for (entity, mut transform, mut star, mut trail) in stars.iter_mut() {
        let trail = &mut *trail;
        let expired = step_star(&mut transform.translation, &mut star, &mut trail.buffer, delta);

        if let Some(mesh) = meshes.get_mut(&trail.mesh) {
            write_trail_mesh(&trail.buffer, mesh);
        }

        if expired {
            commands.entity(trail.line).despawn();
            commands.entity(entity).despawn();
        }
    }
}

/// Line-strip mesh seeded with a single point; a one-point strip draws
/// nothing until the first advance fills it in.
fn trail_mesh(start: Vec3) -> Mesh {
    let mut mesh = Mesh::new(PrimitiveTopology::LineStrip, RenderAssetUsages::default());
    mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, vec![[start.x, start.y, start.z]]);
    mesh.insert_attribute(Mesh::ATTRIBUTE_COLOR, vec![[1.0, 1.0, 1.0, 1.0]]);
    mesh
}

/// Rewrite the trail mesh from the ring buffer: positions newest first,
/// vertex alpha 1 - fade index.
fn write_trail_mesh(trail: &Trail, mesh: &mut Mesh) {
    let mut positions = Vec::with_capacity(trail.len());
    let mut colors = Vec::with_capacity(trail.len());
    for (offset, point) in trail.iter().enumerate() {
        positions.push([point.x, point.y, point.z]);
        colors.push([1.0, 1.0, 1.0, 1.0 - trail.fade_index(offset)]);
    }
    mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, positions);
    mesh.insert_attribute(Mesh::ATTRIBUTE_COLOR, colors);
}
