use crate::shooting_star::logic::Trail;
use bevy::prelude::*;

/// A shooting star in flight. Velocity is fixed at spawn; the star retires
/// once `life` reaches `max_life`.
#[derive(Component)]
pub struct ShootingStar {
    pub velocity: Vec3,
    pub life: f32,
    pub max_life: f32,
}

/// The star's trail: the ring buffer of recent positions plus the line
/// entity and mesh it is drawn with. The star owns all three; retiring the
/// star despawns the line with it.
#[derive(Component)]
pub struct StarTrail {
    pub buffer: Trail,
    pub line: Entity,
    pub mesh: Handle<Mesh>,
}

/// Marker for the trail line entities.
#[derive(Component)]
pub struct TrailLine;
