pub mod components;
pub mod logic;
pub mod systems;
pub mod trail_material;

use crate::shooting_star::systems::*;
use crate::shooting_star::trail_material::TrailMaterial;
use bevy::prelude::*;

/// Spawns shooting stars on a re-randomized timer, advances them every
/// frame, and retires them when their flight time is up.
pub struct ShootingStarPlugin;

impl Plugin for ShootingStarPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(MaterialPlugin::<TrailMaterial>::default())
            .init_resource::<SpawnTimer>()
            .add_systems(Update, (spawn_shooting_stars, advance_shooting_stars));
    }
}
