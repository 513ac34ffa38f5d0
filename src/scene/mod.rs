pub mod components;
pub mod systems;

use crate::scene::systems::*;
use bevy::prelude::*;

/// Builds the static parts of the diorama once at startup: the star dome,
/// the moon, and the farm geometry. Nothing here has a lifecycle beyond
/// creation.
pub struct ScenePlugin;

impl Plugin for ScenePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, (spawn_sky_dome, spawn_moon, spawn_farm))
            .add_systems(Update, billboard_moon);
    }
}
