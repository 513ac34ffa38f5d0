mod core;
mod helpers;
mod scene;
mod shooting_star;

use crate::core::camera::CameraPlugin;
use crate::scene::ScenePlugin;
use crate::shooting_star::ShootingStarPlugin;

use bevy::app::App;
#[cfg(debug_assertions)]
use bevy::diagnostic::LogDiagnosticsPlugin;
use bevy::prelude::*;

pub struct DioramaPlugin;

impl Plugin for DioramaPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins((CameraPlugin, ScenePlugin, ShootingStarPlugin));

        #[cfg(debug_assertions)]
        {
            app.add_plugins(LogDiagnosticsPlugin::default());
        }
    }
}
