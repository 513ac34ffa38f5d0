// disable console on windows for release builds
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use bevy::DefaultPlugins;
use bevy::prelude::*;
use bevy::window::{PresentMode, WindowResolution};
use night_farm::DioramaPlugin;

fn main() {
    App::new()
        // Night-sky background, #060945
        .insert_resource(ClearColor(Color::srgb_u8(0x06, 0x09, 0x45)))
        // Single cool ambient light so the farm stays visible at night
        .insert_resource(AmbientLight {
            color: Color::srgb_u8(0x88, 0x88, 0xaa),
            brightness: 400.0,
            ..default()
        })
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Night Farm".into(),
                resolution: WindowResolution::new(1280, 720),
                present_mode: PresentMode::AutoVsync,
                resize_constraints: WindowResizeConstraints {
                    min_width: 800.0,
                    min_height: 600.0,
                    ..default()
                },
                ..default()
            }),
            ..default()
        }))
        .add_plugins(DioramaPlugin)
        .run();
}
