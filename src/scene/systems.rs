use crate::core::camera::components::MainCamera;
use crate::helpers::dome::{DOME_RADIUS, dome_point};
use crate::scene::components::*;
use bevy::prelude::*;
use rand::Rng;
use std::f32::consts::{FRAC_PI_4, PI, TAU};

pub const SKY_STAR_COUNT: usize = 1000;
const MOON_SIZE: f32 = 20.0;
const GROUND_SIZE: f32 = 50.0;

/// Scatter the static stars on the inner surface of the sky dome. Both
/// angles are sampled uniformly, which bunches stars toward the zenith.
pub fn spawn_sky_dome(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let star_mesh = meshes.add(Sphere::new(0.2).mesh().uv(6, 6));
    let star_material = materials.add(StandardMaterial {
        base_color: Color::WHITE,
        unlit: true,
        ..default()
    });

    let mut rng = rand::rng();

    commands
        .spawn((Transform::default(), Visibility::default(), SkyDome))
        .with_children(|dome| {
            for _ in 0..SKY_STAR_COUNT {
                let theta = rng.random_range(0.0..TAU);
                let phi = rng.random_range(0.0..=PI);
                dome.spawn((
                    Mesh3d(star_mesh.clone()),
                    MeshMaterial3d(star_material.clone()),
                    Transform::from_translation(dome_point(DOME_RADIUS, theta, phi)),
                    SkyStar,
                ));
            }
        });

    info!("Sky dome populated with {} stars", SKY_STAR_COUNT);
}

/// The moon is a textured quad kept camera-aligned by `billboard_moon`.
/// A missing texture just leaves the pale base color.
pub fn spawn_moon(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    asset_server: Res<AssetServer>,
) {
    commands.spawn((
        Mesh3d(meshes.add(Rectangle::new(MOON_SIZE, MOON_SIZE))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::srgb(0.92, 0.92, 0.85),
            base_color_texture: Some(asset_server.load("textures/moon.webp")),
            unlit: true,
            alpha_mode: AlphaMode::Blend,
            ..default()
        })),
        Transform::from_xyz(30.0, 30.0, -50.0),
        Moon,
    ));
}

/// Ground plane, crop row, farmhouse, and barn.
pub fn spawn_farm(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let ground_material = matte(&mut materials, 0x22, 0x44, 0x22);
    let crop_material = matte(&mut materials, 0x33, 0x66, 0x33);
    let house_material = matte(&mut materials, 0x33, 0x22, 0x11);
    let roof_material = matte(&mut materials, 0x55, 0x22, 0x22);
    let barn_material = matte(&mut materials, 0x44, 0x22, 0x22);
    let barn_roof_material = matte(&mut materials, 0x22, 0x22, 0x22);

    commands.spawn((
        Mesh3d(meshes.add(Plane3d::default().mesh().size(GROUND_SIZE, GROUND_SIZE))),
        MeshMaterial3d(ground_material),
        Transform::default(),
        Ground,
    ));

    // Crop row on the left, spaced 2 units apart in z
    let crop_mesh = meshes.add(Cylinder::new(0.2, 1.0).mesh().resolution(6));
    for i in 0..5 {
        let z = -4.0 + 2.0 * i as f32;
        commands.spawn((
            Mesh3d(crop_mesh.clone()),
            MeshMaterial3d(crop_material.clone()),
            Transform::from_xyz(-8.0, 0.5, z),
            Crop,
        ));
    }

    // Farmhouse at the center: box body with a 4-sided pyramid roof
    let roof_mesh = meshes.add(Cone::new(2.5, 1.0).mesh().resolution(4));
    commands
        .spawn((Transform::default(), Visibility::default(), Farmhouse))
        .with_children(|house| {
            house.spawn((
                Mesh3d(meshes.add(Cuboid::new(3.0, 2.0, 3.0))),
                MeshMaterial3d(house_material),
                Transform::from_xyz(0.0, 1.0, 0.0),
            ));
            house.spawn((
                Mesh3d(roof_mesh.clone()),
                MeshMaterial3d(roof_material),
                Transform::from_xyz(0.0, 2.5, 0.0)
                    .with_rotation(Quat::from_rotation_y(FRAC_PI_4)),
            ));
        });

    // Barn on the right: same shape, taller body
    commands
        .spawn((Transform::from_xyz(8.0, 0.0, 0.0), Visibility::default(), Barn))
        .with_children(|barn| {
            barn.spawn((
                Mesh3d(meshes.add(Cuboid::new(3.0, 2.5, 3.0))),
                MeshMaterial3d(barn_material),
                Transform::from_xyz(0.0, 1.25, 0.0),
            ));
            barn.spawn((
                Mesh3d(roof_mesh),
                MeshMaterial3d(barn_roof_material),
                Transform::from_xyz(0.0, 2.75, 0.0)
                    .with_rotation(Quat::from_rotation_y(FRAC_PI_4)),
            ));
        });

    info!("Farm geometry spawned");
}

/// Keep the moon quad facing the camera, like a sprite.
pub fn billboard_moon(
    camera_q: Query<&Transform, (With<MainCamera>, Without<Moon>)>,
    mut moon_q: Query<&mut Transform, With<Moon>>,
) {
    let Ok(camera) = camera_q.single() else {
        return;
    };
    for mut transform in moon_q.iter_mut() {
        transform.rotation = camera.rotation;
    }
}

fn matte(materials: &mut Assets<StandardMaterial>, r: u8, g: u8, b: u8) -> Handle<StandardMaterial> {
    materials.add(StandardMaterial {
        base_color: Color::srgb_u8(r, g, b),
        perceptual_roughness: 1.0,
        ..default()
    })
}
