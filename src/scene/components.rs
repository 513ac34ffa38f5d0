use bevy::prelude::*;

/// Parent of the 1000 static sky stars.
#[derive(Component)]
pub struct SkyDome;

#[derive(Component)]
pub struct SkyStar;

/// The moon quad, kept screen-aligned by `billboard_moon`.
#[derive(Component)]
pub struct Moon;

#[derive(Component)]
pub struct Ground;

#[derive(Component)]
pub struct Crop;

#[derive(Component)]
pub struct Farmhouse;

#[derive(Component)]
pub struct Barn;
