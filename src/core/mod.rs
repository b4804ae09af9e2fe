//! Core domain: camera rig, lighting and the test arena.

use avian3d::prelude::*;
use bevy::prelude::*;

use crate::movement::GameLayer;

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, (setup_camera, setup_arena));
    }
}

fn setup_camera(mut commands: Commands) {
    commands.spawn((
        Camera3d::default(),
        Transform::from_xyz(0.0, 14.0, 9.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));

    commands.spawn((
        DirectionalLight {
            illuminance: 9_000.0,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(6.0, 12.0, 6.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));
}

/// Static slab the player walks on. The aim ray only ever hits the Ground
/// layer, so obstacle blocks stay on the default layer.
fn setup_arena(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    commands.spawn((
        RigidBody::Static,
        Collider::cuboid(40.0, 0.2, 40.0),
        CollisionLayers::new(GameLayer::Ground, LayerMask::ALL),
        Mesh3d(meshes.add(Cuboid::new(40.0, 0.2, 40.0))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::srgb(0.25, 0.3, 0.28),
            ..default()
        })),
        Transform::from_xyz(0.0, -0.1, 0.0),
    ));

    // A few blocks to weave around.
    let block_mesh = meshes.add(Cuboid::new(1.5, 1.0, 1.5));
    let block_material = materials.add(StandardMaterial {
        base_color: Color::srgb(0.45, 0.4, 0.5),
        ..default()
    });
    for (x, z) in [(4.0, -3.0), (-5.0, 2.0), (2.0, 5.0)] {
        commands.spawn((
            RigidBody::Static,
            Collider::cuboid(1.5, 1.0, 1.5),
            Mesh3d(block_mesh.clone()),
            MeshMaterial3d(block_material.clone()),
            Transform::from_xyz(x, 0.5, z),
        ));
    }
}
