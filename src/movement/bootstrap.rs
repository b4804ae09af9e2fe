//! Movement domain: player spawn.

use avian3d::prelude::*;
use bevy::prelude::*;

use crate::anim::AnimatorParams;
use crate::config::LocomotionConfig;
use crate::movement::{CapsuleMeshes, CollisionCapsule, GameLayer, LocomotionState, Player};

pub(crate) fn spawn_player(
    mut commands: Commands,
    config: Res<LocomotionConfig>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let radius = config.capsule_radius;
    let length = config.cylinder_length(config.stand_height);
    let capsule_meshes = CapsuleMeshes {
        stand: meshes.add(Capsule3d::new(radius, length)),
        crouch: meshes.add(Capsule3d::new(
            radius,
            config.cylinder_length(config.crouch_height),
        )),
    };

    commands
        .spawn((
            Player,
            LocomotionState::default(),
            AnimatorParams::default(),
            // Physics
            (
                RigidBody::Dynamic,
                // Facing is written by the controller, never by the solver.
                LockedAxes::ROTATION_LOCKED,
                LinearVelocity::default(),
                Friction::new(0.0),
            ),
            Transform::from_xyz(0.0, 0.05, 0.0),
            Visibility::default(),
        ))
        .with_children(|parent| {
            parent.spawn((
                CollisionCapsule,
                Collider::capsule(radius, length),
                CollisionLayers::new(
                    GameLayer::Player,
                    [GameLayer::Default, GameLayer::Ground],
                ),
                Mesh3d(capsule_meshes.handle_for(false)),
                capsule_meshes,
                MeshMaterial3d(materials.add(StandardMaterial {
                    base_color: Color::srgb(0.9, 0.9, 0.9),
                    ..default()
                })),
                Transform::from_xyz(0.0, config.stand_center_y, 0.0),
            ));
            // Nose block so the facing is visible.
            parent.spawn((
                Mesh3d(meshes.add(Cuboid::new(0.12, 0.12, 0.3))),
                MeshMaterial3d(materials.add(StandardMaterial {
                    base_color: Color::srgb(0.85, 0.3, 0.2),
                    ..default()
                })),
                Transform::from_xyz(0.0, config.stand_center_y, -(radius + 0.2)),
            ));
        });

    info!(
        "Player spawned: stand_height={}, crouch_height={}, radius={}",
        config.stand_height, config.crouch_height, radius
    );
}
