//! Movement domain: collision capsule swap on crouch transitions.

use avian3d::prelude::*;
use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::config::LocomotionConfig;
use crate::movement::{CapsuleMeshes, CollisionCapsule, PostureChanged};

/// Resizes the collision capsule (and its visual mesh) on posture edges.
/// Runs once per transition event, never per step, so the physics side sees
/// no redundant shape churn.
pub(crate) fn apply_posture(
    config: Res<LocomotionConfig>,
    mut events: MessageReader<PostureChanged>,
    mut capsules: Query<
        (
            &ChildOf,
            &CapsuleMeshes,
            &mut Collider,
            &mut Mesh3d,
            &mut Transform,
        ),
        With<CollisionCapsule>,
    >,
) {
    for event in events.read() {
        for (child_of, capsule_meshes, mut collider, mut mesh, mut transform) in &mut capsules {
            if child_of.parent() != event.entity {
                continue;
            }
            let (height, center_y) = config.capsule_for(event.crouched);
            *collider = Collider::capsule(config.capsule_radius, config.cylinder_length(height));
            mesh.0 = capsule_meshes.handle_for(event.crouched);
            transform.translation.y = center_y;
            debug!(
                "Capsule resized: height={}, center_y={}, crouched={}",
                height, center_y, event.crouched
            );
        }
    }
}
