//! Movement domain: per-step state machine drive and fixed-tick velocity write.

use avian3d::prelude::*;
use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::config::LocomotionConfig;
use crate::movement::systems::orientation::facing_toward;
use crate::movement::{LocomotionInput, LocomotionState, Player, PostureChanged, RollStarted};

/// Runs the state machine once per logic step. All downstream systems
/// (posture, orientation, animation) consume what this writes.
pub(crate) fn update_locomotion(
    time: Res<Time>,
    config: Res<LocomotionConfig>,
    input: Res<LocomotionInput>,
    mut posture_events: MessageWriter<PostureChanged>,
    mut roll_events: MessageWriter<RollStarted>,
    mut query: Query<(Entity, &mut LocomotionState, &mut Transform), With<Player>>,
) {
    let now = time.elapsed_secs_f64();
    let dt = time.delta_secs();

    for (entity, mut state, mut transform) in &mut query {
        let fwd = transform.forward();
        let transitions = state.step(&input, &config, Vec2::new(fwd.x, fwd.z), now, dt);

        if let Some(direction) = transitions.roll_started {
            // The roll commits instantly: facing snaps, no smoothing.
            transform.rotation = facing_toward(direction);
            roll_events.write(RollStarted { entity, direction });
            debug!("Roll started: direction={:?}", direction);
        }
        if transitions.crouch_entered {
            posture_events.write(PostureChanged {
                entity,
                crouched: true,
            });
        }
        if transitions.crouch_exited {
            posture_events.write(PostureChanged {
                entity,
                crouched: false,
            });
        }
    }
}

/// Fixed-tick write into the rigid body. Only copies the velocity the logic
/// step already computed; the speed tier is never re-derived here. The
/// vertical axis stays with gravity.
pub(crate) fn apply_velocity(
    mut query: Query<(&LocomotionState, &mut LinearVelocity), With<Player>>,
) {
    for (state, mut velocity) in &mut query {
        velocity.x = state.target_velocity.x;
        velocity.z = state.target_velocity.y;
    }
}
