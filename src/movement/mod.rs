//! Movement domain: the player locomotion controller.
//!
//! Input sampling, the stand/crouch/roll state machine, posture-driven
//! capsule resizing, orientation resolution and animation parameter
//! emission. The target velocity is computed exactly once per logic step
//! and only copied to the rigid body on the fixed tick.

mod bootstrap;
mod components;
mod events;
mod resources;
mod systems;
#[cfg(test)]
mod tests;

pub use components::{
    CapsuleMeshes, CollisionCapsule, GameLayer, INTENT_DEADZONE, LocomotionState, Player,
    SpeedTier, Stance, StepTransitions,
};
pub use events::{PostureChanged, RollStarted};
pub use resources::LocomotionInput;

use bevy::prelude::*;

use crate::movement::bootstrap::spawn_player;
use crate::movement::systems::{
    apply_posture, apply_velocity, emit_animation_params, resolve_orientation, sample_input,
    update_locomotion,
};

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<LocomotionInput>()
            .add_message::<PostureChanged>()
            .add_message::<RollStarted>()
            .add_systems(Startup, spawn_player)
            .add_systems(
                Update,
                (
                    sample_input,
                    update_locomotion,
                    apply_posture,
                    resolve_orientation,
                    emit_animation_params,
                )
                    .chain(),
            )
            .add_systems(FixedUpdate, apply_velocity);
    }
}
