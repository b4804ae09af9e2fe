//! Movement domain: animation parameter emission.

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::anim::AnimatorParams;
use crate::movement::{LocomotionState, Player, RollStarted};

/// Pushes locomotion-derived parameters to the animator, if one is
/// attached; a missing animator just skips the writes. The emitter never
/// smooths the speed scalar, damping is the consumer's business.
pub(crate) fn emit_animation_params(
    mut roll_events: MessageReader<RollStarted>,
    mut query: Query<(&LocomotionState, Option<&mut AnimatorParams>), With<Player>>,
) {
    for event in roll_events.read() {
        if let Ok((_, Some(mut params))) = query.get_mut(event.entity) {
            params.roll_triggered = true;
        }
    }

    for (state, params) in &mut query {
        let Some(mut params) = params else {
            continue;
        };
        // Parameters freeze during the roll's commitment window.
        if state.stance.is_rolling() {
            continue;
        }
        params.crouching = state.stance.is_crouching();
        params.speed_target = state.animation_speed();
    }
}
