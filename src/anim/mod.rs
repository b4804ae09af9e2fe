//! Anim domain: the animation-parameter boundary.
//!
//! `AnimatorParams` is the write surface the locomotion controller targets.
//! The damping system here plays the consumer role a blend tree would
//! normally fill: it eases the damped `speed` toward the raw target and
//! consumes the roll trigger.

use bevy::prelude::*;

/// Time constant for damping the speed scalar toward its target.
const SPEED_DAMP_TIME: f32 = 0.1;

/// Named parameters the locomotion controller writes for the blend tree.
#[derive(Component, Debug, Default)]
pub struct AnimatorParams {
    /// "crouching" boolean parameter.
    pub crouching: bool,
    /// Raw "speed" target in {0, 0.5, 1}; the emitter never smooths it.
    pub speed_target: f32,
    /// Damped "speed" value the blend tree reads.
    pub speed: f32,
    /// "roll" trigger, set at roll entry and consumed here.
    pub roll_triggered: bool,
}

pub struct AnimPlugin;

impl Plugin for AnimPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(PostUpdate, damp_animator_params);
    }
}

/// Consumer-side damping so rapid tier toggles do not pop in the blend tree.
fn damp_animator_params(time: Res<Time>, mut query: Query<&mut AnimatorParams>) {
    let dt = time.delta_secs();
    for mut params in &mut query {
        let blend = 1.0 - (-dt / SPEED_DAMP_TIME).exp();
        params.speed += (params.speed_target - params.speed) * blend;
        if params.roll_triggered {
            debug!("Animator consumed roll trigger");
            params.roll_triggered = false;
        }
    }
}
