//! Debug tools for inspecting the locomotion controller.
//!
//! F3 toggles gizmos for the movement intent, facing and target velocity;
//! posture and roll transitions are logged as they happen.

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::movement::{LocomotionState, Player, PostureChanged, RollStarted};

/// Resource tracking debug overlay state.
#[derive(Resource, Debug)]
pub struct DebugState {
    pub gizmos_visible: bool,
}

impl Default for DebugState {
    fn default() -> Self {
        Self {
            gizmos_visible: true,
        }
    }
}

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DebugState>().add_systems(
            Update,
            (toggle_debug, log_transitions, draw_locomotion_gizmos),
        );
    }
}

fn toggle_debug(keyboard: Res<ButtonInput<KeyCode>>, mut state: ResMut<DebugState>) {
    if keyboard.just_pressed(KeyCode::F3) {
        state.gizmos_visible = !state.gizmos_visible;
        info!(
            "Locomotion gizmos: {}",
            if state.gizmos_visible { "on" } else { "off" }
        );
    }
}

fn log_transitions(
    mut posture_events: MessageReader<PostureChanged>,
    mut roll_events: MessageReader<RollStarted>,
) {
    for event in posture_events.read() {
        info!(
            "Posture: {}",
            if event.crouched { "crouch" } else { "stand" }
        );
    }
    for event in roll_events.read() {
        info!("Roll started toward {:?}", event.direction);
    }
}

fn draw_locomotion_gizmos(
    state: Res<DebugState>,
    mut gizmos: Gizmos,
    players: Query<(&Transform, &LocomotionState), With<Player>>,
) {
    if !state.gizmos_visible {
        return;
    }
    for (transform, locomotion) in &players {
        let origin = transform.translation + Vec3::Y * 0.1;

        let intent = Vec3::new(locomotion.intent.x, 0.0, locomotion.intent.y);
        if intent != Vec3::ZERO {
            gizmos.arrow(origin, origin + intent * 1.5, Color::srgb(0.2, 0.9, 0.3));
        }

        gizmos.arrow(
            origin,
            origin + transform.forward() * 1.2,
            Color::srgb(0.9, 0.8, 0.2),
        );

        let velocity = Vec3::new(
            locomotion.target_velocity.x,
            0.0,
            locomotion.target_velocity.y,
        );
        if velocity != Vec3::ZERO {
            gizmos.arrow(origin, origin + velocity * 0.2, Color::srgb(0.3, 0.5, 0.95));
        }
    }
}
