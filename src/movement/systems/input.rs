//! Movement domain: input sampling for locomotion.

use bevy::prelude::*;

use crate::movement::LocomotionInput;

pub(crate) fn sample_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut input: ResMut<LocomotionInput>,
) {
    // Horizontal axis (world X)
    let mut x = 0.0;
    if keyboard.pressed(KeyCode::KeyA) || keyboard.pressed(KeyCode::ArrowLeft) {
        x -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyD) || keyboard.pressed(KeyCode::ArrowRight) {
        x += 1.0;
    }

    // Vertical axis (world Z; screen-up is -Z)
    let mut z = 0.0;
    if keyboard.pressed(KeyCode::KeyW) || keyboard.pressed(KeyCode::ArrowUp) {
        z -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyS) || keyboard.pressed(KeyCode::ArrowDown) {
        z += 1.0;
    }

    input.axis = Vec2::new(x, z);
    input.roll_pressed = keyboard.just_pressed(KeyCode::Space);
    input.crouch_held =
        keyboard.pressed(KeyCode::ControlLeft) || keyboard.pressed(KeyCode::ControlRight);
    input.sprint_held =
        keyboard.pressed(KeyCode::ShiftLeft) || keyboard.pressed(KeyCode::ShiftRight);
    input.combat_toggle_pressed = keyboard.just_pressed(KeyCode::KeyQ);
}
