//! Movement domain: sampled input for the current frame.

use bevy::prelude::*;

/// Latest sampled input state. No guarantees beyond "most recent sample";
/// missing devices read as zero/false.
#[derive(Resource, Debug, Default, Clone, Copy)]
pub struct LocomotionInput {
    /// Raw directional axes (x = world X, y = world Z), range [-1, 1] each.
    pub axis: Vec2,
    /// Rising edge, fires once per physical press.
    pub roll_pressed: bool,
    pub crouch_held: bool,
    pub sprint_held: bool,
    /// Rising edge toggling aim-facing orientation.
    pub combat_toggle_pressed: bool,
}
