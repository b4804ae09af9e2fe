//! Movement domain: locomotion transition events.

use bevy::ecs::message::Message;
use bevy::prelude::*;

/// Emitted once per crouch transition edge, never per step, so the posture
/// adjuster only touches the collider on actual changes.
#[derive(Debug)]
pub struct PostureChanged {
    pub entity: Entity,
    pub crouched: bool,
}

impl Message for PostureChanged {}

/// Emitted once at roll entry.
#[derive(Debug)]
pub struct RollStarted {
    pub entity: Entity,
    pub direction: Vec2,
}

impl Message for RollStarted {}
