//! Config domain: locomotion tuning definition.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Load-time locomotion tuning. Immutable once inserted; the running state
/// machine assumes a validated config and performs no per-step checks.
#[derive(Resource, Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LocomotionConfig {
    pub crouch_speed: f32,
    pub walk_speed: f32,
    pub run_speed: f32,
    /// Slerp rate toward the movement direction, per second.
    pub rotation_speed: f32,
    pub roll_speed: f32,
    pub roll_duration: f32,
    pub roll_cooldown: f32,
    pub capsule_radius: f32,
    /// Total capsule height while crouched.
    pub crouch_height: f32,
    /// Total capsule height while standing (and rolling).
    pub stand_height: f32,
    pub stand_center_y: f32,
    pub crouch_center_y: f32,
}

impl Default for LocomotionConfig {
    fn default() -> Self {
        Self {
            crouch_speed: 2.0,
            walk_speed: 4.0,
            run_speed: 8.0,
            rotation_speed: 15.0,
            roll_speed: 15.0,
            roll_duration: 0.5,
            roll_cooldown: 1.0,
            capsule_radius: 0.3,
            crouch_height: 1.2,
            stand_height: 1.8,
            stand_center_y: 0.9,
            crouch_center_y: 0.6,
        }
    }
}

impl LocomotionConfig {
    /// Cylinder segment for an avian capsule of the given total height.
    /// Degenerate (height below the two end caps) clamps to a sphere pair.
    pub fn cylinder_length(&self, height: f32) -> f32 {
        (height - 2.0 * self.capsule_radius).max(0.0)
    }

    /// Capsule height and center offset for a posture.
    pub fn capsule_for(&self, crouched: bool) -> (f32, f32) {
        if crouched {
            (self.crouch_height, self.crouch_center_y)
        } else {
            (self.stand_height, self.stand_center_y)
        }
    }
}
