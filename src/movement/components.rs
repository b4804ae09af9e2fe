//! Movement domain: player components and the locomotion state machine.

use avian3d::prelude::*;
use bevy::prelude::*;

use crate::config::LocomotionConfig;
use crate::movement::resources::LocomotionInput;

/// Physics layers for collision filtering and aim ray casts.
#[derive(PhysicsLayer, Clone, Copy, Debug, Default)]
pub enum GameLayer {
    #[default]
    Default,
    /// Ground surfaces (the aim ray only hits these)
    Ground,
    /// Player character
    Player,
}

#[derive(Component, Debug)]
pub struct Player;

/// Marker for the resizable collision capsule child of the player.
#[derive(Component, Debug)]
pub struct CollisionCapsule;

/// Pre-built capsule meshes for each posture, swapped alongside the
/// collider so the visuals match the collision shape.
#[derive(Component, Debug)]
pub struct CapsuleMeshes {
    pub stand: Handle<Mesh>,
    pub crouch: Handle<Mesh>,
}

impl CapsuleMeshes {
    pub fn handle_for(&self, crouched: bool) -> Handle<Mesh> {
        if crouched {
            self.crouch.clone()
        } else {
            self.stand.clone()
        }
    }
}

/// Intent vectors shorter than this count as "not moving".
pub const INTENT_DEADZONE: f32 = 0.1;

/// Discrete locomotion mode. The roll's continuation state lives inside the
/// `Rolling` variant, so Rolling+Crouching cannot be represented and the
/// roll direction/elapsed cannot outlive the roll.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Stance {
    #[default]
    Standing,
    Crouching,
    Rolling { direction: Vec2, elapsed: f32 },
}

impl Stance {
    pub fn is_crouching(&self) -> bool {
        matches!(self, Stance::Crouching)
    }

    pub fn is_rolling(&self) -> bool {
        matches!(self, Stance::Rolling { .. })
    }
}

/// Speed tier selected for the current step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SpeedTier {
    #[default]
    Walk,
    Run,
    Crouch,
}

impl SpeedTier {
    pub fn speed(self, config: &LocomotionConfig) -> f32 {
        match self {
            SpeedTier::Walk => config.walk_speed,
            SpeedTier::Run => config.run_speed,
            SpeedTier::Crouch => config.crouch_speed,
        }
    }
}

/// Transition edges produced by a single `LocomotionState::step` call.
/// Callers turn these into events, exactly one per edge.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct StepTransitions {
    pub crouch_entered: bool,
    pub crouch_exited: bool,
    /// Direction the facing snaps to at roll entry.
    pub roll_started: Option<Vec2>,
}

/// Per-character locomotion state, owned exclusively by the movement
/// systems. `target_velocity` is computed once per logic step and only
/// copied on the fixed tick, never re-derived there.
#[derive(Component, Debug)]
pub struct LocomotionState {
    pub stance: Stance,
    /// Normalized horizontal intent (x = world X, y = world Z).
    pub intent: Vec2,
    pub tier: SpeedTier,
    pub target_velocity: Vec2,
    pub last_roll_end: f64,
    pub combat_mode: bool,
}

impl Default for LocomotionState {
    fn default() -> Self {
        Self {
            stance: Stance::Standing,
            intent: Vec2::ZERO,
            tier: SpeedTier::Walk,
            target_velocity: Vec2::ZERO,
            // Guarantees the first roll is never cooldown-gated.
            last_roll_end: f64::NEG_INFINITY,
            combat_mode: false,
        }
    }
}

impl LocomotionState {
    /// Advances the state machine by one logic step.
    ///
    /// `forward` is the character's current facing projected onto the
    /// ground plane, used as the roll direction when there is no movement
    /// intent. `now` is elapsed simulation time in seconds.
    pub fn step(
        &mut self,
        input: &LocomotionInput,
        config: &LocomotionConfig,
        forward: Vec2,
        now: f64,
        dt: f32,
    ) -> StepTransitions {
        let mut transitions = StepTransitions::default();

        // A roll in progress suspends all other input until it completes.
        if let Stance::Rolling { direction, elapsed } = &mut self.stance {
            *elapsed += dt;
            if *elapsed >= config.roll_duration {
                self.target_velocity = Vec2::ZERO;
                self.last_roll_end = now;
                // A roll always lands standing; crouch is never restored.
                self.stance = Stance::Standing;
            } else {
                self.target_velocity = *direction * config.roll_speed;
            }
            return transitions;
        }

        self.intent = input.axis.normalize_or_zero();

        if input.combat_toggle_pressed {
            self.combat_mode = !self.combat_mode;
        }

        // Roll request. The crouch lock swallows it outright; the cooldown
        // gate is a closed interval, so a request at exactly `roll_cooldown`
        // after the last roll ended passes.
        if input.roll_pressed
            && !self.stance.is_crouching()
            && now - self.last_roll_end >= f64::from(config.roll_cooldown)
        {
            let direction = if self.intent.length() > INTENT_DEADZONE {
                self.intent
            } else {
                forward
            };
            self.stance = Stance::Rolling {
                direction,
                elapsed: 0.0,
            };
            self.target_velocity = direction * config.roll_speed;
            transitions.roll_started = Some(direction);
            return transitions;
        }

        // Crouch follows the held key; each edge is reported exactly once.
        if input.crouch_held && !self.stance.is_crouching() {
            self.stance = Stance::Crouching;
            transitions.crouch_entered = true;
        } else if !input.crouch_held && self.stance.is_crouching() {
            self.stance = Stance::Standing;
            transitions.crouch_exited = true;
        }

        self.tier = if self.stance.is_crouching() {
            SpeedTier::Crouch
        } else if input.sprint_held && self.intent != Vec2::ZERO {
            SpeedTier::Run
        } else {
            SpeedTier::Walk
        };
        self.target_velocity = self.intent * self.tier.speed(config);

        transitions
    }

    /// Blend tree scalar: 0 idle, 0.5 walking or crouch-walking, 1 running.
    pub fn animation_speed(&self) -> f32 {
        if self.intent == Vec2::ZERO {
            0.0
        } else if self.tier == SpeedTier::Run {
            1.0
        } else {
            0.5
        }
    }
}
