//! Movement domain: unit tests for the locomotion state machine.

use bevy::prelude::*;

use super::components::{LocomotionState, SpeedTier, Stance};
use super::resources::LocomotionInput;
use super::systems::orientation::{aim_rotation, facing_toward};
use crate::config::LocomotionConfig;

const DT: f32 = 1.0 / 60.0;
/// Facing used when a roll starts with no movement intent.
const FORWARD: Vec2 = Vec2::new(0.0, -1.0);

fn config() -> LocomotionConfig {
    LocomotionConfig::default()
}

fn input(axis: Vec2) -> LocomotionInput {
    LocomotionInput {
        axis,
        ..Default::default()
    }
}

#[test]
fn test_walk_and_run_tiers() {
    let config = config();
    let mut state = LocomotionState::default();

    state.step(&input(Vec2::new(0.0, 1.0)), &config, FORWARD, 0.0, DT);
    assert_eq!(state.tier, SpeedTier::Walk);
    assert_eq!(state.target_velocity, Vec2::new(0.0, config.walk_speed));

    let sprint = LocomotionInput {
        axis: Vec2::new(0.0, 1.0),
        sprint_held: true,
        ..Default::default()
    };
    state.step(&sprint, &config, FORWARD, DT as f64, DT);
    assert_eq!(state.tier, SpeedTier::Run);
    assert_eq!(state.target_velocity, Vec2::new(0.0, config.run_speed));
}

#[test]
fn test_sprint_without_intent_stays_walk_tier() {
    let config = config();
    let mut state = LocomotionState::default();

    let sprint_idle = LocomotionInput {
        sprint_held: true,
        ..Default::default()
    };
    state.step(&sprint_idle, &config, FORWARD, 0.0, DT);
    assert_eq!(state.tier, SpeedTier::Walk);
    assert_eq!(state.target_velocity, Vec2::ZERO);
}

#[test]
fn test_crouch_speed_overrides_sprint() {
    let config = config();
    let mut state = LocomotionState::default();

    let crouch_sprint = LocomotionInput {
        axis: Vec2::new(1.0, 0.0),
        crouch_held: true,
        sprint_held: true,
        ..Default::default()
    };
    state.step(&crouch_sprint, &config, FORWARD, 0.0, DT);
    assert_eq!(state.stance, Stance::Crouching);
    assert_eq!(state.tier, SpeedTier::Crouch);
    assert_eq!(state.target_velocity, Vec2::new(config.crouch_speed, 0.0));
}

#[test]
fn test_crouch_lock_swallows_roll() {
    let config = config();
    let mut state = LocomotionState::default();

    let crouch = LocomotionInput {
        crouch_held: true,
        ..Default::default()
    };
    state.step(&crouch, &config, FORWARD, 0.0, DT);
    assert_eq!(state.stance, Stance::Crouching);

    // Cooldown is long satisfied (first roll is always allowed), yet the
    // crouch lock still wins.
    let roll_while_crouched = LocomotionInput {
        roll_pressed: true,
        crouch_held: true,
        ..Default::default()
    };
    let transitions = state.step(&roll_while_crouched, &config, FORWARD, 1.0, DT);
    assert_eq!(state.stance, Stance::Crouching);
    assert!(transitions.roll_started.is_none());
}

#[test]
fn test_first_roll_is_immediately_allowed() {
    let config = config();
    let mut state = LocomotionState::default();

    let roll = LocomotionInput {
        axis: Vec2::new(1.0, 0.0),
        roll_pressed: true,
        ..Default::default()
    };
    let transitions = state.step(&roll, &config, FORWARD, 0.0, DT);
    assert!(state.stance.is_rolling());
    assert_eq!(transitions.roll_started, Some(Vec2::new(1.0, 0.0)));
}

#[test]
fn test_roll_cooldown_is_a_closed_interval() {
    let config = config();
    let mut state = LocomotionState {
        last_roll_end: 10.0,
        ..Default::default()
    };

    let roll = LocomotionInput {
        axis: Vec2::new(1.0, 0.0),
        roll_pressed: true,
        ..Default::default()
    };

    // Just under the cooldown: ignored.
    state.step(&roll, &config, FORWARD, 10.0 + f64::from(config.roll_cooldown) - 1e-3, DT);
    assert!(!state.stance.is_rolling());

    // Exactly at the cooldown: allowed.
    state.step(&roll, &config, FORWARD, 10.0 + f64::from(config.roll_cooldown), DT);
    assert!(state.stance.is_rolling());
}

#[test]
fn test_roll_holds_direction_and_speed_against_input_changes() {
    let config = config();
    let mut state = LocomotionState::default();
    let direction = Vec2::new(0.0, 1.0);

    let roll = LocomotionInput {
        axis: direction,
        roll_pressed: true,
        ..Default::default()
    };
    state.step(&roll, &config, FORWARD, 0.0, DT);
    assert_eq!(state.target_velocity, direction * config.roll_speed);

    // Wildly different input during the roll window changes nothing.
    let contrary = LocomotionInput {
        axis: Vec2::new(-1.0, 0.0),
        roll_pressed: true,
        crouch_held: true,
        sprint_held: true,
        ..Default::default()
    };
    let mut now = 0.0_f64;
    let dt = 0.1;
    for _ in 0..4 {
        now += f64::from(dt);
        let transitions = state.step(&contrary, &config, FORWARD, now, dt);
        assert!(state.stance.is_rolling());
        assert_eq!(state.target_velocity, direction * config.roll_speed);
        assert_eq!(state.intent, direction);
        assert_eq!(transitions, Default::default());
    }

    // Fifth step crosses roll_duration (0.5s): the roll completes.
    now += f64::from(dt);
    state.step(&contrary, &config, FORWARD, now, dt);
    assert_eq!(state.stance, Stance::Standing);
    assert_eq!(state.target_velocity, Vec2::ZERO);
    assert_eq!(state.last_roll_end, now);
}

#[test]
fn test_roll_lands_standing_even_with_crouch_held_throughout() {
    let config = config();
    let mut state = LocomotionState::default();

    let roll = LocomotionInput {
        axis: Vec2::new(1.0, 0.0),
        roll_pressed: true,
        ..Default::default()
    };
    state.step(&roll, &config, FORWARD, 0.0, DT);

    let crouch = LocomotionInput {
        crouch_held: true,
        ..Default::default()
    };
    let mut now = 0.0_f64;
    while state.stance.is_rolling() {
        now += 0.1;
        state.step(&crouch, &config, FORWARD, now, 0.1);
    }
    // The completing step itself lands standing; crouch is not restored.
    assert_eq!(state.stance, Stance::Standing);
}

#[test]
fn test_roll_without_intent_uses_current_facing() {
    let config = config();
    let mut state = LocomotionState::default();

    let roll = LocomotionInput {
        roll_pressed: true,
        ..Default::default()
    };
    let transitions = state.step(&roll, &config, FORWARD, 0.0, DT);
    assert_eq!(transitions.roll_started, Some(FORWARD));
    assert_eq!(state.target_velocity, FORWARD * config.roll_speed);
}

#[test]
fn test_combat_toggle_is_suspended_while_rolling() {
    let config = config();
    let mut state = LocomotionState::default();

    let roll = LocomotionInput {
        axis: Vec2::new(1.0, 0.0),
        roll_pressed: true,
        ..Default::default()
    };
    state.step(&roll, &config, FORWARD, 0.0, DT);

    let toggle = LocomotionInput {
        combat_toggle_pressed: true,
        ..Default::default()
    };
    state.step(&toggle, &config, FORWARD, 0.1, 0.1);
    assert!(state.stance.is_rolling());
    assert!(!state.combat_mode);
}

#[test]
fn test_crouch_edges_fire_exactly_once() {
    let config = config();
    let mut state = LocomotionState::default();

    let crouch = LocomotionInput {
        crouch_held: true,
        ..Default::default()
    };
    let first = state.step(&crouch, &config, FORWARD, 0.0, DT);
    assert!(first.crouch_entered);
    let second = state.step(&crouch, &config, FORWARD, 0.1, DT);
    assert!(!second.crouch_entered && !second.crouch_exited);

    let release = input(Vec2::ZERO);
    let third = state.step(&release, &config, FORWARD, 0.2, DT);
    assert!(third.crouch_exited);
    let fourth = state.step(&release, &config, FORWARD, 0.3, DT);
    assert!(!fourth.crouch_entered && !fourth.crouch_exited);
}

#[test]
fn test_capsule_dimensions_restore_exactly() {
    let config = config();
    let (crouch_height, crouch_center) = config.capsule_for(true);
    assert_eq!(crouch_height, config.crouch_height);
    assert_eq!(crouch_center, config.crouch_center_y);

    // Enter then immediately exit: stand values, no residue.
    let (height, center) = config.capsule_for(false);
    assert_eq!(height, config.stand_height);
    assert_eq!(center, config.stand_center_y);
}

#[test]
fn test_animation_speed_scalar() {
    let config = config();
    let mut state = LocomotionState::default();

    state.step(&input(Vec2::ZERO), &config, FORWARD, 0.0, DT);
    assert_eq!(state.animation_speed(), 0.0);

    state.step(&input(Vec2::new(0.0, 1.0)), &config, FORWARD, 0.1, DT);
    assert_eq!(state.animation_speed(), 0.5);

    let crouch_walk = LocomotionInput {
        axis: Vec2::new(0.0, 1.0),
        crouch_held: true,
        ..Default::default()
    };
    state.step(&crouch_walk, &config, FORWARD, 0.2, DT);
    assert_eq!(state.animation_speed(), 0.5);

    let sprint = LocomotionInput {
        axis: Vec2::new(0.0, 1.0),
        sprint_held: true,
        ..Default::default()
    };
    state.step(&sprint, &config, FORWARD, 0.3, DT);
    assert_eq!(state.animation_speed(), 1.0);
}

#[test]
fn test_intent_is_normalized_and_zero_preserved() {
    let config = config();
    let mut state = LocomotionState::default();

    state.step(&input(Vec2::new(3.0, 4.0)), &config, FORWARD, 0.0, DT);
    assert!((state.intent.length() - 1.0).abs() < 1e-6);

    state.step(&input(Vec2::ZERO), &config, FORWARD, 0.1, DT);
    assert_eq!(state.intent, Vec2::ZERO);
}

#[test]
fn test_facing_toward_points_forward_along_direction() {
    // Intent (0, 1) means world +Z; the rotated forward (-Z) must land there.
    let rotation = facing_toward(Vec2::new(0.0, 1.0));
    let forward = rotation * Vec3::NEG_Z;
    assert!(forward.abs_diff_eq(Vec3::Z, 1e-5));

    let rotation = facing_toward(Vec2::new(1.0, 0.0));
    let forward = rotation * Vec3::NEG_Z;
    assert!(forward.abs_diff_eq(Vec3::X, 1e-5));
}

#[test]
fn test_aim_with_ground_ray_miss_leaves_facing_unchanged() {
    // No hit point means no rotation update at all this step.
    assert_eq!(aim_rotation(None, Vec3::new(2.0, 0.05, -3.0)), None);

    // A hit directly above/below the character degenerates the same way.
    let translation = Vec3::new(1.0, 0.05, 1.0);
    let overhead = Vec3::new(1.0, 5.0, 1.0);
    assert_eq!(aim_rotation(Some(overhead), translation), None);
}

#[test]
fn test_aim_rotation_faces_hit_point_without_pitch() {
    let translation = Vec3::new(0.0, 0.05, 0.0);
    let hit = Vec3::new(3.0, -0.1, 0.0);

    let rotation = aim_rotation(Some(hit), translation).unwrap();
    let forward = rotation * Vec3::NEG_Z;
    // Horizontal projection of the hit point, never pitched up or down.
    assert!(forward.abs_diff_eq(Vec3::X, 1e-5));
    assert!(forward.y.abs() < 1e-5);
}

#[test]
fn test_scenario_walk_forward() {
    let config = config();
    let mut state = LocomotionState::default();

    state.step(&input(Vec2::new(0.0, 1.0)), &config, FORWARD, 0.0, DT);
    assert_eq!(state.tier, SpeedTier::Walk);
    assert_eq!(state.target_velocity, Vec2::new(0.0, config.walk_speed));
    assert_eq!(state.animation_speed(), 0.5);
    assert!(!state.combat_mode);
}

#[test]
fn test_scenario_crouch_press_and_release_across_two_steps() {
    let config = config();
    let mut state = LocomotionState::default();
    let axis = Vec2::new(1.0, 0.0);

    let crouched = LocomotionInput {
        axis,
        crouch_held: true,
        ..Default::default()
    };
    let first = state.step(&crouched, &config, FORWARD, 0.0, DT);
    assert!(first.crouch_entered);
    assert_eq!(state.stance, Stance::Crouching);
    assert_eq!(state.target_velocity, axis * config.crouch_speed);

    let released = input(axis);
    let second = state.step(&released, &config, FORWARD, 0.1, DT);
    assert!(second.crouch_exited);
    assert_eq!(state.stance, Stance::Standing);
    assert_eq!(state.target_velocity, axis * config.walk_speed);
}
