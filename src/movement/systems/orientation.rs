//! Movement domain: facing resolution, toward movement or the cursor.

use avian3d::prelude::*;
use bevy::prelude::*;

use crate::config::LocomotionConfig;
use crate::movement::{GameLayer, INTENT_DEADZONE, LocomotionState, Player};

/// Yaw-only rotation that points the character's forward (-Z) along
/// `direction` on the ground plane (x = world X, y = world Z).
pub(crate) fn facing_toward(direction: Vec2) -> Quat {
    Quat::from_rotation_y((-direction.x).atan2(-direction.y))
}

/// Rotation for aiming at a ground hit point, with the target held at the
/// character's own height so it never pitches. A missed ray (`None` hit)
/// yields `None`: the facing stays untouched this step.
pub(crate) fn aim_rotation(hit_point: Option<Vec3>, translation: Vec3) -> Option<Quat> {
    let mut look_target = hit_point?;
    look_target.y = translation.y;
    if look_target.distance_squared(translation) <= 1e-6 {
        return None;
    }
    Some(
        Transform::from_translation(translation)
            .looking_at(look_target, Vec3::Y)
            .rotation,
    )
}

pub(crate) fn resolve_orientation(
    time: Res<Time>,
    config: Res<LocomotionConfig>,
    spatial_query: SpatialQuery,
    windows: Query<&Window>,
    cameras: Query<(&Camera, &GlobalTransform), With<Camera3d>>,
    mut players: Query<(&LocomotionState, &mut Transform), With<Player>>,
) {
    for (state, mut transform) in &mut players {
        // Facing was snapped at roll entry and stays fixed until it ends.
        if state.stance.is_rolling() {
            continue;
        }

        if state.combat_mode {
            aim_at_cursor(&spatial_query, &windows, &cameras, &mut transform);
        } else if state.intent.length() > INTENT_DEADZONE {
            let target = facing_toward(state.intent);
            let t = (config.rotation_speed * time.delta_secs()).min(1.0);
            transform.rotation = transform.rotation.slerp(target, t);
        }
    }
}

/// Instant look at the ground point under the cursor. A missed ray or a
/// missing cursor/camera leaves the facing untouched; that is a normal
/// outcome, not an error.
fn aim_at_cursor(
    spatial_query: &SpatialQuery,
    windows: &Query<&Window>,
    cameras: &Query<(&Camera, &GlobalTransform), With<Camera3d>>,
    transform: &mut Transform,
) {
    let Ok(window) = windows.single() else {
        return;
    };
    let Some(cursor) = window.cursor_position() else {
        return;
    };
    let Ok((camera, camera_transform)) = cameras.single() else {
        return;
    };
    let Ok(ray) = camera.viewport_to_world(camera_transform, cursor) else {
        return;
    };

    let ground_filter = SpatialQueryFilter::from_mask(GameLayer::Ground);
    let hit_point = spatial_query
        .cast_ray(ray.origin, ray.direction, f32::MAX, true, &ground_filter)
        .map(|hit| ray.origin + ray.direction * hit.distance);

    if let Some(rotation) = aim_rotation(hit_point, transform.translation) {
        transform.rotation = rotation;
    }
}
