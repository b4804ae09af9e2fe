//! Config domain: load-time contract checks for locomotion tuning.

use super::data::LocomotionConfig;

/// A validation error with context about which field failed.
#[derive(Debug)]
pub struct ConfigError {
    pub field: &'static str,
    pub message: String,
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Validate the config contract. Returns all violations, empty if valid.
/// A config that fails here must never reach the state machine.
pub fn validate_config(config: &LocomotionConfig) -> Vec<ConfigError> {
    let mut errors = Vec::new();

    let positive = [
        ("crouch_speed", config.crouch_speed),
        ("walk_speed", config.walk_speed),
        ("run_speed", config.run_speed),
        ("rotation_speed", config.rotation_speed),
        ("roll_speed", config.roll_speed),
        ("roll_duration", config.roll_duration),
        ("roll_cooldown", config.roll_cooldown),
        ("capsule_radius", config.capsule_radius),
        ("crouch_height", config.crouch_height),
        ("stand_height", config.stand_height),
        ("stand_center_y", config.stand_center_y),
        ("crouch_center_y", config.crouch_center_y),
    ];
    for (field, value) in positive {
        if value <= 0.0 {
            errors.push(ConfigError {
                field,
                message: format!("must be positive, got {}", value),
            });
        }
    }

    if config.crouch_height >= config.stand_height {
        errors.push(ConfigError {
            field: "crouch_height",
            message: format!(
                "must be below stand_height ({} >= {})",
                config.crouch_height, config.stand_height
            ),
        });
    }

    errors
}
