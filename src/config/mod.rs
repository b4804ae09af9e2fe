//! Config domain: load-time locomotion tuning from RON assets.

mod data;
mod loader;
mod validation;

pub use data::LocomotionConfig;
pub use loader::{ConfigLoadError, load_locomotion_config};
pub use validation::{ConfigError, validate_config};

use bevy::prelude::*;
use std::path::Path;

const CONFIG_PATH: &str = "assets/config/locomotion.ron";

pub struct ConfigPlugin;

impl Plugin for ConfigPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<LocomotionConfig>()
            .add_systems(PreStartup, load_config);
    }
}

/// Loads and validates the locomotion config before anything spawns. A
/// missing or invalid file falls back to the compiled-in defaults, so the
/// running systems always see a validated config.
fn load_config(mut config: ResMut<LocomotionConfig>) {
    let loaded = match load_locomotion_config(Path::new(CONFIG_PATH)) {
        Ok(loaded) => loaded,
        Err(e) => {
            warn!("{}; using built-in locomotion defaults", e);
            return;
        }
    };

    let errors = validate_config(&loaded);
    if errors.is_empty() {
        info!(
            "Locomotion config loaded: walk={}, run={}, crouch={}, roll={}x{}s",
            loaded.walk_speed,
            loaded.run_speed,
            loaded.crouch_speed,
            loaded.roll_speed,
            loaded.roll_duration
        );
        *config = loaded;
    } else {
        for error in &errors {
            error!("Locomotion config rejected: {}", error);
        }
        warn!("Using built-in locomotion defaults");
    }
}
