//! Config domain: RON loader for the locomotion tuning file.

use ron::Options;
use std::fs;
use std::path::Path;

use super::data::LocomotionConfig;

/// Error type for config loading failures.
#[derive(Debug)]
pub struct ConfigLoadError {
    pub file: String,
    pub message: String,
}

impl std::fmt::Display for ConfigLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to load {}: {}", self.file, self.message)
    }
}

/// RON options with extensions enabled for more flexible parsing.
fn ron_options() -> Options {
    Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

/// Load the locomotion config from a RON file.
pub fn load_locomotion_config(path: &Path) -> Result<LocomotionConfig, ConfigLoadError> {
    let file_name = path.display().to_string();
    let contents = fs::read_to_string(path).map_err(|e| ConfigLoadError {
        file: file_name.clone(),
        message: format!("IO error: {}", e),
    })?;

    ron_options()
        .from_str(&contents)
        .map_err(|e| ConfigLoadError {
            file: file_name,
            message: format!("Parse error: {}", e),
        })
}
