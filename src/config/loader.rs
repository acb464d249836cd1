//! Loader for the locomotion settings file.

use ron::Options;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::locomotion::{InputConfig, LocomotionConfig};

pub const SETTINGS_SCHEMA_VERSION: u32 = 1;

/// Root of `locomotion.ron`. Every section and field is optional.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct LocomotionSettings {
    pub schema_version: u32,
    pub locomotion: LocomotionConfig,
    pub input: InputConfig,
}

impl Default for LocomotionSettings {
    fn default() -> Self {
        Self {
            schema_version: SETTINGS_SCHEMA_VERSION,
            locomotion: LocomotionConfig::default(),
            input: InputConfig::default(),
        }
    }
}

/// Error type for settings loading failures.
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

impl std::error::Error for ConfigLoadError {}

/// Create RON options with extensions enabled for more flexible parsing.
fn ron_options() -> Options {
    Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

/// Parse settings from RON text. `file` only labels errors.
pub fn parse_settings(contents: &str, file: &str) -> Result<LocomotionSettings, ConfigLoadError> {
    ron_options()
        .from_str(contents)
        .map_err(|e| ConfigLoadError {
            file: file.to_string(),
            message: format!("Parse error: {}", e),
        })
}

/// Load settings from a RON file on disk.
pub fn load_settings(path: &Path) -> Result<LocomotionSettings, ConfigLoadError> {
    let file_name = path.display().to_string();
    let contents = fs::read_to_string(path).map_err(|e| ConfigLoadError {
        file: file_name.clone(),
        message: format!("IO error: {}", e),
    })?;

    parse_settings(&contents, &file_name)
}
