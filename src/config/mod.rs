//! Config domain: RON-backed locomotion and input settings.

mod loader;
#[cfg(test)]
mod tests;
mod validation;

pub use loader::{ConfigLoadError, LocomotionSettings, SETTINGS_SCHEMA_VERSION, load_settings};
pub use validation::{ConfigIssue, validate_config, validate_settings};

use bevy::prelude::*;
use std::path::PathBuf;

/// Default location of the settings file, relative to the working directory
pub const DEFAULT_SETTINGS_PATH: &str = "assets/data/locomotion.ron";

/// Loads settings once at build time and inserts them as resources.
///
/// A missing or broken file falls back to defaults with a warning, so the
/// controller always starts.
pub struct ConfigPlugin {
    pub path: PathBuf,
}

impl Default for ConfigPlugin {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_SETTINGS_PATH),
        }
    }
}

impl Plugin for ConfigPlugin {
    fn build(&self, app: &mut App) {
        let settings = match load_settings(&self.path) {
            Ok(settings) => {
                info!("Loaded locomotion settings from {}", self.path.display());
                settings
            }
            Err(e) => {
                warn!("{}; using default locomotion settings", e);
                LocomotionSettings::default()
            }
        };

        let issues = validate_settings(&settings);
        for issue in &issues {
            warn!("Locomotion settings: {}", issue);
        }
        if issues.is_empty() {
            debug!("Locomotion settings: {:?}", settings.locomotion);
        }

        app.insert_resource(settings.locomotion)
            .insert_resource(settings.input);
    }
}
