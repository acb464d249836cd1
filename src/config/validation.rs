//! Sanity checks for loaded locomotion settings.

use super::loader::{LocomotionSettings, SETTINGS_SCHEMA_VERSION};
use crate::locomotion::LocomotionConfig;

/// A value that will not crash the controller but probably is not what was meant.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigIssue {
    pub field: &'static str,
    pub message: String,
}

impl std::fmt::Display for ConfigIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "field '{}' {}", self.field, self.message)
    }
}

macro_rules! check {
    ($issues:expr, $cond:expr, $field:expr, $($msg:tt)+) => {
        if !$cond {
            $issues.push(ConfigIssue {
                field: $field,
                message: format!($($msg)+),
            });
        }
    };
}

/// Check a settings file, including its schema version.
/// Returns a list of issues, empty if everything looks sane.
pub fn validate_settings(settings: &LocomotionSettings) -> Vec<ConfigIssue> {
    let mut issues = validate_config(&settings.locomotion);

    check!(
        issues,
        settings.schema_version == SETTINGS_SCHEMA_VERSION,
        "schema_version",
        "is {}, expected {}",
        settings.schema_version,
        SETTINGS_SCHEMA_VERSION
    );
    check!(
        issues,
        settings.input.look_scale.is_finite() && settings.input.look_scale > 0.0,
        "input.look_scale",
        "must be a positive number, got {}",
        settings.input.look_scale
    );

    issues
}

/// Check locomotion tuning values.
pub fn validate_config(config: &LocomotionConfig) -> Vec<ConfigIssue> {
    let mut issues = Vec::new();

    let fields: [(&'static str, f32); 14] = [
        ("mouse_sensitivity", config.mouse_sensitivity),
        ("base_speed", config.base_speed),
        ("max_speed", config.max_speed),
        ("acceleration_rate", config.acceleration_rate),
        ("deceleration_rate", config.deceleration_rate),
        ("gravity", config.gravity),
        ("jump_force", config.jump_force),
        ("wall_jump_force", config.wall_jump_force),
        ("base_fov", config.base_fov),
        ("max_fov", config.max_fov),
        ("fov_lerp_speed", config.fov_lerp_speed),
        ("move_smooth_time", config.move_smooth_time),
        ("look_smooth_time", config.look_smooth_time),
        ("mouse_move_limit", config.mouse_move_limit),
    ];
    for (field, value) in fields {
        check!(issues, value.is_finite(), field, "is not finite ({})", value);
    }

    check!(
        issues,
        !(config.gravity >= 0.0),
        "gravity",
        "should be negative, got {}",
        config.gravity
    );
    check!(
        issues,
        !(config.max_speed < config.base_speed),
        "max_speed",
        "({}) is below base_speed ({})",
        config.max_speed,
        config.base_speed
    );
    check!(
        issues,
        !(config.max_fov < config.base_fov),
        "max_fov",
        "({}) is below base_fov ({})",
        config.max_fov,
        config.base_fov
    );
    check!(
        issues,
        !(config.move_smooth_time <= 0.0),
        "move_smooth_time",
        "should be positive, got {}",
        config.move_smooth_time
    );
    check!(
        issues,
        !(config.look_smooth_time <= 0.0),
        "look_smooth_time",
        "should be positive, got {}",
        config.look_smooth_time
    );
    for (field, value) in [
        ("acceleration_rate", config.acceleration_rate),
        ("deceleration_rate", config.deceleration_rate),
        ("fov_lerp_speed", config.fov_lerp_speed),
        ("mouse_sensitivity", config.mouse_sensitivity),
    ] {
        check!(issues, !(value < 0.0), field, "should not be negative, got {}", value);
    }

    issues
}
