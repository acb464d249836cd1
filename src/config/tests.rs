use std::path::Path;

use super::loader::parse_settings;
use super::*;
use crate::locomotion::{LocomotionConfig, WallJumpPolicy};

// ============================================================================
// Parsing
// ============================================================================

#[test]
fn test_bundled_settings_file_loads_cleanly() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join(DEFAULT_SETTINGS_PATH);
    let settings = load_settings(&path).expect("bundled settings should parse");

    assert_eq!(settings.schema_version, SETTINGS_SCHEMA_VERSION);
    assert_eq!(settings.locomotion, LocomotionConfig::default());
    assert!(
        validate_settings(&settings).is_empty(),
        "bundled settings should validate"
    );
}

#[test]
fn test_empty_document_uses_defaults() {
    let settings = parse_settings("()", "inline").expect("empty struct should parse");
    assert_eq!(settings, LocomotionSettings::default());
}

#[test]
fn test_partial_document_overrides_only_named_fields() {
    let text = r#"(
        locomotion: (
            max_speed: 14.0,
            wall_jump_policy: ResetSpeedAndFov,
        ),
        input: (lock_cursor: false),
    )"#;
    let settings = parse_settings(text, "inline").expect("partial settings should parse");

    assert_eq!(settings.locomotion.max_speed, 14.0);
    assert_eq!(
        settings.locomotion.wall_jump_policy,
        WallJumpPolicy::ResetSpeedAndFov
    );
    assert_eq!(settings.locomotion.base_speed, 6.0);
    assert_eq!(settings.locomotion.gravity, -15.0);
    assert!(!settings.input.lock_cursor);
    assert_eq!(settings.input.look_scale, 0.1);
}

#[test]
fn test_parse_error_names_the_file() {
    let err = parse_settings("(locomotion: (max_speed: \"fast\"))", "broken.ron")
        .expect_err("string for a float should fail");

    assert_eq!(err.file, "broken.ron");
    assert!(err.message.starts_with("Parse error"));
    assert!(err.to_string().contains("broken.ron"));
}

#[test]
fn test_unknown_policy_is_rejected() {
    let result = parse_settings("(locomotion: (wall_jump_policy: Bounce))", "inline");
    assert!(result.is_err());
}

#[test]
fn test_missing_file_is_an_io_error() {
    let err = load_settings(Path::new("does/not/exist/locomotion.ron"))
        .expect_err("missing file should fail");

    assert!(err.message.starts_with("IO error"));
    assert!(err.file.ends_with("locomotion.ron"));
}

// ============================================================================
// Validation
// ============================================================================

fn fields(issues: &[ConfigIssue]) -> Vec<&'static str> {
    issues.iter().map(|issue| issue.field).collect()
}

#[test]
fn test_default_config_has_no_issues() {
    assert!(validate_config(&LocomotionConfig::default()).is_empty());
}

#[test]
fn test_inverted_ranges_are_flagged() {
    let config = LocomotionConfig {
        base_speed: 10.0,
        max_speed: 6.0,
        base_fov: 90.0,
        max_fov: 60.0,
        ..default_config()
    };
    let issues = validate_config(&config);

    assert_eq!(fields(&issues), vec!["max_speed", "max_fov"]);
}

#[test]
fn test_upward_gravity_is_flagged() {
    let config = LocomotionConfig {
        gravity: 0.0,
        ..default_config()
    };
    assert_eq!(fields(&validate_config(&config)), vec!["gravity"]);
}

#[test]
fn test_non_finite_value_is_flagged() {
    let config = LocomotionConfig {
        jump_force: f32::NAN,
        ..default_config()
    };
    let issues = validate_config(&config);

    assert_eq!(fields(&issues), vec!["jump_force"]);
    assert!(issues[0].to_string().contains("not finite"));
}

#[test]
fn test_zero_smooth_times_are_flagged() {
    let config = LocomotionConfig {
        move_smooth_time: 0.0,
        look_smooth_time: -1.0,
        ..default_config()
    };
    assert_eq!(
        fields(&validate_config(&config)),
        vec!["move_smooth_time", "look_smooth_time"]
    );
}

#[test]
fn test_negative_rates_are_flagged() {
    let config = LocomotionConfig {
        deceleration_rate: -2.0,
        ..default_config()
    };
    assert_eq!(fields(&validate_config(&config)), vec!["deceleration_rate"]);
}

#[test]
fn test_wrong_schema_version_is_flagged() {
    let settings = LocomotionSettings {
        schema_version: 7,
        ..LocomotionSettings::default()
    };
    assert_eq!(fields(&validate_settings(&settings)), vec!["schema_version"]);
}

fn default_config() -> LocomotionConfig {
    LocomotionConfig::default()
}
