//! Locomotion domain: tuning, input and policy resources.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// What a wall jump does to the speed ramp and the FOV effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
pub enum WallJumpPolicy {
    /// Keep the built-up speed and FOV through the wall jump
    #[default]
    Preserve,
    /// Drop back to base speed on the wall jump tick
    ResetSpeed,
    /// Drop back to base speed and snap the FOV back to base
    ResetSpeedAndFov,
}

impl WallJumpPolicy {
    pub fn resets_speed(self) -> bool {
        matches!(
            self,
            WallJumpPolicy::ResetSpeed | WallJumpPolicy::ResetSpeedAndFov
        )
    }

    pub fn resets_fov(self) -> bool {
        matches!(self, WallJumpPolicy::ResetSpeedAndFov)
    }
}

/// Per-entity locomotion tuning. Angles are in degrees, distances in world units.
#[derive(Resource, Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct LocomotionConfig {
    /// Degrees of rotation per unit of smoothed look delta
    pub mouse_sensitivity: f32,
    pub base_speed: f32,
    pub max_speed: f32,
    /// Speed gained per second while pushing forward
    pub acceleration_rate: f32,
    /// Speed lost per second otherwise
    pub deceleration_rate: f32,
    /// Vertical acceleration, negative is down
    pub gravity: f32,
    pub jump_force: f32,
    pub wall_jump_force: f32,
    pub base_fov: f32,
    pub max_fov: f32,
    /// Ease-back rate toward `base_fov` while standing still
    pub fov_lerp_speed: f32,
    pub move_smooth_time: f32,
    pub look_smooth_time: f32,
    /// Horizontal look speed above which the speed ramp is cancelled
    pub mouse_move_limit: f32,
    pub wall_jump_policy: WallJumpPolicy,
}

impl Default for LocomotionConfig {
    fn default() -> Self {
        Self {
            mouse_sensitivity: 3.5,
            base_speed: 6.0,
            max_speed: 10.0,
            acceleration_rate: 1.1,
            deceleration_rate: 8.0,
            gravity: -15.0,
            jump_force: 8.0,
            wall_jump_force: 8.0,
            base_fov: 60.0,
            max_fov: 90.0,
            fov_lerp_speed: 5.0,
            move_smooth_time: 0.1,
            look_smooth_time: 0.01,
            mouse_move_limit: 5.0,
            wall_jump_policy: WallJumpPolicy::Preserve,
        }
    }
}

impl LocomotionConfig {
    /// Peak height of a standing jump: h = v² / (2g)
    pub fn jump_height(&self) -> f32 {
        if self.gravity >= 0.0 {
            return f32::INFINITY;
        }
        self.jump_force * self.jump_force / (2.0 * -self.gravity)
    }

    /// Seconds of forward input needed to ramp from base to max speed
    pub fn time_to_max_speed(&self) -> f32 {
        if self.acceleration_rate <= 0.0 {
            return f32::INFINITY;
        }
        (self.max_speed - self.base_speed).max(0.0) / self.acceleration_rate
    }
}

/// Host-side input settings.
#[derive(Resource, Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct InputConfig {
    /// Raw mouse delta (pixels) to look units
    pub look_scale: f32,
    pub lock_cursor: bool,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            look_scale: 0.1,
            lock_cursor: true,
        }
    }
}

/// Raw input sampled this frame.
#[derive(Resource, Debug, Default, Clone, Copy)]
pub struct LocomotionInput {
    /// Look delta, x right and y up
    pub look: Vec2,
    /// Move axis, x strafe right and y forward
    pub axis: Vec2,
    pub jump_just_pressed: bool,
}

/// Whether look input reaches the body. The cursor layer turns it off while
/// the pointer is free.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq)]
pub struct LookEnabled(pub bool);

impl Default for LookEnabled {
    fn default() -> Self {
        Self(true)
    }
}

/// Where the body spawns and respawns, at the centre of its collision box
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct SpawnPoint(pub Vec3);

impl Default for SpawnPoint {
    fn default() -> Self {
        Self(Vec3::new(0.0, 1.0, 6.0))
    }
}
