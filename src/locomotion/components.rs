//! Locomotion domain: per-entity state and host-facing components.

use bevy::prelude::*;

/// Marker for the controlled body
#[derive(Component, Debug)]
pub struct Player;

/// Camera parented to a controlled body. Carries pitch and FOV.
#[derive(Component, Debug)]
pub struct PlayerCamera {
    pub body: Entity,
}

/// Smoothed input, vertical motion and wall contact carried between ticks.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct LocomotionState {
    pub smoothed_look: Vec2,
    pub smoothed_look_velocity: Vec2,
    pub smoothed_move: Vec2,
    pub smoothed_move_velocity: Vec2,
    /// Degrees, positive looks down. Always within [-90, 90].
    pub camera_pitch: f32,
    pub vertical_velocity: f32,
    /// Always within [base_speed, max_speed]
    pub current_speed: f32,
    pub near_wall: bool,
    pub wall_normal: Vec3,
    pub has_wall_jumped: bool,
    /// Degrees, the FOV handed to the camera on the last tick
    pub field_of_view: f32,
}

impl LocomotionState {
    /// Whether a jump press while airborne would fire a wall jump
    pub fn wall_jump_ready(&self) -> bool {
        self.near_wall && !self.has_wall_jumped
    }
}

/// Grounded flag reported by the host mover
#[derive(Component, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Grounded(pub bool);

/// Displacement requested from the host mover for the current frame
#[derive(Component, Debug, Default, Clone, Copy, PartialEq)]
pub struct MoveRequest(pub Vec3);
