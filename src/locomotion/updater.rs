//! Locomotion domain: the per-tick kinematic update.
//!
//! Everything here is a function of its arguments only, so any host loop can
//! drive it: build a state with [`init`], then call [`tick`] once per frame.
//! The Bevy systems are a thin adapter around these.
//!
//! Angles are degrees. Positive pitch looks down, positive yaw turns right.

use bevy::math::{Quat, Vec2, Vec3};

use crate::locomotion::smoothing::smooth_damp_vec2;
use crate::locomotion::{LocomotionConfig, LocomotionState};

pub const PITCH_LIMIT: f32 = 90.0;

/// Contacts with a smaller vertical normal component count as walls
pub const WALL_NORMAL_MAX_Y: f32 = 0.1;

/// Everything the host supplies for one tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameInput {
    /// Look delta in device units, x right and y up
    pub raw_look: Vec2,
    /// Move axis in [-1, 1]², x strafe right and y forward
    pub raw_move: Vec2,
    /// Jump edge, true only on the frame the button went down
    pub jump_pressed: bool,
    pub grounded: bool,
    /// Latest collision normal reported since the previous tick
    pub contact_normal: Option<Vec3>,
    /// Body orientation before this tick's yaw
    pub body_rotation: Quat,
}

impl Default for FrameInput {
    fn default() -> Self {
        Self {
            raw_look: Vec2::ZERO,
            raw_move: Vec2::ZERO,
            jump_pressed: false,
            grounded: false,
            contact_normal: None,
            body_rotation: Quat::IDENTITY,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JumpKind {
    #[default]
    None,
    Ground,
    Wall,
}

/// Everything the host consumes after one tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickOutput {
    /// Desired displacement for the collision-aware mover
    pub displacement: Vec3,
    pub pitch: f32,
    pub yaw_delta: f32,
    pub field_of_view: f32,
    /// Body orientation after this tick's yaw
    pub body_rotation: Quat,
    pub jump: JumpKind,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LookOutput {
    pub pitch: f32,
    pub yaw_delta: f32,
}

/// Orientation basis of the body. Forward is -Z, right is +X, up is +Y.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Basis {
    pub forward: Vec3,
    pub right: Vec3,
    pub up: Vec3,
}

impl Basis {
    pub fn from_rotation(rotation: Quat) -> Self {
        Self {
            forward: rotation * Vec3::NEG_Z,
            right: rotation * Vec3::X,
            up: rotation * Vec3::Y,
        }
    }
}

impl Default for Basis {
    fn default() -> Self {
        Self::from_rotation(Quat::IDENTITY)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionInput {
    pub raw_move: Vec2,
    pub jump_pressed: bool,
    pub grounded: bool,
    /// Basis after this tick's yaw has been applied
    pub basis: Basis,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionOutput {
    pub displacement: Vec3,
    pub field_of_view: f32,
    pub jump: JumpKind,
}

/// Fresh state for a newly spawned body.
pub fn init(config: &LocomotionConfig) -> LocomotionState {
    LocomotionState {
        smoothed_look: Vec2::ZERO,
        smoothed_look_velocity: Vec2::ZERO,
        smoothed_move: Vec2::ZERO,
        smoothed_move_velocity: Vec2::ZERO,
        camera_pitch: 0.0,
        vertical_velocity: 0.0,
        current_speed: config.base_speed,
        near_wall: false,
        wall_normal: Vec3::ZERO,
        has_wall_jumped: false,
        field_of_view: config.base_fov,
    }
}

/// Advance one tick: contact, then look, then yaw, then motion.
pub fn tick(
    state: LocomotionState,
    config: &LocomotionConfig,
    frame: &FrameInput,
    dt: f32,
) -> (LocomotionState, TickOutput) {
    let dt = sanitize_dt(dt);
    let mut state = state;

    if let Some(normal) = frame.contact_normal {
        register_contact(&mut state, normal);
    }

    let look_out = look(&mut state, config, frame.raw_look, dt);

    let start_rotation = if frame.body_rotation.is_finite() {
        frame.body_rotation
    } else {
        Quat::IDENTITY
    };
    let body_rotation = apply_yaw(start_rotation, look_out.yaw_delta);

    let motion_out = motion(
        &mut state,
        config,
        &MotionInput {
            raw_move: frame.raw_move,
            jump_pressed: frame.jump_pressed,
            grounded: frame.grounded,
            basis: Basis::from_rotation(body_rotation),
        },
        dt,
    );

    let output = TickOutput {
        displacement: motion_out.displacement,
        pitch: look_out.pitch,
        yaw_delta: look_out.yaw_delta,
        field_of_view: motion_out.field_of_view,
        body_rotation,
        jump: motion_out.jump,
    };
    (state, output)
}

/// Smooth the look delta and accumulate pitch. Yaw is returned, not stored.
pub fn look(
    state: &mut LocomotionState,
    config: &LocomotionConfig,
    raw_look: Vec2,
    dt: f32,
) -> LookOutput {
    let dt = sanitize_dt(dt);
    (state.smoothed_look, state.smoothed_look_velocity) = smooth_damp_vec2(
        state.smoothed_look,
        finite_or_zero(raw_look),
        state.smoothed_look_velocity,
        config.look_smooth_time,
        dt,
    );

    let pitch = state.camera_pitch - state.smoothed_look.y * config.mouse_sensitivity;
    if pitch.is_finite() {
        state.camera_pitch = pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT);
    }

    LookOutput {
        pitch: state.camera_pitch,
        yaw_delta: state.smoothed_look.x * config.mouse_sensitivity,
    }
}

/// Move smoothing, jump state machine, speed ramp, displacement and FOV.
pub fn motion(
    state: &mut LocomotionState,
    config: &LocomotionConfig,
    input: &MotionInput,
    dt: f32,
) -> MotionOutput {
    let dt = sanitize_dt(dt);
    let target = finite_or_zero(input.raw_move).normalize_or_zero();
    (state.smoothed_move, state.smoothed_move_velocity) = smooth_damp_vec2(
        state.smoothed_move,
        target,
        state.smoothed_move_velocity,
        config.move_smooth_time,
        dt,
    );

    let mut wall_impulse = Vec3::ZERO;
    let jump = if input.grounded {
        state.vertical_velocity = 0.0;
        state.has_wall_jumped = false;
        state.near_wall = false;
        if input.jump_pressed {
            state.vertical_velocity = config.jump_force;
            JumpKind::Ground
        } else {
            JumpKind::None
        }
    } else if input.jump_pressed && state.wall_jump_ready() {
        state.vertical_velocity = config.jump_force;
        wall_impulse = state.wall_normal * config.wall_jump_force * dt;
        state.has_wall_jumped = true;
        JumpKind::Wall
    } else {
        state.vertical_velocity += config.gravity * dt;
        JumpKind::None
    };

    // Sharp horizontal turns cancel the ramp
    let accelerating =
        target.y > 0.0 && state.smoothed_look.x.abs() < config.mouse_move_limit;
    state.current_speed = ramp_speed(state.current_speed, config, accelerating, dt);

    if jump == JumpKind::Wall {
        if config.wall_jump_policy.resets_speed() {
            state.current_speed = config.base_speed;
        }
        if config.wall_jump_policy.resets_fov() {
            state.field_of_view = config.base_fov;
        }
    }

    let planar = input.basis.forward * state.smoothed_move.y
        + input.basis.right * state.smoothed_move.x;
    let displacement = planar * state.current_speed * dt
        + input.basis.up * state.vertical_velocity * dt
        + wall_impulse;

    state.field_of_view = if target != Vec2::ZERO {
        speed_fov(config, state.current_speed)
    } else {
        ease_fov(state.field_of_view, config, dt)
    };

    MotionOutput {
        displacement,
        field_of_view: state.field_of_view,
        jump,
    }
}

/// Classify a collision normal. Near-vertical surfaces arm the wall jump,
/// anything else disarms it.
pub fn register_contact(state: &mut LocomotionState, normal: Vec3) {
    if !normal.is_finite() || normal == Vec3::ZERO {
        return;
    }
    if is_wall_normal(normal) {
        state.near_wall = true;
        state.wall_normal = normal;
    } else {
        state.near_wall = false;
    }
}

pub fn is_wall_normal(normal: Vec3) -> bool {
    normal.y.abs() < WALL_NORMAL_MAX_Y
}

/// Accelerate toward `max_speed` or decay toward `base_speed`. The result
/// never drops below `base_speed`, so `max_speed < base_speed` pins it there.
pub fn ramp_speed(speed: f32, config: &LocomotionConfig, accelerating: bool, dt: f32) -> f32 {
    let dt = sanitize_dt(dt);
    if accelerating {
        (speed + config.acceleration_rate * dt)
            .min(config.max_speed)
            .max(config.base_speed)
    } else {
        (speed - config.deceleration_rate * dt).max(config.base_speed)
    }
}

/// FOV keyed to how far `speed` sits along the base..max range.
pub fn speed_fov(config: &LocomotionConfig, speed: f32) -> f32 {
    let range = config.max_speed - config.base_speed;
    let t = if range > f32::EPSILON {
        ((speed - config.base_speed) / range).clamp(0.0, 1.0)
    } else {
        0.0
    };
    lerp(config.base_fov, config.max_fov, t)
}

/// Exponential ease of the previous FOV back toward `base_fov`.
pub fn ease_fov(fov: f32, config: &LocomotionConfig, dt: f32) -> f32 {
    let t = (config.fov_lerp_speed * sanitize_dt(dt)).clamp(0.0, 1.0);
    lerp(fov, config.base_fov, t)
}

/// Rotate about world up. Positive degrees turn right.
pub fn apply_yaw(rotation: Quat, yaw_delta: f32) -> Quat {
    if !yaw_delta.is_finite() {
        return rotation;
    }
    (Quat::from_rotation_y(-yaw_delta.to_radians()) * rotation).normalize()
}

fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

fn finite_or_zero(v: Vec2) -> Vec2 {
    if v.is_finite() { v } else { Vec2::ZERO }
}

/// Non-finite or negative steps become zero, which freezes the tick.
fn sanitize_dt(dt: f32) -> f32 {
    if dt.is_finite() && dt > 0.0 { dt } else { 0.0 }
}
