//! Locomotion domain: input sampling.

use bevy::input::mouse::AccumulatedMouseMotion;
use bevy::prelude::*;

use crate::locomotion::{InputConfig, LocomotionInput, LookEnabled};

pub(crate) fn read_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    mouse_motion: Res<AccumulatedMouseMotion>,
    input_config: Res<InputConfig>,
    look_enabled: Res<LookEnabled>,
    mut input: ResMut<LocomotionInput>,
) {
    // Strafe axis
    let mut x = 0.0;
    if keyboard.pressed(KeyCode::KeyA) || keyboard.pressed(KeyCode::ArrowLeft) {
        x -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyD) || keyboard.pressed(KeyCode::ArrowRight) {
        x += 1.0;
    }

    // Forward axis
    let mut y = 0.0;
    if keyboard.pressed(KeyCode::KeyS) || keyboard.pressed(KeyCode::ArrowDown) {
        y -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyW) || keyboard.pressed(KeyCode::ArrowUp) {
        y += 1.0;
    }

    input.axis = Vec2::new(x, y);
    input.jump_just_pressed = keyboard.just_pressed(KeyCode::Space);

    // Screen space grows downward, look space grows upward
    input.look = if look_enabled.0 {
        Vec2::new(mouse_motion.delta.x, -mouse_motion.delta.y) * input_config.look_scale
    } else {
        Vec2::ZERO
    };
}
