//! Locomotion domain: runs one kinematic tick per body per frame.

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::locomotion::{
    ContactNormal, FrameInput, Grounded, JumpKind, LocomotionConfig, LocomotionInput,
    LocomotionState, MoveRequest, Player, latest_contact, tick,
};

pub(crate) fn advance_locomotion(
    time: Res<Time>,
    config: Res<LocomotionConfig>,
    input: Res<LocomotionInput>,
    mut contacts: MessageReader<ContactNormal>,
    mut query: Query<
        (
            Entity,
            &mut LocomotionState,
            &Grounded,
            &mut MoveRequest,
            &mut Transform,
        ),
        With<Player>,
    >,
) {
    let dt = time.delta_secs();
    let contacts: Vec<ContactNormal> = contacts.read().copied().collect();

    for (entity, mut state, grounded, mut request, mut transform) in &mut query {
        let frame = FrameInput {
            raw_look: input.look,
            raw_move: input.axis,
            jump_pressed: input.jump_just_pressed,
            grounded: grounded.0,
            contact_normal: latest_contact(&contacts, entity),
            body_rotation: transform.rotation,
        };

        let (next, output) = tick(*state, &config, &frame, dt);

        match output.jump {
            JumpKind::Ground => {
                debug!(
                    "Ground jump: vertical_velocity={}, speed={:.2}",
                    next.vertical_velocity, next.current_speed
                );
            }
            JumpKind::Wall => {
                debug!(
                    "Wall jump: normal={:?}, vertical_velocity={}, policy={:?}",
                    next.wall_normal, next.vertical_velocity, config.wall_jump_policy
                );
            }
            JumpKind::None => {}
        }

        *state = next;
        transform.rotation = output.body_rotation;
        request.0 = output.displacement;
    }
}
