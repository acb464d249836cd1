//! Locomotion domain: first-person look, ground movement, jumping and wall jumping.

mod bootstrap;
mod components;
mod events;
mod resources;
pub mod smoothing;
mod systems;
pub mod updater;

pub use components::{Grounded, LocomotionState, MoveRequest, Player, PlayerCamera};
pub use events::{ContactNormal, latest_contact};
pub use resources::{
    InputConfig, LocomotionConfig, LocomotionInput, LookEnabled, SpawnPoint, WallJumpPolicy,
};
pub use updater::{FrameInput, JumpKind, TickOutput, init, tick};

use bevy::prelude::*;

use crate::locomotion::bootstrap::spawn_player;
use crate::locomotion::systems::{advance_locomotion, apply_camera, read_input};

/// Ordering seam for hosts that plug their own mover in.
///
/// A mover should run after `Advance`, consume [`MoveRequest`], and report
/// back through [`Grounded`] and [`ContactNormal`].
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum LocomotionSystems {
    Input,
    Advance,
    Camera,
}

pub struct LocomotionPlugin;

impl Plugin for LocomotionPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<LocomotionConfig>()
            .init_resource::<InputConfig>()
            .init_resource::<LocomotionInput>()
            .init_resource::<LookEnabled>()
            .init_resource::<SpawnPoint>()
            .add_message::<ContactNormal>()
            .configure_sets(
                Update,
                (
                    LocomotionSystems::Input,
                    LocomotionSystems::Advance,
                    LocomotionSystems::Camera,
                )
                    .chain(),
            )
            .add_systems(Startup, spawn_player)
            .add_systems(Update, read_input.in_set(LocomotionSystems::Input))
            .add_systems(
                Update,
                advance_locomotion.in_set(LocomotionSystems::Advance),
            )
            .add_systems(Update, apply_camera.in_set(LocomotionSystems::Camera));
    }
}
