//! Locomotion domain: player and camera spawn.

use bevy::prelude::*;

use crate::locomotion::{
    Grounded, LocomotionConfig, MoveRequest, Player, PlayerCamera, SpawnPoint, init,
};

/// Camera height above the centre of the body
pub(crate) const EYE_HEIGHT: f32 = 0.7;

pub(crate) fn spawn_player(
    mut commands: Commands,
    config: Res<LocomotionConfig>,
    spawn_point: Res<SpawnPoint>,
    existing_player: Query<Entity, With<Player>>,
) {
    if !existing_player.is_empty() {
        info!("Player already exists, skipping spawn");
        return;
    }

    let body = commands
        .spawn((
            Player,
            init(&config),
            Grounded::default(),
            MoveRequest::default(),
            Transform::from_translation(spawn_point.0),
            Visibility::default(),
        ))
        .id();

    commands.entity(body).with_children(|parent| {
        parent.spawn((
            PlayerCamera { body },
            Camera3d::default(),
            Projection::from(PerspectiveProjection {
                fov: config.base_fov.to_radians(),
                ..default()
            }),
            Transform::from_xyz(0.0, EYE_HEIGHT, 0.0),
        ));
    });

    info!(
        "Spawning player at {:?}: speed {}..{} over {:.1}s, fov {}..{}, jump height {:.2}",
        spawn_point.0,
        config.base_speed,
        config.max_speed,
        config.time_to_max_speed(),
        config.base_fov,
        config.max_fov,
        config.jump_height()
    );
}
