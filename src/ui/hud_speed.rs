//! UI domain: current speed readout.

use bevy::prelude::*;

use crate::locomotion::{LocomotionState, Player};

const HUD_PADDING: f32 = 16.0;

/// Marker for the speed readout text
#[derive(Component)]
pub struct SpeedText;

pub(crate) fn format_speed(speed: f32) -> String {
    format!("Speed: {:.1}", speed)
}

pub(crate) fn spawn_speed_hud(mut commands: Commands) {
    commands.spawn((
        SpeedText,
        Text::new(format_speed(0.0)),
        TextFont {
            font_size: 20.0,
            ..default()
        },
        TextColor(Color::srgb(0.9, 0.9, 0.9)),
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(HUD_PADDING),
            top: Val::Px(HUD_PADDING),
            ..default()
        },
    ));
}

pub(crate) fn update_speed_hud(
    players: Query<&LocomotionState, (With<Player>, Changed<LocomotionState>)>,
    mut query: Query<&mut Text, With<SpeedText>>,
) {
    let Some(state) = players.iter().next() else {
        return;
    };
    for mut text in &mut query {
        **text = format_speed(state.current_speed);
    }
}
