//! Debug overlay for tuning locomotion in play.
//!
//! F3 toggles a readout of the controller's internal state.


use bevy::prelude::*;

use crate::locomotion::{Grounded, LocomotionState, LocomotionSystems, Player};

// ============================================================================
// Debug State Resource
// ============================================================================

/// Resource tracking debug overlay state
#[derive(Resource, Debug, Default)]
pub struct DebugState {
    /// Whether the locomotion readout is visible
    pub show_info: bool,
}

/// Marker for the debug info overlay
#[derive(Component, Debug)]
pub struct DebugInfoOverlay;

// ============================================================================
// Plugin
// ============================================================================

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DebugState>().add_systems(
            Update,
            (
                toggle_debug_info,
                update_debug_info_overlay.after(LocomotionSystems::Advance),
            )
                .chain(),
        );
    }
}

// ============================================================================
// Systems
// ============================================================================

/// Toggle the info overlay with F3
fn toggle_debug_info(
    mut commands: Commands,
    keyboard: Res<ButtonInput<KeyCode>>,
    mut debug_state: ResMut<DebugState>,
    existing_overlay: Query<Entity, With<DebugInfoOverlay>>,
) {
    if !keyboard.just_pressed(KeyCode::F3) {
        return;
    }

    debug_state.show_info = !debug_state.show_info;
    info!(
        "[DEBUG] Locomotion info {}",
        if debug_state.show_info { "ON" } else { "OFF" }
    );

    if debug_state.show_info {
        spawn_debug_info_overlay(&mut commands);
    } else {
        for entity in &existing_overlay {
            commands.entity(entity).despawn();
        }
    }
}

/// Refresh the overlay text from the player's state
fn update_debug_info_overlay(
    debug_state: Res<DebugState>,
    player_query: Query<(&LocomotionState, &Grounded, &Transform), With<Player>>,
    mut overlay_query: Query<&mut Text, With<DebugInfoOverlay>>,
) {
    if !debug_state.show_info {
        return;
    }

    if let (Some((state, grounded, transform)), Ok(mut text)) =
        (player_query.iter().next(), overlay_query.single_mut())
    {
        **text = format_state(state, grounded.0, transform.translation);
    }
}

pub(crate) fn format_state(state: &LocomotionState, grounded: bool, position: Vec3) -> String {
    format!(
        "Pos: ({:.1}, {:.1}, {:.1})\nSpeed: {:.2}\nVertical: {:.2}\nGrounded: {}\nNear wall: {}\nWall jumped: {}\nPitch: {:.1}\nFOV: {:.1}",
        position.x,
        position.y,
        position.z,
        state.current_speed,
        state.vertical_velocity,
        grounded,
        state.near_wall,
        state.has_wall_jumped,
        state.camera_pitch,
        state.field_of_view
    )
}

// ============================================================================
// UI Spawning Helpers
// ============================================================================

fn spawn_debug_info_overlay(commands: &mut Commands) {
    commands.spawn((
        DebugInfoOverlay,
        Text::new("Loading..."),
        TextFont {
            font_size: 12.0,
            ..default()
        },
        TextColor(Color::srgb(0.8, 0.9, 0.8)),
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(20.0),
            bottom: Val::Px(20.0),
            padding: UiRect::all(Val::Px(8.0)),
            ..default()
        },
        BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.7)),
        ZIndex(500),
    ));
}
