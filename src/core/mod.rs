//! Core domain: cursor capture for mouse look.


use bevy::prelude::*;
use bevy::window::{CursorGrabMode, CursorOptions, PrimaryWindow};

use crate::locomotion::{InputConfig, LocomotionSystems, LookEnabled};

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, capture_on_startup)
            .add_systems(
                Update,
                toggle_cursor_capture.before(LocomotionSystems::Input),
            );
    }
}

/// What a frame of buttons asks the cursor to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CaptureRequest {
    Capture,
    Release,
}

/// Escape wins over a click in the same frame.
pub(crate) fn capture_request(
    captured: bool,
    escape_pressed: bool,
    click_pressed: bool,
) -> Option<CaptureRequest> {
    if escape_pressed && captured {
        Some(CaptureRequest::Release)
    } else if click_pressed && !captured && !escape_pressed {
        Some(CaptureRequest::Capture)
    } else {
        None
    }
}

fn set_capture(cursor: &mut CursorOptions, look: &mut LookEnabled, capture: bool) {
    if capture {
        cursor.grab_mode = CursorGrabMode::Locked;
        cursor.visible = false;
    } else {
        cursor.grab_mode = CursorGrabMode::None;
        cursor.visible = true;
    }
    look.0 = capture;
}

fn capture_on_startup(
    input_config: Res<InputConfig>,
    mut look: ResMut<LookEnabled>,
    mut cursors: Query<&mut CursorOptions, With<PrimaryWindow>>,
) {
    if !input_config.lock_cursor {
        info!("Cursor lock disabled, mouse look always on");
        look.0 = true;
        return;
    }
    let Ok(mut cursor) = cursors.single_mut() else {
        warn!("No primary window, cannot capture cursor");
        return;
    };
    set_capture(&mut cursor, &mut look, true);
    info!("Cursor captured (Escape to release, click to recapture)");
}

fn toggle_cursor_capture(
    keyboard: Res<ButtonInput<KeyCode>>,
    mouse: Res<ButtonInput<MouseButton>>,
    input_config: Res<InputConfig>,
    mut look: ResMut<LookEnabled>,
    mut cursors: Query<&mut CursorOptions, With<PrimaryWindow>>,
) {
    if !input_config.lock_cursor {
        return;
    }
    let Ok(mut cursor) = cursors.single_mut() else {
        return;
    };

    let captured = cursor.grab_mode != CursorGrabMode::None;
    match capture_request(
        captured,
        keyboard.just_pressed(KeyCode::Escape),
        mouse.just_pressed(MouseButton::Left),
    ) {
        Some(CaptureRequest::Capture) => {
            set_capture(&mut cursor, &mut look, true);
            debug!("Cursor captured");
        }
        Some(CaptureRequest::Release) => {
            set_capture(&mut cursor, &mut look, false);
            debug!("Cursor released");
        }
        None => {}
    }
}
