//! UI domain: in-game HUD.

mod hud_speed;
#[cfg(test)]
mod tests;

pub use hud_speed::SpeedText;

use bevy::prelude::*;

use crate::locomotion::LocomotionSystems;
use crate::ui::hud_speed::{spawn_speed_hud, update_speed_hud};

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_speed_hud).add_systems(
            Update,
            update_speed_hud.after(LocomotionSystems::Advance),
        );
    }
}
