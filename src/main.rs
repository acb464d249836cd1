use avian3d::prelude::*;
use bevy::prelude::*;

use fp_locomotion::{arena, config, core, locomotion, ui};

fn main() {
    let mut app = App::new();
    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "fp-locomotion".to_string(),
            resizable: true,
            ..default()
        }),
        ..default()
    }))
    .add_plugins(PhysicsPlugins::default())
    .add_plugins((
        config::ConfigPlugin::default(),
        core::CorePlugin,
        locomotion::LocomotionPlugin,
        arena::ArenaPlugin,
        ui::UiPlugin,
    ));

    #[cfg(feature = "dev-tools")]
    app.add_plugins(fp_locomotion::debug::DebugPlugin);

    app.run();
}
