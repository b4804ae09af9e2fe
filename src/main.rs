mod anim;
mod config;
mod core;
#[cfg(feature = "dev-tools")]
mod debug;
mod movement;

use avian3d::prelude::*;
use bevy::prelude::*;

fn main() {
    let mut app = App::new();
    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Duskfall".to_string(),
            ..default()
        }),
        ..default()
    }))
    .add_plugins(PhysicsPlugins::default())
    .add_plugins((
        config::ConfigPlugin,
        core::CorePlugin,
        movement::MovementPlugin,
        anim::AnimPlugin,
    ));

    #[cfg(feature = "dev-tools")]
    app.add_plugins(debug::DebugPlugin);

    app.run();
}
