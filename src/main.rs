//! Start-up for the cube game, with window, plugins, and resources.

use bevy::{
    diagnostic::{FrameTimeDiagnosticsPlugin, LogDiagnosticsPlugin},
    prelude::*,
    window::*,
};

use cube_game::{
    command_handler::CommandHandlerPlugin,
    utils::{
        camera::Camera3dOrbitPlugin, debug_functions::DebugFunctionsPlugin, setup::SetupPlugin,
        systems_logic::CubePlugin,
    },
};

/// Entry point for the application
fn main() {
    let window = Some(Window {
        title: "Cube".into(),
        #[cfg(target_arch = "wasm32")]
        canvas: Some("#game-canvas".into()),
        fit_canvas_to_parent: true,
        prevent_default_event_handling: true,
        present_mode: PresentMode::AutoVsync,
        ..default()
    });

    App::new()
        .add_plugins((
            DefaultPlugins.set(WindowPlugin {
                primary_window: window,
                ..default()
            }),
            LogDiagnosticsPlugin::default(),
            FrameTimeDiagnosticsPlugin::default(),
            // Loads the config, so it must come after the log plugin
            CubePlugin::default(),
            SetupPlugin,
            CommandHandlerPlugin,
            Camera3dOrbitPlugin,
            DebugFunctionsPlugin,
        ))
        .insert_resource(ClearColor(Color::srgb(0.12, 0.12, 0.14)))
        .run();
}
