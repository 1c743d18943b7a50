//! Debug functions for the game.
use bevy::{prelude::*, window::*};

use crate::utils::game_functions::flip_handedness;
use crate::utils::objects::CubeTurner;

pub struct DebugFunctionsPlugin;

impl Plugin for DebugFunctionsPlugin {
    /// Plugin adding the `toggle_vsync` and `visualize_active_turn` systems to the app.
    fn build(&self, app: &mut App) {
        app.add_systems(Update, (toggle_vsync, visualize_active_turn));
    }
}

/// Toggles VSync when the 'V' key is pressed.
fn toggle_vsync(input: Res<ButtonInput<KeyCode>>, mut window: Query<&mut Window>) {
    if input.just_pressed(KeyCode::KeyV) {
        let Ok(mut window) = window.single_mut() else {
            return;
        };

        window.present_mode = if matches!(window.present_mode, PresentMode::AutoVsync) {
            PresentMode::AutoNoVsync
        } else {
            PresentMode::AutoVsync
        };

        info!("PRESENT_MODE: {:?}", window.present_mode);
    }
}

/// Draws the axis, pivot and pieces of the running turn when 'G' is toggled on.
fn visualize_active_turn(
    mut gizmos: Gizmos,
    input: Res<ButtonInput<KeyCode>>,
    turner: Option<Res<CubeTurner>>,
    transforms: Query<&Transform>,
    mut show_turn: Local<bool>,
) {
    if input.just_pressed(KeyCode::KeyG) {
        *show_turn = !*show_turn;
        info!("Turn visualization: {}", *show_turn);
    }

    if !*show_turn {
        return;
    }
    let Some(turn) = turner.as_ref().and_then(|turner| turner.active()) else {
        return;
    };
    let Ok(pivot) = transforms.get(turn.pivot()) else {
        return;
    };

    let axis = flip_handedness(turn.axis());
    gizmos.arrow(pivot.translation, pivot.translation + axis * 2.0, Color::WHITE);
    gizmos.sphere(pivot.translation, 0.2, Color::WHITE);
    for part in turn.parts() {
        if let Ok(transform) = transforms.get(*part) {
            gizmos.sphere(transform.translation, 0.1, Color::srgb(1.0, 0.8, 0.0));
        }
    }
}
