//! Implementation of a 3D orbit camera plugin for the cube game.

use bevy::prelude::*;
use shared::constants::camera_3d_constants::{
    CAMERA_3D_MAX_RADIUS, CAMERA_3D_MIN_RADIUS, CAMERA_3D_SPEED_ROTATE, CAMERA_3D_SPEED_ZOOM,
};

pub struct Camera3dOrbitPlugin;

impl Plugin for Camera3dOrbitPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, camera_3d_orbit_inputs);
    }
}

/// Orbit around the cube with Left/Right, zoom with Up/Down.
/// Letter keys are reserved for face turns.
pub fn camera_3d_orbit_inputs(
    keyboard: Res<ButtonInput<KeyCode>>,
    timer: Res<Time>,
    mut camera_query: Query<&mut Transform, With<Camera3d>>,
) {
    let Ok(mut transform) = camera_query.single_mut() else {
        return;
    };

    let left = keyboard.pressed(KeyCode::ArrowLeft);
    let right = keyboard.pressed(KeyCode::ArrowRight);
    let up = keyboard.pressed(KeyCode::ArrowUp);
    let down = keyboard.pressed(KeyCode::ArrowDown);

    if !(left || right || up || down) {
        return;
    }

    let speed = CAMERA_3D_SPEED_ROTATE * timer.delta_secs();
    let zoom_speed = CAMERA_3D_SPEED_ZOOM * timer.delta_secs();

    let height = transform.translation.y;
    let mut yaw = transform.translation.x.atan2(transform.translation.z);
    let mut radius = transform.translation.xz().length();

    if left {
        yaw -= speed;
    }
    if right {
        yaw += speed;
    }
    if up {
        radius -= zoom_speed;
    }
    if down {
        radius += zoom_speed;
    }

    // Clamp zoom range
    radius = radius.clamp(CAMERA_3D_MIN_RADIUS, CAMERA_3D_MAX_RADIUS);

    // Compute new position relative to the origin, keeping the same height
    transform.translation = Vec3::new(radius * yaw.sin(), height, radius * yaw.cos());
    transform.look_at(Vec3::ZERO, Vec3::Y);
}
