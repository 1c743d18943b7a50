//! Headless runs of the cube plugins over a bare cube (no meshes, no window).

use std::collections::HashMap;
use std::time::Duration;

use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;
use pretty_assertions::assert_eq;

use cube_game::command_handler::CommandHandlerPlugin;
use cube_game::utils::config::CubeConfig;
use cube_game::utils::game_functions::flip_handedness;
use cube_game::utils::objects::{
    CenterPiece, CompletedTurns, CubePart, CubeTurner, MiddlePiece, MoveLog, PendingRotations,
};
use cube_game::utils::systems_logic::CubePlugin;
use shared::constants::game_constants::STARTUP_SEQUENCE;
use shared::layout::CubieSlot;
use shared::RotationId::*;

const SPACING: f32 = 1.1;
const MAX_UPDATES: usize = 5_000;

fn spawn_bare_cube(mut commands: Commands) {
    for slot in CubieSlot::all() {
        let transform = Transform::from_translation(flip_handedness(
            slot.position(Vec3::ZERO, SPACING),
        ));
        if slot.is_center() {
            commands.spawn((transform, CenterPiece));
        } else if slot.is_middle() {
            commands.spawn((transform, CubePart, MiddlePiece));
        } else {
            commands.spawn((transform, CubePart));
        }
    }
}

fn test_app() -> App {
    let config = CubeConfig {
        turn_speed: 450.0,
        startup_sequence: String::new(),
        ..default()
    };

    let mut app = App::new();
    app.add_plugins((MinimalPlugins, CubePlugin::with_config(config)))
        .insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_millis(50)))
        .add_systems(Startup, spawn_bare_cube);
    app
}

/// Checks every cube part sits on a lattice cell and has turned by whole quarter turns.
fn assert_on_lattice(app: &mut App) {
    for (entity, transform) in piece_transforms(app) {
        let cell = transform.translation / SPACING;
        assert!(
            cell.distance(cell.round()) < 1e-3,
            "{entity:?} stopped off the lattice at {}",
            transform.translation
        );
        let moved = transform.rotation * Vec3::X;
        assert!(
            moved.distance(moved.round()) < 1e-3,
            "{entity:?} stopped mid-turn: {}",
            transform.rotation
        );
    }
}

fn run_until_idle(app: &mut App) {
    for _ in 0..MAX_UPDATES {
        app.update();
        let world = app.world();
        let turning = world
            .get_resource::<CubeTurner>()
            .is_some_and(|turner| turner.is_turning());
        if !turning && world.resource::<PendingRotations>().is_empty() {
            return;
        }
    }
    panic!("cube still turning after {MAX_UPDATES} updates");
}

fn piece_transforms(app: &mut App) -> HashMap<Entity, Transform> {
    let world = app.world_mut();
    let mut query = world.query_filtered::<(Entity, &Transform), With<CubePart>>();
    query
        .iter(world)
        .map(|(entity, transform)| (entity, *transform))
        .collect()
}

fn assert_same_transforms(before: &HashMap<Entity, Transform>, after: &HashMap<Entity, Transform>) {
    assert_eq!(before.len(), after.len());
    for (entity, start) in before {
        let end = after[entity];
        assert!(
            start.translation.distance(end.translation) < 1e-3,
            "{entity:?} moved from {} to {}",
            start.translation,
            end.translation
        );
        assert!(
            start.rotation.dot(end.rotation).abs() > 1.0 - 1e-3,
            "{entity:?} still rotated: {}",
            end.rotation
        );
    }
}

/// Holds `keys` for a single frame.
fn press(app: &mut App, keys: &[KeyCode]) {
    let mut keyboard = app.world_mut().resource_mut::<ButtonInput<KeyCode>>();
    for key in keys {
        keyboard.press(*key);
    }
    app.update();
    app.world_mut()
        .resource_mut::<ButtonInput<KeyCode>>()
        .reset_all();
}

#[test]
fn binds_the_cube_and_stays_idle() {
    let mut app = test_app();
    app.update();

    let turner = app.world().resource::<CubeTurner>();
    assert_eq!(turner.pieces().parts().len(), 26);
    assert_eq!(turner.pieces().middles().len(), 6);
    assert!(!turner.is_turning());
}

#[test]
fn turns_complete_in_enqueue_order() {
    let mut app = test_app();
    app.world_mut()
        .resource_mut::<PendingRotations>()
        .enqueue_notation("R U' F", false);

    run_until_idle(&mut app);

    assert_eq!(app.world().resource::<CompletedTurns>().0, vec![R, U2, F]);
}

#[test]
fn r_turn_lifts_the_front_right_column() {
    let mut app = test_app();
    app.update();

    let front_up_right = Vec3::new(1.0, 1.0, 1.0) * SPACING;
    let corner = piece_transforms(&mut app)
        .into_iter()
        .find(|(_, transform)| transform.translation.distance(front_up_right) < 1e-3)
        .map(|(entity, _)| entity)
        .unwrap();

    app.world_mut().resource_mut::<PendingRotations>().enqueue(R);
    run_until_idle(&mut app);

    let end = app.world().get::<Transform>(corner).unwrap().translation;
    let back_up_right = Vec3::new(1.0, 1.0, -1.0) * SPACING;
    assert!(end.distance(back_up_right) < 1e-3, "corner ended at {end}");
}

#[test]
fn sequence_and_its_reverse_restore_the_cube() {
    let mut app = test_app();
    // 16.65 degrees per tick, so every turn ends on a shortened step
    app.insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_millis(37)));
    app.update();
    let before = piece_transforms(&mut app);

    app.world_mut()
        .resource_mut::<PendingRotations>()
        .enqueue_notation(STARTUP_SEQUENCE, false);
    run_until_idle(&mut app);
    assert_on_lattice(&mut app);

    app.world_mut()
        .resource_mut::<PendingRotations>()
        .enqueue_notation(STARTUP_SEQUENCE, true);
    run_until_idle(&mut app);

    assert_eq!(app.world().resource::<CompletedTurns>().0.len(), 24);
    assert_same_transforms(&before, &piece_transforms(&mut app));
}

#[test]
#[should_panic(expected = "has no transform")]
fn losing_a_turning_piece_is_fatal() {
    let mut app = test_app();
    app.world_mut().resource_mut::<PendingRotations>().enqueue(R);
    app.update();

    let turn = app.world().resource::<CubeTurner>().active().cloned().unwrap();
    let lost = turn
        .parts()
        .iter()
        .copied()
        .find(|&part| part != turn.pivot())
        .unwrap();
    app.world_mut().despawn(lost);

    app.update();
}

#[test]
fn keyboard_turns_and_rewind_restore_the_cube() {
    let mut app = test_app();
    app.init_resource::<ButtonInput<KeyCode>>()
        .add_plugins(CommandHandlerPlugin);
    app.update();
    let before = piece_transforms(&mut app);

    let presses: [&[KeyCode]; 4] = [
        &[KeyCode::KeyR],
        &[KeyCode::ShiftLeft, KeyCode::KeyU],
        &[KeyCode::KeyF],
        &[KeyCode::KeyS],
    ];
    for keys in presses {
        press(&mut app, keys);
    }
    run_until_idle(&mut app);

    let issued = app.world().resource::<MoveLog>().0.clone();
    assert_eq!(&issued[..3], &[R, U2, F]);
    assert_eq!(app.world().resource::<CompletedTurns>().0, issued);

    press(&mut app, &[KeyCode::Backspace]);
    run_until_idle(&mut app);

    assert!(app.world().resource::<MoveLog>().0.is_empty());
    assert_same_transforms(&before, &piece_transforms(&mut app));
}
