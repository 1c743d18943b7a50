//! Command handler
//! This module reads player input and turns it into queued face turns (`PendingRotations`).

use bevy::prelude::*;

use shared::{notation, Face, RotationId};

use crate::utils::config::CubeConfig;
use crate::utils::objects::{MoveLog, PendingRotations, RandomGen};
use crate::utils::scramble::scramble;

/// Keys bound to each face turn
const FACE_KEYS: [(KeyCode, Face); 6] = [
    (KeyCode::KeyF, Face::Front),
    (KeyCode::KeyB, Face::Back),
    (KeyCode::KeyU, Face::Up),
    (KeyCode::KeyD, Face::Down),
    (KeyCode::KeyL, Face::Left),
    (KeyCode::KeyR, Face::Right),
];

const SCRAMBLE_KEY: KeyCode = KeyCode::KeyS;
const REWIND_KEY: KeyCode = KeyCode::Backspace;

/// A player command.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CubeCommand {
    Turn(RotationId),
    Scramble,
    /// Undo every turn issued since the last rewind
    Rewind,
}

pub struct CommandHandlerPlugin;

impl Plugin for CommandHandlerPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MoveLog>()
            .add_systems(Startup, enqueue_startup_sequence)
            .add_systems(PreUpdate, read_keyboard_commands);
    }
}

/// Commands triggered by the keys pressed this frame. Shift selects the
/// counter-clockwise turn.
pub fn commands_from_keys(keyboard: &ButtonInput<KeyCode>) -> Vec<CubeCommand> {
    let clockwise = !keyboard.any_pressed([KeyCode::ShiftLeft, KeyCode::ShiftRight]);

    let mut commands: Vec<CubeCommand> = FACE_KEYS
        .iter()
        .filter(|(key, _)| keyboard.just_pressed(*key))
        .map(|&(_, face)| CubeCommand::Turn(RotationId::from_face(face, clockwise)))
        .collect();

    if keyboard.just_pressed(SCRAMBLE_KEY) {
        commands.push(CubeCommand::Scramble);
    }
    if keyboard.just_pressed(REWIND_KEY) {
        commands.push(CubeCommand::Rewind);
    }
    commands
}

/// Applies one command to the queue and the player's move log.
pub fn apply_command(
    command: CubeCommand,
    pending: &mut PendingRotations,
    move_log: &mut MoveLog,
    random_gen: &mut RandomGen,
    scramble_length: usize,
) {
    match command {
        CubeCommand::Turn(rotation) => {
            pending.enqueue(rotation);
            move_log.0.push(rotation);
        }
        CubeCommand::Scramble => {
            let sequence = scramble(&mut random_gen.random_gen, scramble_length);
            info!("Scramble: {}", notation::to_notation(&sequence));
            pending.enqueue_all(&sequence, false);
            move_log.0.extend(sequence);
        }
        CubeCommand::Rewind => {
            if move_log.0.is_empty() {
                info!("Nothing to rewind");
                return;
            }
            info!("Rewinding {} turns", move_log.0.len());
            pending.enqueue_all(&move_log.0, true);
            move_log.0.clear();
        }
    }
}

fn read_keyboard_commands(
    keyboard: Res<ButtonInput<KeyCode>>,
    config: Res<CubeConfig>,
    mut pending: ResMut<PendingRotations>,
    mut move_log: ResMut<MoveLog>,
    mut random_gen: ResMut<RandomGen>,
) {
    for command in commands_from_keys(&keyboard) {
        apply_command(
            command,
            &mut pending,
            &mut move_log,
            &mut random_gen,
            config.scramble_length,
        );
    }
}

/// Plays the configured startup sequence, followed by its undo if requested.
fn enqueue_startup_sequence(config: Res<CubeConfig>, mut pending: ResMut<PendingRotations>) {
    if config.startup_sequence.trim().is_empty() {
        return;
    }
    pending.enqueue_notation(&config.startup_sequence, false);
    if config.rewind_startup {
        pending.enqueue_notation(&config.startup_sequence, true);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use RotationId::*;

    #[test]
    fn face_keys_map_to_turns() {
        let mut keyboard = ButtonInput::<KeyCode>::default();
        keyboard.press(KeyCode::KeyR);
        keyboard.press(KeyCode::KeyU);
        assert_eq!(
            commands_from_keys(&keyboard),
            vec![CubeCommand::Turn(U), CubeCommand::Turn(R)]
        );

        keyboard.reset_all();
        keyboard.press(KeyCode::ShiftLeft);
        keyboard.press(KeyCode::KeyF);
        keyboard.press(REWIND_KEY);
        assert_eq!(
            commands_from_keys(&keyboard),
            vec![CubeCommand::Turn(F2), CubeCommand::Rewind]
        );
    }

    #[test]
    fn rewind_enqueues_the_undo_of_logged_turns() {
        let mut pending = PendingRotations::default();
        let mut move_log = MoveLog::default();
        let mut random_gen = RandomGen::default();

        for rotation in [R, U, F2] {
            apply_command(CubeCommand::Turn(rotation), &mut pending, &mut move_log, &mut random_gen, 0);
        }
        apply_command(CubeCommand::Rewind, &mut pending, &mut move_log, &mut random_gen, 0);

        assert_eq!(pending.iter().collect::<Vec<_>>(), vec![R, U, F2, F, U2, R2]);
        assert!(move_log.0.is_empty());

        // A second rewind has nothing left to undo
        apply_command(CubeCommand::Rewind, &mut pending, &mut move_log, &mut random_gen, 0);
        assert_eq!(pending.len(), 6);
    }

    #[test]
    fn scramble_is_logged() {
        let mut pending = PendingRotations::default();
        let mut move_log = MoveLog::default();
        let mut random_gen = RandomGen::default();

        apply_command(CubeCommand::Scramble, &mut pending, &mut move_log, &mut random_gen, 12);
        assert_eq!(pending.len(), 12);
        assert_eq!(move_log.0, pending.iter().collect::<Vec<_>>());
    }
}
