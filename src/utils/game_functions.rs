//! Core game systems: binding the cube pieces and animating queued turns.
use bevy::prelude::*;

use shared::constants::cube_constants::{MIDDLE_PIECES, ROTATABLE_PIECES};
use shared::turn::turn_rotation;
use shared::{CubePieces, PieceTransforms, TickOutcome, TurnScheduler};

use crate::utils::config::CubeConfig;
use crate::utils::objects::{
    CenterPiece, CompletedTurns, CubePart, CubeTurner, MiddlePiece, MoveLog, PendingRotations,
    StatusText,
};

/// Transforms of every cube piece, the hidden center included.
pub type PieceTransformQuery<'w, 's> =
    Query<'w, 's, &'static mut Transform, Or<(With<CubePart>, With<CenterPiece>)>>;

/// Mirrors the z axis.
///
/// Turn axes are expressed with the front face towards -z in a left-handed
/// frame. The scene is right-handed with the front face towards +z, so every
/// point and axis crossing between the two is mirrored. The mapping is its own inverse.
pub fn flip_handedness(v: Vec3) -> Vec3 {
    Vec3::new(v.x, v.y, -v.z)
}

/// Scene-side implementation of the piece capability over ECS transforms.
pub struct ScenePieces<'q, 'w, 's> {
    pub query: &'q mut PieceTransformQuery<'w, 's>,
}

impl PieceTransforms<Entity> for ScenePieces<'_, '_, '_> {
    fn position(&self, piece: Entity) -> Option<Vec3> {
        self.query
            .get(piece)
            .ok()
            .map(|transform| flip_handedness(transform.translation))
    }

    fn rotate_around(&mut self, piece: Entity, pivot: Vec3, axis: Vec3, degrees: f32) {
        let Ok(mut transform) = self.query.get_mut(piece) else {
            panic!("cube piece {piece:?} has no transform");
        };
        let axis = flip_handedness(axis);
        transform.rotate_around(flip_handedness(pivot), turn_rotation(axis, degrees));
    }
}

/// Collects the spawned cube pieces once and hands them to a new turn scheduler.
/// Runs in `PostStartup`, after the cube has been spawned.
pub fn bind_cube_pieces(
    mut commands: Commands,
    config: Res<CubeConfig>,
    parts: Query<Entity, With<CubePart>>,
    middles: Query<Entity, With<MiddlePiece>>,
    center: Query<Entity, With<CenterPiece>>,
) {
    let Ok(center) = center.single() else {
        error!("Expected exactly one center piece, the cube will not turn");
        return;
    };

    let middles: Vec<Entity> = middles.iter().collect();
    if middles.len() != MIDDLE_PIECES {
        error!(
            "Found {} middle pieces instead of {}, the cube will not turn",
            middles.len(),
            MIDDLE_PIECES
        );
        return;
    }

    let parts: Vec<Entity> = parts.iter().collect();
    if parts.len() != ROTATABLE_PIECES {
        warn!("Found {} cube parts, expected {}", parts.len(), ROTATABLE_PIECES);
    }
    info!(
        "Bound cube: {} parts, {} middles and the center",
        parts.len(),
        middles.len()
    );

    commands.insert_resource(CubeTurner(TurnScheduler::new(
        CubePieces::new(parts, middles, center),
        config.turn_settings(),
    )));
}

/// Advances the turn animation by one frame.
pub fn advance_turns(
    time: Res<Time>,
    turner: Option<ResMut<CubeTurner>>,
    mut pending: ResMut<PendingRotations>,
    mut completed: ResMut<CompletedTurns>,
    mut query: PieceTransformQuery,
) {
    // Turns stay queued until the cube is bound
    let Some(mut turner) = turner else {
        return;
    };

    let mut pieces = ScenePieces { query: &mut query };
    if let TickOutcome::Finished(rotation) =
        turner.advance(&mut pending.0, time.delta_secs(), &mut pieces)
    {
        debug!("Finished rotation: {}", rotation);
        completed.0.push(rotation);
    }
}

/// Refreshes the status line.
pub fn update_status_text(
    completed: Res<CompletedTurns>,
    pending: Res<PendingRotations>,
    move_log: Res<MoveLog>,
    mut text_query: Query<&mut Text, With<StatusText>>,
) {
    if !(completed.is_changed() || pending.is_changed() || move_log.is_changed()) {
        return;
    }
    for mut text in text_query.iter_mut() {
        text.0 = format!(
            "Moves: {} | Queued: {} | Undoable: {}\n\
            F B U D L R: turn (Shift: counter-clockwise) | S: scramble | Backspace: rewind",
            completed.0.len(),
            pending.len(),
            move_log.0.len()
        );
    }
}
