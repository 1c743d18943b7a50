//! Piece classification and the per-tick animation of a single face turn.
use std::fmt::Debug;

use bevy_math::{Quat, Vec3};
use log::{debug, warn};

use crate::constants::cube_constants::{
    PIECES_PER_FACE, QUARTER_TURN_DEG, SLICE_THRESHOLD, TURN_SPEED_DEG,
};
use crate::rotation::RotationId;

/// Access to the transforms of the cube pieces, provided by the host scene.
///
/// `H` is a cheap handle identifying a piece (an entity id, an index...).
pub trait PieceTransforms<H> {
    /// Current world position of a piece, `None` if the handle is unknown.
    fn position(&self, piece: H) -> Option<Vec3>;

    /// Rotates a piece by `degrees` around the line through `pivot` along `axis`.
    ///
    /// Positive degrees turn clockwise when looking at the pivot from the tip of `axis`,
    /// see [`turn_rotation`].
    ///
    /// Implementations panic when `piece` has no transform.
    fn rotate_around(&mut self, piece: H, pivot: Vec3, axis: Vec3, degrees: f32);
}

/// Quaternion for a turn of `degrees` about `axis`, clockwise seen from the axis tip.
pub fn turn_rotation(axis: Vec3, degrees: f32) -> Quat {
    Quat::from_axis_angle(axis, -degrees.to_radians())
}

/// Handles to every piece the turns operate on, resolved once when the cube is bound.
#[derive(Clone, Debug)]
pub struct CubePieces<H> {
    parts: Vec<H>,
    middles: Vec<H>,
    center: H,
}

impl<H: Copy + Eq + Debug> CubePieces<H> {
    /// `parts` are all rotatable pieces, `middles` the face centers among them
    /// and `center` the hidden reference piece.
    pub fn new(parts: Vec<H>, middles: Vec<H>, center: H) -> Self {
        Self {
            parts,
            middles,
            center,
        }
    }

    pub fn parts(&self) -> &[H] {
        &self.parts
    }

    pub fn middles(&self) -> &[H] {
        &self.middles
    }

    pub fn center(&self) -> H {
        self.center
    }
}

/// Tunables of the turn animation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TurnSettings {
    /// Angular speed magnitude in degrees per second.
    pub turn_speed: f32,
    /// Offset from the center beyond which a piece is in an outer slice.
    pub slice_threshold: f32,
}

impl Default for TurnSettings {
    fn default() -> Self {
        Self {
            turn_speed: TURN_SPEED_DEG,
            slice_threshold: SLICE_THRESHOLD,
        }
    }
}

/// Pieces in the outer slice moved by `rotation`, judged from their current positions.
pub fn select_pieces<H: Copy + Eq + Debug>(
    rotation: RotationId,
    pieces: &CubePieces<H>,
    transforms: &impl PieceTransforms<H>,
    threshold: f32,
) -> Vec<H> {
    let Some(center) = transforms.position(pieces.center) else {
        panic!("center piece {:?} has no transform", pieces.center);
    };

    pieces
        .parts
        .iter()
        .copied()
        .filter(|&part| {
            transforms
                .position(part)
                .is_some_and(|position| rotation.selects(position, center, threshold))
        })
        .collect()
}

/// The face center among `selected`, which the turn pivots around.
pub fn find_pivot<H: Copy + Eq>(middles: &[H], selected: &[H]) -> Option<H> {
    middles
        .iter()
        .copied()
        .find(|middle| selected.contains(middle))
}

/// A face turn in progress.
#[derive(Clone, Debug)]
pub struct ActiveTurn<H> {
    rotation: RotationId,
    parts: Vec<H>,
    pivot: H,
    axis: Vec3,
    speed: f32,
    total_rotated: f32,
}

impl<H: Copy + Eq + Debug> ActiveTurn<H> {
    /// Classifies the pieces of the turning slice and picks its pivot.
    ///
    /// # Panics
    ///
    /// Panics if no middle piece lies in the selected slice, which means the
    /// bound pieces do not form a cube.
    pub fn start(
        rotation: RotationId,
        pieces: &CubePieces<H>,
        transforms: &impl PieceTransforms<H>,
        settings: &TurnSettings,
    ) -> Self {
        let parts = select_pieces(rotation, pieces, transforms, settings.slice_threshold);
        debug!("Found {} parts to rotate for {rotation}", parts.len());
        if parts.len() != PIECES_PER_FACE {
            warn!(
                "Turn {rotation} selected {} pieces, expected {PIECES_PER_FACE}",
                parts.len()
            );
        }

        let Some(pivot) = find_pivot(&pieces.middles, &parts) else {
            panic!("could not find a middle piece to rotate {rotation} around");
        };

        Self {
            rotation,
            parts,
            pivot,
            axis: rotation.axis(),
            speed: rotation.speed_with(settings.turn_speed),
            total_rotated: 0.0,
        }
    }

    /// Advances the turn by `dt` seconds. Returns `true` once the full quarter
    /// turn has been applied; the final step is shortened so the arc never
    /// exceeds 90 degrees.
    ///
    /// # Panics
    ///
    /// Panics if the pivot or a turning piece has no transform.
    pub fn step(&mut self, dt: f32, transforms: &mut impl PieceTransforms<H>) -> bool {
        let before = self.total_rotated;
        let mut degrees = self.speed * dt;

        self.total_rotated += degrees.abs();
        let finished = self.total_rotated >= QUARTER_TURN_DEG;
        if finished {
            degrees = self.speed.signum() * (QUARTER_TURN_DEG - before);
            self.total_rotated = QUARTER_TURN_DEG;
        }

        // Pivot position is read every tick
        let Some(pivot) = transforms.position(self.pivot) else {
            panic!("pivot piece {:?} has no transform", self.pivot);
        };
        for &part in &self.parts {
            transforms.rotate_around(part, pivot, self.axis, degrees);
        }

        finished
    }

    pub fn rotation(&self) -> RotationId {
        self.rotation
    }

    pub fn parts(&self) -> &[H] {
        &self.parts
    }

    pub fn pivot(&self) -> H {
        self.pivot
    }

    pub fn axis(&self) -> Vec3 {
        self.axis
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    /// Degrees turned so far, always in `0..=90`.
    pub fn total_rotated(&self) -> f32 {
        self.total_rotated
    }
}
