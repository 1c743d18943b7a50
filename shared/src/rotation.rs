//! Face-turn vocabulary: the twelve quarter turns of a 3x3x3 cube and their
//! static properties (axis, speed, inverse, slice membership).
//!
//! Letters follow the usual cube notation:
//!
//! - F (Front): the side currently facing you
//! - B (Back): the side opposite the front
//! - U (Up): the side above the front
//! - D (Down): the side opposite Up
//! - L (Left): the side directly to the left of the front
//! - R (Right): the side directly to the right of the front
//!
//! A bare letter is a clockwise quarter turn of that face. The `2` variants
//! are the counter-clockwise quarter turn, *not* a half turn.
use std::fmt;

use bevy_math::Vec3;

use crate::constants::cube_constants::TURN_SPEED_DEG;

/// One of the six outer faces of the cube.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Face {
    Front,
    Back,
    Up,
    Down,
    Left,
    Right,
}

impl Face {
    pub const ALL: [Face; 6] = [
        Face::Front,
        Face::Back,
        Face::Up,
        Face::Down,
        Face::Left,
        Face::Right,
    ];

    /// Unit axis the face turns around, pointing out of the face.
    pub fn axis(self) -> Vec3 {
        match self {
            Face::Right => Vec3::X,
            Face::Left => Vec3::NEG_X,
            Face::Up => Vec3::Y,
            Face::Down => Vec3::NEG_Y,
            Face::Back => Vec3::Z,
            Face::Front => Vec3::NEG_Z,
        }
    }

    /// Half-space test selecting the outer slice of this face.
    ///
    /// A piece belongs to the slice when its coordinate along the face axis
    /// lies more than `threshold` past the reference center.
    pub fn selects(self, position: Vec3, center: Vec3, threshold: f32) -> bool {
        match self {
            Face::Right => position.x > center.x + threshold,
            Face::Left => position.x < center.x - threshold,
            Face::Up => position.y > center.y + threshold,
            Face::Down => position.y < center.y - threshold,
            Face::Back => position.z > center.z + threshold,
            Face::Front => position.z < center.z - threshold,
        }
    }

    /// Notation letter of the face.
    pub fn letter(self) -> char {
        match self {
            Face::Front => 'F',
            Face::Back => 'B',
            Face::Up => 'U',
            Face::Down => 'D',
            Face::Left => 'L',
            Face::Right => 'R',
        }
    }

    pub fn from_letter(letter: char) -> Option<Face> {
        Face::ALL.into_iter().find(|face| face.letter() == letter)
    }
}

/// A single quarter turn of one face.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RotationId {
    F,
    B,
    U,
    D,
    L,
    R,
    F2,
    B2,
    U2,
    D2,
    L2,
    R2,
}

impl RotationId {
    pub const ALL: [RotationId; 12] = [
        RotationId::F,
        RotationId::B,
        RotationId::U,
        RotationId::D,
        RotationId::L,
        RotationId::R,
        RotationId::F2,
        RotationId::B2,
        RotationId::U2,
        RotationId::D2,
        RotationId::L2,
        RotationId::R2,
    ];

    pub fn from_face(face: Face, clockwise: bool) -> RotationId {
        use RotationId::*;
        match (face, clockwise) {
            (Face::Front, true) => F,
            (Face::Back, true) => B,
            (Face::Up, true) => U,
            (Face::Down, true) => D,
            (Face::Left, true) => L,
            (Face::Right, true) => R,
            (Face::Front, false) => F2,
            (Face::Back, false) => B2,
            (Face::Up, false) => U2,
            (Face::Down, false) => D2,
            (Face::Left, false) => L2,
            (Face::Right, false) => R2,
        }
    }

    pub fn face(self) -> Face {
        use RotationId::*;
        match self {
            F | F2 => Face::Front,
            B | B2 => Face::Back,
            U | U2 => Face::Up,
            D | D2 => Face::Down,
            L | L2 => Face::Left,
            R | R2 => Face::Right,
        }
    }

    pub fn is_clockwise(self) -> bool {
        use RotationId::*;
        matches!(self, F | B | U | D | L | R)
    }

    /// Rotation axis, shared by both directions of the same face.
    pub fn axis(self) -> Vec3 {
        self.face().axis()
    }

    /// Signed angular speed in degrees per second. Clockwise turns are positive.
    pub fn speed(self) -> f32 {
        self.speed_with(TURN_SPEED_DEG)
    }

    /// Signed angular speed for a given magnitude, using the same sign convention as [`Self::speed`].
    pub fn speed_with(self, magnitude: f32) -> f32 {
        if self.is_clockwise() {
            magnitude.abs()
        } else {
            -magnitude.abs()
        }
    }

    /// The turn that undoes this one.
    pub fn invert(self) -> RotationId {
        RotationId::from_face(self.face(), !self.is_clockwise())
    }

    /// Whether a piece at `position` is part of the slice this turn moves.
    pub fn selects(self, position: Vec3, center: Vec3, threshold: f32) -> bool {
        self.face().selects(position, center, threshold)
    }
}

impl fmt::Display for RotationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.face().letter())?;
        if !self.is_clockwise() {
            write!(f, "'")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::cube_constants::SLICE_THRESHOLD;
    use proptest::prelude::*;

    fn any_rotation() -> impl Strategy<Value = RotationId> {
        proptest::sample::select(RotationId::ALL.to_vec())
    }

    proptest! {
        #[test]
        fn invert_is_an_involution(id in any_rotation()) {
            prop_assert_eq!(id.invert().invert(), id);
            prop_assert_ne!(id.invert(), id);
            prop_assert_eq!(id.invert().face(), id.face());
        }

        #[test]
        fn speed_sign_follows_direction(id in any_rotation()) {
            prop_assert_eq!(id.speed().abs(), 45.0);
            prop_assert_eq!(id.speed() > 0.0, id.is_clockwise());
            prop_assert_eq!(id.speed(), -id.invert().speed());
        }
    }

    #[test]
    fn axes_per_face() {
        assert_eq!(RotationId::R.axis(), Vec3::X);
        assert_eq!(RotationId::R2.axis(), Vec3::X);
        assert_eq!(RotationId::L.axis(), Vec3::NEG_X);
        assert_eq!(RotationId::U2.axis(), Vec3::Y);
        assert_eq!(RotationId::D.axis(), Vec3::NEG_Y);
        assert_eq!(RotationId::B.axis(), Vec3::Z);
        assert_eq!(RotationId::F2.axis(), Vec3::NEG_Z);
    }

    #[test]
    fn inverse_pairs() {
        assert_eq!(RotationId::F.invert(), RotationId::F2);
        assert_eq!(RotationId::B2.invert(), RotationId::B);
        assert_eq!(RotationId::U.invert(), RotationId::U2);
        assert_eq!(RotationId::D2.invert(), RotationId::D);
        assert_eq!(RotationId::L.invert(), RotationId::L2);
        assert_eq!(RotationId::R2.invert(), RotationId::R);
    }

    #[test]
    fn outer_slice_selection() {
        let center = Vec3::new(2.0, -1.0, 0.5);
        let right = center + Vec3::new(1.1, 0.0, 0.0);
        let middle = center + Vec3::new(0.0, 1.1, 0.0);

        assert!(RotationId::R.selects(right, center, SLICE_THRESHOLD));
        assert!(!RotationId::L.selects(right, center, SLICE_THRESHOLD));
        assert!(!RotationId::R.selects(middle, center, SLICE_THRESHOLD));
        assert!(RotationId::U2.selects(middle, center, SLICE_THRESHOLD));
        // exactly on the threshold is not part of the slice
        assert!(!RotationId::R.selects(center + Vec3::X, center, SLICE_THRESHOLD));
    }

    #[test]
    fn display_uses_prime_for_counter_clockwise() {
        assert_eq!(RotationId::F.to_string(), "F");
        assert_eq!(RotationId::R2.to_string(), "R'");
    }
}
