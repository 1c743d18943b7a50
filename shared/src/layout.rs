//! Lattice layout of the 27 cubies of a 3x3x3 cube.
use bevy_math::{IVec3, Vec3};

use crate::rotation::Face;

/// One cell of the 3x3x3 lattice, each coordinate in `-1..=1`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CubieSlot {
    pub coords: IVec3,
}

impl CubieSlot {
    /// All 27 slots, x-major.
    pub fn all() -> impl Iterator<Item = CubieSlot> {
        (-1..=1).flat_map(|x| {
            (-1..=1).flat_map(move |y| {
                (-1..=1).map(move |z| CubieSlot {
                    coords: IVec3::new(x, y, z),
                })
            })
        })
    }

    /// The hidden cubie in the middle of the cube.
    pub fn is_center(self) -> bool {
        self.coords == IVec3::ZERO
    }

    /// A face center: exactly one non-zero coordinate.
    pub fn is_middle(self) -> bool {
        self.coords.abs().element_sum() == 1
    }

    /// World position for a cube centered at `origin`.
    pub fn position(self, origin: Vec3, spacing: f32) -> Vec3 {
        origin + self.coords.as_vec3() * spacing
    }

    /// Outer faces this cubie shows a sticker on.
    pub fn visible_faces(self) -> impl Iterator<Item = Face> {
        let coords = self.coords;
        Face::ALL
            .into_iter()
            .filter(move |face| face.axis().as_ivec3().dot(coords) == 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lattice_counts() {
        assert_eq!(CubieSlot::all().count(), 27);
        assert_eq!(CubieSlot::all().filter(|s| s.is_center()).count(), 1);
        assert_eq!(CubieSlot::all().filter(|s| s.is_middle()).count(), 6);
    }

    #[test]
    fn stickers_per_cubie_kind() {
        let corner = CubieSlot {
            coords: IVec3::new(1, 1, -1),
        };
        let faces: Vec<_> = corner.visible_faces().collect();
        assert_eq!(faces, vec![Face::Front, Face::Up, Face::Right]);

        let middle = CubieSlot {
            coords: IVec3::new(0, -1, 0),
        };
        assert_eq!(middle.visible_faces().collect::<Vec<_>>(), vec![Face::Down]);

        let center = CubieSlot {
            coords: IVec3::ZERO,
        };
        assert_eq!(center.visible_faces().count(), 0);
    }
}
