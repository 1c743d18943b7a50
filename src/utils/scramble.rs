//! Random scramble generation.
use rand::Rng;

use shared::RotationId;

/// Draws `length` random quarter turns. A turn is never directly followed by
/// its own inverse, so no pair of moves cancels out.
pub fn scramble(rng: &mut impl Rng, length: usize) -> Vec<RotationId> {
    let mut sequence: Vec<RotationId> = Vec::with_capacity(length);
    while sequence.len() < length {
        let candidate = RotationId::ALL[rng.random_range(0..RotationId::ALL.len())];
        if sequence.last().is_some_and(|last| last.invert() == candidate) {
            continue;
        }
        sequence.push(candidate);
    }
    sequence
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::objects::RandomGen;
    use pretty_assertions::assert_eq;

    #[test]
    fn same_seed_same_scramble() {
        let a = scramble(&mut RandomGen::from_seed(7).random_gen, 25);
        let b = scramble(&mut RandomGen::from_seed(7).random_gen, 25);
        assert_eq!(a, b);
        assert_eq!(a.len(), 25);
    }

    #[test]
    fn no_adjacent_inverse_pairs() {
        let sequence = scramble(&mut RandomGen::default().random_gen, 500);
        for pair in sequence.windows(2) {
            assert_ne!(pair[0].invert(), pair[1]);
        }
        for rotation in RotationId::ALL {
            assert!(sequence.contains(&rotation), "{rotation} never drawn");
        }
    }

    #[test]
    fn empty_scramble() {
        assert!(scramble(&mut RandomGen::default().random_gen, 0).is_empty());
    }
}
