//! This file defines the various objects, resources, and components used in the game.
use bevy::prelude::*;
use rand_chacha::rand_core::SeedableRng;
use rand_chacha::ChaCha8Rng;

use shared::constants::game_constants::SEED;
use shared::{RotationId, RotationQueue, TurnScheduler};

/// Face turns waiting to be animated. Anything may enqueue here.
#[derive(Resource, Default, Deref, DerefMut)]
pub struct PendingRotations(pub RotationQueue);

/// The turn scheduler over the bound cube pieces, inserted once the cube exists
#[derive(Resource, Deref, DerefMut)]
pub struct CubeTurner(pub TurnScheduler<Entity>);

/// Every turn that has completed, in order
#[derive(Resource, Default)]
pub struct CompletedTurns(pub Vec<RotationId>);

/// Turns issued by the player since the last rewind
#[derive(Resource, Default)]
pub struct MoveLog(pub Vec<RotationId>);

/// Random number generator
#[derive(Resource)]
pub struct RandomGen {
    pub random_gen: ChaCha8Rng,
}

impl RandomGen {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            random_gen: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}
impl Default for RandomGen {
    fn default() -> Self {
        Self::from_seed(SEED)
    }
}

/// A rotatable cubie (every cubie except the hidden center)
#[derive(Component)]
pub struct CubePart;

/// A face center cubie, the pivot of its face's turns
#[derive(Component)]
pub struct MiddlePiece;

/// The hidden cubie in the middle of the cube, used as spatial reference
#[derive(Component)]
pub struct CenterPiece;

/// Status line showing move count and queue length
#[derive(Component)]
pub struct StatusText;
