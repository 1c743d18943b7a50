//! Systems logic of the cube: resources, piece binding and the per-frame turn driver.

use bevy::prelude::*;

use crate::utils::config::CubeConfig;
use crate::utils::game_functions::{advance_turns, bind_cube_pieces};
use crate::utils::objects::{CompletedTurns, PendingRotations, RandomGen};

/// Plugin for turning the cube.
///
/// Needs the cube pieces to be spawned during `Startup`; they are bound once
/// in `PostStartup`. Turns may be enqueued into [`PendingRotations`] at any time.
#[derive(Default)]
pub struct CubePlugin {
    /// Configuration to use, read from [`CubeConfig::path`] when `None`.
    pub config: Option<CubeConfig>,
}

impl CubePlugin {
    pub fn with_config(config: CubeConfig) -> Self {
        Self {
            config: Some(config),
        }
    }
}

impl Plugin for CubePlugin {
    /// Builds the plugin by adding the resources and systems to the app.
    fn build(&self, app: &mut App) {
        let config = self
            .config
            .clone()
            .unwrap_or_else(|| CubeConfig::load_or_default(&CubeConfig::path()));

        app.insert_resource(RandomGen::from_seed(config.seed))
            .insert_resource(config)
            .init_resource::<PendingRotations>()
            .init_resource::<CompletedTurns>()
            .add_systems(PostStartup, bind_cube_pieces)
            .add_systems(Update, advance_turns);
    }
}
