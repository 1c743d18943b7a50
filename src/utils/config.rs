//! Runtime configuration, read from a TOML file.
use std::io;
use std::path::{Path, PathBuf};

use bevy::prelude::*;
use serde::Deserialize;
use thiserror::Error;

use shared::constants::cube_constants::{CUBIE_SPACING, SLICE_THRESHOLD, TURN_SPEED_DEG};
use shared::constants::game_constants::{
    CONFIG_ENV_VAR, CONFIG_FILE, SCRAMBLE_LENGTH, SEED, STARTUP_SEQUENCE,
};
use shared::{notation, NotationError, TurnSettings};

/// Error produced when loading the configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid startup sequence: {0}")]
    Notation(#[from] NotationError),
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Game configuration. Every field is optional in the file.
#[derive(Resource, Deserialize, Clone, Debug, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct CubeConfig {
    /// Face turn speed in degrees per second
    pub turn_speed: f32,
    /// Distance from the center beyond which a cubie is in an outer slice
    pub slice_threshold: f32,
    /// Distance between neighbouring cubie centers
    pub cubie_spacing: f32,
    /// Turns played when the game starts
    pub startup_sequence: String,
    /// Undo the startup sequence right after playing it
    pub rewind_startup: bool,
    pub scramble_length: usize,
    pub seed: u64,
}

impl Default for CubeConfig {
    fn default() -> Self {
        Self {
            turn_speed: TURN_SPEED_DEG,
            slice_threshold: SLICE_THRESHOLD,
            cubie_spacing: CUBIE_SPACING,
            startup_sequence: STARTUP_SEQUENCE.to_owned(),
            rewind_startup: true,
            scramble_length: SCRAMBLE_LENGTH,
            seed: SEED,
        }
    }
}

impl CubeConfig {
    /// Parses and validates a TOML document.
    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        let config: CubeConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads the config at `path`. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(text) => {
                let config = Self::from_toml(&text)?;
                info!("Loaded config from {}", path.display());
                Ok(config)
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                info!("No config at {}, using defaults", path.display());
                Ok(Self::default())
            }
            Err(source) => Err(ConfigError::Io {
                path: path.to_owned(),
                source,
            }),
        }
    }

    /// Like [`Self::load`], logging any error and falling back to the defaults.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(config) => config,
            Err(e) => {
                error!("Failed to load config: {}", e);
                Self::default()
            }
        }
    }

    /// `$CUBE_CONFIG` if set, otherwise `cube.toml` in the working directory.
    pub fn path() -> PathBuf {
        std::env::var_os(CONFIG_ENV_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(CONFIG_FILE))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.turn_speed.is_finite() || self.turn_speed <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "turn_speed must be a positive number, got {}",
                self.turn_speed
            )));
        }
        if !(self.slice_threshold > 0.0 && self.cubie_spacing > self.slice_threshold) {
            return Err(ConfigError::Invalid(format!(
                "cubie_spacing ({}) must exceed slice_threshold ({}) and both must be positive",
                self.cubie_spacing, self.slice_threshold
            )));
        }
        notation::parse_strict(&self.startup_sequence)?;
        Ok(())
    }

    pub fn turn_settings(&self) -> TurnSettings {
        TurnSettings {
            turn_speed: self.turn_speed,
            slice_threshold: self.slice_threshold,
        }
    }
}
