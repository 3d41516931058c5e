//! Plugin configuration.
//!
//! The config file is JSON5 with two sections:
//!
//! ```json5
//! {
//!   location: { world: "minecraft:overworld", radius: 1000 },
//!   enabled: { "on-first-join": true, "on-death": true },
//! }
//! ```
//!
//! Missing keys fall back to an absent world, radius 0 and disabled flags,
//! which [`RespawnConfig::validate`] then rejects.

use std::path::{Path, PathBuf};
use std::{fs, io};

use respawn_utils::Identifier;
use serde::Deserialize;
use thiserror::Error;

/// The config written when no config file exists yet.
pub const DEFAULT_CONFIG: &str = include_str!("../assets/default_config.json5");

/// Largest radius for which `2 * radius + 1` still fits in an `i32`.
pub const MAX_RADIUS: i32 = (i32::MAX - 1) / 2;

/// An error that can occur while loading or validating the config.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Reading or writing the config file failed.
    #[error("Failed to access config file {path}: {source}")]
    Io {
        /// The config file.
        path: PathBuf,
        /// The underlying error.
        source: io::Error,
    },
    /// The config file is not valid JSON5 or has wrongly typed values.
    #[error("Failed to parse config file: {0}")]
    Parse(#[from] serde_json5::Error),
    /// `location.world` is missing or blank.
    #[error("location.world is not set")]
    MissingWorld,
    /// `location.radius` is not in `1..=MAX_RADIUS`.
    #[error("location.radius must be between 1 and {MAX_RADIUS}, got {0}")]
    InvalidRadius(i32),
}

/// The config file as written by the server owner.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RespawnConfig {
    /// Where players are sent.
    pub location: LocationSection,
    /// When players are sent.
    pub enabled: EnabledSection,
}

/// The `location` section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LocationSection {
    /// The world name, e.g. `minecraft:overworld` or `Main World`.
    pub world: Option<String>,
    /// Half the side length of the square searched around the world origin.
    pub radius: i32,
}

/// The `enabled` section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct EnabledSection {
    /// Move players on their very first join.
    pub on_first_join: bool,
    /// Move players when they respawn after dying.
    pub on_death: bool,
}

/// A config that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedConfig {
    /// The world respawn locations are cached for.
    pub world: Identifier,
    /// Search radius in blocks, always in `1..=MAX_RADIUS`.
    pub radius: i32,
    /// Whether the first join handler is active.
    pub on_first_join: bool,
    /// Whether the death respawn handler is active.
    pub on_death: bool,
}

impl RespawnConfig {
    /// Parses a config from JSON5 text.
    pub fn from_json5(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_json5::from_str(text)?)
    }

    /// Loads the config at `path`, writing [`DEFAULT_CONFIG`] there first if
    /// the file does not exist.
    pub fn load_or_create(path: &Path) -> Result<Self, ConfigError> {
        let io_err = |source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        };

        if !path.exists() {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent).map_err(io_err)?;
            }
            fs::write(path, DEFAULT_CONFIG).map_err(io_err)?;
            log::info!("Wrote default config to {}", path.display());
        }

        let text = fs::read_to_string(path).map_err(io_err)?;
        Self::from_json5(&text)
    }

    /// Checks that a world is set and the radius is usable.
    ///
    /// The world name is not checked against any character set; it only has
    /// to match a loaded world at runtime.
    pub fn validate(&self) -> Result<ValidatedConfig, ConfigError> {
        let world = match self.location.world.as_deref().map(str::trim) {
            None | Some("") => return Err(ConfigError::MissingWorld),
            Some(name) => Identifier::from(name),
        };

        let radius = self.location.radius;
        if !(1..=MAX_RADIUS).contains(&radius) {
            return Err(ConfigError::InvalidRadius(radius));
        }

        Ok(ValidatedConfig {
            world,
            radius,
            on_first_join: self.enabled.on_first_join,
            on_death: self.enabled.on_death,
        })
    }
}
