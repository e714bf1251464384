//! Engine configuration read from the environment.
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | `GEOMAP_LOCATIONS_FILE` | `locations.txt` | Candidate location names, one per line |
//! | `GEOMAP_INITIAL_POINTS` | `10` | Size of the batch generated at startup |
//! | `GEOMAP_SEED` | unset | Seed for reproducible random points |

use std::path::PathBuf;

use thiserror::Error;

pub const LOCATIONS_FILE_VAR: &str = "GEOMAP_LOCATIONS_FILE";
pub const INITIAL_POINTS_VAR: &str = "GEOMAP_INITIAL_POINTS";
pub const SEED_VAR: &str = "GEOMAP_SEED";

const DEFAULT_LOCATIONS_FILE: &str = "locations.txt";
const DEFAULT_INITIAL_POINTS: usize = 10;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value for {key}: '{value}'")]
    InvalidValue { key: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// Path of the location-name list
    pub locations_file: PathBuf,
    /// Points generated at startup; clamped to capacity by the collection
    pub initial_points: usize,
    /// Fixed RNG seed, if reproducible output is wanted
    pub seed: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            locations_file: PathBuf::from(DEFAULT_LOCATIONS_FILE),
            initial_points: DEFAULT_INITIAL_POINTS,
            seed: None,
        }
    }
}

impl EngineConfig {
    /// Load `.env` (if present) and read the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        if let Err(e) = dotenvy::dotenv() {
            if !e.not_found() {
                tracing::warn!("Failed to load .env file: {}", e);
            }
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup. Unset or blank keys take defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let defaults = Self::default();

        let locations_file = read(LOCATIONS_FILE_VAR)
            .map(PathBuf::from)
            .unwrap_or(defaults.locations_file);
        let initial_points = match read(INITIAL_POINTS_VAR) {
            Some(value) => parse_value(INITIAL_POINTS_VAR, &value)?,
            None => defaults.initial_points,
        };
        let seed = match read(SEED_VAR) {
            Some(value) => Some(parse_value(SEED_VAR, &value)?),
            None => None,
        };

        Ok(Self {
            locations_file,
            initial_points,
            seed,
        })
    }
}

fn parse_value<T: std::str::FromStr>(key: &'static str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::InvalidValue {
        key,
        value: value.to_string(),
    })
}
