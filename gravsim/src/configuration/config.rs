//! Configuration record for saving and reloading a body set.
//!
//! This module defines a thin, `serde` representation of everything needed
//! to rebuild a simulation:
//!
//! - [`BodyConfig`]     – initial state for each body
//! - [`ScenarioConfig`] – top-level record with the global settings
//!
//! # YAML format
//!
//! ```yaml
//! bodies:
//!   - x: -50.0
//!     y: 0.0
//!     vx: 0.0
//!     vy: -5.0
//!     mass: 50.0
//!     color: [255, 0, 0]
//!     max_trail_length: 50  # optional, default 50
//! time_scale: 1.0           # optional, default 1.0
//! show_trails: true         # optional, default true
//! gravity_strength: 1.0     # optional, default 1.0
//! collision_enabled: true   # optional, default true
//! ```
//!
//! Records are validated before they touch an engine; see
//! [`ScenarioConfig::validate`].

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::simulation::states::{Rgb, DEFAULT_TRAIL_LENGTH};

fn default_trail_length() -> usize {
    DEFAULT_TRAIL_LENGTH
}

fn default_one() -> f64 {
    1.0
}

fn default_true() -> bool {
    true
}

/// Configuration for a single body's state
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct BodyConfig {
    pub x: f64, // position
    pub y: f64,
    pub vx: f64, // velocity
    pub vy: f64,
    pub mass: f64, // must be positive
    pub color: Rgb,
    #[serde(default = "default_trail_length")]
    pub max_trail_length: usize,
}

/// Top-level record: every body plus the global settings
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ScenarioConfig {
    pub bodies: Vec<BodyConfig>,
    #[serde(default = "default_one")]
    pub time_scale: f64,
    #[serde(default = "default_true")]
    pub show_trails: bool,
    #[serde(default = "default_one")]
    pub gravity_strength: f64,
    #[serde(default = "default_true")]
    pub collision_enabled: bool,
}

impl ScenarioConfig {
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        let cfg: ScenarioConfig = serde_yaml::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn to_yaml_string(&self) -> Result<String, ConfigError> {
        Ok(serde_yaml::to_string(self)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let reader = BufReader::new(File::open(path)?);
        let cfg: ScenarioConfig = serde_yaml::from_reader(reader)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let writer = BufWriter::new(File::create(path)?);
        serde_yaml::to_writer(writer, self)?;
        Ok(())
    }

    /// Reject records that would put invalid values into the force law
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.time_scale.is_finite() || self.time_scale < 0.0 {
            return Err(ConfigError::InvalidParameter {
                name: "time_scale",
                value: self.time_scale,
            });
        }
        if !self.gravity_strength.is_finite() || self.gravity_strength < 0.0 {
            return Err(ConfigError::InvalidParameter {
                name: "gravity_strength",
                value: self.gravity_strength,
            });
        }

        for (index, b) in self.bodies.iter().enumerate() {
            if !(b.mass.is_finite() && b.mass > 0.0) {
                return Err(ConfigError::InvalidBody {
                    index,
                    reason: format!("mass must be positive, got {}", b.mass),
                });
            }
            if ![b.x, b.y, b.vx, b.vy].iter().all(|c| c.is_finite()) {
                return Err(ConfigError::InvalidBody {
                    index,
                    reason: "position and velocity must be finite".to_string(),
                });
            }
        }
        Ok(())
    }
}
