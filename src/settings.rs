//! Runner settings
//!
//! Read from an optional JSON file; missing fields take their defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_SEED, DEFAULT_STEP, FINISH_DELAY};
use crate::error::{Result, SimError};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Seed for coin phases and anything else random
    pub seed: u64,
    /// Seconds simulated per tick
    pub step: f64,
    /// Countdown a level runs after it is won or lost
    pub finish_delay: f64,
    /// Give up on a level after this many ticks
    pub max_ticks_per_level: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            step: DEFAULT_STEP,
            finish_delay: FINISH_DELAY,
            max_ticks_per_level: 3000,
        }
    }
}

impl Settings {
    pub fn from_json(json: &str) -> Result<Self> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()
    }

    /// Load settings from a file, falling back to defaults when it is unusable
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        let loaded = std::fs::read_to_string(path)
            .map_err(|source| SimError::Io {
                path: path.display().to_string(),
                source,
            })
            .and_then(|json| Self::from_json(&json));

        match loaded {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!("Using default settings: {e}");
                Self::default()
            }
        }
    }

    fn validate(self) -> Result<Self> {
        if !(self.step.is_finite() && self.step > 0.0) {
            return Err(SimError::InvalidSetting {
                field: "step",
                value: self.step.to_string(),
            });
        }
        if !self.finish_delay.is_finite() {
            return Err(SimError::InvalidSetting {
                field: "finish_delay",
                value: self.finish_delay.to_string(),
            });
        }
        Ok(self)
    }
}
