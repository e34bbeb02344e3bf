//! Engine configuration.
//!
//! The defaults reproduce the fixed constants of the reference demo. A JSON
//! document can override the reduction scale, the jackpot substituted for
//! unreported draws, and the game catalogue:
//!
//! ```json
//! {
//!   "scale": 97.0,
//!   "default_jackpot_millions": 50.0,
//!   "games": [
//!     { "name": "LOTTO_MAX", "ring": 50, "mains_count": 7, "bonus_ring": 50 }
//!   ]
//! }
//! ```

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::constants::{DEFAULT_JACKPOT_MILLIONS, DEFAULT_SCALE};
use crate::error::RingSeedError;
use crate::game::{builtin_games, GameConfig};

/// Configuration of a [`SeedEngine`](crate::SeedEngine) and its games.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Scale applied to the reduction denominator.
    pub scale: f64,
    /// Jackpot (millions) used when a draw reports none.
    pub default_jackpot_millions: f64,
    /// Known game variants.
    pub games: Vec<GameConfig>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            scale: DEFAULT_SCALE,
            default_jackpot_millions: DEFAULT_JACKPOT_MILLIONS,
            games: builtin_games(),
        }
    }
}

impl EngineConfig {
    /// Parses and validates a configuration from a JSON string.
    ///
    /// Missing fields take their default values.
    ///
    /// # Errors
    /// Returns [`RingSeedError::ConfigParse`] for malformed JSON (including
    /// invalid games) and [`RingSeedError::Configuration`] if the values
    /// violate the invariants checked by [`validate`](Self::validate).
    pub fn from_json_str(json: &str) -> Result<Self, RingSeedError> {
        let config: EngineConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a configuration file.
    ///
    /// # Errors
    /// Returns [`RingSeedError::ConfigIo`] if the file cannot be read, plus
    /// every error of [`from_json_str`](Self::from_json_str).
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, RingSeedError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| RingSeedError::ConfigIo {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        let config = Self::from_json_str(&json)?;
        debug!(
            path = %path.display(),
            games = config.games.len(),
            scale = config.scale,
            "Loaded engine configuration"
        );
        Ok(config)
    }

    /// Checks the engine-level invariants.
    ///
    /// # Errors
    /// Returns [`RingSeedError::Configuration`] if `scale` is not a finite
    /// positive number, the default jackpot is not finite and non-zero, the
    /// game list is empty, or two games share a name.
    pub fn validate(&self) -> Result<(), RingSeedError> {
        if !self.scale.is_finite() || self.scale <= 0.0 {
            return Err(RingSeedError::Configuration(format!(
                "scale must be a finite positive number, got {}",
                self.scale
            )));
        }
        if !self.default_jackpot_millions.is_finite() || self.default_jackpot_millions == 0.0 {
            return Err(RingSeedError::Configuration(format!(
                "default_jackpot_millions must be finite and non-zero, got {}",
                self.default_jackpot_millions
            )));
        }
        if self.games.is_empty() {
            return Err(RingSeedError::Configuration(
                "at least one game must be configured".into(),
            ));
        }
        let mut seen = HashSet::new();
        for game in &self.games {
            if !seen.insert(game.name()) {
                return Err(RingSeedError::Configuration(format!(
                    "duplicate game '{}'",
                    game.name()
                )));
            }
        }
        Ok(())
    }

    /// Looks up a configured game by name.
    ///
    /// # Errors
    /// Returns [`RingSeedError::Configuration`] if no game has that name.
    pub fn game(&self, name: &str) -> Result<&GameConfig, RingSeedError> {
        self.games
            .iter()
            .find(|g| g.name() == name)
            .ok_or_else(|| RingSeedError::Configuration(format!("unknown game '{}'", name)))
    }
}
