//! Engine configuration.
//!
//! Everything has a default matching the stock game: 1000 synthesis
//! attempts, 3 to 9 filled cells per random board, 5 challenge boards.
//! A config can be loaded from TOML; missing keys fall back to defaults.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::grid::CELL_COUNT;

/// Configuration problems.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Example synthesis parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SynthesisConfig {
    /// Random boards tried before giving up on a quota.
    pub max_attempts: u32,

    /// Fewest filled cells on a random board.
    pub min_fill: usize,

    /// Most filled cells on a random board (at most 9).
    pub max_fill: usize,
}

impl Default for SynthesisConfig {
    fn default() -> Self {
        Self {
            max_attempts: 1000,
            min_fill: 3,
            max_fill: CELL_COUNT,
        }
    }
}

impl SynthesisConfig {
    /// Reject values the synthesizer cannot honour.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_attempts == 0 {
            return Err(ConfigError::Invalid("max_attempts must be positive".into()));
        }
        if self.max_fill > CELL_COUNT {
            return Err(ConfigError::Invalid(format!(
                "max_fill {} exceeds the {CELL_COUNT} cells of a board",
                self.max_fill
            )));
        }
        if self.min_fill > self.max_fill {
            return Err(ConfigError::Invalid(format!(
                "min_fill {} is greater than max_fill {}",
                self.min_fill, self.max_fill
            )));
        }
        Ok(())
    }
}

/// Top-level engine configuration.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct ZendoConfig {
    /// Fixed seed for replay. Entropy is used when absent.
    pub seed: Option<u64>,

    /// Example synthesis parameters.
    pub synthesis: SynthesisConfig,

    /// Boards dealt per challenge (at least 2, one of each side).
    pub challenge_count: usize,
}

impl Default for ZendoConfig {
    fn default() -> Self {
        Self {
            seed: None,
            synthesis: SynthesisConfig::default(),
            challenge_count: 5,
        }
    }
}

impl ZendoConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml(source: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Use a fixed seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the synthesis attempt cap.
    #[must_use]
    pub fn with_max_attempts(mut self, attempts: u32) -> Self {
        self.synthesis.max_attempts = attempts;
        self
    }

    /// Set the number of challenge boards.
    #[must_use]
    pub fn with_challenge_count(mut self, count: usize) -> Self {
        self.challenge_count = count;
        self
    }

    /// Reject values the synthesizer or the challenge deck cannot honour.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.synthesis.validate()?;
        if self.challenge_count < 2 {
            return Err(ConfigError::Invalid(format!(
                "challenge_count {} leaves no room for one board of each side",
                self.challenge_count
            )));
        }
        Ok(())
    }
}
