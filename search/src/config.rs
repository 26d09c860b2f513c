use thiserror::Error;

use crate::MAX_DEPTH;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("max depth must be between 1 and {max}, got {0}", max = MAX_DEPTH)]
    Depth(u8),
    #[error("{name} must be a fraction in (0, 1], got {value}")]
    Fraction { name: &'static str, value: f64 },
    #[error("soft limit {soft} exceeds hard limit {hard}")]
    SoftAboveHard { soft: f64, hard: f64 },
}

/// Tunables for the alpha-beta engine.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchConfig {
    /// Deepest iteration to start.
    pub max_depth: u8,
    /// Share of the think time after which no new iteration is started.
    pub soft_limit: f64,
    /// Share of the think time after which a running iteration is abandoned.
    pub hard_limit: f64,
    /// Capture plies past the horizon before quiescence settles for the static score.
    pub quiescence_depth: u8,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_depth: 20,
            soft_limit: 0.80,
            hard_limit: 0.95,
            quiescence_depth: 10,
        }
    }
}

impl SearchConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_depth == 0 || self.max_depth > MAX_DEPTH {
            return Err(ConfigError::Depth(self.max_depth));
        }

        for (name, value) in [
            ("soft limit", self.soft_limit),
            ("hard limit", self.hard_limit),
        ] {
            if !(value > 0.0 && value <= 1.0) {
                return Err(ConfigError::Fraction { name, value });
            }
        }

        if self.soft_limit > self.hard_limit {
            return Err(ConfigError::SoftAboveHard {
                soft: self.soft_limit,
                hard: self.hard_limit,
            });
        }

        Ok(())
    }
}
