/// Simulator configuration — timer bounds, bootstrap delay, reset delay.
use serde::{Deserialize, Serialize};

/// Configuration for the event simulator loop.
///
/// Defaults reproduce the demo's observed constants: bootstrap at 1.5 s,
/// firings every 8–15 s, Good status restored 1 s after a Good event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulatorConfig {
    /// Delay before the fixed bootstrap entry is appended.
    pub bootstrap_delay_ms: u64,
    /// Inclusive lower bound of the re-arm interval.
    pub min_interval_ms: u64,
    /// Exclusive upper bound of the re-arm interval.
    pub max_interval_ms: u64,
    /// Delay before a Good-severity completion resets the global status.
    pub good_reset_ms: u64,
    /// Model identifier forwarded to the completion service.
    pub model: String,
    /// RNG seed for issue selection and interval choice.
    pub seed: u64,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            bootstrap_delay_ms: 1_500,
            min_interval_ms: 8_000,
            max_interval_ms: 15_000,
            good_reset_ms: 1_000,
            model: "signal-analyst-small".to_string(),
            seed: 42,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("interval bounds invalid: min {min} ms must be below max {max} ms")]
    IntervalBounds { min: u64, max: u64 },
}

impl SimulatorConfig {
    /// Check that the interval range is non-empty.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_interval_ms >= self.max_interval_ms {
            return Err(ConfigError::IntervalBounds {
                min: self.min_interval_ms,
                max: self.max_interval_ms,
            });
        }
        Ok(())
    }
}
