use serde::{Deserialize, Serialize};

use crate::error::{NumericError, Result};
use crate::probability::dice::DEFAULT_TRIALS;

/// Most decimal places an `f64` probability can meaningfully show.
pub const MAX_DECIMALS: usize = 17;

/// Parameters for the Monte-Carlo dice run.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct DiceConfig {
    pub trials: usize,
    /// Fixed RNG seed; `None` seeds from system entropy.
    pub seed: Option<u64>,
    /// Decimal places used when printing probabilities.
    pub decimals: usize,
    /// Coverage of the optional confidence interval.
    pub confidence: f64,
}

impl Default for DiceConfig {
    fn default() -> Self {
        Self {
            trials: DEFAULT_TRIALS,
            seed: None,
            decimals: 2,
            confidence: 0.99,
        }
    }
}

impl DiceConfig {
    pub fn validate(&self) -> Result<()> {
        if self.trials == 0 {
            return Err(NumericError::invalid("trials must be positive"));
        }
        if self.decimals > MAX_DECIMALS {
            return Err(NumericError::invalid(format!(
                "decimals must be at most {}, got {}",
                MAX_DECIMALS, self.decimals
            )));
        }
        if !(self.confidence > 0.0 && self.confidence < 1.0) {
            return Err(NumericError::invalid(format!(
                "confidence must lie strictly between 0 and 1, got {}",
                self.confidence
            )));
        }
        Ok(())
    }
}
