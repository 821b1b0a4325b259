use serde::Serialize;
use statrs::distribution::{ContinuousCDF, Normal};

use crate::error::{NumericError, Result};

/// Two-sided confidence interval around an empirical proportion.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ProportionInterval {
    pub estimate: f64,
    pub lower: f64,
    pub upper: f64,
    pub confidence: f64,
}

impl ProportionInterval {
    pub fn contains(&self, p: f64) -> bool {
        self.lower <= p && p <= self.upper
    }

    pub fn half_width(&self) -> f64 {
        (self.upper - self.lower) / 2.0
    }
}

/// Standard normal quantile `z` such that P(-z <= Z <= z) = `confidence`.
pub fn z_score(confidence: f64) -> Result<f64> {
    if !(confidence > 0.0 && confidence < 1.0) {
        return Err(NumericError::invalid(format!(
            "confidence must lie strictly between 0 and 1, got {}",
            confidence
        )));
    }
    let normal = Normal::new(0.0, 1.0).map_err(|e| NumericError::invalid(e.to_string()))?;
    Ok(normal.inverse_cdf(1.0 - (1.0 - confidence) / 2.0))
}

/// Normal-approximation (Wald) interval for `successes / trials`.
///
/// Bounds are clamped to [0, 1]. The interval collapses to a point when the
/// estimate is exactly 0 or 1.
///
/// # Arguments
///
/// * `successes` - Number of trials in which the event occurred.
/// * `trials` - Total number of trials; must be positive.
/// * `confidence` - Coverage level, e.g. `0.99`.
pub fn proportion_confidence_interval(
    successes: usize,
    trials: usize,
    confidence: f64,
) -> Result<ProportionInterval> {
    if trials == 0 {
        return Err(NumericError::invalid("trial count must be positive"));
    }
    if successes > trials {
        return Err(NumericError::invalid(format!(
            "{} successes out of {} trials",
            successes, trials
        )));
    }

    let z = z_score(confidence)?;
    let n = trials as f64;
    let p = successes as f64 / n;
    let margin = z * (p * (1.0 - p) / n).sqrt();

    Ok(ProportionInterval {
        estimate: p,
        lower: (p - margin).max(0.0),
        upper: (p + margin).min(1.0),
        confidence,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn z_for_common_levels() {
        assert!((z_score(0.95).unwrap() - 1.959964).abs() < 1e-4);
        assert!((z_score(0.99).unwrap() - 2.575829).abs() < 1e-4);
    }

    #[test]
    fn rejects_bad_confidence() {
        assert!(z_score(0.0).is_err());
        assert!(z_score(1.0).is_err());
        assert!(z_score(f64::NAN).is_err());
    }

    #[test]
    fn interval_brackets_estimate() {
        let ci = proportion_confidence_interval(1_667, 10_000, 0.99).unwrap();
        assert!(ci.lower < ci.estimate && ci.estimate < ci.upper);
        assert!(ci.half_width() < 0.011);
        assert!(ci.contains(1.0 / 6.0));
    }

    #[test]
    fn degenerate_proportions() {
        let ci = proportion_confidence_interval(0, 50, 0.95).unwrap();
        assert_eq!((ci.lower, ci.upper), (0.0, 0.0));
        assert!(proportion_confidence_interval(0, 0, 0.95).is_err());
        assert!(proportion_confidence_interval(6, 5, 0.95).is_err());
    }
}
