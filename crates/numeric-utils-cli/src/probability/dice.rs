//! Monte-Carlo dice runner.
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use numeric_utils::config::DiceConfig;
use numeric_utils::probability::{create_rng, estimate_dice_events, exact_probability, DiceEstimate, DiceEvent};
use numeric_utils::stats::proportion_confidence_interval;

/// Load a dice configuration from a JSON file.
pub fn load_dice_config<P: AsRef<Path>>(path: P) -> Result<DiceConfig> {
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config: {}", path.as_ref().display()))?;
    let config: DiceConfig = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse config: {}", path.as_ref().display()))?;
    Ok(config)
}

/// Run the estimator and print one line per tracked event.
///
/// With `show_interval`, each line also carries the confidence interval
/// and the exact probability.
pub fn run_dice<W: Write>(config: &DiceConfig, show_interval: bool, out: &mut W) -> Result<DiceEstimate> {
    config.validate()?;

    let mut rng = create_rng(config.seed);
    let estimate = estimate_dice_events(config.trials, &mut rng)?;

    let prec = config.decimals;
    for event in DiceEvent::ALL {
        let p = estimate.probability(event);
        if show_interval {
            let ci = proportion_confidence_interval(estimate.count(event), estimate.trials, config.confidence)?;
            writeln!(
                out,
                "P({}): {:.*} ({:.0}% CI {:.*}..{:.*}, exact {:.*})",
                event.label(),
                prec,
                p,
                config.confidence * 100.0,
                prec,
                ci.lower,
                prec,
                ci.upper,
                prec,
                exact_probability(event)
            )?;
        } else {
            writeln!(out, "P({}): {:.*}", event.label(), prec, p)?;
        }
    }

    Ok(estimate)
}
