use std::io::Write;

use anyhow::{Context, Result};
use numeric_utils::probability::{conditional_probability, EventProbabilities};

/// Parse a `{"A_and_B": .., "B": ..}` mapping.
pub fn parse_events(json: &str) -> Result<EventProbabilities> {
    serde_json::from_str(json).with_context(|| format!("Failed to parse events mapping: {}", json))
}

pub fn run_conditional<W: Write>(events: &EventProbabilities, out: &mut W) -> Result<f64> {
    let p = conditional_probability(events)?;
    writeln!(
        out,
        "Conditional probability of events - {} is {:.4}",
        serde_json::to_string(events)?,
        p
    )?;
    Ok(p)
}
