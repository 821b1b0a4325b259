use serde::{Deserialize, Serialize};

use crate::error::{NumericError, Result};

/// Joint and marginal probabilities, keyed `A_and_B` and `B` when
/// (de)serialized.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct EventProbabilities {
    #[serde(rename = "A_and_B")]
    pub a_and_b: f64,
    #[serde(rename = "B")]
    pub b: f64,
}

impl EventProbabilities {
    pub fn new(a_and_b: f64, b: f64) -> Self {
        Self { a_and_b, b }
    }
}

fn check_probability(name: &str, p: f64) -> Result<()> {
    if !(0.0..=1.0).contains(&p) {
        return Err(NumericError::invalid(format!(
            "{} must be a probability in [0, 1], got {}",
            name, p
        )));
    }
    Ok(())
}

/// P(A|B) = P(A and B) / P(B).
pub fn conditional_probability(events: &EventProbabilities) -> Result<f64> {
    check_probability("P(A and B)", events.a_and_b)?;
    check_probability("P(B)", events.b)?;
    if events.b == 0.0 {
        return Err(NumericError::invalid(
            "P(B) cannot be zero for conditional probability",
        ));
    }
    if events.a_and_b > events.b {
        return Err(NumericError::invalid(format!(
            "P(A and B) = {} cannot exceed P(B) = {}",
            events.a_and_b, events.b
        )));
    }
    Ok(events.a_and_b / events.b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_value() {
        let p = conditional_probability(&EventProbabilities::new(0.12, 0.4)).unwrap();
        assert!((p - 0.3).abs() < 1e-12);
    }

    #[test]
    fn zero_marginal() {
        let err = conditional_probability(&EventProbabilities::new(0.0, 0.0)).unwrap_err();
        assert!(matches!(err, NumericError::InvalidArgument(_)));
    }

    #[test]
    fn out_of_range_inputs() {
        for events in [
            EventProbabilities::new(-0.1, 0.5),
            EventProbabilities::new(0.2, 1.5),
            EventProbabilities::new(0.6, 0.5),
            EventProbabilities::new(f64::NAN, 0.5),
        ] {
            assert!(conditional_probability(&events).is_err());
        }
    }
}
