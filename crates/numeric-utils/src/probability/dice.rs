//! Monte-Carlo estimation of two-dice sum events.
//!
//! Each trial rolls two independent fair six-sided dice and records whether
//! the sum hits one of the tracked events. Results vary between runs unless
//! the random source is seeded through [`create_rng`].
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::error::{NumericError, Result};

pub const DEFAULT_TRIALS: usize = 10_000;
pub const DIE_SIDES: u32 = 6;

/// Events tracked per trial.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiceEvent {
    SumSeven,
    SumTwo,
    SumAboveTen,
}

impl DiceEvent {
    pub const ALL: [DiceEvent; 3] = [DiceEvent::SumSeven, DiceEvent::SumTwo, DiceEvent::SumAboveTen];

    pub fn matches(self, sum: u32) -> bool {
        match self {
            DiceEvent::SumSeven => sum == 7,
            DiceEvent::SumTwo => sum == 2,
            DiceEvent::SumAboveTen => sum > 10,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DiceEvent::SumSeven => "Sum = 7",
            DiceEvent::SumTwo => "Sum = 2",
            DiceEvent::SumAboveTen => "Sum > 10",
        }
    }
}

/// Event counts gathered over `trials` rolls.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DiceEstimate {
    pub trials: usize,
    pub sum_seven: usize,
    pub sum_two: usize,
    pub sum_above_ten: usize,
}

impl DiceEstimate {
    pub fn count(&self, event: DiceEvent) -> usize {
        match event {
            DiceEvent::SumSeven => self.sum_seven,
            DiceEvent::SumTwo => self.sum_two,
            DiceEvent::SumAboveTen => self.sum_above_ten,
        }
    }

    /// Empirical probability `count / trials`.
    pub fn probability(&self, event: DiceEvent) -> f64 {
        self.count(event) as f64 / self.trials as f64
    }
}

/// Seeded `StdRng` when a seed is given, entropy-seeded otherwise.
pub fn create_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

pub fn roll_die<R: Rng>(rng: &mut R) -> u32 {
    rng.gen_range(1..=DIE_SIDES)
}

/// Roll two dice `trials` times and count the tracked events.
pub fn estimate_dice_events<R: Rng>(trials: usize, rng: &mut R) -> Result<DiceEstimate> {
    if trials == 0 {
        return Err(NumericError::invalid("trial count must be positive"));
    }

    let mut estimate = DiceEstimate {
        trials,
        sum_seven: 0,
        sum_two: 0,
        sum_above_ten: 0,
    };

    for _ in 0..trials {
        let sum = roll_die(rng) + roll_die(rng);
        if DiceEvent::SumSeven.matches(sum) {
            estimate.sum_seven += 1;
        }
        if DiceEvent::SumTwo.matches(sum) {
            estimate.sum_two += 1;
        }
        if DiceEvent::SumAboveTen.matches(sum) {
            estimate.sum_above_ten += 1;
        }
    }

    log::debug!(
        "Rolled {} trials: sum=7 x{}, sum=2 x{}, sum>10 x{}",
        trials,
        estimate.sum_seven,
        estimate.sum_two,
        estimate.sum_above_ten
    );

    Ok(estimate)
}

/// Exact probability of `event`, by enumerating all 36 outcomes.
pub fn exact_probability(event: DiceEvent) -> f64 {
    let mut hits = 0u32;
    for a in 1..=DIE_SIDES {
        for b in 1..=DIE_SIDES {
            if event.matches(a + b) {
                hits += 1;
            }
        }
    }
    hits as f64 / (DIE_SIDES * DIE_SIDES) as f64
}
