//! Probability routines: a Monte-Carlo dice estimator, Bayes' rule for a
//! keyword spam filter and a plain conditional probability.
pub mod bayes;
pub mod conditional;
pub mod dice;

pub use bayes::{spam_given_keyword, BayesResult, SpamCounts};
pub use conditional::{conditional_probability, EventProbabilities};
pub use dice::{create_rng, estimate_dice_events, exact_probability, DiceEstimate, DiceEvent};
