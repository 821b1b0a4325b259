pub mod bayes;
pub mod conditional;
pub mod dice;
