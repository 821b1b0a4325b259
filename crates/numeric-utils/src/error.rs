use std::error::Error;
use std::fmt;

/// Error type shared by every numeric routine in the crate.
#[derive(Debug, Clone, PartialEq)]
pub enum NumericError {
    /// Inputs violate a shape or range precondition.
    InvalidArgument(String),
    /// A denominator was zero; carries the name of the zero quantity.
    DivisionByZero(&'static str),
    /// Text could not be parsed as a number.
    ParseError { input: String, reason: String },
}

impl NumericError {
    pub fn invalid<S: Into<String>>(msg: S) -> Self {
        NumericError::InvalidArgument(msg.into())
    }

    pub fn parse<S: Into<String>, R: fmt::Display>(input: S, reason: R) -> Self {
        NumericError::ParseError {
            input: input.into(),
            reason: reason.to_string(),
        }
    }
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            NumericError::InvalidArgument(msg) => write!(f, "Invalid argument: {}", msg),
            NumericError::DivisionByZero(what) => {
                write!(f, "Division by zero: {} must be non-zero", what)
            }
            NumericError::ParseError { input, reason } => {
                write!(f, "Could not parse {:?} as a number: {}", input, reason)
            }
        }
    }
}

impl Error for NumericError {}

pub type Result<T> = std::result::Result<T, NumericError>;
