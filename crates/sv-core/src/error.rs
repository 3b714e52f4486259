use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum EvalError {
    /// Constants record is unusable; raised at construction, never mid-sweep.
    InvalidConfiguration(String),
    /// One sample point violates a formula's domain. Local to that point.
    Domain { value: f64, reason: &'static str },
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EvalError::InvalidConfiguration(msg) => write!(f, "invalid configuration: {msg}"),
            EvalError::Domain { value, reason } => {
                write!(f, "domain error at x = {value}: {reason}")
            }
        }
    }
}

impl std::error::Error for EvalError {}

pub type Result<T> = std::result::Result<T, EvalError>;
