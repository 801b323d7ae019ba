use std::error::Error;
use std::fmt;

/// Errors reported at the library's fallible boundaries.
///
/// The network arithmetic itself is deliberately unguarded: weights are
/// unbounded and the reciprocal activation is singular at `x = 1`, so
/// overflow propagates as IEEE 754 `Inf`/`NaN` rather than an error.
/// Only shape mismatches fail fast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NetworkError {
    /// The input slice did not match the input layer's neuron count.
    InvalidInputLength { expected: usize, actual: usize },
    /// The target slice did not match the output layer's neuron count.
    InvalidTargetLength { expected: usize, actual: usize },
}

impl fmt::Display for NetworkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NetworkError::InvalidInputLength { expected, actual } => {
                write!(f, "invalid input length: expected {expected}, got {actual}")
            }
            NetworkError::InvalidTargetLength { expected, actual } => {
                write!(f, "invalid target length: expected {expected}, got {actual}")
            }
        }
    }
}

impl Error for NetworkError {}
