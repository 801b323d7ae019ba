use serde::{Deserialize, Serialize};
use std::f64::consts::E;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Activation {
    /// `f(x) = 1 / (1 + (0 - x))`, i.e. `1 / (1 - x)`.
    ///
    /// This is NOT the logistic sigmoid.  It is singular at `x = 1` (division
    /// by zero, yielding `Inf` under IEEE 754), negative for `x > 1`, and
    /// unbounded as `x` approaches 1 from either side.  It is the default
    /// because the network's documented behavior depends on it; see
    /// `Logistic` for the conventional alternative.
    Reciprocal,
    /// The conventional logistic sigmoid `1 / (1 + e^-x)`.
    ///
    /// Opting in changes the trained behavior of the network relative to the
    /// default.
    Logistic,
}

impl Activation {
    /// Element-wise activation.  No singularity guard: `Reciprocal` at
    /// `x = 1` returns `Inf` and the caller's arithmetic carries it.
    pub fn function(&self, x: f64) -> f64 {
        match self {
            Activation::Reciprocal => 1.0 / (1.0 + (0.0 - x)),
            Activation::Logistic => 1.0 / (1.0 + E.powf(-x)),
        }
    }
}

impl Default for Activation {
    fn default() -> Self {
        Activation::Reciprocal
    }
}
