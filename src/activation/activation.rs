use serde::{Serialize, Deserialize};
use std::f64::consts::E;

/// Thresholding applied to the raw weighted sum.
///
/// Training and inference default to `Step`; the other variants are kept
/// pluggable so a caller can swap the output mapping without touching the
/// update rule.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivationFunction {
    /// `1.0` for `x >= 0`, else `0.0`. The lower bound is closed.
    #[default]
    Step,
    /// `-1.0`, `0.0` or `1.0` following the sign of `x`.
    Sign,
    /// `1 / (1 + e^-x)`.
    Sigmoid,
}

impl ActivationFunction {
    pub fn function(&self, x: f64) -> f64 {
        match self {
            ActivationFunction::Step => if x >= 0.0 { 1.0 } else { 0.0 },
            ActivationFunction::Sign => {
                if x > 0.0 { 1.0 } else if x < 0.0 { -1.0 } else { 0.0 }
            }
            ActivationFunction::Sigmoid => 1.0 / (1.0 + E.powf(-x)),
        }
    }
}
