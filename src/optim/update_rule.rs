use serde::{Serialize, Deserialize};

/// Batch weight update applied once per training iteration.
///
/// Both variants move the bias weight (index 0, coefficient `-1`) by
/// `lr * Σ_j -error[j]`. They differ in how the feature weights are moved:
///
/// - `AllColumns` adds `lr * Σ_j Σ_l error[j] * x[j][l]` to *every* feature
///   weight, so all feature weights receive the same increment.
/// - `PerColumn` pairs weight `k` with its own column only:
///   `lr * Σ_j error[j] * x[j][k - 1]`, the textbook batch perceptron rule.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UpdateRule {
    #[default]
    AllColumns,
    PerColumn,
}

impl UpdateRule {
    /// Applies one batch update to `weights` in place.
    ///
    /// `weights[0]` is the bias; `weights[k]` belongs to column `k - 1` of
    /// every row in `inputs`. `errors[j]` is `desired[j] - current[j]`.
    /// Inputs are assumed validated by the caller.
    pub fn apply(
        &self,
        weights: &mut [f64],
        inputs: &[Vec<f64>],
        errors: &[f64],
        learning_rate: f64,
    ) {
        let bias_inc: f64 = errors.iter().map(|e| -e).sum();
        weights[0] += learning_rate * bias_inc;

        match self {
            UpdateRule::AllColumns => {
                let inc: f64 = inputs.iter().zip(errors.iter())
                    .map(|(row, e)| row.iter().map(|x| e * x).sum::<f64>())
                    .sum();
                for w in weights[1..].iter_mut() {
                    *w += learning_rate * inc;
                }
            }
            UpdateRule::PerColumn => {
                for (k, w) in weights[1..].iter_mut().enumerate() {
                    let inc: f64 = inputs.iter().zip(errors.iter())
                        .map(|(row, e)| e * row[k])
                        .sum();
                    *w += learning_rate * inc;
                }
            }
        }
    }
}
